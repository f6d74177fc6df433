//! Insertion-ordered car storage.
//!
//! Cars are stored in a plain `Vec<Car>` indexed by [`CarId`]; the id is the
//! insertion index, so iterating the vec visits cars in the order they were
//! added.  A side `HashMap` enforces unique names.

use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use gc_core::{CarId, GcError, GcResult, GridBounds};

use crate::{Car, CarSpec};

/// All cars of one simulation, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct CarRoster {
    cars:    Vec<Car>,
    by_name: HashMap<String, CarId>,
}

impl CarRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `spec` against `bounds` and append it.
    ///
    /// Fails on an empty name, a duplicate name, or an off-grid start.
    pub fn push(&mut self, spec: CarSpec, bounds: GridBounds) -> GcResult<CarId> {
        spec.validate(bounds)?;
        if self.by_name.contains_key(&spec.name) {
            return Err(GcError::DuplicateName(spec.name));
        }
        let id = CarId(self.cars.len() as u32);
        self.by_name.insert(spec.name.clone(), id);
        self.cars.push(Car::new(spec));
        Ok(id)
    }

    pub fn find(&self, name: &str) -> Option<CarId> {
        self.by_name.get(name).copied()
    }

    /// Cars in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Car> {
        self.cars.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Car> {
        self.cars.iter_mut()
    }

    /// `(CarId, &Car)` pairs in insertion order.
    pub fn enumerate(&self) -> impl Iterator<Item = (CarId, &Car)> {
        self.cars.iter().enumerate().map(|(i, c)| (CarId(i as u32), c))
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Length of the longest command queue (0 for an empty roster).
    pub fn max_commands(&self) -> usize {
        self.cars.iter().map(|c| c.commands().len()).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a CarRoster {
    type Item = &'a Car;
    type IntoIter = std::slice::Iter<'a, Car>;

    fn into_iter(self) -> Self::IntoIter {
        self.cars.iter()
    }
}

impl Index<CarId> for CarRoster {
    type Output = Car;

    #[inline]
    fn index(&self, id: CarId) -> &Car {
        &self.cars[id.index()]
    }
}

impl IndexMut<CarId> for CarRoster {
    #[inline]
    fn index_mut(&mut self, id: CarId) -> &mut Car {
        &mut self.cars[id.index()]
    }
}
