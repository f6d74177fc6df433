//! Unit tests for gc-core primitives.

#[cfg(test)]
mod ids {
    use crate::CarId;

    #[test]
    fn index_roundtrip() {
        let id = CarId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CarId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_insertion() {
        assert!(CarId(0) < CarId(1));
    }

    #[test]
    fn display() {
        assert_eq!(CarId(7).to_string(), "CarId(7)");
    }
}

#[cfg(test)]
mod heading {
    use crate::{GcError, Heading};

    #[test]
    fn right_cycles_clockwise() {
        assert_eq!(Heading::North.right(), Heading::East);
        assert_eq!(Heading::East.right(), Heading::South);
        assert_eq!(Heading::South.right(), Heading::West);
        assert_eq!(Heading::West.right(), Heading::North);
    }

    #[test]
    fn left_cycles_counter_clockwise() {
        assert_eq!(Heading::North.left(), Heading::West);
        assert_eq!(Heading::West.left(), Heading::South);
        assert_eq!(Heading::South.left(), Heading::East);
        assert_eq!(Heading::East.left(), Heading::North);
    }

    #[test]
    fn four_turns_return_home() {
        for h in Heading::CLOCKWISE {
            assert_eq!(h.right().right().right().right(), h);
            assert_eq!(h.left().left().left().left(), h);
            assert_eq!(h.left().right(), h);
        }
    }

    #[test]
    fn index_matches_table() {
        for (i, h) in Heading::CLOCKWISE.iter().enumerate() {
            assert_eq!(h.index(), i);
        }
    }

    #[test]
    fn parse_accepts_either_case() {
        assert_eq!("N".parse::<Heading>().unwrap(), Heading::North);
        assert_eq!("w".parse::<Heading>().unwrap(), Heading::West);
        assert_eq!(Heading::try_from('e').unwrap(), Heading::East);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!("X".parse::<Heading>(), Err(GcError::InvalidHeading("X".into())));
        assert_eq!("NE".parse::<Heading>(), Err(GcError::InvalidHeading("NE".into())));
    }

    #[test]
    fn empty_heading_reported_as_empty() {
        let err = "".parse::<Heading>().unwrap_err();
        assert_eq!(err, GcError::InvalidHeading(String::new()));
        assert_eq!(err.to_string(), r#"invalid heading "", expected one of N, E, S, W"#);
    }

    #[test]
    fn display_is_single_letter() {
        let s: String = Heading::CLOCKWISE.iter().map(|h| h.to_string()).collect();
        assert_eq!(s, "NESW");
    }
}

#[cfg(test)]
mod command {
    use crate::{Command, GcError};

    #[test]
    fn parse_queue() {
        let q = Command::parse_queue("FfLr").unwrap();
        assert_eq!(q, vec![Command::Forward, Command::Forward, Command::Left, Command::Right]);
        assert_eq!(Command::queue_to_string(&q), "FFLR");
    }

    #[test]
    fn empty_queue_is_valid() {
        assert!(Command::parse_queue("").unwrap().is_empty());
    }

    #[test]
    fn invalid_symbol_rejected() {
        assert_eq!(Command::parse_queue("FFX"), Err(GcError::InvalidCommand('X')));
    }
}

#[cfg(test)]
mod grid {
    use proptest::prelude::*;

    use crate::{GcError, GridBounds, GridPos, Heading};

    fn ten() -> GridBounds {
        GridBounds::new(10, 10).unwrap()
    }

    #[test]
    fn zero_sides_rejected() {
        assert_eq!(GridBounds::new(0, 5), Err(GcError::InvalidGrid { width: 0, height: 5 }));
        assert!(GridBounds::new(5, 0).is_err());
        assert!(GridBounds::new(u32::MAX, 5).is_err());
    }

    #[test]
    fn contains_is_half_open() {
        let b = ten();
        assert!(b.contains(GridPos::new(0, 0)));
        assert!(b.contains(GridPos::new(9, 9)));
        assert!(!b.contains(GridPos::new(10, 0)));
        assert!(!b.contains(GridPos::new(0, -1)));
    }

    #[test]
    fn forward_moves_one_cell() {
        let b = ten();
        let from = GridPos::new(5, 5);
        assert_eq!(b.step(from, Heading::North), GridPos::new(5, 6));
        assert_eq!(b.step(from, Heading::South), GridPos::new(5, 4));
        assert_eq!(b.step(from, Heading::East), GridPos::new(6, 5));
        assert_eq!(b.step(from, Heading::West), GridPos::new(4, 5));
    }

    #[test]
    fn forward_clamped_at_every_edge() {
        let b = ten();
        assert_eq!(b.step(GridPos::new(5, 9), Heading::North), GridPos::new(5, 9));
        assert_eq!(b.step(GridPos::new(5, 0), Heading::South), GridPos::new(5, 0));
        assert_eq!(b.step(GridPos::new(9, 5), Heading::East), GridPos::new(9, 5));
        assert_eq!(b.step(GridPos::new(0, 5), Heading::West), GridPos::new(0, 5));
    }

    #[test]
    fn single_cell_grid_never_moves() {
        let b = GridBounds::new(1, 1).unwrap();
        for h in Heading::CLOCKWISE {
            assert_eq!(b.step(GridPos::new(0, 0), h), GridPos::new(0, 0));
        }
    }

    #[test]
    fn display_formats() {
        assert_eq!(GridPos::new(2, 3).to_string(), "(2,3)");
        assert_eq!(ten().to_string(), "10 x 10");
    }

    fn arb_heading() -> impl Strategy<Value = Heading> {
        (0usize..4).prop_map(|i| Heading::CLOCKWISE[i])
    }

    proptest! {
        #[test]
        fn step_stays_in_bounds(
            w in 1u32..40,
            h in 1u32..40,
            x in 0i32..40,
            y in 0i32..40,
            heading in arb_heading(),
        ) {
            let b = GridBounds::new(w, h).unwrap();
            let from = GridPos::new(x % w as i32, y % h as i32);
            let to = b.step(from, heading);
            prop_assert!(b.contains(to));
        }

        #[test]
        fn step_moves_at_most_one_cell_along_heading(
            x in 0i32..10,
            y in 0i32..10,
            heading in arb_heading(),
        ) {
            let b = GridBounds::new(10, 10).unwrap();
            let from = GridPos::new(x, y);
            let to = b.step(from, heading);
            let (dx, dy) = heading.delta();
            let moved = (to.x - from.x, to.y - from.y);
            prop_assert!(moved == (dx, dy) || moved == (0, 0));
            prop_assert_eq!(moved == (0, 0), !b.contains(from.neighbour(heading)));
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_command_index() {
        assert_eq!(Tick::ZERO.command_index(), None);
        assert_eq!(Tick::FIRST.command_index(), Some(0));
        assert_eq!(Tick(5).command_index(), Some(4));
    }

    #[test]
    fn clock_advances_from_zero() {
        let mut clock = SimClock::new();
        assert!(!clock.started());
        assert_eq!(clock.advance(), Tick(1));
        assert_eq!(clock.advance(), Tick(2));
        assert!(clock.started());
    }

    #[test]
    fn config_validates_bounds() {
        assert!(SimConfig::new(0, 10).is_err());
        let cfg = SimConfig::new(10, 5).unwrap();
        assert_eq!(cfg.bounds.width(), 10);
        assert_eq!(cfg.bounds.height(), 5);
    }

    #[test]
    fn snapshot_interval() {
        let cfg = SimConfig::new(3, 3).unwrap().with_snapshot_interval(2);
        assert!(!cfg.snapshot_due(Tick(1)));
        assert!(cfg.snapshot_due(Tick(2)));
        let off = cfg.with_snapshot_interval(0);
        assert!(!off.snapshot_due(Tick(2)));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        assert_eq!(a.commands(16), b.commands(16));
        assert_eq!(a.heading(), b.heading());
        assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
    }

    #[test]
    fn commands_has_requested_length() {
        let mut r = SimRng::new(1);
        assert_eq!(r.commands(0).len(), 0);
        assert_eq!(r.commands(9).len(), 9);
    }
}
