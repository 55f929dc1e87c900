//! Unit tests for dd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, RequestId};

    #[test]
    fn index_roundtrip() {
        let id = ElevatorId(4);
        assert_eq!(id.index(), 4);
        assert_eq!(ElevatorId::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn elevator_id_overflow_rejected() {
        assert!(ElevatorId::try_from(70_000usize).is_err());
    }

    #[test]
    fn ordering() {
        assert!(ElevatorId(0) < ElevatorId(1));
        assert!(RequestId(100) > RequestId(99));
    }

    #[test]
    fn display() {
        assert_eq!(RequestId(7).to_string(), "RequestId(7)");
    }
}

#[cfg(test)]
mod floor {
    use crate::Floor;

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(3).distance(Floor(8)), 5);
        assert_eq!(Floor(8).distance(Floor(3)), 5);
        assert_eq!(Floor(4).distance(Floor(4)), 0);
    }

    #[test]
    fn step_toward_moves_one_floor() {
        assert_eq!(Floor(3).step_toward(Floor(8)), Floor(4));
        assert_eq!(Floor(3).step_toward(Floor(1)), Floor(2));
        assert_eq!(Floor(3).step_toward(Floor(3)), Floor(3));
    }

    #[test]
    fn between_either_direction() {
        assert!(Floor(5).is_between(Floor(4), Floor(6)));
        assert!(Floor(5).is_between(Floor(8), Floor(2)));
        assert!(Floor(4).is_between(Floor(4), Floor(6)));
        assert!(!Floor(7).is_between(Floor(4), Floor(6)));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(12) - Tick(12), 0u64);
    }

    #[test]
    fn clock_advances_one_tick() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick(0));
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn display() {
        let clock = SimClock { current_tick: Tick(9) };
        assert_eq!(clock.to_string(), "T9");
    }
}

#[cfg(test)]
mod config {
    use crate::{BuildingConfig, DdError};

    fn cfg(floors: u32, elevators: u32, capacity: u32) -> BuildingConfig {
        BuildingConfig {
            floor_count:    floors,
            elevator_count: elevators,
            capacity,
            max_ticks:      None,
        }
    }

    #[test]
    fn default_is_valid() {
        assert!(BuildingConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_values_rejected() {
        assert!(matches!(cfg(0, 1, 1).validate(), Err(DdError::Config(_))));
        assert!(matches!(cfg(1, 0, 1).validate(), Err(DdError::Config(_))));
        assert!(matches!(cfg(1, 1, 0).validate(), Err(DdError::Config(_))));
    }

    #[test]
    fn single_floor_building_is_valid() {
        assert!(cfg(1, 1, 1).validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000u32), b.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn children_are_deterministic() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let mut ca = a.child(1);
        let mut cb = b.child(1);
        assert_eq!(ca.gen_range(0..u64::MAX), cb.gen_range(0..u64::MAX));
    }

    #[test]
    fn gen_bool_clamps() {
        let mut r = SimRng::new(1);
        assert!(r.gen_bool(2.0));
        assert!(!r.gen_bool(-1.0));
    }
}
