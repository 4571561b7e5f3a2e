//! Unit tests for kin-core primitives.

#[cfg(test)]
mod geom {
    use crate::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn add_assign() {
        let mut v = Vec2::ZERO;
        v += Vec2::new(0.5, 0.25);
        v += Vec2::new(0.5, 0.25);
        assert_eq!(v, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn length() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec2::ZERO.length(), 0.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn display() {
        assert_eq!(Vec2::new(1.0, -2.5).to_string(), "(1.000, -2.500)");
    }
}

#[cfg(test)]
mod ids {
    use crate::MobileId;

    #[test]
    fn index_and_ordering() {
        assert_eq!(MobileId(42).index(), 42);
        assert!(MobileId(0) < MobileId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(MobileId::INVALID.0, u32::MAX);
        assert_eq!(MobileId::default(), MobileId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(MobileId(7).to_string(), "MobileId(7)");
    }
}

#[cfg(test)]
mod clock {
    use crate::{DELTA_TIME, FrameClock, StageConfig};

    #[test]
    fn advance_accumulates() {
        let mut clock = FrameClock::new(0.5);
        clock.advance();
        clock.advance();
        assert_eq!(clock.frame, 2);
        assert!((clock.time - 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_is_sixty_hertz() {
        let clock = FrameClock::default();
        assert_eq!(clock.delta, DELTA_TIME);
        assert_eq!(clock.frame, 0);
    }

    #[test]
    fn frames_for_secs_rounds_up() {
        let clock = FrameClock::new(1.0 / 60.0);
        assert_eq!(clock.frames_for_secs(1.0), 60);
        // partial frame rounds up
        assert_eq!(clock.frames_for_secs(0.01), 1);
    }

    #[test]
    fn config_make_clock() {
        let cfg = StageConfig { delta_time: 0.25 };
        assert_eq!(cfg.make_clock().delta, 0.25);
    }
}

#[cfg(test)]
mod num {
    use crate::{EPSILON, epsilon_round};

    #[test]
    fn rounds_tiny_values_to_zero() {
        assert_eq!(epsilon_round(1e-15), 0.0);
        assert_eq!(epsilon_round(-1e-15), 0.0);
    }

    #[test]
    fn leaves_larger_values_alone() {
        assert_eq!(epsilon_round(1e-13), 1e-13);
        assert_eq!(epsilon_round(-2.0), -2.0);
        assert_eq!(epsilon_round(EPSILON), EPSILON);
    }
}
