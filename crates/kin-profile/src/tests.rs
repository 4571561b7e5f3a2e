//! Unit tests for the solver, resolver, and integrator.

use crate::ProfileRequest;

const TOL: f64 = 1e-9;

/// The worked example: accelerate hard, then brake to 10 over 100 units.
fn symmetric_request() -> ProfileRequest {
    ProfileRequest { distance: 100.0, v0: 50.0, v1: 10.0, a0: 200.0, a1: -100.0 }
}

#[cfg(test)]
mod solver {
    use crate::{Unreachable, resolve_time, resolve_time_with};

    use super::TOL;

    #[test]
    fn linear_case() {
        assert_eq!(resolve_time(100.0, 50.0, 0.0), Ok(2.0));
    }

    #[test]
    fn linear_moving_away() {
        assert_eq!(resolve_time(100.0, -50.0, 0.0), Err(Unreachable));
    }

    #[test]
    fn linear_stationary() {
        // distance / 0 → +inf, rejected.
        assert_eq!(resolve_time(100.0, 0.0, 0.0), Err(Unreachable));
        // 0 / 0 → NaN, rejected.
        assert_eq!(resolve_time(0.0, 0.0, 0.0), Err(Unreachable));
    }

    #[test]
    fn accelerate_from_rest() {
        // 4t² = 100 → t = 5
        let t = resolve_time(100.0, 0.0, 8.0).unwrap();
        assert!((t - 5.0).abs() < TOL);
    }

    #[test]
    fn prefers_first_root() {
        // Moving away at −10 under +2: backs up, returns, crosses +25.
        let t = resolve_time(25.0, -10.0, 2.0).unwrap();
        assert!((t - (5.0 + 200.0f64.sqrt() / 2.0)).abs() < TOL, "got {t}");
    }

    #[test]
    fn falls_back_to_second_root() {
        // t1 < 0 ≤ t2: backward motion, backward acceleration, target at −10.
        let t = resolve_time(-10.0, -5.0, -2.0).unwrap();
        let covered = -5.0 * t - t * t;
        assert!((covered - -10.0).abs() < TOL);
    }

    #[test]
    fn both_roots_negative() {
        // Decelerating from 10 under −1 stops at +50; +60 is never reached.
        assert_eq!(resolve_time(60.0, 10.0, -1.0), Err(Unreachable));
    }

    #[test]
    fn tangency_stop_exactly_at_target() {
        // Stop distance v²/(2|a|) = 50 exactly: discriminant is zero.
        let t = resolve_time(50.0, 10.0, -1.0).unwrap();
        assert!((t - 10.0).abs() < TOL);
    }

    #[test]
    fn discriminant_snap_rescues_tangency_noise() {
        // Target a hair past the stop point: discriminant ≈ −2e-12.
        let distance = 0.5 + 1e-12;
        let t = resolve_time_with(distance, 1.0, -1.0, 1e-9).unwrap();
        assert!((t - 1.0).abs() < 1e-5);

        // A tighter epsilon leaves the noise in place and rejects.
        assert_eq!(resolve_time_with(distance, 1.0, -1.0, 1e-15), Err(Unreachable));
    }
}

#[cfg(test)]
mod phase {
    use crate::{ProfileRequest, Unreachable, resolve_phase, resolve_time};

    use super::{TOL, symmetric_request};

    #[test]
    fn symmetric_example() {
        let p = resolve_phase(&symmetric_request()).unwrap();

        assert!((p.d0 + p.d1 - 100.0).abs() < TOL);
        assert!((p.vmax - (50.0 + 200.0 * p.dt0)).abs() < TOL);
        assert!((p.time - (p.dt0 + p.dt1)).abs() < TOL);

        // vmax feeds phase two: re-solving the second segment independently
        // reproduces dt1.
        let dt1 = resolve_time(p.d1, p.vmax, -100.0).unwrap();
        assert!((dt1 - p.dt1).abs() < TOL);

        // End-of-plan velocity is the requested v1.
        assert!((p.vmax + p.a1 * p.dt1 - 10.0).abs() < 1e-6);
    }

    #[test]
    fn stationary_start_accelerate_decelerate() {
        let p = resolve_phase(&ProfileRequest {
            distance: 100.0,
            v0: 0.0,
            v1: 0.0,
            a0: 500.0,
            a1: -2000.0,
        })
        .unwrap();

        assert!(p.time > 0.0);
        assert!(p.vmax > 0.0);
        assert!((p.d0 + p.d1 - 100.0).abs() < TOL);
        assert!((p.d0 - 80.0).abs() < 1e-6);
        assert!((p.dt0 - 0.565685424).abs() < 1e-6);
    }

    #[test]
    fn zero_phase_one_acceleration_is_linear() {
        // a0 = 0: cruise at 20, then brake at −10.  Braking from 20 to 0
        // needs 20 units, so the cruise covers the other 80 in 4 s.
        let p = resolve_phase(&ProfileRequest {
            distance: 100.0,
            v0: 20.0,
            v1: 0.0,
            a0: 0.0,
            a1: -10.0,
        })
        .unwrap();

        assert!((p.dt0 - 4.0).abs() < TOL);
        assert!((p.d0 - 80.0).abs() < TOL);
        assert!((p.vmax - 20.0).abs() < TOL);
        assert!((p.dt1 - 2.0).abs() < TOL);
    }

    #[test]
    fn equal_accelerations_consistent_distance() {
        // a0 == a1 collapses the dt0 quadratic to a constant equation.
        // The single-segment brake from 30 to 10 at −50 covers exactly 8.
        let p = resolve_phase(&ProfileRequest {
            distance: 8.0,
            v0: 30.0,
            v1: 10.0,
            a0: -50.0,
            a1: -50.0,
        })
        .unwrap();

        assert_eq!(p.dt0, 0.0);
        assert!((p.dt1 - 0.4).abs() < TOL);
        assert!((p.time - 0.4).abs() < TOL);
    }

    #[test]
    fn equal_accelerations_inconsistent_distance() {
        let result = resolve_phase(&ProfileRequest {
            distance: 9.0,
            v0: 30.0,
            v1: 10.0,
            a0: -50.0,
            a1: -50.0,
        });
        assert_eq!(result, Err(Unreachable));
    }

    #[test]
    fn infeasible_split_is_unreachable() {
        // Ending at 10 from 50 under −100 needs 12 units in phase two alone;
        // a total distance of 2 has no real split.
        let result = resolve_phase(&ProfileRequest {
            distance: 2.0,
            v0: 50.0,
            v1: 10.0,
            a0: 200.0,
            a1: -100.0,
        });
        assert_eq!(result, Err(Unreachable));
    }

    #[test]
    fn zero_phase_two_acceleration_is_unreachable() {
        // a1 = 0 makes every quadratic coefficient non-finite; rejected
        // rather than returning a NaN-laden profile.
        let result = resolve_phase(&ProfileRequest {
            distance: 100.0,
            v0: 50.0,
            v1: 10.0,
            a0: 200.0,
            a1: 0.0,
        });
        assert_eq!(result, Err(Unreachable));
    }

    #[test]
    fn zero_duration_profile_is_valid() {
        // Nothing to cover and already at the target velocity: a valid
        // plan of total duration zero, distinct from Unreachable.
        let p = resolve_phase(&ProfileRequest {
            distance: 0.0,
            v0: 0.0,
            v1: 0.0,
            a0: 500.0,
            a1: -2000.0,
        })
        .unwrap();

        assert_eq!(p.time, 0.0);
        assert_eq!(p.d0, 0.0);
        assert_eq!(p.d1, 0.0);
    }

    #[test]
    fn to_rest_defaults_v1() {
        let r = ProfileRequest::to_rest(10.0, 5.0, 1.0, -1.0);
        assert_eq!(r.v1, 0.0);
    }
}

#[cfg(test)]
mod integrate {
    use crate::resolve_phase;

    use super::{TOL, symmetric_request};

    #[test]
    fn boundary_continuity() {
        let p = resolve_phase(&symmetric_request()).unwrap();

        // Phase-one evaluation at dt0 …
        let at_boundary = p.integrate(p.dt0);
        assert!((at_boundary.distance - p.d0).abs() < TOL);
        assert!((at_boundary.velocity - p.vmax).abs() < TOL);

        // … and approaching from either side converges to the same values.
        let before = p.integrate(p.dt0 - 1e-9);
        let after = p.integrate(p.dt0 + 1e-9);
        assert!((before.velocity - after.velocity).abs() < 1e-5);
        assert!((before.distance - after.distance).abs() < 1e-5);
    }

    #[test]
    fn total_distance_at_end() {
        let p = resolve_phase(&symmetric_request()).unwrap();
        let end = p.integrate(p.time);
        assert!((end.distance - p.distance).abs() < TOL);
        assert!((end.velocity - p.v1).abs() < TOL);
    }

    #[test]
    fn coast_holds_final_velocity() {
        let p = resolve_phase(&symmetric_request()).unwrap();
        for extra in [0.5, 1.0, 3.0] {
            let r = p.integrate(p.time + extra);
            assert_eq!(r.velocity, p.v1);
            assert!((r.distance - (p.distance + p.v1 * extra)).abs() < TOL);
        }
    }

    #[test]
    fn coast_distance_grows_linearly() {
        let p = resolve_phase(&symmetric_request()).unwrap();
        let a = p.integrate(p.time + 1.0);
        let b = p.integrate(p.time + 2.0);
        assert!((b.distance - a.distance - p.v1).abs() < TOL);
    }

    #[test]
    fn phase_one_closed_form() {
        let p = resolve_phase(&symmetric_request()).unwrap();
        let dt = p.dt0 / 2.0;
        let r = p.integrate(dt);
        assert!((r.distance - (50.0 * dt + 100.0 * dt * dt)).abs() < TOL);
        assert!((r.velocity - (50.0 + 200.0 * dt)).abs() < TOL);
    }

    #[test]
    fn phase_two_closed_form() {
        let p = resolve_phase(&symmetric_request()).unwrap();
        let offset = p.dt1 / 2.0;
        let r = p.integrate(p.dt0 + offset);
        let expect = p.d0 + p.vmax * offset - 50.0 * offset * offset;
        assert!((r.distance - expect).abs() < TOL);
        assert!((r.velocity - (p.vmax - 100.0 * offset)).abs() < TOL);
    }

    #[test]
    fn query_at_zero() {
        let p = resolve_phase(&symmetric_request()).unwrap();
        let r = p.integrate(0.0);
        assert_eq!(r.distance, 0.0);
        assert_eq!(r.velocity, 50.0);
    }
}

#[cfg(test)]
mod cell {
    use crate::{ProfileCell, ProfileRequest, Unreachable, resolve_phase};

    use super::symmetric_request;

    #[test]
    fn resolves_lazily_and_once() {
        let mut cell = ProfileCell::new(symmetric_request());
        assert!(!cell.is_resolved());

        let time = cell.profile().unwrap().time;
        assert!(cell.is_resolved());

        // Second access returns the same cached plan.
        assert_eq!(cell.profile().unwrap().time, time);
    }

    #[test]
    fn integrate_matches_eager_resolution() {
        let eager = resolve_phase(&symmetric_request()).unwrap();
        let mut cell = ProfileCell::new(symmetric_request());
        for dt in [0.0, 0.2, 0.7, eager.time, eager.time + 1.0] {
            assert_eq!(cell.integrate(dt).unwrap(), eager.integrate(dt));
        }
    }

    #[test]
    fn failed_resolution_is_cached() {
        let mut cell = ProfileCell::new(ProfileRequest {
            distance: 100.0,
            v0: -50.0,
            v1: 0.0,
            a0: 0.0,
            a1: 0.0,
        });
        assert_eq!(cell.integrate(1.0), Err(Unreachable));
        assert!(cell.is_resolved());
        assert_eq!(cell.integrate(1.0), Err(Unreachable));
    }

    #[test]
    fn from_profile_skips_resolution() {
        let p = resolve_phase(&symmetric_request()).unwrap();
        let mut cell = ProfileCell::from(p);
        assert!(cell.is_resolved());
        assert_eq!(cell.profile().unwrap(), &p);
    }
}
