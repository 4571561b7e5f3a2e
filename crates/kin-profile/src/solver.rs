//! Quadratic kinematics solver.
//!
//! Answers one question: starting at `velocity` under constant
//! `acceleration`, after how long is `distance` covered?  That is the
//! smallest non-negative root of
//!
//! ```text
//! velocity · t + acceleration · t² / 2 = distance
//! ```
//!
//! # Discriminant snapping
//!
//! Near the tangency point — the target distance exactly at the vertex of
//! the parabola — rounding error can push a mathematically-zero discriminant
//! slightly negative, wrongly signaling unreachability.  Discriminants with
//! magnitude below `epsilon` are snapped to exactly zero: a small, bounded
//! inaccuracy bought for robustness.

use kin_core::DISCRIMINANT_EPSILON;

use crate::{SolveResult, Unreachable};

/// Smallest non-negative time at which `distance` is covered, using the
/// default discriminant epsilon ([`DISCRIMINANT_EPSILON`]).
#[inline]
pub fn resolve_time(distance: f64, velocity: f64, acceleration: f64) -> SolveResult<f64> {
    resolve_time_with(distance, velocity, acceleration, DISCRIMINANT_EPSILON)
}

/// Smallest non-negative time at which `distance` is covered, with an
/// explicit tolerance for the near-zero discriminant snap.
///
/// Returns [`Unreachable`] when the distance is never reached: moving away
/// from the target, stationary with no acceleration, or decelerating to a
/// stop short of it.
pub fn resolve_time_with(
    distance:     f64,
    velocity:     f64,
    acceleration: f64,
    epsilon:      f64,
) -> SolveResult<f64> {
    if acceleration == 0.0 {
        // Linear case.  A zero velocity yields ±inf or NaN here; both fail
        // the finite-and-non-negative check below.
        let t = distance / velocity;
        return if t.is_finite() && t >= 0.0 { Ok(t) } else { Err(Unreachable) };
    }

    // acceleration/2 · t² + velocity · t − distance = 0
    let mut discriminant = velocity * velocity + 2.0 * acceleration * distance;

    if discriminant.abs() < epsilon {
        discriminant = 0.0;
    }

    if discriminant < 0.0 {
        return Err(Unreachable);
    }

    let sqrt = discriminant.sqrt();

    let t1 = (-velocity + sqrt) / acceleration;
    let t2 = (-velocity - sqrt) / acceleration;

    // First non-negative root, t1 preferred.
    if t1 >= 0.0 {
        Ok(t1)
    } else if t2 >= 0.0 {
        Ok(t2)
    } else {
        Err(Unreachable)
    }
}
