//! Epsilon constants shared by the profile solver.

/// Cancellation threshold: values this close to zero are rounded to exactly
/// zero to suppress drift from floating-point cancellation (e.g. a phase
/// duration of `-3e-15` computed for an exact-boundary input).
pub const EPSILON: f64 = 1e-14;

/// Default tolerance for snapping a near-zero quadratic discriminant to zero.
///
/// At the tangency point (target distance equal to the parabola vertex) the
/// mathematically-zero discriminant can round slightly negative, wrongly
/// signaling unreachability.  Snapping trades a small, bounded inaccuracy for
/// robustness.
pub const DISCRIMINANT_EPSILON: f64 = 1e-9;

/// Snap `x` to exactly `0.0` when `|x| < EPSILON`.
#[inline]
pub fn epsilon_round(x: f64) -> f64 {
    if x.abs() < EPSILON { 0.0 } else { x }
}
