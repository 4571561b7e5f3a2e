//! Phase profile resolution.
//!
//! # Derivation
//!
//! Phase one runs for `dt0` under `a0` from velocity `v0`, reaching
//! `vmax = v0 + a0·dt0` and covering `d0`.  Phase two runs under `a1` from
//! `vmax` down (or up) to `v1`, covering the remaining `d1 = distance − d0`.
//! Equating the summed distances to `distance` and eliminating everything
//! but `dt0` gives, with `k = 1 − a0/a1`:
//!
//! ```text
//! (a0·k/2) · dt0² + (v0·k) · dt0 + ((v1² − v0²)/(2·a1) − distance) = 0
//! ```
//!
//! Only the `+√discriminant` branch is physically meaningful (it is the
//! switch point reached first in time).  The resulting `dt0` is snapped to
//! exactly zero when within `1e-14`, suppressing cancellation drift for
//! exact-boundary inputs.
//!
//! # Validation
//!
//! The raw `+√` branch is not trusted blindly: a negative discriminant, a
//! negative or non-finite `dt0`, or an unreachable second phase all surface
//! as [`Unreachable`] — never as a partially populated profile.

use kin_core::epsilon_round;

use crate::solver::resolve_time;
use crate::{SolveResult, Unreachable};

// ── ProfileRequest ────────────────────────────────────────────────────────────

/// Inputs to profile resolution.
///
/// No constraint is enforced between the signs of `a0`/`a1`; resolution is
/// purely algebraic and reports [`Unreachable`] when no physically valid
/// split exists.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileRequest {
    /// Total displacement to cover.
    pub distance: f64,
    /// Initial velocity.
    pub v0: f64,
    /// Desired final velocity.
    pub v1: f64,
    /// Acceleration of phase one.
    pub a0: f64,
    /// Acceleration of phase two.
    pub a1: f64,
}

impl ProfileRequest {
    /// Request ending at rest (`v1 = 0`).
    pub fn to_rest(distance: f64, v0: f64, a0: f64, a1: f64) -> Self {
        Self { distance, v0, v1: 0.0, a0, a1 }
    }
}

// ── Profile ───────────────────────────────────────────────────────────────────

/// A resolved two-segment kinematic plan.  Immutable once computed.
///
/// Invariants: `d0 + d1 == distance`, `dt0 >= 0`, `dt1 >= 0`,
/// `time == dt0 + dt1`, and velocity is continuous across the phase
/// boundary (phase one ends at `vmax`, phase two starts at `vmax`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    /// Duration of phase one.
    pub dt0: f64,
    /// Duration of phase two.
    pub dt1: f64,
    /// Total duration (`dt0 + dt1`).
    pub time: f64,
    /// Distance covered in phase one.
    pub d0: f64,
    /// Distance covered in phase two (`distance − d0`).
    pub d1: f64,
    /// Velocity at the phase boundary (`v0 + a0·dt0`).
    pub vmax: f64,

    // Original request fields.
    pub distance: f64,
    pub v0: f64,
    pub v1: f64,
    pub a0: f64,
    pub a1: f64,
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Switch time between the phases: the `+√discriminant` root of the `dt0`
/// quadratic, with a linear fallback when the quadratic degenerates.
fn resolve_dt0(distance: f64, v0: f64, v1: f64, a0: f64, a1: f64) -> SolveResult<f64> {
    let k = 1.0 - a0 / a1;

    let a = a0 * k / 2.0;
    let b = v0 * k;
    let c = (v1 * v1 - v0 * v0) / a1 / 2.0 - distance;

    if a == 0.0 {
        // Degenerate quadratic (a0 == 0 or a0 == a1): solve b·dt0 + c = 0.
        if b == 0.0 {
            // Constant equation: consistent only when c vanishes, in which
            // case the phases switch immediately.
            return if epsilon_round(c) == 0.0 { Ok(0.0) } else { Err(Unreachable) };
        }
        return Ok(-c / b);
    }

    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return Err(Unreachable);
    }

    Ok((-b + discriminant.sqrt()) / a / 2.0)
}

/// Resolve a [`ProfileRequest`] into a [`Profile`].
///
/// Returns [`Unreachable`] when no physically valid split exists: the `dt0`
/// quadratic has no real root, the chosen branch yields a negative or
/// non-finite switch time, or the second phase cannot cover its remaining
/// distance.  A valid zero-duration profile (`time == 0`) is a distinct,
/// successful outcome.
pub fn resolve_phase(request: &ProfileRequest) -> SolveResult<Profile> {
    let ProfileRequest { distance, v0, v1, a0, a1 } = *request;

    let dt0 = epsilon_round(resolve_dt0(distance, v0, v1, a0, a1)?);

    if !dt0.is_finite() || dt0 < 0.0 {
        return Err(Unreachable);
    }

    let d0 = v0 * dt0 + a0 * dt0 * dt0 / 2.0;
    let vmax = v0 + a0 * dt0;
    let d1 = distance - d0;
    let dt1 = resolve_time(d1, vmax, a1)?;
    let time = dt0 + dt1;

    Ok(Profile { dt0, dt1, time, d0, d1, vmax, distance, v0, v1, a0, a1 })
}
