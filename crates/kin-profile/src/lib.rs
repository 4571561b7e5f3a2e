//! `kin-profile` — two-segment kinematic profiles: solve, resolve, integrate.
//!
//! A [`Profile`] is an open-loop motion plan along one axis: accelerate under
//! `a0`, then under `a1`, so that `distance` is covered with final velocity
//! `v1`.  Resolution finds the unique feasible split between the two phases;
//! integration evaluates cumulative distance and instantaneous velocity at
//! any elapsed time, coasting at `v1` past the plan's end.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`solver`]    | `resolve_time` — smallest non-negative root finder      |
//! | [`phase`]     | `ProfileRequest`, `Profile`, `resolve_phase`            |
//! | [`integrate`] | `IntegrationResult`, `ProfileCell`, regime selection    |
//! | [`error`]     | `Unreachable`, `SolveResult<T>`                         |
//!
//! # Failure is data
//!
//! Some inputs simply cannot cover the requested distance (moving away from
//! the target, or an acceleration pair with no feasible split).  Those cases
//! surface as [`Unreachable`] through ordinary `Result`s; nothing in this
//! crate panics on caller input.
//!
//! # Quick-start
//!
//! ```rust
//! use kin_profile::{ProfileRequest, resolve_phase};
//!
//! let profile = resolve_phase(&ProfileRequest {
//!     distance: 100.0,
//!     v0: 50.0,
//!     v1: 10.0,
//!     a0: 200.0,
//!     a1: -100.0,
//! })?;
//!
//! let mid = profile.integrate(profile.time / 2.0);
//! assert!(mid.distance > 0.0 && mid.distance < 100.0);
//! # Ok::<(), kin_profile::Unreachable>(())
//! ```

pub mod error;
pub mod integrate;
pub mod phase;
pub mod solver;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SolveResult, Unreachable};
pub use integrate::{IntegrationResult, ProfileCell};
pub use phase::{Profile, ProfileRequest, resolve_phase};
pub use solver::{resolve_time, resolve_time_with};
