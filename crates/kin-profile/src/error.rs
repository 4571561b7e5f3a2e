//! Solver error type.
//!
//! There is exactly one failure mode in this crate: the requested distance
//! cannot be covered under the given velocity/acceleration.  Degenerate
//! inputs (zero acceleration with zero velocity and nonzero distance) fold
//! into the same outcome — callers have no reason to distinguish them.

use thiserror::Error;

/// The requested distance is never reached under the given kinematics.
///
/// An expected outcome for some inputs (e.g. moving away from the target),
/// not a fatal condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("target distance is not reachable under the given velocity/acceleration")]
pub struct Unreachable;

/// Shorthand result type for solver and resolver operations.
pub type SolveResult<T> = Result<T, Unreachable>;
