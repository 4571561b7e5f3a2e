//! Point queries against a profile: distance and velocity at elapsed time.
//!
//! # Regimes
//!
//! Evaluation selects one of three regimes, in priority order:
//!
//! 1. **coast** (`dt >= time`) — the plan is finished; velocity holds at
//!    `v1` and distance grows linearly;
//! 2. **phase one** (`dt <= dt0`);
//! 3. **phase two** (otherwise), evaluated at `dt − dt0` from the boundary.
//!
//! Evaluating at `dt == dt0` through regime 2 or through regime 3 with a
//! zero offset yields identical values (`d0`, `vmax`): both expressions
//! reduce to the same terms, so boundary continuity is exact, not merely
//! within tolerance.
//!
//! Negative `dt` is outside the contract; there is no pre-start regime.

use crate::phase::{Profile, ProfileRequest, resolve_phase};
use crate::{SolveResult, Unreachable};

// ── IntegrationResult ─────────────────────────────────────────────────────────

/// Output of a point query: cumulative distance covered (not position) and
/// instantaneous velocity at the queried elapsed time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegrationResult {
    pub distance: f64,
    pub velocity: f64,
}

impl Profile {
    /// Distance covered and velocity at elapsed time `dt`.
    ///
    /// For `dt` beyond the profile's total duration the entity coasts at
    /// `v1`.  `dt < 0` is outside the contract.
    pub fn integrate(&self, dt: f64) -> IntegrationResult {
        let Profile { dt0, time, d0, vmax, distance, v0, v1, a0, a1, .. } = *self;

        if dt >= time {
            return IntegrationResult {
                distance: distance + v1 * (dt - time),
                velocity: v1,
            };
        }

        if dt <= dt0 {
            return IntegrationResult {
                distance: v0 * dt + a0 * dt * dt / 2.0,
                velocity: v0 + a0 * dt,
            };
        }

        let dt = dt - dt0;

        IntegrationResult {
            distance: d0 + vmax * dt + a1 * dt * dt / 2.0,
            velocity: vmax + a1 * dt,
        }
    }
}

// ── ProfileCell ───────────────────────────────────────────────────────────────

/// A profile request with explicit resolved-or-not state.
///
/// Resolution runs at most once per cell: the first call to [`profile`]
/// (or [`integrate`]) resolves and caches, and every later call — including
/// after a failed resolution — returns the cached outcome.
///
/// [`profile`]: ProfileCell::profile
/// [`integrate`]: ProfileCell::integrate
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileCell {
    request:  ProfileRequest,
    resolved: Option<SolveResult<Profile>>,
}

impl ProfileCell {
    /// Wrap a request without resolving it yet.
    pub fn new(request: ProfileRequest) -> Self {
        Self { request, resolved: None }
    }

    /// The original request.
    pub fn request(&self) -> &ProfileRequest {
        &self.request
    }

    /// Whether resolution has already run (successfully or not).
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Resolve on first use, then return the cached profile.
    pub fn profile(&mut self) -> SolveResult<&Profile> {
        let outcome = self
            .resolved
            .get_or_insert_with(|| resolve_phase(&self.request));
        match outcome {
            Ok(profile) => Ok(profile),
            Err(_)      => Err(Unreachable),
        }
    }

    /// Resolve if needed, then integrate at elapsed time `dt`.
    pub fn integrate(&mut self, dt: f64) -> SolveResult<IntegrationResult> {
        Ok(self.profile()?.integrate(dt))
    }
}

impl From<ProfileRequest> for ProfileCell {
    fn from(request: ProfileRequest) -> Self {
        Self::new(request)
    }
}

impl From<Profile> for ProfileCell {
    /// Wrap an already-resolved profile; no further resolution will run.
    fn from(profile: Profile) -> Self {
        Self {
            request: ProfileRequest {
                distance: profile.distance,
                v0:       profile.v0,
                v1:       profile.v1,
                a0:       profile.a0,
                a1:       profile.a1,
            },
            resolved: Some(Ok(profile)),
        }
    }
}
