//! Fixed-step frame time model.
//!
//! # Design
//!
//! Time advances in fixed increments of `delta` simulated seconds per frame,
//! never adapted to wall clock:
//!
//!   time = frame * delta
//!
//! A fixed step keeps the kinematic integration deterministic — the same
//! sequence of ticks always produces bit-identical entity trajectories — and
//! makes burst durations expressible in the same unit as profile times.
//!
//! The default step is 1/60 s (one 60 Hz frame).  Applications that want a
//! different resolution set `StageConfig::delta_time`; the rest of the
//! framework is agnostic.

use std::fmt;

/// Default simulated seconds per frame (60 Hz).
pub const DELTA_TIME: f64 = 1.0 / 60.0;

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and accumulated simulated time.
///
/// Cheap to copy; holds no heap data.  The stage advances it only on frames
/// that actually execute, so suppressed frames leave simulated time frozen.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// Count of executed frames since construction.
    pub frame: u64,
    /// Accumulated simulated seconds (`frame * delta`, accumulated stepwise).
    pub time: f64,
    /// Simulated seconds added per executed frame.
    pub delta: f64,
}

impl FrameClock {
    pub fn new(delta: f64) -> Self {
        Self { frame: 0, time: 0.0, delta }
    }

    /// Advance the clock by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.frame += 1;
        self.time += self.delta;
    }

    /// Frames needed to cover `secs` simulated seconds, rounded up.
    #[inline]
    pub fn frames_for_secs(&self, secs: f64) -> u64 {
        (secs / self.delta).ceil() as u64
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DELTA_TIME)
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{} ({:.3}s)", self.frame, self.time)
    }
}

// ── StageConfig ───────────────────────────────────────────────────────────────

/// Stage configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageConfig {
    /// Simulated seconds per frame.  Default: `DELTA_TIME` (1/60).
    pub delta_time: f64,
}

impl StageConfig {
    /// Construct a `FrameClock` pre-configured for this stage.
    pub fn make_clock(&self) -> FrameClock {
        FrameClock::new(self.delta_time)
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self { delta_time: DELTA_TIME }
    }
}
