//! The `Stage` struct and its tick loop.

use kin_core::{FrameClock, StageConfig};

use crate::queue::CallbackQueue;
use crate::store::MobileStore;

/// A stage-level on-update callback.  Runs once per executed tick until it
/// returns `false`.
pub type UpdateFn = Box<dyn FnMut(&mut TickContext<'_>) -> bool>;

// ── TickInfo / TickContext ────────────────────────────────────────────────────

/// Frame timing for the tick currently executing.
#[derive(Copy, Clone, Debug)]
pub struct TickInfo {
    /// Executed-frame counter before this tick's advance.
    pub frame: u64,
    /// Accumulated simulated seconds before this tick's advance.
    pub time: f64,
    /// Fixed time step of this tick.
    pub delta: f64,
}

/// What an on-update callback gets to see and touch.
///
/// Mutations made through [`mobiles`](TickContext::mobiles) should be
/// followed by [`Mobile::mark_dirty`][crate::Mobile::mark_dirty] so the next
/// tick is not suppressed.
pub struct TickContext<'a> {
    /// The live-entity registry, mutable for the duration of the batch.
    pub mobiles: &'a mut MobileStore,
    /// Timing of the executing tick.
    pub info: TickInfo,

    deferred: Vec<UpdateFn>,
}

impl TickContext<'_> {
    /// Register an on-update callback from inside the running batch.
    ///
    /// Deferred to the *next* tick's batch — the running batch was
    /// snapshotted before iteration.
    pub fn register_on_update(
        &mut self,
        callback: impl FnMut(&mut TickContext<'_>) -> bool + 'static,
    ) {
        self.deferred.push(Box::new(callback));
    }
}

// ── Stage ─────────────────────────────────────────────────────────────────────

/// The cooperative frame scheduler.
///
/// Owns the entity registry, the on-update callback queue, the fixed-step
/// clock, and the update-suppression timer.  One call to [`tick`](Stage::tick)
/// is one frame:
///
/// 1. **Skip test** — with no dirty entity, no external-change flag, and a
///    positive suppression timer, the tick does nothing and advances nothing.
/// 2. **On-update batch** — the registered callbacks run exactly once each
///    against a [`TickContext`]; survivors (returned `true`) are reinstalled
///    as the new batch ahead of late registrations.
/// 3. **Entity stepping** — every registered [`Mobile`][crate::Mobile]
///    advances one constant-acceleration step, clears its dirty flag, and
///    runs its settle queue.
/// 4. **Advance** — clock and suppression timer move forward one delta.
pub struct Stage {
    config: StageConfig,
    clock:  FrameClock,

    mobiles:   MobileStore,
    on_update: CallbackQueue<UpdateFn>,

    /// While positive, ticks with no observable change are skipped.  A burst
    /// request sets it to `-duration`; it then counts upward one delta per
    /// executed tick until suppression resumes.
    suppression_timer: f64,

    /// Latch set by input handling (or any external source) to force the
    /// next tick to run; cleared when a tick executes.
    external_change: bool,
}

impl Stage {
    pub fn new(config: StageConfig) -> Self {
        let clock = config.make_clock();
        Self {
            config,
            clock,
            mobiles:           MobileStore::new(),
            on_update:         CallbackQueue::new(),
            suppression_timer: 0.0,
            external_change:   false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn mobiles(&self) -> &MobileStore {
        &self.mobiles
    }

    pub fn mobiles_mut(&mut self) -> &mut MobileStore {
        &mut self.mobiles
    }

    // ── Registration and control ──────────────────────────────────────────

    /// Register an on-update callback for the next tick's batch.  It runs
    /// once per executed tick until it returns `false`.
    pub fn register_on_update(
        &mut self,
        callback: impl FnMut(&mut TickContext<'_>) -> bool + 'static,
    ) {
        self.on_update.push(Box::new(callback));
    }

    /// Guarantee non-skipped ticks for the next `duration` simulated seconds.
    pub fn request_burst(&mut self, duration: f64) {
        self.suppression_timer = -duration;
    }

    /// Signal an externally observable change (pointer movement, resize, …)
    /// so the next tick runs even under suppression.
    pub fn flag_external_change(&mut self) {
        self.external_change = true;
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Execute one frame.  Returns `false` when the tick was skipped.
    pub fn tick(&mut self) -> bool {
        // ── Skip test ─────────────────────────────────────────────────────
        if !self.mobiles.any_dirty() && !self.external_change && self.suppression_timer > 0.0 {
            return false;
        }
        self.external_change = false;

        let info = TickInfo {
            frame: self.clock.frame,
            time:  self.clock.time,
            delta: self.clock.delta,
        };

        // ── On-update batch (stable snapshot) ─────────────────────────────
        let mut ctx = TickContext {
            mobiles: &mut self.mobiles,
            info,
            deferred: Vec::new(),
        };
        self.on_update.run_batch(|callback| callback(&mut ctx));

        // Late registrations join the next batch, after the survivors.
        for callback in ctx.deferred {
            self.on_update.push(callback);
        }

        // ── Entity stepping ───────────────────────────────────────────────
        for mobile in self.mobiles.iter_mut() {
            mobile.step(info.delta);
        }

        // ── Advance ───────────────────────────────────────────────────────
        self.clock.advance();
        self.suppression_timer += self.clock.delta;

        true
    }

    /// Tick `n` times; returns how many ticks actually executed.
    pub fn run_ticks(&mut self, n: u64) -> u64 {
        (0..n).filter(|_| self.tick()).count() as u64
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageConfig::default())
    }
}
