//! `Mobile` — a tracked moving point.

use kin_core::{MobileId, Vec2};

use crate::queue::CallbackQueue;

/// A per-entity settle callback.  Runs after the entity's kinematic step on
/// every executed tick until it returns `false`.
pub type SettleFn = Box<dyn FnMut(&mut Mobile) -> bool>;

/// A tracked moving point: position, velocity, and constant acceleration,
/// stepped once per executed tick by the stage.
///
/// The kinematic state here is independent of any resolved profile — it is
/// the simple constant-acceleration integration the stage applies to every
/// entity.  Profile-driven motion is layered on top by callbacks that write
/// these fields (and [`mark_dirty`](Mobile::mark_dirty)) from integration
/// results.
pub struct Mobile {
    /// Identity, monotonically assigned by the owning store.  Never reused.
    pub id: MobileId,

    pub position:     Vec2,
    pub velocity:     Vec2,
    pub acceleration: Vec2,

    /// Free-form label (the display color/name slot).
    pub label: String,

    /// Set by callers after mutating entity state; cleared by
    /// [`step`](Mobile::step).  While every entity is clean the stage may
    /// skip whole ticks.
    pub dirty: bool,

    settle: CallbackQueue<SettleFn>,
}

impl Mobile {
    pub(crate) fn new(id: MobileId, position: Vec2, label: String) -> Self {
        Self {
            id,
            position,
            velocity:     Vec2::ZERO,
            acceleration: Vec2::ZERO,
            label,
            dirty:        false,
            settle:       CallbackQueue::new(),
        }
    }

    /// Mark this entity as changed so the next tick is not skipped.
    ///
    /// Call after any direct field write; dirtiness is signaled explicitly,
    /// not intercepted.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Register a settle callback: runs after each of this entity's steps
    /// until it returns `false`.  Registered mid-step, it joins the next
    /// tick's batch.
    pub fn on_settle(&mut self, callback: impl FnMut(&mut Mobile) -> bool + 'static) {
        self.settle.push(Box::new(callback));
    }

    /// Number of pending settle callbacks.
    pub fn settle_len(&self) -> usize {
        self.settle.len()
    }

    /// Advance one constant-acceleration step of `delta` seconds, clear the
    /// dirty flag, then run the settle queue.
    pub fn step(&mut self, delta: f64) {
        self.position += self.velocity * delta + self.acceleration * (delta * delta / 2.0);
        self.velocity += self.acceleration * delta;

        self.dirty = false;

        // Snapshot run: the queue is taken out so callbacks can borrow the
        // whole entity (and register late entries into the emptied queue).
        let batch = self.settle.take_batch();
        let mut survivors = Vec::with_capacity(batch.len());
        for mut callback in batch {
            if callback(self) {
                survivors.push(callback);
            }
        }
        self.settle.restore(survivors);
    }
}
