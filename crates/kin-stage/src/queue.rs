//! `CallbackQueue` — snapshot-run, self-pruning callback storage.
//!
//! # The contract
//!
//! Each run iterates a *stable snapshot* of the entries present when the run
//! started, retains the survivors (entries whose invocation returned `true`),
//! and finally appends any entries registered while the run was in progress.
//! Late registrations therefore never execute in the tick that registered
//! them; they join the next batch, after the survivors.
//!
//! The queue is generic over its entry type so the stage-level update queue
//! (entries invoked with a tick context) and the per-entity settle queue
//! (entries invoked with the entity itself) share one implementation.

use std::mem;

/// A self-pruning queue of callbacks run once per batch.
pub struct CallbackQueue<F> {
    entries: Vec<F>,
}

impl<F> CallbackQueue<F> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register an entry for the next batch.
    pub fn push(&mut self, entry: F) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take the current entries as a stable snapshot, leaving the queue
    /// empty to collect registrations made during the run.
    pub fn take_batch(&mut self) -> Vec<F> {
        mem::take(&mut self.entries)
    }

    /// Install `survivors` as the new batch, ahead of any entries that were
    /// registered since [`take_batch`](CallbackQueue::take_batch).
    pub fn restore(&mut self, survivors: Vec<F>) {
        let late = mem::replace(&mut self.entries, survivors);
        self.entries.extend(late);
    }

    /// Snapshot-run the whole batch through `invoke`, retaining entries for
    /// which it returns `true`.
    ///
    /// Use [`take_batch`]/[`restore`] directly when the invocation needs to
    /// borrow the queue's owner (as the per-entity settle queue does).
    ///
    /// [`take_batch`]: CallbackQueue::take_batch
    /// [`restore`]: CallbackQueue::restore
    pub fn run_batch(&mut self, mut invoke: impl FnMut(&mut F) -> bool) {
        let batch = self.take_batch();
        let mut survivors = Vec::with_capacity(batch.len());
        for mut entry in batch {
            if invoke(&mut entry) {
                survivors.push(entry);
            }
        }
        self.restore(survivors);
    }
}

impl<F> Default for CallbackQueue<F> {
    fn default() -> Self {
        Self::new()
    }
}
