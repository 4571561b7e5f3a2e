//! `MobileStore` — the live-entity registry.
//!
//! An explicit, stage-owned collection rather than a process-wide instance
//! list: independent stages get independent registries, and tests stay
//! deterministic.  Entities are created through [`spawn`](MobileStore::spawn)
//! and live until a caller removes them — the store itself never reaps.

use kin_core::{MobileId, Vec2};

use crate::mobile::Mobile;
use crate::{StageError, StageResult};

/// Registry of live [`Mobile`]s, owned by the stage.
#[derive(Default)]
pub struct MobileStore {
    mobiles: Vec<Mobile>,
    next_id: u32,
}

impl MobileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register an unlabeled entity at `position`.
    pub fn spawn(&mut self, position: Vec2) -> MobileId {
        self.spawn_labeled(position, "")
    }

    /// Create and register an entity at `position` with a display label.
    ///
    /// Ids are monotonically increasing and never reused, even after
    /// removals.
    pub fn spawn_labeled(&mut self, position: Vec2, label: &str) -> MobileId {
        let id = MobileId(self.next_id);
        self.next_id += 1;
        self.mobiles.push(Mobile::new(id, position, label.to_owned()));
        id
    }

    pub fn get(&self, id: MobileId) -> StageResult<&Mobile> {
        self.mobiles
            .iter()
            .find(|m| m.id == id)
            .ok_or(StageError::MobileNotFound(id))
    }

    pub fn get_mut(&mut self, id: MobileId) -> StageResult<&mut Mobile> {
        self.mobiles
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StageError::MobileNotFound(id))
    }

    /// Unregister and return an entity.  Removal is caller-driven; the store
    /// has no lifecycle of its own.
    pub fn remove(&mut self, id: MobileId) -> StageResult<Mobile> {
        let index = self
            .mobiles
            .iter()
            .position(|m| m.id == id)
            .ok_or(StageError::MobileNotFound(id))?;
        Ok(self.mobiles.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mobile> {
        self.mobiles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Mobile> {
        self.mobiles.iter_mut()
    }

    /// Whether any registered entity changed since its last step.
    pub fn any_dirty(&self) -> bool {
        self.mobiles.iter().any(|m| m.dirty)
    }

    pub fn len(&self) -> usize {
        self.mobiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mobiles.is_empty()
    }
}
