//! Strongly typed entity identifier.
//!
//! Ids are assigned monotonically by the entity store and are never reused,
//! so a `MobileId` held across a removal stays unambiguous.

use std::fmt;

/// Identity of a tracked entity.  Monotonically increasing per store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MobileId(pub u32);

impl MobileId {
    /// Sentinel meaning "no valid id".
    pub const INVALID: MobileId = MobileId(u32::MAX);

    /// Cast to `usize` for collection indexing.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for MobileId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for MobileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MobileId({})", self.0)
    }
}
