//! `kin-stage` — cooperative frame scheduler and entity tracking.
//!
//! A [`Stage`] drives per-frame evaluation for a set of [`Mobile`] entities
//! under a single-threaded cooperative model: one logical tick per frame, all
//! tick work running to completion before the next begins.  Ticks are cheap
//! when nothing happens — the stage skips all work while no entity is dirty,
//! no external change is flagged, and no caller-requested burst is pending.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`mobile`] | `Mobile` — a tracked moving point with a settle queue      |
//! | [`store`]  | `MobileStore` — the explicit live-entity registry          |
//! | [`queue`]  | `CallbackQueue` — snapshot-run, self-pruning queue         |
//! | [`stage`]  | `Stage`, `TickContext`, `TickInfo` — the tick loop         |
//! | [`error`]  | `StageError`, `StageResult<T>`                             |
//!
//! # Callback contract
//!
//! Every queue in this crate shares one contract: a callback runs at most
//! once per executed tick until it returns `false`, after which it is
//! dropped.  Callbacks registered *during* a tick's run join the next tick's
//! batch — the running batch is snapshotted before iteration.

pub mod error;
pub mod mobile;
pub mod queue;
pub mod stage;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{StageError, StageResult};
pub use mobile::{Mobile, SettleFn};
pub use queue::CallbackQueue;
pub use stage::{Stage, TickContext, TickInfo, UpdateFn};
pub use store::MobileStore;
