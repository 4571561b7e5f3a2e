//! `kin-core` — foundational types for the `rust_kin` animation framework.
//!
//! This crate is a dependency of every other `kin-*` crate.  It intentionally
//! has no `kin-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`geom`]  | `Vec2` — double-precision 2D vector               |
//! | [`ids`]   | `MobileId`                                        |
//! | [`clock`] | `FrameClock`, `StageConfig`, `DELTA_TIME`         |
//! | [`num`]   | Epsilon constants and `epsilon_round`             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod clock;
pub mod geom;
pub mod ids;
pub mod num;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{DELTA_TIME, FrameClock, StageConfig};
pub use geom::Vec2;
pub use ids::MobileId;
pub use num::{DISCRIMINANT_EPSILON, EPSILON, epsilon_round};
