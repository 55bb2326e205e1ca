//! `cq-core` — foundational types for the `rust_cq` checkout simulation.
//!
//! This crate is a dependency of every other `cq-*` crate.  It intentionally
//! has no `cq-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`ids`]      | `CustomerId`, `LaneId`, `ItemId`              |
//! | [`time`]     | `Tick`, `SimConfig`                           |
//! | [`rng`]      | `SimRng` (seedable simulation RNG)            |
//! | [`error`]    | `CoreError`, `CoreResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{CustomerId, ItemId, LaneId};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
