//! `cq-sim` — tick loop scheduler for the rust_cq checkout simulation.
//!
//! # Five-phase tick loop
//!
//! ```text
//! loop:
//!   ① Arrivals  — while below the admission target, draw a batch of 1..=5
//!                 customers; each fills a basket, draws a priority flag,
//!                 and is routed to a lane by the assignment policy.
//!   ② Service   — every lane attempts one completion per sub-queue
//!                 (priority first, then regular; both may complete).
//!   ③ Restock   — on every tick divisible by the restock interval, all
//!                 item kinds gain a fixed amount of stock.
//!   ④ Clocks    — every lane's lag clock advances by 1.
//!   ⑤ Terminate — all lanes idle AND admitted ≥ target → emit summary.
//! ```
//!
//! # Assignment policy (summary)
//!
//! Priority customers round-robin across all lanes by 0-based admission
//! index; non-priority customers with small baskets go to the express lane
//! (lane 0); everyone else round-robins.  Express and round-robin traffic
//! can both land on lane 0 — that overlap is intentional.
//!
//! # Pacing
//!
//! The loop's logic never sleeps.  A [`Pacer`] is injected into [`Sim::run`]
//! to insert an optional human-readable delay between ticks; tests pass
//! [`NoPacer`].

pub mod builder;
pub mod error;
pub mod observer;
pub mod pacer;
pub mod policy;
pub mod sim;
pub mod summary;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use pacer::{NoPacer, Pacer, SleepPacer};
pub use policy::{ArrivalEvent, Routing, EXPRESS_LANE, choose_lane};
pub use sim::{Phase, Sim};
pub use summary::{LaneSummary, SimSummary};
