//! `cq-lane` — one checkout counter with a dual sub-queue.
//!
//! # Queue discipline (summary)
//!
//! Each lane owns two sub-queues:
//!
//! - a **priority** queue ordered by arrival tick ascending, ties broken by
//!   insertion order;
//! - a **regular** FIFO queue.
//!
//! Per tick the lane attempts at most one completion from EACH sub-queue —
//! priority first, then regular, both possibly completing in the same tick
//! (two effective service channels when demand includes both classes).
//!
//! A customer is due once the lane's lag clock reaches
//! `arrival + wait_budget`.  The check applies to the queue HEAD only: a
//! not-yet-due head is re-examined next tick and is never skipped past, even
//! when someone behind it is already due.  This is deliberate head-of-line
//! blocking, not a due-time min-heap.

pub mod lane;


pub use lane::{CheckoutLane, LaneService, ServiceRecord};
