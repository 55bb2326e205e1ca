//! `cq-market` — inventory and customer domain objects.
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`item`]     | `Item`, `Inventory`                        |
//! | [`customer`] | `Customer` and basket selection            |
//!
//! # Stock model (summary)
//!
//! Inventory is a fixed table of item kinds, each with a depletable stock
//! counter.  A customer's basket is filled by repeated uniform draws over
//! the table; a draw that lands on an exhausted kind is silently skipped.
//! Stock never goes negative and depletion is never an error — it only
//! shortens baskets.

pub mod customer;
pub mod item;

#[cfg(test)]
mod tests;

pub use customer::Customer;
pub use item::{Inventory, Item};
