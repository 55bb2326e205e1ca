//! Inventory items and the shared stock table.

use cq_core::{ItemId, SimRng};

// ── Item ─────────────────────────────────────────────────────────────────────

/// One inventory kind with a depletable stock counter.
///
/// Stock is a `u32` and only ever moves by `take_one` (-1, floored at 0) and
/// `restock` (+n, unbounded), so it can never go negative.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name:  String,
    stock: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, stock: u32) -> Self {
        Self { name: name.into(), stock }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Take one unit of stock.
    ///
    /// Returns `false` without touching the counter when the item is already
    /// exhausted — depletion is an observable outcome, never an error.
    pub fn take_one(&mut self) -> bool {
        if self.stock > 0 {
            self.stock -= 1;
            true
        } else {
            false
        }
    }

    /// Add `amount` units of stock.  Unconditional; no upper bound.
    pub fn restock(&mut self, amount: u32) {
        self.stock += amount;
    }
}

// ── Inventory ────────────────────────────────────────────────────────────────

/// The store's item table, addressed by [`ItemId`].
///
/// The table is fixed-size after construction; only stock counters mutate.
/// All mutation happens from the scheduler's single call stack, so customers
/// admitted in the same batch see each other's depletions in admission order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Build a table of `kinds` items named `item-1 .. item-N`, each with
    /// `initial_stock` units.
    pub fn stocked(kinds: u16, initial_stock: u32) -> Self {
        let items = (1..=kinds)
            .map(|n| Item::new(format!("item-{n}"), initial_stock))
            .collect();
        Self { items }
    }

    /// Build from an explicit item list (tests, custom assortments).
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index())
    }

    pub fn stock_of(&self, id: ItemId) -> u32 {
        self.items.get(id.index()).map_or(0, Item::stock)
    }

    /// Sum of all stock counters.
    pub fn total_stock(&self) -> u64 {
        self.items.iter().map(|i| i.stock() as u64).sum()
    }

    /// Iterate over `(id, item)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (ItemId(i as u16), item))
    }

    /// Pick one item kind uniformly at random and try to take a unit of it.
    ///
    /// Returns `None` when the picked kind is out of stock; the caller skips
    /// the draw and moves on (the pick is NOT retried against another kind).
    pub fn draw(&mut self, rng: &mut SimRng) -> Option<ItemId> {
        if self.items.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.items.len());
        if self.items[idx].take_one() {
            Some(ItemId(idx as u16))
        } else {
            None
        }
    }

    /// Add `amount` units to every item kind.
    pub fn restock_all(&mut self, amount: u32) {
        for item in &mut self.items {
            item.restock(amount);
        }
    }
}
