//! Fluent builder for constructing a [`Sim`].

use cq_core::{CoreError, LaneId, SimConfig, SimRng, Tick};
use cq_lane::CheckoutLane;
use cq_market::Inventory;

use crate::sim::Phase;
use crate::{Sim, SimResult};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — admission target, lane count, seed, restock cadence, …
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                                |
/// |-------------------|--------------------------------------------------------|
/// | `.inventory(inv)` | `Inventory::stocked(item_kinds, initial_stock)`        |
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig::with_target(30, 42);
/// let mut sim = SimBuilder::new(config).build()?;
/// let summary = sim.run(&mut NoopObserver, &mut NoPacer)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    inventory: Option<Inventory>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, inventory: None }
    }

    /// Supply a custom item table instead of the config's default assortment.
    pub fn inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let inventory = self
            .inventory
            .unwrap_or_else(|| Inventory::stocked(self.config.item_kinds, self.config.initial_stock));
        if inventory.is_empty() {
            return Err(CoreError::Config("inventory must hold at least one item kind".into()).into());
        }

        let lanes = (0..self.config.lane_count)
            .map(|i| CheckoutLane::new(LaneId(i)))
            .collect();

        let rng = SimRng::new(self.config.seed);

        Ok(Sim {
            config: self.config,
            tick: Tick::ZERO,
            lanes,
            inventory,
            rng,
            admitted: 0,
            phase: Phase::Running,
        })
    }
}
