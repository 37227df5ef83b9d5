//! Spaceship parts.

use serde::{Deserialize, Serialize};

use crate::buildable::{Cost, Prerequisites};

/// Every spaceship part in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpaceShipPartKind {
    /// Frame that connects the other parts.
    Structural,
    /// Thrusters and fuel.
    Component,
    /// Habitation, life support and solar panels.
    Module,
}

impl SpaceShipPartKind {
    /// All parts in canonical catalog order.
    pub const ALL: [Self; 3] = [Self::Structural, Self::Component, Self::Module];

    /// Stable string key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Structural => "ss_structural",
            Self::Component => "ss_component",
            Self::Module => "ss_module",
        }
    }
}

/// Catalog descriptor for a spaceship part.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SpaceShipPartType {
    /// Which part this is.
    pub kind: SpaceShipPartKind,
    /// Name shown to the player.
    pub display_name: String,
    /// Cost attributes.
    pub cost: Cost,
    /// Technology gating.
    pub prerequisites: Prerequisites,
    /// How many of this part a complete spaceship needs.
    pub required_count: u32,
}

impl SpaceShipPartType {
    pub(crate) fn new(
        kind: SpaceShipPartKind,
        display_name: String,
        cost: Cost,
        prerequisites: Prerequisites,
        required_count: u32,
    ) -> Self {
        Self {
            kind,
            display_name,
            cost,
            prerequisites,
            required_count,
        }
    }

    /// Parts still missing given how many have been built.
    #[must_use]
    pub const fn remaining(&self, built: u32) -> u32 {
        self.required_count.saturating_sub(built)
    }

    /// Production needed to finish this part of the ship.
    #[must_use]
    pub const fn remaining_production(&self, built: u32) -> u64 {
        self.remaining(built) as u64 * self.cost.productivity as u64
    }
}
