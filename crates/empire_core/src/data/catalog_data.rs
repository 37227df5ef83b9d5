//! Catalog data structure combining every buildable definition.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::improvement_data::ImprovementData;
use super::spaceship_data::SpaceShipPartData;
use super::unit_data::UnitData;
use crate::buildable::BuildableId;
use crate::error::ConfigError;

/// Complete catalog definition.
///
/// Contains every improvement, unit and spaceship part. Loaded from a RON
/// file at game startup.
///
/// # Example RON
///
/// ```ron
/// CatalogData(
///     improvements: [...],
///     units: [...],
///     spaceship_parts: [...],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// City improvements.
    #[serde(default)]
    pub improvements: Vec<ImprovementData>,

    /// Unit types.
    #[serde(default)]
    pub units: Vec<UnitData>,

    /// Spaceship parts.
    #[serde(default)]
    pub spaceship_parts: Vec<SpaceShipPartData>,
}

impl CatalogData {
    /// Every entry's key, in file order.
    pub fn ids(&self) -> impl Iterator<Item = BuildableId> + '_ {
        self.improvements
            .iter()
            .map(ImprovementData::id)
            .chain(self.units.iter().map(UnitData::id))
            .chain(self.spaceship_parts.iter().map(SpaceShipPartData::id))
    }

    /// Check that every variant is defined exactly once.
    ///
    /// Returns a list of coverage errors; per-entry checks are done when
    /// entries are resolved.
    #[must_use]
    pub fn check_coverage(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for id in self.ids() {
            if !seen.insert(id) {
                errors.push(ConfigError::DuplicateVariant(id));
            }
        }
        for id in BuildableId::all() {
            if !seen.contains(&id) {
                errors.push(ConfigError::MissingVariant(id));
            }
        }

        errors
    }
}
