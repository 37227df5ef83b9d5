//! Spaceship part data structures.

use serde::{Deserialize, Serialize};

use super::cost_data::{checked, resolve_prerequisites, CostData};
use crate::buildable::BuildableId;
use crate::error::ConfigError;
use crate::ids::AdvanceId;
use crate::spaceship::{SpaceShipPartKind, SpaceShipPartType};

/// Data-driven spaceship part definition.
///
/// # Example RON
///
/// ```ron
/// SpaceShipPartData(
///     kind: Structural,
///     display_name: "SS Structural",
///     cost: CostData(productivity: 80, maintenance: 0, purchase: 320, sell: 80),
///     requires: Some("space_flight"),
///     required_count: 39,
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceShipPartData {
    /// Which part this entry defines.
    pub kind: SpaceShipPartKind,

    /// Name shown to the player.
    pub display_name: String,

    /// Cost attributes.
    pub cost: CostData,

    /// Advance required to build.
    #[serde(default)]
    pub requires: Option<AdvanceId>,

    /// Not valid for spaceship parts; reported if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obsoleted_by: Option<AdvanceId>,

    /// Parts needed for a complete ship.
    pub required_count: i64,
}

impl SpaceShipPartData {
    /// Catalog key of this entry.
    #[must_use]
    pub const fn id(&self) -> BuildableId {
        BuildableId::SpaceShipPart(self.kind)
    }

    /// Check this entry and build its descriptor.
    pub(crate) fn resolve(&self, errors: &mut Vec<ConfigError>) -> Option<SpaceShipPartType> {
        let id = self.id();
        let cost = self.cost.resolve(id, errors);
        let prerequisites = resolve_prerequisites(
            id,
            self.requires.as_ref(),
            self.obsoleted_by.as_ref(),
            errors,
        );
        let required_count = checked::<u32>(id, "required_count", self.required_count, errors);
        Some(SpaceShipPartType::new(
            self.kind,
            self.display_name.clone(),
            cost?,
            prerequisites?,
            required_count?,
        ))
    }
}
