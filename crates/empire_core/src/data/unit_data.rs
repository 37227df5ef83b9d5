//! Unit data structures for data-driven unit definitions.

use serde::{Deserialize, Serialize};

use super::cost_data::{checked, resolve_prerequisites, CostData};
use crate::buildable::BuildableId;
use crate::error::ConfigError;
use crate::ids::AdvanceId;
use crate::unit::{Domain, UnitKind, UnitType};

/// Data-driven unit definition.
///
/// # Example RON
///
/// ```ron
/// UnitData(
///     kind: Frigate,
///     name: "Frigate",
///     cost: CostData(productivity: 40, maintenance: 0, purchase: 160, sell: 40),
///     requires: Some("magnetism"),
///     obsoleted_by: Some("industrialization"),
///     attack: 4,
///     defense: 2,
///     movement: 4,
///     capacity: 2,
///     carries: Some(Land),
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitData {
    /// Which unit this entry defines.
    pub kind: UnitKind,

    /// Display name.
    pub name: String,

    /// Cost attributes.
    pub cost: CostData,

    /// Advance required to build.
    #[serde(default)]
    pub requires: Option<AdvanceId>,

    /// Advance that retires this unit from production.
    #[serde(default)]
    pub obsoleted_by: Option<AdvanceId>,

    /// Attack strength.
    pub attack: i64,

    /// Defense strength.
    pub defense: i64,

    /// Movement points per turn.
    pub movement: i64,

    /// Turns aloft for aircraft (0 = unlimited).
    #[serde(default)]
    pub range: i64,

    /// Only visible from adjacent squares.
    #[serde(default)]
    pub visible_only_adjacent: bool,

    /// Cargo hold size.
    #[serde(default)]
    pub capacity: i64,

    /// Domain of units the hold accepts.
    #[serde(default)]
    pub carries: Option<Domain>,

    /// Must stay next to land.
    #[serde(default)]
    pub coastal_only: bool,

    /// Non-combat ferry.
    #[serde(default)]
    pub transport_only: bool,
}

impl UnitData {
    /// Catalog key of this entry.
    #[must_use]
    pub const fn id(&self) -> BuildableId {
        BuildableId::Unit(self.kind)
    }

    /// Check this entry and build its descriptor.
    pub(crate) fn resolve(&self, errors: &mut Vec<ConfigError>) -> Option<UnitType> {
        let id = self.id();
        let cost = self.cost.resolve(id, errors);
        let prerequisites = resolve_prerequisites(
            id,
            self.requires.as_ref(),
            self.obsoleted_by.as_ref(),
            errors,
        );
        let attack = checked::<u16>(id, "attack", self.attack, errors);
        let defense = checked::<u16>(id, "defense", self.defense, errors);
        let movement = checked::<u8>(id, "movement", self.movement, errors);
        let range = checked::<u8>(id, "range", self.range, errors);
        let capacity = checked::<u8>(id, "capacity", self.capacity, errors);

        if let Some(capacity) = capacity.filter(|&c| c > 0 && self.carries.is_none()) {
            errors.push(ConfigError::CargoWithoutDomain { id, capacity });
            return None;
        }

        let mut unit = UnitType::new(self.kind, self.name.clone(), cost?, prerequisites?)
            .with_combat(attack?, defense?, movement?)
            .with_cargo(capacity?, self.carries);
        unit.range = range?;
        unit.visible_only_adjacent = self.visible_only_adjacent;
        unit.coastal_only = self.coastal_only;
        unit.transport_only = self.transport_only;
        Some(unit)
    }
}
