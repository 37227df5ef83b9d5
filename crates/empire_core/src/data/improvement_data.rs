//! City improvement data structures for data-driven catalog entries.

use serde::{Deserialize, Serialize};

use super::cost_data::{resolve_prerequisites, CostData};
use crate::buildable::BuildableId;
use crate::error::ConfigError;
use crate::ids::AdvanceId;
use crate::improvement::{ImprovementEffect, ImprovementKind, ImprovementType};
use crate::math::Fixed;

/// Data-driven city improvement definition.
///
/// # Example RON
///
/// ```ron
/// ImprovementData(
///     kind: Library,
///     name: "Library",
///     cost: CostData(productivity: 80, maintenance: 1, purchase: 320, sell: 80),
///     requires: Some("writing"),
///     effect: ScienceMultiplier(6442450944),  // Fixed-point for 1.5
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementData {
    /// Which improvement this entry defines.
    pub kind: ImprovementKind,

    /// Display name.
    pub name: String,

    /// Cost attributes.
    pub cost: CostData,

    /// Advance required to build. `None` means always buildable.
    #[serde(default)]
    pub requires: Option<AdvanceId>,

    /// Not valid for improvements; present so bad data is reported
    /// rather than ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obsoleted_by: Option<AdvanceId>,

    /// City modifier.
    pub effect: ImprovementEffect,
}

impl ImprovementData {
    /// Catalog key of this entry.
    #[must_use]
    pub const fn id(&self) -> BuildableId {
        BuildableId::Improvement(self.kind)
    }

    /// Check this entry and build its descriptor.
    pub(crate) fn resolve(&self, errors: &mut Vec<ConfigError>) -> Option<ImprovementType> {
        let id = self.id();
        let cost = self.cost.resolve(id, errors);
        let prerequisites = resolve_prerequisites(
            id,
            self.requires.as_ref(),
            self.obsoleted_by.as_ref(),
            errors,
        );
        let effect = self.resolve_effect(errors);
        Some(ImprovementType::new(
            self.kind,
            self.name.clone(),
            cost?,
            prerequisites?,
            effect?,
        ))
    }

    fn resolve_effect(&self, errors: &mut Vec<ConfigError>) -> Option<ImprovementEffect> {
        let (effect, value) = match self.effect {
            ImprovementEffect::DefenseMultiplier(value) => ("defense multiplier", value),
            ImprovementEffect::ScienceMultiplier(value) => ("science multiplier", value),
            ImprovementEffect::TaxMultiplier(value) => ("tax multiplier", value),
            _ => return Some(self.effect),
        };
        if value > Fixed::ZERO {
            return Some(self.effect);
        }
        errors.push(ConfigError::NonPositiveMultiplier {
            id: self.id(),
            effect,
            value,
        });
        None
    }
}
