//! City improvements.
//!
//! Improvements carry no per-instance state: every city that builds a
//! Library owns the same catalog descriptor.

use serde::{Deserialize, Serialize};

use crate::buildable::{Cost, Prerequisites};
use crate::math::{fixed_serde, scale, Fixed};

/// Every city improvement in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImprovementKind {
    /// Lets a city grow past the town cap.
    Aqueduct,
    /// Trains veteran land units.
    Barracks,
    /// Triples defense against land attacks.
    CityWalls,
    /// Makes unhappy citizens content.
    Colosseum,
    /// Halves corruption.
    Courthouse,
    /// Keeps food after growth.
    Granary,
    /// Boosts science output.
    Library,
    /// Boosts tax and luxury output.
    Marketplace,
    /// Makes unhappy citizens content; needs no advance.
    Temple,
}

impl ImprovementKind {
    /// All improvements in canonical catalog order.
    pub const ALL: [Self; 9] = [
        Self::Aqueduct,
        Self::Barracks,
        Self::CityWalls,
        Self::Colosseum,
        Self::Courthouse,
        Self::Granary,
        Self::Library,
        Self::Marketplace,
        Self::Temple,
    ];

    /// Stable string key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Aqueduct => "aqueduct",
            Self::Barracks => "barracks",
            Self::CityWalls => "city_walls",
            Self::Colosseum => "colosseum",
            Self::Courthouse => "courthouse",
            Self::Granary => "granary",
            Self::Library => "library",
            Self::Marketplace => "marketplace",
            Self::Temple => "temple",
        }
    }
}

/// The behavioral modifier an improvement applies to its city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImprovementEffect {
    /// Raises the maximum city population.
    RaisesSizeCap {
        /// New population cap.
        cap: u32,
    },
    /// Units built in the city start as veterans.
    VeteranUnits,
    /// Multiplies defense against land attacks.
    DefenseMultiplier(#[serde(with = "fixed_serde")] Fixed),
    /// Turns unhappy citizens content.
    MakesContent {
        /// Citizens affected.
        citizens: u8,
    },
    /// Reduces corruption and waste.
    CorruptionReduction {
        /// Percentage removed.
        percent: u8,
    },
    /// Keeps part of the food box when the city grows.
    FoodRetained {
        /// Percentage kept.
        percent: u8,
    },
    /// Multiplies science output.
    ScienceMultiplier(#[serde(with = "fixed_serde")] Fixed),
    /// Multiplies tax and luxury output.
    TaxMultiplier(#[serde(with = "fixed_serde")] Fixed),
}

/// Catalog descriptor for a city improvement.
///
/// Only the catalog constructs these.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImprovementType {
    /// Which improvement this is.
    pub kind: ImprovementKind,
    /// Display name.
    pub name: String,
    /// Cost attributes.
    pub cost: Cost,
    /// Technology gating.
    pub prerequisites: Prerequisites,
    /// City modifier.
    pub effect: ImprovementEffect,
}

impl ImprovementType {
    pub(crate) fn new(
        kind: ImprovementKind,
        name: String,
        cost: Cost,
        prerequisites: Prerequisites,
        effect: ImprovementEffect,
    ) -> Self {
        Self {
            kind,
            name,
            cost,
            prerequisites,
            effect,
        }
    }

    /// Science multiplier (1 when the improvement has no science effect).
    #[must_use]
    pub fn science_multiplier(&self) -> Fixed {
        match self.effect {
            ImprovementEffect::ScienceMultiplier(factor) => factor,
            _ => Fixed::ONE,
        }
    }

    /// Tax and luxury multiplier (1 when not applicable).
    #[must_use]
    pub fn tax_multiplier(&self) -> Fixed {
        match self.effect {
            ImprovementEffect::TaxMultiplier(factor) => factor,
            _ => Fixed::ONE,
        }
    }

    /// Apply the science multiplier to a city's base science.
    #[must_use]
    pub fn apply_science(&self, base: u32) -> u32 {
        scale(base, self.science_multiplier())
    }

    /// Number of unhappy citizens this improvement makes content.
    #[must_use]
    pub fn content_citizens(&self) -> u8 {
        match self.effect {
            ImprovementEffect::MakesContent { citizens } => citizens,
            _ => 0,
        }
    }

    /// Whether this is a happiness building.
    #[must_use]
    pub fn is_happiness_building(&self) -> bool {
        self.content_citizens() > 0
    }

    /// Population cap granted, if any.
    #[must_use]
    pub fn size_cap(&self) -> Option<u32> {
        match self.effect {
            ImprovementEffect::RaisesSizeCap { cap } => Some(cap),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::advances;
    use crate::math::from_percent;

    fn library() -> ImprovementType {
        ImprovementType::new(
            ImprovementKind::Library,
            "Library".to_string(),
            Cost::standard(80, 1),
            Prerequisites {
                requires: Some(advances::WRITING),
                obsoleted_by: None,
            },
            ImprovementEffect::ScienceMultiplier(from_percent(150)),
        )
    }

    #[test]
    fn test_library_boosts_science() {
        let lib = library();
        assert_eq!(lib.science_multiplier(), Fixed::from_num(1.5));
        assert_eq!(lib.apply_science(20), 30);
        assert_eq!(lib.tax_multiplier(), Fixed::ONE);
        assert!(!lib.is_happiness_building());
    }

    #[test]
    fn test_library_science_on_large_output() {
        let lib = library();
        assert_eq!(lib.apply_science(3_000_000_000), u32::MAX);
        assert_eq!(lib.apply_science(u32::MAX), u32::MAX);
        assert_eq!(lib.apply_science(2_000_000_000), 3_000_000_000);
    }

    #[test]
    fn test_temple_is_happiness_building() {
        let temple = ImprovementType::new(
            ImprovementKind::Temple,
            "Temple".to_string(),
            Cost::standard(40, 1),
            Prerequisites::none(),
            ImprovementEffect::MakesContent { citizens: 2 },
        );
        assert!(temple.is_happiness_building());
        assert_eq!(temple.content_citizens(), 2);
        assert_eq!(temple.apply_science(9), 9);
    }

    #[test]
    fn test_size_cap() {
        let aqueduct = ImprovementType::new(
            ImprovementKind::Aqueduct,
            "Aqueduct".to_string(),
            Cost::standard(120, 2),
            Prerequisites::none(),
            ImprovementEffect::RaisesSizeCap { cap: 16 },
        );
        assert_eq!(aqueduct.size_cap(), Some(16));
        assert_eq!(library().size_cap(), None);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = ImprovementKind::ALL.iter().map(|k| k.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ImprovementKind::ALL.len());
    }
}
