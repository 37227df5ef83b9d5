//! The contract shared by everything a city can build.
//!
//! City improvements, units and spaceship parts are three categories of
//! one tagged union. Each category owns its own attribute record and
//! shares the [`Cost`] and [`Prerequisites`] substructures by composition.
//!
//! The catalog holds exactly one immutable descriptor per variant. Stateless
//! variants (improvements, spaceship parts) hand that descriptor out as the
//! built value; units produce a fresh owned [`Unit`] per build.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GameError, Result};
use crate::ids::{AdvanceId, CityId, KnownAdvances, MapSquare, PlayerId};
use crate::improvement::{ImprovementKind, ImprovementType};
use crate::spaceship::{SpaceShipPartKind, SpaceShipPartType};
use crate::unit::{Domain, Unit, UnitKind, UnitOwner, UnitType};

/// Purchase price as a multiple of production cost.
pub const PURCHASE_MULTIPLIER: u32 = 4;

/// Production and upkeep costs of a buildable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    /// Production points required to complete the build.
    pub productivity: u32,
    /// Per-turn upkeep while the built instance exists.
    pub maintenance: u32,
    /// Treasury cost to buy the build outright.
    pub purchase: u32,
    /// Refund on demolition or disband.
    pub sell: u32,
}

impl Cost {
    /// Costs following the pricing convention: purchase is four times
    /// production, sell equals production.
    #[must_use]
    pub const fn standard(productivity: u32, maintenance: u32) -> Self {
        Self {
            productivity,
            maintenance,
            purchase: productivity.saturating_mul(PURCHASE_MULTIPLIER),
            sell: productivity,
        }
    }

    /// Check the pricing convention.
    #[must_use]
    pub const fn follows_price_convention(&self) -> bool {
        self.purchase as u64 == self.productivity as u64 * PURCHASE_MULTIPLIER as u64
            && self.sell == self.productivity
    }
}

/// Technology gating for a buildable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prerequisites {
    /// Advance that must be known. `None` means always buildable.
    pub requires: Option<AdvanceId>,
    /// Advance that retires the variant once known (units only).
    pub obsoleted_by: Option<AdvanceId>,
}

impl Prerequisites {
    /// Buildable from the start of the game, never obsolete.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            requires: None,
            obsoleted_by: None,
        }
    }

    /// Check buildability against a set of known advances.
    #[must_use]
    pub fn is_satisfied(&self, known: &KnownAdvances) -> bool {
        let required_known = self.requires.as_ref().map_or(true, |a| known.contains(a));
        let not_obsolete = self
            .obsoleted_by
            .as_ref()
            .map_or(true, |a| !known.contains(a));
        required_known && not_obsolete
    }

    /// Like [`Self::is_satisfied`], but explains a failure.
    pub fn check(&self, id: BuildableId, known: &KnownAdvances) -> Result<()> {
        if let Some(advance) = self.requires.as_ref().filter(|a| !known.contains(a)) {
            return Err(GameError::PrerequisiteNotMet {
                id,
                advance: advance.clone(),
            });
        }
        if let Some(advance) = self.obsoleted_by.as_ref().filter(|a| known.contains(a)) {
            return Err(GameError::Obsolete {
                id,
                advance: advance.clone(),
            });
        }
        Ok(())
    }
}

/// Key naming one catalog variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildableId {
    /// A city improvement.
    Improvement(ImprovementKind),
    /// A unit.
    Unit(UnitKind),
    /// A spaceship part.
    SpaceShipPart(SpaceShipPartKind),
}

impl BuildableId {
    /// Stable string key (e.g. `"aqueduct"`, `"frigate"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Improvement(kind) => kind.key(),
            Self::Unit(kind) => kind.key(),
            Self::SpaceShipPart(kind) => kind.key(),
        }
    }

    /// Whether every build of this variant shares the catalog descriptor.
    #[must_use]
    pub const fn is_stateless(self) -> bool {
        !matches!(self, Self::Unit(_))
    }

    /// Every variant in canonical catalog order.
    pub fn all() -> impl Iterator<Item = Self> {
        ImprovementKind::ALL
            .into_iter()
            .map(Self::Improvement)
            .chain(UnitKind::ALL.into_iter().map(Self::Unit))
            .chain(SpaceShipPartKind::ALL.into_iter().map(Self::SpaceShipPart))
    }
}

impl fmt::Display for BuildableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which part of the catalog a builder is choosing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildCategory {
    /// City improvements.
    Improvement,
    /// Spaceship parts.
    SpaceShipPart,
    /// Units, optionally restricted to one domain.
    Unit(Option<Domain>),
}

impl BuildCategory {
    /// Check whether a descriptor belongs to this category.
    #[must_use]
    pub fn matches(self, descriptor: &Descriptor) -> bool {
        match (self, descriptor) {
            (Self::Improvement, Descriptor::Improvement(_)) => true,
            (Self::SpaceShipPart, Descriptor::SpaceShipPart(_)) => true,
            (Self::Unit(None), Descriptor::Unit(_)) => true,
            (Self::Unit(Some(domain)), Descriptor::Unit(unit)) => unit.domain == domain,
            _ => false,
        }
    }
}

/// Shared reference to a catalog entry.
///
/// Cloning a descriptor clones the `Arc`, never the entry.
#[derive(Debug, Clone)]
pub enum Descriptor {
    /// City improvement entry.
    Improvement(Arc<ImprovementType>),
    /// Unit type entry.
    Unit(Arc<UnitType>),
    /// Spaceship part entry.
    SpaceShipPart(Arc<SpaceShipPartType>),
}

impl Descriptor {
    /// Catalog key of this entry.
    #[must_use]
    pub fn id(&self) -> BuildableId {
        match self {
            Self::Improvement(t) => BuildableId::Improvement(t.kind),
            Self::Unit(t) => BuildableId::Unit(t.kind),
            Self::SpaceShipPart(t) => BuildableId::SpaceShipPart(t.kind),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Improvement(t) => &t.name,
            Self::Unit(t) => &t.name,
            Self::SpaceShipPart(t) => &t.display_name,
        }
    }

    /// Cost attributes.
    #[must_use]
    pub fn cost(&self) -> &Cost {
        match self {
            Self::Improvement(t) => &t.cost,
            Self::Unit(t) => &t.cost,
            Self::SpaceShipPart(t) => &t.cost,
        }
    }

    /// Technology gating.
    #[must_use]
    pub fn prerequisites(&self) -> &Prerequisites {
        match self {
            Self::Improvement(t) => &t.prerequisites,
            Self::Unit(t) => &t.prerequisites,
            Self::SpaceShipPart(t) => &t.prerequisites,
        }
    }

    /// Check buildability against a set of known advances.
    #[must_use]
    pub fn is_buildable(&self, known: &KnownAdvances) -> bool {
        self.prerequisites().is_satisfied(known)
    }
}

/// Where a build is placed and who owns the result.
///
/// Only units care about the context; stateless variants ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BuildContext {
    /// No owner supplied. Valid only for stateless variants.
    #[default]
    None,
    /// Built by a city, which supports the unit.
    City(CityId),
    /// Placed on the map for a player (e.g. mercenaries from a hut).
    Field {
        /// Where the unit stands.
        square: MapSquare,
        /// Who owns it.
        player: PlayerId,
    },
}

impl BuildContext {
    /// Combine an optional city and an optional `(square, player)` pair.
    ///
    /// Supplying both is rejected; supplying neither yields
    /// [`BuildContext::None`].
    pub fn from_parts(
        city: Option<CityId>,
        field: Option<(MapSquare, PlayerId)>,
    ) -> std::result::Result<Self, ConfigError> {
        match (city, field) {
            (Some(_), Some(_)) => Err(ConfigError::InvalidContext(
                "both a city and a map location were supplied",
            )),
            (Some(city), None) => Ok(Self::City(city)),
            (None, Some((square, player))) => Ok(Self::Field { square, player }),
            (None, None) => Ok(Self::None),
        }
    }

    /// Unit owner named by this context.
    pub fn owner(self) -> std::result::Result<UnitOwner, ConfigError> {
        match self {
            Self::None => Err(ConfigError::InvalidContext(
                "units need either a city or a map location and player",
            )),
            Self::City(city) => Ok(UnitOwner::City(city)),
            Self::Field { square, player } => Ok(UnitOwner::Field { square, player }),
        }
    }
}

/// Result of a factory call.
#[derive(Debug, Clone)]
pub enum Built {
    /// The shared improvement descriptor.
    Improvement(Arc<ImprovementType>),
    /// The shared spaceship part descriptor.
    SpaceShipPart(Arc<SpaceShipPartType>),
    /// A fresh, exclusively owned unit.
    Unit(Unit),
}

impl Built {
    /// Catalog key of what was built.
    #[must_use]
    pub fn id(&self) -> BuildableId {
        match self {
            Self::Improvement(t) => BuildableId::Improvement(t.kind),
            Self::SpaceShipPart(t) => BuildableId::SpaceShipPart(t.kind),
            Self::Unit(u) => BuildableId::Unit(u.kind()),
        }
    }

    /// Take the unit out of a unit build.
    #[must_use]
    pub fn into_unit(self) -> Option<Unit> {
        match self {
            Self::Unit(unit) => Some(unit),
            _ => None,
        }
    }
}
