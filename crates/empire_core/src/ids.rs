//! Opaque identities owned by other subsystems.
//!
//! The catalog references advances, players, cities and map squares but
//! never constructs or mutates the things they name.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::world::Direction;

/// Identity of a technology advance.
///
/// Advances are keyed by a stable string (e.g. `"magnetism"`) so catalog
/// data files stay readable. Well-known advances are available as
/// constants in [`advances`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvanceId(Cow<'static, str>);

impl AdvanceId {
    /// Create an advance ID from a static key.
    #[must_use]
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Create an advance ID from an owned key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(Cow::Owned(key.into()))
    }

    /// Get the string key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdvanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AdvanceId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Advances referenced by the standard catalog.
pub mod advances {
    use super::AdvanceId;

    /// Advanced Flight.
    pub const ADVANCED_FLIGHT: AdvanceId = AdvanceId::from_static("advanced_flight");
    /// Code of Laws.
    pub const CODE_OF_LAWS: AdvanceId = AdvanceId::from_static("code_of_laws");
    /// Combustion.
    pub const COMBUSTION: AdvanceId = AdvanceId::from_static("combustion");
    /// Construction.
    pub const CONSTRUCTION: AdvanceId = AdvanceId::from_static("construction");
    /// Currency.
    pub const CURRENCY: AdvanceId = AdvanceId::from_static("currency");
    /// Electricity.
    pub const ELECTRICITY: AdvanceId = AdvanceId::from_static("electricity");
    /// Flight.
    pub const FLIGHT: AdvanceId = AdvanceId::from_static("flight");
    /// Industrialization.
    pub const INDUSTRIALIZATION: AdvanceId = AdvanceId::from_static("industrialization");
    /// Magnetism.
    pub const MAGNETISM: AdvanceId = AdvanceId::from_static("magnetism");
    /// Map Making.
    pub const MAP_MAKING: AdvanceId = AdvanceId::from_static("map_making");
    /// Masonry.
    pub const MASONRY: AdvanceId = AdvanceId::from_static("masonry");
    /// Navigation.
    pub const NAVIGATION: AdvanceId = AdvanceId::from_static("navigation");
    /// Plastics.
    pub const PLASTICS: AdvanceId = AdvanceId::from_static("plastics");
    /// Pottery.
    pub const POTTERY: AdvanceId = AdvanceId::from_static("pottery");
    /// Rocketry.
    pub const ROCKETRY: AdvanceId = AdvanceId::from_static("rocketry");
    /// Space Flight.
    pub const SPACE_FLIGHT: AdvanceId = AdvanceId::from_static("space_flight");
    /// Steam Engine.
    pub const STEAM_ENGINE: AdvanceId = AdvanceId::from_static("steam_engine");
    /// Steel.
    pub const STEEL: AdvanceId = AdvanceId::from_static("steel");
    /// Superconductor.
    pub const SUPERCONDUCTOR: AdvanceId = AdvanceId::from_static("superconductor");
    /// Writing.
    pub const WRITING: AdvanceId = AdvanceId::from_static("writing");

    /// Every advance referenced by the standard catalog.
    pub const ALL: [AdvanceId; 20] = [
        ADVANCED_FLIGHT,
        CODE_OF_LAWS,
        COMBUSTION,
        CONSTRUCTION,
        CURRENCY,
        ELECTRICITY,
        FLIGHT,
        INDUSTRIALIZATION,
        MAGNETISM,
        MAP_MAKING,
        MASONRY,
        NAVIGATION,
        PLASTICS,
        POTTERY,
        ROCKETRY,
        SPACE_FLIGHT,
        STEAM_ENGINE,
        STEEL,
        SUPERCONDUCTOR,
        WRITING,
    ];
}

/// Set of advances a civilization has researched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownAdvances(HashSet<AdvanceId>);

impl KnownAdvances {
    /// Create an empty set (nothing researched).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an advance has been researched.
    #[must_use]
    pub fn contains(&self, advance: &AdvanceId) -> bool {
        self.0.contains(advance)
    }

    /// Record a researched advance. Returns `false` if it was already known.
    pub fn insert(&mut self, advance: AdvanceId) -> bool {
        self.0.insert(advance)
    }

    /// Number of researched advances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing has been researched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over researched advances in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &AdvanceId> {
        self.0.iter()
    }
}

impl FromIterator<AdvanceId> for KnownAdvances {
    fn from_iter<I: IntoIterator<Item = AdvanceId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<AdvanceId> for KnownAdvances {
    fn extend<I: IntoIterator<Item = AdvanceId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Unique identifier for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u16);

/// Unique identifier for a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub u32);

/// Unique identifier for a live unit instance.
///
/// Assigned by the catalog's factory and never reused within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u64);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// A square on the world map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapSquare {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl MapSquare {
    /// Create a map square reference.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent square in the given direction.
    #[must_use]
    pub const fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Check whether `other` is one step away (including diagonals).
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
}

impl fmt::Display for MapSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
