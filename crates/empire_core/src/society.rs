//! Civilization-level and city-level enumerations.

use serde::{Deserialize, Serialize};

/// Historical era a civilization has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Era {
    /// Antiquity through the middle ages.
    Ancient,
    /// Age of sail and gunpowder.
    Renaissance,
    /// Steam, steel and railroads.
    Industrial,
    /// Flight, electronics and space.
    Modern,
}

impl Era {
    /// All eras in chronological order.
    pub const ALL: [Self; 4] = [
        Self::Ancient,
        Self::Renaissance,
        Self::Industrial,
        Self::Modern,
    ];

    /// Get the display name for this era.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Ancient => "Ancient",
            Self::Renaissance => "Renaissance",
            Self::Industrial => "Industrial",
            Self::Modern => "Modern",
        }
    }
}

/// Size class of a city, derived from its population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CitySize {
    /// Population 1-3.
    Village,
    /// Population 4-8.
    Town,
    /// Population 9-16.
    City,
    /// Population 17 and above.
    Metropolis,
}

impl CitySize {
    /// Largest population a city may reach without an Aqueduct.
    pub const TOWN_CAP: u32 = 8;

    /// Classify a population count.
    #[must_use]
    pub const fn from_population(population: u32) -> Self {
        match population {
            0..=3 => Self::Village,
            4..=8 => Self::Town,
            9..=16 => Self::City,
            _ => Self::Metropolis,
        }
    }
}

/// Mood of a single citizen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Happiness {
    /// Happy citizen.
    Happy,
    /// Content citizen.
    Content,
    /// Unhappy citizen.
    Unhappy,
}

impl Happiness {
    /// All moods, best first.
    pub const ALL: [Self; 3] = [Self::Happy, Self::Content, Self::Unhappy];
}

/// Role a citizen plays in its city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitizenType {
    /// Works a map square.
    Worker,
    /// Produces luxuries.
    Entertainer,
    /// Produces tax revenue.
    TaxCollector,
    /// Produces science.
    Scientist,
}

impl CitizenType {
    /// All citizen types.
    pub const ALL: [Self; 4] = [
        Self::Worker,
        Self::Entertainer,
        Self::TaxCollector,
        Self::Scientist,
    ];

    /// Specialists do not work the land.
    #[must_use]
    pub const fn is_specialist(self) -> bool {
        !matches!(self, Self::Worker)
    }
}
