//! Map and world-customization enumerations.
//!
//! These are closed value sets shared with the map generator and the
//! terrain subsystem. They carry no behavior beyond small lookups.

use serde::{Deserialize, Serialize};

/// Compass direction between adjacent map squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    North,
    /// North-east.
    NorthEast,
    /// East.
    East,
    /// South-east.
    SouthEast,
    /// South.
    South,
    /// South-west.
    SouthWest,
    /// West.
    West,
    /// North-west.
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Square offset `(dx, dy)` for one step. North is negative `y`.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Whether this is one of the four diagonal directions.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::SouthEast | Self::SouthWest | Self::NorthWest
        )
    }
}

/// Climate humidity chosen when customizing the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Humidity {
    /// More desert, fewer rivers.
    Arid,
    /// Balanced climate.
    #[default]
    Normal,
    /// More jungle and swamp.
    Wet,
}

impl Humidity {
    /// All humidity settings.
    pub const ALL: [Self; 3] = [Self::Arid, Self::Normal, Self::Wet];
}

/// Global temperature chosen when customizing the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Temperature {
    /// More tundra and glacier.
    Cool,
    /// Balanced temperature.
    #[default]
    Temperate,
    /// More desert and jungle.
    Warm,
}

impl Temperature {
    /// All temperature settings.
    pub const ALL: [Self; 3] = [Self::Cool, Self::Temperate, Self::Warm];
}

/// Shape of the land masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LandShape {
    /// Many small islands.
    Archipelago,
    /// Mix of islands and continents.
    #[default]
    Varied,
    /// Few large continents.
    Continents,
}

impl LandShape {
    /// All land shapes.
    pub const ALL: [Self; 3] = [Self::Archipelago, Self::Varied, Self::Continents];
}

/// Age of the world, controlling erosion of terrain features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MapAge {
    /// Young world: more mountains and hills.
    ThreeBillionYears,
    /// Middle-aged world.
    #[default]
    FourBillionYears,
    /// Old world: flatter, more eroded terrain.
    FiveBillionYears,
}

impl MapAge {
    /// All map ages.
    pub const ALL: [Self; 3] = [
        Self::ThreeBillionYears,
        Self::FourBillionYears,
        Self::FiveBillionYears,
    ];

    /// Age in billions of years.
    #[must_use]
    pub const fn billions_of_years(self) -> u8 {
        match self {
            Self::ThreeBillionYears => 3,
            Self::FourBillionYears => 4,
            Self::FiveBillionYears => 5,
        }
    }
}

/// Share of the map covered by land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LandCoverage {
    /// Sparse land.
    Small,
    /// Typical land coverage.
    #[default]
    Normal,
    /// Dense land.
    Large,
}

impl LandCoverage {
    /// All coverage settings.
    pub const ALL: [Self; 3] = [Self::Small, Self::Normal, Self::Large];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_direction_offsets_cancel() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_diagonals() {
        let diagonals = Direction::ALL.iter().filter(|d| d.is_diagonal()).count();
        assert_eq!(diagonals, 4);
        assert!(!Direction::North.is_diagonal());
        assert!(Direction::SouthWest.is_diagonal());
    }

    #[test]
    fn test_map_age_years() {
        assert_eq!(MapAge::ThreeBillionYears.billions_of_years(), 3);
        assert_eq!(MapAge::default().billions_of_years(), 4);
    }
}
