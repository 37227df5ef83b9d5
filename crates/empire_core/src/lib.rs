//! # Empire Core
//!
//! Rules core for a turn-based empire-building game.
//!
//! This crate holds the game's building blocks, independent of any UI:
//! - The buildable catalog: city improvements, units and spaceship parts,
//!   their costs and the advances that unlock or retire them
//! - Shared world and society enumerations
//! - Game-state events and a synchronous bus to deliver them
//!
//! ## Crate Structure
//!
//! - [`catalog`] - Registry and factory for everything a city can build
//! - [`buildable`] - Costs, prerequisites and build contexts
//! - [`improvement`], [`unit`], [`spaceship`] - The three buildable families
//! - [`data`] - RON definitions the catalog is loaded from
//! - [`events`], [`event_log`] - Notifications and their persisted record
//! - [`world`], [`society`] - Enumerations shared across the game
//! - [`math`] - Fixed-point math utilities

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod buildable;
pub mod catalog;
pub mod data;
pub mod error;
pub mod event_log;
pub mod events;
pub mod ids;
pub mod improvement;
pub mod math;
pub mod society;
pub mod spaceship;
pub mod unit;
pub mod world;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::buildable::{
        BuildCategory, BuildContext, BuildableId, Built, Cost, Descriptor, Prerequisites,
    };
    pub use crate::catalog::Catalog;
    pub use crate::error::{CargoError, ConfigError, GameError, Result};
    pub use crate::event_log::{EventLog, SharedEventLog};
    pub use crate::events::{
        EventBus, EventKind, EventSubscriber, GameEvent, HutOutcome, KilledUnitEvent,
        SubscriberError,
    };
    pub use crate::ids::{advances, AdvanceId, CityId, KnownAdvances, MapSquare, PlayerId, UnitId};
    pub use crate::improvement::{ImprovementKind, ImprovementType};
    pub use crate::math::Fixed;
    pub use crate::spaceship::{SpaceShipPartKind, SpaceShipPartType};
    pub use crate::unit::{Domain, Unit, UnitKind, UnitOwner, UnitType};
}
