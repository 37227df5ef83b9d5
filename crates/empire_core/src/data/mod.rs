//! Data structures for catalog configuration.
//!
//! This module contains plain data structures that describe improvements,
//! units and spaceship parts as they appear in RON files. Numbers are read
//! as signed integers so negative entries can be reported instead of
//! silently wrapping.
//!
//! **Note:** This module contains no IO - it only defines data types and
//! their validation. File loading is handled by [`crate::catalog`].

mod catalog_data;
mod cost_data;
mod improvement_data;
mod spaceship_data;
mod unit_data;

pub use catalog_data::CatalogData;
pub use cost_data::CostData;
pub use improvement_data::ImprovementData;
pub use spaceship_data::SpaceShipPartData;
pub use unit_data::UnitData;
