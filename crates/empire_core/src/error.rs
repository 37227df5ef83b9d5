//! Error types for the catalog and event model.

use thiserror::Error;

use crate::buildable::BuildableId;
use crate::ids::{AdvanceId, UnitId};
use crate::math::Fixed;
use crate::unit::Domain;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Top-level error type for catalog and event operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// Invalid catalog entry or construction context.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Catalog data failed validation; every problem found is listed.
    #[error("Invalid catalog: {} validation errors", .errors.len())]
    InvalidCatalog {
        /// All validation errors, in catalog order.
        errors: Vec<ConfigError>,
    },

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path to the file that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },

    /// The builder has not researched the required advance.
    #[error("Cannot build {id}: requires {advance}")]
    PrerequisiteNotMet {
        /// What was requested.
        id: BuildableId,
        /// The missing advance.
        advance: AdvanceId,
    },

    /// The builder has researched an advance that retires this variant.
    #[error("Cannot build {id}: obsoleted by {advance}")]
    Obsolete {
        /// What was requested.
        id: BuildableId,
        /// The obsoleting advance.
        advance: AdvanceId,
    },

    /// The catalog has no entry for this buildable.
    #[error("Unknown buildable: {0}")]
    UnknownBuildable(BuildableId),

    /// A cargo operation on a unit failed.
    #[error("Cargo error: {0}")]
    Cargo(#[from] CargoError),

    /// Every unit ID has been handed out.
    #[error("No unit IDs left to allocate")]
    UnitIdsExhausted,

    /// Saving or loading persisted data failed.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// A single problem with catalog data or a construction request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A cost or stat is negative.
    #[error("{id}: {field} must not be negative (got {value})")]
    NegativeValue {
        /// Offending entry.
        id: BuildableId,
        /// Field name.
        field: &'static str,
        /// The negative value.
        value: i64,
    },

    /// A value does not fit the range of its field.
    #[error("{id}: {field} is out of range (got {value})")]
    ValueOutOfRange {
        /// Offending entry.
        id: BuildableId,
        /// Field name.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Purchase or sell price breaks the pricing convention.
    #[error(
        "{id}: purchase {purchase} and sell {sell} must be 4x and 1x productivity {productivity}"
    )]
    PriceConvention {
        /// Offending entry.
        id: BuildableId,
        /// Production cost.
        productivity: u32,
        /// Declared purchase price.
        purchase: u32,
        /// Declared sell value.
        sell: u32,
    },

    /// Only units can be obsoleted.
    #[error("{id}: only units may declare an obsoleting advance")]
    ObsoleteOnNonUnit {
        /// Offending entry.
        id: BuildableId,
    },

    /// The same advance both enables and obsoletes a variant.
    #[error("{id}: {advance} cannot be both prerequisite and obsoleting advance")]
    SelfObsoleting {
        /// Offending entry.
        id: BuildableId,
        /// The advance named twice.
        advance: AdvanceId,
    },

    /// An improvement multiplier is zero or negative.
    #[error("{id}: {effect} must be positive (got {value})")]
    NonPositiveMultiplier {
        /// Offending entry.
        id: BuildableId,
        /// Effect name.
        effect: &'static str,
        /// The rejected multiplier.
        value: Fixed,
    },

    /// A variant has no entry in the catalog data.
    #[error("{0}: missing from catalog data")]
    MissingVariant(BuildableId),

    /// A variant appears more than once.
    #[error("{0}: defined more than once")]
    DuplicateVariant(BuildableId),

    /// A unit declares cargo capacity but no cargo domain.
    #[error("{id}: capacity {capacity} requires a cargo domain")]
    CargoWithoutDomain {
        /// Offending entry.
        id: BuildableId,
        /// Declared capacity.
        capacity: u8,
    },

    /// A unit build request did not name exactly one owner.
    #[error("Invalid construction context: {0}")]
    InvalidContext(&'static str),
}

/// Errors from loading or unloading transported units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CargoError {
    /// The carrier type has no cargo hold.
    #[error("{carrier} cannot carry units")]
    NotACarrier {
        /// The would-be carrier.
        carrier: UnitId,
    },

    /// The cargo is the wrong kind of unit for this hold.
    #[error("{carrier} only carries {accepts:?} units, {cargo} is {found:?}")]
    WrongDomain {
        /// The carrier.
        carrier: UnitId,
        /// The rejected cargo.
        cargo: UnitId,
        /// Domain the hold accepts.
        accepts: Domain,
        /// Domain of the rejected cargo.
        found: Domain,
    },

    /// The hold is full.
    #[error("{carrier} is full ({capacity} units)")]
    Full {
        /// The carrier.
        carrier: UnitId,
        /// Hold capacity.
        capacity: u8,
    },

    /// The unit type passed does not describe this unit.
    #[error("{unit}: unit type does not match")]
    TypeMismatch {
        /// The unit whose type was wrong.
        unit: UnitId,
    },

    /// The requested cargo is not aboard.
    #[error("{cargo} is not aboard {carrier}")]
    NotAboard {
        /// The carrier.
        carrier: UnitId,
        /// The missing cargo.
        cargo: UnitId,
    },
}
