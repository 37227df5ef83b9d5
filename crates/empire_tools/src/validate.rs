//! Catalog validation.

use std::path::Path;

use empire_core::buildable::BuildableId;
use empire_core::catalog::Catalog;

use crate::Result;

/// Entry counts of a loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSummary {
    /// City improvements.
    pub improvements: usize,
    /// Unit types.
    pub units: usize,
    /// Spaceship parts.
    pub spaceship_parts: usize,
}

/// Load and validate a RON catalog, or the embedded standard catalog
/// when no path is given.
///
/// Every configuration problem is logged by the loader before the error
/// is returned.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or fails
/// validation.
pub fn validate_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::standard()?,
    };
    Ok(catalog)
}

/// Count the entries of each family.
#[must_use]
pub fn summarize(catalog: &Catalog) -> CatalogSummary {
    catalog
        .descriptors()
        .fold(CatalogSummary::default(), |mut summary, descriptor| {
            match descriptor.id() {
                BuildableId::Improvement(_) => summary.improvements += 1,
                BuildableId::Unit(_) => summary.units += 1,
                BuildableId::SpaceShipPart(_) => summary.spaceship_parts += 1,
            }
            summary
        })
}
