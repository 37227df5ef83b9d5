//! Buildable listings.

use std::fmt::Write as _;

use empire_core::buildable::{BuildCategory, Descriptor};
use empire_core::catalog::Catalog;
use empire_core::ids::{AdvanceId, KnownAdvances};
use empire_core::unit::Domain;
use serde::Serialize;

use crate::{Result, ToolError};

/// Parse a `--category` value.
///
/// # Errors
///
/// Returns [`ToolError::UnknownCategory`] for anything unrecognised.
pub fn parse_category(value: &str) -> Result<BuildCategory> {
    match value.trim().to_ascii_lowercase().as_str() {
        "improvement" | "improvements" => Ok(BuildCategory::Improvement),
        "spaceship" | "spaceship_part" | "spaceship_parts" => Ok(BuildCategory::SpaceShipPart),
        "unit" | "units" => Ok(BuildCategory::Unit(None)),
        "land" => Ok(BuildCategory::Unit(Some(Domain::Land))),
        "sea" => Ok(BuildCategory::Unit(Some(Domain::Sea))),
        "air" => Ok(BuildCategory::Unit(Some(Domain::Air))),
        other => Err(ToolError::UnknownCategory(other.to_string())),
    }
}

/// Parse a comma-separated advance list. Blank items are skipped.
#[must_use]
pub fn parse_known(value: &str) -> KnownAdvances {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(AdvanceId::from)
        .collect()
}

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// Catalog key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Family, with the domain for units.
    pub category: &'static str,
    /// Production points.
    pub productivity: u32,
    /// Upkeep per turn.
    pub maintenance: u32,
    /// Price to buy outright.
    pub purchase: u32,
    /// Refund on sale.
    pub sell: u32,
    /// Required advance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<String>,
    /// Retiring advance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obsoleted_by: Option<String>,
}

impl From<&Descriptor> for ListEntry {
    fn from(descriptor: &Descriptor) -> Self {
        let cost = descriptor.cost();
        let prerequisites = descriptor.prerequisites();
        Self {
            key: descriptor.id().key().to_string(),
            name: descriptor.name().to_string(),
            category: category_label(descriptor),
            productivity: cost.productivity,
            maintenance: cost.maintenance,
            purchase: cost.purchase,
            sell: cost.sell,
            requires: prerequisites.requires.as_ref().map(ToString::to_string),
            obsoleted_by: prerequisites.obsoleted_by.as_ref().map(ToString::to_string),
        }
    }
}

fn category_label(descriptor: &Descriptor) -> &'static str {
    match descriptor {
        Descriptor::Improvement(_) => "improvement",
        Descriptor::SpaceShipPart(_) => "spaceship",
        Descriptor::Unit(unit) => match unit.domain {
            Domain::Land => "land",
            Domain::Sea => "sea",
            Domain::Air => "air",
        },
    }
}

/// Everything buildable with `known`, optionally restricted to one
/// category, in catalog order.
#[must_use]
pub fn list_entries(
    catalog: &Catalog,
    known: &KnownAdvances,
    category: Option<BuildCategory>,
) -> Vec<ListEntry> {
    let descriptors = match category {
        Some(category) => catalog.list_buildable(known, category),
        None => catalog
            .descriptors()
            .filter(|d| d.is_buildable(known))
            .collect(),
    };
    descriptors.iter().map(ListEntry::from).collect()
}

/// Render entries as an aligned text table.
#[must_use]
pub fn render_table(entries: &[ListEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:<20} {:<12} {:>6} {:>6} {:>8} {:>6}",
        "KEY", "NAME", "CATEGORY", "PROD", "MAINT", "PURCHASE", "SELL"
    );
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<16} {:<20} {:<12} {:>6} {:>6} {:>8} {:>6}",
            entry.key,
            entry.name,
            entry.category,
            entry.productivity,
            entry.maintenance,
            entry.purchase,
            entry.sell
        );
    }
    out
}

/// Render entries as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(entries: &[ListEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
