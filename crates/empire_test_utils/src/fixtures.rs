//! Test fixtures and helpers.
//!
//! Pre-built catalogs, advance sets and build contexts
//! for consistent testing.

use empire_core::buildable::BuildContext;
use empire_core::catalog::Catalog;
use empire_core::ids::{advances, AdvanceId, CityId, KnownAdvances, MapSquare, PlayerId};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Load the embedded standard catalog.
///
/// # Panics
/// Panics if the embedded catalog fails validation.
#[must_use]
pub fn standard_catalog() -> Catalog {
    match Catalog::standard() {
        Ok(catalog) => catalog,
        Err(e) => panic!("standard catalog must load: {e}"),
    }
}

/// Build an advance set from a list.
#[must_use]
pub fn known(list: &[AdvanceId]) -> KnownAdvances {
    list.iter().cloned().collect()
}

/// Every advance the standard catalog mentions.
#[must_use]
pub fn all_advances() -> KnownAdvances {
    known(&advances::ALL)
}

/// Advances of a civilization just entering the age of sail.
#[must_use]
pub fn age_of_sail() -> KnownAdvances {
    known(&[
        advances::POTTERY,
        advances::MASONRY,
        advances::MAP_MAKING,
        advances::NAVIGATION,
        advances::MAGNETISM,
    ])
}

/// Context for units built in a city.
#[must_use]
pub const fn city_context(city: u32) -> BuildContext {
    BuildContext::City(CityId(city))
}

/// Context for units placed directly on the map.
#[must_use]
pub const fn field_context(x: i32, y: i32, player: u16) -> BuildContext {
    BuildContext::Field {
        square: MapSquare::new(x, y),
        player: PlayerId(player),
    }
}
