//! The read-only catalog of buildables.
//!
//! The catalog is built once from [`CatalogData`], validated eagerly, and
//! never mutated afterwards. It owns exactly one `Arc` descriptor per
//! variant. Stateless variants are built by handing out a clone of that
//! `Arc`; units are built as fresh [`Unit`] values with unique IDs.
//!
//! Any catalog data error is fatal: [`Catalog::from_data`] refuses to
//! construct a catalog from data with even one invalid entry.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::buildable::{BuildCategory, BuildContext, BuildableId, Built, Cost, Descriptor};
use crate::data::CatalogData;
use crate::error::{GameError, Result};
use crate::ids::{KnownAdvances, UnitId};
use crate::improvement::{ImprovementKind, ImprovementType};
use crate::spaceship::{SpaceShipPartKind, SpaceShipPartType};
use crate::unit::{Unit, UnitKind, UnitType};

/// The standard catalog shipped with the game.
pub const STANDARD_CATALOG_RON: &str = include_str!("../assets/standard_catalog.ron");

/// First ID handed to a newly built unit.
const FIRST_UNIT_ID: u64 = 1;

/// Registry of every buildable descriptor.
///
/// # Thread Safety
///
/// The registry is immutable after construction (the unit ID counter is
/// atomic), so it can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct Catalog {
    improvements: BTreeMap<ImprovementKind, Arc<ImprovementType>>,
    units: BTreeMap<UnitKind, Arc<UnitType>>,
    spaceship_parts: BTreeMap<SpaceShipPartKind, Arc<SpaceShipPartType>>,
    next_unit_id: AtomicU64,
}

impl Catalog {
    /// Load the embedded standard catalog.
    pub fn standard() -> Result<Self> {
        Self::from_ron_str(STANDARD_CATALOG_RON, "<standard catalog>")
    }

    /// Parse and validate catalog data from RON text.
    ///
    /// `source` names the text in error messages.
    pub fn from_ron_str(text: &str, source: &str) -> Result<Self> {
        let data: CatalogData = ron::from_str(text).map_err(|e| GameError::DataParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        Self::from_data(&data)
    }

    /// Load a catalog from a RON file.
    pub fn load(path: &Path) -> Result<Self> {
        let path_str = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| GameError::DataParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        Self::from_ron_str(&text, &path_str)
    }

    /// Validate catalog data and build the registry.
    ///
    /// Every problem in the data is reported at once.
    pub fn from_data(data: &CatalogData) -> Result<Self> {
        let mut errors = data.check_coverage();

        let mut improvements = BTreeMap::new();
        for entry in &data.improvements {
            if let Some(t) = entry.resolve(&mut errors) {
                improvements.entry(t.kind).or_insert_with(|| Arc::new(t));
            }
        }

        let mut units = BTreeMap::new();
        for entry in &data.units {
            if let Some(t) = entry.resolve(&mut errors) {
                units.entry(t.kind).or_insert_with(|| Arc::new(t));
            }
        }

        let mut spaceship_parts = BTreeMap::new();
        for entry in &data.spaceship_parts {
            if let Some(t) = entry.resolve(&mut errors) {
                spaceship_parts.entry(t.kind).or_insert_with(|| Arc::new(t));
            }
        }

        if !errors.is_empty() {
            for error in &errors {
                tracing::error!(%error, "Invalid catalog entry");
            }
            return Err(GameError::InvalidCatalog { errors });
        }

        tracing::info!(
            "Loaded catalog with {} improvements, {} units, {} spaceship parts",
            improvements.len(),
            units.len(),
            spaceship_parts.len()
        );

        Ok(Self {
            improvements,
            units,
            spaceship_parts,
            next_unit_id: AtomicU64::new(FIRST_UNIT_ID),
        })
    }

    /// Get an improvement descriptor.
    pub fn improvement(&self, kind: ImprovementKind) -> Result<&Arc<ImprovementType>> {
        self.improvements
            .get(&kind)
            .ok_or(GameError::UnknownBuildable(BuildableId::Improvement(kind)))
    }

    /// Get a unit type descriptor.
    pub fn unit_type(&self, kind: UnitKind) -> Result<&Arc<UnitType>> {
        self.units
            .get(&kind)
            .ok_or(GameError::UnknownBuildable(BuildableId::Unit(kind)))
    }

    /// Get a spaceship part descriptor.
    pub fn spaceship_part(&self, kind: SpaceShipPartKind) -> Result<&Arc<SpaceShipPartType>> {
        self.spaceship_parts
            .get(&kind)
            .ok_or(GameError::UnknownBuildable(BuildableId::SpaceShipPart(kind)))
    }

    /// Get any descriptor by key.
    pub fn descriptor(&self, id: BuildableId) -> Result<Descriptor> {
        Ok(match id {
            BuildableId::Improvement(kind) => {
                Descriptor::Improvement(Arc::clone(self.improvement(kind)?))
            }
            BuildableId::Unit(kind) => Descriptor::Unit(Arc::clone(self.unit_type(kind)?)),
            BuildableId::SpaceShipPart(kind) => {
                Descriptor::SpaceShipPart(Arc::clone(self.spaceship_part(kind)?))
            }
        })
    }

    /// All descriptors in canonical order: improvements, units, parts.
    pub fn descriptors(&self) -> impl Iterator<Item = Descriptor> + '_ {
        self.improvements
            .values()
            .cloned()
            .map(Descriptor::Improvement)
            .chain(self.units.values().cloned().map(Descriptor::Unit))
            .chain(
                self.spaceship_parts
                    .values()
                    .cloned()
                    .map(Descriptor::SpaceShipPart),
            )
    }

    /// Total number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.improvements.len() + self.units.len() + self.spaceship_parts.len()
    }

    /// Check if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cost attributes of a buildable.
    pub fn cost_of(&self, id: BuildableId) -> Result<Cost> {
        Ok(*self.descriptor(id)?.cost())
    }

    /// Whether a civilization knowing `known` may build `id`.
    pub fn is_buildable(&self, id: BuildableId, known: &KnownAdvances) -> Result<bool> {
        Ok(self.descriptor(id)?.is_buildable(known))
    }

    /// Everything in `category` buildable under `known`, in canonical order.
    #[must_use]
    pub fn list_buildable(
        &self,
        known: &KnownAdvances,
        category: BuildCategory,
    ) -> Vec<Descriptor> {
        self.descriptors()
            .filter(|d| category.matches(d) && d.is_buildable(known))
            .collect()
    }

    /// Factory: produce the built value for `id`.
    ///
    /// Improvements and spaceship parts return the shared catalog
    /// descriptor and ignore `context`. Units need a city or a map
    /// location and player; each call returns a new unit with a fresh ID.
    /// Fails with [`GameError::UnitIdsExhausted`] once no IDs are left.
    pub fn create_at_location(&self, id: BuildableId, context: BuildContext) -> Result<Built> {
        let built = match id {
            BuildableId::Improvement(kind) => {
                Built::Improvement(Arc::clone(self.improvement(kind)?))
            }
            BuildableId::SpaceShipPart(kind) => {
                Built::SpaceShipPart(Arc::clone(self.spaceship_part(kind)?))
            }
            BuildableId::Unit(kind) => {
                let unit_type = self.unit_type(kind)?;
                let owner = context.owner()?;
                Built::Unit(Unit::new(self.allocate_unit_id()?, unit_type, owner))
            }
        };
        #[cfg(feature = "debug-validation")]
        if built.id() != id {
            tracing::error!(
                requested = %id,
                built = %built.id(),
                "Factory produced the wrong buildable"
            );
            return Err(GameError::UnknownBuildable(id));
        }
        tracing::debug!(buildable = %id, ?context, "Created buildable");
        Ok(built)
    }

    /// Factory with prerequisite gating.
    ///
    /// Rejects builds whose prerequisite is unknown or whose obsoleting
    /// advance is known; the catalog is unchanged on rejection.
    pub fn build(
        &self,
        id: BuildableId,
        context: BuildContext,
        known: &KnownAdvances,
    ) -> Result<Built> {
        self.descriptor(id)?.prerequisites().check(id, known)?;
        self.create_at_location(id, context)
    }

    /// Continue unit numbering after `last`, e.g. when resuming a saved
    /// game. IDs already handed out are never reissued.
    pub fn resume_unit_ids_after(&self, last: UnitId) {
        self.next_unit_id
            .fetch_max(last.0.saturating_add(1), Ordering::Relaxed);
    }

    // `u64::MAX` is never issued; a counter holding it is exhausted.
    fn allocate_unit_id(&self) -> Result<UnitId> {
        self.next_unit_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| next.checked_add(1))
            .map(UnitId)
            .map_err(|_| GameError::UnitIdsExhausted)
    }
}
