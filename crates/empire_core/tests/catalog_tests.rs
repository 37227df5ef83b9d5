//! End-to-end tests for the buildable catalog.
//!
//! Drives the standard catalog through a civilization's advance
//! progression and checks gating, identity and unit ownership.

use std::sync::Arc;

use empire_core::prelude::*;
use empire_test_utils::fixtures::{
    age_of_sail, all_advances, city_context, field_context, init_tracing, known,
    standard_catalog,
};

fn unit_keys(catalog: &Catalog, known: &KnownAdvances, domain: Domain) -> Vec<&'static str> {
    catalog
        .list_buildable(known, BuildCategory::Unit(Some(domain)))
        .iter()
        .map(|d| d.id().key())
        .collect()
}

// ==========================================================================
// Advance Progression
// ==========================================================================

#[test]
fn test_navy_follows_advance_progression() {
    init_tracing();
    let catalog = standard_catalog();
    let frigate = BuildableId::Unit(UnitKind::Frigate);

    let mut known = known(&[advances::MAGNETISM]);
    assert_eq!(unit_keys(&catalog, &known, Domain::Sea), vec!["frigate"]);
    assert!(catalog.build(frigate, city_context(1), &known).is_ok());

    known.insert(advances::STEEL);
    assert_eq!(
        unit_keys(&catalog, &known, Domain::Sea),
        vec!["frigate", "cruiser", "battleship"]
    );

    known.insert(advances::INDUSTRIALIZATION);
    assert_eq!(
        unit_keys(&catalog, &known, Domain::Sea),
        vec!["transport", "cruiser", "battleship"]
    );
    let err = catalog.build(frigate, city_context(1), &known).unwrap_err();
    assert!(matches!(
        err,
        GameError::Obsolete { advance, .. } if advance == advances::INDUSTRIALIZATION
    ));
}

#[test]
fn test_nothing_but_basics_without_advances() {
    let catalog = standard_catalog();
    let none = KnownAdvances::new();

    let improvements: Vec<_> = catalog
        .list_buildable(&none, BuildCategory::Improvement)
        .iter()
        .map(|d| d.id().key())
        .collect();
    assert_eq!(improvements, vec!["barracks", "temple"]);
    assert!(catalog.list_buildable(&none, BuildCategory::Unit(None)).is_empty());
    assert!(catalog
        .list_buildable(&none, BuildCategory::SpaceShipPart)
        .is_empty());
}

#[test]
fn test_spaceship_needs_space_age() {
    let catalog = standard_catalog();
    let everything = all_advances();
    let parts = catalog.list_buildable(&everything, BuildCategory::SpaceShipPart);
    assert_eq!(parts.len(), 3);

    let remaining: u64 = parts
        .iter()
        .map(|d| match d {
            Descriptor::SpaceShipPart(part) => part.remaining_production(0),
            _ => 0,
        })
        .sum();
    assert!(remaining > 0);
}

#[test]
fn test_obsolete_units_never_listed_with_everything_known() {
    let catalog = standard_catalog();
    let everything = all_advances();
    let sea = unit_keys(&catalog, &everything, Domain::Sea);
    for retired in ["trireme", "sail", "frigate", "ironclad"] {
        assert!(!sea.contains(&retired), "{retired} should be obsolete");
    }
}

// ==========================================================================
// Identity and Ownership
// ==========================================================================

#[test]
fn test_stateless_builds_share_descriptor() {
    let catalog = standard_catalog();
    let known = all_advances();
    let library = BuildableId::Improvement(ImprovementKind::Library);

    let a = catalog.build(library, BuildContext::None, &known).unwrap();
    let b = catalog.build(library, city_context(9), &known).unwrap();
    match (a, b) {
        (Built::Improvement(a), Built::Improvement(b)) => {
            assert!(Arc::ptr_eq(&a, &b));
            assert!(Arc::ptr_eq(
                &a,
                catalog.improvement(ImprovementKind::Library).unwrap()
            ));
        }
        other => panic!("expected improvements, got {other:?}"),
    }
}

#[test]
fn test_units_are_distinct_and_owned() {
    let catalog = standard_catalog();
    let known = age_of_sail();
    let frigate = BuildableId::Unit(UnitKind::Frigate);

    let a = catalog
        .build(frigate, city_context(3), &known)
        .unwrap()
        .into_unit()
        .unwrap();
    let b = catalog
        .build(frigate, field_context(10, 4, 2), &known)
        .unwrap()
        .into_unit()
        .unwrap();

    assert_ne!(a.id(), b.id());
    assert_eq!(a.home_city(), Some(CityId(3)));
    assert_eq!(a.location(), None);
    assert_eq!(b.location(), Some(MapSquare::new(10, 4)));
    assert_eq!(b.player(), Some(PlayerId(2)));
}

#[test]
fn test_unit_without_owner_rejected() {
    let catalog = standard_catalog();
    let result = catalog.build(
        BuildableId::Unit(UnitKind::Frigate),
        BuildContext::None,
        &age_of_sail(),
    );
    assert!(matches!(result, Err(GameError::Configuration(_))));
}

#[test]
fn test_carrier_takes_fighters_only_up_to_capacity() {
    let catalog = standard_catalog();
    let known = all_advances();
    let context = field_context(0, 0, 1);

    let mut carrier = catalog
        .build(BuildableId::Unit(UnitKind::Carrier), context, &known)
        .unwrap()
        .into_unit()
        .unwrap();
    let carrier_type = Arc::clone(catalog.unit_type(UnitKind::Carrier).unwrap());

    for _ in 0..carrier_type.capacity {
        let fighter = catalog
            .build(BuildableId::Unit(UnitKind::Fighter), context, &known)
            .unwrap()
            .into_unit()
            .unwrap();
        carrier.load(&carrier_type, fighter).unwrap();
    }

    let extra = catalog
        .build(BuildableId::Unit(UnitKind::Fighter), context, &known)
        .unwrap()
        .into_unit()
        .unwrap();
    let extra_id = extra.id();
    let rejected = carrier.load(&carrier_type, extra).unwrap_err();
    assert!(matches!(rejected.error, CargoError::Full { capacity: 8, .. }));
    assert_eq!(rejected.unit.id(), extra_id);

    let submarine = catalog
        .build(BuildableId::Unit(UnitKind::Submarine), context, &known)
        .unwrap()
        .into_unit()
        .unwrap();
    let first = carrier.cargo()[0].id();
    carrier.unload(first).unwrap();
    let rejected = carrier.load(&carrier_type, submarine).unwrap_err();
    assert!(matches!(rejected.error, CargoError::WrongDomain { .. }));
}

#[test]
fn test_resumed_ids_do_not_collide() {
    let catalog = standard_catalog();
    catalog.resume_unit_ids_after(UnitId(500));
    let unit = catalog
        .build(
            BuildableId::Unit(UnitKind::Trireme),
            city_context(1),
            &known(&[advances::MAP_MAKING]),
        )
        .unwrap()
        .into_unit()
        .unwrap();
    assert_eq!(unit.id(), UnitId(501));
}

// ==========================================================================
// Data Files
// ==========================================================================

#[test]
fn test_catalog_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.ron");
    std::fs::write(&path, empire_core::catalog::STANDARD_CATALOG_RON).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), BuildableId::all().count());
}

#[test]
fn test_every_entry_follows_price_convention() {
    let catalog = standard_catalog();
    for descriptor in catalog.descriptors() {
        let cost = descriptor.cost();
        assert_eq!(cost.purchase, cost.productivity * 4, "{}", descriptor.id());
        assert_eq!(cost.sell, cost.productivity, "{}", descriptor.id());
    }
}
