//! Property-based tests for catalog gating and the event bus.

#![allow(missing_docs)]

use empire_core::data::CatalogData;
use empire_core::prelude::*;
use empire_test_utils::fixtures::standard_catalog;
use proptest::prelude::*;
use empire_test_utils::strategies::{
    arb_buildable_id, arb_category, arb_cost_data, arb_known_advances, arb_simple_event,
    arb_standard_cost, arb_unit_context,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Listing agrees with per-entry buildability.
    #[test]
    fn prop_listing_matches_buildability(
        known in arb_known_advances(),
        category in arb_category()
    ) {
        let catalog = standard_catalog();
        let listed: Vec<BuildableId> = catalog
            .list_buildable(&known, category)
            .iter()
            .map(Descriptor::id)
            .collect();

        for descriptor in catalog.descriptors() {
            let expected = category.matches(&descriptor) && descriptor.is_buildable(&known);
            prop_assert_eq!(listed.contains(&descriptor.id()), expected);
        }
    }

    /// Gated builds succeed exactly when the entry is buildable.
    #[test]
    fn prop_build_respects_gating(
        known in arb_known_advances(),
        id in arb_buildable_id(),
        context in arb_unit_context()
    ) {
        let catalog = standard_catalog();
        let buildable = catalog.is_buildable(id, &known).unwrap();
        let result = catalog.build(id, context, &known);
        prop_assert_eq!(result.is_ok(), buildable);
        if let Ok(built) = result {
            prop_assert_eq!(built.id(), id);
        }
    }

    /// A catalog loads exactly when every cost is non-negative and priced
    /// by the convention.
    #[test]
    fn prop_catalog_accepts_only_conventional_prices(cost in arb_cost_data()) {
        let mut data: CatalogData =
            ron::from_str(empire_core::catalog::STANDARD_CATALOG_RON).unwrap();
        data.improvements[0].cost = cost;

        let valid = cost.productivity >= 0
            && cost.maintenance >= 0
            && cost.purchase == cost.productivity * 4
            && cost.sell == cost.productivity;
        prop_assert_eq!(Catalog::from_data(&data).is_ok(), valid);
    }

    /// Standard costs always load.
    #[test]
    fn prop_standard_cost_is_accepted(cost in arb_standard_cost()) {
        let mut data: CatalogData =
            ron::from_str(empire_core::catalog::STANDARD_CATALOG_RON).unwrap();
        data.units[0].cost = cost;
        prop_assert!(Catalog::from_data(&data).is_ok());
    }

    /// Every emitted event reaches every subscriber once, in order.
    #[test]
    fn prop_bus_delivers_everything(events in prop::collection::vec(arb_simple_event(), 0..32)) {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut bus = EventBus::new();
        bus.subscribe(move |event: &GameEvent| {
            sink.borrow_mut().push(event.clone());
            Ok(())
        });

        let report = bus.emit_all(events.clone());
        prop_assert_eq!(report.delivered, events.len());
        prop_assert_eq!(&*seen.borrow(), &events);
    }
}
