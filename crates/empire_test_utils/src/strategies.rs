//! Proptest strategies for catalog and event types.

use empire_core::buildable::{BuildCategory, BuildContext, BuildableId};
use empire_core::data::CostData;
use empire_core::events::{
    GameEvent, NextUnitEvent, SquareChangedEvent, SquareDiscoveredEvent,
};
use empire_core::ids::{advances, CityId, KnownAdvances, MapSquare, PlayerId};
use empire_core::unit::Domain;
use proptest::prelude::*;
use proptest::sample::subsequence;

/// Any subset of the advances the standard catalog mentions.
pub fn arb_known_advances() -> impl Strategy<Value = KnownAdvances> {
    subsequence(advances::ALL.to_vec(), 0..=advances::ALL.len())
        .prop_map(|list| list.into_iter().collect())
}

/// Any catalog key.
pub fn arb_buildable_id() -> impl Strategy<Value = BuildableId> {
    let all: Vec<BuildableId> = BuildableId::all().collect();
    proptest::sample::select(all)
}

/// Any listing category.
pub fn arb_category() -> impl Strategy<Value = BuildCategory> {
    prop_oneof![
        Just(BuildCategory::Improvement),
        Just(BuildCategory::SpaceShipPart),
        Just(BuildCategory::Unit(None)),
        Just(BuildCategory::Unit(Some(Domain::Land))),
        Just(BuildCategory::Unit(Some(Domain::Sea))),
        Just(BuildCategory::Unit(Some(Domain::Air))),
    ]
}

/// A map square on a typical map.
pub fn arb_square() -> impl Strategy<Value = MapSquare> {
    (0i32..80, 0i32..50).prop_map(|(x, y)| MapSquare::new(x, y))
}

/// A player slot.
pub fn arb_player() -> impl Strategy<Value = PlayerId> {
    (0u16..8).prop_map(PlayerId)
}

/// Either build context a unit can be created in.
pub fn arb_unit_context() -> impl Strategy<Value = BuildContext> {
    prop_oneof![
        (1u32..500).prop_map(|c| BuildContext::City(CityId(c))),
        (arb_square(), arb_player())
            .prop_map(|(square, player)| BuildContext::Field { square, player }),
    ]
}

/// Cost data following the pricing convention.
pub fn arb_standard_cost() -> impl Strategy<Value = CostData> {
    (0i64..1000, 0i64..20).prop_map(|(productivity, maintenance)| {
        CostData::standard(productivity, maintenance)
    })
}

/// Cost data with arbitrary, possibly invalid, figures.
pub fn arb_cost_data() -> impl Strategy<Value = CostData> {
    (-50i64..1000, -5i64..20, -50i64..4000, -50i64..1000).prop_map(
        |(productivity, maintenance, purchase, sell)| CostData {
            productivity,
            maintenance,
            purchase,
            sell,
        },
    )
}

/// Simple events without unit payloads.
pub fn arb_simple_event() -> impl Strategy<Value = GameEvent> {
    prop_oneof![
        arb_square().prop_map(|s| SquareChangedEvent::new(s).into()),
        (arb_player(), arb_square())
            .prop_map(|(p, s)| SquareDiscoveredEvent::new(p, s).into()),
        arb_player().prop_map(|p| NextUnitEvent::new(p, None).into()),
    ]
}
