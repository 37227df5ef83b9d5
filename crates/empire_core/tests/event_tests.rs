//! Event delivery tests across the catalog, bus and log.

use std::cell::RefCell;
use std::rc::Rc;

use empire_core::events::{
    BarbarianDiplomatKilledEvent, DarwinsVoyageEvent, DeadPlayerEvent, EmitReport,
    ForcedAdvanceEvent, HutDiscoveredEvent, SquareChangedEvent,
};
use empire_core::prelude::*;
use empire_test_utils::fixtures::{all_advances, field_context, init_tracing, standard_catalog};

#[test]
fn test_stack_killed_in_one_combat_is_one_event() {
    init_tracing();
    let catalog = standard_catalog();
    let known = all_advances();
    let square = MapSquare::new(12, 7);
    let context = field_context(12, 7, 2);

    let stack: Vec<Unit> = [UnitKind::Cruiser, UnitKind::Transport, UnitKind::Submarine]
        .into_iter()
        .map(|kind| {
            catalog
                .build(BuildableId::Unit(kind), context, &known)
                .unwrap()
                .into_unit()
                .unwrap()
        })
        .collect();

    let log = SharedEventLog::new();
    let mut bus = EventBus::new();
    bus.subscribe(log.clone());

    let event = KilledUnitEvent::new(square, stack, PlayerId(1)).unwrap();
    let report = bus.emit(event);
    assert_eq!(report, EmitReport { delivered: 1, failed: 0 });

    let log = log.log();
    assert_eq!(log.len(), 1);
    match &log.records()[0].event {
        GameEvent::UnitsKilled(killed) => {
            assert_eq!(killed.square(), square);
            assert_eq!(killed.units().len(), 3);
            assert_eq!(killed.killer(), PlayerId(1));
            assert!(killed.units().iter().all(|u| u.location() == Some(square)));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn test_turn_sequence_is_logged_in_order() {
    let log = SharedEventLog::new();
    let mut bus = EventBus::new();
    bus.subscribe(log.clone());

    bus.emit(ForcedAdvanceEvent::new(PlayerId(1), advances::WRITING, false));
    log.log_mut().begin_turn(2).unwrap();
    bus.emit(DarwinsVoyageEvent::new(
        PlayerId(1),
        vec![advances::NAVIGATION, advances::MAGNETISM],
    ));
    bus.emit(BarbarianDiplomatKilledEvent::new(
        PlayerId(1),
        MapSquare::new(3, 3),
        100,
    ));
    bus.emit(DeadPlayerEvent::new(PlayerId(4), PlayerId(1)));

    let log = log.log();
    let kinds: Vec<_> = log.events_in_turn(2).map(GameEvent::kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::DarwinsVoyage,
            EventKind::BarbarianDiplomatKilled,
            EventKind::PlayerDied
        ]
    );
    assert_eq!(log.events_in_turn(0).count(), 1);
}

#[test]
fn test_hut_mercenaries_carry_their_unit() {
    let catalog = standard_catalog();
    let square = MapSquare::new(5, 5);
    let mercenary = catalog
        .create_at_location(BuildableId::Unit(UnitKind::Trireme), field_context(5, 5, 3))
        .unwrap()
        .into_unit()
        .unwrap();

    let received = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&received);
    let mut bus = EventBus::new();
    bus.subscribe(move |event: &GameEvent| {
        if let GameEvent::HutDiscovered(hut) = event {
            if let HutOutcome::Mercenaries(unit) = hut.outcome() {
                *sink.borrow_mut() = Some(unit.id());
            }
        }
        Ok(())
    });

    let id = mercenary.id();
    bus.emit(HutDiscoveredEvent::new(
        PlayerId(3),
        square,
        HutOutcome::Mercenaries(mercenary),
    ));
    assert_eq!(*received.borrow(), Some(id));
}

#[test]
fn test_bad_subscriber_leaves_log_intact() {
    let log = SharedEventLog::new();
    let mut bus = EventBus::new();
    bus.subscribe(|_: &GameEvent| Err(SubscriberError("renderer offline".to_string())));
    bus.subscribe(log.clone());

    let report = bus.emit_all((0..4).map(|x| SquareChangedEvent::new(MapSquare::new(x, 0))));
    assert_eq!(report, EmitReport { delivered: 4, failed: 4 });
    assert_eq!(log.log().len(), 4);
}

#[test]
fn test_saved_log_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.bin");

    let catalog = standard_catalog();
    let unit = catalog
        .create_at_location(BuildableId::Unit(UnitKind::Fighter), field_context(1, 2, 1))
        .unwrap()
        .into_unit()
        .unwrap();

    let mut log = EventLog::new();
    log.begin_turn(40).unwrap();
    log.record(
        KilledUnitEvent::new(MapSquare::new(1, 2), vec![unit], PlayerId(2))
            .unwrap()
            .into(),
    );
    log.save(&path).unwrap();

    let loaded = EventLog::load(&path).unwrap();
    assert_eq!(loaded, log);
    assert_eq!(loaded.events_of_kind(EventKind::UnitsKilled).count(), 1);
}
