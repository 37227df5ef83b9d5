//! Game-state notifications for UI, AI and persistence layers.
//!
//! Each payload is an immutable value created when a state transition is
//! decided. The [`EventBus`] hands every event synchronously to its
//! subscribers, in the order events are raised and in subscription order.
//! Nothing is queued across turns and nothing is retried.
//!
//! Simultaneous consequences of one action are coalesced into one payload:
//! every unit that dies on a square in one combat travels in a single
//! [`KilledUnitEvent`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{AdvanceId, MapSquare, PlayerId, UnitId};
use crate::unit::Unit;

/// Units that died together on one square.
///
/// Never empty, also when decoded from a saved log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KilledUnitRecord")]
pub struct KilledUnitEvent {
    square: MapSquare,
    units: Vec<Unit>,
    killer: PlayerId,
}

#[derive(Deserialize)]
struct KilledUnitRecord {
    square: MapSquare,
    units: Vec<Unit>,
    killer: PlayerId,
}

impl TryFrom<KilledUnitRecord> for KilledUnitEvent {
    type Error = &'static str;

    fn try_from(record: KilledUnitRecord) -> Result<Self, Self::Error> {
        Self::new(record.square, record.units, record.killer)
            .ok_or("killed unit event must name at least one unit")
    }
}

impl KilledUnitEvent {
    /// Coalesce the units killed on `square` by one action.
    ///
    /// Returns `None` if no units died.
    #[must_use]
    pub fn new(square: MapSquare, units: Vec<Unit>, killer: PlayerId) -> Option<Self> {
        if units.is_empty() {
            return None;
        }
        Some(Self {
            square,
            units,
            killer,
        })
    }

    /// Where the units died.
    #[must_use]
    pub const fn square(&self) -> MapSquare {
        self.square
    }

    /// The dead units, in the order they were removed.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Player responsible.
    #[must_use]
    pub const fn killer(&self) -> PlayerId {
        self.killer
    }
}

/// A player was eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadPlayerEvent {
    player: PlayerId,
    killer: PlayerId,
}

impl DeadPlayerEvent {
    /// Create the event.
    #[must_use]
    pub const fn new(player: PlayerId, killer: PlayerId) -> Self {
        Self { player, killer }
    }

    /// The eliminated player.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// The player who destroyed them.
    #[must_use]
    pub const fn killer(&self) -> PlayerId {
        self.killer
    }
}

/// A player saw a map square for the first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareDiscoveredEvent {
    player: PlayerId,
    square: MapSquare,
}

impl SquareDiscoveredEvent {
    /// Create the event.
    #[must_use]
    pub const fn new(player: PlayerId, square: MapSquare) -> Self {
        Self { player, square }
    }

    /// Discovering player.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// The discovered square.
    #[must_use]
    pub const fn square(&self) -> MapSquare {
        self.square
    }
}

/// A player received an advance outside normal research.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedAdvanceEvent {
    player: PlayerId,
    advance: AdvanceId,
    was_in_progress_advance: bool,
}

impl ForcedAdvanceEvent {
    /// Create the event.
    #[must_use]
    pub const fn new(player: PlayerId, advance: AdvanceId, was_in_progress_advance: bool) -> Self {
        Self {
            player,
            advance,
            was_in_progress_advance,
        }
    }

    /// Receiving player.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// The advance granted.
    #[must_use]
    pub const fn advance(&self) -> &AdvanceId {
        &self.advance
    }

    /// Whether the advance was the one being researched, so research
    /// must pick a new goal.
    #[must_use]
    pub const fn was_in_progress_advance(&self) -> bool {
        self.was_in_progress_advance
    }
}

/// What a unit found in a tribal hut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HutOutcome {
    /// Treasury gold.
    Gold(u32),
    /// A free advance.
    Advance(AdvanceId),
    /// A unit joins the player.
    Mercenaries(Unit),
    /// Hostile barbarians appear.
    Barbarians,
    /// The hut was empty.
    Nothing,
}

/// A unit entered a tribal hut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HutDiscoveredEvent {
    player: PlayerId,
    square: MapSquare,
    outcome: HutOutcome,
}

impl HutDiscoveredEvent {
    /// Create the event.
    #[must_use]
    pub const fn new(player: PlayerId, square: MapSquare, outcome: HutOutcome) -> Self {
        Self {
            player,
            square,
            outcome,
        }
    }

    /// Player whose unit entered the hut.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Hut location.
    #[must_use]
    pub const fn square(&self) -> MapSquare {
        self.square
    }

    /// What was found.
    #[must_use]
    pub const fn outcome(&self) -> &HutOutcome {
        &self.outcome
    }
}

/// Unit cycling moved to the next unit awaiting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextUnitEvent {
    player: PlayerId,
    unit: Option<UnitId>,
}

impl NextUnitEvent {
    /// Create the event. `None` means no unit is left to move this turn.
    #[must_use]
    pub const fn new(player: PlayerId, unit: Option<UnitId>) -> Self {
        Self { player, unit }
    }

    /// Player whose units are cycling.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Unit now selected, if any.
    #[must_use]
    pub const fn unit(&self) -> Option<UnitId> {
        self.unit
    }
}

/// A player attacked someone they are at peace with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackInPeaceEvent {
    attacker: PlayerId,
    victim: PlayerId,
}

impl AttackInPeaceEvent {
    /// Create the event.
    #[must_use]
    pub const fn new(attacker: PlayerId, victim: PlayerId) -> Self {
        Self { attacker, victim }
    }

    /// Treaty breaker.
    #[must_use]
    pub const fn attacker(&self) -> PlayerId {
        self.attacker
    }

    /// Player attacked.
    #[must_use]
    pub const fn victim(&self) -> PlayerId {
        self.victim
    }
}

/// A player's unit killed a lone barbarian diplomat and collected ransom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarbarianDiplomatKilledEvent {
    player: PlayerId,
    square: MapSquare,
    ransom: u32,
}

impl BarbarianDiplomatKilledEvent {
    /// Create the event.
    #[must_use]
    pub const fn new(player: PlayerId, square: MapSquare, ransom: u32) -> Self {
        Self {
            player,
            square,
            ransom,
        }
    }

    /// Player collecting the ransom.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Where the diplomat died.
    #[must_use]
    pub const fn square(&self) -> MapSquare {
        self.square
    }

    /// Gold paid.
    #[must_use]
    pub const fn ransom(&self) -> u32 {
        self.ransom
    }
}

/// Darwin's Voyage completed and granted free advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DarwinsVoyageEvent {
    player: PlayerId,
    advances: Vec<AdvanceId>,
}

impl DarwinsVoyageEvent {
    /// Create the event.
    #[must_use]
    pub const fn new(player: PlayerId, advances: Vec<AdvanceId>) -> Self {
        Self { player, advances }
    }

    /// Player who built the wonder.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Advances granted, in grant order.
    #[must_use]
    pub fn advances(&self) -> &[AdvanceId] {
        &self.advances
    }
}

/// The contents of a map square changed (terrain, improvement, city).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareChangedEvent {
    square: MapSquare,
}

impl SquareChangedEvent {
    /// Create the event.
    #[must_use]
    pub const fn new(square: MapSquare) -> Self {
        Self { square }
    }

    /// The changed square.
    #[must_use]
    pub const fn square(&self) -> MapSquare {
        self.square
    }
}

/// Discriminant of a [`GameEvent`], for filtering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// [`KilledUnitEvent`].
    UnitsKilled,
    /// [`DeadPlayerEvent`].
    PlayerDied,
    /// [`SquareDiscoveredEvent`].
    SquareDiscovered,
    /// [`ForcedAdvanceEvent`].
    AdvanceForced,
    /// [`HutDiscoveredEvent`].
    HutDiscovered,
    /// [`NextUnitEvent`].
    NextUnit,
    /// [`AttackInPeaceEvent`].
    AttackInPeace,
    /// [`BarbarianDiplomatKilledEvent`].
    BarbarianDiplomatKilled,
    /// [`DarwinsVoyageEvent`].
    DarwinsVoyage,
    /// [`SquareChangedEvent`].
    SquareChanged,
}

/// Any game-state notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Units died together.
    UnitsKilled(KilledUnitEvent),
    /// A player was eliminated.
    PlayerDied(DeadPlayerEvent),
    /// A square was seen for the first time.
    SquareDiscovered(SquareDiscoveredEvent),
    /// An advance was granted outside research.
    AdvanceForced(ForcedAdvanceEvent),
    /// A hut was entered.
    HutDiscovered(HutDiscoveredEvent),
    /// Unit cycling advanced.
    NextUnit(NextUnitEvent),
    /// A treaty was broken by an attack.
    AttackInPeace(AttackInPeaceEvent),
    /// A barbarian diplomat was killed.
    BarbarianDiplomatKilled(BarbarianDiplomatKilledEvent),
    /// Darwin's Voyage granted advances.
    DarwinsVoyage(DarwinsVoyageEvent),
    /// A square changed.
    SquareChanged(SquareChangedEvent),
}

impl GameEvent {
    /// Discriminant of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::UnitsKilled(_) => EventKind::UnitsKilled,
            Self::PlayerDied(_) => EventKind::PlayerDied,
            Self::SquareDiscovered(_) => EventKind::SquareDiscovered,
            Self::AdvanceForced(_) => EventKind::AdvanceForced,
            Self::HutDiscovered(_) => EventKind::HutDiscovered,
            Self::NextUnit(_) => EventKind::NextUnit,
            Self::AttackInPeace(_) => EventKind::AttackInPeace,
            Self::BarbarianDiplomatKilled(_) => EventKind::BarbarianDiplomatKilled,
            Self::DarwinsVoyage(_) => EventKind::DarwinsVoyage,
            Self::SquareChanged(_) => EventKind::SquareChanged,
        }
    }

    /// The player the event is primarily about, if any.
    #[must_use]
    pub const fn player(&self) -> Option<PlayerId> {
        match self {
            Self::UnitsKilled(e) => Some(e.killer()),
            Self::PlayerDied(e) => Some(e.player()),
            Self::SquareDiscovered(e) => Some(e.player()),
            Self::AdvanceForced(e) => Some(e.player()),
            Self::HutDiscovered(e) => Some(e.player()),
            Self::NextUnit(e) => Some(e.player()),
            Self::AttackInPeace(e) => Some(e.attacker()),
            Self::BarbarianDiplomatKilled(e) => Some(e.player()),
            Self::DarwinsVoyage(e) => Some(e.player()),
            Self::SquareChanged(_) => None,
        }
    }
}

macro_rules! impl_from_payload {
    ($($payload:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for GameEvent {
                fn from(event: $payload) -> Self {
                    Self::$variant(event)
                }
            }
        )*
    };
}

impl_from_payload! {
    KilledUnitEvent => UnitsKilled,
    DeadPlayerEvent => PlayerDied,
    SquareDiscoveredEvent => SquareDiscovered,
    ForcedAdvanceEvent => AdvanceForced,
    HutDiscoveredEvent => HutDiscovered,
    NextUnitEvent => NextUnit,
    AttackInPeaceEvent => AttackInPeace,
    BarbarianDiplomatKilledEvent => BarbarianDiplomatKilled,
    DarwinsVoyageEvent => DarwinsVoyage,
    SquareChangedEvent => SquareChanged,
}

/// Failure reported by a subscriber. The bus logs it and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SubscriberError(pub String);

/// Receiver of game events.
pub trait EventSubscriber {
    /// Handle one event.
    fn on_event(&mut self, event: &GameEvent) -> Result<(), SubscriberError>;
}

impl<F> EventSubscriber for F
where
    F: FnMut(&GameEvent) -> Result<(), SubscriberError>,
{
    fn on_event(&mut self, event: &GameEvent) -> Result<(), SubscriberError> {
        self(event)
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Outcome of delivering one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitReport {
    /// Subscribers that handled the event.
    pub delivered: usize,
    /// Subscribers that reported a failure.
    pub failed: usize,
}

/// Synchronous, in-order event dispatcher.
///
/// Single-threaded: subscribers are called on the emitting thread, one after
/// another, before `emit` returns.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(SubscriptionId, Box<dyn EventSubscriber>)>,
    next_id: u64,
}

impl EventBus {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. It receives every event emitted from now on.
    pub fn subscribe(&mut self, subscriber: impl EventSubscriber + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver an event to every subscriber, in subscription order.
    ///
    /// A failing subscriber does not stop delivery to the others.
    pub fn emit(&mut self, event: impl Into<GameEvent>) -> EmitReport {
        let event = event.into();
        let mut report = EmitReport::default();
        tracing::debug!(
            kind = ?event.kind(),
            subscribers = self.subscribers.len(),
            "Emitting event"
        );

        for (id, subscriber) in &mut self.subscribers {
            match subscriber.on_event(&event) {
                Ok(()) => report.delivered += 1,
                Err(error) => {
                    report.failed += 1;
                    tracing::warn!(
                        subscription = id.0,
                        kind = ?event.kind(),
                        %error,
                        "Subscriber failed to handle event"
                    );
                }
            }
        }
        report
    }

    /// Deliver several events in order.
    pub fn emit_all<I>(&mut self, events: I) -> EmitReport
    where
        I: IntoIterator,
        I::Item: Into<GameEvent>,
    {
        events
            .into_iter()
            .fold(EmitReport::default(), |mut total, event| {
                let report = self.emit(event);
                total.delivered += report.delivered;
                total.failed += report.failed;
                total
            })
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::buildable::{Cost, Prerequisites};
    use crate::ids::{advances, CityId};
    use crate::unit::{UnitKind, UnitOwner, UnitType};

    fn recorder() -> (Rc<RefCell<Vec<EventKind>>>, impl EventSubscriber) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscriber = move |event: &GameEvent| {
            sink.borrow_mut().push(event.kind());
            Ok(())
        };
        (seen, subscriber)
    }

    #[test]
    fn test_killed_unit_event_rejects_empty() {
        assert!(KilledUnitEvent::new(MapSquare::new(0, 0), Vec::new(), PlayerId(1)).is_none());
    }

    #[derive(Serialize)]
    struct KilledUnitFields {
        square: MapSquare,
        units: Vec<Unit>,
        killer: PlayerId,
    }

    #[test]
    fn test_killed_unit_event_decode_rejects_empty() {
        let sail = UnitType::new(
            UnitKind::Sail,
            "Sail".to_string(),
            Cost::standard(40, 1),
            Prerequisites::none(),
        );
        let unit = Unit::new(UnitId(7), &sail, UnitOwner::City(CityId(2)));
        let square = MapSquare::new(3, 4);

        let encoded = bincode::serialize(&KilledUnitFields {
            square,
            units: vec![unit.clone()],
            killer: PlayerId(2),
        })
        .unwrap();
        let decoded: KilledUnitEvent = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded.units(), &[unit]);

        let encoded = bincode::serialize(&KilledUnitFields {
            square,
            units: Vec::new(),
            killer: PlayerId(2),
        })
        .unwrap();
        assert!(bincode::deserialize::<KilledUnitEvent>(&encoded).is_err());
    }

    #[test]
    fn test_events_delivered_in_order() {
        let mut bus = EventBus::new();
        let (seen, subscriber) = recorder();
        bus.subscribe(subscriber);

        bus.emit(SquareChangedEvent::new(MapSquare::new(1, 1)));
        bus.emit(DeadPlayerEvent::new(PlayerId(2), PlayerId(1)));
        bus.emit(ForcedAdvanceEvent::new(PlayerId(1), advances::STEEL, true));

        assert_eq!(
            *seen.borrow(),
            vec![
                EventKind::SquareChanged,
                EventKind::PlayerDied,
                EventKind::AdvanceForced
            ]
        );
    }

    #[test]
    fn test_subscribers_called_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            bus.subscribe(move |_: &GameEvent| {
                order.borrow_mut().push(tag);
                Ok(())
            });
        }

        bus.emit(SquareChangedEvent::new(MapSquare::new(0, 0)));
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_failing_subscriber_does_not_stop_delivery() {
        let mut bus = EventBus::new();
        bus.subscribe(|_: &GameEvent| Err(SubscriberError("boom".to_string())));
        let (seen, subscriber) = recorder();
        bus.subscribe(subscriber);

        let report = bus.emit(NextUnitEvent::new(PlayerId(1), None));
        assert_eq!(report, EmitReport { delivered: 1, failed: 1 });
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let mut bus = EventBus::new();
        let (seen, subscriber) = recorder();
        let id = bus.subscribe(subscriber);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(SquareChangedEvent::new(MapSquare::new(0, 0)));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_emit_all_sums_reports() {
        let mut bus = EventBus::new();
        let (seen, subscriber) = recorder();
        bus.subscribe(subscriber);

        let report = bus.emit_all([
            SquareDiscoveredEvent::new(PlayerId(1), MapSquare::new(1, 0)),
            SquareDiscoveredEvent::new(PlayerId(1), MapSquare::new(2, 0)),
        ]);
        assert_eq!(report.delivered, 2);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_event_player() {
        let event: GameEvent = AttackInPeaceEvent::new(PlayerId(3), PlayerId(4)).into();
        assert_eq!(event.player(), Some(PlayerId(3)));
        let event: GameEvent = SquareChangedEvent::new(MapSquare::new(0, 0)).into();
        assert_eq!(event.player(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event: GameEvent =
            DarwinsVoyageEvent::new(PlayerId(1), vec![advances::STEEL, advances::FLIGHT]).into();
        let encoded = bincode::serialize(&event).unwrap();
        let decoded: GameEvent = bincode::deserialize(&encoded).unwrap();
        assert_eq!(event, decoded);
    }
}
