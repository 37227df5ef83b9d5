//! Turn-stamped record of emitted events.
//!
//! The log subscribes to an [`EventBus`](crate::events::EventBus) and keeps
//! every event with the turn it happened in, so a saved game can show the
//! player what happened since their last move.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::events::{EventKind, EventSubscriber, GameEvent, SubscriberError};

/// Event log file format version.
pub const EVENT_LOG_VERSION: u32 = 1;

/// One logged event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Turn the event was emitted in.
    pub turn: u32,
    /// The event.
    pub event: GameEvent,
}

/// Ordered list of events with their turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    version: u32,
    turn: u32,
    records: Vec<EventRecord>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Create an empty log at turn 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: EVENT_LOG_VERSION,
            turn: 0,
            records: Vec::new(),
        }
    }

    /// Start stamping events with `turn`.
    ///
    /// # Errors
    /// Returns an error if `turn` is earlier than the current turn.
    pub fn begin_turn(&mut self, turn: u32) -> Result<()> {
        if turn < self.turn {
            return Err(GameError::Persistence(format!(
                "Cannot rewind event log from turn {} to {}",
                self.turn, turn
            )));
        }
        self.turn = turn;
        Ok(())
    }

    /// Current turn.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Append an event at the current turn.
    pub fn record(&mut self, event: GameEvent) {
        self.records.push(EventRecord {
            turn: self.turn,
            event,
        });
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Events emitted during `turn`.
    pub fn events_in_turn(&self, turn: u32) -> impl Iterator<Item = &GameEvent> + '_ {
        self.records
            .iter()
            .filter(move |r| r.turn == turn)
            .map(|r| &r.event)
    }

    /// Events of one kind, oldest first.
    pub fn events_of_kind(&self, kind: EventKind) -> impl Iterator<Item = &EventRecord> + '_ {
        self.records.iter().filter(move |r| r.event.kind() == kind)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Save the log to a file.
    ///
    /// # Errors
    /// Returns an error if serialization or file writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = bincode::serialize(self)
            .map_err(|e| GameError::Persistence(format!("Failed to serialize event log: {e}")))?;
        std::fs::write(path.as_ref(), bytes)
            .map_err(|e| GameError::Persistence(format!("Failed to write event log: {e}")))?;
        tracing::debug!(
            records = self.records.len(),
            path = %path.as_ref().display(),
            "Saved event log"
        );
        Ok(())
    }

    /// Load a log from a file.
    ///
    /// # Errors
    /// Returns an error if reading or deserialization fails, or the file
    /// was written by a different format version.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())
            .map_err(|e| GameError::Persistence(format!("Failed to read event log: {e}")))?;
        let log: Self = bincode::deserialize(&bytes)
            .map_err(|e| GameError::Persistence(format!("Failed to deserialize event log: {e}")))?;

        if log.version != EVENT_LOG_VERSION {
            return Err(GameError::Persistence(format!(
                "Event log version mismatch: expected {}, got {}",
                EVENT_LOG_VERSION, log.version
            )));
        }

        Ok(log)
    }
}

impl EventSubscriber for EventLog {
    fn on_event(&mut self, event: &GameEvent) -> std::result::Result<(), SubscriberError> {
        self.record(event.clone());
        Ok(())
    }
}

/// An [`EventLog`] that can be subscribed to a bus while staying readable
/// by its owner.
#[derive(Debug, Clone, Default)]
pub struct SharedEventLog(Rc<RefCell<EventLog>>);

impl SharedEventLog {
    /// Wrap a fresh log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the log.
    ///
    /// # Panics
    /// Panics if called from inside a subscriber while the bus is
    /// delivering to this log.
    #[must_use]
    pub fn log(&self) -> std::cell::Ref<'_, EventLog> {
        self.0.borrow()
    }

    /// Borrow the log mutably, e.g. to advance the turn.
    ///
    /// # Panics
    /// Panics if the log is already borrowed.
    #[must_use]
    pub fn log_mut(&self) -> std::cell::RefMut<'_, EventLog> {
        self.0.borrow_mut()
    }
}

impl EventSubscriber for SharedEventLog {
    fn on_event(&mut self, event: &GameEvent) -> std::result::Result<(), SubscriberError> {
        let mut log = self
            .0
            .try_borrow_mut()
            .map_err(|e| SubscriberError(format!("Event log is busy: {e}")))?;
        log.record(event.clone());
        Ok(())
    }
}
