use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;
use uuid::Uuid;

use crate::error::Error;
use crate::event::Event;
use crate::projection::Projection;

/// Identifies one scenario, and the log it owns.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScenarioId(pub Uuid);

impl ScenarioId {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an event in its log, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventSequence(u64);

impl EventSequence {
    pub fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// An event as it was appended to a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent<E> {
    pub sequence: EventSequence,
    pub recorded_at: DateTime<Utc>,
    pub event: E,
}

/// Append-only, ordered record of everything that happened in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLog<E> {
    scenario: ScenarioId,
    entries: Vec<RecordedEvent<E>>,
}

impl<E: Event> EventLog<E> {
    pub fn new(scenario: ScenarioId) -> Self {
        Self {
            scenario,
            entries: Vec::new(),
        }
    }

    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    pub fn append(&mut self, event: E) -> EventSequence {
        let sequence = EventSequence::new(self.entries.len() as u64);
        trace!(scenario = %self.scenario, sequence = sequence.value(), event_type = %event.event_type(), "Event appended");
        self.entries.push(RecordedEvent {
            sequence,
            recorded_at: Utc::now(),
            event,
        });
        sequence
    }

    pub fn entries(&self) -> &[RecordedEvent<E>] {
        &self.entries
    }

    /// The recorded events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(|entry| &entry.event)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Folds the whole log into a fresh projection.
    pub fn replay<P: Projection<E>>(&self) -> P {
        P::replay(self.iter())
    }

    /// Every recorded event in its canonical text form.
    pub fn rendered(&self) -> Vec<String>
    where
        E: fmt::Display,
    {
        self.iter().map(ToString::to_string).collect()
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
