//! Scenario driver for the invasion.
//!
//! A [`Scenario`] owns everything one run of the simulation needs: its cities, the
//! aliens taking part, the event log and the [`CityInhabitantsProjection`]. Commands
//! are handled against the cities, every resulting event is recorded and
//! projected, and events that call for a follow-up (an alien reaching a city)
//! immediately run it.
//!
//! ```rust
//! use invasion::Scenario;
//!
//! # fn main() -> Result<(), invasion::Error> {
//! let mut scenario = Scenario::default();
//!
//! scenario.given_alien("1")?.at_city("A")?;
//! scenario.given_alien("2")?.at_city("B")?;
//!
//! scenario.alien("1")?.moves_to("B")?;
//!
//! scenario.alien("2")?.dies()?;
//! scenario.alien("1")?.is_at("B")?;
//! # Ok(())
//! # }
//! ```

mod handle;

pub use handle::AlienHandle;

use std::collections::HashMap;
use tracing::debug;

use crate::alien::{Alien, AlienName};
use crate::city::{City, CityName, CityRegistry};
use crate::command::{Command, MoveAlien, Reaction, ResolveArrival, reaction_to};
use crate::config::ScenarioConfig;
use crate::error::Error;
use crate::event::{AlienEvent, Event};
use crate::event_log::{EventLog, ScenarioId};
use crate::projection::{CityInhabitantsProjection, Projection};

/// One self-contained run of the simulation.
#[derive(Debug)]
pub struct Scenario {
    id: ScenarioId,
    config: ScenarioConfig,
    events: EventLog<AlienEvent>,
    projection: CityInhabitantsProjection,
    cities: CityRegistry,
    aliens: HashMap<AlienName, Alien>,
}

impl Scenario {
    pub fn new(config: ScenarioConfig) -> Self {
        let id = ScenarioId::new();
        Self {
            id,
            config,
            events: EventLog::new(id),
            projection: CityInhabitantsProjection::default(),
            cities: CityRegistry::new(),
            aliens: HashMap::new(),
        }
    }

    pub fn id(&self) -> ScenarioId {
        self.id
    }

    pub fn config(&self) -> ScenarioConfig {
        self.config
    }

    pub fn events(&self) -> &EventLog<AlienEvent> {
        &self.events
    }

    pub fn projection(&self) -> &CityInhabitantsProjection {
        &self.projection
    }

    pub fn cities(&self) -> &CityRegistry {
        &self.cities
    }

    pub fn city(&self, name: &CityName) -> Option<&City> {
        self.cities.get(name)
    }

    /// Registers an empty city aliens can later move to.
    pub fn add_city(&mut self, name: &str) -> Result<CityName, Error> {
        let name = CityName::try_new(name)?;
        self.cities.ensure(name.clone());
        Ok(name)
    }

    /// Registers an alien and returns a handle to drive it.
    ///
    /// Registering a name twice keeps the first alien.
    pub fn given_alien(&mut self, name: &str) -> Result<AlienHandle<'_>, Error> {
        let alien = Alien::named(name)?;
        let name = alien.name().clone();
        self.aliens.entry(name.clone()).or_insert(alien);
        Ok(AlienHandle::new(self, name))
    }

    /// Returns a handle to an alien registered with [`Scenario::given_alien`].
    pub fn alien(&mut self, name: &str) -> Result<AlienHandle<'_>, Error> {
        let name = AlienName::try_new(name)?;
        if !self.aliens.contains_key(&name) {
            return Err(Error::UnknownAlien(name));
        }
        Ok(AlienHandle::new(self, name))
    }

    /// The city `alien` is in, according to the projection.
    pub fn where_is(&self, alien: &AlienName) -> Option<&CityName> {
        self.projection.where_is(alien)
    }

    /// Handles `command` and accepts every event it produces.
    ///
    /// Returns the events the command itself produced. Events produced by reactions
    /// only show up in the log.
    pub fn execute<C: Command>(&mut self, command: C) -> Result<Vec<AlienEvent>, Error> {
        let events = command.handle(&mut self.cities)?;
        debug!(scenario = %self.id, events = events.len(), "Command handled");
        for event in &events {
            self.accept(event.clone())?;
        }
        Ok(events)
    }

    /// Moves `alien` from wherever it is now to the registered city `to`.
    pub fn move_alien(&mut self, alien: &AlienName, to: &CityName) -> Result<Vec<AlienEvent>, Error> {
        let from = self
            .projection
            .where_is(alien)
            .cloned()
            .ok_or_else(|| Error::AlienNotPlaced(alien.clone()))?;
        if !self.cities.contains(to) {
            return Err(Error::UnknownCity(to.clone()));
        }

        self.execute(MoveAlien {
            alien: alien.clone(),
            from,
            to: to.clone(),
        })
    }

    /// Records `event`, projects it and runs whatever follow-up it calls for.
    ///
    /// Events produced by a follow-up are accepted in turn. None of them calls for a
    /// further reaction, so an arrival is resolved exactly once.
    pub fn accept(&mut self, event: AlienEvent) -> Result<(), Error> {
        self.projection.accept(&event);

        let reaction = if self.config.reactions() {
            reaction_to(&event)
        } else {
            None
        };
        let event_type = event.event_type();

        let sequence = self.events.append(event);
        debug!(scenario = %self.id, sequence = sequence.value(), %event_type, "Event accepted");

        let Some(reaction) = reaction else {
            return Ok(());
        };

        let follow_up = match reaction {
            Reaction::ResolveArrival { alien, city } => ResolveArrival {
                alien: self
                    .aliens
                    .get(&alien)
                    .cloned()
                    .ok_or(Error::UnknownAlien(alien))?,
                city,
            },
        };

        for event in follow_up.handle(&mut self.cities)? {
            self.accept(event)?;
        }

        Ok(())
    }

    /// Succeeds when the log records the death of `alien`.
    pub fn dies(&self, alien: &AlienName) -> Result<(), Error> {
        let died = self
            .events
            .iter()
            .any(|event| matches!(event, AlienEvent::Dead { alien: dead } if dead == alien));
        if died {
            Ok(())
        } else {
            Err(Error::AlienNotDead {
                alien: alien.clone(),
            })
        }
    }

    /// Succeeds when the projection places `alien` in `city`.
    pub fn is_at(&self, alien: &AlienName, city: &CityName) -> Result<(), Error> {
        match self.projection.where_is(alien) {
            Some(actual) if actual == city => Ok(()),
            actual => Err(Error::AlienMisplaced {
                alien: alien.clone(),
                expected: city.clone(),
                actual: actual.cloned(),
            }),
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(ScenarioConfig::default())
    }
}
