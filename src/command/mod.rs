//! Commands that drive cities, and the reactions events trigger.
//!
//! Commands represent intentions to change the simulation. Handling a command
//! mutates the cities it touches and returns the events describing the change; it
//! never records them. Recording, projecting and reacting is the job of the
//! [`Scenario`](crate::Scenario).
//!
//! ```rust
//! use invasion::{Alien, CityName, CityRegistry, Command, PlaceAlien};
//!
//! # fn main() -> Result<(), invasion::Error> {
//! let mut cities = CityRegistry::new();
//! let command = PlaceAlien {
//!     alien: Alien::named("1")?,
//!     city: CityName::try_new("A")?,
//! };
//!
//! let events = command.handle(&mut cities)?;
//! assert_eq!(events[0].to_string(), "Alien 1 starts at A");
//! # Ok(())
//! # }
//! ```

use crate::alien::{Alien, AlienName};
use crate::city::{CityName, CityRegistry};
use crate::error::Error;
use crate::event::AlienEvent;

/// Represents a command that can be executed against a scenario's cities to
/// produce events.
pub trait Command {
    /// Handles the command and produces events
    ///
    /// This should validate the command against the current state of the cities
    /// and return the events describing what happened, in order.
    fn handle(&self, cities: &mut CityRegistry) -> Result<Vec<AlienEvent>, Error>;
}

/// Lands an alien in a city, creating the city when needed.
///
/// An alien that already occupies a city cannot land a second time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceAlien {
    pub alien: Alien,
    pub city: CityName,
}

impl Command for PlaceAlien {
    fn handle(&self, cities: &mut CityRegistry) -> Result<Vec<AlienEvent>, Error> {
        if let Some(city) = cities.location_of(self.alien.name()) {
            return Err(Error::AlienAlreadyLanded {
                alien: self.alien.name().clone(),
                city: city.clone(),
            });
        }

        Ok(cities
            .ensure(self.city.clone())
            .place_alien(self.alien.clone()))
    }
}

/// Moves an alien from the city it is in to another registered city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAlien {
    pub alien: AlienName,
    pub from: CityName,
    pub to: CityName,
}

impl Command for MoveAlien {
    fn handle(&self, cities: &mut CityRegistry) -> Result<Vec<AlienEvent>, Error> {
        if self.from == self.to {
            return Err(Error::MoveToSameCity {
                alien: self.alien.clone(),
                city: self.from.clone(),
            });
        }

        let holds_alien = cities
            .get(&self.from)
            .ok_or_else(|| Error::UnknownCity(self.from.clone()))?
            .occupant()
            .is_some_and(|occupant| occupant.name() == &self.alien);
        if !holds_alien {
            return Err(Error::AlienNotPresent {
                city: self.from.clone(),
                destination: self.to.clone(),
            });
        }

        cities.move_alien(&self.from, &self.to)
    }
}

/// Settles an alien's arrival in a city, fighting whoever lives there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveArrival {
    pub alien: Alien,
    pub city: CityName,
}

impl Command for ResolveArrival {
    fn handle(&self, cities: &mut CityRegistry) -> Result<Vec<AlienEvent>, Error> {
        Ok(cities.get_mut(&self.city)?.alien_arrives(self.alien.clone()))
    }
}

/// A follow-up that an event asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// The alien reached the city and whatever lives there must be dealt with.
    ResolveArrival { alien: AlienName, city: CityName },
}

/// Returns the follow-up `event` calls for, if any.
///
/// Only reaching a city asks for anything. None of the events a resolved arrival
/// emits call for a reaction of their own.
pub fn reaction_to(event: &AlienEvent) -> Option<Reaction> {
    match event {
        AlienEvent::ReachedCity { alien, city } => Some(Reaction::ResolveArrival {
            alien: alien.clone(),
            city: city.clone(),
        }),
        AlienEvent::Landed { .. }
        | AlienEvent::LeftCity { .. }
        | AlienEvent::Fought { .. }
        | AlienEvent::Dead { .. }
        | AlienEvent::WonCity { .. } => None,
    }
}
