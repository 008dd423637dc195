//! Cities and the state transitions aliens drive through them.
//!
//! A [`City`] holds at most one alien. Every transition returns the events that
//! describe it instead of touching any read model directly:
//!
//! - `Empty -> Occupied` through [`City::place_alien`] or a move into an empty city
//! - `Occupied -> Empty` through [`City::move_alien_to`]
//! - `Occupied(by B) -> Occupied(by A)` through [`City::alien_arrives`], A defeating B
//!
//! Moving an alien and resolving the fight it may start are two separate steps. A
//! move into an occupied city leaves the resident in place until the arrival is
//! resolved.
//!
//! ```rust
//! use invasion::{Alien, AlienEvent, City};
//!
//! # fn main() -> Result<(), invasion::Error> {
//! let mut a = City::named("A")?;
//! let mut b = City::named("B")?;
//! a.place_alien(Alien::named("1")?);
//!
//! let events = a.move_alien_to(&mut b)?;
//! let rendered: Vec<String> = events.iter().map(AlienEvent::to_string).collect();
//! assert_eq!(rendered, vec!["Alien 1 left city A", "Alien 1 reached city B"]);
//! assert!(!a.is_occupied());
//! # Ok(())
//! # }
//! ```

mod registry;

pub use registry::CityRegistry;

use nutype::nutype;
use std::fmt;
use tracing::{debug, warn};

use crate::alien::Alien;
use crate::error::Error;
use crate::event::AlienEvent;

/// The identity of a city.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 64),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display,
        AsRef,
        Serialize,
        Deserialize
    )
)]
pub struct CityName(String);

/// A city that can be occupied by a single alien.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    name: CityName,
    occupant: Option<Alien>,
}

impl City {
    pub fn new(name: CityName) -> Self {
        Self {
            name,
            occupant: None,
        }
    }

    /// Creates an empty city from a raw name, validating it first.
    pub fn named(name: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::new(CityName::try_new(name.into())?))
    }

    pub fn name(&self) -> &CityName {
        &self.name
    }

    pub fn occupant(&self) -> Option<&Alien> {
        self.occupant.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Lands an alien in this city.
    ///
    /// Landing is unconditional: an alien already living here is replaced without a
    /// fight.
    pub fn place_alien(&mut self, alien: Alien) -> Vec<AlienEvent> {
        if let Some(previous) = self.occupant.replace(alien.clone()) {
            warn!(city = %self.name, displaced = %previous, landed = %alien, "Landing replaced the resident alien");
        }

        vec![AlienEvent::Landed {
            alien: alien.name().clone(),
            city: self.name.clone(),
        }]
    }

    /// Moves the occupant of this city into `next_city`.
    ///
    /// The mover only takes `next_city` over when it is empty; an existing resident
    /// stays until [`City::alien_arrives`] settles the fight.
    pub fn move_alien_to(&mut self, next_city: &mut City) -> Result<Vec<AlienEvent>, Error> {
        let Some(moving) = self.occupant.take() else {
            return Err(Error::AlienNotPresent {
                city: self.name.clone(),
                destination: next_city.name.clone(),
            });
        };

        if next_city.occupant.is_none() {
            next_city.occupant = Some(moving.clone());
        }

        debug!(alien = %moving, from = %self.name, to = %next_city.name, "Alien moved");

        Ok(vec![
            AlienEvent::LeftCity {
                alien: moving.name().clone(),
                city: self.name.clone(),
            },
            AlienEvent::ReachedCity {
                alien: moving.name().clone(),
                city: next_city.name.clone(),
            },
        ])
    }

    /// Settles the arrival of `incoming` in this city.
    ///
    /// When another alien lives here the two fight, the resident dies and `incoming`
    /// takes the city. Arriving in an empty city, or in one `incoming` already
    /// holds, produces no events.
    pub fn alien_arrives(&mut self, incoming: Alien) -> Vec<AlienEvent> {
        match self.occupant.replace(incoming.clone()) {
            Some(resident) if resident != incoming => {
                debug!(city = %self.name, attacker = %incoming, defender = %resident, "Aliens fought");
                vec![
                    AlienEvent::Fought {
                        attacker: incoming.name().clone(),
                        defender: resident.name().clone(),
                        city: self.name.clone(),
                    },
                    AlienEvent::Dead {
                        alien: resident.name().clone(),
                    },
                    AlienEvent::WonCity {
                        alien: incoming.name().clone(),
                        city: self.name.clone(),
                        defeated: resident.name().clone(),
                    },
                ]
            }
            _ => vec![],
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
