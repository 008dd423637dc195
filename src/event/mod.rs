//! Domain events of the invasion.
//!
//! Events are immutable facts about what happened to aliens and cities. They are
//! the only thing the read side ever sees: cities produce them, the event log
//! records them and projections fold them.
//!
//! Every event has a canonical one-line rendering through [`std::fmt::Display`],
//! which is what scenario logs and tests compare against:
//!
//! ```rust
//! use invasion::{AlienEvent, AlienName, CityName};
//!
//! # fn main() -> Result<(), invasion::Error> {
//! let event = AlienEvent::WonCity {
//!     alien: AlienName::try_new("Vagrant")?,
//!     city: CityName::try_new("B")?,
//!     defeated: AlienName::try_new("Resident")?,
//! };
//!
//! assert_eq!(
//!     event.to_string(),
//!     "Alien Vagrant has won the possession of B from Resident"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Events serialize with a `type` tag so a recorded log can be read back:
//!
//! ```rust
//! use invasion::{AlienEvent, AlienName, Event};
//!
//! # fn main() -> Result<(), invasion::Error> {
//! let event = AlienEvent::Dead {
//!     alien: AlienName::try_new("2")?,
//! };
//!
//! let json = serde_json::to_string(&event)?;
//! assert_eq!(json, r#"{"type":"Dead","alien":"2"}"#);
//! assert_eq!(event.event_type(), "AlienDead");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::alien::AlienName;
use crate::city::CityName;

/// Represents a domain event in the simulation.
///
/// Events must be serializable and deserializable so an event log can be exported
/// and replayed, and they must provide a way to identify their type.
pub trait Event: Debug + for<'de> Deserialize<'de> + Serialize + Send + Sync + Sized {
    /// Returns a string identifier for the event type.
    ///
    /// The identifier is stable across releases and is what logging and exported
    /// logs use to name an event.
    fn event_type(&self) -> String;
}

/// Everything that can happen to an alien.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AlienEvent {
    /// An alien was placed in a city.
    Landed { alien: AlienName, city: CityName },
    /// An alien walked out of a city.
    LeftCity { alien: AlienName, city: CityName },
    /// An alien walked into a city. A fight may still follow.
    ReachedCity { alien: AlienName, city: CityName },
    /// Two aliens met in a city.
    Fought {
        attacker: AlienName,
        defender: AlienName,
        city: CityName,
    },
    /// An alien was destroyed in a fight.
    Dead { alien: AlienName },
    /// An alien became the sole occupant of a city after a fight.
    WonCity {
        alien: AlienName,
        city: CityName,
        defeated: AlienName,
    },
}

impl AlienEvent {
    /// The alien this event is about. For a fight that is the attacker.
    pub fn alien(&self) -> &AlienName {
        match self {
            AlienEvent::Landed { alien, .. }
            | AlienEvent::LeftCity { alien, .. }
            | AlienEvent::ReachedCity { alien, .. }
            | AlienEvent::Dead { alien }
            | AlienEvent::WonCity { alien, .. } => alien,
            AlienEvent::Fought { attacker, .. } => attacker,
        }
    }

    pub fn city(&self) -> Option<&CityName> {
        match self {
            AlienEvent::Landed { city, .. }
            | AlienEvent::LeftCity { city, .. }
            | AlienEvent::ReachedCity { city, .. }
            | AlienEvent::Fought { city, .. }
            | AlienEvent::WonCity { city, .. } => Some(city),
            AlienEvent::Dead { .. } => None,
        }
    }
}

impl Event for AlienEvent {
    fn event_type(&self) -> String {
        match self {
            AlienEvent::Landed { .. } => "AlienLanded".to_string(),
            AlienEvent::LeftCity { .. } => "AlienLeftCity".to_string(),
            AlienEvent::ReachedCity { .. } => "AlienReachedCity".to_string(),
            AlienEvent::Fought { .. } => "AlienFought".to_string(),
            AlienEvent::Dead { .. } => "AlienDead".to_string(),
            AlienEvent::WonCity { .. } => "AlienWonCity".to_string(),
        }
    }
}

impl fmt::Display for AlienEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlienEvent::Landed { alien, city } => write!(f, "Alien {alien} starts at {city}"),
            AlienEvent::LeftCity { alien, city } => write!(f, "Alien {alien} left city {city}"),
            AlienEvent::ReachedCity { alien, city } => {
                write!(f, "Alien {alien} reached city {city}")
            }
            AlienEvent::Fought {
                attacker,
                defender,
                city,
            } => write!(f, "Alien {attacker} fights Alien {defender} in city {city}"),
            AlienEvent::Dead { alien } => write!(f, "Alien {alien} is dead, Jim"),
            AlienEvent::WonCity {
                alien,
                city,
                defeated,
            } => write!(
                f,
                "Alien {alien} has won the possession of {city} from {defeated}"
            ),
        }
    }
}
