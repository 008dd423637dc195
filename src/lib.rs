mod alien;
mod city;
mod command;
mod config;
mod error;
mod event;
mod event_log;
mod projection;
mod scenario;

pub use alien::{Alien, AlienName, AlienNameError};
pub use city::{City, CityName, CityNameError, CityRegistry};
pub use command::{Command, MoveAlien, PlaceAlien, Reaction, ResolveArrival, reaction_to};
pub use config::ScenarioConfig;
pub use error::Error;
pub use event::{AlienEvent, Event};
pub use event_log::{EventLog, EventSequence, RecordedEvent, ScenarioId};
pub use projection::{CityInhabitantsProjection, Projection};
pub use scenario::{AlienHandle, Scenario};
