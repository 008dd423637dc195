/// Error types for the invasion simulation.
///
/// Every failure a command, the reaction loop, or a scenario query can run into is
/// reported through the single [`Error`] enum.
use thiserror::Error;

use crate::alien::{AlienName, AlienNameError};
use crate::city::{CityName, CityNameError};

/// Represents errors that can occur while running an invasion scenario
#[derive(Debug, Error)]
pub enum Error {
    /// Indicates a move was ordered out of a city that does not hold the alien
    #[error("No alien present in city {city} to move to {destination}")]
    AlienNotPresent {
        city: CityName,
        destination: CityName,
    },

    /// Indicates a city name that is not registered in the scenario
    #[error("Unknown city: {0}")]
    UnknownCity(CityName),

    /// Indicates an alien name that is not registered in the scenario
    #[error("Unknown alien: {0}")]
    UnknownAlien(AlienName),

    /// Indicates an alien that is not currently located in any city
    #[error("Alien {0} is not in any city")]
    AlienNotPlaced(AlienName),

    /// Indicates a move whose source and destination are the same city
    #[error("Alien {alien} cannot move from city {city} to itself")]
    MoveToSameCity { alien: AlienName, city: CityName },

    #[error(transparent)]
    InvalidAlienName(#[from] AlienNameError),

    #[error(transparent)]
    InvalidCityName(#[from] CityNameError),

    /// Indicates a landing for an alien that already occupies a city
    #[error("Alien {alien} already occupies city {city}")]
    AlienAlreadyLanded { alien: AlienName, city: CityName },

    /// Indicates a failure to serialize or deserialize an event log
    #[error(transparent)]
    EventSerialization(#[from] serde_json::error::Error),

    /// Indicates that no `AlienDead` event was recorded for the alien
    #[error("Alien {alien} is not dead.")]
    AlienNotDead { alien: AlienName },

    /// Indicates that the alien is not where a scenario expects it to be
    #[error("Alien {alien} should be at {expected} but it is at {}", .actual.as_ref().map_or_else(|| "no city".to_string(), ToString::to_string))]
    AlienMisplaced {
        alien: AlienName,
        expected: CityName,
        actual: Option<CityName>,
    },
}
