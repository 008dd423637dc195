use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// The identity of an alien, as it appears in events and in the event log.
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
pub struct AlienName(String);

/// An alien taking part in the invasion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alien {
    name: AlienName,
}

impl Alien {
    pub fn new(name: AlienName) -> Self {
        Self { name }
    }

    /// Creates an alien from a raw name, validating it first.
    pub fn named(name: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::new(AlienName::try_new(name.into())?))
    }

    pub fn name(&self) -> &AlienName {
        &self.name
    }
}

impl fmt::Display for Alien {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
