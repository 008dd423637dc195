//! Read models folded from the event stream.
//!
//! A projection answers questions about the simulation from events alone, never by
//! asking a [`City`](crate::City). Folding is a pure, order-sensitive operation:
//! replaying the same events into a fresh projection always gives the same state.
//!
//! ```rust
//! use invasion::{AlienEvent, AlienName, CityInhabitantsProjection, CityName, Projection};
//!
//! # fn main() -> Result<(), invasion::Error> {
//! let one = AlienName::try_new("1")?;
//! let events = vec![
//!     AlienEvent::Landed { alien: one.clone(), city: CityName::try_new("A")? },
//!     AlienEvent::ReachedCity { alien: one.clone(), city: CityName::try_new("B")? },
//! ];
//!
//! let projection = CityInhabitantsProjection::replay(&events);
//! assert_eq!(projection.where_is(&one), Some(&CityName::try_new("B")?));
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use tracing::trace;

use crate::alien::AlienName;
use crate::city::CityName;
use crate::event::{AlienEvent, Event};

/// Represents a read model that can be built by folding events
///
/// # Type Parameters
///
/// * `E` - The event type this projection understands
pub trait Projection<E: Event>: Debug + Default {
    /// Fold a single event into the current state
    fn accept(&mut self, event: &E);

    /// Builds a fresh projection from a sequence of events, in order
    fn replay<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        let mut projection = Self::default();
        for event in events {
            projection.accept(event);
        }
        projection
    }
}

/// Knows which city every living alien is in.
///
/// Landing, reaching a city and winning a city all move an alien; death removes it.
/// Leaving a city and fighting carry no location of their own.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CityInhabitantsProjection {
    alien_to_city: HashMap<AlienName, CityName>,
}

impl CityInhabitantsProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The city `alien` is in, or `None` when it was never placed or has died.
    pub fn where_is(&self, alien: &AlienName) -> Option<&CityName> {
        self.alien_to_city.get(alien)
    }

    /// The aliens located in `city`, sorted by name.
    pub fn inhabitants_of(&self, city: &CityName) -> Vec<&AlienName> {
        let mut inhabitants: Vec<&AlienName> = self
            .alien_to_city
            .iter()
            .filter(|(_, located)| *located == city)
            .map(|(alien, _)| alien)
            .collect();
        inhabitants.sort();
        inhabitants
    }

    pub fn len(&self) -> usize {
        self.alien_to_city.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alien_to_city.is_empty()
    }
}

impl Projection<AlienEvent> for CityInhabitantsProjection {
    fn accept(&mut self, event: &AlienEvent) {
        match event {
            AlienEvent::Landed { alien, city }
            | AlienEvent::ReachedCity { alien, city }
            | AlienEvent::WonCity { alien, city, .. } => {
                trace!(%alien, %city, "Alien located");
                self.alien_to_city.insert(alien.clone(), city.clone());
            }
            AlienEvent::Dead { alien } => {
                trace!(%alien, "Alien forgotten");
                self.alien_to_city.remove(alien);
            }
            AlienEvent::LeftCity { .. } | AlienEvent::Fought { .. } => {}
        }
    }
}
