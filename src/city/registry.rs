use std::collections::HashMap;

use crate::alien::AlienName;
use crate::city::{City, CityName};
use crate::error::Error;
use crate::event::AlienEvent;

/// All cities of one scenario, keyed by name.
#[derive(Debug, Default, Clone)]
pub struct CityRegistry {
    cities: HashMap<CityName, City>,
}

impl CityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the named city, creating it empty when it is not known yet.
    pub fn ensure(&mut self, name: CityName) -> &mut City {
        self.cities
            .entry(name)
            .or_insert_with_key(|name| City::new(name.clone()))
    }

    pub fn get(&self, name: &CityName) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn get_mut(&mut self, name: &CityName) -> Result<&mut City, Error> {
        self.cities
            .get_mut(name)
            .ok_or_else(|| Error::UnknownCity(name.clone()))
    }

    /// The city currently occupied by `alien`, if any.
    pub fn location_of(&self, alien: &AlienName) -> Option<&CityName> {
        self.cities
            .values()
            .find(|city| city.occupant().is_some_and(|occupant| occupant.name() == alien))
            .map(City::name)
    }

    pub fn contains(&self, name: &CityName) -> bool {
        self.cities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Moves the occupant of `from` into `to`, both of which must be registered.
    ///
    /// `from` and `to` must name different cities.
    pub fn move_alien(&mut self, from: &CityName, to: &CityName) -> Result<Vec<AlienEvent>, Error> {
        let mut source = self
            .cities
            .remove(from)
            .ok_or_else(|| Error::UnknownCity(from.clone()))?;

        let result = match self.cities.get_mut(to) {
            Some(destination) => source.move_alien_to(destination),
            None => Err(Error::UnknownCity(to.clone())),
        };

        self.cities.insert(from.clone(), source);
        result
    }
}
