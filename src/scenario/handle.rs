use crate::alien::AlienName;
use crate::city::CityName;
use crate::command::PlaceAlien;
use crate::error::Error;
use crate::scenario::Scenario;

/// Drives a single registered alien through a [`Scenario`].
///
/// Handles read like the steps of a scenario: given an alien at a city, when it
/// moves somewhere, then it dies or is somewhere.
pub struct AlienHandle<'a> {
    scenario: &'a mut Scenario,
    alien: AlienName,
}

impl<'a> AlienHandle<'a> {
    pub(crate) fn new(scenario: &'a mut Scenario, alien: AlienName) -> Self {
        Self { scenario, alien }
    }

    pub fn name(&self) -> &AlienName {
        &self.alien
    }

    /// Lands the alien in `city`, creating the city if the scenario does not know it.
    pub fn at_city(self, city: &str) -> Result<(), Error> {
        let alien = self
            .scenario
            .aliens
            .get(&self.alien)
            .cloned()
            .ok_or_else(|| Error::UnknownAlien(self.alien.clone()))?;

        self.scenario.execute(PlaceAlien {
            alien,
            city: CityName::try_new(city)?,
        })?;
        Ok(())
    }

    /// Moves the alien to the registered city `city`, resolving any fight it starts.
    pub fn moves_to(self, city: &str) -> Result<(), Error> {
        let city = CityName::try_new(city)?;
        self.scenario.move_alien(&self.alien, &city)?;
        Ok(())
    }

    pub fn dies(&self) -> Result<(), Error> {
        self.scenario.dies(&self.alien)
    }

    pub fn is_at(&self, city: &str) -> Result<(), Error> {
        self.scenario.is_at(&self.alien, &CityName::try_new(city)?)
    }

    pub fn where_is(&self) -> Option<&CityName> {
        self.scenario.where_is(&self.alien)
    }
}
