use invasion::{
    AlienEvent, AlienName, CityInhabitantsProjection, CityName, Error, Event, EventLog,
    Projection, Scenario, ScenarioConfig,
};

mod test_helpers {
    use super::*;

    pub fn alien(name: &str) -> AlienName {
        AlienName::try_new(name).expect("Failed to build alien name")
    }

    pub fn city(name: &str) -> CityName {
        CityName::try_new(name).expect("Failed to build city name")
    }

    pub fn rendered(scenario: &Scenario) -> Vec<String> {
        scenario.events().rendered()
    }

    /// Vagrant in A, Resident in B, both registered.
    pub fn vagrant_and_resident(config: ScenarioConfig) -> Scenario {
        let mut scenario = Scenario::new(config);
        scenario
            .given_alien("Vagrant")
            .and_then(|handle| handle.at_city("A"))
            .expect("Failed to place Vagrant");
        scenario
            .given_alien("Resident")
            .and_then(|handle| handle.at_city("B"))
            .expect("Failed to place Resident");
        scenario
    }
}

use test_helpers::*;

#[test]
fn alien_fight() -> Result<(), Error> {
    let mut scenario = Scenario::default();

    scenario.given_alien("1")?.at_city("A")?;
    scenario.given_alien("2")?.at_city("B")?;

    scenario.alien("1")?.moves_to("B")?;

    scenario.alien("2")?.dies()?;
    scenario.alien("1")?.is_at("B")?;
    Ok(())
}

#[test]
fn placed_aliens_are_found_through_the_projection() -> Result<(), Error> {
    let mut scenario = Scenario::default();
    scenario.given_alien("1")?.at_city("A")?;

    assert_eq!(scenario.where_is(&alien("1")), Some(&city("A")));
    assert_eq!(rendered(&scenario), vec!["Alien 1 starts at A"]);
    Ok(())
}

#[test]
fn an_alien_travels_across_several_cities() -> Result<(), Error> {
    let mut scenario = Scenario::default();
    scenario.given_alien("1")?.at_city("A")?;
    scenario.add_city("B")?;
    scenario.add_city("C")?;

    scenario.alien("1")?.moves_to("B")?;
    scenario.alien("1")?.moves_to("C")?;

    scenario.alien("1")?.is_at("C")?;
    assert_eq!(
        rendered(&scenario),
        vec![
            "Alien 1 starts at A",
            "Alien 1 left city A",
            "Alien 1 reached city B",
            "Alien 1 left city B",
            "Alien 1 reached city C",
        ]
    );
    assert!(!scenario.city(&city("A")).unwrap().is_occupied());
    assert!(!scenario.city(&city("B")).unwrap().is_occupied());
    assert_eq!(
        scenario
            .city(&city("C"))
            .and_then(|c| c.occupant())
            .map(|a| a.name().clone()),
        Some(alien("1"))
    );
    Ok(())
}

#[test]
fn moving_into_an_occupied_city_starts_a_fight() -> Result<(), Error> {
    let mut scenario = vagrant_and_resident(ScenarioConfig::default());

    scenario.alien("Vagrant")?.moves_to("B")?;

    assert_eq!(
        rendered(&scenario),
        vec![
            "Alien Vagrant starts at A",
            "Alien Resident starts at B",
            "Alien Vagrant left city A",
            "Alien Vagrant reached city B",
            "Alien Vagrant fights Alien Resident in city B",
            "Alien Resident is dead, Jim",
            "Alien Vagrant has won the possession of B from Resident",
        ]
    );
    scenario.alien("Resident")?.dies()?;
    scenario.alien("Vagrant")?.is_at("B")?;
    assert_eq!(scenario.where_is(&alien("Resident")), None);
    Ok(())
}

#[test]
fn the_command_returns_only_its_own_events() -> Result<(), Error> {
    let mut scenario = vagrant_and_resident(ScenarioConfig::default());

    let events = scenario.move_alien(&alien("Vagrant"), &city("B"))?;

    let types: Vec<String> = events.iter().map(Event::event_type).collect();
    assert_eq!(types, vec!["AlienLeftCity", "AlienReachedCity"]);
    assert_eq!(scenario.events().len(), 7);
    Ok(())
}

#[test]
fn without_reactions_the_fight_waits() -> Result<(), Error> {
    let mut scenario = vagrant_and_resident(ScenarioConfig::default().with_reactions(false));

    scenario.alien("Vagrant")?.moves_to("B")?;

    match scenario.alien("Resident")?.dies() {
        Err(Error::AlienNotDead { alien: name }) => assert_eq!(name, alien("Resident")),
        other => panic!("Expected AlienNotDead, got {:?}", other),
    }
    assert_eq!(
        scenario
            .city(&city("B"))
            .and_then(|c| c.occupant())
            .map(|a| a.name().clone()),
        Some(alien("Resident"))
    );
    Ok(())
}

#[test]
fn moving_an_alien_that_never_landed_fails() -> Result<(), Error> {
    let mut scenario = Scenario::default();
    scenario.given_alien("1")?;
    scenario.add_city("B")?;

    match scenario.alien("1")?.moves_to("B") {
        Err(Error::AlienNotPlaced(name)) => assert_eq!(name, alien("1")),
        other => panic!("Expected AlienNotPlaced, got {:?}", other),
    }
    Ok(())
}

#[test]
fn moving_to_an_unregistered_city_fails() -> Result<(), Error> {
    let mut scenario = Scenario::default();
    scenario.given_alien("1")?.at_city("A")?;

    match scenario.alien("1")?.moves_to("Atlantis") {
        Err(Error::UnknownCity(name)) => assert_eq!(name, city("Atlantis")),
        other => panic!("Expected UnknownCity, got {:?}", other),
    }
    scenario.alien("1")?.is_at("A")?;
    Ok(())
}

#[test]
fn dead_aliens_cannot_move() -> Result<(), Error> {
    let mut scenario = vagrant_and_resident(ScenarioConfig::default());
    scenario.add_city("C")?;
    scenario.alien("Vagrant")?.moves_to("B")?;

    match scenario.alien("Resident")?.moves_to("C") {
        Err(Error::AlienNotPlaced(name)) => assert_eq!(name, alien("Resident")),
        other => panic!("Expected AlienNotPlaced, got {:?}", other),
    }
    Ok(())
}

#[test]
fn the_winner_keeps_moving() -> Result<(), Error> {
    let mut scenario = vagrant_and_resident(ScenarioConfig::default());
    scenario.add_city("C")?;

    scenario.alien("Vagrant")?.moves_to("B")?;
    scenario.alien("Vagrant")?.moves_to("C")?;

    scenario.alien("Vagrant")?.is_at("C")?;
    assert!(!scenario.city(&city("B")).unwrap().is_occupied());
    Ok(())
}

#[test]
fn invalid_names_are_rejected() {
    let mut scenario = Scenario::default();

    assert!(matches!(
        scenario.given_alien("   "),
        Err(Error::InvalidAlienName(_))
    ));
    assert!(matches!(
        scenario.add_city(""),
        Err(Error::InvalidCityName(_))
    ));
}

#[test]
fn replaying_the_log_rebuilds_the_projection() -> Result<(), Error> {
    let mut scenario = vagrant_and_resident(ScenarioConfig::default());
    scenario.alien("Vagrant")?.moves_to("B")?;

    let first: CityInhabitantsProjection = scenario.events().replay();
    let second = CityInhabitantsProjection::replay(scenario.events().iter());

    assert_eq!(&first, scenario.projection());
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn an_exported_log_replays_to_the_same_outcome() -> Result<(), Error> {
    let mut scenario = vagrant_and_resident(ScenarioConfig::default());
    scenario.alien("Vagrant")?.moves_to("B")?;

    let json = scenario.events().to_json()?;
    let restored = EventLog::<AlienEvent>::from_json(&json)?;

    assert_eq!(restored.scenario(), scenario.id());
    assert_eq!(restored.rendered(), scenario.events().rendered());
    let projection: CityInhabitantsProjection = restored.replay();
    assert_eq!(&projection, scenario.projection());
    Ok(())
}

#[test]
fn reactions_are_on_by_default() -> Result<(), Error> {
    let scenario = Scenario::default();
    assert!(scenario.config().reactions());

    let mut quiet = vagrant_and_resident(ScenarioConfig::default().with_reactions(false));
    assert!(!quiet.config().reactions());
    quiet.alien("Vagrant")?.moves_to("B")?;
    assert_eq!(quiet.events().len(), 4);
    Ok(())
}

#[test]
fn an_alien_cannot_land_in_a_second_city() -> Result<(), Error> {
    let mut scenario = Scenario::default();
    scenario.given_alien("1")?.at_city("A")?;

    match scenario.given_alien("1")?.at_city("B") {
        Err(Error::AlienAlreadyLanded { alien: name, city: at }) => {
            assert_eq!(name, alien("1"));
            assert_eq!(at, city("A"));
        }
        other => panic!("Expected AlienAlreadyLanded, got {:?}", other),
    }

    scenario.given_alien("2")?.at_city("C")?;
    scenario.alien("2")?.moves_to("A")?;

    scenario.alien("1")?.dies()?;
    scenario.alien("2")?.is_at("A")?;
    assert_eq!(scenario.cities().len(), 2);
    assert!(scenario.city(&city("B")).is_none());
    assert_eq!(scenario.alien("1")?.where_is(), None);
    Ok(())
}

#[test]
fn landing_on_an_occupied_city_leaves_the_resident_where_the_log_says() -> Result<(), Error> {
    let mut scenario = Scenario::default();
    scenario.given_alien("1")?.at_city("A")?;
    scenario.given_alien("2")?.at_city("A")?;

    assert_eq!(
        scenario
            .city(&city("A"))
            .and_then(|c| c.occupant())
            .map(|a| a.name().clone()),
        Some(alien("2"))
    );
    scenario.alien("1")?.is_at("A")?;
    scenario.alien("2")?.is_at("A")?;
    assert_eq!(
        scenario.projection().inhabitants_of(&city("A")),
        vec![&alien("1"), &alien("2")]
    );

    scenario.add_city("B")?;
    match scenario.alien("1")?.moves_to("B") {
        Err(Error::AlienNotPresent { city: from, destination }) => {
            assert_eq!(from, city("A"));
            assert_eq!(destination, city("B"));
        }
        other => panic!("Expected AlienNotPresent, got {:?}", other),
    }
    Ok(())
}
