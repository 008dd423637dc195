/// Configuration for how a [`Scenario`](crate::Scenario) reacts to events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioConfig {
    reactions: bool,
}

impl ScenarioConfig {
    /// Turns the reaction loop on or off.
    ///
    /// Without reactions, moving into an occupied city leaves both aliens there
    /// until an arrival is resolved by hand.
    pub fn with_reactions(self, reactions: bool) -> Self {
        Self { reactions, ..self }
    }

    pub fn reactions(&self) -> bool {
        self.reactions
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self { reactions: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_react_to_events() {
        assert!(ScenarioConfig::default().reactions());
    }

    #[test]
    fn reactions_can_be_switched_off() {
        let config = ScenarioConfig::default().with_reactions(false);
        assert!(!config.reactions());
        assert!(config.with_reactions(true).reactions());
    }
}
