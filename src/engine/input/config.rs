// Input configuration and remapping system

use super::action::{Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to game actions
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration holding the default bindings
    pub fn with_defaults() -> Self {
        Self::from_bindings(super::action::default_bindings())
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind an input source to an action, replacing its previous binding
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.unbind_source(source);

        self.bindings.insert(source, action);
        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}
