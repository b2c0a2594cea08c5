// Input configuration and remapping system

use super::action::{Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to controller actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Create a configuration with the default bindings
    pub fn with_defaults() -> Self {
        Self::from_bindings(super::action::default_bindings())
    }

    /// Bind an input source to an action, replacing any previous binding
    /// of that source
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Number of sources bound to an action
    #[cfg(test)]
    fn source_count(&self, action: Action) -> usize {
        self.bindings.values().filter(|a| **a == action).count()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyE);
        config.bind(source, Action::Jump);

        assert_eq!(config.get_action(source), Some(Action::Jump));
    }

    #[test]
    fn test_several_sources_for_one_action() {
        let mut config = InputConfig::new();
        let source1 = InputSource::mouse(MouseButton::Left);
        let source2 = InputSource::key(KeyCode::KeyF);

        config.bind(source1, Action::Attack);
        config.bind(source2, Action::Attack);

        assert_eq!(config.get_action(source1), Some(Action::Attack));
        assert_eq!(config.get_action(source2), Some(Action::Attack));
        assert_eq!(config.source_count(Action::Attack), 2);
    }

    #[test]
    fn test_rebind_source() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::Space);

        config.bind(source, Action::Roll);
        config.bind(source, Action::Jump);

        assert_eq!(config.get_action(source), Some(Action::Jump));
        assert_eq!(config.source_count(Action::Roll), 0);
    }

    #[test]
    fn test_default_is_populated() {
        let config = InputConfig::default();
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::KeyW)),
            Some(Action::MoveForward)
        );
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::KeyH)),
            Some(Action::ToggleHitbox)
        );
    }
}
