// Game action definitions and default bindings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Combat
    Attack,
    Throw,

    // Meta actions
    Pause,
    Menu,
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings for the player
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (A/D and arrows)
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        // Combat
        (InputSource::key(KeyCode::KeyJ), Action::Attack),
        (InputSource::mouse(MouseButton::Left), Action::Attack),
        (InputSource::key(KeyCode::KeyK), Action::Throw),
        (InputSource::mouse(MouseButton::Right), Action::Throw),
        // Meta
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::Escape), Action::Menu),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_creation() {
        assert_eq!(
            InputSource::key(KeyCode::KeyJ),
            InputSource::Keyboard(KeyCode::KeyJ)
        );
        assert_eq!(
            InputSource::mouse(MouseButton::Left),
            InputSource::Mouse(MouseButton::Left)
        );
    }

    #[test]
    fn test_default_bindings_cover_character_actions() {
        let bindings = default_bindings();
        for action in [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Jump,
            Action::Attack,
            Action::Throw,
        ] {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "{:?} has no default binding",
                action
            );
        }
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in default_bindings() {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in default bindings"
            );
        }
    }
}
