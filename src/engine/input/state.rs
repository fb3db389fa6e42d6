// Per-frame action state

use super::action::Action;
use std::collections::{HashMap, HashSet};

/// Pressed/just-pressed/just-released bookkeeping for all actions
///
/// Several sources can be bound to one action, so an action stays pressed
/// until the last of its held sources is released.
#[derive(Debug, Default)]
pub struct ActionState {
    /// Number of held sources per action
    pressed: HashMap<Action, u32>,

    /// Actions that were pressed since the last update
    just_pressed: HashSet<Action>,

    /// Actions that were released since the last update
    just_released: HashSet<Action>,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains_key(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register one more held source for an action
    pub(crate) fn press(&mut self, action: Action) {
        let held = self.pressed.entry(action).or_insert(0);
        *held += 1;
        if *held == 1 {
            self.just_pressed.insert(action);
        }
    }

    /// Register one held source letting go of an action
    pub(crate) fn release(&mut self, action: Action) {
        let Some(held) = self.pressed.get_mut(&action) else {
            return;
        };
        *held -= 1;
        if *held == 0 {
            self.pressed.remove(&action);
            self.just_released.insert(action);
        }
    }

    /// Start a new frame
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Horizontal axis from the move actions, in [-1, 1]
    pub fn move_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.is_pressed(Action::MoveLeft) {
            axis -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            axis += 1.0;
        }
        axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut state = ActionState::new();
        state.press(Action::Attack);
        assert!(state.is_pressed(Action::Attack));
        assert!(state.just_pressed(Action::Attack));
    }

    #[test]
    fn test_release_action() {
        let mut state = ActionState::new();
        state.press(Action::Throw);
        state.update();
        state.release(Action::Throw);

        assert!(!state.is_pressed(Action::Throw));
        assert!(state.just_released(Action::Throw));
    }

    #[test]
    fn test_update_clears_edges() {
        let mut state = ActionState::new();
        state.press(Action::Jump);
        state.update();

        assert!(state.is_pressed(Action::Jump));
        assert!(!state.just_pressed(Action::Jump));
    }

    #[test]
    fn test_second_source_is_not_a_new_edge() {
        let mut state = ActionState::new();
        state.press(Action::Jump);
        state.update();
        state.press(Action::Jump);
        assert!(!state.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut state = ActionState::new();
        state.release(Action::Attack);
        assert!(!state.just_released(Action::Attack));
    }

    #[test]
    fn test_move_axis() {
        let mut state = ActionState::new();
        assert_eq!(state.move_axis(), 0.0);

        state.press(Action::MoveRight);
        assert_eq!(state.move_axis(), 1.0);

        state.press(Action::MoveLeft);
        assert_eq!(state.move_axis(), 0.0);

        state.release(Action::MoveRight);
        assert_eq!(state.move_axis(), -1.0);
    }

    #[test]
    fn test_action_held_until_last_source_released() {
        let mut state = ActionState::new();
        state.press(Action::MoveLeft);
        state.press(Action::MoveLeft);
        state.update();

        state.release(Action::MoveLeft);
        assert!(state.is_pressed(Action::MoveLeft));
        assert!(!state.just_released(Action::MoveLeft));
        assert_eq!(state.move_axis(), -1.0);

        state.release(Action::MoveLeft);
        assert!(!state.is_pressed(Action::MoveLeft));
        assert!(state.just_released(Action::MoveLeft));
        assert_eq!(state.move_axis(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut state = ActionState::new();
        state.press(Action::MoveLeft);
        state.reset();
        assert!(!state.is_pressed(Action::MoveLeft));
        assert_eq!(state.move_axis(), 0.0);
    }
}
