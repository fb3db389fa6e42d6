// Input manager - turns winit events into action state

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::state::ActionState;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton, TouchPhase};
use winit::keyboard::PhysicalKey;

/// Touch edges seen since the last update
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TouchEdges {
    pub started: bool,
    pub ended: bool,
}

/// Main input manager for the local player
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    state: ActionState,

    /// Keys and buttons currently held down
    held: HashSet<InputSource>,

    /// Number of fingers currently down
    active_touches: u32,

    touch: TouchEdges,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            state: ActionState::new(),
            held: HashSet::new(),
            active_touches: 0,
            touch: TouchEdges::default(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Key repeats are not new presses
            if event.repeat && event.state == ElementState::Pressed {
                return;
            }
            self.process_source(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        self.process_source(InputSource::mouse(button), state);
    }

    /// Process a touch phase change from winit
    pub fn process_touch(&mut self, phase: TouchPhase) {
        match phase {
            TouchPhase::Started => {
                self.active_touches += 1;
                self.touch.started = true;
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active_touches = self.active_touches.saturating_sub(1);
                // Only the last finger lifting ends the touch
                if self.active_touches == 0 {
                    self.touch.ended = true;
                }
            }
            TouchPhase::Moved => {}
        }
    }

    fn process_source(&mut self, source: InputSource, state: ElementState) {
        let Some(action) = self.config.get_action(source) else {
            return;
        };
        // Each source counts once, however many press events it sends
        match state {
            ElementState::Pressed => {
                if self.held.insert(source) {
                    self.state.press(action);
                }
            }
            ElementState::Released => {
                if self.held.remove(&source) {
                    self.state.release(action);
                }
            }
        }
    }

    /// Start a new frame
    /// Call this once per frame after the frame's input has been consumed
    pub fn update(&mut self) {
        self.state.update();
        self.touch = TouchEdges::default();
    }

    /// Get the current action state
    pub fn state(&self) -> &ActionState {
        &self.state
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    /// Touch edges since the last update
    pub fn touch(&self) -> TouchEdges {
        self.touch
    }

    /// Check if an action was pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.state.just_pressed(action)
    }

    /// Forget everything held, e.g. when the window loses focus and key
    /// releases will never arrive
    pub fn reset(&mut self) {
        self.state.reset();
        self.held.clear();
        self.active_touches = 0;
        self.touch = TouchEdges::default();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_buttons_map_to_combat() {
        let mut manager = InputManager::default();
        manager.process_mouse_button(ElementState::Pressed, MouseButton::Left);
        assert!(manager.state().is_pressed(Action::Attack));

        manager.process_mouse_button(ElementState::Released, MouseButton::Left);
        assert!(manager.state().just_released(Action::Attack));

        manager.process_mouse_button(ElementState::Pressed, MouseButton::Right);
        assert!(manager.just_pressed(Action::Throw));
    }

    #[test]
    fn test_unbound_button_is_ignored() {
        let mut manager = InputManager::default();
        manager.process_mouse_button(ElementState::Pressed, MouseButton::Middle);
        assert!(!manager.state().is_pressed(Action::Attack));
        assert!(!manager.state().is_pressed(Action::Throw));
    }

    #[test]
    fn test_touch_edges() {
        let mut manager = InputManager::default();
        manager.process_touch(TouchPhase::Started);
        assert!(manager.touch().started);
        assert_eq!(manager.active_touches, 1);

        manager.update();
        assert_eq!(manager.touch(), TouchEdges::default());

        manager.process_touch(TouchPhase::Moved);
        manager.process_touch(TouchPhase::Ended);
        assert!(manager.touch().ended);
        assert_eq!(manager.active_touches, 0);
    }

    #[test]
    fn test_touch_ends_with_last_finger() {
        let mut manager = InputManager::default();
        manager.process_touch(TouchPhase::Started);
        manager.process_touch(TouchPhase::Started);
        manager.update();

        manager.process_touch(TouchPhase::Ended);
        assert!(!manager.touch().ended);

        manager.process_touch(TouchPhase::Ended);
        assert!(manager.touch().ended);
    }

    #[test]
    fn test_action_released_by_last_bound_source() {
        let mut config = InputConfig::with_defaults();
        config.bind(InputSource::mouse(MouseButton::Middle), Action::Throw);
        let mut manager = InputManager::new(config);

        manager.process_mouse_button(ElementState::Pressed, MouseButton::Right);
        manager.process_mouse_button(ElementState::Pressed, MouseButton::Middle);
        manager.update();

        manager.process_mouse_button(ElementState::Released, MouseButton::Right);
        assert!(manager.state().is_pressed(Action::Throw));
        assert!(!manager.state().just_released(Action::Throw));

        manager.update();
        manager.process_mouse_button(ElementState::Released, MouseButton::Middle);
        assert!(!manager.state().is_pressed(Action::Throw));
        assert!(manager.state().just_released(Action::Throw));
    }

    #[test]
    fn test_repeated_press_from_one_source_counts_once() {
        let mut manager = InputManager::default();
        manager.process_mouse_button(ElementState::Pressed, MouseButton::Left);
        manager.process_mouse_button(ElementState::Pressed, MouseButton::Left);
        manager.update();

        manager.process_mouse_button(ElementState::Released, MouseButton::Left);
        assert!(!manager.state().is_pressed(Action::Attack));
        assert!(manager.state().just_released(Action::Attack));
    }

    #[test]
    fn test_cancelled_touch_never_underflows() {
        let mut manager = InputManager::default();
        manager.process_touch(TouchPhase::Cancelled);
        assert_eq!(manager.active_touches, 0);
    }

    #[test]
    fn test_update_clears_just_pressed() {
        let mut manager = InputManager::default();
        manager.state_mut().press(Action::Jump);
        assert!(manager.just_pressed(Action::Jump));

        manager.update();
        assert!(!manager.just_pressed(Action::Jump));
        assert!(manager.state().is_pressed(Action::Jump));
    }

    #[test]
    fn test_reset() {
        let mut manager = InputManager::default();
        manager.process_mouse_button(ElementState::Pressed, MouseButton::Left);
        manager.state_mut().press(Action::MoveRight);
        manager.process_touch(TouchPhase::Started);
        manager.reset();

        assert_eq!(manager.state().move_axis(), 0.0);
        assert_eq!(manager.active_touches, 0);

        // A stale release after the reset changes nothing
        manager.process_mouse_button(ElementState::Released, MouseButton::Left);
        assert!(!manager.state().just_released(Action::Attack));

        manager.process_mouse_button(ElementState::Pressed, MouseButton::Left);
        assert!(manager.just_pressed(Action::Attack));
    }
}
