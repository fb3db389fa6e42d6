// Player controller - maps action state onto character requests

use log::debug;

use super::characters::Character;
use crate::engine::input::{Action, InputManager};
use crate::engine::physics::MovementBody;

/// Drives one character from the local input manager.
///
/// Jump fires on press, attack and throw fire on release. A touch start
/// counts as a jump press and a touch end as a jump release.
#[derive(Debug, Default)]
pub struct PlayerController;

impl PlayerController {
    pub fn new() -> Self {
        Self
    }

    /// Apply this frame's input. Call once per frame, before the simulation
    /// ticks and before `InputManager::update`.
    pub fn apply<B: MovementBody>(&self, input: &InputManager, character: &mut Character<B>) {
        let state = input.state();
        let touch = input.touch();

        character.set_move_axis(state.move_axis());

        if state.just_pressed(Action::Jump) || touch.started {
            character.request_jump();
        }
        if state.just_released(Action::Jump) || touch.ended {
            character.stop_jumping();
        }

        if state.just_released(Action::Attack) {
            debug!("attack released");
            character.request_attack();
        }
        if state.just_released(Action::Throw) {
            debug!("throw released");
            character.request_throw();
        }
    }
}
