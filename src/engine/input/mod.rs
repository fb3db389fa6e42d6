// Input handling system
//
// Keyboard, mouse and touch input for the local player, with rebindable
// actions.
//
// ## Architecture
//
// - `action`: Defines game actions and default bindings
// - `config`: Input configuration and remapping
// - `state`: Pressed / just-pressed / just-released bookkeeping
// - `manager`: Turns winit events into action state
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, Action};
//
// let mut input = InputManager::default();
//
// // In your event loop, feed window events
// input.process_keyboard_event(&key_event);
//
// // Consume the frame's input, then start a new frame
// if input.state().just_released(Action::Attack) {
//     // Attack button released
// }
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod state;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
