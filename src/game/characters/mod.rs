// Character system
//
// - Character entity and its per-tick update
// - Fixed stats and live vitals
// - Action flags and movement status
// - Animation clips and clip selection

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;
pub mod vitals;

// Re-export commonly used types
pub use animation::CharacterAnimations;
pub use character::Character;
pub use stats::CharacterStats;
