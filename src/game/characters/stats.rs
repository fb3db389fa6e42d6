// Character stats - the tuning every ninja starts with

use crate::engine::physics::{MovementSettings, DEFAULT_MOVEMENT};

/// Fixed character stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterStats {
    // Vitals
    /// Health ceiling for pickups
    pub max_health: f32,
    /// Health at spawn
    pub base_health: f32,
    /// Stamina ceiling
    pub max_stamina: f32,
    /// Stamina at spawn
    pub base_stamina: f32,
    /// Coins at spawn
    pub starting_coins: i32,

    // Combat
    /// Stamina spent per throw
    pub throw_stamina_cost: f32,
    /// Stamina is only spent while strictly above this value
    pub stamina_floor: f32,

    // Animation timing (seconds of simulation time)
    /// How long attack/throw/jump clips own the sprite
    pub action_reversion_delay: f32,
    /// Delay between the death clip and the stay-dead clip
    pub death_settle_delay: f32,

    // Movement
    pub movement: MovementSettings,
}

/// The standard ninja
pub const BASE_STATS: CharacterStats = CharacterStats {
    max_health: 100.0,
    base_health: 65.0,
    max_stamina: 150.0,
    base_stamina: 120.0,
    starting_coins: 0,

    throw_stamina_cost: 10.0,
    stamina_floor: 10.0,

    action_reversion_delay: 0.7,
    death_settle_delay: 0.5,

    movement: DEFAULT_MOVEMENT,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}
