// Health, stamina and coins

use super::stats::CharacterStats;

/// Result of taking health away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthChange {
    /// Health is still above zero
    Survived,
    /// Health reached zero or below
    Depleted,
}

/// Health/stamina/coin counters
///
/// Every mutator is total: out-of-range input is clamped or ignored, never
/// rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Vitals {
    max_health: f32,
    health: f32,
    max_stamina: f32,
    stamina: f32,
    coins: i32,

    stamina_cost: f32,
    stamina_floor: f32,
}

impl Vitals {
    pub fn from_stats(stats: &CharacterStats) -> Self {
        Self {
            max_health: stats.max_health,
            health: stats.base_health,
            max_stamina: stats.max_stamina,
            stamina: stats.base_stamina,
            coins: stats.starting_coins,
            stamina_cost: stats.throw_stamina_cost,
            stamina_floor: stats.stamina_floor,
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    pub fn max_stamina(&self) -> f32 {
        self.max_stamina
    }

    pub fn coins(&self) -> i32 {
        self.coins
    }

    /// Spend one throw's worth of stamina.
    ///
    /// Nothing is spent once stamina is at or below the floor. Returns
    /// whether stamina changed.
    pub fn decrease_stamina(&mut self) -> bool {
        if self.stamina > self.stamina_floor {
            self.stamina -= self.stamina_cost;
            true
        } else {
            false
        }
    }

    /// Add coins. Saturates instead of wrapping at the integer limits.
    pub fn increment_coins(&mut self, amount: i32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Add health, capped at the maximum
    pub fn increment_health(&mut self, amount: f32) {
        if self.health + amount >= self.max_health {
            self.health = self.max_health;
        } else {
            self.health += amount;
        }
    }

    /// Subtract health. The subtraction always applies, so health may end
    /// up negative; reaching `<= 0` reports `Depleted`.
    pub fn decrement_health(&mut self, amount: f32) -> HealthChange {
        self.health -= amount;
        if self.health <= 0.0 {
            HealthChange::Depleted
        } else {
            HealthChange::Survived
        }
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::from_stats(&CharacterStats::default())
    }
}
