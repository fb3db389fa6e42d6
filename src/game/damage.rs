// Damage plumbing shared by hazards and characters

/// Opaque id of whatever caused a hit
pub type InstigatorId = u64;

/// Opaque tag describing a hit; characters forward it without interpreting it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DamageType(pub &'static str);

impl DamageType {
    pub const GENERIC: Self = Self("generic");
    pub const EXPLOSION: Self = Self("explosion");
}

impl Default for DamageType {
    fn default() -> Self {
        Self::GENERIC
    }
}

/// The last hit a target received
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRecord {
    pub amount: f32,
    pub instigator: Option<InstigatorId>,
    pub damage_type: DamageType,
}

/// Anything a damage source can hurt
///
/// Damage sources check for this capability on whatever they touched instead
/// of asking what concrete type it is.
pub trait Damageable {
    /// Apply a hit and return the remaining health
    fn apply_damage(
        &mut self,
        amount: f32,
        instigator: Option<InstigatorId>,
        damage_type: DamageType,
    ) -> f32;
}
