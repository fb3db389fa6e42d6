// Level props the ninja can run into: explosives and pickups

use log::info;

use super::characters::Character;
use super::damage::{DamageType, Damageable, InstigatorId};
use crate::engine::physics::body::presets;
use crate::engine::physics::{
    ColliderHandle, CollisionGroups, MovementBody, PhysicsWorld, RigidBodyHandle,
};

/// Damage dealt by an explosive barrel
pub const EXPLOSIVE_DAMAGE: f32 = 15.0;

/// Side length of an item's sensor box
const ITEM_SIZE: f32 = 0.5;

/// What touching an item does
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemKind {
    /// Hurts whoever touches it, then is gone
    Explosive { damage: f32 },
    Coin { amount: i32 },
    HealthPotion { amount: f32 },
}

impl ItemKind {
    pub fn explosive() -> Self {
        ItemKind::Explosive {
            damage: EXPLOSIVE_DAMAGE,
        }
    }

    fn collision_group(self) -> CollisionGroups {
        match self {
            ItemKind::Explosive { .. } => CollisionGroups::Hazard,
            ItemKind::Coin { .. } | ItemKind::HealthPotion { .. } => CollisionGroups::Pickup,
        }
    }
}

/// A fixed sensor in the level that applies its effect once
#[derive(Debug)]
pub struct Item {
    /// Reported as the instigator when the item causes damage
    pub id: InstigatorId,
    pub kind: ItemKind,
    body: RigidBodyHandle,
    collider: ColliderHandle,
    consumed: bool,
}

impl Item {
    /// Place an item in the physics world
    pub fn spawn(
        physics: &mut PhysicsWorld,
        id: InstigatorId,
        kind: ItemKind,
        x: f32,
        y: f32,
    ) -> Self {
        let body = physics.add_rigid_body(presets::platform_body(x, y));
        let collider =
            physics.add_collider(presets::item_sensor(ITEM_SIZE, kind.collision_group()), body);

        Self {
            id,
            kind,
            body,
            collider,
            consumed: false,
        }
    }

    /// Whether `other` overlapped this item during the last physics step
    pub fn overlaps(&self, physics: &PhysicsWorld, other: ColliderHandle) -> bool {
        !self.consumed && physics.intersecting(self.collider, other)
    }

    /// Apply the item's effect to a character. Returns false if nothing
    /// happened (already used, or the character is dead).
    pub fn touched_by<B: MovementBody>(&mut self, character: &mut Character<B>) -> bool {
        if self.consumed || !character.is_alive() {
            return false;
        }

        match self.kind {
            ItemKind::Explosive { damage } => {
                let target: &mut dyn Damageable = character;
                let remaining =
                    target.apply_damage(damage, Some(self.id), DamageType::EXPLOSION);
                info!("Explosive {} went off ({} health left)", self.id, remaining);
            }
            ItemKind::Coin { amount } => {
                character.increment_coins(amount);
                info!("{} picked up {} coin(s)", character.name, amount);
            }
            ItemKind::HealthPotion { amount } => {
                character.increment_health(amount);
                info!("{} drank a potion (+{} health)", character.name, amount);
            }
        }

        self.consumed = true;
        true
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Take the item's body and sensor out of the world
    pub fn despawn(&self, physics: &mut PhysicsWorld) {
        physics.remove_rigid_body(self.body);
    }
}
