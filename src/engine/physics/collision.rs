use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// Playable characters
    Character = 0b0000_0010,

    /// Static ground, platforms and walls
    Platform = 0b0000_0100,

    /// Damaging props such as explosives
    Hazard = 0b0000_1000,

    /// Coins and health pickups
    Pickup = 0b0001_0000,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Characters stand on platforms and overlap hazards/pickups,
            // but pass through each other
            CollisionGroups::Character => Group::from_bits_truncate(
                CollisionGroups::Platform as u32
                    | CollisionGroups::Hazard as u32
                    | CollisionGroups::Pickup as u32,
            ),

            CollisionGroups::Platform => Group::from_bits_truncate(
                CollisionGroups::Character as u32 | CollisionGroups::Platform as u32,
            ),

            // Hazards and pickups only react to characters
            CollisionGroups::Hazard | CollisionGroups::Pickup => {
                Group::from_bits_truncate(CollisionGroups::Character as u32)
            }

            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}
