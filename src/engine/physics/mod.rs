// Physics system using rapier2d

pub mod body;
mod collision;
mod movement;
mod world;

pub use collision::CollisionGroups;
pub use movement::{MovementBody, MovementSettings, PlatformerBody, DEFAULT_MOVEMENT};
pub use world::{ColliderHandle, PhysicsWorld, RigidBodyHandle};
