// Side-scroller character movement
//
// `MovementBody` is everything the character logic is allowed to ask of the
// physics side: whether it is airborne, how fast it is moving, and requests to
// move or jump. `PlatformerBody` implements it on top of a rapier2d capsule.

use glam::Vec2;
use rapier2d::prelude::*;

use super::body::presets;
use super::world::{ColliderHandle, PhysicsWorld, RigidBodyHandle};

/// How far below the feet the ground ray reaches
const GROUND_RAY_DISTANCE: Real = 0.1;

/// Rising faster than this means we just left the ground
const GROUND_MAX_RISE_SPEED: Real = 0.5;

/// Horizontal speeds below this are treated as standing still
const REST_SPEED: Real = 0.01;

/// Movement collaborator queried and driven by character logic
pub trait MovementBody {
    /// True when not standing on the ground (jumping or falling)
    fn is_airborne(&self) -> bool;

    /// Velocity in the movement plane
    fn planar_velocity(&self) -> Vec2;

    /// Horizontal input for the next simulation tick, in [-1, 1]
    fn add_movement_input(&mut self, axis: f32);

    /// Ask for a jump. Returns whether the body was able to jump.
    fn jump(&mut self) -> bool;

    /// Jump input released
    fn stop_jumping(&mut self);
}

/// Tuning for side-scroller movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementSettings {
    /// Multiplier applied to world gravity
    pub gravity_scale: f32,
    /// Fraction of horizontal control kept while airborne
    pub air_control: f32,
    /// Upward velocity given by a jump (units/second)
    pub jump_velocity: f32,
    /// Deceleration factor when grounded without input
    pub ground_friction: f32,
    /// Maximum horizontal speed on the ground (units/second)
    pub max_walk_speed: f32,
    /// Capsule radius
    pub capsule_radius: f32,
    /// Capsule half height, caps included
    pub capsule_half_height: f32,
}

pub const DEFAULT_MOVEMENT: MovementSettings = MovementSettings {
    gravity_scale: 2.0,
    air_control: 0.8,
    jump_velocity: 10.0,
    ground_friction: 3.0,
    max_walk_speed: 6.0,
    capsule_radius: 0.4,
    capsule_half_height: 0.96,
};

impl Default for MovementSettings {
    fn default() -> Self {
        DEFAULT_MOVEMENT
    }
}

/// A rapier2d-backed platformer body
///
/// Requests are buffered on the struct and applied in `pre_step`; the
/// observable state is refreshed in `post_step`. This keeps the character
/// free of any borrow on the physics world between ticks.
#[derive(Debug)]
pub struct PlatformerBody {
    settings: MovementSettings,
    body_handle: RigidBodyHandle,
    collider_handle: ColliderHandle,

    /// Horizontal input accumulated since the last tick
    move_input: f32,
    /// A jump was requested and accepted, impulse not yet applied
    jump_pending: bool,

    velocity: Vec2,
    grounded: bool,
}

impl PlatformerBody {
    /// Create the capsule body in the physics world
    pub fn spawn(physics: &mut PhysicsWorld, settings: MovementSettings, x: f32, y: f32) -> Self {
        let body = presets::character_body(x, y, settings.gravity_scale);
        let body_handle = physics.add_rigid_body(body);

        let collider =
            presets::character_collider(settings.capsule_radius, settings.capsule_half_height);
        let collider_handle = physics.add_collider(collider, body_handle);

        Self {
            settings,
            body_handle,
            collider_handle,
            move_input: 0.0,
            jump_pending: false,
            velocity: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Apply buffered input to the rigid body. Call before `PhysicsWorld::step`.
    pub fn pre_step(&mut self, physics: &mut PhysicsWorld) {
        let dt = physics.timestep();
        let axis = self.move_input.clamp(-1.0, 1.0);
        self.move_input = 0.0;

        let Some(body) = physics.get_rigid_body_mut(self.body_handle) else {
            return;
        };
        let mut velocity = *body.linvel();

        if axis != 0.0 {
            let control = if self.grounded {
                1.0
            } else {
                self.settings.air_control
            };
            velocity.x = axis * self.settings.max_walk_speed * control;
        } else if self.grounded {
            velocity.x *= (1.0 - self.settings.ground_friction * dt).max(0.0);
            if velocity.x.abs() < REST_SPEED {
                velocity.x = 0.0;
            }
        }
        // In air: keep momentum when there is no input

        if self.jump_pending {
            self.jump_pending = false;
            velocity.y = self.settings.jump_velocity;
            self.grounded = false;
        }

        body.set_linvel(velocity, true);
    }

    /// Refresh velocity and ground state. Call after `PhysicsWorld::step`.
    pub fn post_step(&mut self, physics: &PhysicsWorld) {
        let Some(body) = physics.get_rigid_body(self.body_handle) else {
            return;
        };
        let linvel = *body.linvel();
        let position = *body.translation();

        let feet = position.y - self.settings.capsule_half_height;
        let ray_origin = vector![position.x, feet + 0.05];
        let touching_ground = physics
            .raycast(
                ray_origin,
                vector![0.0, -1.0],
                GROUND_RAY_DISTANCE + 0.05,
                true,
                QueryFilter::default().exclude_rigid_body(self.body_handle),
            )
            .is_some();

        self.grounded = touching_ground && linvel.y <= GROUND_MAX_RISE_SPEED;

        // Walking has no vertical component; ignore solver jitter
        let vertical = if self.grounded { 0.0 } else { linvel.y };
        let horizontal = if linvel.x.abs() < REST_SPEED {
            0.0
        } else {
            linvel.x
        };
        self.velocity = Vec2::new(horizontal, vertical);
    }

    /// Current position of the capsule centre
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.body_handle).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    /// The capsule collider, for overlap queries against sensors
    pub fn collider_handle(&self) -> ColliderHandle {
        self.collider_handle
    }
}

impl MovementBody for PlatformerBody {
    fn is_airborne(&self) -> bool {
        !self.grounded
    }

    fn planar_velocity(&self) -> Vec2 {
        self.velocity
    }

    fn add_movement_input(&mut self, axis: f32) {
        self.move_input += axis;
    }

    fn jump(&mut self) -> bool {
        if self.grounded {
            self.jump_pending = true;
            true
        } else {
            false
        }
    }

    fn stop_jumping(&mut self) {
        self.jump_pending = false;
    }
}
