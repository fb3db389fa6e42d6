use super::collision::CollisionGroups;
use rapier2d::prelude::*;

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    gravity_scale: Real,
    linear_damping: Real,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            gravity_scale: 1.0,
            linear_damping: 0.5,
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            gravity_scale: 0.0,
            linear_damping: 0.0,
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set the gravity scale (1.0 = normal gravity, 0.0 = no gravity)
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Set linear damping (air resistance)
    pub fn linear_damping(mut self, damping: Real) -> Self {
        self.linear_damping = damping;
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation (characters stay upright)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .gravity_scale(self.gravity_scale)
            .linear_damping(self.linear_damping)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Builder for creating colliders with common configurations
pub struct ColliderBuilder2D {
    shape: SharedShape,
    collision_groups: CollisionGroups,
    is_sensor: bool,
    friction: Real,
    restitution: Real,
    density: Real,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self::with_shape(SharedShape::cuboid(half_width, half_height))
    }

    /// Create a vertical capsule collider (good for characters)
    pub fn capsule(half_height: Real, radius: Real) -> Self {
        Self::with_shape(SharedShape::capsule_y(half_height, radius))
    }

    fn with_shape(shape: SharedShape) -> Self {
        Self {
            shape,
            collision_groups: CollisionGroups::Default,
            is_sensor: false,
            friction: 0.5,
            restitution: 0.0,
            density: 1.0,
        }
    }

    /// Set the collision groups for filtering
    pub fn collision_groups(mut self, groups: CollisionGroups) -> Self {
        self.collision_groups = groups;
        self
    }

    /// Make this a sensor (detects overlaps but doesn't block)
    pub fn sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    /// Set friction coefficient (0.0 = no friction, 1.0 = high friction)
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Set restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        rapier2d::prelude::ColliderBuilder::new(self.shape)
            .collision_groups(self.collision_groups.to_interaction_groups())
            .sensor(self.is_sensor)
            .friction(self.friction)
            .restitution(self.restitution)
            .density(self.density)
            .build()
    }
}

/// Common rigid body configurations for game objects
pub mod presets {
    use super::*;

    /// Create a character body (dynamic, upright, never sleeps)
    pub fn character_body(x: Real, y: Real, gravity_scale: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .lock_rotation()
            .gravity_scale(gravity_scale)
            .linear_damping(0.0)
            .can_sleep(false)
            .build()
    }

    /// Create a character collider (capsule, flat-feel, frictionless)
    ///
    /// `half_height` is the half height of the whole capsule, caps included.
    pub fn character_collider(radius: Real, half_height: Real) -> Collider {
        let segment_half_height = (half_height - radius).max(0.0);

        ColliderBuilder2D::capsule(segment_half_height, radius)
            .collision_groups(CollisionGroups::Character)
            .friction(0.0) // Horizontal speed is driven directly
            .restitution(0.0)
            .build()
    }

    /// Create a platform body (fixed/static)
    pub fn platform_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Create a sensor for a hazard or pickup (square, overlap only)
    pub fn item_sensor(size: Real, groups: CollisionGroups) -> Collider {
        ColliderBuilder2D::box_shape(size / 2.0, size / 2.0)
            .collision_groups(groups)
            .sensor(true)
            .build()
    }

    /// Create a platform collider (box shape)
    pub fn platform_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Platform)
            .friction(0.3)
            .restitution(0.0)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_builder_dynamic() {
        let body = BodyBuilder::new_dynamic().position(10.0, 20.0).build();

        assert_eq!(body.body_type(), RigidBodyType::Dynamic);
        assert_eq!(body.translation().x, 10.0);
        assert_eq!(body.translation().y, 20.0);
    }

    #[test]
    fn test_collider_builder_box() {
        let collider = ColliderBuilder2D::box_shape(1.0, 2.0).friction(0.3).build();

        assert!(!collider.is_sensor());
        assert_eq!(collider.friction(), 0.3);
    }

    #[test]
    fn test_character_preset() {
        let body = presets::character_body(0.0, 0.0, 2.0);
        let collider = presets::character_collider(0.4, 0.96);

        assert_eq!(body.body_type(), RigidBodyType::Dynamic);
        assert!(body.is_rotation_locked());
        assert_eq!(body.gravity_scale(), 2.0);
        assert_eq!(collider.friction(), 0.0);
    }

    #[test]
    fn test_platform_preset() {
        let body = presets::platform_body(0.0, -1.0);
        assert!(body.is_fixed());
    }

    #[test]
    fn test_item_sensor_preset() {
        let collider = presets::item_sensor(0.5, CollisionGroups::Pickup);

        assert!(collider.is_sensor());
        assert_eq!(
            collider.collision_groups(),
            CollisionGroups::Pickup.to_interaction_groups()
        );
    }
}
