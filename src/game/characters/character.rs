// The controlled character's body

use glam::{Mat4, Quat, Vec3};

use crate::core::math::direction_from_yaw;
use crate::engine::physics::{VerticalBody, GROUND_HEIGHT};

use super::stats::CharacterStats;

/// Position, facing and vertical motion of the character.
///
/// Created once at startup and mutated once per tick by the motion
/// integrator.
#[derive(Debug, Clone)]
pub struct Character {
    /// World-space position of the feet
    pub position: Vec3,
    /// Facing angle around +Y in degrees (0 = facing +Z)
    pub yaw_deg: f32,
    /// Standing on the ground plane with zero vertical velocity
    pub grounded: bool,
    /// Vertical velocity (units/second, positive = up)
    pub vertical_velocity: f32,
    /// Movement and body tuning
    pub stats: CharacterStats,
}

impl Character {
    /// Spawn a character standing at `position`. Anything above the ground
    /// plane starts airborne and falls.
    pub fn new(stats: CharacterStats, position: Vec3) -> Self {
        let grounded = position.y <= GROUND_HEIGHT;
        Self {
            position: if grounded {
                Vec3::new(position.x, GROUND_HEIGHT, position.z)
            } else {
                position
            },
            yaw_deg: 0.0,
            grounded,
            vertical_velocity: 0.0,
            stats,
        }
    }

    /// Unit direction the character faces on the ground plane
    pub fn forward(&self) -> Vec3 {
        direction_from_yaw(self.yaw_deg)
    }

    /// Head height used as the camera's orbit anchor
    pub fn height(&self) -> f32 {
        self.stats.height
    }

    /// Model transform: translate to the feet, then rotate by facing
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_rotation_y(self.yaw_deg.to_radians()),
            self.position,
        )
    }

    pub(crate) fn vertical_body(&self) -> VerticalBody {
        VerticalBody {
            height: self.position.y,
            velocity: self.vertical_velocity,
            grounded: self.grounded,
        }
    }

    pub(crate) fn set_vertical_body(&mut self, body: VerticalBody) {
        self.position.y = body.height;
        self.vertical_velocity = body.velocity;
        self.grounded = body.grounded;
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new(CharacterStats::default(), Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_character_is_grounded() {
        let character = Character::default();
        assert!(character.grounded);
        assert_eq!(character.position, Vec3::ZERO);
        assert_eq!(character.vertical_velocity, 0.0);
    }

    #[test]
    fn test_spawn_in_air_is_airborne() {
        let character = Character::new(CharacterStats::default(), Vec3::new(0.0, 2.0, 0.0));
        assert!(!character.grounded);
        assert_eq!(character.position.y, 2.0);
    }

    #[test]
    fn test_spawn_below_ground_is_clamped() {
        let character = Character::new(CharacterStats::default(), Vec3::new(1.0, -3.0, 2.0));
        assert!(character.grounded);
        assert_eq!(character.position, Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_forward_follows_yaw() {
        let mut character = Character::default();
        assert_abs_diff_eq!(character.forward().z, 1.0, epsilon = 1e-6);

        character.yaw_deg = -90.0;
        assert_abs_diff_eq!(character.forward().x, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_model_matrix_places_and_rotates() {
        let mut character = Character::default();
        character.position = Vec3::new(2.0, 0.0, -1.0);
        character.yaw_deg = 90.0;

        let model = character.model_matrix();
        let local_forward = model.transform_vector3(Vec3::Z);
        assert_abs_diff_eq!(local_forward.x, 1.0, epsilon = 1e-6);
        assert_eq!(model.transform_point3(Vec3::ZERO), character.position);
    }
}
