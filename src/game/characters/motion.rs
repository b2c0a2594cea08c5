// Motion integration: gravity, planar displacement and facing

use glam::{Vec2, Vec3};

use crate::core::math::{normalize_or, yaw_from_direction, DIRECTION_EPSILON};
use crate::engine::physics::{integrate_vertical, GRAVITY};

use super::character::Character;
use super::state::ActionState;
use super::stats::CharacterStats;

/// Combine movement axes with a camera basis into a unit wish direction on
/// the ground plane. No input, or a degenerate result, yields zero.
pub fn wish_direction(forward: Vec3, right: Vec3, axes: Vec2) -> Vec3 {
    if axes.length() <= DIRECTION_EPSILON {
        return Vec3::ZERO;
    }
    let mut wish = forward * axes.y + right * axes.x;
    wish.y = 0.0;
    normalize_or(wish, Vec3::ZERO)
}

/// Planar speed for a state. Rolling is not listed here: it moves along the
/// facing direction regardless of input.
pub fn planar_speed(stats: &CharacterStats, state: ActionState, moving: bool) -> f32 {
    match state {
        ActionState::Moving => stats.walk_speed,
        ActionState::Running => stats.run_speed,
        ActionState::Jumping if moving => stats.walk_speed * stats.air_control,
        ActionState::Idle | ActionState::Jumping | ActionState::Attacking => 0.0,
        ActionState::Rolling => stats.roll_speed,
    }
}

/// Applies vertical and planar motion to the character
#[derive(Debug, Clone, Copy)]
pub struct MotionIntegrator {
    /// Vertical acceleration; negative is downward
    pub gravity: f32,
}

impl Default for MotionIntegrator {
    fn default() -> Self {
        Self::new(GRAVITY)
    }
}

impl MotionIntegrator {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }

    /// Launch the character upward
    pub fn start_jump(&self, character: &mut Character) {
        character.vertical_velocity = character.stats.jump_speed;
        character.grounded = false;
    }

    /// Integrate gravity and clamp to the ground plane. Returns `true` on the
    /// tick the character lands.
    pub fn apply_gravity(&self, character: &mut Character, dt: f32) -> bool {
        let mut body = character.vertical_body();
        let landed = integrate_vertical(&mut body, self.gravity, dt);
        character.set_vertical_body(body);
        landed
    }

    /// Move on the ground plane and turn to face the wish direction.
    ///
    /// Rolling moves along the facing direction and ignores `wish`;
    /// attacking stands still.
    pub fn move_planar(&self, character: &mut Character, state: ActionState, wish: Vec3, dt: f32) {
        let moving = wish.length() > 0.0;
        let speed = planar_speed(&character.stats, state, moving);

        if state == ActionState::Rolling {
            let forward = character.forward();
            character.position += forward * speed * dt;
            return;
        }

        if !state.is_steerable() {
            return;
        }

        character.position += wish * speed * dt;
        if moving {
            character.yaw_deg = yaw_from_direction(wish);
        }
    }
}
