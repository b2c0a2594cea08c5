// Vertical-only physics: gravity, a flat ground plane and AABB queries

mod aabb;

pub use aabb::Aabb;

/// Downward acceleration (units/s^2); twice Earth gravity
pub const GRAVITY: f32 = -9.8 * 2.0;

/// Height of the flat ground plane
pub const GROUND_HEIGHT: f32 = 0.0;

/// Vertical body state integrated by `integrate_vertical`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalBody {
    pub height: f32,
    pub velocity: f32,
    pub grounded: bool,
}

/// Integrate one tick of gravity for an airborne body.
///
/// Grounded bodies and zero-length ticks are left untouched. Returns `true`
/// on the tick the body touches the ground plane; the body is then clamped to
/// the plane with zero vertical velocity.
pub fn integrate_vertical(body: &mut VerticalBody, gravity: f32, dt: f32) -> bool {
    if body.grounded || dt <= 0.0 {
        return false;
    }

    body.velocity += gravity * dt;
    body.height += body.velocity * dt;

    if body.height <= GROUND_HEIGHT {
        body.height = GROUND_HEIGHT;
        body.velocity = 0.0;
        body.grounded = true;
        return true;
    }
    false
}
