// Character hitbox, derived from the body every tick

use glam::Vec3;
use log::info;

use crate::engine::physics::Aabb;

use super::character::Character;

/// Axis-aligned hitbox following the character.
///
/// The box is always recomputed; `visible` only controls debug drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub bounds: Aabb,
    pub visible: bool,
}

impl Default for Hitbox {
    fn default() -> Self {
        Self {
            bounds: Aabb::new(Vec3::ZERO, Vec3::ZERO),
            visible: true,
        }
    }
}

impl Hitbox {
    /// Box for a character in its current pose
    pub fn bounds_for(character: &Character) -> Aabb {
        let stats = &character.stats;
        Aabb::new(
            character.position + Vec3::Y * stats.hitbox_center_offset(),
            Vec3::new(stats.hitbox_half_width, stats.height, stats.hitbox_half_width),
        )
    }

    /// Recompute the box from the character
    pub fn update(&mut self, character: &Character) {
        self.bounds = Self::bounds_for(character);
    }

    /// Flip debug visibility
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
        info!(
            "Hitbox debug draw {}",
            if self.visible { "enabled" } else { "disabled" }
        );
    }

    /// Overlap test against another box
    #[allow(dead_code)]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.bounds.intersects(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::stats::BASE_STATS;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_tracks_character_position() {
        let mut character = Character::new(BASE_STATS, Vec3::ZERO);
        let mut hitbox = Hitbox::default();
        hitbox.update(&character);
        assert_abs_diff_eq!(hitbox.bounds.center.y, 0.8, epsilon = 1e-6);
        assert_eq!(hitbox.bounds.half_extents, Vec3::new(0.3, 1.0, 0.3));

        character.position = Vec3::new(4.0, 1.5, -2.0);
        hitbox.update(&character);
        assert_abs_diff_eq!(hitbox.bounds.center.x, 4.0);
        assert_abs_diff_eq!(hitbox.bounds.center.y, 2.3, epsilon = 1e-6);
        assert_abs_diff_eq!(hitbox.bounds.center.z, -2.0);
    }

    #[test]
    fn test_visibility_does_not_affect_bounds() {
        let character = Character::new(BASE_STATS, Vec3::new(1.0, 0.0, 1.0));
        let mut hitbox = Hitbox::default();
        assert!(hitbox.visible);

        hitbox.toggle_visible();
        hitbox.update(&character);
        assert!(!hitbox.visible);
        assert_eq!(hitbox.bounds, Hitbox::bounds_for(&character));

        hitbox.toggle_visible();
        assert!(hitbox.visible);
    }

    #[test]
    fn test_intersects_nearby_box() {
        let character = Character::new(BASE_STATS, Vec3::ZERO);
        let mut hitbox = Hitbox::default();
        hitbox.update(&character);

        let near = Aabb::new(Vec3::new(0.5, 0.5, 0.0), Vec3::splat(0.25));
        let far = Aabb::new(Vec3::new(3.0, 0.5, 0.0), Vec3::splat(0.25));
        assert!(hitbox.intersects(&near));
        assert!(!hitbox.intersects(&far));
    }
}
