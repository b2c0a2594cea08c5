// Character stats - fixed tuning for the controlled character

/// Fixed movement and body tuning
#[derive(Debug, Clone)]
pub struct CharacterStats {
    // Movement
    /// Walking speed (units/second)
    pub walk_speed: f32,
    /// Running speed while the run modifier is held (units/second)
    pub run_speed: f32,
    /// Roll speed along the facing direction (units/second)
    pub roll_speed: f32,
    /// Upward velocity applied when a jump starts
    pub jump_speed: f32,
    /// Planar speed multiplier while airborne in a jump
    pub air_control: f32,

    // Body
    /// Approximate head height above the feet
    pub height: f32,
    /// Hitbox half extent on X and Z
    pub hitbox_half_width: f32,
    /// Hitbox center sits `height / hitbox_center_divisor` above the feet
    pub hitbox_center_divisor: f32,
}

/// Tuning used by the controller
pub const BASE_STATS: CharacterStats = CharacterStats {
    // Movement
    walk_speed: 3.4,
    run_speed: 6.0,
    roll_speed: 2.0,
    jump_speed: 5.0,
    air_control: 0.6,

    // Body
    height: 1.0,
    hitbox_half_width: 0.3,
    hitbox_center_divisor: 1.25,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    /// Vertical offset of the hitbox center above the character's feet
    pub fn hitbox_center_offset(&self) -> f32 {
        if self.hitbox_center_divisor > 0.0 {
            self.height / self.hitbox_center_divisor
        } else {
            self.height * 0.5
        }
    }
}
