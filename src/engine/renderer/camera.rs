// Third-person orbit camera driven by mouse motion and scroll

use glam::{Mat4, Vec3};

use crate::core::math::{clamp, direction_from_yaw_pitch, normalize_or};

/// Static camera tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Initial yaw in degrees
    pub yaw: f32,
    /// Initial pitch in degrees (slightly looking down)
    pub pitch: f32,
    /// Initial orbit distance
    pub distance: f32,
    /// Vertical offset added to the camera eye
    pub height: f32,
    /// Vertical offset of the look target above the character's head
    pub look_offset: f32,
    /// Degrees per pixel of mouse motion
    pub sensitivity: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Distance change per scroll unit
    pub zoom_step: f32,
}

pub const DEFAULT_CAMERA: CameraConfig = CameraConfig {
    yaw: 0.0,
    pitch: -5.0,
    distance: 3.0,
    height: 0.35,
    look_offset: 0.6,
    sensitivity: 0.1,
    min_pitch: -60.0,
    max_pitch: 35.0,
    min_distance: 1.6,
    max_distance: 6.0,
    zoom_step: 0.5,
};

impl Default for CameraConfig {
    fn default() -> Self {
        DEFAULT_CAMERA
    }
}

/// Derived eye position and view matrix for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
    pub view: Mat4,
}

/// Orbit camera state.
///
/// Invariant: `pitch` stays within `[min_pitch, max_pitch]` and `distance`
/// within `[min_distance, max_distance]` whatever events arrive.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    config: CameraConfig,
    yaw: f32,
    pitch: f32,
    distance: f32,
    /// Set once the first motion event after startup or a focus change has
    /// been swallowed
    motion_seeded: bool,
}

impl OrbitCamera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            yaw: config.yaw,
            pitch: clamp(config.pitch, config.min_pitch, config.max_pitch),
            distance: clamp(config.distance, config.min_distance, config.max_distance),
            motion_seeded: false,
            config,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Handle a raw mouse motion delta in device units.
    ///
    /// The first event after startup (or after `reset_cursor`) only seeds the
    /// baseline so the camera does not jump when the cursor is grabbed.
    pub fn on_mouse_delta(&mut self, dx: f64, dy: f64) {
        if !self.motion_seeded {
            self.motion_seeded = true;
            return;
        }
        // Device y grows downward; moving the mouse up pitches up
        self.rotate(dx as f32, -dy as f32);
    }

    /// Make the next motion event seed again (e.g. after a focus change)
    pub fn reset_cursor(&mut self) {
        self.motion_seeded = false;
    }

    /// Apply a raw mouse delta in pixels. Yaw is inverted, pitch is direct.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let sens = self.config.sensitivity;
        self.yaw -= dx * sens;
        self.pitch = clamp(
            self.pitch + dy * sens,
            self.config.min_pitch,
            self.config.max_pitch,
        );
    }

    /// Apply a scroll delta; scrolling forward (positive) moves closer
    pub fn on_scroll(&mut self, delta: f32) {
        self.distance = clamp(
            self.distance - delta * self.config.zoom_step,
            self.config.min_distance,
            self.config.max_distance,
        );
    }

    /// Full look direction including pitch
    pub fn direction(&self) -> Vec3 {
        direction_from_yaw_pitch(self.yaw, self.pitch)
    }

    /// Camera forward projected onto the ground plane; falls back to +Z when
    /// the projection degenerates
    pub fn planar_forward(&self) -> Vec3 {
        let mut forward = self.direction();
        forward.y = 0.0;
        normalize_or(forward, Vec3::Z)
    }

    /// Camera right on the ground plane (`forward x up`)
    pub fn planar_right(&self) -> Vec3 {
        normalize_or(self.planar_forward().cross(Vec3::Y), Vec3::NEG_X)
    }

    /// Derive the eye position and view matrix around a character standing at
    /// `position` with head height `head_height`
    pub fn view(&self, position: Vec3, head_height: f32) -> CameraView {
        let target = position + Vec3::Y * (head_height + self.config.look_offset);
        let eye = target - self.direction() * self.distance + Vec3::Y * self.config.height;
        CameraView {
            eye,
            target,
            view: Mat4::look_at_rh(eye, target, Vec3::Y),
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
