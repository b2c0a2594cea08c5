// Rendering seam
//
// Drawing itself (skinned meshes, shaders, textures) belongs to an external
// renderer. This module defines what the controller hands over each frame:
// a `FrameSnapshot` of plain data and a `Renderer` trait with the three draw
// calls the scene needs.

mod camera;

pub use camera::{CameraConfig, OrbitCamera};

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use log::trace;

use crate::engine::physics::Aabb;

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        let mut projection = Self {
            fov_y: 50.0,
            aspect: 1.0,
            near: 0.1,
            far: 300.0,
        };
        projection.resize(width, height);
        projection
    }

    /// Update the aspect ratio; a zero-sized (minimized) window keeps the
    /// previous ratio
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Everything a renderer reads for one frame, copied out of the game state
/// after the tick so drawing never sees a half-updated character or camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
    /// Character model transform (translation * yaw rotation)
    pub model: Mat4,
    pub hitbox: Aabb,
    pub hitbox_visible: bool,
}

/// Camera uniform block laid out for upload to a GPU buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position; w is padding
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub fn new(frame: &FrameSnapshot) -> Self {
        Self {
            view_proj: (frame.projection * frame.view).to_cols_array_2d(),
            eye: frame.eye.extend(1.0).to_array(),
        }
    }
}

/// Draw calls the scene needs. Pure output: nothing flows back into the
/// simulation.
pub trait Renderer {
    /// Receive the frame's camera block before any draw call
    fn upload_camera(&mut self, uniform: &CameraUniform);

    fn draw_ground(&mut self, view: &Mat4, projection: &Mat4);

    fn draw_hitbox(
        &mut self,
        center: Vec3,
        half_extents: Vec3,
        view: &Mat4,
        projection: &Mat4,
        visible: bool,
    );

    fn draw_character(&mut self, model: &Mat4, view: &Mat4, projection: &Mat4, bones: &[Mat4]);
}

/// Upload the camera block, then issue the draw calls in order: ground,
/// hitbox, character
pub fn draw_frame<R: Renderer + ?Sized>(renderer: &mut R, frame: &FrameSnapshot, bones: &[Mat4]) {
    renderer.upload_camera(&CameraUniform::new(frame));
    renderer.draw_ground(&frame.view, &frame.projection);
    renderer.draw_hitbox(
        frame.hitbox.center,
        frame.hitbox.half_extents,
        &frame.view,
        &frame.projection,
        frame.hitbox_visible,
    );
    renderer.draw_character(&frame.model, &frame.view, &frame.projection, bones);
}

/// Renderer that only logs what it would draw
#[derive(Debug, Default)]
pub struct TraceRenderer {
    frames: u64,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of character draws issued so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for TraceRenderer {
    fn upload_camera(&mut self, uniform: &CameraUniform) {
        trace!(
            "upload camera uniform ({} bytes, eye {:?})",
            bytemuck::bytes_of(uniform).len(),
            &uniform.eye[..3]
        );
    }

    fn draw_ground(&mut self, view: &Mat4, _projection: &Mat4) {
        trace!("draw ground (view translation {:?})", view.w_axis.truncate());
    }

    fn draw_hitbox(
        &mut self,
        center: Vec3,
        half_extents: Vec3,
        _view: &Mat4,
        _projection: &Mat4,
        visible: bool,
    ) {
        if visible {
            trace!("draw hitbox at {:?} half extents {:?}", center, half_extents);
        }
    }

    fn draw_character(&mut self, model: &Mat4, _view: &Mat4, _projection: &Mat4, bones: &[Mat4]) {
        self.frames += 1;
        trace!(
            "draw character at {:?} with {} bones",
            model.w_axis.truncate(),
            bones.len()
        );
    }
}
