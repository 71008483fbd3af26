//! # Camera State Management
//!
//! This module ties the first-person `Camera` to its projection and to the
//! uniform data the host uploads for the chunk shader.
//!
//! ## Core Components
//! - `Camera`: Represents the camera's position and orientation in 3D space
//! - `Projection`: Manages the camera's projection matrix
//! - `CameraUniform`: GPU representation of camera data for shaders

use cgmath::Deg;
use web_time::Duration;

use crate::application_state::input_state::InputSnapshot;

pub mod camera;

pub use camera::{Camera, CameraSettings, CameraUniform, Facing, Projection};

/// Near clipping plane distance
pub const Z_NEAR: f32 = 0.1;
/// Far clipping plane distance
pub const Z_FAR: f32 = 1000.0;

/// The camera together with everything derived from it each frame.
#[derive(Debug)]
pub struct CameraState {
    /// The current camera position and orientation
    pub camera: Camera,
    /// GPU-ready camera data, refreshed by `update`
    pub camera_uniform: CameraUniform,
    /// Perspective projection for the current viewport
    pub projection: Projection,
    /// Movement and projection settings
    pub settings: CameraSettings,
}

impl CameraState {
    /// Creates the camera at its configured start position.
    ///
    /// # Arguments
    /// * `settings` - Camera settings
    /// * `width` - Viewport width in pixels
    /// * `height` - Viewport height in pixels
    pub fn new(settings: CameraSettings, width: u32, height: u32) -> Self {
        let camera = Camera::from_settings(&settings);
        let projection = Projection::new(width, height, Deg(settings.fovy_degrees), Z_NEAR, Z_FAR);

        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj_and_pos(&camera, &projection);

        CameraState {
            camera,
            camera_uniform,
            projection,
            settings,
        }
    }

    /// Applies one frame of input.
    ///
    /// # Returns
    /// `true` if the camera moved or turned, meaning the uniform must be re-uploaded
    pub fn update(&mut self, dt: Duration, input: &InputSnapshot) -> bool {
        let next = self.camera.update(dt, input, &self.settings);
        if next == self.camera {
            return false;
        }

        self.camera = next;
        self.camera_uniform.update_view_proj_and_pos(&self.camera, &self.projection);
        true
    }

    /// Adapts the projection to a resized viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
        self.camera_uniform.update_view_proj_and_pos(&self.camera, &self.projection);
    }
}
