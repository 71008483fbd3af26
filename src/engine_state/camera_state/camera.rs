//! # Camera Implementation
//!
//! This module contains the first-person camera used to inspect meshed chunks:
//! - Camera representation and the per-frame update step
//! - Projection matrix handling
//! - GPU uniform buffer data
//!
//! ## Key Components
//! - `Camera`: Position and orientation in 3D space
//! - `CameraSettings`: Movement speed, mouse sensitivity and projection settings
//! - `Projection`: Perspective projection in WebGPU's depth range
//! - `CameraUniform`: Packed data structure for GPU shaders

use std::{f32::consts::PI, fmt};

use cgmath::*;
use serde::{Deserialize, Serialize};
use web_time::Duration;
use winit::keyboard::KeyCode;

use crate::application_state::input_state::InputSnapshot;

/// Transformation matrix to convert from OpenGL's coordinate system to WGPU's.
///
/// Maps clip-space Z from [-1, 1] to [0, 1].
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Pitch limit; looking straight up or down would make the view matrix degenerate
pub const PITCH_LIMIT: f32 = PI / 2.0 - 0.01;

/// Tunable camera parameters, loaded from the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Movement speed in blocks per second
    pub move_speed: f32,
    /// Radians of rotation per unit of mouse movement
    pub sensitivity: f32,
    /// Vertical field of view in degrees
    pub fovy_degrees: f32,
    /// Where the camera starts
    pub start_position: [f32; 3],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            sensitivity: 0.003,
            fovy_degrees: 75.0,
            start_position: [0.0, 6.0, -6.0],
        }
    }
}

/// Represents a first-person camera in 3D space.
///
/// Yaw rotates around +Y; yaw zero looks down +Z. Pitch tilts the view up for
/// positive values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// The camera's position in world space
    pub position: Point3<f32>,
    /// Horizontal rotation (around Y axis), kept in [-PI, PI]
    pub yaw: Rad<f32>,
    /// Vertical rotation, kept in [-PITCH_LIMIT, PITCH_LIMIT]
    pub pitch: Rad<f32>,
}

impl Camera {
    /// Creates a new camera with the specified position and orientation.
    ///
    /// # Arguments
    /// * `position` - Initial position of the camera in world space
    /// * `yaw` - Initial yaw (horizontal rotation around Y axis)
    /// * `pitch` - Initial pitch (vertical rotation)
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    /// Creates a level camera at the configured start position, looking down +Z.
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::new(settings.start_position, Rad(0.0_f32), Rad(0.0_f32))
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.0.sin_cos();
        Vector3::new(pitch_cos * yaw_sin, pitch_sin, pitch_cos * yaw_cos)
    }

    /// Horizontal vector perpendicular to `forward`, used for strafing.
    pub fn right(&self) -> Vector3<f32> {
        let forward = self.forward();
        Vector3::new(-forward.z, 0.0, forward.x)
    }

    /// Advances the camera by one frame and returns the new state.
    ///
    /// Mouse movement turns the camera (moving right or down decreases yaw or
    /// pitch). W/S move along `forward`, D/A along `right`. The combined
    /// movement is normalized, so diagonal movement is not faster.
    ///
    /// # Arguments
    /// * `dt` - Time elapsed since the last update
    /// * `input` - Input collected during the frame
    /// * `settings` - Movement speed and mouse sensitivity
    pub fn update(&self, dt: Duration, input: &InputSnapshot, settings: &CameraSettings) -> Camera {
        let (delta_x, delta_y) = input.get_mouse_delta();

        let mut yaw = self.yaw.0 - delta_x as f32 * settings.sensitivity;
        let pitch = (self.pitch.0 - delta_y as f32 * settings.sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        if yaw > PI {
            yaw -= 2.0 * PI;
        } else if yaw < -PI {
            yaw += 2.0 * PI;
        }

        let mut next = Camera::new(self.position, Rad(yaw), Rad(pitch));
        let forward = next.forward();
        let right = next.right();

        let mut movement = Vector3::zero();
        if input.is_key_active(KeyCode::KeyW) {
            movement += forward;
        }
        if input.is_key_active(KeyCode::KeyS) {
            movement -= forward;
        }
        if input.is_key_active(KeyCode::KeyD) {
            movement += right;
        }
        if input.is_key_active(KeyCode::KeyA) {
            movement -= right;
        }

        if movement.magnitude2() > 0.0 {
            next.position += movement.normalize() * settings.move_speed * dt.as_secs_f32();
        }

        next
    }

    /// Calculates the view matrix for this camera.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.forward(), Vector3::unit_y())
    }

    /// Summarizes which way the camera is looking.
    pub fn facing(&self) -> Facing {
        let yaw_degrees = Deg::from(self.yaw).0;
        let pitch_degrees = Deg::from(self.pitch).0;

        let horizontal = if (-45.0..45.0).contains(&yaw_degrees) {
            "+Z"
        } else if (45.0..135.0).contains(&yaw_degrees) {
            "+X"
        } else if (-135.0..-45.0).contains(&yaw_degrees) {
            "-X"
        } else {
            "-Z"
        };
        let vertical = if pitch_degrees > 30.0 {
            "+Y"
        } else if pitch_degrees < -30.0 {
            "-Y"
        } else {
            "0Y"
        };

        Facing {
            horizontal,
            vertical,
            yaw_degrees,
            pitch_degrees,
        }
    }
}

/// Coarse view direction, for debug output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facing {
    /// Dominant horizontal axis: `+Z`, `+X`, `-X` or `-Z`
    pub horizontal: &'static str,
    /// `+Y` above 30 degrees of pitch, `-Y` below -30, `0Y` otherwise
    pub vertical: &'static str,
    /// Yaw in degrees
    pub yaw_degrees: f32,
    /// Pitch in degrees
    pub pitch_degrees: f32,
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (yaw {:.1}, pitch {:.1})",
            self.horizontal, self.vertical, self.yaw_degrees, self.pitch_degrees
        )
    }
}

/// Represents a camera's projection matrix and related parameters.
#[derive(Debug)]
pub struct Projection {
    /// Aspect ratio (width / height)
    aspect: f32,
    /// Vertical field of view in radians
    fovy: Rad<f32>,
    /// Near clipping plane distance
    znear: f32,
    /// Far clipping plane distance
    zfar: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `width` - Viewport width in pixels
    /// * `height` - Viewport height in pixels
    /// * `fovy` - Vertical field of view (can be any type convertible to `Rad<f32>`)
    /// * `znear` - Near clipping plane distance
    /// * `zfar` - Far clipping plane distance
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    /// Updates the projection's aspect ratio for viewport resizing.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Calculates the projection matrix, including the OpenGL to WGPU transform.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// GPU-friendly representation of camera data for shaders.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    // cgmath types are not Pod, so the matrix is stored as plain arrays
    view_proj: [[f32; 4]; 4],
    position: [f32; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Creates a new camera uniform with an identity matrix and zero position.
    pub fn new() -> Self {
        Self {
            view_proj: cgmath::Matrix4::identity().into(),
            position: [0.0, 0.0, 0.0, 0.0],
        }
    }

    /// Updates the view-projection matrix and position from `camera`.
    pub fn update_view_proj_and_pos(&mut self, camera: &Camera, projection: &Projection) {
        self.view_proj = (projection.calc_matrix() * camera.view_matrix()).into();
        let pos3: [f32; 3] = camera.position.into();
        self.position = [pos3[0], pos3[1], pos3[2], 1.0];
    }

    /// The combined view-projection matrix.
    pub fn view_proj(&self) -> [[f32; 4]; 4] {
        self.view_proj
    }
}
