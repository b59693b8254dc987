//! Camera for the Pong field
//!
//! Fixed 2D orthographic camera centred on the origin

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Orthographic camera showing x in [-half_width, half_width] and
    /// y in [-half_height, half_height]
    pub fn orthographic(half_width: f32, half_height: f32) -> Self {
        let view = Mat4::IDENTITY;
        let projection =
            Mat4::orthographic_rh(-half_width, half_width, -half_height, half_height, -1.0, 1.0);

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
        }
    }
}
