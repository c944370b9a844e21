//! Camera types and uniforms for view/projection.
//!
//! The original lessons build a camera transform and apply its inverse to the
//! world; [`Camera::calc_matrix`] produces that inverse directly. A lesson
//! composes `projection * view * model` on the CPU each frame and uploads the
//! result through [`MvpResources`].

use cgmath::{InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3};
use wgpu::util::DeviceExt;

/// cgmath produces clip-space z in [-1, 1] (the GL convention); wgpu expects
/// [0, 1]. Applied as the left-most factor of every projection matrix.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// A free camera described by its position and view angles.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: Rad<f32>,
    pub pitch: Rad<f32>,
}

impl Camera {
    /// `yaw` of -90 degrees looks down the negative z axis.
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

    /// The view matrix: the inverse of the camera's own transform.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();

        Matrix4::look_to_rh(
            self.position,
            Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize(),
            Vector3::unit_y(),
        )
    }
}

/// Perspective projection onto the surface's aspect ratio.
#[derive(Clone, Debug)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// The raw matrix as it is stored in the uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MvpUniform {
    matrix: [[f32; 4]; 4],
}

impl MvpUniform {
    pub fn new() -> Self {
        Self {
            matrix: Matrix4::identity().into(),
        }
    }

    pub fn set(&mut self, mvp: Matrix4<f32>) {
        self.matrix = mvp.into();
    }
}

impl Default for MvpUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Bind group layout for the single `matrix` uniform the lesson shaders use.
pub fn mvp_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("mvp_bind_group_layout"),
    })
}

/// GPU-side bundle for the MVP uniform: staging value, buffer and bind group.
#[derive(Debug)]
pub struct MvpResources {
    pub uniform: MvpUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl MvpResources {
    pub fn new(device: &wgpu::Device) -> Self {
        let uniform = MvpUniform::new();

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mvp Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = mvp_layout(device);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("mvp_bind_group"),
        });

        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Upload a freshly composed model-view-projection matrix.
    pub fn write(&mut self, queue: &wgpu::Queue, mvp: Matrix4<f32>) {
        self.uniform.set(mvp);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Vector4};

    #[test]
    fn default_uniform_is_identity() {
        let uniform = MvpUniform::new();
        let identity: [[f32; 4]; 4] = Matrix4::<f32>::identity().into();
        assert_eq!(uniform.matrix, identity);
    }

    #[test]
    fn set_replaces_the_stored_matrix() {
        let mut uniform = MvpUniform::new();
        uniform.set(Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0)));
        let identity: [[f32; 4]; 4] = Matrix4::<f32>::identity().into();
        assert_ne!(uniform.matrix, identity);
        assert_eq!(uniform.matrix[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn camera_with_negative_yaw_looks_down_negative_z() {
        let camera = Camera::new((0.0, 0.0, 0.0), Deg(-90.0), Deg(0.0));
        let view = camera.calc_matrix();
        // A point ahead of the camera ends up in front (negative z in view space).
        let p = view * Vector4::new(0.0, 0.0, -1.0, 1.0);
        assert!(p.z < 0.0);
        // A point behind it ends up with positive z.
        let q = view * Vector4::new(0.0, 0.0, 1.0, 1.0);
        assert!(q.z > 0.0);
    }

    #[test]
    fn projection_maps_visible_depth_into_unit_range() {
        let projection = Projection::new(800, 600, Deg(75.0), 0.1, 100.0);
        let clip = projection.calc_matrix() * Vector4::new(0.0, 0.0, -5.0, 1.0);
        let ndc_z = clip.z / clip.w;
        assert!(clip.w > 0.0);
        assert!((0.0..=1.0).contains(&ndc_z), "ndc z was {ndc_z}");
    }

    #[test]
    fn resize_changes_the_aspect_ratio() {
        let mut projection = Projection::new(800, 600, Deg(75.0), 0.1, 100.0);
        let before = projection.calc_matrix();
        projection.resize(600, 800);
        assert_ne!(before, projection.calc_matrix());
    }
}
