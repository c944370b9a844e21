//! Vertex formats, buffer layouts and GPU meshes.
//!
//! Lesson geometry starts out as flat `f32` component arrays (three
//! components per position or color, two per UV). The builders here zip
//! those arrays into typed vertex structs; the resulting vertex count is
//! always the flattened position length divided by its stride.

use anyhow::{Result, bail};
use wgpu::util::DeviceExt;

/// Components per position/color entry in a flat array.
pub const POSITION_COMPONENTS: usize = 3;
/// Components per UV entry in a flat array.
pub const UV_COMPONENTS: usize = 2;

/// Describes how a vertex type is laid out in a GPU buffer.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// A bare clip-space position, for shaders with a constant output color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlainVertex {
    pub position: [f32; 3],
}

impl Vertex for PlainVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<PlainVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                // corresponds to the @location in the shader file.
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}

/// Position plus an RGB color interpolated across the primitive.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex for ColorVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Position plus a UV coordinate into a sampled texture.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex for TexVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<TexVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Split a flat position array (stride 3) into typed vertices.
pub fn plain_vertices(positions: &[f32]) -> Result<Vec<PlainVertex>> {
    if positions.is_empty() {
        bail!("no vertex data");
    }
    if positions.len() % POSITION_COMPONENTS != 0 {
        bail!(
            "position array length {} is not a multiple of {}",
            positions.len(),
            POSITION_COMPONENTS
        );
    }
    Ok(positions
        .chunks_exact(POSITION_COMPONENTS)
        .map(|p| PlainVertex {
            position: [p[0], p[1], p[2]],
        })
        .collect())
}

/// Zip flat position and color arrays (both stride 3) into typed vertices.
pub fn color_vertices(positions: &[f32], colors: &[f32]) -> Result<Vec<ColorVertex>> {
    let plain = plain_vertices(positions)?;
    if colors.len() % POSITION_COMPONENTS != 0 {
        bail!(
            "color array length {} is not a multiple of {}",
            colors.len(),
            POSITION_COMPONENTS
        );
    }
    if colors.len() / POSITION_COMPONENTS != plain.len() {
        bail!(
            "{} positions but {} colors",
            plain.len(),
            colors.len() / POSITION_COMPONENTS
        );
    }
    Ok(plain
        .into_iter()
        .zip(colors.chunks_exact(POSITION_COMPONENTS))
        .map(|(v, c)| ColorVertex {
            position: v.position,
            color: [c[0], c[1], c[2]],
        })
        .collect())
}

/// Zip flat position (stride 3) and UV (stride 2) arrays into typed vertices.
pub fn tex_vertices(positions: &[f32], uvs: &[f32]) -> Result<Vec<TexVertex>> {
    let plain = plain_vertices(positions)?;
    if uvs.len() % UV_COMPONENTS != 0 {
        bail!(
            "uv array length {} is not a multiple of {}",
            uvs.len(),
            UV_COMPONENTS
        );
    }
    if uvs.len() / UV_COMPONENTS != plain.len() {
        bail!(
            "{} positions but {} uv pairs",
            plain.len(),
            uvs.len() / UV_COMPONENTS
        );
    }
    Ok(plain
        .into_iter()
        .zip(uvs.chunks_exact(UV_COMPONENTS))
        .map(|(v, uv)| TexVertex {
            position: v.position,
            uv: [uv[0], uv[1]],
        })
        .collect())
}

/// A vertex buffer plus the draw-call vertex count derived from it.
#[derive(Debug)]
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl Mesh {
    pub fn new<V: Vertex + bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        vertices: &[V],
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    /// Bind the vertex buffer at slot 0 and issue the draw call.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.vertex_count == 0 {
            log::warn!("you attempted to draw a mesh with zero vertices");
            return;
        }
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_is_flat_length_over_stride() {
        let positions = [0.0, 1.0, 0.0, 1.0, -1.0, 0.0, -1.0, -1.0, 0.0];
        let vertices = plain_vertices(&positions).unwrap();
        assert_eq!(vertices.len(), positions.len() / POSITION_COMPONENTS);
        assert_eq!(vertices.len(), 3);
    }

    #[test]
    fn ragged_position_array_is_rejected() {
        let err = plain_vertices(&[0.0, 1.0]).unwrap_err();
        assert!(err.to_string().contains("not a multiple"));
    }

    #[test]
    fn empty_position_array_is_rejected() {
        assert!(plain_vertices(&[]).is_err());
    }

    #[test]
    fn colors_are_zipped_per_vertex() {
        let positions = [0.0, 1.0, 0.0, 1.0, -1.0, 0.0, -1.0, -1.0, 0.0];
        let colors = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let vertices = color_vertices(&positions, &colors).unwrap();
        assert_eq!(vertices[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].color, [0.0, 1.0, 0.0]);
        assert_eq!(vertices[2].color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn color_count_mismatch_is_rejected() {
        let positions = [0.0, 1.0, 0.0, 1.0, -1.0, 0.0, -1.0, -1.0, 0.0];
        let err = color_vertices(&positions, &[1.0, 0.0, 0.0]).unwrap_err();
        assert!(err.to_string().contains("3 positions but 1 colors"));
    }

    #[test]
    fn uv_count_mismatch_is_rejected() {
        let positions = [0.0, 1.0, 0.0, 1.0, -1.0, 0.0, -1.0, -1.0, 0.0];
        assert!(tex_vertices(&positions, &[0.0, 0.0]).is_err());
    }

    #[test]
    fn uvs_are_zipped_with_stride_two() {
        let positions = [0.0, 1.0, 0.0, 1.0, -1.0, 0.0];
        let uvs = [0.0, 1.0, 1.0, 0.0];
        let vertices = tex_vertices(&positions, &uvs).unwrap();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[1].uv, [1.0, 0.0]);
    }
}
