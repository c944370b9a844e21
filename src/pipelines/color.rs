use crate::{
    data_structures::{
        mesh::{ColorVertex, Vertex},
        texture::Texture,
    },
    pipelines::mk_render_pipeline,
};

/// Pipeline for the vertex-attribute lesson: per-vertex colors interpolated
/// across the triangle, positions used as clip space directly.
pub fn mk_color_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Color Pipeline Layout"),
        bind_group_layouts: &[],
        push_constant_ranges: &[],
    });

    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Color Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("color.wgsl").into()),
    };

    mk_render_pipeline(
        device,
        &layout,
        config.format,
        Some(wgpu::BlendState {
            alpha: wgpu::BlendComponent::REPLACE,
            color: wgpu::BlendComponent::REPLACE,
        }),
        Some(Texture::DEPTH_FORMAT),
        &[ColorVertex::desc()],
        shader,
    )
}

/// Pipeline for the cube lessons: per-vertex colors behind an MVP uniform at
/// group 0.
pub fn mk_mvp_color_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    mvp_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Mvp Color Pipeline Layout"),
        bind_group_layouts: &[mvp_bind_group_layout],
        push_constant_ranges: &[],
    });

    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Mvp Color Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("mvp_color.wgsl").into()),
    };

    mk_render_pipeline(
        device,
        &layout,
        config.format,
        Some(wgpu::BlendState {
            alpha: wgpu::BlendComponent::REPLACE,
            color: wgpu::BlendComponent::REPLACE,
        }),
        Some(Texture::DEPTH_FORMAT),
        &[ColorVertex::desc()],
        shader,
    )
}
