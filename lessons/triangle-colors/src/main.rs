use wgpu_primer::{
    context::Context,
    data_structures::{
        geometry,
        mesh::{Mesh, color_vertices},
    },
    lesson::{InitContext, Lesson, LessonConstructor, run},
    pipelines::color::mk_color_pipeline,
};

/// One triangle, one primary color per vertex, interpolated in between.
struct TriangleColors {
    pipeline: wgpu_primer::RenderPipeline,
    mesh: Mesh,
}

impl TriangleColors {
    async fn new(ctx: InitContext) -> anyhow::Result<Self> {
        let vertices = color_vertices(
            &geometry::COLOR_TRIANGLE_POSITIONS,
            &geometry::COLOR_TRIANGLE_COLORS,
        )?;
        let mesh = Mesh::new(&ctx.device, "Color Triangle Vertex Buffer", &vertices);
        let pipeline = mk_color_pipeline(&ctx.device, &ctx.config);
        Ok(Self { pipeline, mesh })
    }
}

impl Lesson for TriangleColors {
    fn on_render<'a>(&'a self, _ctx: &'a Context, render_pass: &mut wgpu_primer::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        self.mesh.draw(render_pass);
    }
}

fn main() -> anyhow::Result<()> {
    let constructor: LessonConstructor = Box::new(|ctx| {
        Box::pin(
            async move { Ok(Box::new(TriangleColors::new(ctx).await?) as Box<dyn Lesson>) },
        )
    });
    run(constructor)
}
