use wgpu_primer::{
    context::Context,
    data_structures::{
        geometry,
        mesh::{Mesh, plain_vertices},
    },
    lesson::{InitContext, Lesson, LessonConstructor, run},
    pipelines::flat::mk_flat_pipeline,
};

/// The first lesson: one triangle, straight in clip space, no transform.
struct HelloTriangle {
    pipeline: wgpu_primer::RenderPipeline,
    mesh: Mesh,
}

impl HelloTriangle {
    async fn new(ctx: InitContext) -> anyhow::Result<Self> {
        let vertices = plain_vertices(&geometry::TRIANGLE_POSITIONS)?;
        let mesh = Mesh::new(&ctx.device, "Triangle Vertex Buffer", &vertices);
        let pipeline = mk_flat_pipeline(&ctx.device, &ctx.config);
        Ok(Self { pipeline, mesh })
    }
}

impl Lesson for HelloTriangle {
    fn on_init(&mut self, ctx: &mut Context) {
        ctx.clear_color = wgpu_primer::Color::TRANSPARENT;
    }

    fn on_render<'a>(&'a self, _ctx: &'a Context, render_pass: &mut wgpu_primer::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        self.mesh.draw(render_pass);
    }
}

fn main() -> anyhow::Result<()> {
    let constructor: LessonConstructor = Box::new(|ctx| {
        Box::pin(
            async move { Ok(Box::new(HelloTriangle::new(ctx).await?) as Box<dyn Lesson>) },
        )
    });
    run(constructor)
}
