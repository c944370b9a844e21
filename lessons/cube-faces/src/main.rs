use std::time::Duration;

use wgpu_primer::{
    Deg, Matrix4, Rad, WindowEvent,
    camera::{Camera, MvpResources, Projection},
    context::Context,
    data_structures::{
        geometry,
        mesh::{Mesh, color_vertices},
        transform::{Spin, Transform},
    },
    lesson::{InitContext, Lesson, LessonConstructor, run},
    pipelines::color::mk_mvp_color_pipeline,
};

/// A cube with a random solid color per face, spinning around the y axis.
struct CubeFaces {
    pipeline: wgpu_primer::RenderPipeline,
    mesh: Mesh,
    mvp: MvpResources,
    camera: Camera,
    projection: Projection,
    spin: Spin,
}

impl CubeFaces {
    async fn new(ctx: InitContext) -> anyhow::Result<Self> {
        let colors = geometry::random_face_colors(&mut rand::thread_rng());
        let vertices = color_vertices(&geometry::CUBE_POSITIONS, &colors)?;
        let mesh = Mesh::new(&ctx.device, "Cube Vertex Buffer", &vertices);

        let mut mvp = MvpResources::new(&ctx.device);
        let pipeline = mk_mvp_color_pipeline(&ctx.device, &ctx.config, &mvp.bind_group_layout);

        // Slightly above the origin, two units back, looking down -z.
        let camera = Camera::new((0.0, 0.1, 2.0), Deg(-90.0), Deg(0.0));
        let projection = Projection::new(ctx.config.width, ctx.config.height, Deg(75.0), 1e-4, 1e4);
        let spin = Spin::new(Rad(1.8));

        mvp.write(
            &ctx.queue,
            mvp_matrix(&camera, &projection, &spin),
        );

        Ok(Self {
            pipeline,
            mesh,
            mvp,
            camera,
            projection,
            spin,
        })
    }
}

fn mvp_matrix(camera: &Camera, projection: &Projection, spin: &Spin) -> Matrix4<f32> {
    let model = Transform {
        rotation: spin.quaternion(),
        ..Default::default()
    };
    projection.calc_matrix() * camera.calc_matrix() * model.to_matrix()
}

impl Lesson for CubeFaces {
    fn on_window_events(&mut self, _ctx: &mut Context, event: &WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            self.projection.resize(size.width, size.height);
        }
    }

    fn on_update(&mut self, ctx: &Context, dt: Duration) {
        self.spin.advance(dt);
        self.mvp.write(
            &ctx.queue,
            mvp_matrix(&self.camera, &self.projection, &self.spin),
        );
    }

    fn on_render<'a>(&'a self, _ctx: &'a Context, render_pass: &mut wgpu_primer::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.mvp.bind_group, &[]);
        self.mesh.draw(render_pass);
    }
}

fn main() -> anyhow::Result<()> {
    let constructor: LessonConstructor = Box::new(|ctx| {
        Box::pin(async move { Ok(Box::new(CubeFaces::new(ctx).await?) as Box<dyn Lesson>) })
    });
    run(constructor)
}
