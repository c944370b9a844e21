use std::time::Duration;

use wgpu_primer::{
    Deg, Matrix4, Vector3, WindowEvent,
    camera::{Camera, MvpResources, Projection},
    context::Context,
    data_structures::{
        geometry,
        mesh::{Mesh, color_vertices},
        transform::Transform,
    },
    lesson::{InitContext, Lesson, LessonConstructor, run},
    pipelines::color::mk_mvp_color_pipeline,
};

/// Where the camera starts and how far it sweeps sideways.
const CAMERA_BASE: [f32; 3] = [-3.0, 0.0, 1.0];
const CAMERA_SWING: f32 = 2.0;

/// A static per-face colored cube observed by a camera that sweeps left and
/// right; the view matrix is rebuilt from the camera position every frame.
struct CameraMotion {
    pipeline: wgpu_primer::RenderPipeline,
    mesh: Mesh,
    mvp: MvpResources,
    camera: Camera,
    projection: Projection,
    model: Transform,
    elapsed: f32,
}

impl CameraMotion {
    async fn new(ctx: InitContext) -> anyhow::Result<Self> {
        let colors = geometry::random_face_colors(&mut rand::thread_rng());
        let vertices = color_vertices(&geometry::CUBE_POSITIONS, &colors)?;
        let mesh = Mesh::new(&ctx.device, "Cube Vertex Buffer", &vertices);

        let mut mvp = MvpResources::new(&ctx.device);
        let pipeline = mk_mvp_color_pipeline(&ctx.device, &ctx.config, &mvp.bind_group_layout);

        let camera = Camera::new(CAMERA_BASE, Deg(-90.0), Deg(0.0));
        let projection = Projection::new(ctx.config.width, ctx.config.height, Deg(75.0), 1e-4, 1e4);
        let model = Transform::from(Vector3::new(-1.5, 0.0, -2.0));

        let mvp_matrix = projection.calc_matrix() * camera.calc_matrix() * model.to_matrix();
        mvp.write(&ctx.queue, mvp_matrix);

        Ok(Self {
            pipeline,
            mesh,
            mvp,
            camera,
            projection,
            model,
            elapsed: 0.0,
        })
    }

    fn mvp_matrix(&self) -> Matrix4<f32> {
        self.projection.calc_matrix() * self.camera.calc_matrix() * self.model.to_matrix()
    }
}

impl Lesson for CameraMotion {
    fn on_window_events(&mut self, _ctx: &mut Context, event: &WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            self.projection.resize(size.width, size.height);
        }
    }

    fn on_update(&mut self, ctx: &Context, dt: Duration) {
        self.elapsed += dt.as_secs_f32();
        self.camera.position.x = CAMERA_BASE[0] + self.elapsed.sin() * CAMERA_SWING;
        self.mvp.write(&ctx.queue, self.mvp_matrix());
    }

    fn on_render<'a>(&'a self, _ctx: &'a Context, render_pass: &mut wgpu_primer::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.mvp.bind_group, &[]);
        self.mesh.draw(render_pass);
    }
}

fn main() -> anyhow::Result<()> {
    let constructor: LessonConstructor = Box::new(|ctx| {
        Box::pin(async move { Ok(Box::new(CameraMotion::new(ctx).await?) as Box<dyn Lesson>) })
    });
    run(constructor)
}
