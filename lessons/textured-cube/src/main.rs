use std::time::Duration;

use wgpu_primer::{
    Deg, Matrix4, Rad, WindowEvent,
    camera::{Camera, MvpResources, Projection},
    context::Context,
    data_structures::{
        geometry,
        mesh::{Mesh, tex_vertices},
        texture::Texture,
        transform::{Spin, Transform},
    },
    lesson::{InitContext, Lesson, LessonConstructor, run},
    pipelines::textured::{diffuse_bind_group, diffuse_layout, mk_textured_pipeline},
    resources::load_texture,
};

/// A spinning cube sampling a brick texture across every face.
struct TexturedCube {
    pipeline: wgpu_primer::RenderPipeline,
    mesh: Mesh,
    diffuse: wgpu_primer::BindGroup,
    mvp: MvpResources,
    camera: Camera,
    projection: Projection,
    spin: Spin,
}

impl TexturedCube {
    async fn new(ctx: InitContext) -> anyhow::Result<Self> {
        let uvs = geometry::cube_uvs();
        let vertices = tex_vertices(&geometry::CUBE_POSITIONS, &uvs)?;
        let mesh = Mesh::new(&ctx.device, "Textured Cube Vertex Buffer", &vertices);

        let texture = match load_texture("brick.png", &ctx.device, &ctx.queue, Some("png")).await {
            Ok(texture) => texture,
            Err(e) => {
                log::warn!("Could not load brick.png ({}). Falling back to a checkerboard.", e);
                Texture::checkerboard(64, 64, &ctx.device, &ctx.queue)
            }
        };
        let diffuse = diffuse_bind_group(&ctx.device, &diffuse_layout(&ctx.device), &texture);

        let mut mvp = MvpResources::new(&ctx.device);
        let pipeline = mk_textured_pipeline(&ctx.device, &ctx.config, &mvp.bind_group_layout);

        let camera = Camera::new((0.0, 0.1, 2.0), Deg(-90.0), Deg(0.0));
        let projection = Projection::new(ctx.config.width, ctx.config.height, Deg(75.0), 1e-4, 1e4);
        let spin = Spin::new(Rad(1.8));

        mvp.write(&ctx.queue, mvp_matrix(&camera, &projection, &spin));

        Ok(Self {
            pipeline,
            mesh,
            diffuse,
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

impl Lesson for TexturedCube {
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
        render_pass.set_bind_group(0, &self.diffuse, &[]);
        render_pass.set_bind_group(1, &self.mvp.bind_group, &[]);
        self.mesh.draw(render_pass);
    }
}

fn main() -> anyhow::Result<()> {
    let constructor: LessonConstructor = Box::new(|ctx| {
        Box::pin(async move { Ok(Box::new(TexturedCube::new(ctx).await?) as Box<dyn Lesson>) })
    });
    run(constructor)
}
