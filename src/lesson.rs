//! The lesson runner: window, event loop and the per-frame redraw cycle.
//!
//! A "lesson" is a single self-contained rendering program. The runner owns
//! the window and GPU context and drives exactly one [`Lesson`] through this
//! cycle each frame:
//!
//! 1. Forward window events to the lesson
//! 2. Render one pass (clear color + depth clear, then the lesson's draws)
//! 3. Present, call `on_update` with the elapsed time, request the next redraw
//!
//! The redraw request at the start of every render is what keeps the loop
//! going indefinitely, equivalent to an animation callback re-scheduling
//! itself each frame.

use std::{fmt::Debug, iter, pin::Pin, sync::Arc};

use instant::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{context::Context, data_structures::texture::Texture};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Trait for implementing a self-contained rendering lesson.
///
/// # Lifecycle
///
/// 1. The constructor passed to [`run`] is awaited once the GPU context
///    exists; create buffers, pipelines and textures there.
/// 2. `on_init` is called once before the first frame. This is the place to
///    configure the context, e.g. the clear color.
/// 3. `on_window_events` is called for every winit window event.
/// 4. `on_render` is called each frame inside the active render pass.
/// 5. `on_update` is called after each presented frame with the elapsed time.
pub trait Lesson {
    /// Configure the context once after setup.
    fn on_init(&mut self, _ctx: &mut Context) {}

    /// Handle window events (keyboard, resizing, etc.).
    fn on_window_events(&mut self, _ctx: &mut Context, _event: &WindowEvent) {}

    /// Advance animation state; `dt` is the time since the previous frame.
    fn on_update(&mut self, _ctx: &Context, _dt: Duration) {}

    /// Record this lesson's draw calls.
    fn on_render<'a>(&'a self, ctx: &'a Context, render_pass: &mut wgpu::RenderPass<'a>);
}

// Dummy impl to make wasm work
impl Debug for dyn Lesson + 'static {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Lesson")
    }
}

/// Owned handles for async lesson construction.
///
/// Cloning `Device` and `Queue` only clones their internal references, so a
/// constructor can move these into its future while the runner keeps the
/// originals.
#[derive(Clone, Debug)]
pub struct InitContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
}

impl From<&Context> for InitContext {
    fn from(ctx: &Context) -> Self {
        Self {
            device: ctx.device.clone(),
            queue: ctx.queue.clone(),
            config: ctx.config.clone(),
        }
    }
}

/// Type alias for a lesson constructor (factory function).
///
/// A constructor takes an [`InitContext`] and asynchronously returns the
/// boxed lesson. This allows resource loading (e.g. texture fetches) during
/// setup on both native and wasm targets.
pub type LessonConstructor =
    Box<dyn FnOnce(InitContext) -> Pin<Box<dyn Future<Output = anyhow::Result<Box<dyn Lesson>>>>>>;

/// Application state bundle: GPU context plus surface status.
#[derive(Debug)]
pub struct AppState {
    pub(crate) ctx: Context,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>) -> Self {
        let ctx = Context::new(window).await;
        let ctx = match ctx {
            Ok(ctx) => ctx,
            Err(e) => panic!(
                "App initialization failed. Cannot create the main context: {}",
                e
            ),
        };
        Self {
            ctx,
            is_surface_configured: false,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.is_surface_configured = true;
            self.ctx
                .surface
                .configure(&self.ctx.device, &self.ctx.config);
            self.ctx.depth_texture = Texture::create_depth_texture(
                &self.ctx.device,
                [self.ctx.config.width, self.ctx.config.height],
                "depth_texture",
            );
        }
    }

    fn render(&mut self, lesson: &dyn Lesson) -> Result<(), wgpu::SurfaceError> {
        // invoke main render loop
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder: wgpu::CommandEncoder =
            self.ctx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });
        {
            let mut render_pass: wgpu::RenderPass<'_> =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(self.ctx.clear_color),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                        view: &self.ctx.depth_texture.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    }),
                    occlusion_query_set: None,
                    timestamp_writes: None,
                });

            lesson.on_render(&self.ctx, &mut render_pass);
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

pub(crate) enum LessonEvent {
    #[allow(dead_code)]
    Initialized {
        state: AppState,
        lesson: Box<dyn Lesson>,
    },
}

impl Debug for LessonEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized { state: _, lesson } => f
                .debug_struct("Initialized")
                .field("lesson", lesson)
                .finish(),
        }
    }
}

pub struct App {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    #[allow(dead_code)]
    proxy: winit::event_loop::EventLoopProxy<LessonEvent>,
    state: Option<AppState>,
    // This will hold the fully initialized lesson once it is ready.
    lesson: Option<Box<dyn Lesson>>,
    // This holds the constructor at the start.
    // We use Option to `take()` it after use.
    constructor: Option<LessonConstructor>,
    last_time: Instant,
}

impl App {
    fn new(event_loop: &EventLoop<LessonEvent>, constructor: LessonConstructor) -> Self {
        let proxy = event_loop.create_proxy();
        #[cfg(not(target_arch = "wasm32"))]
        let async_runtime = tokio::runtime::Runtime::new().unwrap();
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime,
            proxy,
            state: None,
            lesson: None,
            constructor: Some(constructor),
            last_time: Instant::now(),
        }
    }
}

impl ApplicationHandler<LessonEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes();

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            const CANVAS_ID: &str = "canvas";

            let window = wgpu::web_sys::window().unwrap_throw();
            let document = window.document().unwrap_throw();
            let canvas = document.get_element_by_id(CANVAS_ID).unwrap_throw();
            let html_canvas_element = canvas.unchecked_into();
            window_attributes = window_attributes.with_canvas(Some(html_canvas_element));
        }

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        let constructor = self.constructor.take().unwrap();

        let init_future = async move {
            let app_state = AppState::new(window).await;
            let lesson = constructor((&app_state.ctx).into()).await;
            let lesson = match lesson {
                Ok(lesson) => lesson,
                Err(e) => panic!("App initialization failed. Cannot build the lesson: {}", e),
            };
            (app_state, lesson)
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            let (mut app_state, mut lesson) = self.async_runtime.block_on(init_future);
            lesson.on_init(&mut app_state.ctx);
            self.lesson = Some(lesson);
            self.state = Some(app_state);
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (state, lesson) = init_future.await;
                assert!(
                    proxy
                        .send_event(LessonEvent::Initialized { state, lesson })
                        .is_ok()
                );
            });
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: LessonEvent) {
        match event {
            LessonEvent::Initialized { state, lesson } => {
                // This is the message from our wasm `spawn_local`
                self.state = Some(state);
                self.lesson = Some(lesson);

                // Important: Trigger a resize and redraw now that we are initialized
                let app_state = self.state.as_mut().unwrap();
                let size = app_state.ctx.window.inner_size();
                app_state.resize(size.width, size.height);
                if let Some(lesson) = &mut self.lesson {
                    lesson.on_init(&mut app_state.ctx);
                }
                app_state.ctx.window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        if let Some(lesson) = &mut self.lesson {
            lesson.on_window_events(&mut state.ctx, &event);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();

                let lesson = match &mut self.lesson {
                    Some(lesson) => lesson,
                    None => return,
                };

                match state.render(lesson.as_ref()) {
                    Ok(_) => lesson.on_update(&state.ctx, dt),
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

pub fn run(constructor: LessonConstructor) -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }

    let event_loop: EventLoop<LessonEvent> = EventLoop::with_user_event().build()?;

    let mut app = App::new(&event_loop, constructor);

    event_loop.run_app(&mut app)?;

    Ok(())
}
