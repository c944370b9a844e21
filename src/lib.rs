//! wgpu-primer
//!
//! A collection of minimal, self-contained GPU rasterization lessons for
//! native and WASM targets. Every lesson binary performs the same setup
//! sequence: acquire a rendering context, upload flat vertex data to GPU
//! buffers, compile a vertex/fragment shader pair into a pipeline, bind the
//! vertex attributes, upload a model-view-projection uniform where needed,
//! and drive a single per-frame redraw loop.
//!
//! High-level modules
//! - `camera`: camera, projection and the MVP uniform resources
//! - `context`: central GPU and window context that owns device/queue/surface
//! - `data_structures`: vertex formats, lesson geometry, transforms, textures
//! - `lesson`: the `Lesson` trait and the event/redraw loop that drives it
//! - `pipelines`: the lesson shader pairs compiled into render pipelines
//! - `resources`: helpers to load texture assets from disk or over HTTP
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod lesson;
pub mod pipelines;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu::*;
pub use winit::event::{ElementState, KeyEvent, WindowEvent};
pub use winit::keyboard::{KeyCode, PhysicalKey};
