//! Lesson data structures: vertices, geometry, transforms and textures.
//!
//! This module contains the data types the lessons feed into the pipeline:
//!
//! - `mesh` contains the vertex formats, their buffer layouts and GPU meshes
//! - `geometry` contains the lessons' flat vertex/color/UV component arrays
//! - `transform` holds model transforms and per-frame animation state
//! - `texture` contains the GPU texture wrapper and creation utilities

pub mod geometry;
pub mod mesh;
pub mod texture;
pub mod transform;
