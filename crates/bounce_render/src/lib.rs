//! Drawing backends for Bounce
//!
//! ## Key Components
//!
//! - [`DrawingContext`] - The 2D context operations a frame uses
//! - [`draw_ball`] - Clear the surface and draw one filled disc
//! - [`CommandRecorder`] - Records drawing calls, reduces them to a [`FrameBatch`]
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::CirclePipeline`] - Instanced disc rendering
//! - `web::CanvasSurface` - HTML canvas backend (`web` feature, wasm32 only)

pub mod color;
pub mod commands;
pub mod context;
pub mod drawing;
pub mod pipeline;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use color::Color;
pub use commands::{CommandRecorder, DrawCommand, FilledCircle, FrameBatch};
pub use drawing::{draw_ball, DrawError, DrawingContext, SurfaceError};

// Re-export physics types used in drawing signatures
pub use bounce_physics::{Bounds, Vec2};
