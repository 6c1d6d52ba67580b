//! Rendering pipeline components
//!
//! This module contains the instanced circle pipeline used by the native
//! window host.

pub mod types;
pub mod circle_pipeline;

// Re-export types
pub use types::{encode_color, CircleInstance, ViewportUniforms};

// Re-export pipelines
pub use circle_pipeline::{clear_color, CirclePipeline, QUAD_VERTEX_COUNT};
