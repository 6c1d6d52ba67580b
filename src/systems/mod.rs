//! Application systems
//!
//! Window, GPU and simulation concerns of the native binary, kept out of main.rs.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::WindowSystem;
