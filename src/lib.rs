//! Bounce - a ball dropped under gravity, bouncing off the edges of its surface
//!
//! The native binary lives in `main.rs`. Building for `wasm32` with the `web`
//! feature exports a browser entry point drawing on a `<canvas>`.

pub mod config;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;
