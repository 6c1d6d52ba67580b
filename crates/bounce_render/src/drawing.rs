//! The 2D drawing context abstraction
//!
//! [`DrawingContext`] is the subset of a canvas 2D context the animation
//! needs. Backends: [`crate::CommandRecorder`] (native GPU host and tests) and
//! the web canvas (`web` feature).

use std::f64::consts::TAU;
use std::fmt;

use bounce_physics::{Bounds, Vec2};

use crate::color::Color;

/// Drawing operations of a host 2D context
pub trait DrawingContext {
    /// Clear a rectangle to transparent
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Start a new path, discarding the current one
    fn begin_path(&mut self);

    /// Add a circular arc to the current path (angles in radians)
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), DrawError>;

    /// Set the colour used by [`DrawingContext::fill`]
    fn set_fill_style(&mut self, color: Color);

    /// Fill the current path
    fn fill(&mut self);
}

/// Draw one frame of the ball: clear the whole surface, then a filled disc
///
/// Issues exactly clear, begin-path, arc, fill-style, fill.
pub fn draw_ball<C: DrawingContext + ?Sized>(
    ctx: &mut C,
    bounds: Bounds,
    center: Vec2,
    radius: f64,
    color: Color,
) -> Result<(), DrawError> {
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
    ctx.set_fill_style(color);
    ctx.fill();
    Ok(())
}

/// Error raised by a drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    /// Arc radius below zero (canvas raises `IndexSizeError`)
    NegativeRadius(f64),
    /// The host context rejected the call
    Host(String),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::NegativeRadius(r) => write!(f, "Arc radius is negative: {}", r),
            DrawError::Host(msg) => write!(f, "Drawing call failed: {}", msg),
        }
    }
}

impl std::error::Error for DrawError {}

/// Error acquiring the drawing surface or its context
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// No element with the given id
    NotFound(String),
    /// The element exists but is not a canvas
    NotACanvas(String),
    /// The surface exists but no 2D/GPU context could be obtained
    ContextUnavailable(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NotFound(id) => write!(
                f,
                "Canvas element with id '{}' not found. Check the page has <canvas id='{}'>.",
                id, id
            ),
            SurfaceError::NotACanvas(id) => write!(f, "Element with id '{}' is not a canvas", id),
            SurfaceError::ContextUnavailable(reason) if reason.is_empty() => {
                write!(f, "Could not get 2D context from canvas.")
            }
            SurfaceError::ContextUnavailable(reason) => {
                write!(f, "Could not get drawing context: {}", reason)
            }
        }
    }
}

impl std::error::Error for SurfaceError {}
