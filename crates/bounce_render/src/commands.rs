//! Recorded drawing commands
//!
//! [`CommandRecorder`] implements [`DrawingContext`] by storing every call.
//! The GPU host reduces a recording to a [`FrameBatch`] of filled discs.

use std::f64::consts::TAU;

use bounce_physics::{Bounds, Vec2};

use crate::color::Color;
use crate::drawing::{DrawError, DrawingContext};

/// A single recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
    SetFillStyle(Color),
    Fill,
}

/// A filled disc ready for the GPU
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilledCircle {
    pub center: Vec2,
    pub radius: f64,
    pub color: Color,
}

/// What a recording draws after its last full-surface clear
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameBatch {
    /// Whether the recording cleared the whole surface
    pub cleared: bool,
    /// Discs in draw order
    pub circles: Vec<FilledCircle>,
}

/// Drawing context that records calls instead of rasterizing
#[derive(Clone, Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Reduce the recording to the discs visible on a surface of `bounds`
    ///
    /// Follows canvas path semantics: `begin_path` resets the path, `fill`
    /// paints every arc in the current path with the current fill style. Only
    /// full-circle arcs are supported; partial clears and partial arcs are
    /// skipped.
    pub fn batch(&self, bounds: Bounds) -> FrameBatch {
        let mut batch = FrameBatch::default();
        let mut fill = Color::default();
        let mut path: Vec<(Vec2, f64)> = Vec::new();

        for command in &self.commands {
            match *command {
                DrawCommand::ClearRect { x, y, width, height } => {
                    if x <= 0.0 && y <= 0.0 && x + width >= bounds.width && y + height >= bounds.height {
                        batch.cleared = true;
                        batch.circles.clear();
                    } else {
                        log::debug!("Skipping partial clear ({}, {}, {}, {})", x, y, width, height);
                    }
                }
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::Arc { x, y, radius, start_angle, end_angle } => {
                    if (end_angle - start_angle).abs() >= TAU - 1e-9 {
                        path.push((Vec2::new(x, y), radius));
                    } else {
                        log::debug!("Skipping partial arc {}..{}", start_angle, end_angle);
                    }
                }
                DrawCommand::SetFillStyle(color) => fill = color,
                DrawCommand::Fill => {
                    batch.circles.extend(path.iter().map(|&(center, radius)| FilledCircle {
                        center,
                        radius,
                        color: fill,
                    }));
                }
            }
        }

        batch
    }
}

impl DrawingContext for CommandRecorder {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), DrawError> {
        if radius < 0.0 {
            return Err(DrawError::NegativeRadius(radius));
        }
        self.commands.push(DrawCommand::Arc { x, y, radius, start_angle, end_angle });
        Ok(())
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillStyle(color));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
}
