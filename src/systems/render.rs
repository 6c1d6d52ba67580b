//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The command recorder frames draw into
//! - Turning recorded discs into one instanced draw

use std::sync::Arc;
use winit::window::Window;
use bounce_render::{
    context::RenderContext,
    pipeline::{clear_color, CircleInstance, CirclePipeline, ViewportUniforms},
    CommandRecorder, FrameBatch, SurfaceError,
};
use bounce_core::Bounds;
use bounce::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    circle_pipeline: CirclePipeline,
    recorder: CommandRecorder,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, SurfaceError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let circle_pipeline = CirclePipeline::new(&context.device, context.config.format);

        log::info!(
            "Surface {}x{} ({:?})",
            context.config.width,
            context.config.height,
            context.config.format
        );

        Ok(Self {
            context,
            circle_pipeline,
            recorder: CommandRecorder::new(),
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size after it was lost
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Drawing surface bounds in physical pixels
    pub fn bounds(&self) -> Bounds {
        self.context.bounds()
    }

    /// Empty recorder for the next frame to draw into
    pub fn begin_frame(&mut self) -> &mut CommandRecorder {
        self.recorder.clear();
        &mut self.recorder
    }

    /// Present whatever the last frame recorded
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        let bounds = self.bounds();
        let batch = self.recorder.batch(bounds);
        let instances = Self::instances(&batch, self.context.is_srgb());

        self.circle_pipeline.update_viewport(
            &self.context.queue,
            &ViewportUniforms::new(self.context.config.width, self.context.config.height),
        );
        self.circle_pipeline
            .upload_instances(&self.context.device, &self.context.queue, &instances);

        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.circle_pipeline.render(
            &mut encoder,
            &view,
            clear_color(self.render_config.background_color),
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn instances(batch: &FrameBatch, linear: bool) -> Vec<CircleInstance> {
        batch
            .circles
            .iter()
            .map(|c| CircleInstance::from_circle(c, linear))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_core::{Color, Vec2};
    use bounce_render::{draw_ball, DrawingContext};

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_surface_error_mapping() {
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Lost),
            RenderError::SurfaceLost
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Outdated),
            RenderError::SurfaceLost
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::OutOfMemory),
            RenderError::OutOfMemory
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Timeout),
            RenderError::Other(_)
        ));
    }

    #[test]
    fn test_recorded_frame_becomes_one_instance() {
        let bounds = Bounds::new(500.0, 300.0);
        let mut rec = CommandRecorder::new();
        draw_ball(&mut rec, bounds, Vec2::new(252.0, 152.1), 20.0, Color::RED).unwrap();

        let instances = RenderSystem::instances(&rec.batch(bounds), false);
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].center, [252.0, 152.1]);
        assert_eq!(instances[0].radius, 20.0);
        assert_eq!(instances[0].color, [1.0, 0.0, 0.0, 1.0]);

        // A fresh recorder draws nothing
        rec.clear();
        rec.begin_path();
        assert!(RenderSystem::instances(&rec.batch(bounds), false).is_empty());
    }
}
