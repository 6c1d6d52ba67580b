//! Web canvas backend using web-sys 2D Canvas

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use bounce_physics::Bounds;

use crate::color::Color;
use crate::drawing::{DrawError, DrawingContext, SurfaceError};

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up the canvas with the given id and acquire its 2D context
    pub fn find(document: &Document, id: &str) -> Result<Self, SurfaceError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::NotFound(id.to_string()))?;

        let canvas: HtmlCanvasElement = element
            .dyn_into()
            .map_err(|_| SurfaceError::NotACanvas(id.to_string()))?;

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| SurfaceError::ContextUnavailable(String::new()))?;

        Ok(Self { canvas, ctx })
    }

    /// Current drawing buffer size of the canvas
    pub fn bounds(&self) -> Bounds {
        Bounds::from((self.canvas.width(), self.canvas.height()))
    }
}

impl DrawingContext for CanvasSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
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
        self.ctx
            .arc(x, y, radius, start_angle, end_angle)
            .map_err(|e| DrawError::Host(format!("{:?}", e)))
    }

    fn set_fill_style(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}
