//! GPU-compatible data types for the circle pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

use crate::color::Color;
use crate::commands::FilledCircle;

/// One filled disc, drawn as an instanced quad
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    /// Centre in surface pixels (y down)
    pub center: [f32; 2],
    /// Radius in surface pixels
    pub radius: f32,
    /// Padding to align color to 16 bytes
    pub _padding: f32,
    /// RGBA colour, already in the target's colour space
    pub color: [f32; 4],
}

impl CircleInstance {
    /// Convert a recorded disc, encoding the colour for the target
    pub fn from_circle(circle: &FilledCircle, linear: bool) -> Self {
        Self {
            center: circle.center.to_f32_array(),
            radius: circle.radius as f32,
            _padding: 0.0,
            color: encode_color(circle.color, linear),
        }
    }
}

/// Viewport uniforms: surface size used to map pixels to clip space
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewportUniforms {
    /// Surface width and height in pixels
    pub size: [f32; 2],
    /// Padding to 16 bytes
    pub _padding: [f32; 2],
}

impl ViewportUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width.max(1) as f32, height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ViewportUniforms {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Colour components for a target that is (`linear = true`) or is not sRGB
pub fn encode_color(color: Color, linear: bool) -> [f32; 4] {
    if linear {
        color.to_linear()
    } else {
        color.to_unorm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_physics::Vec2;

    #[test]
    fn test_circle_instance_size() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
    }

    #[test]
    fn test_viewport_uniforms_size() {
        assert_eq!(std::mem::size_of::<ViewportUniforms>(), 16);
    }

    #[test]
    fn test_viewport_never_zero() {
        let v = ViewportUniforms::new(0, 0);
        assert_eq!(v.size, [1.0, 1.0]);
    }

    #[test]
    fn test_from_circle() {
        let circle = FilledCircle { center: Vec2::new(252.0, 152.5), radius: 20.0, color: Color::RED };
        let instance = CircleInstance::from_circle(&circle, false);
        assert_eq!(instance.center, [252.0, 152.5]);
        assert_eq!(instance.radius, 20.0);
        assert_eq!(instance.color, [1.0, 0.0, 0.0, 1.0]);
    }
}
