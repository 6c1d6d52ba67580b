//! RGBA colour with CSS and GPU conversions

/// 8-bit RGBA colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|n| n * 17);
                Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// CSS colour string for a canvas fill style
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }

    /// Components in [0, 1] without gamma conversion
    pub fn to_unorm(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Components in linear space, for sRGB render targets
    ///
    /// Alpha is left linear.
    pub fn to_linear(&self) -> [f32; 4] {
        let [r, g, b, a] = self.to_unorm();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }
}

impl Default for Color {
    fn default() -> Self {
        // Canvas default fill style
        Self::BLACK
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("#0A141E"), Some(Color::rgb(10, 20, 30)));
    }

    #[test]
    fn test_from_hex_short_and_alpha() {
        assert_eq!(Color::from_hex("#f00"), Some(Color::RED));
        assert_eq!(Color::from_hex("#00000080"), Some(Color::rgba(0, 0, 0, 128)));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Color::from_hex("red"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Color::RED.to_css(), "#ff0000");
        assert_eq!(Color::rgba(255, 0, 0, 0).to_css(), "rgba(255, 0, 0, 0.000)");
    }

    #[test]
    fn test_to_linear_endpoints() {
        let white = Color::WHITE.to_linear();
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-5));
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0, 1.0]);
        let mid = Color::rgb(128, 128, 128).to_linear();
        assert!(mid[0] > 0.2 && mid[0] < 0.23);
    }

    #[test]
    fn test_default_is_canvas_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }
}
