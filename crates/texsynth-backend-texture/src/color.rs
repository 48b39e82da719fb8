//! Color sample type.

/// RGBA color with f64 components (0.0 to 1.0 nominal, HDR may exceed 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a grayscale color.
    pub const fn gray(value: f64) -> Self {
        Self::rgb(value, value, value)
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Create from an `[r, g, b, a]` array.
    pub const fn from_array(c: [f64; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    /// Components as `[r, g, b, a]`.
    pub const fn to_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linearly interpolate between two colors, alpha included.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGBA, clamping to standard range.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    /// Convert to 32-bit float RGBA without clamping.
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, self.a as f32]
    }

    /// Whether every component is within `eps` of `other`.
    pub fn approx_eq(&self, other: &Color, eps: f64) -> bool {
        (self.r - other.r).abs() <= eps
            && (self.g - other.g).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.a - other.a).abs() <= eps
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl From<[f64; 4]> for Color {
    fn from(c: [f64; 4]) -> Self {
        Self::from_array(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_gray() {
        let gray = Color::gray(0.5);
        assert!((gray.r - 0.5).abs() < 1e-10);
        assert!((gray.g - 0.5).abs() < 1e-10);
        assert!((gray.b - 0.5).abs() < 1e-10);
        assert_eq!(gray.a, 1.0);
    }

    #[test]
    fn test_lerp_includes_alpha() {
        let a = Color::rgba(0.0, 0.0, 0.0, 0.0);
        let b = Color::rgba(1.0, 0.5, 0.25, 1.0);

        let mid = a.lerp(&b, 0.5);
        assert!(mid.approx_eq(&Color::rgba(0.5, 0.25, 0.125, 0.5), 1e-12));
    }

    #[test]
    fn test_to_rgba8_clamps_hdr() {
        let hot = Color::rgba(4.0, -1.0, 0.5, 1.0);
        assert_eq!(hot.to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_to_rgba_f32_keeps_hdr() {
        let hot = Color::rgba(4.0, -1.0, 0.5, 1.0);
        assert_eq!(hot.to_rgba_f32(), [4.0, -1.0, 0.5, 1.0]);
    }

    #[test]
    fn test_array_conversions() {
        let c = Color::from([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Color::default(), Color::black());
    }
}
