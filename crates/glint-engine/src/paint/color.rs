/// Premultiplied RGBA color with `f32` channels in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Colors authored as 8-bit triples (the usual way menus are styled) go
/// through [`Color::rgb`] / [`Color::from_srgb_u8`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Opaque color from 8-bit channels.
    #[inline]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb_u8(r, g, b, 255)
    }

    /// Creates a premultiplied color from straight 8-bit channels (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Premultiplied channels quantized to bytes, as stored in a canvas.
    #[inline]
    pub fn to_premul_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Same color with every channel multiplied by `coverage` (0..=1).
    ///
    /// Used by the rasterizer for anti-aliased edges.
    #[inline]
    pub fn with_coverage(self, coverage: f32) -> Self {
        let c = coverage.clamp(0.0, 1.0);
        Self { r: self.r * c, g: self.g * c, b: self.b * c, a: self.a * c }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque_and_exact_at_extremes() {
        let c = Color::rgb(255, 0, 128);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.to_premul_u8(), [255, 0, 128, 255]);
    }

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!((c.r, c.g, c.b, c.a), (0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn zero_coverage_is_transparent() {
        assert_eq!(Color::WHITE.with_coverage(0.0), Color::transparent());
    }
}
