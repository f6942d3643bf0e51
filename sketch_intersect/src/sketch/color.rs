#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with components in `[0, 1]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color::new(r, g, b, 1.0)
    }

    /// Linear interpolation, `t = 0` gives `self` and `t = 1` gives `other`.
    #[inline]
    pub fn lerp(&self, other: Color, t: f32) -> Color {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Color::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Halfway between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sketch_intersect::sketch::Color;
    /// let purple = Color::rgb(1.0, 0.0, 0.0).midpoint(Color::rgb(0.0, 0.0, 1.0));
    /// assert_eq!(purple, Color::rgb(0.5, 0.0, 0.5));
    /// ```
    #[inline]
    pub fn midpoint(&self, other: Color) -> Color {
        self.lerp(other, 0.5)
    }
}
