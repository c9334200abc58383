//! Clamped RGBA color value.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

/// RGBA color with each channel clamped into `0..=255` at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const TRANSPARENT: Color = Color { r: 255, g: 255, b: 255, a: 0 };

    /// Build a color, clamping each channel into `0..=255`.
    pub fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        let clamp = |c: i32| c.clamp(0, 255) as u8;
        Color {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
            a: clamp(a),
        }
    }

    /// Fully opaque color from the three color channels.
    pub fn rgb(r: i32, g: i32, b: i32) -> Self {
        Color::new(r, g, b, 255)
    }

    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Lowercase `#rrggbbaa` rendering.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Random color with each channel drawn uniformly from its own
    /// inclusive range (ranges wider than a channel are clamped).
    pub fn random(
        r_range: RangeInclusive<i32>,
        g_range: RangeInclusive<i32>,
        b_range: RangeInclusive<i32>,
        a_range: RangeInclusive<i32>,
    ) -> Self {
        let mut rng = rand::thread_rng();
        Color::new(
            rng.gen_range(r_range),
            rng.gen_range(g_range),
            rng.gen_range(b_range),
            rng.gen_range(a_range),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
