// Float RGBA color plus the byte packing used by the file formats.
// Channels are nominally in [0,1] but the type does not clamp them; only the
// conversion to bytes does.

use std::fmt;
use std::ops::{Add, AddAssign, Div};
use std::str::FromStr;

/// Luma weights used by `Buffer::grayscale`.
pub const LUMA_WEIGHTS: [f32; 3] = [0.222, 0.707, 0.071];

/// Four float channels. Equality is exact per component.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Fully transparent black. Also the value `Buffer::get` returns off-grid.
    pub const NO_ALPHA: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const GREY: Color = Color::new(0.5, 0.5, 0.5, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// True when the alpha channel is exactly zero, whatever the RGB.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Weighted RGB dot product with `LUMA_WEIGHTS`.
    #[inline]
    pub fn luma(&self) -> f32 {
        self.r * LUMA_WEIGHTS[0] + self.g * LUMA_WEIGHTS[1] + self.b * LUMA_WEIGHTS[2]
    }

    /// Decode R,G,B[,A] bytes. With only three bytes the color is opaque.
    pub fn from_rgba8(src: &[u8]) -> Self {
        Self::new(
            from_byte(src[0]),
            from_byte(src[1]),
            from_byte(src[2]),
            src.get(3).copied().map_or(1.0, from_byte),
        )
    }

    /// Decode B,G,R[,A] bytes (TGA order). With only three bytes the color is opaque.
    pub fn from_bgra8(src: &[u8]) -> Self {
        Self::new(
            from_byte(src[2]),
            from_byte(src[1]),
            from_byte(src[0]),
            src.get(3).copied().map_or(1.0, from_byte),
        )
    }

    /// Pack as [R, G, B, A] bytes.
    pub fn to_rgba8(self) -> [u8; 4] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b), to_byte(self.a)]
    }

    /// Pack as [B, G, R, A] bytes.
    pub fn to_bgra8(self) -> [u8; 4] {
        [to_byte(self.b), to_byte(self.g), to_byte(self.r), to_byte(self.a)]
    }
}

#[inline]
fn from_byte(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Div<f32> for Color {
    type Output = Color;

    fn div(self, rhs: f32) -> Color {
        Color::new(self.r / rhs, self.g / rhs, self.b / rhs, self.a / rhs)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<r={}, g={}, b={}, a={}>", self.r, self.g, self.b, self.a)
    }
}

/// Parses a named constant (`white`, `grey`, `none`, ...) or `r,g,b[,a]` floats.
impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let named = match s.trim().to_ascii_lowercase().as_str() {
            "none" | "noalpha" | "transparent" => Some(Color::NO_ALPHA),
            "white" => Some(Color::WHITE),
            "black" => Some(Color::BLACK),
            "grey" | "gray" => Some(Color::GREY),
            "red" => Some(Color::RED),
            "green" => Some(Color::GREEN),
            "blue" => Some(Color::BLUE),
            "yellow" => Some(Color::YELLOW),
            "magenta" => Some(Color::MAGENTA),
            "cyan" => Some(Color::CYAN),
            _ => None,
        };
        if let Some(c) = named {
            return Ok(c);
        }

        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid color '{s}': {e}"))?;
        match parts.as_slice() {
            [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Color::new(*r, *g, *b, *a)),
            _ => Err(format!("invalid color '{s}': expected a name or 3-4 components")),
        }
    }
}
