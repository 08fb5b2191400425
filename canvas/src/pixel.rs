//! RGB pixel value, the spray blend and the predefined palette.

#[cfg(test)]
#[path = "pixel_test.rs"]
mod pixel_test;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;

/// One canvas cell color. Serialized as a `[r, g, b]` JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pixel(pub [u8; 3]);

impl Pixel {
    /// Background sentinel. Sticker cells equal to it are not part of the pattern.
    pub const BACKGROUND: Self = Self([255, 255, 255]);
    pub const BLACK: Self = Self([0, 0, 0]);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Exact component-wise comparison with [`Pixel::BACKGROUND`].
    #[must_use]
    pub fn is_background(self) -> bool {
        self == Self::BACKGROUND
    }

    /// Per-channel midpoint of two colors, rounding halves up.
    ///
    /// Used for both the spray preview and the spray commit. Commutative.
    #[must_use]
    pub fn blend(self, other: Self) -> Self {
        let mid = |a: u8, b: u8| {
            let sum = u16::from(a) + u16::from(b) + 1;
            // sum / 2 <= 255 for any two u8 inputs
            u8::try_from(sum / 2).unwrap_or(u8::MAX)
        };
        Self([mid(self.r(), other.r()), mid(self.g(), other.g()), mid(self.b(), other.b())])
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }

    /// CSS `rgb(r, g, b)` form for inline styles.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r(), self.g(), self.b())
    }

    /// Hue in whole degrees `[0, 360)`, saturation and value in percent.
    #[must_use]
    pub fn to_hsv(self) -> (f64, f64, f64) {
        let r = f64::from(self.r()) / 255.0;
        let g = f64::from(self.g()) / 255.0;
        let b = f64::from(self.b()) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;

        let sector = if diff == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / diff) % 6.0
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };
        let mut hue = (sector * 60.0).round();
        if hue < 0.0 {
            hue += 360.0;
        }
        let saturation = if max == 0.0 { 0.0 } else { diff / max };
        (hue, saturation * 100.0, max * 100.0)
    }

    /// Inverse of [`Pixel::to_hsv`]. Inputs are clamped to their ranges;
    /// hue 360 wraps to red.
    #[must_use]
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = (hue.rem_euclid(360.0)) / 60.0;
        let s = saturation.clamp(0.0, 100.0) / 100.0;
        let v = value.clamp(0.0, 100.0) / 100.0;

        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h {
            h if h < 1.0 => (c, x, 0.0),
            h if h < 2.0 => (x, c, 0.0),
            h if h < 3.0 => (0.0, c, x),
            h if h < 4.0 => (0.0, x, c),
            h if h < 5.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self([unit_to_channel(r + m), unit_to_channel(g + m), unit_to_channel(b + m)])
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional, surrounding whitespace ignored).
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Parse`] for any other shape or non-hex digits.
    pub fn from_hex(raw: &str) -> Result<Self, CanvasError> {
        let trimmed = raw.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || CanvasError::Parse(format!("invalid hex color `{raw}`"));
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        if !hex.is_ascii() {
            return Err(invalid());
        }
        match hex.len() {
            3 => Ok(Self([
                channel(&hex[0..1].repeat(2))?,
                channel(&hex[1..2].repeat(2))?,
                channel(&hex[2..3].repeat(2))?,
            ])),
            6 => Ok(Self([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?])),
            _ => Err(invalid()),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Pixel {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(rgb: [u8; 3]) -> Self {
        Self(rgb)
    }
}

/// Swatches offered by the color picker, in display order.
pub const PALETTE: [(&str, Pixel); 16] = [
    ("Black", Pixel::new(0, 0, 0)),
    ("White", Pixel::new(255, 255, 255)),
    ("Red", Pixel::new(255, 0, 0)),
    ("Green", Pixel::new(0, 255, 0)),
    ("Blue", Pixel::new(0, 0, 255)),
    ("Yellow", Pixel::new(255, 255, 0)),
    ("Magenta", Pixel::new(255, 0, 255)),
    ("Cyan", Pixel::new(0, 255, 255)),
    ("Maroon", Pixel::new(128, 0, 0)),
    ("Dark Green", Pixel::new(0, 128, 0)),
    ("Navy", Pixel::new(0, 0, 128)),
    ("Olive", Pixel::new(128, 128, 0)),
    ("Purple", Pixel::new(128, 0, 128)),
    ("Teal", Pixel::new(0, 128, 128)),
    ("Orange", Pixel::new(255, 128, 0)),
    ("Pink", Pixel::new(255, 192, 203)),
];
