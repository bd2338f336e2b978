//! Color space conversions and WCAG contrast helpers.
//!
//! The avatar palette is defined in HSL so hue, saturation and lightness can
//! be bucketed independently, then converted to sRGB for display. Text color
//! selection follows the WCAG 2.1 relative luminance and contrast ratio
//! definitions.

#![expect(
    clippy::float_arithmetic,
    reason = "color conversion and luminance are defined over real numbers"
)]

use std::fmt;

use serde::{Serialize, Serializer};

/// Relative luminance of pure white.
const WHITE_LUMINANCE: f64 = 1.0;

/// Relative luminance of pure black.
const BLACK_LUMINANCE: f64 = 0.0;

/// Channel threshold below which sRGB is treated as linear.
const LINEAR_THRESHOLD: f64 = 0.039_28;

/// A color expressed as hue (degrees), saturation and lightness (percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees, `0..360`.
    pub hue: u16,
    /// Saturation in percent, `0..=100`.
    pub saturation: u8,
    /// Lightness in percent, `0..=100`.
    pub lightness: u8,
}

impl Hsl {
    /// Converts the color to sRGB.
    ///
    /// Uses the chroma/offset formulation: the hue selects one of six 60°
    /// sectors, each assigning chroma and the intermediate component to two
    /// channels before the lightness offset is added.
    ///
    /// # Examples
    ///
    /// ```
    /// use member_presentation::{Hsl, Rgb};
    ///
    /// let hsl = Hsl { hue: 0, saturation: 40, lightness: 70 };
    /// assert_eq!(hsl.to_rgb(), Rgb { r: 209, g: 148, b: 148 });
    /// ```
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let hue = f64::from(self.hue);
        let saturation = f64::from(self.saturation) / 100.0;
        let lightness = f64::from(self.lightness) / 100.0;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let intermediate = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let offset = lightness - chroma / 2.0;

        let (r, g, b) = match self.hue {
            0..60 => (chroma, intermediate, 0.0),
            60..120 => (intermediate, chroma, 0.0),
            120..180 => (0.0, chroma, intermediate),
            180..240 => (0.0, intermediate, chroma),
            240..300 => (intermediate, 0.0, chroma),
            _ => (chroma, 0.0, intermediate),
        };

        Rgb {
            r: to_channel(r + offset),
            g: to_channel(g + offset),
            b: to_channel(b + offset),
        }
    }
}

/// Scales a unit interval value to an 8-bit channel, rounding half up.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to the u8 range before the cast"
)]
fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Formats the color as a lowercase `#rrggbb` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use member_presentation::Rgb;
    ///
    /// assert_eq!(Rgb { r: 10, g: 171, b: 255 }.to_hex(), "#0aabff");
    /// ```
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the WCAG 2.1 relative luminance in `0.0..=1.0`.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// Picks the text color with the higher contrast against this
    /// background. Ties go to white.
    #[must_use]
    pub fn text_color(self) -> TextColor {
        let background = self.relative_luminance();
        let against_white = contrast_ratio(background, WHITE_LUMINANCE);
        let against_black = contrast_ratio(background, BLACK_LUMINANCE);
        if against_white >= against_black {
            TextColor::White
        } else {
            TextColor::Black
        }
    }
}

fn linearize(channel: u8) -> f64 {
    let unit = f64::from(channel) / 255.0;
    if unit <= LINEAR_THRESHOLD {
        unit / 12.92
    } else {
        ((unit + 0.055) / 1.055).powf(2.4)
    }
}

/// Returns the WCAG contrast ratio between two relative luminances.
///
/// The result is symmetric in its arguments and ranges from `1.0` (no
/// contrast) to `21.0` (black on white).
#[must_use]
pub fn contrast_ratio(first: f64, second: f64) -> f64 {
    let lighter = first.max(second);
    let darker = first.min(second);
    (lighter + 0.05) / (darker + 0.05)
}

/// Foreground color used for text drawn over an avatar background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// `#ffffff`.
    White,
    /// `#000000`.
    Black,
}

impl TextColor {
    /// Returns the color as a `#rrggbb` string.
    #[must_use]
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::White => "#ffffff",
            Self::Black => "#000000",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hex())
    }
}

impl Serialize for TextColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_hex())
    }
}
