//! Conversions between sRGB colors, HSL colors, and hex strings.

use crate::PaletteError;
use palette::Srgb;
use std::fmt::Display;

/// An HSL color with the hue in degrees and the saturation and lightness as percentages.
///
/// Its [`Display`] implementation renders the CSS form, e.g. `hsl(180, 100.00%, 50.00%)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// The hue in degrees, in the range `[0, 360)`.
    pub hue: f32,
    /// The saturation as a percentage, in the range `[0, 100]`.
    pub saturation: f32,
    /// The lightness as a percentage, in the range `[0, 100]`.
    pub lightness: f32,
}

impl Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({}, {:.2}%, {:.2}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// The complementary color of a palette entry.
///
/// It pairs the hue-rotated [`Hsl`] triple with the hex encoding
/// of the equivalent sRGB color.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complement {
    /// The complementary color in HSL.
    hsl: Hsl,
    /// The uppercase `#RRGGBB` encoding of `hsl`.
    hex: String,
}

impl Complement {
    /// Creates a [`Complement`] from an already rotated HSL color.
    pub(crate) fn new(hsl: Hsl) -> Self {
        Self {
            hex: rgb_to_hex(hsl_to_rgb(hsl)),
            hsl,
        }
    }

    /// The complementary color in HSL.
    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The uppercase `#RRGGBB` encoding of [`hsl`](Complement::hsl).
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }
}

/// Converts a color to HSL and rotates its hue by `180` degrees
/// to give the complementary color.
///
/// Grays (including black and white) have no hue to rotate,
/// so they have no complement and `None` is returned.
/// The returned hue is rounded to a whole number of degrees
/// and normalized into `[0, 360)`.
///
/// # Examples
/// ```
/// # use swatchette::complementary_hsl;
/// # use palette::Srgb;
/// let complement = complementary_hsl(Srgb::new(255, 0, 0)).unwrap();
/// assert_eq!(complement.hue, 180.0);
/// assert_eq!(complement.saturation, 100.0);
/// assert_eq!(complement.lightness, 50.0);
///
/// assert!(complementary_hsl(Srgb::new(128, 128, 128)).is_none());
/// ```
#[must_use]
pub fn complementary_hsl(color: Srgb<u8>) -> Option<Hsl> {
    let max_component = color.red.max(color.green).max(color.blue);
    let min_component = color.red.min(color.green).min(color.blue);

    // All channels equal means no hue is defined.
    if max_component == min_component {
        return None;
    }

    let red = f32::from(color.red) / 255.0;
    let green = f32::from(color.green) / 255.0;
    let blue = f32::from(color.blue) / 255.0;

    let c_max = f32::from(max_component) / 255.0;
    let c_min = f32::from(min_component) / 255.0;
    let delta = c_max - c_min;

    let lightness = (c_max + c_min) / 2.0;
    let saturation = if lightness <= 0.5 {
        delta / (c_max + c_min)
    } else {
        delta / (2.0 - c_max - c_min)
    };

    // Ties on the maximum channel resolve to red first, then green.
    let hue = if max_component == color.red {
        (green - blue) / delta
    } else if max_component == color.green {
        2.0 + (blue - red) / delta
    } else {
        4.0 + (red - green) / delta
    };
    let mut hue = hue * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    Some(Hsl {
        hue: (hue.round() + 180.0).rem_euclid(360.0),
        saturation: saturation * 100.0,
        lightness: lightness * 100.0,
    })
}

/// Converts an HSL color back to sRGB.
///
/// Each channel is rounded to the nearest integer and clamped to `[0, 255]`.
///
/// # Examples
/// ```
/// # use swatchette::{hsl_to_rgb, Hsl};
/// # use palette::Srgb;
/// let cyan = Hsl { hue: 180.0, saturation: 100.0, lightness: 50.0 };
/// assert_eq!(hsl_to_rgb(cyan), Srgb::new(0, 255, 255));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl_to_rgb(hsl: Hsl) -> Srgb<u8> {
    let saturation = hsl.saturation / 100.0;
    let lightness = hsl.lightness / 100.0;
    let a = saturation * lightness.min(1.0 - lightness);

    let channel = |n: f32| {
        let k = (n + hsl.hue / 30.0).rem_euclid(12.0);
        let value = lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        (255.0 * value).round().clamp(0.0, 255.0) as u8
    };

    Srgb::new(channel(0.0), channel(8.0), channel(4.0))
}

/// Encodes a color as an uppercase `#RRGGBB` hex string.
///
/// # Examples
/// ```
/// # use swatchette::rgb_to_hex;
/// # use palette::Srgb;
/// assert_eq!(rgb_to_hex(Srgb::new(255, 0, 10)), "#FF000A");
/// ```
#[must_use]
pub fn rgb_to_hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Parses a `#RRGGBB` hex string back into a color.
///
/// The leading `#` is optional and the hex digits may be in either case,
/// so this accepts everything [`rgb_to_hex`] produces.
///
/// # Errors
/// Returns [`PaletteError::InvalidHex`] if the input is not
/// exactly six hex digits after the optional `#`.
///
/// # Examples
/// ```
/// # use swatchette::{hex_to_rgb, PaletteError};
/// # use palette::Srgb;
/// # fn main() -> Result<(), PaletteError> {
/// assert_eq!(hex_to_rgb("#1A2B3C")?, Srgb::new(26, 43, 60));
/// assert_eq!(hex_to_rgb("1a2b3c")?, Srgb::new(26, 43, 60));
/// assert!(hex_to_rgb("#1A2B").is_err());
/// # Ok(())
/// # }
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Srgb<u8>, PaletteError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(PaletteError::InvalidHex(hex.to_owned()));
    }

    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };

    match (channel(0), channel(2), channel(4)) {
        (Some(red), Some(green), Some(blue)) => Ok(Srgb::new(red, green, blue)),
        _ => Err(PaletteError::InvalidHex(hex.to_owned())),
    }
}
