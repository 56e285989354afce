//! Contains various types needed across the crate.

use crate::{complementary_hsl, rgb_to_hex, Complement, DEFAULT_MAX_DEPTH, MAX_DEPTH};
use palette::Srgb;
use std::{error::Error, fmt::Display};

/// An error type for when a requested median cut depth
/// is above the maximum supported value.
///
/// The inner value is the maximum supported depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveMaxDepth(pub u8);

impl Display for AboveMaxDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "above the maximum median cut depth of {}", self.0)
    }
}

impl Error for AboveMaxDepth {}

/// The error type returned by the palette extraction functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The RGBA byte buffer cannot be split into whole pixels.
    ///
    /// The contained value is the offending buffer length.
    InvalidBufferLength(usize),
    /// There were no colors to operate on.
    EmptyInput,
    /// A hex color string was not of the form `#RRGGBB` or `RRGGBB`.
    ///
    /// The contained value is the offending string.
    InvalidHex(String),
}

impl Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteError::InvalidBufferLength(len) => {
                write!(f, "RGBA buffer length of {len} is not a multiple of 4")
            }
            PaletteError::EmptyInput => write!(f, "input contains no colors"),
            PaletteError::InvalidHex(hex) => {
                write!(f, "{hex:?} is not a hex color of the form #RRGGBB")
            }
        }
    }
}

impl Error for PaletteError {}

/// This type is used to specify the maximum recursion depth of the median cut,
/// and thereby the maximum number of colors in the resulting palette (`2^depth`).
///
/// This is a simple new type wrapper around `u8` with the invariant that it must be
/// less than or equal to [`MAX_DEPTH`](crate::MAX_DEPTH).
///
/// A [`MaxDepth`] of `0` collapses the whole input into a single average color.
///
/// # Examples
/// Use `try_into` or [`MaxDepth::from_clamped`] to create [`MaxDepth`]s.
/// You can also use the [`MaxDepth::MAX`] constant.
///
/// ```
/// # use swatchette::{MaxDepth, AboveMaxDepth};
/// # fn main() -> Result<(), AboveMaxDepth> {
/// let depth = MaxDepth::try_from(3)?;
/// let depth: MaxDepth = 3.try_into()?;
/// let depth = MaxDepth::from_clamped(12); // clamped to MaxDepth::MAX
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MaxDepth(u8);

impl MaxDepth {
    /// The maximum supported depth (given by [`MAX_DEPTH`](crate::MAX_DEPTH)).
    pub const MAX: Self = Self(MAX_DEPTH);

    /// Gets the inner `u8` value.
    #[must_use]
    pub const fn into_inner(self) -> u8 {
        self.0
    }

    /// Creates a [`MaxDepth`] by clamping the given `u8` to be
    /// less than or equal to [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[must_use]
    pub const fn from_clamped(value: u8) -> Self {
        if value <= MAX_DEPTH {
            Self(value)
        } else {
            Self(MAX_DEPTH)
        }
    }

    /// The maximum number of colors a palette cut to this depth can contain (`2^depth`),
    /// up to [`MAX_SWATCHES`](crate::MAX_SWATCHES) for [`MaxDepth::MAX`].
    #[must_use]
    pub const fn max_colors(self) -> u16 {
        1 << self.0
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        Self(DEFAULT_MAX_DEPTH)
    }
}

impl From<MaxDepth> for u8 {
    fn from(val: MaxDepth) -> Self {
        val.into_inner()
    }
}

impl TryFrom<u8> for MaxDepth {
    type Error = AboveMaxDepth;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= MAX_DEPTH {
            Ok(MaxDepth(value))
        } else {
            Err(AboveMaxDepth(MAX_DEPTH))
        }
    }
}

impl Display for MaxDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_inner())
    }
}

/// A single entry of an extracted palette.
///
/// It contains the representative `color`, its uppercase `#RRGGBB` encoding,
/// and the complementary color when the entry is chromatic.
/// Gray colors have no defined hue, so their `complement` is `None`.
///
/// # Examples
/// ```
/// # use swatchette::Swatch;
/// # use palette::Srgb;
/// let swatch = Swatch::new(Srgb::new(255, 0, 0));
/// assert_eq!(swatch.hex(), "#FF0000");
/// assert!(swatch.complement().is_some());
///
/// let gray = Swatch::new(Srgb::new(128, 128, 128));
/// assert!(gray.complement().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    /// The representative color.
    color: Srgb<u8>,
    /// The uppercase `#RRGGBB` encoding of `color`.
    hex: String,
    /// The complementary color, if `color` has a defined hue.
    complement: Option<Complement>,
}

impl Swatch {
    /// Creates a [`Swatch`] for the given color,
    /// computing its hex encoding and its complement (if one is defined).
    #[must_use]
    pub fn new(color: Srgb<u8>) -> Self {
        Self {
            color,
            hex: rgb_to_hex(color),
            complement: complementary_hsl(color).map(Complement::new),
        }
    }

    /// The representative color of this palette entry.
    #[must_use]
    pub const fn color(&self) -> Srgb<u8> {
        self.color
    }

    /// The uppercase `#RRGGBB` encoding of [`color`](Swatch::color).
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The complementary color, or `None` if [`color`](Swatch::color) is gray.
    #[must_use]
    pub const fn complement(&self) -> Option<&Complement> {
        self.complement.as_ref()
    }
}
