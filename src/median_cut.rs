//! Median cut color quantization.
//!
//! The quantizer recursively splits the sample set along the color channel
//! with the widest range of values: the samples are sorted by that channel
//! and divided in half, until the configured depth is reached or a bucket
//! runs out of samples to split. Each final bucket is collapsed into its
//! average color, so cutting to a depth of `d` gives a palette of at most
//! `2^d` colors.
//!
//! The two halves of a split share no samples, which is what allows
//! [`palette_par`] to hand them to separate threads.

use crate::{MaxDepth, PaletteError};
use palette::Srgb;
#[cfg(feature = "threads")]
use rayon::prelude::*;

/// A color channel of an [`Srgb`] color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl Channel {
    /// The value of this channel in the given color.
    #[must_use]
    pub const fn component(self, color: Srgb<u8>) -> u8 {
        match self {
            Channel::Red => color.red,
            Channel::Green => color.green,
            Channel::Blue => color.blue,
        }
    }
}

/// Returns the channel with the widest range of values across the given colors.
///
/// Exact ties are broken in favor of red, then green, then blue.
///
/// # Errors
/// Returns [`PaletteError::EmptyInput`] if `colors` is empty.
///
/// # Examples
/// ```
/// # use swatchette::{median_cut::{widest_channel, Channel}, PaletteError};
/// # use palette::Srgb;
/// # fn main() -> Result<(), PaletteError> {
/// let colors = [Srgb::new(10, 0, 0), Srgb::new(200, 0, 30)];
/// assert_eq!(widest_channel(&colors)?, Channel::Red);
/// # Ok(())
/// # }
/// ```
pub fn widest_channel(colors: &[Srgb<u8>]) -> Result<Channel, PaletteError> {
    if colors.is_empty() {
        return Err(PaletteError::EmptyInput);
    }
    Ok(widest_channel_unchecked(colors))
}

/// Like [`widest_channel`] but without the empty input check,
/// for buckets already known to be non-empty.
fn widest_channel_unchecked(colors: &[Srgb<u8>]) -> Channel {
    let (mut r_min, mut g_min, mut b_min) = (u8::MAX, u8::MAX, u8::MAX);
    let (mut r_max, mut g_max, mut b_max) = (u8::MIN, u8::MIN, u8::MIN);

    for color in colors {
        (r_min, r_max) = (r_min.min(color.red), r_max.max(color.red));
        (g_min, g_max) = (g_min.min(color.green), g_max.max(color.green));
        (b_min, b_max) = (b_min.min(color.blue), b_max.max(color.blue));
    }

    let (r_range, g_range, b_range) = (r_max - r_min, g_max - g_min, b_max - b_min);
    if r_range >= g_range && r_range >= b_range {
        Channel::Red
    } else if g_range >= b_range {
        Channel::Green
    } else {
        Channel::Blue
    }
}

/// Computes a color palette with at most `2^max_depth` entries by recursively
/// splitting `samples` along its widest channels.
///
/// The palette keeps the order in which the final buckets are produced;
/// it is not sorted or deduplicated. Use [`PalettePipeline`](crate::PalettePipeline)
/// for the full luminance-ordered and deduplicated output.
///
/// # Errors
/// Returns [`PaletteError::EmptyInput`] if `samples` is empty.
///
/// # Examples
/// ```
/// # use swatchette::{median_cut, MaxDepth, PaletteError};
/// # use palette::Srgb;
/// # fn main() -> Result<(), PaletteError> {
/// let samples = vec![Srgb::new(255, 0, 0), Srgb::new(0, 0, 255)];
/// let palette = median_cut::palette(samples, MaxDepth::default())?;
/// assert_eq!(palette, [Srgb::new(0, 0, 255), Srgb::new(255, 0, 0)]);
/// # Ok(())
/// # }
/// ```
pub fn palette(
    mut samples: Vec<Srgb<u8>>,
    max_depth: MaxDepth,
) -> Result<Vec<Srgb<u8>>, PaletteError> {
    if samples.is_empty() {
        return Err(PaletteError::EmptyInput);
    }

    let mut palette = Vec::with_capacity(usize::from(max_depth.max_colors()));
    split_bucket(&mut samples, 0, max_depth.into_inner(), &mut palette);
    Ok(palette)
}

/// Computes the same palette as [`palette`], sorting the buckets and
/// recursing into the two halves of each split in parallel.
///
/// The parallel and sequential versions produce identical palettes.
///
/// # Errors
/// Returns [`PaletteError::EmptyInput`] if `samples` is empty.
#[cfg(feature = "threads")]
pub fn palette_par(
    mut samples: Vec<Srgb<u8>>,
    max_depth: MaxDepth,
) -> Result<Vec<Srgb<u8>>, PaletteError> {
    if samples.is_empty() {
        return Err(PaletteError::EmptyInput);
    }
    Ok(split_bucket_par(&mut samples, 0, max_depth.into_inner()))
}

/// Recursively splits `bucket` along its widest channel,
/// pushing the average color of each final bucket onto `palette`.
///
/// A bucket of two or more samples splits into two non-empty halves,
/// so the recursion never averages an empty bucket.
fn split_bucket(bucket: &mut [Srgb<u8>], depth: u8, max_depth: u8, palette: &mut Vec<Srgb<u8>>) {
    if depth == max_depth || bucket.len() <= 1 {
        palette.push(average(bucket));
        return;
    }

    let channel = widest_channel_unchecked(bucket);
    bucket.sort_by_key(|&color| channel.component(color));

    let (lower, upper) = bucket.split_at_mut(bucket.len() / 2);
    split_bucket(lower, depth + 1, max_depth, palette);
    split_bucket(upper, depth + 1, max_depth, palette);
}

/// The recursive step of [`palette_par`]. The halves of each split are disjoint,
/// so [`rayon::join`] runs them on separate threads, each collecting into its
/// own palette; the upper half's palette is appended to the lower half's.
#[cfg(feature = "threads")]
fn split_bucket_par(bucket: &mut [Srgb<u8>], depth: u8, max_depth: u8) -> Vec<Srgb<u8>> {
    if depth == max_depth || bucket.len() <= 1 {
        return vec![average(bucket)];
    }

    let channel = widest_channel_unchecked(bucket);
    bucket.par_sort_by_key(|&color| channel.component(color));

    let (lower, upper) = bucket.split_at_mut(bucket.len() / 2);
    let (mut palette, upper_palette) = rayon::join(
        || split_bucket_par(lower, depth + 1, max_depth),
        || split_bucket_par(upper, depth + 1, max_depth),
    );
    palette.extend(upper_palette);
    palette
}

/// The component-wise arithmetic mean of a non-empty bucket.
fn average(bucket: &[Srgb<u8>]) -> Srgb<u8> {
    debug_assert!(!bucket.is_empty());

    let (mut r_sum, mut g_sum, mut b_sum) = (0u64, 0u64, 0u64);
    for color in bucket {
        r_sum += u64::from(color.red);
        g_sum += u64::from(color.green);
        b_sum += u64::from(color.blue);
    }

    let count = bucket.len() as u64;
    Srgb::new(
        mean_component(r_sum, count),
        mean_component(g_sum, count),
        mean_component(b_sum, count),
    )
}

/// Rounds `sum / count` to the nearest integer, saturating at the channel maximum.
fn mean_component(sum: u64, count: u64) -> u8 {
    u8::try_from((sum + count / 2) / count).unwrap_or(u8::MAX)
}
