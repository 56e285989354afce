//! The high-level palette extraction pipeline.

use crate::{
    median_cut, rgb_pixels, sort_by_luminance, squared_distance, MaxDepth, PaletteError, Swatch,
    DEFAULT_DEDUP_THRESHOLD,
};
#[cfg(feature = "image")]
use image::RgbaImage;
use palette::Srgb;

/// A builder struct to simplify turning an image into a set of [`Swatch`]es.
///
/// The pipeline runs the median cut quantizer over the input colors,
/// orders the palette by ascending luminance, merges entries closer than
/// the dedup threshold, and renders each survivor as a [`Swatch`].
///
/// # Examples
/// ```
/// # use swatchette::{MaxDepth, PalettePipeline, Swatch};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // One red, one green, and two blue pixels.
/// let rgba = [
///     255, 0, 0, 255, //
///     0, 255, 0, 255, //
///     0, 0, 255, 255, //
///     0, 0, 255, 255, //
/// ];
///
/// let swatches = PalettePipeline::from_rgba_bytes(&rgba)?
///     .max_depth(MaxDepth::try_from(2)?)
///     .dedup_threshold(50)
///     .swatches()?;
///
/// let hex = swatches.iter().map(Swatch::hex).collect::<Vec<_>>();
/// assert_eq!(hex, ["#0000FF", "#FF0000", "#00FF00"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PalettePipeline {
    /// The colors to extract a palette from.
    colors: Vec<Srgb<u8>>,
    /// The maximum recursion depth for the median cut.
    max_depth: MaxDepth,
    /// The squared distance below which adjacent palette colors are merged.
    dedup_threshold: u32,
}

impl PalettePipeline {
    /// Creates a new pipeline from the given colors.
    #[must_use]
    pub fn new(colors: Vec<Srgb<u8>>) -> Self {
        Self {
            colors,
            max_depth: MaxDepth::default(),
            dedup_threshold: DEFAULT_DEDUP_THRESHOLD,
        }
    }

    /// Creates a new pipeline from an interleaved RGBA byte buffer,
    /// discarding the alpha channel.
    ///
    /// # Errors
    /// Returns [`PaletteError::InvalidBufferLength`] if the buffer length
    /// is not a multiple of `4`.
    pub fn from_rgba_bytes(rgba: &[u8]) -> Result<Self, PaletteError> {
        Ok(Self::new(rgb_pixels(rgba)?))
    }

    /// Sets the maximum median cut recursion depth,
    /// and thereby the maximum number of swatches (`2^depth`).
    ///
    /// The default is a depth of [`4`](crate::DEFAULT_MAX_DEPTH).
    #[must_use]
    pub fn max_depth(mut self, max_depth: MaxDepth) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the squared distance below which adjacent palette colors
    /// are merged into a single swatch.
    ///
    /// A threshold of `0` disables merging entirely. The default is
    /// [`120`](crate::DEFAULT_DEDUP_THRESHOLD).
    #[must_use]
    pub fn dedup_threshold(mut self, dedup_threshold: u32) -> Self {
        self.dedup_threshold = dedup_threshold;
        self
    }

    /// Extracts the palette and assembles the final swatches,
    /// ordered by ascending luminance.
    ///
    /// # Errors
    /// Returns [`PaletteError::EmptyInput`] if the pipeline holds no colors.
    pub fn swatches(self) -> Result<Vec<Swatch>, PaletteError> {
        let Self { colors, max_depth, dedup_threshold } = self;
        let palette = median_cut::palette(colors, max_depth)?;
        Ok(assemble(palette, dedup_threshold))
    }

    /// Like [`swatches`](PalettePipeline::swatches), but runs the quantizer in parallel.
    ///
    /// # Errors
    /// Returns [`PaletteError::EmptyInput`] if the pipeline holds no colors.
    #[cfg(feature = "threads")]
    pub fn swatches_par(self) -> Result<Vec<Swatch>, PaletteError> {
        let Self { colors, max_depth, dedup_threshold } = self;
        let palette = median_cut::palette_par(colors, max_depth)?;
        Ok(assemble(palette, dedup_threshold))
    }
}

#[cfg(feature = "image")]
impl From<&RgbaImage> for PalettePipeline {
    fn from(image: &RgbaImage) -> Self {
        Self::new(
            image
                .pixels()
                .map(|&image::Rgba([red, green, blue, _])| Srgb::new(red, green, blue))
                .collect(),
        )
    }
}

/// Orders the palette by luminance and walks it once, dropping every color
/// closer than `dedup_threshold` to the last color that was kept,
/// then renders the survivors as swatches.
fn assemble(mut palette: Vec<Srgb<u8>>, dedup_threshold: u32) -> Vec<Swatch> {
    sort_by_luminance(&mut palette);

    let mut swatches: Vec<Swatch> = Vec::with_capacity(palette.len());
    for color in palette {
        if let Some(last_kept) = swatches.last() {
            if squared_distance(color, last_kept.color()) < dedup_threshold {
                continue;
            }
        }
        swatches.push(Swatch::new(color));
    }
    swatches
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{luminance, tests::*, DEFAULT_MAX_DEPTH};

    #[test]
    fn empty_input() {
        assert_eq!(
            PalettePipeline::new(Vec::new()).swatches(),
            Err(PaletteError::EmptyInput)
        );
    }

    #[test]
    fn default_options() {
        let pipeline = PalettePipeline::new(test_colors(16));
        assert_eq!(pipeline.max_depth.into_inner(), DEFAULT_MAX_DEPTH);
        assert_eq!(pipeline.dedup_threshold, DEFAULT_DEDUP_THRESHOLD);
    }

    #[test]
    fn rgba_byte_length_is_validated() {
        assert!(matches!(
            PalettePipeline::from_rgba_bytes(&[0; 7]),
            Err(PaletteError::InvalidBufferLength(7))
        ));
    }

    #[test]
    fn swatches_are_ordered_by_luminance() {
        let swatches = PalettePipeline::new(test_colors(1024)).swatches().unwrap();
        assert!(!swatches.is_empty());
        for pair in swatches.windows(2) {
            assert!(luminance(pair[0].color()) <= luminance(pair[1].color()));
        }
    }

    #[test]
    fn adjacent_swatches_stay_separated_at_every_threshold() {
        for threshold in [0, 1, 120, 1000, 5000] {
            let swatches = PalettePipeline::new(test_colors(512))
                .dedup_threshold(threshold)
                .swatches()
                .unwrap();

            assert!(!swatches.is_empty());
            for pair in swatches.windows(2) {
                let (darker, lighter) = (pair[0].color(), pair[1].color());
                assert!(luminance(darker) <= luminance(lighter));
                assert!(squared_distance(darker, lighter) >= threshold);
            }
        }
    }

    #[test]
    fn merging_compares_against_the_last_kept_swatch() {
        let base = Srgb::new(100, 100, 100);
        let near = Srgb::new(101, 100, 100); // distance 1 from base
        let far = Srgb::new(110, 104, 102); // distance 120 from base, 101 from near

        let swatches = PalettePipeline::new(vec![base, near, far]).swatches().unwrap();

        // `near` merges into `base`; `far` must then be measured against
        // `base`, not against the discarded `near`.
        let colors = swatches.iter().map(Swatch::color).collect::<Vec<_>>();
        assert_eq!(colors, [base, far]);
    }

    #[test]
    fn distance_at_the_threshold_is_kept() {
        let base = Srgb::new(100, 100, 100);
        let at_threshold = Srgb::new(110, 104, 102); // distance exactly 120

        let swatches = PalettePipeline::new(vec![base, at_threshold]).swatches().unwrap();
        assert_eq!(swatches.len(), 2);
    }

    #[test]
    fn distance_below_the_threshold_is_merged() {
        let base = Srgb::new(100, 100, 100);
        let below_threshold = Srgb::new(109, 106, 101); // distance 118

        let swatches = PalettePipeline::new(vec![base, below_threshold])
            .swatches()
            .unwrap();
        assert_eq!(swatches.len(), 1);
        assert_eq!(swatches[0].color(), base);
    }

    #[test]
    fn zero_threshold_keeps_identical_colors() {
        let colors = vec![Srgb::new(7, 7, 7); 4];
        let swatches = PalettePipeline::new(colors)
            .dedup_threshold(0)
            .swatches()
            .unwrap();
        assert_eq!(swatches.len(), 4);
    }

    #[test]
    fn gray_image_gives_one_swatch_without_complement() {
        let colors = vec![Srgb::new(128, 128, 128); 64];
        let swatches = PalettePipeline::new(colors).swatches().unwrap();

        assert_eq!(swatches.len(), 1);
        assert_eq!(swatches[0].color(), Srgb::new(128, 128, 128));
        assert_eq!(swatches[0].hex(), "#808080");
        assert!(swatches[0].complement().is_none());
    }

    #[test]
    fn four_pixel_image_keeps_all_corners() {
        let rgba = [
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 255, 255, 255, //
        ];
        let swatches = PalettePipeline::from_rgba_bytes(&rgba)
            .unwrap()
            .swatches()
            .unwrap();

        assert_eq!(swatches.len(), 4);
        // Darkest to brightest: blue, red, green, white.
        assert_eq!(swatches[0].hex(), "#0000FF");
        assert_eq!(swatches[1].hex(), "#FF0000");
        assert_eq!(swatches[2].hex(), "#00FF00");
        assert_eq!(swatches[3].hex(), "#FFFFFF");

        // Blue's complement is yellow; white has none.
        let complement = swatches[0].complement().unwrap();
        assert!((complement.hsl().hue - 60.0).abs() < 1e-4);
        assert_eq!(complement.hex(), "#FFFF00");
        assert!(swatches[3].complement().is_none());
    }

    #[cfg(feature = "threads")]
    #[test]
    fn single_and_multi_threaded_match() {
        let colors = test_colors(512);
        let single = PalettePipeline::new(colors.clone()).swatches().unwrap();
        let multi = PalettePipeline::new(colors).swatches_par().unwrap();
        assert_eq!(single, multi);
    }

    #[cfg(feature = "image")]
    #[test]
    fn image_and_byte_pipelines_match() {
        let bytes = test_rgba_bytes(64);
        let img = RgbaImage::from_raw(8, 8, bytes.clone()).unwrap();

        let from_image = PalettePipeline::from(&img).swatches().unwrap();
        let from_bytes = PalettePipeline::from_rgba_bytes(&bytes)
            .unwrap()
            .swatches()
            .unwrap();
        assert_eq!(from_image, from_bytes);
    }
}
