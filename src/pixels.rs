//! Extraction of colors from raw RGBA pixel data.

use crate::PaletteError;
use palette::{cast::ComponentsAs, Srgb, Srgba};

/// Collects the colors of an interleaved RGBA byte buffer, discarding the alpha channel.
///
/// The buffer is expected to hold one byte per channel in `R, G, B, A` order,
/// as produced by common image decoders and canvas APIs.
/// Transparency plays no part in palette extraction, so the alpha byte is dropped.
///
/// # Errors
/// Returns [`PaletteError::InvalidBufferLength`] if the buffer length
/// is not a multiple of `4`.
///
/// # Examples
/// ```
/// # use swatchette::{rgb_pixels, PaletteError};
/// # use palette::Srgb;
/// # fn main() -> Result<(), PaletteError> {
/// let rgba = [255, 0, 0, 255, 0, 0, 255, 128];
/// let colors = rgb_pixels(&rgba)?;
/// assert_eq!(colors, [Srgb::new(255, 0, 0), Srgb::new(0, 0, 255)]);
/// # Ok(())
/// # }
/// ```
pub fn rgb_pixels(rgba: &[u8]) -> Result<Vec<Srgb<u8>>, PaletteError> {
    if rgba.len() % 4 != 0 {
        return Err(PaletteError::InvalidBufferLength(rgba.len()));
    }

    let pixels: &[Srgba<u8>] = rgba.components_as();
    Ok(pixels.iter().map(|pixel| pixel.color).collect())
}
