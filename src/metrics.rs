//! Distance and brightness metrics on sRGB colors.

use ordered_float::OrderedFloat;
use palette::Srgb;

/// The squared Euclidean distance between two colors in sRGB space.
///
/// The square root is left out since the distance is only ever compared
/// against thresholds. Identical colors have a distance of `0`, and the
/// maximum possible distance is `3 * 255^2`.
///
/// # Examples
/// ```
/// # use swatchette::squared_distance;
/// # use palette::Srgb;
/// let red = Srgb::new(255, 0, 0);
/// let green = Srgb::new(0, 255, 0);
/// assert_eq!(squared_distance(red, red), 0);
/// assert_eq!(squared_distance(red, green), 2 * 255 * 255);
/// ```
#[must_use]
pub fn squared_distance(a: Srgb<u8>, b: Srgb<u8>) -> u32 {
    let red = u32::from(a.red.abs_diff(b.red));
    let green = u32::from(a.green.abs_diff(b.green));
    let blue = u32::from(a.blue.abs_diff(b.blue));
    red * red + green * green + blue * blue
}

/// The relative luminance of a color, on the raw `0` to `255` channel scale.
///
/// Uses the BT.709 coefficients: `0.2126 R + 0.7152 G + 0.0722 B`.
#[must_use]
pub fn luminance(color: Srgb<u8>) -> f32 {
    0.2126 * f32::from(color.red) + 0.7152 * f32::from(color.green) + 0.0722 * f32::from(color.blue)
}

/// Sorts the colors by ascending [`luminance`], darkest first.
///
/// The sort is stable, so equally bright colors keep their relative order.
pub fn sort_by_luminance(colors: &mut [Srgb<u8>]) {
    colors.sort_by_key(|&color| OrderedFloat(luminance(color)));
}
