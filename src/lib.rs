//! A library for extracting small, display-ready color palettes from images.
//!
//! `swatchette` reduces the colors of an RGBA image with a recursive median cut,
//! orders the resulting palette by relative luminance, merges near-duplicate
//! entries, and renders each remaining color as an uppercase `#RRGGBB` hex string
//! together with its complementary color (when one is defined).
//!
//! # Features
//! To reduce dependencies and compile times, `swatchette` has several `cargo` features
//! that can be turned off or on:
//! - `threads`: exposes parallel versions of the quantizer and the pipeline via [`rayon`].
//! - `image`: enables integration with the [`image`] crate.
//! - `serde`: implements `Serialize` and `Deserialize` for the output swatch types.
//!
//! # High-Level API
//! To get started, see [`PalettePipeline`].
//! It has examples in its documentation, but here is an additional one:
//! ```no_run
//! # use swatchette::{PalettePipeline, MaxDepth};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("some image")?.into_rgba8();
//!
//! let swatches = PalettePipeline::from(&img)
//!     .max_depth(MaxDepth::try_from(3)?) // at most 2^3 = 8 colors
//!     .dedup_threshold(200) // merge colors more aggressively
//!     .swatches()?;
//!
//! for swatch in &swatches {
//!     println!("{}", swatch.hex());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The lower-level pieces of the pipeline (the [`median_cut`] quantizer, the
//! [`luminance`] and [`squared_distance`] metrics, and the [`complementary_hsl`]
//! and hex conversions) are exported as well for callers that only need a part.

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal,
    clippy::wildcard_imports
)]

mod convert;
mod metrics;
mod pipeline;
mod pixels;
mod types;

pub mod median_cut;

pub use convert::*;
pub use metrics::*;
pub use pipeline::*;
pub use pixels::*;
pub use types::*;

/// The maximum supported median cut recursion depth is `8`.
pub const MAX_DEPTH: u8 = 8;

/// The default median cut recursion depth is `4`, giving at most `2^4 = 16` palette colors.
pub const DEFAULT_MAX_DEPTH: u8 = 4;

/// The default squared distance below which adjacent palette colors are merged is `120`.
pub const DEFAULT_DEDUP_THRESHOLD: u32 = 120;

/// The maximum supported number of palette colors is `256` (that is, `2^`[`MAX_DEPTH`]).
pub const MAX_SWATCHES: u16 = 1 << MAX_DEPTH;

#[cfg(test)]
pub(crate) mod tests {
    //! Deterministic data shared by the test modules.

    use palette::Srgb;
    use rand::prelude::*;
    use rand_xoshiro::Xoroshiro128PlusPlus;

    /// Seeded colors, so every run of the tests sees the same sample set.
    pub fn test_colors(n: usize) -> Vec<Srgb<u8>> {
        let mut rng = Xoroshiro128PlusPlus::seed_from_u64(42);
        (0..n)
            .map(|_| Srgb::new(rng.gen(), rng.gen(), rng.gen()))
            .collect()
    }

    /// The same colors flattened into an RGBA byte buffer with opaque alpha.
    pub fn test_rgba_bytes(n: usize) -> Vec<u8> {
        test_colors(n)
            .into_iter()
            .flat_map(|color| [color.red, color.green, color.blue, 255])
            .collect()
    }
}
