#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::path::PathBuf;

use clap::Parser;
use swatchette::{MaxDepth, PalettePipeline, DEFAULT_DEDUP_THRESHOLD};

#[derive(Parser)]
pub struct Options {
    /// Maximum median cut depth; the palette has at most 2^depth colors.
    #[arg(short, long, default_value_t = MaxDepth::default(), value_parser = parse_max_depth)]
    depth: MaxDepth,

    /// Squared distance below which adjacent palette colors are merged.
    #[arg(short, long, default_value_t = DEFAULT_DEDUP_THRESHOLD)]
    threshold: u32,

    #[arg(long)]
    verbose: bool,

    input: PathBuf,
}

fn parse_max_depth(s: &str) -> Result<MaxDepth, String> {
    let value: u8 = s.parse().map_err(|e| format!("{e}"))?;
    value.try_into().map_err(|e| format!("{e}"))
}

fn main() {
    let Options { depth, threshold, verbose, input } = Options::parse();

    macro_rules! log {
        ($name: literal, $val: expr) => {
            if verbose {
                let time = std::time::Instant::now();
                let value = $val;
                println!("{} took {}ms", $name, time.elapsed().as_millis());
                value
            } else {
                $val
            }
        };
    }

    let image = log!("read image", image::open(input).unwrap().into_rgba8());

    let pipeline = PalettePipeline::from(&image)
        .max_depth(depth)
        .dedup_threshold(threshold);

    let swatches = log!("palette extraction", pipeline.swatches().unwrap());

    for swatch in &swatches {
        match swatch.complement() {
            Some(complement) => println!(
                "{} complement {} {}",
                swatch.hex(),
                complement.hex(),
                complement.hsl()
            ),
            None => println!("{}", swatch.hex()),
        }
    }
}
