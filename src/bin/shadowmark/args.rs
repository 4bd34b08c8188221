// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use shadowmark::{ChannelSelection, WatermarkShape, DEFAULT_CHANNELS, DEFAULT_GAIN, DEFAULT_SEED, DEFAULT_WATERMARK_SHAPE};

#[derive(Parser, Debug)]
#[command(
    name = "shadowmark",
    version,
    about = "Embeds/extracts a watermark to/from an image using a blind DWT-DCT approach."
)]
pub struct Args {
    /// Input image for watermark embedding/extraction
    #[arg(short, long, value_name = "PATH")]
    pub image: PathBuf,

    /// Output image: the watermarked image with --embed, the extracted
    /// watermark image otherwise
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Watermark image to embed into the input image
    #[arg(short, long, value_name = "PATH")]
    pub embed: Option<PathBuf>,

    /// Expected size of the embedded watermark when extracting, as WxH
    #[arg(short = 'x', long, value_name = "WxH", default_value = DEFAULT_WATERMARK_SHAPE)]
    pub extract: WatermarkShape,

    /// Seed for the position selector. Embedding and extraction must use the
    /// same seed. It hides the watermark positions but is not a cryptographic key.
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Embedding strength. Higher values survive more distortion but show
    /// more in the image. Only used with --embed.
    #[arg(short, long, default_value_t = DEFAULT_GAIN)]
    pub gain: f64,

    /// Channels to use: any combination of 'r', 'g', 'b' (case and order do
    /// not matter, other characters are ignored)
    #[arg(short, long, default_value = DEFAULT_CHANNELS, value_parser = parse_channels)]
    pub channels: ChannelSelection,
}

fn parse_channels(s: &str) -> Result<ChannelSelection, String> {
    Ok(ChannelSelection::parse(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["shadowmark", "-i", "in.png", "-o", "out.png"]).unwrap();
        assert!(args.embed.is_none());
        assert_eq!(args.extract, WatermarkShape::new(32, 32));
        assert_eq!(args.seed, 1_234_567_890);
        assert_eq!(args.gain, 1.0);
        assert_eq!(args.channels, ChannelSelection::ALL);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "shadowmark", "-i", "in.png", "-o", "out.png", "-e", "mark.png", "-x", "16x8", "-s", "7", "-g", "2.5",
            "-c", "GB",
        ])
        .unwrap();
        assert_eq!(args.embed, Some(PathBuf::from("mark.png")));
        assert_eq!(args.extract, WatermarkShape::new(16, 8));
        assert_eq!(args.seed, 7);
        assert_eq!(args.gain, 2.5);
        assert_eq!(args.channels, ChannelSelection::parse("gb"));
    }

    #[test]
    fn input_and_output_required() {
        assert!(Args::try_parse_from(["shadowmark", "-o", "out.png"]).is_err());
        assert!(Args::try_parse_from(["shadowmark", "-i", "in.png"]).is_err());
    }

    #[test]
    fn malformed_shape_rejected() {
        assert!(Args::try_parse_from(["shadowmark", "-i", "a", "-o", "b", "-x", "32"]).is_err());
    }
}
