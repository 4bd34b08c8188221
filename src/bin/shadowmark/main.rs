// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! shadowmark: embed or extract a blind DWT-DCT watermark.
//!
//! With `--embed PATH` the watermark image at PATH is hidden in `--image` and
//! the result written to `--output`. Without it, a `--extract WxH` watermark
//! is read from `--image` and written to `--output` as an image.
//!
//! Empty-input and capacity errors are reported on stderr and nothing is
//! written. Set `RUST_LOG=debug` for per-channel progress.

mod args;

use std::process::ExitCode;

use anyhow::Context;
use args::Args;
use clap::Parser;
use log::info;

use shadowmark::{
    image_io, watermark_capacity, BlindDwtDctEmbedder, BlindDwtDctExtractor, PermutationSelector, RgbEmbedder,
    RgbExtractor, WatermarkError,
};

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let input = image_io::load_channels(&args.image)
        .with_context(|| format!("failed to read input image {}", args.image.display()))?;
    let (rows, cols) = input[0].shape();
    info!(
        "input {}x{}, capacity {} bytes per channel, channels '{}'",
        cols,
        rows,
        watermark_capacity(rows, cols),
        args.channels
    );

    let mut selector = PermutationSelector::new(args.seed);

    let result = match &args.embed {
        Some(watermark_path) => {
            let watermark = image_io::load_channels(watermark_path)
                .with_context(|| format!("failed to read watermark image {}", watermark_path.display()))?;
            info!("embedding {} with gain {}", watermark_path.display(), args.gain);
            let mut embedder = RgbEmbedder::new(BlindDwtDctEmbedder::new(args.gain, &mut selector), args.channels);
            embedder.embed(&input, &watermark)
        }
        None => {
            info!("extracting {} watermark", args.extract);
            let mut extractor = RgbExtractor::new(BlindDwtDctExtractor::new(&mut selector), args.channels);
            extractor.extract(&input, args.extract)
        }
    };

    let output = match result {
        Ok(channels) => channels,
        Err(e @ (WatermarkError::EmptyChannel
        | WatermarkError::EmptyWatermark
        | WatermarkError::WatermarkTooLarge { .. })) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    image_io::save_channels(&args.output, &output)
        .with_context(|| format!("failed to write output image {}", args.output.display()))?;
    info!("wrote {}", args.output.display());
    Ok(ExitCode::SUCCESS)
}
