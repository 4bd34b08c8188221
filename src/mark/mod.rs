// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Blind DWT-DCT watermark embedding and extraction.
//!
//! Per channel, the payload is spread over DCT coefficient pairs of the
//! wavelet approximation subband:
//!
//! 1. Haar-decompose the channel and zigzag-scan `LL` into a vector.
//! 2. Split the vector into even/odd halves and DCT both.
//! 3. For each payload bit, pull one coefficient pair onto its mean and push
//!    the two apart by `±gain` according to the bit.
//! 4. Invert every step and crop back to the original shape.
//!
//! Extraction repeats steps 1–2 and reads bit signs. A seeded
//! [`PermutationSelector`] decides which pairs carry which bits; the same seed
//! and the same red→green→blue call order are needed on both ends.

pub mod capacity;
pub mod embed;
pub mod error;
pub mod extract;
pub mod rgb;
pub mod selector;
mod spectrum;

pub use capacity::watermark_capacity;
pub use embed::{BlindDwtDctEmbedder, ChannelEmbedder, FnEmbedder};
pub use error::WatermarkError;
pub use extract::{BlindDwtDctExtractor, ChannelExtractor, FnExtractor};
pub use rgb::{ChannelSelection, Color, RgbChannels, RgbEmbedder, RgbExtractor, WatermarkShape};
pub use selector::{FnSelector, IndicesSelector, PermutationSelector};

/// Default selector seed.
pub const DEFAULT_SEED: u64 = 1_234_567_890;

/// Default embedding strength.
pub const DEFAULT_GAIN: f64 = 1.0;

/// Default expected watermark size for extraction, as `WxH`.
pub const DEFAULT_WATERMARK_SHAPE: &str = "32x32";

/// Default channel selection.
pub const DEFAULT_CHANNELS: &str = "rgb";
