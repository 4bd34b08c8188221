// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! # shadowmark
//!
//! Blind watermarking of RGB images in the wavelet/DCT domain. A watermark
//! image is hidden in the host image's color planes and can later be read
//! back without the unmarked original.
//!
//! - [`transform`]: pure numeric stages (Haar DWT, zigzag scan, even/odd
//!   split, orthonormal DCT, bipolar bit codec) over the [`Channel`] grid.
//! - [`mark`]: the per-channel embedder/extractor, the seeded position
//!   selector and the RGB fan-out.
//! - [`image_io`]: image files ⇄ three `f64` planes.
//!
//! The seed is a spreading key, not encryption: anyone who knows it can read
//! or strip the watermark.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use shadowmark::{image_io, BlindDwtDctEmbedder, ChannelSelection, PermutationSelector, RgbEmbedder};
//!
//! let host = image_io::load_channels("photo.png")?;
//! let mark = image_io::load_channels("logo.png")?;
//! let mut selector = PermutationSelector::new(42);
//! let mut rgb = RgbEmbedder::new(BlindDwtDctEmbedder::new(1.0, &mut selector), ChannelSelection::ALL);
//! image_io::save_channels("marked.png", &rgb.embed(&host, &mark)?)?;
//! ```

pub mod image_io;
pub mod mark;
pub mod transform;

pub use image_io::{load_channels, save_channels, ImageIoError};
pub use mark::{
    watermark_capacity, BlindDwtDctEmbedder, BlindDwtDctExtractor, ChannelEmbedder, ChannelExtractor,
    ChannelSelection, Color, FnEmbedder, FnExtractor, FnSelector, IndicesSelector, PermutationSelector, RgbChannels,
    RgbEmbedder, RgbExtractor, WatermarkError, WatermarkShape,
};
pub use mark::{DEFAULT_CHANNELS, DEFAULT_GAIN, DEFAULT_SEED, DEFAULT_WATERMARK_SHAPE};
pub use transform::{Channel, TransformError};
