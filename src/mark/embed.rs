// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Blind DWT-DCT embedding into one image channel.
//!
//! For every payload bit `b` (±1) at selected pair position `j`:
//!
//! ```text
//! m      = (X1[j] + X2[j]) / 2
//! X1'[j] = m + gain·b
//! X2'[j] = m − gain·b
//! ```
//!
//! so the pair difference carries the bit with magnitude `2·gain` and the
//! extractor needs nothing but the sign of `X1 − X2`.

use log::debug;

use crate::transform::{bipolar, Channel};

use super::capacity::check_capacity;
use super::error::{Result, WatermarkError};
use super::selector::IndicesSelector;
use super::spectrum;

/// Embeds payload bytes into a single image channel.
pub trait ChannelEmbedder {
    /// Return a copy of `channel` carrying `watermark`.
    fn embed(&mut self, channel: &Channel, watermark: &[u8]) -> Result<Channel>;
}

impl<E: ChannelEmbedder + ?Sized> ChannelEmbedder for &mut E {
    fn embed(&mut self, channel: &Channel, watermark: &[u8]) -> Result<Channel> {
        (**self).embed(channel, watermark)
    }
}

/// Differential embedder over the DCT of the even/odd split `LL` subband.
#[derive(Debug, Clone)]
pub struct BlindDwtDctEmbedder<S> {
    gain: f64,
    selector: S,
}

impl<S: IndicesSelector> BlindDwtDctEmbedder<S> {
    /// `gain` trades visible distortion against robustness; `selector` spreads
    /// the bits over the coefficient pairs.
    pub fn new(gain: f64, selector: S) -> Self {
        Self { gain, selector }
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Give the selector back, e.g. to continue its stream elsewhere.
    pub fn into_selector(self) -> S {
        self.selector
    }
}

impl<S: IndicesSelector> ChannelEmbedder for BlindDwtDctEmbedder<S> {
    /// # Errors
    /// - [`WatermarkError::EmptyChannel`] if `channel` has no samples.
    /// - [`WatermarkError::EmptyWatermark`] if `watermark` is empty.
    /// - [`WatermarkError::WatermarkTooLarge`] if `watermark` exceeds
    ///   1/64 of the channel's pixel count, or the selector hands out fewer
    ///   positions than there are bits.
    ///
    /// # Panics
    /// If the selector returns a position outside the range it was asked for.
    fn embed(&mut self, channel: &Channel, watermark: &[u8]) -> Result<Channel> {
        if channel.is_empty() {
            return Err(WatermarkError::EmptyChannel);
        }
        if watermark.is_empty() {
            return Err(WatermarkError::EmptyWatermark);
        }
        let (rows, cols) = channel.shape();
        check_capacity(rows, cols, watermark.len())?;

        let mut spectrum = spectrum::analyze(channel);
        let bits = bipolar::bytes_to_bits(watermark);
        let positions = self.selector.select(spectrum.pair_count(), bits.len());
        if positions.len() < bits.len() {
            return Err(WatermarkError::WatermarkTooLarge {
                requested: watermark.len(),
                capacity: positions.len() / 8,
            });
        }

        debug!(
            "embedding {} bits into {rows}x{cols} channel ({} pairs, gain {})",
            bits.len(),
            spectrum.pair_count(),
            self.gain
        );

        for (&bit, &j) in bits.iter().zip(&positions) {
            let mean = (spectrum.x1[j] + spectrum.x2[j]) / 2.0;
            let delta = self.gain * f64::from(bit);
            spectrum.x1[j] = mean + delta;
            spectrum.x2[j] = mean - delta;
        }

        spectrum::synthesize(spectrum, rows, cols)
    }
}

/// Embedder backed by a closure, for stubbing the per-channel step when
/// testing code built on [`RgbEmbedder`](super::RgbEmbedder).
pub struct FnEmbedder<F>(pub F);

impl<F: FnMut(&Channel, &[u8]) -> Result<Channel>> FnEmbedder<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: FnMut(&Channel, &[u8]) -> Result<Channel>> ChannelEmbedder for FnEmbedder<F> {
    fn embed(&mut self, channel: &Channel, watermark: &[u8]) -> Result<Channel> {
        (self.0)(channel, watermark)
    }
}
