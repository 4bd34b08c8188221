// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Blind DWT-DCT extraction from one image channel.
//!
//! Re-runs the embedder's analysis path and reads each bit as the sign of
//! `X1[j] − X2[j]` at the positions the selector hands out. The original
//! image is not needed; the selector must replay the embedder's call sequence.

use log::debug;

use crate::transform::{bipolar, Channel};

use super::capacity::check_capacity;
use super::error::{Result, WatermarkError};
use super::selector::IndicesSelector;
use super::spectrum;

/// Recovers payload bytes from a single image channel.
pub trait ChannelExtractor {
    /// Read `size` payload bytes from `channel`.
    fn extract(&mut self, channel: &Channel, size: usize) -> Result<Vec<u8>>;
}

impl<X: ChannelExtractor + ?Sized> ChannelExtractor for &mut X {
    fn extract(&mut self, channel: &Channel, size: usize) -> Result<Vec<u8>> {
        (**self).extract(channel, size)
    }
}

/// Counterpart of [`BlindDwtDctEmbedder`](super::embed::BlindDwtDctEmbedder).
#[derive(Debug, Clone)]
pub struct BlindDwtDctExtractor<S> {
    selector: S,
}

impl<S: IndicesSelector> BlindDwtDctExtractor<S> {
    pub fn new(selector: S) -> Self {
        Self { selector }
    }

    pub fn into_selector(self) -> S {
        self.selector
    }
}

impl<S: IndicesSelector> ChannelExtractor for BlindDwtDctExtractor<S> {
    /// Returns an empty payload when `size` is 0.
    ///
    /// # Errors
    /// - [`WatermarkError::EmptyChannel`] if `channel` has no samples.
    /// - [`WatermarkError::WatermarkTooLarge`] if `size` exceeds 1/64 of the
    ///   channel's pixel count, or the selector hands out fewer positions than
    ///   `8 * size`.
    fn extract(&mut self, channel: &Channel, size: usize) -> Result<Vec<u8>> {
        if channel.is_empty() {
            return Err(WatermarkError::EmptyChannel);
        }
        let (rows, cols) = channel.shape();
        check_capacity(rows, cols, size)?;
        if size == 0 {
            return Ok(Vec::new());
        }

        let spectrum = spectrum::analyze(channel);
        let bit_count = size * 8;
        let positions = self.selector.select(spectrum.pair_count(), bit_count);
        if positions.len() < bit_count {
            return Err(WatermarkError::WatermarkTooLarge {
                requested: size,
                capacity: positions.len() / 8,
            });
        }

        debug!(
            "extracting {bit_count} bits from {rows}x{cols} channel ({} pairs)",
            spectrum.pair_count()
        );

        let bits: Vec<i8> = positions
            .iter()
            .map(|&j| if spectrum.x1[j] - spectrum.x2[j] >= 0.0 { 1 } else { -1 })
            .collect();
        Ok(bipolar::bits_to_bytes(&bits))
    }
}

/// Extractor backed by a closure, for stubbing the per-channel step when
/// testing code built on [`RgbExtractor`](super::RgbExtractor).
pub struct FnExtractor<F>(pub F);

impl<F: FnMut(&Channel, usize) -> Result<Vec<u8>>> FnExtractor<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: FnMut(&Channel, usize) -> Result<Vec<u8>>> ChannelExtractor for FnExtractor<F> {
    fn extract(&mut self, channel: &Channel, size: usize) -> Result<Vec<u8>> {
        (self.0)(channel, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::embed::{BlindDwtDctEmbedder, ChannelEmbedder};
    use crate::mark::selector::{FnSelector, PermutationSelector};

    fn leading() -> FnSelector<impl FnMut(usize, usize) -> Vec<usize>> {
        FnSelector::new(|_range, count| (0..count).collect())
    }

    fn textured(rows: usize, cols: usize) -> Channel {
        let samples = (0..rows * cols)
            .map(|i| 40.0 + ((i * 7919 + i / cols * 104_729) % 170) as f64)
            .collect();
        Channel::from_vec(rows, cols, samples).unwrap()
    }

    #[test]
    fn empty_channel_rejected() {
        let mut extractor = BlindDwtDctExtractor::new(leading());
        for ch in [Channel::new(2, 0), Channel::new(0, 0)] {
            let err = extractor.extract(&ch, 0).unwrap_err();
            assert_eq!(err, WatermarkError::EmptyChannel);
            assert!(err.is_channel_error());
        }
    }

    #[test]
    fn oversized_request_rejected() {
        let mut extractor = BlindDwtDctExtractor::new(leading());
        let ch = Channel::from_rows(&[[0.0, 64.0, 128.0, 255.0], [0.0, 64.0, 128.0, 255.0]]).unwrap();
        assert!(extractor.extract(&ch, 4).unwrap_err().is_capacity_error());
    }

    #[test]
    fn zero_size_is_empty() {
        let mut extractor = BlindDwtDctExtractor::new(leading());
        let ch = Channel::from_rows(&[[0.0, 255.0], [255.0, 0.0]]).unwrap();
        assert_eq!(extractor.extract(&ch, 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn golden_square() {
        let rows: [[f64; 8]; 8] = [
            [127.0, 127.0, 128.0, 128.0, 127.0, 127.0, 128.0, 128.0],
            [127.0, 127.0, 128.0, 128.0, 127.0, 127.0, 128.0, 128.0],
            [128.0, 128.0, 128.0, 128.0, 127.0, 127.0, 128.0, 128.0],
            [128.0, 128.0, 128.0, 128.0, 127.0, 127.0, 128.0, 128.0],
            [127.0, 127.0, 128.0, 128.0, 127.0, 127.0, 127.0, 127.0],
            [127.0, 127.0, 128.0, 128.0, 127.0, 127.0, 127.0, 127.0],
            [127.0, 127.0, 128.0, 128.0, 128.0, 128.0, 127.0, 127.0],
            [127.0, 127.0, 128.0, 128.0, 128.0, 128.0, 127.0, 127.0],
        ];
        let ch = Channel::from_rows(&rows).unwrap();
        let mut extractor = BlindDwtDctExtractor::new(leading());
        assert_eq!(extractor.extract(&ch, 1).unwrap(), vec![128]);
    }

    #[test]
    fn round_trip_with_seeded_selector() {
        let ch = textured(64, 48);
        let payload: Vec<u8> = (0..48u32).map(|i| (i * 37 + 11) as u8).collect();

        let mut embedder = BlindDwtDctEmbedder::new(1.0, PermutationSelector::new(99));
        let marked = embedder.embed(&ch, &payload).unwrap();

        let mut extractor = BlindDwtDctExtractor::new(PermutationSelector::new(99));
        assert_eq!(extractor.extract(&marked, payload.len()).unwrap(), payload);
    }

    #[test]
    fn round_trip_odd_shape() {
        let ch = textured(33, 41);
        let payload = b"odd!".to_vec();

        let mut embedder = BlindDwtDctEmbedder::new(0.5, PermutationSelector::new(5));
        let marked = embedder.embed(&ch, &payload).unwrap();
        assert_eq!(marked.shape(), (33, 41));

        let mut extractor = BlindDwtDctExtractor::new(PermutationSelector::new(5));
        assert_eq!(extractor.extract(&marked, payload.len()).unwrap(), payload);
    }

    #[test]
    fn short_selection_is_an_error() {
        let mut extractor = BlindDwtDctExtractor::new(FnSelector::new(|_range, _count| vec![0]));
        let err = extractor.extract(&Channel::filled(8, 8, 1.0), 1).unwrap_err();
        assert!(err.is_capacity_error());
    }
}
