// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Single-level 2D Haar wavelet transform.
//!
//! Each 2×2 block `a b / c d` of the (even-padded) input maps to one
//! coefficient in each subband:
//!
//! ```text
//! LL = (a + b + c + d) / 2      approximation
//! HL = (a + b - c - d) / 2      horizontal detail
//! LH = (a - b + c - d) / 2      vertical detail
//! HH = (a - b - c + d) / 2      diagonal detail
//! ```
//!
//! The basis is orthonormal, so [`reconstruct`] is the exact inverse. Odd
//! heights or widths are padded by repeating the last row/column before
//! analysis; the reconstructed grid keeps that padding and the caller crops
//! it back to the original shape.

use super::channel::Channel;
use super::error::{Result, TransformError};

/// The four subbands of a single-level decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Subbands {
    pub ll: Channel,
    pub hl: Channel,
    pub lh: Channel,
    pub hh: Channel,
}

/// Decompose a channel into `LL`, `HL`, `LH` and `HH`.
///
/// Every subband is `ceil(rows / 2) × ceil(cols / 2)`.
pub fn decompose(channel: &Channel) -> Subbands {
    let padded = channel.padded_even();
    let rows = padded.rows() / 2;
    let cols = padded.cols() / 2;

    let mut ll = Channel::new(rows, cols);
    let mut hl = Channel::new(rows, cols);
    let mut lh = Channel::new(rows, cols);
    let mut hh = Channel::new(rows, cols);

    for i in 0..rows {
        for j in 0..cols {
            let a = padded.get(2 * i, 2 * j);
            let b = padded.get(2 * i, 2 * j + 1);
            let c = padded.get(2 * i + 1, 2 * j);
            let d = padded.get(2 * i + 1, 2 * j + 1);

            ll.set(i, j, (a + b + c + d) / 2.0);
            hl.set(i, j, (a + b - c - d) / 2.0);
            lh.set(i, j, (a - b + c - d) / 2.0);
            hh.set(i, j, (a - b - c + d) / 2.0);
        }
    }

    Subbands { ll, hl, lh, hh }
}

/// Rebuild a channel from its subbands.
///
/// The result is `2·rows × 2·cols` of the subband shape, i.e. it still carries
/// any even-padding added by [`decompose`].
///
/// # Errors
/// [`TransformError::SubbandShapeMismatch`] if the subbands differ in shape.
pub fn reconstruct(bands: &Subbands) -> Result<Channel> {
    let shape = bands.ll.shape();
    if bands.hl.shape() != shape || bands.lh.shape() != shape || bands.hh.shape() != shape {
        return Err(TransformError::SubbandShapeMismatch);
    }

    let (rows, cols) = shape;
    let mut out = Channel::new(rows * 2, cols * 2);

    for i in 0..rows {
        for j in 0..cols {
            let l = bands.ll.get(i, j);
            let h = bands.hl.get(i, j);
            let v = bands.lh.get(i, j);
            let d = bands.hh.get(i, j);

            out.set(2 * i, 2 * j, (l + h + v + d) / 2.0);
            out.set(2 * i, 2 * j + 1, (l + h - v - d) / 2.0);
            out.set(2 * i + 1, 2 * j, (l - h + v - d) / 2.0);
            out.set(2 * i + 1, 2 * j + 1, (l - h - v + d) / 2.0);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Channel, b: &Channel) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.samples().iter().zip(b.samples()) {
            assert!((x - y).abs() < 1e-9, "{x} != {y}");
        }
    }

    #[test]
    fn round_trip_even() {
        let ch = Channel::from_rows(&[[0.0, 1.0, 2.0, 4.0], [8.0, 16.0, 32.0, 64.0]]).unwrap();
        let rebuilt = reconstruct(&decompose(&ch)).unwrap();
        assert_close(&rebuilt, &ch);
    }

    #[test]
    fn round_trip_odd_shapes() {
        for &(rows, cols) in &[(1, 1), (1, 7), (7, 1), (3, 5), (5, 4), (9, 9)] {
            let samples: Vec<f64> = (0..rows * cols).map(|i| ((i * 37) % 256) as f64).collect();
            let ch = Channel::from_vec(rows, cols, samples).unwrap();
            let rebuilt = reconstruct(&decompose(&ch)).unwrap();
            assert_eq!(rebuilt.shape(), (rows + rows % 2, cols + cols % 2));
            assert_close(&rebuilt.crop(rows, cols), &ch);
        }
    }

    #[test]
    fn subband_shape() {
        let bands = decompose(&Channel::new(5, 8));
        assert_eq!(bands.ll.shape(), (3, 4));
        assert_eq!(bands.hh.shape(), (3, 4));
    }

    #[test]
    fn constant_channel_has_no_detail() {
        let bands = decompose(&Channel::filled(4, 4, 128.0));
        assert!(bands.ll.samples().iter().all(|&v| v == 256.0));
        for band in [&bands.hl, &bands.lh, &bands.hh] {
            assert!(band.samples().iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn known_block() {
        let ch = Channel::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let bands = decompose(&ch);
        assert_eq!(bands.ll.get(0, 0), 5.0);
        assert_eq!(bands.hl.get(0, 0), -2.0);
        assert_eq!(bands.lh.get(0, 0), -1.0);
        assert_eq!(bands.hh.get(0, 0), 0.0);
    }

    #[test]
    fn mismatched_subbands_rejected() {
        let mut bands = decompose(&Channel::new(4, 4));
        bands.hh = Channel::new(1, 2);
        assert_eq!(reconstruct(&bands), Err(TransformError::SubbandShapeMismatch));
    }
}
