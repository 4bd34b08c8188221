// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Shared analysis/synthesis path of embedder and extractor.
//!
//! ```text
//! channel ─dwt→ LL ─zigzag→ A ─split→ (x1, x2) ─dct→ (X1, X2)
//! ```
//!
//! Both sides must run exactly this chain so that position `j` names the same
//! coefficient pair on either end.

use crate::transform::{correlation, dct, dwt, zigzag, Channel, Subbands};

use super::error::Result;

/// DCT spectra of the even and odd halves of the zigzagged `LL` subband.
pub(crate) struct PairSpectrum {
    /// Subbands of the analyzed channel. `ll` is kept for its shape.
    pub bands: Subbands,
    pub x1: Vec<f64>,
    pub x2: Vec<f64>,
    /// Length of the zigzag vector before the split.
    pub approx_len: usize,
}

impl PairSpectrum {
    /// Number of addressable coefficient pairs, `floor(approx_len / 2)`.
    pub fn pair_count(&self) -> usize {
        self.approx_len / 2
    }
}

/// Forward path: wavelet, zigzag, split, DCT.
pub(crate) fn analyze(channel: &Channel) -> PairSpectrum {
    let bands = dwt::decompose(channel);
    let approx = zigzag::scan(&bands.ll);
    let (even, odd) = correlation::split(&approx);
    PairSpectrum {
        x1: dct::transform(&even),
        x2: dct::transform(&odd),
        approx_len: approx.len(),
        bands,
    }
}

/// Inverse path: IDCT, merge, unscan, inverse wavelet, crop to `rows × cols`.
pub(crate) fn synthesize(spectrum: PairSpectrum, rows: usize, cols: usize) -> Result<Channel> {
    let PairSpectrum { mut bands, x1, x2, .. } = spectrum;
    let approx = correlation::merge(&dct::inverse(&x1), &dct::inverse(&x2));
    let (ll_rows, ll_cols) = bands.ll.shape();
    bands.ll = zigzag::unscan(&approx, ll_rows, ll_cols)?;
    Ok(dwt::reconstruct(&bands)?.crop(rows, cols))
}
