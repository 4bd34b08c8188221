// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Orthonormal 1D DCT-II and its inverse.
//!
//! `rustdct` computes the unnormalized DCT-II
//! `X[k] = Σ x[n]·cos(π(n+½)k/N)` and DCT-III
//! `x[n] = X[0]/2 + Σ_{k≥1} X[k]·cos(π(n+½)k/N)`.
//! We rescale both so that the pair is the orthonormal ("ortho") transform:
//! energy-preserving, with the inverse equal to the transpose.

use rustdct::DctPlanner;

/// Forward orthonormal DCT-II.
pub fn transform(vector: &[f64]) -> Vec<f64> {
    let n = vector.len();
    if n == 0 {
        return Vec::new();
    }

    let mut buffer = vector.to_vec();
    let mut planner = DctPlanner::<f64>::new();
    planner.plan_dct2(n).process_dct2(&mut buffer);

    let dc_scale = (1.0 / n as f64).sqrt();
    let ac_scale = (2.0 / n as f64).sqrt();
    buffer[0] *= dc_scale;
    for x in buffer.iter_mut().skip(1) {
        *x *= ac_scale;
    }
    buffer
}

/// Inverse of [`transform`] (orthonormal DCT-III).
pub fn inverse(coefficients: &[f64]) -> Vec<f64> {
    let n = coefficients.len();
    if n == 0 {
        return Vec::new();
    }

    // Undo the ortho scaling into rustdct's DCT-III input convention.
    let dc_scale = 2.0 * (1.0 / n as f64).sqrt();
    let ac_scale = (2.0 / n as f64).sqrt();
    let mut buffer = coefficients.to_vec();
    buffer[0] *= dc_scale;
    for x in buffer.iter_mut().skip(1) {
        *x *= ac_scale;
    }

    let mut planner = DctPlanner::<f64>::new();
    planner.plan_dct3(n).process_dct3(&mut buffer);
    buffer
}
