// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Even/odd interleave split of a coefficient vector.
//!
//! Neighbouring zigzag coefficients are strongly correlated, so the even and
//! odd halves carry nearly the same spectrum. The embedder encodes each bit in
//! the difference between the two halves at one frequency.

/// Split into even-indexed and odd-indexed samples.
///
/// For odd lengths the even half is one element longer.
pub fn split(vector: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let even = vector.iter().step_by(2).copied().collect();
    let odd = vector.iter().skip(1).step_by(2).copied().collect();
    (even, odd)
}

/// Interleave two halves back into one vector, starting with `even`.
///
/// When one half runs out the rest of the other is appended without padding,
/// so the output length is always `even.len() + odd.len()`.
pub fn merge(even: &[f64], odd: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(even.len() + odd.len());
    let mut evens = even.iter();
    let mut odds = odd.iter();
    loop {
        match (evens.next(), odds.next()) {
            (None, None) => break,
            (e, o) => {
                out.extend(e);
                out.extend(o);
            }
        }
    }
    out
}
