// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Seeded selection of coefficient positions.
//!
//! [`PermutationSelector`] picks a random window `[lo, hi)` of the position
//! range, shuffles it with a ChaCha20-driven Fisher-Yates and keeps the first
//! `count` entries. This is not a uniform draw over all subsets: embedder and
//! extractor only agree when both run this exact procedure.
//!
//! # Call order
//!
//! The selector owns one generator stream that advances with every call.
//! Two selectors built from the same seed return the same positions only if
//! they see the same sequence of `(range, count)` calls in the same order,
//! e.g. one call per channel, red then green then blue. A selector is not
//! meant to be shared between concurrent sessions.
//!
//! # Cross-platform portability
//!
//! All draws go through `u64` ranges, never `usize`, so that 32-bit and 64-bit
//! targets consume the same amount of generator output per step.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Source of distinct positions in `0..range`.
pub trait IndicesSelector {
    /// Return up to `count` distinct indices in `0..range`.
    ///
    /// Returns exactly `min(range, count)` indices, and none if either is zero.
    fn select(&mut self, range: usize, count: usize) -> Vec<usize>;
}

impl<S: IndicesSelector + ?Sized> IndicesSelector for &mut S {
    fn select(&mut self, range: usize, count: usize) -> Vec<usize> {
        (**self).select(range, count)
    }
}

/// Seeded "random window, then shuffle" selector.
#[derive(Debug, Clone)]
pub struct PermutationSelector {
    rng: ChaCha20Rng,
}

impl PermutationSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl IndicesSelector for PermutationSelector {
    fn select(&mut self, range: usize, count: usize) -> Vec<usize> {
        if range == 0 || count == 0 {
            return Vec::new();
        }
        let count = count.min(range);

        // Window [lo, hi) with lo in [0, range - count] and hi in [lo + count, range].
        let lo = self.rng.gen_range(0..=(range - count) as u64);
        let hi = self.rng.gen_range(lo + count as u64..=range as u64);

        let mut window: Vec<usize> = (lo as usize..hi as usize).collect();
        shuffle_portable(&mut window, &mut self.rng);
        window.truncate(count);
        window
    }
}

/// Fisher-Yates shuffle drawing `u64` swap targets.
fn shuffle_portable(items: &mut [usize], rng: &mut ChaCha20Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=(i as u64)) as usize;
        items.swap(i, j);
    }
}

/// Selector backed by a closure, e.g. a fixed `0..count` sequence for
/// reproducible golden outputs.
pub struct FnSelector<F>(pub F);

impl<F: FnMut(usize, usize) -> Vec<usize>> FnSelector<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: FnMut(usize, usize) -> Vec<usize>> IndicesSelector for FnSelector<F> {
    fn select(&mut self, range: usize, count: usize) -> Vec<usize> {
        (self.0)(range, count)
    }
}
