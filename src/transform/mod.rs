// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Numeric building blocks of the watermark pipeline.
//!
//! Every function here is pure: it takes its input by reference and returns a
//! fresh result. Stages in pipeline order:
//!
//! - [`dwt`]: single-level Haar decomposition into `LL/HL/LH/HH`.
//! - [`zigzag`]: `LL` grid ⇄ frequency-ordered vector.
//! - [`correlation`]: vector ⇄ even/odd halves.
//! - [`dct`]: orthonormal DCT-II and inverse.
//! - [`bipolar`]: payload bytes ⇄ ±1 bits.

pub mod bipolar;
pub mod channel;
pub mod correlation;
pub mod dct;
pub mod dwt;
pub mod error;
pub mod zigzag;

pub use channel::Channel;
pub use dwt::Subbands;
pub use error::TransformError;
