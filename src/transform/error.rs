// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the numeric transforms.

use std::fmt;

/// Errors raised by the channel grid and the transform stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A flat sample buffer does not fit the requested grid shape.
    SizeMismatch { expected: usize, actual: usize },
    /// The four wavelet subbands passed to reconstruction differ in shape.
    SubbandShapeMismatch,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} samples, got {actual}")
            }
            Self::SubbandShapeMismatch => write!(f, "wavelet subbands must share one shape"),
        }
    }
}

impl std::error::Error for TransformError {}

pub type Result<T> = std::result::Result<T, TransformError>;
