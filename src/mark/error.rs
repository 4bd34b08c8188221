// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for watermark embedding and extraction.
//!
//! [`WatermarkError`] has two user-facing kinds, both raised during input
//! validation before any transform work starts:
//!
//! - channel errors ([`WatermarkError::EmptyChannel`],
//!   [`WatermarkError::EmptyWatermark`]): the host channel or the payload is empty;
//! - capacity errors ([`WatermarkError::WatermarkTooLarge`]): the payload
//!   exceeds 1/64 of the channel's pixel count.

use core::fmt;

use crate::transform::TransformError;

/// Errors that can occur while embedding or extracting a watermark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatermarkError {
    /// The host image channel has no samples.
    EmptyChannel,
    /// The watermark payload to embed is empty.
    EmptyWatermark,
    /// The payload does not fit: at most `capacity` bytes are allowed.
    WatermarkTooLarge { requested: usize, capacity: usize },
    /// A transform stage rejected its input.
    Transform(TransformError),
}

impl WatermarkError {
    /// True for the empty-channel / empty-payload kind.
    pub fn is_channel_error(&self) -> bool {
        matches!(self, Self::EmptyChannel | Self::EmptyWatermark)
    }

    /// True for the payload-too-large kind.
    pub fn is_capacity_error(&self) -> bool {
        matches!(self, Self::WatermarkTooLarge { .. })
    }
}

impl fmt::Display for WatermarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChannel => write!(f, "empty image channel"),
            Self::EmptyWatermark => write!(f, "empty watermark"),
            Self::WatermarkTooLarge { requested, capacity } => write!(
                f,
                "watermark too large: {requested} bytes requested, at most {capacity} fit \
                 (1/64 of the image size in pixels)"
            ),
            Self::Transform(e) => write!(f, "transform failed: {e}"),
        }
    }
}

impl std::error::Error for WatermarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transform(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransformError> for WatermarkError {
    fn from(e: TransformError) -> Self {
        Self::Transform(e)
    }
}

pub type Result<T> = std::result::Result<T, WatermarkError>;
