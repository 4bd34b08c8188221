// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Payload capacity of a host channel.
//!
//! One byte needs eight coefficient pairs. The `LL` subband holds a quarter of
//! the pixels and the even/odd split halves that again, so a channel of `P`
//! pixels offers about `P / 8` pairs, i.e. `P / 64` bytes.

use super::error::{Result, WatermarkError};

/// Pixels per embeddable payload byte.
pub const PIXELS_PER_BYTE: usize = 64;

/// Maximum payload size in bytes for a `rows × cols` channel.
pub fn watermark_capacity(rows: usize, cols: usize) -> usize {
    rows * cols / PIXELS_PER_BYTE
}

/// Fail with [`WatermarkError::WatermarkTooLarge`] if `requested` bytes do not
/// fit into a `rows × cols` channel.
pub fn check_capacity(rows: usize, cols: usize, requested: usize) -> Result<()> {
    let capacity = watermark_capacity(rows, cols);
    if requested > capacity {
        return Err(WatermarkError::WatermarkTooLarge { requested, capacity });
    }
    Ok(())
}
