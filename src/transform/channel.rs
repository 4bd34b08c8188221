// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Sample storage for one image channel.
//!
//! [`Channel`] holds real-valued samples in row-major order. Pixel data enters
//! as bytes (0–255) but every transform works on `f64`, so the grid never
//! quantizes on its own. Quantization happens only at the image I/O boundary.

use super::error::{Result, TransformError};

/// Row-major grid of `f64` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    rows: usize,
    cols: usize,
    /// Flat storage: `rows * cols` samples, index = row * cols + col.
    samples: Vec<f64>,
}

impl Channel {
    /// Create a zero-filled grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            samples: vec![0.0; rows * cols],
        }
    }

    /// Create a grid from row-major samples.
    ///
    /// # Errors
    /// [`TransformError::SizeMismatch`] if `samples.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, samples: Vec<f64>) -> Result<Self> {
        if samples.len() != rows * cols {
            return Err(TransformError::SizeMismatch {
                expected: rows * cols,
                actual: samples.len(),
            });
        }
        Ok(Self { rows, cols, samples })
    }

    /// Create a grid from a slice of rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut samples = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(TransformError::SizeMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
            samples.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            samples,
        })
    }

    /// Create a grid with every sample set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            samples: vec![value; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the grid holds no samples, including shapes like 2×0.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.samples[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let idx = self.index(row, col);
        self.samples[idx] = value;
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.samples[start..start + self.cols]
    }

    /// Raw read-only access in row-major order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the grid and return its row-major samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Top-left `rows × cols` sub-grid, clamped to the current shape.
    pub fn crop(&self, rows: usize, cols: usize) -> Channel {
        let rows = rows.min(self.rows);
        let cols = cols.min(self.cols);
        let mut samples = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            samples.extend_from_slice(&self.row(r)[..cols]);
        }
        Channel { rows, cols, samples }
    }

    /// Copy of the grid extended to even height and width.
    ///
    /// An odd last row or column is repeated once (half-sample symmetric
    /// extension). Even dimensions are left as they are.
    pub fn padded_even(&self) -> Channel {
        let rows = self.rows + self.rows % 2;
        let cols = self.cols + self.cols % 2;
        if rows == self.rows && cols == self.cols {
            return self.clone();
        }
        let mut out = Channel::new(rows, cols);
        for r in 0..rows {
            let src_r = r.min(self.rows.saturating_sub(1));
            for c in 0..cols {
                let src_c = c.min(self.cols.saturating_sub(1));
                out.set(r, c, self.get(src_r, src_c));
            }
        }
        out
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows, "row {row} >= {}", self.rows);
        debug_assert!(col < self.cols, "col {col} >= {}", self.cols);
        row * self.cols + col
    }
}
