// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Zigzag scan between a 2D coefficient grid and a frequency-ordered vector.
//!
//! The walk starts at the top-left cell, steps right, then alternates
//! down-left and up-right diagonals, bouncing off the grid edges. It is the
//! JPEG 8×8 zigzag generalized to any rectangle. [`scan`] and [`unscan`] share
//! [`ZigzagPath`], which is how embedder and extractor agree on coefficient
//! positions without exchanging anything.

use super::channel::Channel;
use super::error::{Result, TransformError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Right,
    Down,
    DownLeft,
    UpRight,
}

/// Iterator over `(row, col)` cells in zigzag order.
#[derive(Debug, Clone)]
pub struct ZigzagPath {
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
    direction: Direction,
    /// Number of cells already yielded.
    emitted: usize,
}

impl ZigzagPath {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row: 0,
            col: 0,
            direction: Direction::Right,
            emitted: 0,
        }
    }

    /// Advance the cursor one step and pick the direction for the next one.
    ///
    /// The cursor may leave the grid after the last cell; `next` stops there.
    fn step(&mut self) {
        let last_row = self.rows - 1;
        let last_col = self.cols - 1;

        // Moving left off column 0 or up off row 0 never happens for a valid
        // state; `wrapping_sub` keeps the arithmetic total regardless.
        match self.direction {
            Direction::Right => self.col += 1,
            Direction::Down => self.row += 1,
            Direction::DownLeft => {
                self.col = self.col.wrapping_sub(1);
                self.row += 1;
            }
            Direction::UpRight => {
                self.col += 1;
                self.row = self.row.wrapping_sub(1);
            }
        }

        let (row, col) = (self.row, self.col);
        self.direction = match self.direction {
            Direction::Right if row == 0 => Direction::DownLeft,
            Direction::Right if row >= last_row => Direction::UpRight,
            Direction::Right if col >= last_col => Direction::Down,
            Direction::DownLeft if col > 0 && row < last_row => Direction::DownLeft,
            Direction::DownLeft if col == 0 && row < last_row => Direction::Down,
            Direction::DownLeft if row >= last_row => Direction::Right,
            Direction::Down if col == 0 => Direction::UpRight,
            Direction::Down if col >= last_col => Direction::DownLeft,
            Direction::UpRight if col < last_col && row > 0 => Direction::UpRight,
            Direction::UpRight if col < last_col && row == 0 => Direction::Right,
            Direction::UpRight if col >= last_col => Direction::Down,
            dir => unreachable!("illegal zigzag move {dir:?} at ({row}, {col}) in {}x{}", self.rows, self.cols),
        };
    }
}

impl Iterator for ZigzagPath {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        let total = self.rows * self.cols;
        if self.emitted >= total {
            return None;
        }

        // Degenerate shapes are walked linearly.
        if self.rows == 1 {
            let cell = (0, self.emitted);
            self.emitted += 1;
            return Some(cell);
        }
        if self.cols == 1 {
            let cell = (self.emitted, 0);
            self.emitted += 1;
            return Some(cell);
        }

        if self.row >= self.rows || self.col >= self.cols {
            return None;
        }
        let cell = (self.row, self.col);
        self.emitted += 1;
        self.step();
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows * self.cols - self.emitted;
        (remaining, Some(remaining))
    }
}

/// Read the grid into a vector in zigzag order.
pub fn scan(matrix: &Channel) -> Vec<f64> {
    ZigzagPath::new(matrix.rows(), matrix.cols())
        .map(|(r, c)| matrix.get(r, c))
        .collect()
}

/// Place `vector[i]` at the i-th zigzag cell of a `rows × cols` grid.
///
/// # Errors
/// [`TransformError::SizeMismatch`] if `vector.len() != rows * cols`.
pub fn unscan(vector: &[f64], rows: usize, cols: usize) -> Result<Channel> {
    if vector.len() != rows * cols {
        return Err(TransformError::SizeMismatch {
            expected: rows * cols,
            actual: vector.len(),
        });
    }

    let mut matrix = Channel::new(rows, cols);
    for (&value, (r, c)) in vector.iter().zip(ZigzagPath::new(rows, cols)) {
        matrix.set(r, c, value);
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Grid whose cell values are their zigzag rank.
    fn ranks<const C: usize>(rows: &[[u32; C]]) -> Channel {
        let rows: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| r.iter().map(|&v| v as f64).collect())
            .collect();
        Channel::from_rows(&rows).unwrap()
    }

    fn identity(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    fn known_orders() -> Vec<Channel> {
        vec![
            ranks(&[[0, 1, 5, 6], [2, 4, 7, 12], [3, 8, 11, 13], [9, 10, 14, 15]]),
            ranks(&[[0, 1, 5, 6], [2, 4, 7, 10], [3, 8, 9, 11]]),
            ranks(&[[0, 1, 5], [2, 4, 6], [3, 7, 10], [8, 9, 11]]),
            ranks(&[[0, 1, 4, 5], [2, 3, 6, 7]]),
            ranks(&[[0, 1], [2, 4], [3, 5], [6, 7]]),
            ranks(&[[0, 1, 2, 3]]),
            ranks(&[[0], [1], [2], [3]]),
            ranks(&[[0, 1], [2, 3]]),
            ranks(&[[0, 1]]),
            ranks(&[[0], [1]]),
            ranks(&[[0]]),
        ]
    }

    #[test]
    fn scan_known_orders() {
        for m in known_orders() {
            assert_eq!(scan(&m), identity(m.len()), "shape {:?}", m.shape());
        }
    }

    #[test]
    fn unscan_known_orders() {
        for m in known_orders() {
            let (rows, cols) = m.shape();
            assert_eq!(unscan(&identity(m.len()), rows, cols).unwrap(), m);
        }
    }

    #[test]
    fn empty_row() {
        let m = Channel::new(1, 0);
        assert!(scan(&m).is_empty());
        assert_eq!(unscan(&[], 1, 0).unwrap(), m);
    }

    #[test]
    fn round_trip_all_small_shapes() {
        for rows in 1..12 {
            for cols in 1..12 {
                let samples: Vec<f64> = (0..rows * cols).map(|i| (i * 7 % 13) as f64).collect();
                let m = Channel::from_vec(rows, cols, samples).unwrap();
                let v = scan(&m);
                assert_eq!(v.len(), rows * cols);
                assert_eq!(unscan(&v, rows, cols).unwrap(), m, "shape {rows}x{cols}");
            }
        }
    }

    #[test]
    fn path_visits_each_cell_once() {
        for &(rows, cols) in &[(5, 3), (3, 5), (8, 8), (2, 9), (9, 2), (7, 6)] {
            let mut seen = vec![false; rows * cols];
            for (r, c) in ZigzagPath::new(rows, cols) {
                assert!(!seen[r * cols + c], "({r}, {c}) visited twice in {rows}x{cols}");
                seen[r * cols + c] = true;
            }
            assert!(seen.iter().all(|&s| s), "cell skipped in {rows}x{cols}");
        }
    }

    #[test]
    fn unscan_size_mismatch() {
        assert_eq!(
            unscan(&[1.0, 2.0, 3.0], 2, 2),
            Err(TransformError::SizeMismatch { expected: 4, actual: 3 })
        );
    }
}
