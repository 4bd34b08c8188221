// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Bytes ⇄ bipolar (±1) bit sequences, MSB first.

/// Convert bytes into ±1 bits: bit 0 → −1, bit 1 → +1, eight per byte, MSB first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<i8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| if (byte >> shift) & 1 == 1 { 1 } else { -1 }))
        .collect()
}

/// Convert ±1 bits back into bytes.
///
/// Non-negative values read as 1. Bits are grouped MSB-first in chunks of
/// eight; a trailing partial chunk is dropped.
pub fn bits_to_bytes(bits: &[i8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit >= 0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_bytes() {
        assert_eq!(bytes_to_bits(&[128]), vec![1, -1, -1, -1, -1, -1, -1, -1]);
        assert_eq!(bytes_to_bits(&[1]), vec![-1, -1, -1, -1, -1, -1, -1, 1]);
        assert_eq!(bytes_to_bits(&[0xA5]), vec![1, -1, 1, -1, -1, 1, -1, 1]);
    }

    #[test]
    fn round_trip_all_bytes() {
        let all: Vec<u8> = (0..=255).collect();
        let bits = bytes_to_bits(&all);
        assert_eq!(bits.len(), 256 * 8);
        assert_eq!(bits_to_bytes(&bits), all);
    }

    #[test]
    fn partial_byte_dropped() {
        let mut bits = bytes_to_bits(&[7, 200]);
        bits.extend_from_slice(&[1, 1, -1]);
        assert_eq!(bits_to_bytes(&bits), vec![7, 200]);
        assert!(bits_to_bytes(&[1, 1, 1]).is_empty());
    }

    #[test]
    fn empty() {
        assert!(bytes_to_bits(&[]).is_empty());
        assert!(bits_to_bytes(&[]).is_empty());
    }
}
