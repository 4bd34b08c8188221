// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Fan-out of the per-channel algorithm over red, green and blue.
//!
//! Channels are always processed in the order red, green, blue, so a shared
//! seeded selector sees the same call sequence on embed and extract.

use core::fmt;
use core::str::FromStr;

use log::debug;

use crate::transform::Channel;

use super::capacity::check_capacity;
use super::embed::ChannelEmbedder;
use super::error::Result;
use super::extract::ChannelExtractor;

/// Red, green and blue planes of one image.
pub type RgbChannels = [Channel; 3];

/// One color plane. [`Color::ALL`] is the processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Index into [`RgbChannels`].
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
        }
    }
}

/// Set of color planes to embed into or extract from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSelection {
    selected: [bool; 3],
}

impl ChannelSelection {
    pub const ALL: ChannelSelection = ChannelSelection { selected: [true; 3] };
    pub const NONE: ChannelSelection = ChannelSelection { selected: [false; 3] };

    /// Parse from letters `r`, `g`, `b` in any order and case.
    /// Other characters are ignored.
    pub fn parse(spec: &str) -> Self {
        let mut selected = [false; 3];
        for ch in spec.chars() {
            match ch.to_ascii_lowercase() {
                'r' => selected[0] = true,
                'g' => selected[1] = true,
                'b' => selected[2] = true,
                _ => {}
            }
        }
        Self { selected }
    }

    pub fn contains(&self, color: Color) -> bool {
        self.selected[color.index()]
    }

    /// Selected colors in processing order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        Color::ALL.into_iter().filter(move |&c| self.contains(c))
    }

    pub fn is_empty(&self) -> bool {
        !self.selected.iter().any(|&s| s)
    }
}

impl Default for ChannelSelection {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromStr for ChannelSelection {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ChannelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.colors() {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

/// Expected watermark image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatermarkShape {
    pub width: usize,
    pub height: usize,
}

impl WatermarkShape {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Payload bytes per channel. Saturates at `usize::MAX`, which no
    /// channel can hold.
    pub fn byte_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

/// Error for a malformed `WxH` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseShapeError(String);

impl fmt::Display for ParseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid watermark size {:?}: expected WxH, where W is width and H is height",
            self.0
        )
    }
}

impl std::error::Error for ParseShapeError {}

impl FromStr for WatermarkShape {
    type Err = ParseShapeError;

    /// Parse `"WxH"`, e.g. `"32x32"`.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let err = || ParseShapeError(s.to_string());
        let (w, h) = s.split_once(|c: char| c == 'x' || c == 'X').ok_or_else(err)?;
        let width = w.trim().parse().map_err(|_| err())?;
        let height = h.trim().parse().map_err(|_| err())?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for WatermarkShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Flatten a watermark plane row-major into bytes (rounded, clamped to 0–255).
fn channel_to_bytes(channel: &Channel) -> Vec<u8> {
    channel
        .samples()
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect()
}

/// Embeds a watermark image into the selected planes of a host image.
pub struct RgbEmbedder<E> {
    embedder: E,
    selection: ChannelSelection,
}

impl<E: ChannelEmbedder> RgbEmbedder<E> {
    pub fn new(embedder: E, selection: ChannelSelection) -> Self {
        Self { embedder, selection }
    }

    /// Embed each selected watermark plane into the matching host plane.
    /// Unselected host planes are returned unchanged.
    pub fn embed(&mut self, input: &RgbChannels, watermark: &RgbChannels) -> Result<RgbChannels> {
        let mut output = input.clone();
        for color in self.selection.colors() {
            let i = color.index();
            let bytes = channel_to_bytes(&watermark[i]);
            debug!("embedding {} bytes into {color:?} channel", bytes.len());
            output[i] = self.embedder.embed(&input[i], &bytes)?;
        }
        Ok(output)
    }
}

/// Extracts a watermark image from the selected planes of a host image.
pub struct RgbExtractor<X> {
    extractor: X,
    selection: ChannelSelection,
}

impl<X: ChannelExtractor> RgbExtractor<X> {
    pub fn new(extractor: X, selection: ChannelSelection) -> Self {
        Self { extractor, selection }
    }

    /// Extract a `shape`-sized watermark plane from each selected host plane.
    /// Unselected planes come back as zeros of `shape`.
    ///
    /// # Errors
    /// Whatever the channel extractor reports, and
    /// [`WatermarkError::WatermarkTooLarge`](super::WatermarkError::WatermarkTooLarge)
    /// when `shape` exceeds the host's capacity. Nothing of `shape` size is
    /// allocated before that check.
    pub fn extract(&mut self, input: &RgbChannels, shape: WatermarkShape) -> Result<RgbChannels> {
        let size = shape.byte_count();
        let mut planes: [Option<Channel>; 3] = [None, None, None];
        for color in self.selection.colors() {
            let i = color.index();
            debug!("extracting {shape} watermark from {color:?} channel");
            let bytes = self.extractor.extract(&input[i], size)?;
            let samples = bytes.into_iter().map(f64::from).collect();
            planes[i] = Some(Channel::from_vec(shape.height, shape.width, samples)?);
        }

        if planes.iter().any(Option::is_none) {
            let (rows, cols) = input[0].shape();
            check_capacity(rows, cols, size)?;
        }
        Ok(planes.map(|plane| plane.unwrap_or_else(|| Channel::new(shape.height, shape.width))))
    }
}
