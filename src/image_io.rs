// Copyright (c) 2026 The shadowmark Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Loading and saving images as three `f64` planes.
//!
//! Any format the `image` crate can read is converted to 8-bit RGB. On save,
//! samples are clamped to [0, 255] and rounded; the output format follows the
//! file extension.

use std::fmt;
use std::path::Path;

use image::{Rgb, RgbImage};
use log::debug;

use crate::mark::RgbChannels;
use crate::transform::Channel;

/// Errors from image decoding/encoding.
#[derive(Debug)]
pub enum ImageIoError {
    /// Decoding, encoding or file access failed.
    Image(image::ImageError),
    /// The three planes to save do not share one shape.
    ShapeMismatch,
    /// The planes exceed the dimensions an image file can hold.
    TooLarge,
}

impl fmt::Display for ImageIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(e) => write!(f, "image error: {e}"),
            Self::ShapeMismatch => write!(f, "red, green and blue planes differ in shape"),
            Self::TooLarge => write!(f, "image dimensions out of range"),
        }
    }
}

impl std::error::Error for ImageIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for ImageIoError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

/// Split an RGB image into red, green and blue planes.
pub fn image_to_channels(img: &RgbImage) -> RgbChannels {
    let (width, height) = img.dimensions();
    let (rows, cols) = (height as usize, width as usize);
    let mut planes: RgbChannels = core::array::from_fn(|_| Channel::new(rows, cols));
    for (x, y, pixel) in img.enumerate_pixels() {
        for (plane, &value) in planes.iter_mut().zip(pixel.0.iter()) {
            plane.set(y as usize, x as usize, f64::from(value));
        }
    }
    planes
}

/// Join three planes into an RGB image, clamping and rounding each sample.
pub fn channels_to_image(channels: &RgbChannels) -> Result<RgbImage, ImageIoError> {
    let shape = channels[0].shape();
    if channels.iter().any(|c| c.shape() != shape) {
        return Err(ImageIoError::ShapeMismatch);
    }
    let (rows, cols) = shape;
    let width = u32::try_from(cols).map_err(|_| ImageIoError::TooLarge)?;
    let height = u32::try_from(rows).map_err(|_| ImageIoError::TooLarge)?;

    let quantize = |v: f64| v.clamp(0.0, 255.0).round() as u8;
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let (r, c) = (y as usize, x as usize);
        Rgb([
            quantize(channels[0].get(r, c)),
            quantize(channels[1].get(r, c)),
            quantize(channels[2].get(r, c)),
        ])
    }))
}

/// Read an image file into red, green and blue planes.
pub fn load_channels(path: impl AsRef<Path>) -> Result<RgbChannels, ImageIoError> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgb8();
    debug!("loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(image_to_channels(&img))
}

/// Write red, green and blue planes to an image file.
pub fn save_channels(path: impl AsRef<Path>, channels: &RgbChannels) -> Result<(), ImageIoError> {
    let path = path.as_ref();
    let img = channels_to_image(channels)?;
    img.save(path)?;
    debug!("saved {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planes_follow_pixels() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 200]));
        let [r, g, b] = image_to_channels(&img);
        assert_eq!(r.shape(), (2, 3));
        assert_eq!(r.get(1, 2), 2.0);
        assert_eq!(g.get(1, 2), 1.0);
        assert_eq!(b.get(0, 0), 200.0);
    }

    #[test]
    fn samples_clamped_and_rounded() {
        let r = Channel::from_rows(&[[-5.0, 127.4, 127.6, 300.0]]).unwrap();
        let g = Channel::new(1, 4);
        let b = Channel::filled(1, 4, 254.5);
        let img = channels_to_image(&[r, g, b]).unwrap();
        let reds: Vec<u8> = img.pixels().map(|p| p.0[0]).collect();
        assert_eq!(reds, vec![0, 127, 128, 255]);
        assert!(img.pixels().all(|p| p.0[2] == 255));
    }

    #[test]
    fn mismatched_planes_rejected() {
        let planes = [Channel::new(2, 2), Channel::new(2, 2), Channel::new(2, 3)];
        assert!(matches!(channels_to_image(&planes), Err(ImageIoError::ShapeMismatch)));
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let err = load_channels("/nonexistent/shadowmark/input.png").unwrap_err();
        assert!(matches!(err, ImageIoError::Image(_)));
    }
}
