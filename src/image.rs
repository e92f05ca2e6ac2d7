// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramblecore

//! Decoded RGB image buffer.
//!
//! [`RgbImage`] is the data model every transform operates on: a row-major
//! sequence of `[r, g, b]` triples plus the dimensions needed to rebuild a
//! 2-D image after permutation. The pixel-count invariant
//! `pixels.len() == width * height` is checked at construction, so a buffer
//! that disagrees with its dimensions can never reach a transform.
//!
//! Decoding from and encoding to file formats (PNG, JPEG, ...) is a caller
//! concern; [`RgbImage::from_raw`] / [`RgbImage::to_raw`] convert between
//! this model and the flat interleaved byte layout most decoders produce.

use std::fmt;

/// Errors from constructing an [`RgbImage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The pixel buffer length disagrees with `width * height`.
    PixelCountMismatch {
        /// Declared image width in pixels.
        width: u32,
        /// Declared image height in pixels.
        height: u32,
        /// Actual number of pixels supplied.
        pixels: usize,
    },
    /// A raw byte buffer is not a whole number of RGB triples.
    RawLengthNotRgb {
        /// Length of the raw buffer in bytes.
        len: usize,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelCountMismatch { width, height, pixels } => write!(
                f,
                "pixel count mismatch: {width}x{height} needs {} pixels, got {pixels}",
                (*width as u64) * (*height as u64)
            ),
            Self::RawLengthNotRgb { len } => {
                write!(f, "raw buffer length {len} is not a multiple of 3")
            }
        }
    }
}

impl std::error::Error for ImageError {}

pub type Result<T> = std::result::Result<T, ImageError>;

/// A decoded RGB image: dimensions plus row-major `[r, g, b]` pixels.
///
/// 8 bits per channel, no alpha. Row-major order is the canonical position
/// axis for the pixel permutation: index `y * width + x` addresses the
/// pixel at column `x` of row `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl RgbImage {
    /// Build an image from dimensions and a pixel buffer.
    ///
    /// # Errors
    /// [`ImageError::PixelCountMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Result<Self> {
        let expected = (width as u64) * (height as u64);
        if pixels.len() as u64 != expected {
            return Err(ImageError::PixelCountMismatch {
                width,
                height,
                pixels: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Build an image from a flat interleaved byte buffer
    /// (`r0 g0 b0 r1 g1 b1 ...`), the layout most decoders hand over.
    ///
    /// # Errors
    /// - [`ImageError::RawLengthNotRgb`] if `raw.len()` is not a multiple of 3.
    /// - [`ImageError::PixelCountMismatch`] if the triple count disagrees
    ///   with `width * height`.
    pub fn from_raw(width: u32, height: u32, raw: &[u8]) -> Result<Self> {
        if raw.len() % 3 != 0 {
            return Err(ImageError::RawLengthNotRgb { len: raw.len() });
        }
        let pixels: Vec<[u8; 3]> = raw
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Construct from parts already known to satisfy the count invariant.
    /// Transforms use this to rebuild images from buffers they produced.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len() as u64, (width as u64) * (height as u64));
        Self { width, height, pixels }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Consume the image, returning its pixel buffer.
    pub fn into_pixels(self) -> Vec<[u8; 3]> {
        self.pixels
    }

    /// Flat interleaved byte layout (`r0 g0 b0 r1 g1 b1 ...`) for handing
    /// back to an encoder.
    pub fn to_raw(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            raw.extend_from_slice(px);
        }
        raw
    }
}
