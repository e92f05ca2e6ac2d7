// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramblecore

//! Error types for the scramble pipeline.
//!
//! [`ScrambleError`] covers every failure mode of [`encrypt`] and
//! [`decrypt`]. All failures are immediate and total: no partially
//! transformed buffer is ever returned.
//!
//! A wrong password or a mismatched shift flag is deliberately *not* an
//! error — the pipeline has no way to know the original state, so those
//! cases produce a structurally valid but visually wrong image.
//!
//! [`encrypt`]: crate::scramble::pipeline::encrypt
//! [`decrypt`]: crate::scramble::pipeline::decrypt

use core::fmt;

use crate::image::ImageError;

/// Errors that can occur while scrambling or restoring an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// The password is empty. Checked before any seed derivation.
    EmptyPassword,
    /// The image dimensions exceed the maximum allowed (8192px / 16MP).
    ImageTooLarge,
    /// The pixel buffer disagrees with its declared dimensions.
    InvalidImage(ImageError),
}

impl fmt::Display for ScrambleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::ImageTooLarge => write!(f, "image too large (max 8192px / 16MP)"),
            Self::InvalidImage(e) => write!(f, "invalid image buffer: {e}"),
        }
    }
}

impl std::error::Error for ScrambleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidImage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ImageError> for ScrambleError {
    fn from(e: ImageError) -> Self {
        Self::InvalidImage(e)
    }
}
