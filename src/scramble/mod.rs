// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramblecore

//! Password-seeded scramble and restore pipelines.
//!
//! Both operations derive the seed once, then run the same two stages in
//! mirror order:
//!
//! - **Encrypt** (`encrypt`): optional channel shift, then pixel
//!   permutation.
//! - **Decrypt** (`decrypt`): inverse permutation, then optional inverse
//!   channel shift.
//!
//! Each stage re-seeds its own ChaCha20 stream from the same password
//! digest, so the stages never share generator state. The stage order still
//! matters for bitwise output compatibility and must not change: images
//! scrambled as shift-then-shuffle only restore as unshuffle-then-unshift.

pub mod error;
pub mod permute;
pub mod pipeline;
pub mod rng;
pub mod seed;
pub mod shift;

pub use error::ScrambleError;
pub use pipeline::{Mode, decrypt, encrypt, process};

/// Maximum pixel dimension (width or height) accepted by the pipeline.
/// Callers are expected to downscale anything larger before reaching us.
pub const MAX_DIMENSION: u32 = 8192;

/// Maximum total pixel count (width × height) accepted by the pipeline.
pub const MAX_PIXELS: u32 = 16_000_000;

/// Validate image dimensions before any transform work.
///
/// There is no minimum: empty (0×h, w×0) and single-pixel images are valid
/// no-op inputs for both stages.
///
/// # Errors
/// [`ScrambleError::ImageTooLarge`] if either dimension exceeds
/// [`MAX_DIMENSION`] or the total pixel count exceeds [`MAX_PIXELS`].
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ScrambleError> {
    if width > MAX_DIMENSION
        || height > MAX_DIMENSION
        || width.checked_mul(height).map_or(true, |p| p > MAX_PIXELS)
    {
        return Err(ScrambleError::ImageTooLarge);
    }
    Ok(())
}
