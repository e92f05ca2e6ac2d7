// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramblecore

//! Scramble and restore pipelines.
//!
//! [`encrypt`] derives the seed, optionally shifts channel values, then
//! permutes pixel positions; [`decrypt`] runs the exact mirror, inverse
//! permutation before inverse shift. Each stage seeds its own generator
//! from the same password digest, so the stages never contend for stream
//! state — but the composition order is still part of the output contract
//! and must match between the two directions.
//!
//! The `shift_enabled` flag must also match: there is no way to detect a
//! mismatch (or a wrong password), and decrypting with either wrong
//! produces a valid-shaped but visually wrong image rather than an error.

use zeroize::Zeroizing;

use crate::image::RgbImage;
use crate::scramble::error::ScrambleError;
use crate::scramble::seed::{SEED_LEN, derive_seed};
use crate::scramble::{permute, shift, validate_dimensions};

/// Which direction to run the pipeline in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Shift (optional), then shuffle.
    Encrypt,
    /// Unshuffle, then unshift (optional).
    Decrypt,
}

/// Scramble an image with a password.
///
/// # Arguments
/// - `image`: The decoded RGB image to scramble.
/// - `password`: Drives every pseudorandom choice; must be non-empty.
/// - `shift_enabled`: Whether to run the channel-shift stage before
///   shuffling. Must be passed identically to [`decrypt`] later.
///
/// # Returns
/// A new image of identical dimensions with shifted channel values
/// (if enabled) and permuted pixel positions.
///
/// # Errors
/// - [`ScrambleError::EmptyPassword`] if `password` is empty.
/// - [`ScrambleError::ImageTooLarge`] if the dimensions exceed the limits.
pub fn encrypt(
    image: &RgbImage,
    password: &str,
    shift_enabled: bool,
) -> Result<RgbImage, ScrambleError> {
    let seed = boundary_checked_seed(image, password)?;

    if shift_enabled {
        let shifted = RgbImage::from_parts(
            image.width(),
            image.height(),
            shift::apply_shift(image.pixels(), &seed),
        );
        Ok(permute::shuffle(&shifted, &seed))
    } else {
        Ok(permute::shuffle(image, &seed))
    }
}

/// Restore a scrambled image with the password and flag used to scramble it.
///
/// # Errors
/// - [`ScrambleError::EmptyPassword`] if `password` is empty.
/// - [`ScrambleError::ImageTooLarge`] if the dimensions exceed the limits.
pub fn decrypt(
    image: &RgbImage,
    password: &str,
    shift_enabled: bool,
) -> Result<RgbImage, ScrambleError> {
    let seed = boundary_checked_seed(image, password)?;

    let unshuffled = permute::unshuffle(image, &seed);

    if shift_enabled {
        let pixels = shift::reverse_shift(unshuffled.pixels(), &seed);
        Ok(RgbImage::from_parts(image.width(), image.height(), pixels))
    } else {
        Ok(unshuffled)
    }
}

/// Run the pipeline in the direction selected by `mode`.
///
/// Entry point for callers that carry the direction as a value (a UI mode
/// switch, a job queue); [`encrypt`] and [`decrypt`] are the direct forms.
pub fn process(
    image: &RgbImage,
    password: &str,
    shift_enabled: bool,
    mode: Mode,
) -> Result<RgbImage, ScrambleError> {
    match mode {
        Mode::Encrypt => encrypt(image, password, shift_enabled),
        Mode::Decrypt => decrypt(image, password, shift_enabled),
    }
}

/// Boundary checks shared by both directions: password must be non-empty
/// (checked before any seed derivation) and dimensions within limits
/// (checked before any pixel is touched).
fn boundary_checked_seed(
    image: &RgbImage,
    password: &str,
) -> Result<Zeroizing<[u8; SEED_LEN]>, ScrambleError> {
    if password.is_empty() {
        return Err(ScrambleError::EmptyPassword);
    }
    validate_dimensions(image.width(), image.height())?;
    Ok(derive_seed(password))
}
