// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramblecore

//! # scramble-core
//!
//! Deterministic, password-seeded, reversible pixel scrambling for RGB
//! images. Two transform stages, each driven by its own ChaCha20 stream
//! derived from the password:
//!
//! - **Channel shift**: additive mod-256 perturbation of every pixel's
//!   R/G/B values (optional, controlled by a flag).
//! - **Pixel permutation**: a keyed Fisher-Yates shuffle of all pixel
//!   positions.
//!
//! Decrypting with the same password and shift flag reconstructs the
//! original pixel data exactly, channel for channel. Decrypting with a
//! *wrong* password or flag produces a structurally valid but visually
//! wrong image: the scramble carries no authentication and cannot tell.
//! This is visual obfuscation, not cryptographically secure encryption.
//!
//! Image file decoding/encoding, network I/O, and display are caller
//! concerns. The library operates purely on decoded RGB pixel buffers.
//!
//! # Quick start
//!
//! ```rust
//! use scramble_core::{encrypt, decrypt, RgbImage};
//!
//! let image = RgbImage::from_raw(2, 2, &[
//!     10, 20, 30,  40, 50, 60,
//!     70, 80, 90,  100, 110, 120,
//! ]).unwrap();
//!
//! let scrambled = encrypt(&image, "passphrase", true).unwrap();
//! let restored = decrypt(&scrambled, "passphrase", true).unwrap();
//! assert_eq!(restored, image);
//! ```

pub mod image;
pub mod scramble;

pub use image::{ImageError, RgbImage};
pub use scramble::error::ScrambleError;
pub use scramble::pipeline::{Mode, decrypt, encrypt, process};
pub use scramble::seed::{SEED_LEN, derive_seed};
pub use scramble::{MAX_DIMENSION, MAX_PIXELS, validate_dimensions};
