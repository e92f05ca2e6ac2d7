// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramblecore

//! Per-channel additive shift.
//!
//! For every pixel in buffer order, three shift values are drawn from a
//! fresh [`SeedRng`] (red first, then green, then blue) and added to the
//! channels mod 256. The reverse direction rebuilds the identical stream
//! from the same seed and subtracts, so the per-pixel draw order is part
//! of the contract: `reverse_shift(apply_shift(p, s), s) == p` holds
//! because both sides consume the stream pixel for pixel, channel for
//! channel.
//!
//! Pure functions of `(pixels, seed)`: buffer length and pixel order are
//! untouched, and no state survives the call.

use crate::scramble::rng::SeedRng;
use crate::scramble::seed::SEED_LEN;

/// Add a seed-determined shift to every channel of every pixel, mod 256.
pub fn apply_shift(pixels: &[[u8; 3]], seed: &[u8; SEED_LEN]) -> Vec<[u8; 3]> {
    shifted(pixels, seed, false)
}

/// Subtract the same seed-determined shifts, restoring the original
/// channel values. Must see the same seed as [`apply_shift`].
pub fn reverse_shift(pixels: &[[u8; 3]], seed: &[u8; SEED_LEN]) -> Vec<[u8; 3]> {
    shifted(pixels, seed, true)
}

fn shifted(pixels: &[[u8; 3]], seed: &[u8; SEED_LEN], reverse: bool) -> Vec<[u8; 3]> {
    let mut rng = SeedRng::new(seed);
    pixels
        .iter()
        .map(|&[r, g, b]| {
            // Draw order r, g, b is fixed; it must match between the
            // forward and reverse directions.
            let shift_r = rng.next_shift();
            let shift_g = rng.next_shift();
            let shift_b = rng.next_shift();
            if reverse {
                [
                    r.wrapping_sub(shift_r),
                    g.wrapping_sub(shift_g),
                    b.wrapping_sub(shift_b),
                ]
            } else {
                [
                    r.wrapping_add(shift_r),
                    g.wrapping_add(shift_g),
                    b.wrapping_add(shift_b),
                ]
            }
        })
        .collect()
}
