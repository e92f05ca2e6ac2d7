// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramblecore

//! Pixel position permutation.
//!
//! [`shuffle`] draws one permutation `perm` of `0..n` from a fresh
//! [`SeedRng`] and gathers `output[i] = input[perm[i]]`: the pixel
//! originally at position `perm[i]` lands at position `i`. [`unshuffle`]
//! re-derives the identical permutation from the same seed, inverts the
//! index/value pairs, and gathers through the inverse — sending every
//! pixel back to its pre-shuffle position.
//!
//! Only positions change: pixel values, count, and image dimensions are
//! preserved exactly. Buffers of zero or one pixel pass through untouched
//! (their only permutation is the identity).

use crate::image::RgbImage;
use crate::scramble::rng::SeedRng;
use crate::scramble::seed::SEED_LEN;

/// Reorder pixels by the seed-derived permutation.
pub fn shuffle(image: &RgbImage, seed: &[u8; SEED_LEN]) -> RgbImage {
    let perm = SeedRng::new(seed).permutation(image.pixel_count());
    gather(image, &perm)
}

/// Undo [`shuffle`]: re-derive the same permutation and apply its inverse.
pub fn unshuffle(image: &RgbImage, seed: &[u8; SEED_LEN]) -> RgbImage {
    let perm = SeedRng::new(seed).permutation(image.pixel_count());
    gather(image, &invert(&perm))
}

/// Gather `output[i] = input[perm[i]]` into a new image with the same
/// dimensions.
fn gather(image: &RgbImage, perm: &[u32]) -> RgbImage {
    let pixels = image.pixels();
    let reordered: Vec<[u8; 3]> = perm.iter().map(|&p| pixels[p as usize]).collect();
    RgbImage::from_parts(image.width(), image.height(), reordered)
}

/// Invert a permutation: `inverse[perm[i]] = i` for all `i`.
fn invert(perm: &[u32]) -> Vec<u32> {
    let mut inverse = vec![0u32; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        inverse[p as usize] = i as u32;
    }
    inverse
}
