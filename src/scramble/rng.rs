// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramblecore

//! Seeded pseudorandom stream for shifts and permutations.
//!
//! [`SeedRng`] wraps a ChaCha20 PRNG seeded from the password digest. The
//! same seed plus the same sequence of draws reproduces the identical
//! stream on every platform — the one invariant the whole scheme stands
//! on, since decrypt re-derives shift values and the permutation instead
//! of storing them.
//!
//! Each pipeline stage builds its own fresh instance; generator state is
//! never shared between the shift and permutation stages.
//!
//! # Cross-platform portability
//!
//! All draws go through `gen_range` with `u32` bounds (not `usize`).
//! `usize` is 32-bit on WASM but 64-bit on native, which makes
//! `rand::Rng::gen_range` consume different amounts of PRNG entropy per
//! step — producing completely different shuffles.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::scramble::seed::SEED_LEN;

/// Deterministic bounded-draw stream over a ChaCha20 generator.
pub struct SeedRng {
    rng: ChaCha20Rng,
}

impl SeedRng {
    /// Start a fresh stream from a seed. Independent instances built from
    /// the same seed emit identical draw sequences.
    pub fn new(seed: &[u8; SEED_LEN]) -> Self {
        Self { rng: ChaCha20Rng::from_seed(*seed) }
    }

    /// Next channel shift value, uniform in `0..=255`.
    pub fn next_shift(&mut self) -> u8 {
        self.rng.gen_range(0..=255u32) as u8
    }

    /// Draw a permutation of `0..n` by Fisher-Yates, swapping from index
    /// `n-1` down to `1` with `j = gen_range(0..=i)` at each step.
    ///
    /// The direction and the `u32` bound are pinned: the permutation a seed
    /// produces is part of the on-disk contract with already-scrambled
    /// images, exactly like the byte stream itself.
    pub fn permutation(&mut self, n: usize) -> Vec<u32> {
        debug_assert!(n <= u32::MAX as usize, "pixel count exceeds u32 index space");
        let mut perm: Vec<u32> = (0..n as u32).collect();
        for i in (1..n).rev() {
            let j = self.rng.gen_range(0..=(i as u32)) as usize;
            perm.swap(i, j);
        }
        perm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let seed = [42u8; SEED_LEN];
        let mut a = SeedRng::new(&seed);
        let mut b = SeedRng::new(&seed);
        let va: Vec<u8> = (0..64).map(|_| a.next_shift()).collect();
        let vb: Vec<u8> = (0..64).map(|_| b.next_shift()).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = SeedRng::new(&[1u8; SEED_LEN]);
        let mut b = SeedRng::new(&[2u8; SEED_LEN]);
        let va: Vec<u8> = (0..64).map(|_| a.next_shift()).collect();
        let vb: Vec<u8> = (0..64).map(|_| b.next_shift()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn permutation_is_bijection() {
        for n in [0usize, 1, 2, 3, 17, 256, 1000] {
            let mut rng = SeedRng::new(&[7u8; SEED_LEN]);
            let mut perm = rng.permutation(n);
            assert_eq!(perm.len(), n);
            perm.sort();
            let identity: Vec<u32> = (0..n as u32).collect();
            assert_eq!(perm, identity, "every index must appear exactly once (n={n})");
        }
    }

    #[test]
    fn permutation_deterministic() {
        let seed = [9u8; SEED_LEN];
        let a = SeedRng::new(&seed).permutation(500);
        let b = SeedRng::new(&seed).permutation(500);
        assert_eq!(a, b, "same seed must produce identical permutation");
    }

    #[test]
    fn trivial_permutations() {
        let mut rng = SeedRng::new(&[0u8; SEED_LEN]);
        assert!(rng.permutation(0).is_empty());
        assert_eq!(rng.permutation(1), vec![0]);
    }

    #[test]
    fn permutation_draw_consumes_stream() {
        // A permutation of n draws n-1 bounded values; two consecutive
        // draws from one instance must therefore differ from each other
        // while a fresh instance reproduces the first.
        let seed = [3u8; SEED_LEN];
        let mut rng = SeedRng::new(&seed);
        let first = rng.permutation(100);
        let second = rng.permutation(100);
        assert_ne!(first, second);
        assert_eq!(SeedRng::new(&seed).permutation(100), first);
    }
}
