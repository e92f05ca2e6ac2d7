// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramblecore

//! Password to seed derivation.
//!
//! The seed is the SHA-256 digest of the password's UTF-8 bytes, read as a
//! big-endian 256-bit integer and carried as its 32-byte representation.
//! Every pseudorandom choice in the pipeline (shift values and the pixel
//! permutation) flows from this one value, so derivation must be absolute:
//! same bytes in, same seed out, on every platform, every time.
//!
//! The digest is deliberately a plain hash rather than a slow KDF. The
//! scramble is not secure encryption (see the crate docs), and the seed
//! must stay cheap to recompute on every operation.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Seed length in bytes (SHA-256 digest width).
pub const SEED_LEN: usize = 32;

/// Derive the 256-bit scramble seed from a password.
///
/// Deterministic with no side effects. Both `encrypt` and `decrypt` call
/// this once per operation and drop the seed afterwards; the `Zeroizing`
/// wrapper scrubs it on drop. The empty-password check happens at the
/// pipeline boundary, before this is reached.
pub fn derive_seed(password: &str) -> Zeroizing<[u8; SEED_LEN]> {
    let digest = Sha256::digest(password.as_bytes());
    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    seed.copy_from_slice(&digest);
    seed
}
