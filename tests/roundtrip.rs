// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramblecore

//! End-to-end scramble/restore round-trips.
//!
//! The single property that matters most: for every buffer shape
//! (including empty and single-pixel), every non-empty password, and both
//! shift-flag settings, `decrypt(encrypt(img, pw, s), pw, s) == img`
//! exactly — channel for channel, position for position.

use scramble_core::{Mode, RgbImage, ScrambleError, decrypt, encrypt, process};

/// Image whose pixels are all distinct, so any misplaced pixel shows up.
fn numbered(width: u32, height: u32) -> RgbImage {
    let pixels: Vec<[u8; 3]> = (0..width as usize * height as usize)
        .map(|i| [(i % 256) as u8, (i / 256 % 256) as u8, (i / 65536) as u8])
        .collect();
    RgbImage::from_pixels(width, height, pixels).unwrap()
}

// ---------------------------------------------------------------------------
// 1. Round-trip identity across shapes and flags
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_with_shift() {
    let img = numbered(32, 24);
    let enc = encrypt(&img, "correct horse", true).unwrap();
    assert_eq!(decrypt(&enc, "correct horse", true).unwrap(), img);
}

#[test]
fn roundtrip_without_shift() {
    let img = numbered(32, 24);
    let enc = encrypt(&img, "correct horse", false).unwrap();
    assert_eq!(decrypt(&enc, "correct horse", false).unwrap(), img);
}

#[test]
fn roundtrip_empty_image() {
    let img = RgbImage::from_pixels(0, 0, Vec::new()).unwrap();
    for shift in [false, true] {
        let enc = encrypt(&img, "pw", shift).unwrap();
        assert_eq!(enc.pixel_count(), 0);
        assert_eq!(decrypt(&enc, "pw", shift).unwrap(), img);
    }
}

#[test]
fn roundtrip_single_pixel() {
    let img = RgbImage::from_pixels(1, 1, vec![[200, 100, 50]]).unwrap();
    for shift in [false, true] {
        let enc = encrypt(&img, "pw", shift).unwrap();
        assert_eq!(enc.pixel_count(), 1);
        assert_eq!(decrypt(&enc, "pw", shift).unwrap(), img);
    }
}

#[test]
fn roundtrip_thin_strips() {
    // Degenerate aspect ratios: one row, one column.
    for (w, h) in [(64, 1), (1, 64), (3, 1), (1, 3)] {
        let img = numbered(w, h);
        let enc = encrypt(&img, "strip", true).unwrap();
        assert_eq!(decrypt(&enc, "strip", true).unwrap(), img, "{w}x{h} strip");
    }
}

#[test]
fn roundtrip_survives_raw_boundary() {
    // Collaborators hand over flat interleaved bytes; the round-trip must
    // hold across that conversion too.
    let img = numbered(7, 5);
    let raw = encrypt(&img, "boundary", true).unwrap().to_raw();
    let handed_back = RgbImage::from_raw(7, 5, &raw).unwrap();
    assert_eq!(decrypt(&handed_back, "boundary", true).unwrap(), img);
}

// ---------------------------------------------------------------------------
// 2. The concrete 2x2 scenario
// ---------------------------------------------------------------------------

#[test]
fn concrete_2x2_scenario() {
    let original = RgbImage::from_pixels(
        2,
        2,
        vec![[10, 20, 30], [40, 50, 60], [70, 80, 90], [100, 110, 120]],
    )
    .unwrap();

    let enc = encrypt(&original, "test123", true).unwrap();
    assert_eq!(enc.width(), 2);
    assert_eq!(enc.height(), 2);
    assert_eq!(enc.pixel_count(), 4);
    assert_ne!(enc, original, "scramble must change the image");

    let dec = decrypt(&enc, "test123", true).unwrap();
    assert_eq!(dec, original, "exact recovery of all 4 pixels in order");
}

#[test]
fn concrete_2x2_wrong_password() {
    let original = RgbImage::from_pixels(
        2,
        2,
        vec![[10, 20, 30], [40, 50, 60], [70, 80, 90], [100, 110, 120]],
    )
    .unwrap();

    let enc = encrypt(&original, "test123", true).unwrap();
    let dec = decrypt(&enc, "wrong", true).unwrap();

    // Shape-valid but visually wrong; not an error.
    assert_eq!(dec.width(), 2);
    assert_eq!(dec.height(), 2);
    assert_eq!(dec.pixel_count(), 4);
    assert_ne!(dec, original);
}

// ---------------------------------------------------------------------------
// 3. Mismatched inputs silently produce garbage, never errors
// ---------------------------------------------------------------------------

#[test]
fn mismatched_shift_flag_differs() {
    let img = numbered(8, 8);
    let enc = encrypt(&img, "flagged", true).unwrap();
    let dec = decrypt(&enc, "flagged", false).unwrap();
    assert_eq!(dec.pixel_count(), img.pixel_count());
    assert_ne!(dec, img);
}

#[test]
fn wrong_password_is_shape_valid() {
    let img = numbered(12, 12);
    let enc = encrypt(&img, "alpha", false).unwrap();
    let dec = decrypt(&enc, "beta", false).unwrap();
    assert_eq!(dec.width(), img.width());
    assert_eq!(dec.height(), img.height());
    assert_ne!(dec, img);
}

// ---------------------------------------------------------------------------
// 4. Boundary errors
// ---------------------------------------------------------------------------

#[test]
fn empty_password_rejected() {
    let img = numbered(4, 4);
    assert_eq!(encrypt(&img, "", true), Err(ScrambleError::EmptyPassword));
    assert_eq!(
        process(&img, "", false, Mode::Decrypt),
        Err(ScrambleError::EmptyPassword)
    );
}

#[test]
fn oversized_dimensions_rejected() {
    let img = RgbImage::from_pixels(8193, 0, Vec::new()).unwrap();
    assert_eq!(encrypt(&img, "pw", true), Err(ScrambleError::ImageTooLarge));
}

#[test]
fn no_partial_output_on_failure() {
    // A failing call returns only the error; the input is untouched.
    let img = numbered(4, 4);
    let before = img.clone();
    let _ = encrypt(&img, "", true);
    assert_eq!(img, before);
}

// ---------------------------------------------------------------------------
// 5. Mode dispatch
// ---------------------------------------------------------------------------

#[test]
fn mode_roundtrip() {
    let img = numbered(9, 4);
    let enc = process(&img, "modal", true, Mode::Encrypt).unwrap();
    let dec = process(&enc, "modal", true, Mode::Decrypt).unwrap();
    assert_eq!(dec, img);
}
