/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::options::DecoderOptions;
use zune_gif::{BitmapSink, GifDecoder, GifDecoderErrors};

use crate::{decode_all, hash, is_truncation, sample_animation};

#[test]
fn progressive_equals_batch() {
    let data = sample_animation();
    let expected = decode_all(&data, DecoderOptions::default());

    assert_eq!(expected.len(), 4);

    let mut decoder = GifDecoder::new(BitmapSink::new());
    let mut frame_count = 0;
    let mut frame_count_partial = 0;

    for end in 0..=data.len() {
        let available = &data[..end];
        let status = decoder.initialise(available);

        assert!(is_truncation(&status), "{status:?} at {end}");

        // counts never go backwards
        assert!(decoder.frame_count() >= frame_count);
        assert!(decoder.frame_count_partial() >= frame_count_partial);
        assert!(decoder.frame_count() <= decoder.frame_count_partial());

        frame_count = decoder.frame_count();
        frame_count_partial = decoder.frame_count_partial();

        // fully indexed frames decode the same as from the whole file
        for frame in 0..frame_count {
            decoder.decode(available, frame).unwrap();
            assert_eq!(hash(decoder.surface().unwrap().pixels()), expected[frame]);
        }
    }
    assert!(decoder.is_complete());
    assert_eq!(frame_count, 4);

    for (frame, expected) in expected.iter().enumerate() {
        decoder.decode(&data, frame).unwrap();
        assert_eq!(hash(decoder.surface().unwrap().pixels()), *expected);
    }
}

#[test]
fn partial_frames_match_a_fresh_decoder() {
    let data = sample_animation();
    let mut decoder = GifDecoder::new(BitmapSink::new());

    for end in 0..=data.len() {
        let available = &data[..end];
        let _ = decoder.initialise(available);

        let Some(newest) = decoder.frame_count_partial().checked_sub(1) else {
            continue;
        };
        // decoding the frame still being received reuses earlier work
        let status = decoder.decode(available, newest);
        assert!(is_truncation(&status), "{status:?} at {end}");

        if newest == decoder.frame_count() {
            assert_eq!(status, Err(GifDecoderErrors::InsufficientFrameData));
        }
        let progressive = hash(decoder.surface().unwrap().pixels());

        let mut fresh = GifDecoder::new(BitmapSink::new());
        let _ = fresh.initialise(available);
        assert_eq!(fresh.decode(available, newest), status);
        assert_eq!(hash(fresh.surface().unwrap().pixels()), progressive, "at {end}");
    }
}

#[test]
fn truncation_at_every_offset() {
    let data = sample_animation();

    for end in 0..data.len() {
        let available = &data[..end];
        let mut decoder = GifDecoder::new(BitmapSink::new());

        let status = decoder.initialise(available);

        assert!(
            matches!(
                status,
                Err(GifDecoderErrors::InsufficientData | GifDecoderErrors::InsufficientFrameData)
            ),
            "{status:?} at {end}"
        );
        if decoder.frame_count_partial() == 0 {
            assert_eq!(status, Err(GifDecoderErrors::InsufficientData));
        } else {
            assert_eq!(status, Err(GifDecoderErrors::InsufficientFrameData));
        }
        for frame in 0..decoder.frame_count_partial() {
            let status = decoder.decode(available, frame);
            assert!(is_truncation(&status), "{status:?} at {end} frame {frame}");
        }
    }
}

#[test]
fn corrupt_bytes_never_panic() {
    let data = sample_animation();

    for position in 0..data.len() {
        for value in [0x00, 0x2C, 0xFF] {
            let mut corrupt = data.clone();
            corrupt[position] = value;

            let mut decoder = GifDecoder::new(BitmapSink::new());
            let _ = decoder.initialise(&corrupt);

            for frame in 0..decoder.frame_count_partial() {
                let _ = decoder.decode(&corrupt, frame);
            }
        }
    }
}

#[test]
fn random_access_matches_sequential() {
    let data = sample_animation();
    let expected = decode_all(&data, DecoderOptions::default());

    let mut decoder = GifDecoder::new(BitmapSink::new());
    decoder.initialise(&data).unwrap();

    for frame in [3, 1, 2, 0, 3, 2] {
        decoder.decode(&data, frame).unwrap();
        assert_eq!(hash(decoder.surface().unwrap().pixels()), expected[frame]);
    }
}
