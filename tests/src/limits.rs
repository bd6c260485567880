/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::options::DecoderOptions;
use zune_gif::{BitmapSink, GifDecoder, GifDecoderErrors};

use crate::{pixel, rgba, GifBuilder, Image, Rgb, BLUE, GREEN, RED, WHITE};

const PALETTE: [Rgb; 4] = [RED, GREEN, BLUE, WHITE];

fn three_frames() -> Vec<u8> {
    GifBuilder::new(2, 2, &PALETTE)
        .frame(5, 0, None, &Image::filled(0, 0, 2, 2, 0))
        .frame(5, 0, None, &Image::filled(0, 0, 2, 2, 1))
        .frame(5, 0, None, &Image::filled(0, 0, 2, 2, 2))
        .finish()
}

#[test]
fn frame_limit() {
    let data = three_frames();

    let options = DecoderOptions::default().gif_set_max_frames(2);
    let mut decoder = GifDecoder::new_with_options(BitmapSink::new(), options);

    assert!(matches!(
        decoder.initialise(&data),
        Err(GifDecoderErrors::DataError(_))
    ));
    assert_eq!(decoder.frame_count(), 2);

    // frames before the limit are still usable
    decoder.decode(&data, 1).unwrap();
    assert_eq!(pixel(&decoder, 1, 1), rgba(GREEN));

    let options = DecoderOptions::default().gif_set_max_frames(3);
    let mut decoder = GifDecoder::new_with_options(BitmapSink::new(), options);

    decoder.initialise(&data).unwrap();
    assert_eq!(decoder.frame_count(), 3);
}

#[test]
fn common_screen_sizes_are_ignored() {
    let data = GifBuilder::new(640, 480, &PALETTE)
        .frame(0, 0, None, &Image::filled(0, 0, 3, 2, 3))
        .finish();

    let mut decoder = GifDecoder::new(BitmapSink::new());
    decoder.initialise(&data).unwrap();
    assert_eq!(decoder.dimensions(), (3, 2));

    let options = DecoderOptions::default().gif_set_distrust_canvas(false);
    let mut decoder = GifDecoder::new_with_options(BitmapSink::new(), options);
    decoder.initialise(&data).unwrap();
    assert_eq!(decoder.dimensions(), (640, 480));

    // a list without the size trusts it
    let options = DecoderOptions::default().gif_set_untrusted_canvas_sizes(&[(800, 600)]);
    let mut decoder = GifDecoder::new_with_options(BitmapSink::new(), options);
    decoder.initialise(&data).unwrap();
    assert_eq!(decoder.dimensions(), (640, 480));
}

#[test]
fn canvas_grows_to_fit_frames() {
    let data = GifBuilder::new(2, 2, &PALETTE)
        .frame(0, 1, None, &Image::filled(0, 0, 2, 2, 0))
        .frame(0, 0, None, &Image::filled(2, 1, 2, 2, 2))
        .finish();

    let mut decoder = GifDecoder::new(BitmapSink::new());
    decoder.initialise(&data).unwrap();

    assert_eq!(decoder.dimensions(), (4, 3));
    assert_eq!(decoder.sink().created(), 2);
    assert_eq!(decoder.sink().destroyed(), 1);
    assert_eq!(decoder.surface().unwrap().dimensions(), (4, 3));

    decoder.decode(&data, 1).unwrap();
    assert_eq!(pixel(&decoder, 0, 0), rgba(RED));
    assert_eq!(pixel(&decoder, 3, 2), rgba(BLUE));
    assert_eq!(pixel(&decoder, 3, 0), [0, 0, 0, 0]);

    decoder.finalise();
    assert_eq!(decoder.sink().destroyed(), 2);
    assert!(decoder.surface().is_none());
}

#[test]
fn frames_larger_than_the_limit() {
    let data = GifBuilder::new(2, 2, &PALETTE)
        .frame(0, 0, None, &Image::filled(0, 0, 8, 2, 0))
        .finish();

    let options = DecoderOptions::default().set_max_width(4);
    let mut decoder = GifDecoder::new_with_options(BitmapSink::new(), options);

    assert!(matches!(
        decoder.initialise(&data),
        Err(GifDecoderErrors::DataError(_))
    ));
    assert_eq!(decoder.frame_count(), 0);
}

#[test]
fn loop_counts() {
    let image = Image::filled(0, 0, 1, 1, 0);

    let cases: [(Option<(&[u8; 11], u16)>, u16); 3] = [
        (Some((b"NETSCAPE2.0", 0)), 0),
        (Some((b"ANIMEXTS1.0", 5)), 5),
        (None, 1)
    ];

    for (extension, expected) in cases {
        let mut builder = GifBuilder::new(1, 1, &PALETTE);

        if let Some((identifier, count)) = extension {
            builder = builder.looping(identifier, count);
        }
        let data = builder.frame(0, 0, None, &image).finish();

        let mut decoder = GifDecoder::new(BitmapSink::new());
        decoder.initialise(&data).unwrap();

        assert_eq!(decoder.loop_count(), expected);
    }
}

#[test]
fn unknown_applications_are_skipped() {
    let data = GifBuilder::new(1, 1, &PALETTE)
        .looping(b"XMP DataXMP", 7)
        .comment(b"hello")
        .frame(0, 0, None, &Image::filled(0, 0, 1, 1, 2))
        .finish();

    let mut decoder = GifDecoder::new(BitmapSink::new());
    decoder.initialise(&data).unwrap();

    assert_eq!(decoder.loop_count(), 1);
    assert_eq!(decoder.frame_count(), 1);

    decoder.decode(&data, 0).unwrap();
    assert_eq!(pixel(&decoder, 0, 0), rgba(BLUE));
}
