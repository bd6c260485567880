/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_gif::{BitmapSink, DisposalMethod, GifDecoder};

use crate::{pixel, rgba, GifBuilder, Image, BLUE, GREEN, RED, WHITE};

const PALETTE: [[u8; 3]; 4] = [RED, GREEN, BLUE, WHITE];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn decoder_for(data: &[u8]) -> GifDecoder<BitmapSink> {
    let mut decoder = GifDecoder::new(BitmapSink::new());
    decoder.initialise(data).unwrap();
    decoder
}

#[test]
fn restore_background() {
    let data = GifBuilder::new(2, 2, &PALETTE)
        .frame(0, 1, None, &Image::filled(0, 0, 2, 2, 0))
        .frame(0, 2, None, &Image::filled(0, 0, 1, 1, 1))
        .frame(0, 0, None, &Image::filled(1, 1, 1, 1, 2))
        .finish();

    let mut decoder = decoder_for(&data);

    assert_eq!(decoder.frame(1).unwrap().disposal(), DisposalMethod::Background);

    decoder.decode(&data, 1).unwrap();
    assert_eq!(pixel(&decoder, 0, 0), rgba(GREEN));
    assert_eq!(pixel(&decoder, 1, 1), rgba(RED));

    decoder.decode(&data, 2).unwrap();
    assert_eq!(pixel(&decoder, 0, 0), CLEAR);
    assert_eq!(pixel(&decoder, 1, 0), rgba(RED));
    assert_eq!(pixel(&decoder, 0, 1), rgba(RED));
    assert_eq!(pixel(&decoder, 1, 1), rgba(BLUE));

    assert!(!decoder.surface().unwrap().is_opaque());
    assert_eq!(decoder.frame(2).unwrap().opaque(), Some(false));
}

#[test]
fn restore_previous() {
    let data = GifBuilder::new(2, 2, &PALETTE)
        .frame(0, 1, None, &Image::filled(0, 0, 2, 2, 0))
        .frame(0, 3, None, &Image::filled(0, 0, 2, 2, 1))
        .frame(0, 0, None, &Image::filled(1, 1, 1, 1, 2))
        .finish();

    let mut decoder = decoder_for(&data);

    decoder.decode(&data, 1).unwrap();
    assert_eq!(pixel(&decoder, 0, 0), rgba(GREEN));
    assert_eq!(pixel(&decoder, 1, 1), rgba(GREEN));

    decoder.decode(&data, 2).unwrap();
    assert_eq!(pixel(&decoder, 0, 0), rgba(RED));
    assert_eq!(pixel(&decoder, 1, 0), rgba(RED));
    assert_eq!(pixel(&decoder, 1, 1), rgba(BLUE));
}

#[test]
fn restore_previous_on_first_frame() {
    let data = GifBuilder::new(2, 2, &PALETTE)
        .frame(0, 3, None, &Image::filled(0, 0, 2, 2, 1))
        .frame(0, 0, None, &Image::filled(1, 1, 1, 1, 2))
        .finish();

    let mut decoder = decoder_for(&data);

    decoder.decode(&data, 1).unwrap();
    assert_eq!(pixel(&decoder, 0, 0), CLEAR);
    assert_eq!(pixel(&decoder, 1, 1), rgba(BLUE));
}

#[test]
fn transparent_pixels_keep_the_canvas() {
    let data = GifBuilder::new(2, 2, &PALETTE)
        .frame(0, 1, None, &Image::filled(0, 0, 2, 2, 0))
        .frame(0, 1, Some(3), &Image::new(0, 0, 2, 2, &[3, 1, 3, 2]))
        .finish();

    let mut decoder = decoder_for(&data);

    assert_eq!(decoder.frame(1).unwrap().transparent_index(), Some(3));

    decoder.decode(&data, 1).unwrap();
    assert_eq!(pixel(&decoder, 0, 0), rgba(RED));
    assert_eq!(pixel(&decoder, 1, 0), rgba(GREEN));
    assert_eq!(pixel(&decoder, 0, 1), rgba(RED));
    assert_eq!(pixel(&decoder, 1, 1), rgba(BLUE));
    assert!(decoder.surface().unwrap().is_opaque());

    // white never shows up, it is the transparent index
    decoder.decode(&data, 0).unwrap();
    assert_ne!(pixel(&decoder, 0, 0), rgba(WHITE));
}

#[test]
fn multi_image_frame_paints_every_image() {
    let data = GifBuilder::new(3, 3, &PALETTE)
        .control(5, 2, None)
        .image(&Image::filled(0, 0, 1, 1, 1))
        .image(&Image::filled(2, 2, 1, 1, 2))
        .frame(5, 0, None, &Image::filled(1, 1, 1, 1, 3))
        .finish();

    let mut decoder = decoder_for(&data);

    assert_eq!(decoder.frame_count(), 2);

    let frame = decoder.frame(0).unwrap();
    assert_eq!(frame.image_count(), 2);
    assert_eq!((frame.rect().width, frame.rect().height), (3, 3));

    decoder.decode(&data, 0).unwrap();
    assert_eq!(pixel(&decoder, 0, 0), rgba(GREEN));
    assert_eq!(pixel(&decoder, 2, 2), rgba(BLUE));

    // restore background clears the union of both images
    decoder.decode(&data, 1).unwrap();
    assert_eq!(pixel(&decoder, 0, 0), CLEAR);
    assert_eq!(pixel(&decoder, 2, 2), CLEAR);
    assert_eq!(pixel(&decoder, 1, 1), rgba(WHITE));
}
