/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::options::DecoderOptions;

use crate::{decode_all, pixel, rgba, GifBuilder, Image, Rgb, BLUE, GREEN, RED, WHITE};

const PALETTE: [Rgb; 4] = [RED, GREEN, BLUE, WHITE];

fn stripes(width: u16, height: u16) -> Vec<u8> {
    (0..height)
        .flat_map(|row| (0..width).map(move |column| ((row + column) % 4) as u8))
        .collect()
}

#[test]
fn interlaced_matches_progressive_rows() {
    for height in [1, 2, 3, 5, 8, 11, 17] {
        let indices = stripes(7, height);
        let image = Image::new(0, 0, 7, height, &indices);

        let plain = GifBuilder::new(7, height, &PALETTE)
            .frame(0, 0, None, &image)
            .finish();
        let interlaced = GifBuilder::new(7, height, &PALETTE)
            .frame(0, 0, None, &image.clone().interlaced())
            .finish();

        assert_eq!(
            decode_all(&plain, DecoderOptions::default()),
            decode_all(&interlaced, DecoderOptions::default()),
            "height {height}"
        );
    }
}

#[test]
fn interlaced_image_inside_the_canvas() {
    let indices = stripes(3, 9);

    let data = GifBuilder::new(8, 12, &PALETTE)
        .frame(0, 0, None, &Image::new(4, 2, 3, 9, &indices).interlaced())
        .finish();

    let mut decoder = zune_gif::GifDecoder::new(zune_gif::BitmapSink::new());
    decoder.initialise(&data).unwrap();

    assert!(decoder.frame(0).unwrap().interlaced());

    decoder.decode(&data, 0).unwrap();

    for y in 0..9 {
        for x in 0..3 {
            let index = indices[y * 3 + x];
            assert_eq!(
                pixel(&decoder, 4 + x, 2 + y),
                rgba(PALETTE[usize::from(index)]),
                "({x}, {y})"
            );
        }
    }
    assert_eq!(pixel(&decoder, 0, 0), [0, 0, 0, 0]);
}

#[test]
fn large_palette_grows_and_clears_the_table() {
    // 256 entries, every code is 9 to 12 bits wide and the table fills up
    let palette: Vec<Rgb> = (0..=255).map(|i| [i, 255 - i, i / 2]).collect();
    let indices: Vec<u8> = (0..80 * 60).map(|i| ((i * 7) % 256) as u8).collect();

    let data = GifBuilder::new(80, 60, &palette)
        .frame(0, 0, None, &Image::new(0, 0, 80, 60, &indices).interlaced())
        .finish();

    let mut decoder = zune_gif::GifDecoder::new(zune_gif::BitmapSink::new());
    decoder.initialise(&data).unwrap();
    decoder.decode(&data, 0).unwrap();

    for (i, &index) in indices.iter().enumerate() {
        let (x, y) = (i % 80, i / 80);
        assert_eq!(pixel(&decoder, x, y), rgba(palette[usize::from(index)]));
    }
    assert!(decoder.surface().unwrap().is_opaque());
}
