/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_gif::{BitmapSink, GifDecoder};

use crate::sample_animation;

#[test]
fn frames_serialize() {
    let data = sample_animation();

    let mut decoder = GifDecoder::new(BitmapSink::new());
    decoder.initialise(&data).unwrap();
    decoder.decode(&data, 1).unwrap();

    let frame = serde_json::to_value(decoder.frame(1).unwrap()).unwrap();

    assert_eq!(frame["delay"], 20);
    assert_eq!(frame["disposal"], "Previous");
    assert_eq!(frame["transparent_index"], 0);
    assert_eq!(frame["interlaced"], true);
    assert_eq!(frame["image_count"], 1);
    assert_eq!(frame["rect"]["x"], 1);
    assert_eq!(frame["rect"]["width"], 3);
    assert_eq!(frame["opaque"], true);

    // not decoded yet
    let frame = serde_json::to_value(decoder.frame(2).unwrap()).unwrap();

    assert_eq!(frame["disposal"], "Background");
    assert_eq!(frame["image_count"], 2);
    assert!(frame["opaque"].is_null());
    assert!(frame["transparent_index"].is_null());
}
