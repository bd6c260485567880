/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Palette handling
//!
//! Palettes are stored expanded to RGBA, entries the file doesn't
//! define are transparent black so out of range indices never read
//! garbage.
use zune_core::bytestream::ZByteReader;

use crate::constants::{MAX_COLORS, PALETTE_SIZE_MASK};
use crate::errors::GifDecoderErrors;

pub(crate) type Palette = [[u8; 4]; MAX_COLORS];

pub(crate) const EMPTY_PALETTE: Palette = [[0; 4]; MAX_COLORS];

/// Number of entries in a palette given the descriptor flags
pub(crate) const fn palette_entries(flags: u8) -> usize {
    2 << (flags & PALETTE_SIZE_MASK)
}

/// Palette used when the file doesn't have a global one
pub(crate) fn default_palette() -> Palette {
    let mut palette = EMPTY_PALETTE;
    palette[0] = [0, 0, 0, 255];
    palette[1] = [255, 255, 255, 255];
    palette
}

/// Read `num_entries` RGB triples into `palette`
///
/// Nothing is consumed or written when the stream doesn't have
/// enough bytes.
pub(crate) fn read_palette(
    stream: &mut ZByteReader, num_entries: usize, palette: &mut Palette
) -> Result<(), GifDecoderErrors> {
    let bytes = stream.get_slice_err(num_entries * 3)?;

    *palette = EMPTY_PALETTE;

    palette
        .iter_mut()
        .zip(bytes.chunks_exact(3))
        .for_each(|(entry, rgb)| {
            *entry = [rgb[0], rgb[1], rgb[2], 255];
        });
    Ok(())
}
