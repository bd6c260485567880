/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logical screen descriptor and global palette
use zune_core::bytestream::ZByteReader;
use zune_core::log::{debug, trace, warn};

use crate::constants::{GLOBAL_PALETTE_FLAG, HEADER_SIZE};
use crate::decoder::GifDecoder;
use crate::errors::GifDecoderErrors;
use crate::palette::{default_palette, palette_entries, read_palette, EMPTY_PALETTE};
use crate::surface::PixelSink;

impl<S: PixelSink> GifDecoder<S> {
    /// Parse the header and the global palette
    ///
    /// Nothing is committed unless both are present
    pub(crate) fn decode_headers(&mut self, data: &[u8]) -> Result<(), GifDecoderErrors> {
        let mut stream = ZByteReader::new(data);

        if !stream.has(HEADER_SIZE) {
            return Err(GifDecoderErrors::InsufficientData);
        }
        let signature = stream.read_fixed_bytes_or_error::<6>()?;

        if &signature[..3] != b"GIF" {
            return Err(GifDecoderErrors::DataError("Invalid GIF signature"));
        }
        match &signature[3..] {
            b"87a" | b"89a" => trace!(
                "GIF version: {}",
                core::str::from_utf8(&signature[3..]).unwrap_or("")
            ),
            version => warn!("Unknown GIF version {:?}, continuing", version)
        }

        let width = usize::from(stream.get_u16_le_err()?);
        let height = usize::from(stream.get_u16_le_err()?);
        let flags = stream.get_u8_err()?;
        let background_index = stream.get_u8_err()?;
        // pixel aspect ratio
        stream.skip_err(1)?;

        trace!("Declared canvas: {width}x{height}");
        trace!("Background index: {background_index}");

        let palette = if flags & GLOBAL_PALETTE_FLAG != 0 {
            let mut palette = EMPTY_PALETTE;
            let entries = palette_entries(flags);

            trace!("Global palette with {entries} entries");
            read_palette(&mut stream, entries, &mut palette)?;
            palette
        } else {
            trace!("No global palette, using black and white");
            default_palette()
        };

        let (width, height) = if self.trust_canvas(width, height) {
            (width, height)
        } else {
            debug!("Ignoring declared canvas of {width}x{height}, growing it from frames");
            (1, 1)
        };
        self.resize_canvas(width, height)?;

        self.background_index = background_index;
        self.global_palette = Some(palette);
        self.position = stream.position();
        self.read_headers = true;

        Ok(())
    }

    /// Whether a canvas size from the logical screen descriptor is believable
    fn trust_canvas(&self, width: usize, height: usize) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if width > self.options.get_max_width() || height > self.options.get_max_height() {
            return false;
        }
        if self.options.gif_get_distrust_canvas() {
            return !self
                .options
                .gif_get_untrusted_canvas_sizes()
                .contains(&(width, height));
        }
        true
    }
}
