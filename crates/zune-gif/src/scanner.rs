/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Frame indexing
//!
//! Frames are found by skipping over their blocks without decoding
//! any pixels. A frame starts at its graphic control extension (or the
//! first image if it has none) and runs until the next graphic control
//! extension or the trailer, so it may hold several image blocks.
use zune_core::bytestream::ZByteReader;
use zune_core::log::{debug, trace, warn};

use crate::constants::{
    EXTENSION_INTRODUCER, GRAPHIC_CONTROL_LABEL, IMAGE_SEPARATOR, INTERLACE_FLAG,
    LOCAL_PALETTE_FLAG, MAX_LZW_BITS, MIN_FRAME_SIZE, TRAILER
};
use crate::decoder::GifDecoder;
use crate::enums::ScanStatus;
use crate::errors::GifDecoderErrors;
use crate::extensions::{read_extension, read_image_descriptor, skip_sub_blocks, Extension};
use crate::frame::GifFrame;
use crate::palette::palette_entries;
use crate::surface::PixelSink;

impl<S: PixelSink> GifDecoder<S> {
    /// Try to index the frame at the current position
    ///
    /// The frame is only added to the frame table once all its blocks
    /// are present, until then it lives in the pending slot.
    pub(crate) fn scan_frame(&mut self, data: &[u8]) -> Result<ScanStatus, GifDecoderErrors> {
        let mut stream = ZByteReader::new_at(data, self.position);

        match stream.peek_u8() {
            Some(TRAILER) => return Ok(ScanStatus::Complete),
            Some(IMAGE_SEPARATOR) if !stream.has(MIN_FRAME_SIZE) => {
                return Err(GifDecoderErrors::InsufficientData)
            }
            _ => ()
        }

        let mut frame = GifFrame::new(self.position);

        loop {
            if !self.scan_extensions(&mut stream, &mut frame)? {
                // extensions after the last image
                trace!("Trailer after {} bytes of extensions", stream.position() - self.position);
                self.position = stream.position();
                return Ok(ScanStatus::Complete);
            }
            if frame.image_count == 0 && self.frames.len() >= self.options.gif_get_max_frames() {
                warn!("Animation has more than {} frames", self.options.gif_get_max_frames());
                return Err(GifDecoderErrors::DataError("Too many frames in animation"));
            }
            let descriptor = read_image_descriptor(&mut stream)?;
            let rect = descriptor.rect;

            self.grow_canvas(rect.right(), rect.bottom())?;

            frame.add_image(rect, descriptor.flags & INTERLACE_FLAG != 0);
            // decoding can begin once a descriptor is known
            self.pending = Some(frame);

            if descriptor.flags & LOCAL_PALETTE_FLAG != 0 {
                stream.skip_err(palette_entries(descriptor.flags) * 3)?;
            }
            let code_size = stream.get_u8_err()?;

            if code_size > MAX_LZW_BITS {
                return Err(GifDecoderErrors::DataError("LZW minimum code size too large"));
            }
            skip_sub_blocks(&mut stream)?;

            if !continues_frame(stream)? {
                break;
            }
            trace!("Frame {} has another image block", self.frames.len());
        }
        self.frames.try_reserve(1)?;
        self.frames.push(frame);
        self.pending = None;
        self.position = stream.position();

        Ok(ScanStatus::Frame)
    }

    /// Read extensions up to an image descriptor, recording what the frame needs
    ///
    /// Returns false if the trailer came before any image of the frame.
    fn scan_extensions(
        &mut self, stream: &mut ZByteReader, frame: &mut GifFrame
    ) -> Result<bool, GifDecoderErrors> {
        loop {
            match stream.peek_u8() {
                Some(EXTENSION_INTRODUCER) => match read_extension(stream)? {
                    Extension::GraphicControl {
                        delay,
                        disposal,
                        transparent_index
                    } => {
                        frame.delay = delay;
                        frame.disposal = disposal;
                        frame.transparent_index = transparent_index;
                    }
                    Extension::LoopCount(count) => self.loop_count = count,
                    Extension::Other => ()
                },
                Some(IMAGE_SEPARATOR) => return Ok(true),
                Some(TRAILER) if frame.image_count == 0 => return Ok(false),
                Some(_) => {
                    return Err(GifDecoderErrors::FrameDataError(
                        "Expected an image descriptor"
                    ))
                }
                None => return Err(GifDecoderErrors::InsufficientFrameData)
            }
        }
    }

    /// Grow the canvas so it covers `right` columns and `bottom` rows
    fn grow_canvas(&mut self, right: usize, bottom: usize) -> Result<(), GifDecoderErrors> {
        if right <= self.width && bottom <= self.height {
            return Ok(());
        }
        let width = self.width.max(right);
        let height = self.height.max(bottom);

        if width > self.options.get_max_width() || height > self.options.get_max_height() {
            return Err(GifDecoderErrors::DataError(
                "Frame is larger than the configured maximum dimensions"
            ));
        }
        debug!("Growing canvas to {width}x{height}");

        self.resize_canvas(width, height)
    }
}

/// Look past the image just skipped to see if another image
/// belongs to the same frame
///
/// Only an image that is reached without crossing a graphic
/// control extension continues the frame.
fn continues_frame(mut stream: ZByteReader) -> Result<bool, GifDecoderErrors> {
    loop {
        match stream.peek_u8() {
            Some(IMAGE_SEPARATOR) => return Ok(true),
            Some(EXTENSION_INTRODUCER) => {
                match stream.peek_at(1) {
                    Some(GRAPHIC_CONTROL_LABEL) => return Ok(false),
                    Some(_) => (),
                    None => return Err(GifDecoderErrors::InsufficientFrameData)
                }
                stream.skip_err(2)?;
                skip_sub_blocks(&mut stream)?;
            }
            // trailer, or something the next scan will complain about
            Some(_) => return Ok(false),
            None => return Err(GifDecoderErrors::InsufficientFrameData)
        }
    }
}
