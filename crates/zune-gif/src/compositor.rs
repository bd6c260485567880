/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Frame compositing
//!
//! Frames are drawn in order onto an internal RGBA canvas, the canvas
//! is copied into the caller's surface only once a frame has been drawn,
//! so a failed decode never leaves a half drawn surface behind.
use alloc::vec::Vec;

use zune_core::bytestream::ZByteReader;
use zune_core::log::{trace, warn};

use crate::constants::{
    EXTENSION_INTRODUCER, IMAGE_SEPARATOR, INTERLACE_FLAG, LOCAL_PALETTE_FLAG
};
use crate::decoder::{CanvasSnapshot, DecodedFrame, GifDecoder};
use crate::enums::DisposalMethod;
use crate::errors::GifDecoderErrors;
use crate::extensions::{read_extension, read_image_descriptor, Extension};
use crate::frame::{GifFrame, GifRect};
use crate::lzw::{LzwDecoder, LzwError, SubBlockReader};
use crate::palette::{default_palette, palette_entries, read_palette, Palette, EMPTY_PALETTE};
use crate::surface::{PixelSink, Surface};

/// Interlaced passes as (first row, row step)
const INTERLACE_PASSES: [(usize, usize); 4] = [(0, 8), (4, 8), (2, 4), (1, 2)];

/// Map the n-th row stored in an interlaced image to its row in the image
pub(crate) fn interlaced_row(mut row: usize, height: usize) -> usize {
    for (start, step) in INTERLACE_PASSES {
        let rows_in_pass = if height > start {
            (height - start + step - 1) / step
        } else {
            0
        };
        if row < rows_in_pass {
            return start + row * step;
        }
        row -= rows_in_pass;
    }
    row
}

/// Write one row of palette indices into the canvas, skipping transparent ones
fn paint_row(
    canvas: &mut [u8], canvas_width: usize, x: usize, y: usize, indices: &[u8],
    palette: &Palette, transparent: Option<u8>
) {
    let start = (y * canvas_width + x) * 4;
    let row = &mut canvas[start..start + indices.len() * 4];

    for (pixel, &index) in row.chunks_exact_mut(4).zip(indices) {
        if Some(index) == transparent {
            continue;
        }
        pixel.copy_from_slice(&palette[usize::from(index)]);
    }
}

/// Turn "not enough bytes" from the byte cursor into the frame level status
fn frame_status(error: GifDecoderErrors) -> GifDecoderErrors {
    match error {
        GifDecoderErrors::InsufficientData => GifDecoderErrors::InsufficientFrameData,
        e => e
    }
}

impl<S: PixelSink> GifDecoder<S> {
    /// Replace the canvas and the surface with blank ones of a new size
    ///
    /// Everything derived from the old canvas is forgotten.
    pub(crate) fn resize_canvas(
        &mut self, width: usize, height: usize
    ) -> Result<(), GifDecoderErrors> {
        let size = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(GifDecoderErrors::InsufficientMemory)?;

        if let Some(surface) = self.surface.take() {
            self.sink.destroy(surface);
        }
        let mut canvas = Vec::new();
        canvas.try_reserve_exact(size)?;
        canvas.resize(size, 0);

        self.surface = Some(
            self.sink
                .create(width, height)
                .ok_or(GifDecoderErrors::InsufficientMemory)?
        );
        self.canvas = canvas;
        self.previous = Vec::new();
        self.snapshot = None;
        self.decoded = None;
        self.dirty_frame = None;
        self.width = width;
        self.height = height;

        self.frames.iter_mut().for_each(|frame| frame.opaque = None);

        Ok(())
    }

    /// Bring the canvas to the state just before `target` is drawn,
    /// without its predecessor's disposal applied
    ///
    /// Returns the first frame that still has to be drawn.
    fn prepare_canvas(&mut self, target: usize) -> usize {
        let from_decoded = self
            .decoded
            .filter(|d| d.complete && d.status.is_ok() && d.index < target)
            .map(|d| d.index);
        let from_snapshot = self
            .snapshot
            .as_ref()
            .filter(|s| s.index < target)
            .map(|s| s.index);

        match (from_decoded, from_snapshot) {
            (Some(decoded), snapshot) if snapshot.map_or(true, |s| decoded >= s) => {
                trace!("Continuing from frame {decoded}");
                decoded + 1
            }
            (_, Some(index)) => {
                trace!("Continuing from saved canvas of frame {index}");
                if let Some(snapshot) = &self.snapshot {
                    self.canvas.copy_from_slice(&snapshot.canvas);
                    self.previous.clone_from(&snapshot.previous);
                    self.dirty_frame = snapshot.dirty_frame;
                }
                index + 1
            }
            _ => {
                trace!("Compositing from the first frame");
                self.canvas.fill(0);
                self.dirty_frame = None;
                0
            }
        }
    }

    /// Remember the canvas before a partially available frame is drawn
    fn save_snapshot(&mut self, index: usize) {
        if self.snapshot.as_ref().map(|s| s.index) == Some(index) {
            return;
        }
        let snapshot = self.snapshot.get_or_insert_with(|| CanvasSnapshot {
            index,
            canvas: Vec::new(),
            previous: Vec::new(),
            dirty_frame: None
        });
        snapshot.index = index;
        snapshot.canvas.clone_from(&self.canvas);
        snapshot.previous.clone_from(&self.previous);
        snapshot.dirty_frame = self.dirty_frame;
    }

    /// Undo the area of a frame before the next one is drawn
    fn dispose(&mut self, index: usize) {
        let Some(&frame) = self.frame(index) else {
            return;
        };
        match frame.disposal {
            DisposalMethod::Background => {
                let rect = frame.rect;
                let right = rect.right().min(self.width);
                let bottom = rect.bottom().min(self.height);

                if rect.x >= right {
                    return;
                }
                for y in rect.y..bottom {
                    let start = (y * self.width + rect.x) * 4;
                    let end = (y * self.width + right) * 4;

                    self.canvas[start..end].fill(0);
                }
            }
            DisposalMethod::Previous => {
                if self.previous.len() == self.canvas.len() {
                    self.canvas.copy_from_slice(&self.previous);
                }
            }
            DisposalMethod::None | DisposalMethod::InPlace => ()
        }
    }

    /// Composite frames until `target` is in the canvas, then publish it
    pub(crate) fn composite(&mut self, data: &[u8], target: usize) -> Result<(), GifDecoderErrors> {
        if self.surface.is_none() {
            return Err(GifDecoderErrors::InsufficientMemory);
        }
        let pending = target == self.frames.len();
        let start = self.prepare_canvas(target);

        let mut status = Ok(());

        for index in start..=target {
            if pending && index == target && index > 0 {
                self.save_snapshot(index - 1);
            }
            if let Some(dirty) = self.dirty_frame.take() {
                self.dispose(dirty);
            }
            let Some(&frame) = self.frame(index) else {
                return Err(GifDecoderErrors::InsufficientData);
            };
            if frame.disposal == DisposalMethod::Previous {
                self.previous.clone_from(&self.canvas);
            }
            let result = self
                .draw_frame(data, &frame)
                .map_err(frame_status);

            match result {
                Err(e) if !e.is_recoverable() && index == target => {
                    warn!("Could not decode frame {index}: {e:?}");
                    self.decoded = None;
                    self.dirty_frame = None;
                    return Err(e);
                }
                // later frames are drawn over what this one left behind
                Err(e) if !e.is_recoverable() => {
                    warn!("Frame {index} is corrupt, drawing frame {target} over it: {e:?}");
                }
                _ => ()
            }
            if frame.disposal.needs_restore() {
                self.dirty_frame = Some(index);
            }
            status = result;
        }
        if pending && status.is_ok() {
            // more image blocks may still belong to the frame
            status = Err(GifDecoderErrors::InsufficientFrameData);
        }
        self.publish(target)?;

        self.decoded = Some(DecodedFrame {
            index: target,
            complete: !pending,
            data_len: data.len(),
            status
        });
        status
    }

    /// Copy the canvas into the surface and tell the surface about it
    fn publish(&mut self, target: usize) -> Result<(), GifDecoderErrors> {
        let row_bytes = self.width * 4;

        let Some(surface) = self.surface.as_mut() else {
            return Err(GifDecoderErrors::InsufficientMemory);
        };
        let stride = surface.stride();
        let buffer = surface
            .buffer_mut()
            .ok_or(GifDecoderErrors::InsufficientMemory)?;

        let needed = stride * self.height.saturating_sub(1) + row_bytes;

        if row_bytes == 0 || stride < row_bytes || buffer.len() < needed {
            return Err(GifDecoderErrors::InsufficientMemory);
        }
        for (src, dst) in self
            .canvas
            .chunks_exact(row_bytes)
            .zip(buffer.chunks_mut(stride))
        {
            dst[..row_bytes].copy_from_slice(src);
        }

        let cached = self.frames.get(target).and_then(|frame| frame.opaque);
        let opaque = match cached {
            Some(opaque) => opaque,
            None => {
                let opaque = surface.test_opaque();
                if let Some(frame) = self.frames.get_mut(target) {
                    frame.opaque = Some(opaque);
                }
                opaque
            }
        };
        surface.set_opaque(opaque);
        surface.mark_modified();

        Ok(())
    }

    /// Draw every image block of a frame onto the canvas
    fn draw_frame(&mut self, data: &[u8], frame: &GifFrame) -> Result<(), GifDecoderErrors> {
        let mut stream = ZByteReader::new_at(data, frame.stream_offset);
        let mut transparent = frame.transparent_index;

        for _ in 0..frame.image_count {
            loop {
                match stream.peek_u8() {
                    Some(EXTENSION_INTRODUCER) => {
                        if let Extension::GraphicControl {
                            transparent_index, ..
                        } = read_extension(&mut stream)?
                        {
                            transparent = transparent_index;
                        }
                    }
                    Some(IMAGE_SEPARATOR) => break,
                    Some(_) => {
                        return Err(GifDecoderErrors::FrameDataError(
                            "Expected an image descriptor"
                        ))
                    }
                    None => return Err(GifDecoderErrors::InsufficientFrameData)
                }
            }
            let descriptor = read_image_descriptor(&mut stream)?;
            let rect = descriptor.rect;

            if rect.right() > self.width || rect.bottom() > self.height {
                return Err(GifDecoderErrors::DataError("Image lies outside the canvas"));
            }
            let palette = if descriptor.flags & LOCAL_PALETTE_FLAG != 0 {
                let mut palette = EMPTY_PALETTE;
                read_palette(&mut stream, palette_entries(descriptor.flags), &mut palette)?;
                palette
            } else {
                self.global_palette.unwrap_or_else(default_palette)
            };
            let code_size = stream.get_u8_err()?;

            let image = ImageInfo {
                rect,
                interlaced: descriptor.flags & INTERLACE_FLAG != 0,
                code_size,
                transparent
            };
            let end = self.draw_image(data, stream.position(), &image, &palette)?;

            stream.set_position(end);
        }
        Ok(())
    }

    /// Decode one image block, returning the position after its data
    fn draw_image(
        &mut self, data: &[u8], position: usize, image: &ImageInfo, palette: &Palette
    ) -> Result<usize, GifDecoderErrors> {
        let mut reader = SubBlockReader::new(data, position);

        if image.rect.width == 0 || image.rect.height == 0 {
            return Ok(reader.finish()?);
        }
        let mut lzw = self.lzw.take().unwrap_or_else(LzwDecoder::new);
        let mut indices = core::mem::take(&mut self.indices);

        indices.resize(image.rect.width, 0);

        let result = self.draw_rows(&mut lzw, &mut reader, &mut indices, image, palette);

        self.lzw = Some(lzw);
        self.indices = indices;

        let complete = match result {
            Ok(complete) => complete,
            Err(LzwError::OutOfData { terminated: false }) => {
                return Err(GifDecoderErrors::InsufficientFrameData)
            }
            // the terminator came before the pixels
            Err(LzwError::OutOfData { terminated: true }) => false,
            Err(LzwError::Corrupt(reason)) => return Err(GifDecoderErrors::FrameDataError(reason))
        };

        let end = match reader.finish() {
            Ok(end) => end,
            Err(_) if complete => return Err(GifDecoderErrors::InsufficientFrameData),
            Err(_) => {
                return Err(GifDecoderErrors::FrameDataError(
                    "LZW end code inside truncated image data"
                ))
            }
        };
        if !complete {
            if self.options.get_strict_mode() {
                return Err(GifDecoderErrors::InsufficientFrameData);
            }
            warn!("Image data ended before the image was filled");
        }
        Ok(end)
    }

    /// Decode rows into the canvas
    ///
    /// Returns whether every row was filled, rows decoded before an
    /// error are kept.
    fn draw_rows(
        &mut self, lzw: &mut LzwDecoder, reader: &mut SubBlockReader, indices: &mut [u8],
        image: &ImageInfo, palette: &Palette
    ) -> Result<bool, LzwError> {
        let rect = image.rect;

        lzw.start(image.code_size)?;

        for row in 0..rect.height {
            let y = if image.interlaced {
                interlaced_row(row, rect.height)
            } else {
                row
            };
            let mut filled = 0;
            let result = lzw.read_indices(reader, indices, &mut filled);

            paint_row(
                &mut self.canvas,
                self.width,
                rect.x,
                rect.y + y,
                &indices[..filled],
                palette,
                image.transparent
            );
            result?;

            if filled < indices.len() {
                trace!("End code after {row} of {} rows", rect.height);
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Image descriptor fields the row decoder needs
struct ImageInfo {
    rect:        GifRect,
    interlaced:  bool,
    code_size:   u8,
    transparent: Option<u8>
}
