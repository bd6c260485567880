/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::boxed::Box;
use alloc::vec::Vec;

use zune_core::log::{debug, info, trace};
use zune_core::options::DecoderOptions;

use crate::constants::DEFAULT_LOOP_COUNT;
use crate::enums::ScanStatus;
use crate::errors::GifDecoderErrors;
use crate::frame::GifFrame;
use crate::lzw::LzwDecoder;
use crate::palette::Palette;
use crate::surface::PixelSink;

/// The frame currently materialised in the canvas
#[derive(Copy, Clone, Debug)]
pub(crate) struct DecodedFrame {
    pub index:    usize,
    /// Whether the frame was fully indexed when it was decoded
    pub complete: bool,
    /// Length of the data the frame was decoded from
    pub data_len: usize,
    pub status:   Result<(), GifDecoderErrors>
}

/// Canvas state right after a complete frame was drawn
///
/// Kept so that a partially available frame can be redrawn
/// when more bytes arrive without compositing everything before it
pub(crate) struct CanvasSnapshot {
    pub index:       usize,
    pub canvas:      Vec<u8>,
    pub previous:    Vec<u8>,
    pub dirty_frame: Option<usize>
}

/// A progressive GIF decoder
///
/// The decoder is a session over a byte buffer that may grow between calls.
/// [`initialise`](Self::initialise) indexes as many frames as the available
/// bytes allow, [`decode`](Self::decode) paints any indexed frame into a
/// surface obtained from the [`PixelSink`] and
/// [`finalise`](Self::finalise) releases everything.
///
/// # Example
/// ```
/// use zune_gif::{BitmapSink, GifDecoder};
///
/// let data = [
///     b'G', b'I', b'F', b'8', b'9', b'a', 1, 0, 1, 0, 0x80, 0, 0, // header
///     0, 0, 0, 255, 255, 255, // palette
///     0x2C, 0, 0, 0, 0, 1, 0, 1, 0, 0, 2, 2, 0x4C, 0x01, 0, // image
///     0x3B // trailer
/// ];
/// let mut decoder = GifDecoder::new(BitmapSink::new());
///
/// decoder.initialise(&data).unwrap();
/// decoder.decode(&data, 0).unwrap();
///
/// assert_eq!(decoder.surface().unwrap().pixels(), &[255, 255, 255, 255]);
/// ```
pub struct GifDecoder<S: PixelSink> {
    pub(crate) sink:             S,
    pub(crate) options:          DecoderOptions,
    pub(crate) surface:          Option<S::Surface>,
    /// Offset of the next frame to index
    pub(crate) position:         usize,
    /// Largest data length seen
    pub(crate) data_len:         usize,
    pub(crate) read_headers:     bool,
    pub(crate) width:            usize,
    pub(crate) height:           usize,
    pub(crate) background_index: u8,
    pub(crate) global_palette:   Option<Palette>,
    pub(crate) frames:           Vec<GifFrame>,
    /// The frame after `frames` whose blocks are not all present yet
    pub(crate) pending:          Option<GifFrame>,
    pub(crate) loop_count:       u16,
    pub(crate) complete:         bool,
    pub(crate) decoded:          Option<DecodedFrame>,
    pub(crate) dirty_frame:      Option<usize>,
    /// RGBA pixels of the decoded frame
    pub(crate) canvas:           Vec<u8>,
    /// Canvas before the dirty frame was drawn, for restore previous disposal
    pub(crate) previous:         Vec<u8>,
    pub(crate) snapshot:         Option<CanvasSnapshot>,
    pub(crate) lzw:              Option<Box<LzwDecoder>>,
    /// Palette indices of one image row
    pub(crate) indices:          Vec<u8>
}

impl<S: PixelSink> GifDecoder<S> {
    /// Create a new decoder which will get surfaces from `sink`
    pub fn new(sink: S) -> GifDecoder<S> {
        GifDecoder::new_with_options(sink, DecoderOptions::default())
    }

    /// Create a new decoder with the specified options
    pub fn new_with_options(sink: S, options: DecoderOptions) -> GifDecoder<S> {
        GifDecoder {
            sink,
            options,
            surface: None,
            position: 0,
            data_len: 0,
            read_headers: false,
            width: 0,
            height: 0,
            background_index: 0,
            global_palette: None,
            frames: Vec::new(),
            pending: None,
            loop_count: DEFAULT_LOOP_COUNT,
            complete: false,
            decoded: None,
            dirty_frame: None,
            canvas: Vec::new(),
            previous: Vec::new(),
            snapshot: None,
            lzw: None,
            indices: Vec::new()
        }
    }

    /// Reject buffers shorter than one seen before
    pub(crate) fn check_data(&mut self, data: &[u8]) -> Result<(), GifDecoderErrors> {
        if data.len() < self.data_len {
            return Err(GifDecoderErrors::DataError(
                "Data is shorter than a previous call, it may only grow"
            ));
        }
        self.data_len = data.len();
        Ok(())
    }

    /// Index as many frames as `data` allows
    ///
    /// `data` must hold the same bytes as on previous calls, optionally
    /// with more appended.
    ///
    /// # Returns
    /// - `Ok(())`: The trailer was reached, every frame is indexed
    /// - `Err(InsufficientData)`: Not even one frame could be started
    /// - `Err(InsufficientFrameData)`: Some frames are usable, more data is needed for the rest
    /// - Any other error means the stream is corrupt
    pub fn initialise(&mut self, data: &[u8]) -> Result<(), GifDecoderErrors> {
        self.check_data(data)?;

        if !self.read_headers {
            self.decode_headers(data)?;
        }
        if self.complete {
            return Ok(());
        }
        loop {
            match self.scan_frame(data) {
                Ok(ScanStatus::Frame) => {
                    trace!("Indexed frame {}", self.frames.len() - 1);
                }
                Ok(ScanStatus::Complete) => {
                    self.complete = true;
                    info!(
                        "Indexed {} frames of {}x{} pixels",
                        self.frames.len(),
                        self.width,
                        self.height
                    );
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    debug!(
                        "Waiting for more data, {} frames indexed, {} started",
                        self.frame_count(),
                        self.frame_count_partial()
                    );
                    return Err(if self.frame_count_partial() > 0 {
                        GifDecoderErrors::InsufficientFrameData
                    } else {
                        GifDecoderErrors::InsufficientData
                    });
                }
                Err(e) => return Err(e)
            }
        }
    }

    /// Paint `frame` into the surface
    ///
    /// Frames can be decoded in any order and any number of times,
    /// decoding the frame already in the surface again does nothing.
    /// A frame which is only partially available is painted as far as
    /// possible and `InsufficientFrameData` is returned.
    ///
    /// On errors other than `InsufficientFrameData` the surface is left
    /// as it was.
    pub fn decode(&mut self, data: &[u8], frame: usize) -> Result<(), GifDecoderErrors> {
        self.check_data(data)?;

        if frame >= self.frame_count_partial() {
            return Err(GifDecoderErrors::InsufficientData);
        }
        if let Some(decoded) = self.decoded {
            if decoded.index == frame && (decoded.complete || decoded.data_len == data.len()) {
                trace!("Frame {frame} is already decoded");
                return decoded.status;
            }
        }
        self.composite(data, frame)
    }

    /// Release the surface and every table, returning the decoder
    /// to its newly created state
    ///
    /// Calling it more than once is fine, it also runs on drop.
    pub fn finalise(&mut self) {
        if let Some(surface) = self.surface.take() {
            self.sink.destroy(surface);
        }
        self.position = 0;
        self.data_len = 0;
        self.read_headers = false;
        self.width = 0;
        self.height = 0;
        self.background_index = 0;
        self.global_palette = None;
        self.frames = Vec::new();
        self.pending = None;
        self.loop_count = DEFAULT_LOOP_COUNT;
        self.complete = false;
        self.decoded = None;
        self.dirty_frame = None;
        self.canvas = Vec::new();
        self.previous = Vec::new();
        self.snapshot = None;
        self.lzw = None;
        self.indices = Vec::new();
    }

    /// Canvas dimensions as `(width, height)`
    ///
    /// `(0, 0)` until the header has been read
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of fully indexed frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames which can be at least partially decoded
    pub fn frame_count_partial(&self) -> usize {
        self.frames.len() + usize::from(self.pending.is_some())
    }

    /// Information about a frame, partially indexed frames included
    pub fn frame(&self, index: usize) -> Option<&GifFrame> {
        match self.frames.get(index) {
            Some(frame) => Some(frame),
            None if index == self.frames.len() => self.pending.as_ref(),
            None => None
        }
    }

    /// Number of times the animation should be repeated, 0 means forever
    pub const fn loop_count(&self) -> u16 {
        self.loop_count
    }

    /// The background colour index from the logical screen descriptor
    pub const fn background_index(&self) -> u8 {
        self.background_index
    }

    /// The frame currently in the surface
    pub fn decoded_frame(&self) -> Option<usize> {
        self.decoded.map(|decoded| decoded.index)
    }

    /// Whether the trailer has been reached
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    pub const fn options(&self) -> &DecoderOptions {
        &self.options
    }

    pub fn surface(&self) -> Option<&S::Surface> {
        self.surface.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: PixelSink> Drop for GifDecoder<S> {
    fn drop(&mut self) {
        self.finalise();
    }
}
