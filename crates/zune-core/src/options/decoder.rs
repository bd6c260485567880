/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

/// Canvas sizes which broken encoders write into the logical screen
/// descriptor instead of the real image size.
///
/// A gif declaring one of these is assumed to be lying and its canvas is
/// grown from the frames instead.
pub const GIF_COMMON_SCREEN_SIZES: &[(usize, usize)] = &[
    (640, 480),
    (640, 512),
    (800, 600),
    (1024, 768),
    (1280, 1024),
    (1600, 1200)
];

fn decoder_strict_mode() -> DecoderFlags {
    DecoderFlags {
        gif_strict_lzw:      true,
        gif_distrust_canvas: true
    }
}

/// Command line options, error resilient
///
/// Features
/// - Accept image data that ends before all pixels were produced
/// - Ignore canvas sizes that look like screen sizes
fn cmd_options() -> DecoderFlags {
    DecoderFlags {
        gif_strict_lzw:      false,
        gif_distrust_canvas: true
    }
}

/// Decoder options that are flags
///
/// NOTE: When you extend this, add true or false to
/// all options above that return a `DecoderFlag`
#[derive(Copy, Debug, Clone)]
pub struct DecoderFlags {
    /// Whether the gif decoder should report image data that ends
    /// before the image is filled as an error.
    gif_strict_lzw:      bool,
    /// Whether the gif decoder should ignore implausible logical
    /// screen sizes and grow the canvas from frame geometry
    gif_distrust_canvas: bool
}

impl Default for DecoderFlags {
    fn default() -> Self {
        cmd_options()
    }
}

/// Decoder options
///
/// Not all options are respected by all decoders
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_width:                  usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_height:                 usize,
    /// Maximum number of frames an animation may declare
    ///
    /// - Default value: 4096
    /// - Respected by: `gif`
    gif_max_frames:             usize,
    /// Canvas sizes which are not trusted when found in
    /// a gif header
    ///
    /// - Default value: [`GIF_COMMON_SCREEN_SIZES`]
    /// - Respected by: `gif`
    gif_untrusted_canvas_sizes: &'static [(usize, usize)],
    /// Boolean flags that influence decoding
    flags:                      DecoderFlags
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:                  1 << 14,
            max_height:                 1 << 14,
            gif_max_frames:             4096,
            gif_untrusted_canvas_sizes: GIF_COMMON_SCREEN_SIZES,
            flags:                      DecoderFlags::default()
        }
    }
}

/// Initializers
impl DecoderOptions {
    /// Create the decoder with options setting most configurable
    /// options to be their safe counterparts
    ///
    /// This is the same as `default` option as default initializes
    /// options to the  safe variant.
    pub fn new_safe() -> DecoderOptions {
        DecoderOptions::default()
    }

    /// Create the decoder options in strict mode
    ///
    /// - Image data ending before the image is complete is an error
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default().set_decoder_flags(decoder_strict_mode())
    }

    /// Create the decoder options with the following characteristics
    ///
    /// - Accept slightly broken image data
    /// - Distrust screen sized canvases
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default().set_decoder_flags(cmd_options())
    }
}

/// Global options respected by all decoders
impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn get_strict_mode(&self) -> bool {
        self.flags.gif_strict_lzw
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    ///
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    fn set_decoder_flags(mut self, flags: DecoderFlags) -> Self {
        self.flags = flags;
        self
    }
    /// Set whether the decoder should be in standards conforming/
    /// strict mode
    ///
    /// This reduces the error tolerance level for the decoders and invalid
    /// samples will be rejected by the decoder
    ///
    /// # Arguments
    ///
    /// * `yes`:
    ///
    /// returns: DecoderOptions
    ///
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.flags.gif_strict_lzw = yes;
        self
    }
}

/// GIF specific options
impl DecoderOptions {
    /// Maximum number of frames the gif decoder will index
    /// before treating the stream as corrupt
    pub const fn gif_get_max_frames(&self) -> usize {
        self.gif_max_frames
    }

    /// Set maximum number of frames the gif decoder will index
    ///
    /// Streams claiming more frames are rejected, which protects
    /// against junk data that parses as millions of tiny frames.
    pub fn gif_set_max_frames(mut self, frames: usize) -> Self {
        self.gif_max_frames = frames;
        self
    }

    /// Whether the decoder ignores implausible canvas sizes found in
    /// the logical screen descriptor
    pub const fn gif_get_distrust_canvas(&self) -> bool {
        self.flags.gif_distrust_canvas
    }

    /// Set whether the decoder should ignore implausible canvas sizes
    ///
    /// When set, a canvas equal to one of the
    /// [untrusted sizes](Self::gif_get_untrusted_canvas_sizes) starts as 1x1
    /// and grows to fit the frames. Zero sized canvases and ones larger than
    /// the configured maximum dimensions are always treated this way.
    pub fn gif_set_distrust_canvas(mut self, yes: bool) -> Self {
        self.flags.gif_distrust_canvas = yes;
        self
    }

    /// Get the list of canvas sizes treated as untrustworthy
    pub const fn gif_get_untrusted_canvas_sizes(&self) -> &'static [(usize, usize)] {
        self.gif_untrusted_canvas_sizes
    }

    /// Replace the list of canvas sizes treated as untrustworthy
    ///
    /// An empty list keeps only the zero and oversized checks.
    pub fn gif_set_untrusted_canvas_sizes(mut self, sizes: &'static [(usize, usize)]) -> Self {
        self.gif_untrusted_canvas_sizes = sizes;
        self
    }
}
