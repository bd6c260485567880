/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Destination of decoded pixels
//!
//! The decoder does not own the memory frames end up in, it asks a
//! [`PixelSink`] for a [`Surface`] sized to the canvas and writes RGBA
//! rows into it. [`BitmapSink`] is a plain in memory implementation.
use alloc::vec::Vec;

/// A pixel buffer the decoder paints frames into
///
/// Pixels are RGBA, 4 bytes each, rows are [`stride`](Self::stride)
/// bytes apart.
pub trait Surface {
    /// Mutable access to the pixels, `None` if the buffer is unavailable
    fn buffer_mut(&mut self) -> Option<&mut [u8]>;
    /// Number of bytes between the start of two rows
    fn stride(&self) -> usize;
    /// Called after the decoder has changed the pixels
    fn mark_modified(&mut self);
    /// Record whether every pixel is fully opaque
    fn set_opaque(&mut self, opaque: bool);
    /// Inspect the pixels and report whether every pixel is fully opaque
    fn test_opaque(&self) -> bool;
}

/// Creates and destroys surfaces on behalf of the decoder
pub trait PixelSink {
    type Surface: Surface;

    /// Create a surface of `width` by `height` pixels, `None` on allocation failure
    fn create(&mut self, width: usize, height: usize) -> Option<Self::Surface>;
    /// Release a surface previously returned by [`create`](Self::create)
    fn destroy(&mut self, surface: Self::Surface) {
        drop(surface);
    }
}

/// An in memory RGBA image
#[derive(Clone, Debug, Default)]
pub struct RgbaBitmap {
    width:         usize,
    height:        usize,
    pixels:        Vec<u8>,
    opaque:        bool,
    modifications: usize
}

impl RgbaBitmap {
    /// Create a fully transparent bitmap
    ///
    /// Returns `None` if the pixels cannot be allocated
    pub fn new(width: usize, height: usize) -> Option<RgbaBitmap> {
        let size = width.checked_mul(height)?.checked_mul(4)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(size).ok()?;
        pixels.resize(size, 0);

        Some(RgbaBitmap {
            width,
            height,
            pixels,
            opaque: false,
            modifications: 0
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// RGBA pixels, row after row
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The value last given to [`set_opaque`](Surface::set_opaque)
    pub const fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Number of times the decoder reported changing the pixels
    pub const fn modifications(&self) -> usize {
        self.modifications
    }
}

impl Surface for RgbaBitmap {
    fn buffer_mut(&mut self) -> Option<&mut [u8]> {
        Some(&mut self.pixels)
    }

    fn stride(&self) -> usize {
        self.width * 4
    }

    fn mark_modified(&mut self) {
        self.modifications += 1;
    }

    fn set_opaque(&mut self, opaque: bool) {
        self.opaque = opaque;
    }

    fn test_opaque(&self) -> bool {
        self.pixels.chunks_exact(4).all(|pixel| pixel[3] == 255)
    }
}

/// A sink handing out [`RgbaBitmap`]s
#[derive(Copy, Clone, Debug, Default)]
pub struct BitmapSink {
    created:   usize,
    destroyed: usize
}

impl BitmapSink {
    pub const fn new() -> BitmapSink {
        BitmapSink {
            created:   0,
            destroyed: 0
        }
    }
    /// Number of surfaces created so far
    pub const fn created(&self) -> usize {
        self.created
    }
    /// Number of surfaces destroyed so far
    pub const fn destroyed(&self) -> usize {
        self.destroyed
    }
}

impl PixelSink for BitmapSink {
    type Surface = RgbaBitmap;

    fn create(&mut self, width: usize, height: usize) -> Option<RgbaBitmap> {
        let bitmap = RgbaBitmap::new(width, height)?;
        self.created += 1;
        Some(bitmap)
    }

    fn destroy(&mut self, surface: RgbaBitmap) {
        self.destroyed += 1;
        drop(surface);
    }
}
