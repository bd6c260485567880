/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::constants::DEFAULT_DELAY;
use crate::enums::DisposalMethod;

/// A rectangle on the canvas
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct GifRect {
    pub x:      usize,
    pub y:      usize,
    pub width:  usize,
    pub height: usize
}

impl GifRect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> GifRect {
        GifRect {
            x,
            y,
            width,
            height
        }
    }
    /// One past the right most column covered
    pub const fn right(&self) -> usize {
        self.x + self.width
    }
    /// One past the bottom most row covered
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }
    /// Smallest rectangle covering both `self` and `other`
    pub fn union(&self, other: &GifRect) -> GifRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);

        GifRect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y
        }
    }
}

/// Information about a single animation frame
///
/// Frames are recorded by [`initialise`](crate::GifDecoder::initialise)
/// without decoding pixels, a frame may be made of more than one image
/// block, in which case [`rect`](Self::rect) covers all of them.
#[derive(Copy, Clone, Debug)]
pub struct GifFrame {
    pub(crate) stream_offset:     usize,
    pub(crate) delay:             u16,
    pub(crate) disposal:          DisposalMethod,
    pub(crate) transparent_index: Option<u8>,
    pub(crate) rect:              GifRect,
    pub(crate) image_count:       usize,
    pub(crate) interlaced:        bool,
    pub(crate) opaque:            Option<bool>
}

impl GifFrame {
    pub(crate) const fn new(stream_offset: usize) -> GifFrame {
        GifFrame {
            stream_offset,
            delay: DEFAULT_DELAY,
            disposal: DisposalMethod::None,
            transparent_index: None,
            rect: GifRect::new(0, 0, 0, 0),
            image_count: 0,
            interlaced: false,
            opaque: None
        }
    }
    /// Add an image block to the frame, growing the frame's area
    pub(crate) fn add_image(&mut self, rect: GifRect, interlaced: bool) {
        if self.image_count == 0 {
            self.rect = rect;
            self.interlaced = interlaced;
        } else {
            self.rect = self.rect.union(&rect);
        }
        self.image_count += 1;
    }
    /// Offset into the stream where this frame's blocks start
    pub const fn stream_offset(&self) -> usize {
        self.stream_offset
    }
    /// Frame delay in hundredths of a second
    pub const fn delay(&self) -> u16 {
        self.delay
    }
    /// What happens to the frame's area before the next frame is drawn
    pub const fn disposal(&self) -> DisposalMethod {
        self.disposal
    }
    /// Palette index which leaves the canvas untouched, if any
    pub const fn transparent_index(&self) -> Option<u8> {
        self.transparent_index
    }
    /// Area of the canvas touched by this frame
    pub const fn rect(&self) -> GifRect {
        self.rect
    }
    /// Number of image blocks which make up this frame
    pub const fn image_count(&self) -> usize {
        self.image_count
    }
    /// Whether the first image block of the frame is interlaced
    pub const fn interlaced(&self) -> bool {
        self.interlaced
    }
    /// Whether the canvas is fully opaque once this frame is shown
    ///
    /// `None` until the frame has been decoded once.
    pub const fn opaque(&self) -> Option<bool> {
        self.opaque
    }
}
