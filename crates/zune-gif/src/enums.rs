/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::constants::DISPOSAL_MASK;

/// Different GIF disposal methods
///
/// This tells the decoder what to do with the area covered
/// by a frame before the next frame is drawn
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum DisposalMethod {
    /// No disposal specified, the frame is left in place
    #[default]
    None,
    /// Leave the frame in place
    InPlace,
    /// Clear the frame's area to transparent
    Background,
    /// Restore the area to what it was before the frame was drawn
    Previous
}

impl DisposalMethod {
    /// Extract the disposal method from graphic control extension flags
    ///
    /// Reserved values are treated as [`None`](Self::None)
    pub const fn from_flags(flags: u8) -> DisposalMethod {
        match (flags & DISPOSAL_MASK) >> 2 {
            1 => DisposalMethod::InPlace,
            2 => DisposalMethod::Background,
            3 => DisposalMethod::Previous,
            _ => DisposalMethod::None
        }
    }
    /// Whether the frame has to be undone before the next one is drawn
    pub const fn needs_restore(self) -> bool {
        matches!(self, DisposalMethod::Background | DisposalMethod::Previous)
    }
}

/// Result of trying to index one frame
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ScanStatus {
    /// A frame was indexed, there may be more
    Frame,
    /// The trailer was reached
    Complete
}
