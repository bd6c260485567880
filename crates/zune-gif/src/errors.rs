/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use zune_core::bytestream::ZByteIoError;

/// Possible statuses and errors returned by the gif decoder
///
/// The first two variants are not fatal, they indicate that the
/// decoder wants more bytes and the call can be repeated once
/// the caller has them, see [`is_recoverable`](Self::is_recoverable)
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum GifDecoderErrors {
    /// Not enough bytes to do anything useful yet
    InsufficientData,
    /// Not enough bytes to complete the current frame,
    /// frames that were already indexed remain usable
    InsufficientFrameData,
    /// The encoded data of a frame is invalid, frames before
    /// it are unaffected
    FrameDataError(&'static str),
    /// The container itself is corrupt, the stream should
    /// not be trusted
    DataError(&'static str),
    /// An allocation failed, either ours or the pixel sink's
    InsufficientMemory
}

impl GifDecoderErrors {
    /// Return true if repeating the call with more data may succeed
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InsufficientData | Self::InsufficientFrameData)
    }
}

impl Debug for GifDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InsufficientData => {
                writeln!(f, "Insufficient data, supply more bytes and retry")
            }
            Self::InsufficientFrameData => {
                writeln!(
                    f,
                    "Insufficient data to complete the frame, supply more bytes and retry"
                )
            }
            Self::FrameDataError(reason) => {
                writeln!(f, "Corrupt frame data: {reason}")
            }
            Self::DataError(reason) => {
                writeln!(f, "Corrupt gif data: {reason}")
            }
            Self::InsufficientMemory => {
                writeln!(f, "Could not allocate memory for the gif")
            }
        }
    }
}

impl Display for GifDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GifDecoderErrors {}

impl From<&'static str> for GifDecoderErrors {
    fn from(value: &'static str) -> Self {
        Self::DataError(value)
    }
}

impl From<ZByteIoError> for GifDecoderErrors {
    fn from(value: ZByteIoError) -> Self {
        match value {
            ZByteIoError::NotEnoughBytes(..) => Self::InsufficientData,
            ZByteIoError::Generic(reason) => Self::DataError(reason)
        }
    }
}

impl From<alloc::collections::TryReserveError> for GifDecoderErrors {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        Self::InsufficientMemory
    }
}
