/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A progressive GIF decoder
//!
//! This crate decodes animated GIFs whose bytes may still be arriving,
//! e.g. from a network fetch. Frames are indexed as soon as their blocks
//! are present, any indexed frame can be decoded in any order and frames
//! whose data is only partially present are painted as far as possible.
//!
//! Decoded pixels go into a surface provided by a [`PixelSink`], the crate
//! ships [`BitmapSink`] which keeps frames in memory as RGBA.
//!
//! # Features
//! - `std`: Implement `std::error::Error` for the error type
//! - `log`: Log through the `log` crate
//! - `serde`: Serialize frame information
//!
//! # Example
//! - Feed a gif a chunk at a time
//! ```no_run
//! use zune_gif::{BitmapSink, GifDecoder};
//!
//! let file = std::fs::read("animation.gif").unwrap();
//! let mut decoder = GifDecoder::new(BitmapSink::new());
//!
//! for end in (0..=file.len()).step_by(4096) {
//!     match decoder.initialise(&file[..end]) {
//!         Ok(()) => break,
//!         Err(e) if e.is_recoverable() => continue,
//!         Err(e) => panic!("{e:?}")
//!     }
//! }
//! decoder.initialise(&file).unwrap();
//!
//! for frame in 0..decoder.frame_count() {
//!     decoder.decode(&file, frame).unwrap();
//!     let _pixels = decoder.surface().unwrap().pixels();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use decoder::GifDecoder;
pub use enums::DisposalMethod;
pub use errors::GifDecoderErrors;
pub use frame::{GifFrame, GifRect};
pub use surface::{BitmapSink, PixelSink, RgbaBitmap, Surface};
pub use zune_core;

mod compositor;
mod constants;
mod decoder;
mod enums;
mod errors;
mod extensions;
mod frame;
mod headers;
mod lzw;
mod palette;
mod scanner;
mod serde;
mod surface;
