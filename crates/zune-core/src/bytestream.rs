/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! The reader borrows a byte slice owned by the caller and keeps
//! a position into it. The position can be saved and handed to a
//! new reader created over a longer slice of the same data, which is
//! how decoders resume parsing when more bytes arrive.
pub use reader::{ZByteIoError, ZByteReader};

mod reader;
