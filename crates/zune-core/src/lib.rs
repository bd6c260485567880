/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the gif decoder and its tools
//!
//! This crate provides a set of core routines shared
//! by the decoder and the command line front end
//!
//! It currently contains
//!
//! - A bytestream reader over a borrowed, possibly growing buffer
//!   with a position that can outlive the borrow
//! - Decoder options
//! - Logging macros which forward to the `log` crate when the `log`
//!   feature is enabled and compile to nothing otherwise
//!
//! This library is `#[no_std]` unless the `std` feature is enabled.
//!
//! # Features
//!  - `std`: Enables `std` support, e.g implementing `std::error::Error`
//!     for the error types in this crate.
//!
//!  - `log`: Forward logging macros to the `log` crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod log;
pub mod options;
