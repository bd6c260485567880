/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors returned by the bytestream reader
pub enum ZByteIoError {
    // requested, remaining
    NotEnoughBytes(usize, usize),
    Generic(&'static str)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// A cursor over a borrowed byte slice
///
/// The lifetime parameter is from the stream which we are reading,
/// the position is owned and may be extracted with [`position`](Self::position)
/// and restored on a reader created over a longer slice.
///
/// Reads never panic, methods ending with `_err` return an error
/// when the stream cannot satisfy them and leave the position untouched.
#[derive(Copy, Clone)]
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    pub const fn new(stream: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream,
            position: 0
        }
    }
    /// Create a reader which starts reading at `position`
    ///
    /// `position` may be beyond the end of the stream, in which
    /// case every read fails until a longer stream is supplied.
    pub const fn new_at(stream: &'a [u8], position: usize) -> ZByteReader<'a> {
        ZByteReader { stream, position }
    }
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }
    /// Number of bytes left from the current position
    #[inline]
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }
    /// Return true if the stream has at least `num` bytes left
    #[inline]
    pub const fn has(&self, num: usize) -> bool {
        self.remaining() >= num
    }
    #[inline]
    pub fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    /// Look at the next byte without advancing
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }
    /// Look at the byte `offset` bytes from the current position
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.stream.get(self.position.checked_add(offset)?).copied()
    }
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ZByteIoError::NotEnoughBytes(1, 0))
        }
    }
    /// Skip `num` bytes or return an error if the stream doesn't have them
    ///
    /// The position is not modified on error
    pub fn skip_err(&mut self, num: usize) -> Result<(), ZByteIoError> {
        if !self.has(num) {
            return Err(ZByteIoError::NotEnoughBytes(num, self.remaining()));
        }
        self.position += num;
        Ok(())
    }
    /// Return a reference to the next `num` bytes and advance past them
    pub fn get_slice_err(&mut self, num: usize) -> Result<&'a [u8], ZByteIoError> {
        let end = self
            .position
            .checked_add(num)
            .ok_or(ZByteIoError::Generic("Position overflowed"))?;

        match self.stream.get(self.position..end) {
            Some(slice) => {
                self.position = end;
                Ok(slice)
            }
            None => Err(ZByteIoError::NotEnoughBytes(num, self.remaining()))
        }
    }
    #[inline]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        byte_store.copy_from_slice(self.get_slice_err(N)?);
        Ok(byte_store)
    }
}

macro_rules! get_single_type {
    ($name:tt,$int_type:tt) => {
        impl<'a> ZByteReader<'a>
        {
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$int_type, ZByteIoError>
            {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let space = self.read_fixed_bytes_or_error::<SIZE_OF_VAL>()?;

                Ok($int_type::from_le_bytes(space))
            }
        }
    };
}

get_single_type!(get_u16_le_err, u16);
