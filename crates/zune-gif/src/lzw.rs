/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! GIF flavoured LZW decompression
//!
//! The dictionary is a prefix/suffix table, each entry is the code
//! of the string it extends plus the index it appends. Expanding an
//! entry walks the chain backwards so indices land on a stack in
//! reverse order, they are then copied out in bursts.
use alloc::boxed::Box;

use crate::constants::{MAX_LZW_BITS, MAX_LZW_CODES};
use crate::errors::GifDecoderErrors;

const STACK_SIZE: usize = MAX_LZW_CODES * 2;

/// Reasons decompression stopped early
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum LzwError {
    /// Ran out of bytes, `terminated` is true when the zero length
    /// sub-block was reached rather than the end of the buffer
    OutOfData { terminated: bool },
    Corrupt(&'static str)
}

impl From<LzwError> for GifDecoderErrors {
    fn from(value: LzwError) -> Self {
        match value {
            LzwError::OutOfData { .. } => GifDecoderErrors::InsufficientFrameData,
            LzwError::Corrupt(reason) => GifDecoderErrors::FrameDataError(reason)
        }
    }
}

/// Reads variable width codes from a chain of sub-blocks
pub(crate) struct SubBlockReader<'a> {
    data:            &'a [u8],
    /// Next byte to read, either a sub-block length or payload
    position:        usize,
    block_remaining: usize,
    terminated:      bool,
    bits:            u32,
    num_bits:        u8
}

impl<'a> SubBlockReader<'a> {
    /// Create a reader whose first byte is the length of the first sub-block
    pub fn new(data: &'a [u8], position: usize) -> SubBlockReader<'a> {
        SubBlockReader {
            data,
            position,
            block_remaining: 0,
            terminated: false,
            bits: 0,
            num_bits: 0
        }
    }

    fn next_code(&mut self, width: u8) -> Result<u16, LzwError> {
        while self.num_bits < width {
            if self.block_remaining == 0 {
                if self.terminated {
                    return Err(LzwError::OutOfData { terminated: true });
                }
                let Some(&length) = self.data.get(self.position) else {
                    return Err(LzwError::OutOfData { terminated: false });
                };
                self.position += 1;

                if length == 0 {
                    self.terminated = true;
                    return Err(LzwError::OutOfData { terminated: true });
                }
                self.block_remaining = usize::from(length);
            }
            let Some(&byte) = self.data.get(self.position) else {
                return Err(LzwError::OutOfData { terminated: false });
            };
            self.position += 1;
            self.block_remaining -= 1;

            self.bits |= u32::from(byte) << self.num_bits;
            self.num_bits += 8;
        }
        let code = (self.bits & ((1 << width) - 1)) as u16;

        self.bits >>= width;
        self.num_bits -= width;

        Ok(code)
    }

    /// Skip whatever is left of the sub-block chain
    ///
    /// Returns the position just after the zero length terminator
    pub fn finish(&mut self) -> Result<usize, LzwError> {
        if self.terminated {
            return Ok(self.position);
        }
        self.position = self.position.saturating_add(self.block_remaining);
        self.block_remaining = 0;

        loop {
            let Some(&length) = self.data.get(self.position) else {
                return Err(LzwError::OutOfData { terminated: false });
            };
            self.position += 1;

            if length == 0 {
                self.terminated = true;
                return Ok(self.position);
            }
            self.position = self.position.saturating_add(usize::from(length));
        }
    }
}

/// LZW decoder state
///
/// The tables are large, the decoder is meant to be boxed once
/// and reused for every image through [`start`](Self::start)
pub(crate) struct LzwDecoder {
    prefix:      [u16; MAX_LZW_CODES],
    suffix:      [u8; MAX_LZW_CODES],
    stack:       [u8; STACK_SIZE],
    stack_len:   usize,
    code_size:   u8,
    min_size:    u8,
    clear_code:  u16,
    end_code:    u16,
    next_code:   u16,
    prev_code:   Option<u16>,
    first_index: u8,
    ended:       bool
}

impl LzwDecoder {
    pub fn new() -> Box<LzwDecoder> {
        Box::new(LzwDecoder {
            prefix:      [0; MAX_LZW_CODES],
            suffix:      [0; MAX_LZW_CODES],
            stack:       [0; STACK_SIZE],
            stack_len:   0,
            code_size:   0,
            min_size:    0,
            clear_code:  0,
            end_code:    0,
            next_code:   0,
            prev_code:   None,
            first_index: 0,
            ended:       false
        })
    }

    /// Prepare for a new image whose data uses `min_code_size`
    pub fn start(&mut self, min_code_size: u8) -> Result<(), LzwError> {
        if min_code_size >= MAX_LZW_BITS {
            return Err(LzwError::Corrupt("LZW minimum code size too large"));
        }
        self.min_size = min_code_size;
        self.clear_code = 1 << min_code_size;
        self.end_code = self.clear_code + 1;
        self.stack_len = 0;
        self.ended = false;

        for code in 0..self.clear_code {
            self.suffix[usize::from(code)] = code as u8;
        }
        self.reset_table();
        Ok(())
    }

    fn reset_table(&mut self) {
        self.code_size = self.min_size + 1;
        self.next_code = self.clear_code + 2;
        self.prev_code = None;
    }

    #[inline(always)]
    fn push(&mut self, index: u8) -> Result<(), LzwError> {
        if self.stack_len >= STACK_SIZE {
            return Err(LzwError::Corrupt("LZW dictionary entry refers to itself"));
        }
        self.stack[self.stack_len] = index;
        self.stack_len += 1;
        Ok(())
    }

    /// Decode the next code, expanding it onto the stack
    ///
    /// Returns false once the end code is seen
    fn next_sequence(&mut self, reader: &mut SubBlockReader) -> Result<bool, LzwError> {
        let code = loop {
            let code = reader.next_code(self.code_size)?;

            if code == self.clear_code {
                self.reset_table();
                continue;
            }
            if code == self.end_code {
                self.ended = true;
                return Ok(false);
            }
            break code;
        };

        let Some(prev_code) = self.prev_code else {
            // first code after a clear has nothing to extend
            if code >= self.clear_code {
                return Err(LzwError::Corrupt("LZW dictionary entry refers to itself"));
            }
            self.first_index = self.suffix[usize::from(code)];
            self.prev_code = Some(code);
            self.push(self.first_index)?;
            return Ok(true);
        };

        if code > self.next_code {
            return Err(LzwError::Corrupt("LZW code refers to an undefined entry"));
        }

        let mut current = code;

        if code == self.next_code {
            // string being defined, previous string plus its own first index
            self.push(self.first_index)?;
            current = prev_code;
        }
        while current >= self.clear_code {
            self.push(self.suffix[usize::from(current)])?;
            current = self.prefix[usize::from(current)];
        }
        self.first_index = self.suffix[usize::from(current)];
        self.push(self.first_index)?;

        if usize::from(self.next_code) < MAX_LZW_CODES {
            let entry = usize::from(self.next_code);

            self.prefix[entry] = prev_code;
            self.suffix[entry] = self.first_index;
            self.next_code += 1;

            if self.next_code >= (1 << self.code_size) && self.code_size < MAX_LZW_BITS {
                self.code_size += 1;
            }
        }
        self.prev_code = Some(code);

        Ok(true)
    }

    /// Fill `out` with palette indices
    ///
    /// `filled` is advanced as indices are written so the caller can use a
    /// partially filled buffer when an error is returned. Stopping short
    /// without an error means the end code was reached.
    pub fn read_indices(
        &mut self, reader: &mut SubBlockReader, out: &mut [u8], filled: &mut usize
    ) -> Result<(), LzwError> {
        while *filled < out.len() {
            if self.stack_len > 0 {
                let burst = self.stack_len.min(out.len() - *filled);

                for index in &mut out[*filled..*filled + burst] {
                    self.stack_len -= 1;
                    *index = self.stack[self.stack_len];
                }
                *filled += burst;
            } else if self.ended || !self.next_sequence(reader)? {
                break;
            }
        }
        Ok(())
    }
}
