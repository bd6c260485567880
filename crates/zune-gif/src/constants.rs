/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Introduces an extension block
pub const EXTENSION_INTRODUCER: u8 = 0x21;
/// Introduces an image descriptor
pub const IMAGE_SEPARATOR: u8 = 0x2C;
/// End of the gif stream
pub const TRAILER: u8 = 0x3B;

pub const GRAPHIC_CONTROL_LABEL: u8 = 0xF9;
pub const APPLICATION_LABEL: u8 = 0xFF;

/// Identifiers of application extensions carrying a loop count
pub const LOOPING_APPLICATIONS: [&[u8; 11]; 2] = [b"NETSCAPE2.0", b"ANIMEXTS1.0"];

/// Logical screen descriptor, signature included
pub const HEADER_SIZE: usize = 13;
/// Image descriptor, separator included
pub const IMAGE_DESCRIPTOR_SIZE: usize = 10;
/// Minimum bytes needed before we try to index a frame
pub const MIN_FRAME_SIZE: usize = 10;

/// Maximum LZW code width
pub const MAX_LZW_BITS: u8 = 12;
pub const MAX_LZW_CODES: usize = 1 << MAX_LZW_BITS;
pub const MAX_COLORS: usize = 256;

/// Delay used for frames which have no graphic control extension
pub const DEFAULT_DELAY: u16 = 100;
/// Loop count used when no looping extension is present, play once
pub const DEFAULT_LOOP_COUNT: u16 = 1;

// image descriptor flags
pub const LOCAL_PALETTE_FLAG: u8 = 0x80;
pub const INTERLACE_FLAG: u8 = 0x40;
// logical screen descriptor flags
pub const GLOBAL_PALETTE_FLAG: u8 = 0x80;
pub const PALETTE_SIZE_MASK: u8 = 0x07;
// graphic control extension flags
pub const TRANSPARENCY_FLAG: u8 = 0x01;
pub const DISPOSAL_MASK: u8 = 0x1C;
