/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Extension and sub-block parsing shared by the scanner and the compositor
use zune_core::bytestream::ZByteReader;
use zune_core::log::trace;

use crate::constants::{
    APPLICATION_LABEL, GRAPHIC_CONTROL_LABEL, IMAGE_DESCRIPTOR_SIZE, LOOPING_APPLICATIONS,
    TRANSPARENCY_FLAG
};
use crate::enums::DisposalMethod;
use crate::errors::GifDecoderErrors;
use crate::frame::GifRect;

/// An extension block the decoder cares about
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Extension {
    GraphicControl {
        delay:             u16,
        disposal:          DisposalMethod,
        transparent_index: Option<u8>
    },
    LoopCount(u16),
    Other
}

/// Skip a chain of sub-blocks including the zero length terminator
pub(crate) fn skip_sub_blocks(stream: &mut ZByteReader) -> Result<(), GifDecoderErrors> {
    loop {
        let length = usize::from(stream.get_u8_err()?);

        if length == 0 {
            return Ok(());
        }
        stream.skip_err(length)?;
    }
}

/// Parse an extension, the stream must be positioned at the introducer
///
/// The whole extension, terminator included, is consumed.
pub(crate) fn read_extension(stream: &mut ZByteReader) -> Result<Extension, GifDecoderErrors> {
    // introducer
    stream.skip_err(1)?;

    let label = stream.get_u8_err()?;

    let extension = match label {
        GRAPHIC_CONTROL_LABEL => {
            let length = usize::from(stream.get_u8_err()?);
            let block = stream.get_slice_err(length)?;

            if block.len() < 4 {
                trace!("Short graphic control extension of {} bytes, ignoring", block.len());
                Extension::Other
            } else {
                let flags = block[0];
                let transparent_index = if flags & TRANSPARENCY_FLAG != 0 {
                    Some(block[3])
                } else {
                    None
                };
                Extension::GraphicControl {
                    delay: u16::from_le_bytes([block[1], block[2]]),
                    disposal: DisposalMethod::from_flags(flags),
                    transparent_index
                }
            }
        }
        APPLICATION_LABEL => {
            let length = usize::from(stream.get_u8_err()?);
            let identifier = stream.get_slice_err(length)?;

            let looping = LOOPING_APPLICATIONS
                .iter()
                .any(|app| identifier == app.as_slice());

            // loop sub-block is [3, 1, lo, hi]
            if looping && stream.peek_u8() == Some(3) && stream.peek_at(1) == Some(1) {
                let block = stream.get_slice_err(4)?;
                let count = u16::from_le_bytes([block[2], block[3]]);

                trace!("Loop count: {count}");
                Extension::LoopCount(count)
            } else {
                Extension::Other
            }
        }
        _ => {
            trace!("Skipping extension with label 0x{label:02X}");
            Extension::Other
        }
    };
    skip_sub_blocks(stream)?;

    Ok(extension)
}

/// Image descriptor fields after the separator
#[derive(Copy, Clone, Debug)]
pub(crate) struct ImageDescriptor {
    pub rect:  GifRect,
    pub flags: u8
}

/// Read an image descriptor, the stream must be positioned at the separator
pub(crate) fn read_image_descriptor(
    stream: &mut ZByteReader
) -> Result<ImageDescriptor, GifDecoderErrors> {
    let bytes = stream.read_fixed_bytes_or_error::<IMAGE_DESCRIPTOR_SIZE>()?;

    let value = |offset: usize| usize::from(u16::from_le_bytes([bytes[offset], bytes[offset + 1]]));

    Ok(ImageDescriptor {
        rect:  GifRect::new(value(1), value(3), value(5), value(7)),
        flags: bytes[9]
    })
}
