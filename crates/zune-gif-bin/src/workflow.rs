/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::fs::read;

use clap::ArgMatches;
use log::{debug, info, trace, warn};
use zune_core::options::DecoderOptions;
use zune_gif::{BitmapSink, GifDecoder};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::serde::{AnimationReport, FrameReport};

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    info!("Creating workflows from input");

    for in_file in args.get_raw("in").into_iter().flatten() {
        info!("Reading {:?}", in_file);

        let data = read(in_file)?;
        let report = decode_animation(
            in_file.to_os_string(),
            &data,
            cmd_opts.options,
            cmd_opts.chunk_size
        )?;

        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

/// Feed `data` to a decoder `chunk_size` bytes at a time, then decode every frame
///
/// While data is still arriving the newest frame is decoded after each
/// step the way a viewer showing a download in progress would.
pub(crate) fn decode_animation(
    file: OsString, data: &[u8], options: DecoderOptions, chunk_size: Option<usize>
) -> Result<AnimationReport, CliErrors> {
    let mut decoder = GifDecoder::new_with_options(BitmapSink::new(), options);

    let chunk_size = chunk_size.unwrap_or(data.len()).max(1);
    let mut end: usize = 0;

    loop {
        end = end.saturating_add(chunk_size).min(data.len());

        let available = &data[..end];
        let status = decoder.initialise(available);

        debug!(
            "Fed {end} of {} bytes: {:?}, {} frames indexed, {} started",
            data.len(),
            status,
            decoder.frame_count(),
            decoder.frame_count_partial()
        );
        match status {
            Ok(()) => break,
            Err(e) if e.is_recoverable() && end < data.len() => {
                if let Some(newest) = decoder.frame_count_partial().checked_sub(1) {
                    let result = decoder.decode(available, newest);
                    trace!("Progressive decode of frame {newest}: {result:?}");
                }
            }
            Err(e) if e.is_recoverable() => {
                warn!("File ended before the trailer, {e:?}");
                break;
            }
            Err(e) => return Err(e.into())
        }
    }

    let mut frames = Vec::with_capacity(decoder.frame_count_partial());

    for index in 0..decoder.frame_count_partial() {
        let status = decoder.decode(data, index);

        if let Err(e) = status {
            warn!("Frame {index}: {e:?}");
        }
        let opaque = decoder
            .decoded_frame()
            .filter(|decoded| *decoded == index)
            .and_then(|_| decoder.surface())
            .map(|surface| surface.is_opaque());

        if let Some(&frame) = decoder.frame(index) {
            frames.push(FrameReport {
                index,
                frame,
                status,
                opaque
            });
        }
    }
    let (width, height) = decoder.dimensions();

    Ok(AnimationReport {
        file,
        width,
        height,
        loop_count: decoder.loop_count(),
        background_index: decoder.background_index(),
        complete: decoder.is_complete(),
        frame_count: decoder.frame_count(),
        frame_count_partial: decoder.frame_count_partial(),
        frames
    })
}
