/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource::CommandLine;
use clap::ArgMatches;
use log::{info, Level};
use zune_core::options::DecoderOptions;

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    /// Bytes given to the decoder per step, `None` for the whole file
    pub chunk_size: Option<usize>,
    pub options:    DecoderOptions
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            chunk_size: None,
            options:    DecoderOptions::new_cmd()
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if options.value_source("chunk-size") == Some(CommandLine) {
        let chunk_size = options.get_one::<usize>("chunk-size").copied();
        info!("Feeding files in chunks of {:?} bytes", chunk_size);
        cmd_options.chunk_size = chunk_size.filter(|size| *size > 0);
    }
    cmd_options.options = get_decoder_options(options);

    info!("Decoder options: {:?}", cmd_options.options);

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
