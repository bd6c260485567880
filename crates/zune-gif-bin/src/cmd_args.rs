/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zune-gif")
        .about("Feed gif files to a progressive decoder and report what it finds")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("chunk-size")
            .long("chunk-size")
            .help("Feed the decoder this many bytes at a time")
            .long_help("Simulate data arriving over a slow connection by giving the decoder\nthe file in pieces of this many bytes, the whole file is given at once by default")
            .help_heading("DECODING")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Largest canvas width the decoder will accept")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Largest canvas height the decoder will accept")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-frames")
            .long("max-frames")
            .help_heading("ADVANCED")
            .help("Largest number of frames the decoder will index")
            .value_parser(value_parser!(usize))
            .default_value("4096"))
        .arg(Arg::new("strict")
            .long("strict")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .help("Treat image data that ends early as an error"))
        .arg(Arg::new("trust-canvas")
            .long("trust-canvas")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .help("Use the declared canvas size even when it looks like a screen size"))
}
