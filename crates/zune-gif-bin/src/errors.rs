/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use zune_gif::GifDecoderErrors;

/// Errors that can stop the command line workflow
pub enum CliErrors {
    IoErrors(std::io::Error),
    GifErrors(GifDecoderErrors),
    JsonErrors(serde_json::Error)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => {
                writeln!(f, "I/O error: {err}")
            }
            Self::GifErrors(err) => {
                writeln!(f, "{err:?}")
            }
            Self::JsonErrors(err) => {
                writeln!(f, "Could not serialize report: {err}")
            }
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<GifDecoderErrors> for CliErrors {
    fn from(value: GifDecoderErrors) -> Self {
        Self::GifErrors(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        Self::JsonErrors(value)
    }
}
