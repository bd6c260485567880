#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::*;

use crate::enums::DisposalMethod;
use crate::frame::{GifFrame, GifRect};

impl Serialize for DisposalMethod {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // disposal serialization is simply its debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for GifRect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("GifRect", 4)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.end()
    }
}

impl Serialize for GifFrame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("GifFrame", 8)?;
        state.serialize_field("stream_offset", &self.stream_offset)?;
        state.serialize_field("delay", &self.delay)?;
        state.serialize_field("disposal", &self.disposal)?;
        state.serialize_field("transparent_index", &self.transparent_index)?;
        state.serialize_field("rect", &self.rect)?;
        state.serialize_field("image_count", &self.image_count)?;
        state.serialize_field("interlaced", &self.interlaced)?;
        state.serialize_field("opaque", &self.opaque)?;
        state.end()
    }
}
