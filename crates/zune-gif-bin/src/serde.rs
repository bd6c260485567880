use std::ffi::OsString;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zune_gif::{GifDecoderErrors, GifFrame};

/// What decoding one frame produced
pub struct FrameReport {
    pub index:  usize,
    pub frame:  GifFrame,
    pub status: Result<(), GifDecoderErrors>,
    /// Opacity reported to the surface, `None` if decoding failed
    pub opaque: Option<bool>
}

impl Serialize for FrameReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let status = match &self.status {
            Ok(()) => "ok".to_string(),
            Err(e) => format!("{e:?}").trim().to_string()
        };
        let mut state = serializer.serialize_struct("FrameReport", 4)?;

        state.serialize_field("index", &self.index)?;
        state.serialize_field("frame", &self.frame)?;
        state.serialize_field("status", &status)?;
        state.serialize_field("opaque", &self.opaque)?;

        state.end()
    }
}

/// Everything the decoder learned about one file
pub struct AnimationReport {
    pub file:                OsString,
    pub width:               usize,
    pub height:              usize,
    pub loop_count:          u16,
    pub background_index:    u8,
    pub complete:            bool,
    pub frame_count:         usize,
    pub frame_count_partial: usize,
    pub frames:              Vec<FrameReport>
}

impl Serialize for AnimationReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("AnimationReport", 9)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("loop_count", &self.loop_count)?;
        state.serialize_field("background_index", &self.background_index)?;
        state.serialize_field("complete", &self.complete)?;
        state.serialize_field("frame_count", &self.frame_count)?;
        state.serialize_field("frame_count_partial", &self.frame_count_partial)?;
        state.serialize_field("frames", &self.frames)?;

        state.end()
    }
}
