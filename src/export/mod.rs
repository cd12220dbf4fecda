//! Subtitle exporters: a tagged ASS track plus SRT and WebVTT plain tracks.

pub mod ass;
pub mod srt;
pub mod tags;
pub mod timecode;
pub mod vtt;
