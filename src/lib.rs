//! capsync turns time-coded transcripts into synchronized, styled, animated captions.
//!
//! One [`CaptionState`] drives two outputs that agree on timing, karaoke progress and
//! placement:
//!
//! - [`render_frame`]: a pure per-frame presentation for a live overlay, safe to call in any
//!   order (scrubbing) and any number of times
//! - [`export_ass`] / [`export_srt`] / [`export_vtt`]: baked subtitle tracks for an external
//!   encoder
//!
//! Both consumers are total: unknown identifiers, missing word timings and misaligned lines
//! degrade to simpler output instead of failing.
#![forbid(unsafe_code)]

pub mod animation;
pub mod export;
pub mod foundation;
pub mod karaoke;
pub mod layout;
pub mod model;
pub mod render;
pub mod tokens;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Rgba8};
pub use crate::foundation::error::{CapsyncError, CapsyncResult};

pub use crate::export::ass::{ExportOptions, export_ass};
pub use crate::export::srt::export_srt;
pub use crate::export::timecode::{
    format_ass_timestamp, format_srt_timestamp, format_vtt_timestamp, parse_ass_timestamp,
    parse_srt_timestamp, parse_vtt_timestamp,
};
pub use crate::export::vtt::export_vtt;
pub use crate::karaoke::progress::{KaraokeSettings, WordProgress, word_progress};
pub use crate::karaoke::style::{KaraokePalette, WordStyle, style_for};
pub use crate::layout::align::{AlignmentReport, align_lines};
pub use crate::layout::placement::Placement;
pub use crate::model::context::CaptionContext;
pub use crate::model::state::{CaptionOverrides, CaptionState, PhraseGroup, Word};
pub use crate::render::fingerprint::{FrameFingerprint, fingerprint_presentation};
pub use crate::render::frame::{FrameRenderer, VideoConfig, render_frame, visible_phrase};
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, render_frames, render_frames_with_stats,
};
pub use crate::render::presentation::FramePresentation;
pub use crate::tokens::TokenBundle;
pub use crate::tokens::animation::{AnimationId, EFFECT_DURATION_MS};
pub use crate::tokens::karaoke::KaraokeStyle;
pub use crate::tokens::preset::PresetId;
pub use crate::tokens::safe_area::SafeAreaProfileId;
