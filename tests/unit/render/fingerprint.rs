use super::*;
use crate::{
    foundation::core::{Canvas, Fps, FrameIndex},
    model::state::{CaptionState, PhraseGroup},
    render::frame::{VideoConfig, render_frame},
};

fn state(animation_id: &str) -> CaptionState {
    CaptionState {
        phrase_groups: vec![PhraseGroup {
            id: "p0".to_string(),
            start_ms: 0,
            end_ms: 2000,
            display_text: "Hello world".to_string(),
            ..PhraseGroup::default()
        }],
        animation_id: animation_id.to_string(),
        ..CaptionState::default()
    }
}

fn video() -> VideoConfig {
    VideoConfig {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas::PORTRAIT_1080,
    }
}

fn fp(s: &CaptionState, f: u64) -> FrameFingerprint {
    fingerprint_presentation(render_frame(s, FrameIndex(f), &video()).as_ref())
}

#[test]
fn resting_frames_share_a_fingerprint() {
    let s = state("fade");
    assert_eq!(fp(&s, 20), fp(&s, 40));
}

#[test]
fn animated_frames_differ() {
    let s = state("fade");
    assert_ne!(fp(&s, 1), fp(&s, 2));
    assert_ne!(fp(&s, 2), fp(&s, 20));
}

#[test]
fn empty_frames_differ_from_visible_ones() {
    let s = state("none");
    let empty = fingerprint_presentation(None);
    assert_eq!(empty, fp(&s, 500));
    assert_ne!(empty, fp(&s, 30));
}
