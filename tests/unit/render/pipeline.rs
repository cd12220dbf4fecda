use super::*;
use crate::{
    foundation::core::{Canvas, Fps},
    model::state::PhraseGroup,
    render::frame::render_frame,
};

fn state() -> CaptionState {
    let g = |id: &str, start_ms, end_ms| PhraseGroup {
        id: id.to_string(),
        start_ms,
        end_ms,
        display_text: format!("phrase {id}"),
        ..PhraseGroup::default()
    };
    CaptionState {
        phrase_groups: vec![g("a", 0, 1000), g("b", 1500, 2500)],
        animation_id: "fade".to_string(),
        ..CaptionState::default()
    }
}

fn video() -> VideoConfig {
    VideoConfig {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas::PORTRAIT_1080,
    }
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn empty_range_is_rejected() {
    let err = render_frames(&state(), range(5, 5), &video()).unwrap_err();
    assert!(matches!(err, CapsyncError::Validation(_)));
}

#[test]
fn zero_threads_is_rejected() {
    let threading = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    assert!(render_frames_with_stats(&state(), range(0, 10), &video(), &threading).is_err());
}

#[test]
fn batch_matches_single_frame_calls() {
    let s = state();
    let v = video();
    let frames = render_frames(&s, range(0, 90), &v).unwrap();
    assert_eq!(frames.len(), 90);
    for (i, got) in frames.iter().enumerate() {
        assert_eq!(got, &render_frame(&s, FrameIndex(i as u64), &v), "frame {i}");
    }
}

#[test]
fn parallel_chunks_match_sequential_output() {
    let s = state();
    let v = video();
    let (seq, seq_stats) =
        render_frames_with_stats(&s, range(0, 90), &v, &RenderThreading::default()).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 7,
        threads: Some(2),
    };
    let (par, par_stats) = render_frames_with_stats(&s, range(0, 90), &v, &threading).unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq_stats, par_stats);
}

#[test]
fn stats_count_visible_and_unchanged_frames() {
    let s = state();
    let (_, stats) =
        render_frames_with_stats(&s, range(0, 90), &video(), &RenderThreading::default())
            .unwrap();
    assert_eq!(stats.frames_total, 90);
    // "a" covers frames 0..=30, "b" covers 45..=75.
    assert_eq!(stats.frames_visible, 31 + 31);
    assert!(stats.frames_unchanged > 40);
    assert!(stats.frames_distinct < 90);
}
