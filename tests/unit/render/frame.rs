use super::*;
use crate::{foundation::core::Rgba8, model::state::Word};

fn video() -> VideoConfig {
    VideoConfig {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas::PORTRAIT_1080,
    }
}

fn phrase(id: &str, start_ms: u64, end_ms: u64, text: &str) -> PhraseGroup {
    PhraseGroup {
        id: id.to_string(),
        start_ms,
        end_ms,
        display_text: text.to_string(),
        lines: text.split('\n').map(str::to_string).collect(),
        words: None,
        emphasis: false,
    }
}

fn hello_words() -> Vec<Word> {
    vec![
        Word {
            word: "Hello".to_string(),
            start_ms: 0,
            end_ms: 500,
        },
        Word {
            word: "world".to_string(),
            start_ms: 600,
            end_ms: 1100,
        },
    ]
}

fn state(groups: Vec<PhraseGroup>) -> CaptionState {
    CaptionState {
        phrase_groups: groups,
        preset_id: "clean_white".to_string(),
        animation_id: "fade".to_string(),
        ..CaptionState::default()
    }
}

#[test]
fn nothing_renders_outside_the_phrase_frames() {
    let s = state(vec![phrase("p0", 1000, 2000, "Hello world")]);
    let v = video();
    // startFrame 30, endFrame 60.
    for f in [0u64, 29, 61, 500] {
        assert!(render_frame(&s, FrameIndex(f), &v).is_none(), "frame {f}");
    }
    for f in [30u64, 45, 60] {
        assert!(render_frame(&s, FrameIndex(f), &v).is_some(), "frame {f}");
    }
}

#[test]
fn repeated_and_out_of_order_calls_are_identical() {
    let mut g = phrase("p0", 0, 2000, "Hello world");
    g.words = Some(hello_words());
    let mut s = state(vec![g]);
    s.karaoke_enabled = true;
    s.karaoke_style = "color".to_string();
    let v = video();

    let a = render_frame(&s, FrameIndex(12), &v);
    let _ = render_frame(&s, FrameIndex(50), &v);
    let _ = render_frame(&s, FrameIndex(3), &v);
    let b = render_frame(&s, FrameIndex(12), &v);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_vec(&a).unwrap(),
        serde_json::to_vec(&b).unwrap()
    );
}

#[test]
fn plain_lines_when_karaoke_is_disabled() {
    let mut g = phrase("p0", 0, 2000, "Hello\nworld");
    g.words = Some(hello_words());
    let s = state(vec![g]);
    let p = render_frame(&s, FrameIndex(30), &video()).unwrap();
    assert!(!p.karaoke);
    assert_eq!(p.lines.len(), 2);
    assert!(p.lines.iter().all(|l| l.words.is_empty()));
    assert_eq!(p.text(), "Hello\nworld");
    assert_eq!(p.alignment, None);
}

#[test]
fn missing_words_degrade_to_plain_lines() {
    let mut s = state(vec![phrase("p0", 0, 2000, "Hello world")]);
    s.karaoke_enabled = true;
    let p = render_frame(&s, FrameIndex(30), &video()).unwrap();
    assert!(!p.karaoke);
    assert_eq!(p.lines[0].text, "Hello world");
}

#[test]
fn karaoke_marks_active_and_past_words() {
    let mut g = phrase("p0", 0, 2000, "Hello world");
    g.words = Some(hello_words());
    let mut s = state(vec![g]);
    s.karaoke_enabled = true;
    s.karaoke_style = "weight".to_string();

    // Frame 24 = 800 ms: "Hello" past, "world" 40% through.
    let p = render_frame(&s, FrameIndex(24), &video()).unwrap();
    assert!(p.karaoke);
    let words = &p.lines[0].words;
    assert_eq!(words.len(), 2);
    assert!(words[0].progress.is_past);
    assert!(words[1].progress.is_active);
    assert!((words[1].progress.progress - 0.4).abs() < 1e-9);
    assert_eq!(words[0].style.font_weight, 800);
    assert_eq!(p.alignment.map(|r| r.is_exact()), Some(true));
}

#[test]
fn untimed_tokens_render_unhighlighted() {
    let mut g = phrase("p0", 0, 2000, "Hello big world");
    g.words = Some(hello_words());
    let mut s = state(vec![g]);
    s.karaoke_enabled = true;
    let p = render_frame(&s, FrameIndex(59), &video()).unwrap();
    let words = &p.lines[0].words;
    assert_eq!(words.len(), 3);
    assert!(!words[2].timed);
    assert_eq!(words[2].text, "world");
    assert_eq!(words[2].style.color, Rgba8::WHITE);
    assert_eq!(p.alignment.unwrap().untimed_tokens, 1);
}

#[test]
fn fade_runs_at_both_edges() {
    let s = state(vec![phrase("p0", 0, 2000, "Hello")]);
    let v = video();
    assert_eq!(render_frame(&s, FrameIndex(0), &v).unwrap().transform.opacity, 0.0);
    assert_eq!(render_frame(&s, FrameIndex(6), &v).unwrap().transform.opacity, 1.0);
    assert_eq!(render_frame(&s, FrameIndex(30), &v).unwrap().transform.opacity, 1.0);
    assert_eq!(render_frame(&s, FrameIndex(60), &v).unwrap().transform.opacity, 0.0);
}

#[test]
fn slide_up_translation_scales_with_canvas() {
    let mut s = state(vec![phrase("p0", 0, 2000, "Hello")]);
    s.animation_id = "slide_up".to_string();
    let v = VideoConfig {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 540,
            height: 960,
        },
    };
    let p = render_frame(&s, FrameIndex(0), &v).unwrap();
    assert_eq!(p.transform.translate_y, 30.0);
    assert_eq!(p.position.y, p.anchor.y + 30.0);
    let rest = render_frame(&s, FrameIndex(6), &v).unwrap();
    assert_eq!(rest.position, rest.anchor);
}

#[test]
fn typewriter_reveals_characters() {
    let mut s = state(vec![phrase("p0", 0, 3000, "abcdefghij")]);
    s.animation_id = "typewriter".to_string();
    let v = video();
    assert_eq!(render_frame(&s, FrameIndex(0), &v).unwrap().reveal_chars, Some(0));
    assert_eq!(render_frame(&s, FrameIndex(9), &v).unwrap().reveal_chars, Some(5));
    assert_eq!(render_frame(&s, FrameIndex(30), &v).unwrap().reveal_chars, Some(10));
}

#[test]
fn later_phrase_wins_a_shared_boundary_frame() {
    let s = state(vec![
        phrase("a", 0, 1000, "first"),
        phrase("b", 1000, 2000, "second"),
    ]);
    let p = render_frame(&s, FrameIndex(30), &video()).unwrap();
    assert_eq!(p.phrase_id, "b");
    let p = render_frame(&s, FrameIndex(29), &video()).unwrap();
    assert_eq!(p.phrase_id, "a");
}

#[test]
fn emphasis_and_uppercase_presets_apply() {
    let mut g = phrase("p0", 0, 2000, "Hello world");
    g.emphasis = true;
    let mut s = state(vec![g]);
    s.preset_id = "bold_pop".to_string();
    let p = render_frame(&s, FrameIndex(30), &video()).unwrap();
    assert_eq!(p.lines[0].text, "HELLO WORLD");
    assert_eq!(p.text_color, Rgba8::rgb(255, 215, 0));
    assert_eq!(p.font.family, "Montserrat");
}

#[test]
fn boxed_preset_carries_a_scaled_background() {
    let mut s = state(vec![phrase("p0", 0, 2000, "Hello")]);
    s.preset_id = "boxed".to_string();
    let v = VideoConfig {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 540,
            height: 960,
        },
    };
    let bg = render_frame(&s, FrameIndex(30), &v).unwrap().background.unwrap();
    assert_eq!(bg.padding_px, 9.0);
}
