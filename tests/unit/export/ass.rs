use super::*;
use crate::model::state::Word;

fn hello(words: bool) -> PhraseGroup {
    PhraseGroup {
        id: "p0".to_string(),
        start_ms: 0,
        end_ms: 2000,
        display_text: "Hello world".to_string(),
        lines: vec!["Hello world".to_string()],
        words: words.then(|| {
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
        }),
        emphasis: false,
    }
}

fn state(groups: Vec<PhraseGroup>) -> CaptionState {
    CaptionState {
        phrase_groups: groups,
        preset_id: "clean_white".to_string(),
        animation_id: "fade".to_string(),
        ..CaptionState::default()
    }
}

fn dialogues(doc: &str) -> Vec<&str> {
    doc.lines().filter(|l| l.starts_with("Dialogue:")).collect()
}

#[test]
fn single_faded_phrase() {
    let doc = export_ass(&state(vec![hello(false)]), &ExportOptions::default());
    assert_eq!(
        dialogues(&doc),
        vec!["Dialogue: 0,0:00:00.00,0:00:02.00,Default,,0,0,0,,{\\fad(200,200)}Hello world"]
    );
}

#[test]
fn karaoke_phrase_carries_gap_and_word_tags() {
    let mut s = state(vec![hello(true)]);
    s.karaoke_enabled = true;
    s.karaoke_style = "weight".to_string();
    let doc = export_ass(&s, &ExportOptions::default());
    assert_eq!(
        dialogues(&doc),
        vec![
            "Dialogue: 0,0:00:00.00,0:00:02.00,Default,,0,0,0,,{\\fad(200,200)}{\\k50\\1c&H00DDFF&}Hello {\\k10}{\\k50\\1c&H00DDFF&}world"
        ]
    );
}

#[test]
fn header_declares_resolution_and_both_styles() {
    let opts = ExportOptions {
        canvas: Canvas {
            width: 720,
            height: 1280,
        },
        title: "demo".to_string(),
    };
    let doc = export_ass(&state(vec![hello(false)]), &opts);
    assert!(doc.starts_with("[Script Info]\nTitle: demo\nScriptType: v4.00+\n"));
    assert!(doc.contains("\nPlayResX: 720\nPlayResY: 1280\n"));
    assert!(doc.contains("\n[V4+ Styles]\nFormat: Name, Fontname,"));
    assert!(doc.contains("\nStyle: Default,"));
    assert!(doc.contains("\nStyle: Highlight,"));
    assert!(doc.contains("\n[Events]\nFormat: Layer, Start, End, Style,"));
}

#[test]
fn default_style_row_matches_clean_white_tokens() {
    let ctx = CaptionContext::new(&state(vec![]), Canvas::PORTRAIT_1080);
    assert_eq!(
        style_line(DEFAULT_STYLE, ctx.tokens.colors.text, &ctx),
        "Style: Default,Inter,64,&H00FFFFFF,&H00FFFFFF,&H00000000,&H5F000000,-1,0,0,0,100,100,0,0,1,4,2,2,64,64,160,1"
    );
}

#[test]
fn boxed_preset_uses_an_opaque_box() {
    let mut s = state(vec![]);
    s.preset_id = "boxed".to_string();
    let ctx = CaptionContext::new(&s, Canvas::PORTRAIT_1080);
    let row = style_line(DEFAULT_STYLE, ctx.tokens.colors.text, &ctx);
    assert!(row.contains(",&H59000000,"), "{row}");
    assert!(row.ends_with(",3,18,0,2,64,64,160,1"), "{row}");
}

#[test]
fn disabled_karaoke_exports_display_text() {
    let mut g = hello(true);
    g.display_text = "Hello\nworld".to_string();
    g.lines = vec!["Hello".to_string(), "world".to_string()];
    let doc = export_ass(&state(vec![g]), &ExportOptions::default());
    assert!(dialogues(&doc)[0].ends_with(",,{\\fad(200,200)}Hello\\Nworld"));
}

#[test]
fn emphasis_selects_the_highlight_style() {
    let mut g = hello(false);
    g.emphasis = true;
    let doc = export_ass(&state(vec![g]), &ExportOptions::default());
    assert!(dialogues(&doc)[0].contains(",Highlight,,"));
}

#[test]
fn uppercase_presets_uppercase_the_payload() {
    let mut s = state(vec![hello(false)]);
    s.preset_id = "bold_pop".to_string();
    s.animation_id = "none".to_string();
    let doc = export_ass(&s, &ExportOptions::default());
    assert!(dialogues(&doc)[0].ends_with(",,HELLO WORLD"));
}

#[test]
fn typewriter_and_unknown_animations_have_no_prefix() {
    for id in ["typewriter", "wobble"] {
        let mut s = state(vec![hello(false)]);
        s.animation_id = id.to_string();
        let doc = export_ass(&s, &ExportOptions::default());
        assert!(dialogues(&doc)[0].ends_with(",,Hello world"), "{id}");
    }
}

#[test]
fn unknown_preset_falls_back_to_clean_white() {
    let mut s = state(vec![hello(false)]);
    let reference = export_ass(&s, &ExportOptions::default());
    s.preset_id = "no-such-preset".to_string();
    assert_eq!(export_ass(&s, &ExportOptions::default()), reference);
}

#[test]
fn timestamps_use_centiseconds() {
    let mut g = hello(false);
    g.start_ms = 61005;
    g.end_ms = 62_349;
    let doc = export_ass(&state(vec![g]), &ExportOptions::default());
    assert!(dialogues(&doc)[0].starts_with("Dialogue: 0,0:01:01.00,0:01:02.35,"));
}

#[test]
fn extra_words_are_dropped_without_failing() {
    let mut g = hello(true);
    g.lines = vec!["Hello".to_string()];
    let mut s = state(vec![g]);
    s.karaoke_enabled = true;
    s.animation_id = "none".to_string();
    let doc = export_ass(&s, &ExportOptions::default());
    assert!(dialogues(&doc)[0].ends_with(",,{\\k50\\1c&H00DDFF&}Hello"));
}
