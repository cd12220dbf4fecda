use super::*;
use crate::model::state::PhraseGroup;

#[test]
fn cues_carry_ids_and_escaped_text() {
    let state = CaptionState {
        phrase_groups: vec![PhraseGroup {
            id: "p0".to_string(),
            start_ms: 1500,
            end_ms: 3000,
            display_text: "a < b & c\n\nnext".to_string(),
            ..PhraseGroup::default()
        }],
        ..CaptionState::default()
    };
    assert_eq!(
        export_vtt(&state),
        "WEBVTT\n\np0\n00:00:01.500 --> 00:00:03.000\na &lt; b &amp; c\nnext\n"
    );
}

#[test]
fn empty_state_is_just_the_signature() {
    assert_eq!(export_vtt(&CaptionState::default()), "WEBVTT\n");
}
