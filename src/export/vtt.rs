use crate::{
    export::{ass::plain_text, timecode::format_vtt_timestamp},
    model::state::CaptionState,
};

/// Render `state` as WebVTT. Cue identifiers are the phrase ids.
#[tracing::instrument(skip(state), fields(phrases = state.phrase_groups.len()))]
pub fn export_vtt(state: &CaptionState) -> String {
    let mut out = String::from("WEBVTT\n");
    for group in &state.phrase_groups {
        out.push('\n');
        let id = group.id.replace(['\n', '\r'], " ").replace("-->", "->");
        if !id.trim().is_empty() {
            out.push_str(&format!("{id}\n"));
        }
        out.push_str(&format!(
            "{} --> {}\n{}\n",
            format_vtt_timestamp(group.start_ms),
            format_vtt_timestamp(group.end_ms),
            escape_cue_text(&plain_text(group))
        ));
    }
    out
}

/// Cue payloads are HTML-like; markup characters must be entities and blank lines would end
/// the cue early.
fn escape_cue_text(text: &str) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    escaped
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/export/vtt.rs"]
mod tests;
