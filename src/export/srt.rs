use crate::{
    export::{ass::plain_text, timecode::format_srt_timestamp},
    model::state::CaptionState,
};

/// Render `state` as SubRip: sequence number, millisecond timestamps, raw text.
///
/// A blank line ends a SubRip cue, so blank text lines are dropped and phrases with no text
/// at all are skipped. Sequence numbers stay contiguous.
#[tracing::instrument(skip(state), fields(phrases = state.phrase_groups.len()))]
pub fn export_srt(state: &CaptionState) -> String {
    let mut cues = Vec::with_capacity(state.phrase_groups.len());
    for group in &state.phrase_groups {
        let text = plain_text(group);
        let body = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if body.is_empty() {
            tracing::debug!(phrase = %group.id, "phrase has no text, no SubRip cue written");
            continue;
        }
        cues.push(format!(
            "{}\n{} --> {}\n{body}\n",
            cues.len() + 1,
            format_srt_timestamp(group.start_ms),
            format_srt_timestamp(group.end_ms)
        ));
    }
    cues.join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/export/srt.rs"]
mod tests;
