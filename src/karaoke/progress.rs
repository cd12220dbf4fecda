use crate::{foundation::math::clamp01, model::state::Word, tokens::karaoke::KaraokeStyle};

/// Word-level highlighting configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct KaraokeSettings {
    pub enabled: bool,
    pub style: KaraokeStyle,
    /// Ramp upcoming words toward the highlight before they start.
    pub highlight_ahead: bool,
    /// Length of that ramp.
    pub transition_ms: u32,
}

impl KaraokeSettings {
    pub fn lead_in_ms(&self) -> u32 {
        if self.highlight_ahead {
            self.transition_ms
        } else {
            0
        }
    }
}

/// Highlight state of one word at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WordProgress {
    /// 0 before the word, elapsed fraction while active, 1 afterwards.
    pub progress: f64,
    pub is_active: bool,
    pub is_past: bool,
    /// Pre-highlight level: ramps 0..1 over the lead-in window, stays 1 once the word has
    /// started. Always 0 without `highlight_ahead`.
    pub lead_in: f64,
}

impl WordProgress {
    pub const UPCOMING: WordProgress = WordProgress {
        progress: 0.0,
        is_active: false,
        is_past: false,
        lead_in: 0.0,
    };

    pub const PAST: WordProgress = WordProgress {
        progress: 1.0,
        is_active: false,
        is_past: true,
        lead_in: 0.0,
    };

    pub fn active(progress: f64) -> WordProgress {
        WordProgress {
            progress: clamp01(progress),
            is_active: true,
            is_past: false,
            lead_in: 0.0,
        }
    }

    /// Active or past.
    pub fn has_started(&self) -> bool {
        self.is_active || self.is_past
    }
}

/// Highlight state of `word` at `t_ms` on the phrase's absolute timeline.
pub fn word_progress(word: &Word, t_ms: f64, settings: &KaraokeSettings) -> WordProgress {
    let start = word.start_ms as f64;
    let end = word.end_ms as f64;
    let lead_in_ms = f64::from(settings.lead_in_ms());
    let started_lead_in = if lead_in_ms > 0.0 { 1.0 } else { 0.0 };

    if t_ms > end {
        return WordProgress {
            lead_in: started_lead_in,
            ..WordProgress::PAST
        };
    }
    if t_ms >= start {
        let duration = end - start;
        let progress = if duration <= 0.0 {
            1.0
        } else {
            (t_ms - start) / duration
        };
        return WordProgress {
            lead_in: started_lead_in,
            ..WordProgress::active(progress)
        };
    }
    if lead_in_ms > 0.0 {
        let ramp_start = start - lead_in_ms;
        if t_ms >= ramp_start {
            return WordProgress {
                lead_in: clamp01((t_ms - ramp_start) / lead_in_ms),
                ..WordProgress::UPCOMING
            };
        }
    }
    WordProgress::UPCOMING
}

#[cfg(test)]
#[path = "../../tests/unit/karaoke/progress.rs"]
mod tests;
