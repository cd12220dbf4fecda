use crate::{
    foundation::error::{CapsyncError, CapsyncResult},
    karaoke::progress::KaraokeSettings,
    tokens::karaoke::KaraokeStyle,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Complete caption data for one render/export pass.
///
/// A caption state is read-only to both consumers: the frame renderer
/// ([`crate::render_frame`]) and the subtitle exporters ([`crate::export_ass`],
/// [`crate::export_srt`], [`crate::export_vtt`]). Any edit produces a new state.
///
/// Identifier fields are kept as raw strings; they are resolved against the token
/// registries at use time and fall back to defaults when unknown.
pub struct CaptionState {
    /// Time-ordered phrase groups.
    #[serde(default)]
    pub phrase_groups: Vec<PhraseGroup>,
    /// Visual preset identifier (typography, colors, background, karaoke highlight).
    #[serde(default)]
    pub preset_id: String,
    /// Entrance/exit animation identifier.
    #[serde(default)]
    pub animation_id: String,
    /// Safe-area margin profile identifier.
    #[serde(default)]
    pub safe_area_profile_id: String,
    /// Whether word-level karaoke highlighting is requested.
    #[serde(default)]
    pub karaoke_enabled: bool,
    /// Karaoke style identifier.
    #[serde(default)]
    pub karaoke_style: String,
    /// Start highlighting upcoming words before their start time.
    #[serde(default)]
    pub highlight_ahead: bool,
    /// Length of the pre-highlight ramp in milliseconds.
    #[serde(default = "default_highlight_transition_ms")]
    pub highlight_transition_ms: u32,
    /// Uniform adjustments applied to every phrase.
    #[serde(default)]
    pub overrides: Option<CaptionOverrides>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A contiguous block of caption text shown as a unit.
pub struct PhraseGroup {
    /// Stable phrase identifier.
    pub id: String,
    /// Absolute start time in milliseconds.
    pub start_ms: u64,
    /// Absolute end time in milliseconds.
    pub end_ms: u64,
    /// Raw text, lines joined with `\n`.
    #[serde(default)]
    pub display_text: String,
    /// Pre-wrapped lines; their whitespace-split tokens line up with `words`.
    #[serde(default)]
    pub lines: Vec<String>,
    /// Optional word timings for karaoke rendering.
    #[serde(default)]
    pub words: Option<Vec<Word>>,
    /// Render with the highlight color / `Highlight` style instead of the default.
    #[serde(default)]
    pub emphasis: bool,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single timed token within a phrase.
pub struct Word {
    /// Token text.
    pub word: String,
    /// Absolute start time in milliseconds.
    pub start_ms: u64,
    /// Absolute end time in milliseconds.
    pub end_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Uniform per-state overrides.
pub struct CaptionOverrides {
    /// Multiplier on the preset font size.
    #[serde(default = "default_font_size_scale")]
    pub font_size_scale: f64,
    /// Extra lift above the safe-area bottom margin, in 1080-wide reference pixels.
    #[serde(default)]
    pub vertical_offset: f64,
}

impl Default for CaptionOverrides {
    fn default() -> Self {
        Self {
            font_size_scale: 1.0,
            vertical_offset: 0.0,
        }
    }
}

impl CaptionOverrides {
    /// Font scale with non-finite or non-positive values degraded to `1.0`.
    pub fn effective_font_size_scale(&self) -> f64 {
        if self.font_size_scale.is_finite() && self.font_size_scale > 0.0 {
            self.font_size_scale
        } else {
            1.0
        }
    }

    /// Vertical offset with non-finite values degraded to `0.0`.
    pub fn effective_vertical_offset(&self) -> f64 {
        if self.vertical_offset.is_finite() {
            self.vertical_offset
        } else {
            0.0
        }
    }
}

impl Default for CaptionState {
    fn default() -> Self {
        Self {
            phrase_groups: Vec::new(),
            preset_id: String::new(),
            animation_id: String::new(),
            safe_area_profile_id: String::new(),
            karaoke_enabled: false,
            karaoke_style: String::new(),
            highlight_ahead: false,
            highlight_transition_ms: default_highlight_transition_ms(),
            overrides: None,
        }
    }
}

fn default_highlight_transition_ms() -> u32 {
    120
}

fn default_font_size_scale() -> f64 {
    1.0
}

impl CaptionState {
    /// Parse a caption state from JSON.
    pub fn from_json(s: &str) -> CapsyncResult<Self> {
        serde_json::from_str(s).map_err(|e| CapsyncError::serde(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> CapsyncResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CapsyncError::serde(e.to_string()))
    }

    /// Resolved karaoke configuration.
    pub fn karaoke_settings(&self) -> KaraokeSettings {
        KaraokeSettings {
            enabled: self.karaoke_enabled,
            style: KaraokeStyle::from_id(&self.karaoke_style),
            highlight_ahead: self.highlight_ahead,
            transition_ms: self.highlight_transition_ms,
        }
    }

    /// Overrides, or the neutral defaults when absent.
    pub fn overrides_or_default(&self) -> CaptionOverrides {
        self.overrides.unwrap_or_default()
    }

    /// Check the timing invariants the engine assumes but never enforces.
    ///
    /// Rendering and export tolerate violations; hosts call this before constructing
    /// a state they want to be well-formed.
    pub fn validate(&self) -> CapsyncResult<()> {
        let mut prev_end: Option<(u64, &str)> = None;
        for group in &self.phrase_groups {
            group.validate()?;
            if let Some((end, id)) = prev_end
                && group.start_ms < end
            {
                return Err(CapsyncError::validation(format!(
                    "phrase '{}' starts at {}ms before phrase '{}' ends at {}ms",
                    group.id, group.start_ms, id, end
                )));
            }
            prev_end = Some((group.end_ms, group.id.as_str()));
        }
        if let Some(o) = &self.overrides {
            if !(o.font_size_scale.is_finite() && o.font_size_scale > 0.0) {
                return Err(CapsyncError::validation(
                    "overrides.fontSizeScale must be finite and > 0",
                ));
            }
            if !o.vertical_offset.is_finite() {
                return Err(CapsyncError::validation(
                    "overrides.verticalOffset must be finite",
                ));
            }
        }
        Ok(())
    }
}

impl PhraseGroup {
    /// Display lines: `lines` when present, otherwise `display_text` split on newlines.
    pub fn display_lines(&self) -> Vec<&str> {
        if self.lines.is_empty() {
            if self.display_text.is_empty() {
                return Vec::new();
            }
            self.display_text.split('\n').collect()
        } else {
            self.lines.iter().map(String::as_str).collect()
        }
    }

    /// Word timings when present and non-empty.
    pub fn timed_words(&self) -> Option<&[Word]> {
        self.words.as_deref().filter(|w| !w.is_empty())
    }

    fn validate(&self) -> CapsyncResult<()> {
        if self.id.trim().is_empty() {
            return Err(CapsyncError::validation("phrase id must be non-empty"));
        }
        if self.start_ms > self.end_ms {
            return Err(CapsyncError::validation(format!(
                "phrase '{}' startMs must be <= endMs",
                self.id
            )));
        }
        let Some(words) = self.words.as_deref() else {
            return Ok(());
        };
        let mut prev_end = self.start_ms;
        for (i, w) in words.iter().enumerate() {
            if w.start_ms > w.end_ms {
                return Err(CapsyncError::validation(format!(
                    "phrase '{}' word {i} startMs must be <= endMs",
                    self.id
                )));
            }
            if w.start_ms < prev_end || w.end_ms > self.end_ms {
                return Err(CapsyncError::validation(format!(
                    "phrase '{}' word {i} is out of order or outside the phrase range",
                    self.id
                )));
            }
            prev_end = w.end_ms;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/state.rs"]
mod tests;
