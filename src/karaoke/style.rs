//! Progress-to-presentation mapping for each karaoke style.
//!
//! The renderer evaluates [`style_for`] every frame. The exporter evaluates it at fixed
//! sample points through [`KaraokeTemplate::derive`] to pick its override tags, so both
//! outputs agree on colors, thresholds and emphasis amounts.

use crate::{
    foundation::core::Rgba8,
    karaoke::progress::WordProgress,
    tokens::karaoke::KaraokeStyle,
};

/// Weight of a word once it has been reached by the `weight` style.
pub const SUNG_WEIGHT: u16 = 800;
/// Scale of the active word for the `scale` style.
pub const ACTIVE_SCALE: f64 = 1.15;
/// Glow radius in 1080-wide reference pixels for the `glow` style.
pub const GLOW_PX: f64 = 6.0;
/// Brightness of not-yet-reached words for the `brightness` style.
pub const UPCOMING_BRIGHTNESS: f64 = 0.6;
/// Outline multiplier for reached words in the `brightness` style.
pub const OUTLINE_GROWTH: f64 = 1.5;
/// Share of the highlight blended in by the pre-highlight ramp.
pub const LEAD_IN_MIX: f64 = 0.35;

/// Colors and weight the style functions blend between.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct KaraokePalette {
    pub base: Rgba8,
    pub highlight: Rgba8,
    pub base_weight: u16,
}

/// Presentation of one word.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WordStyle {
    pub color: Rgba8,
    pub font_weight: u16,
    pub underline: bool,
    /// Fraction of the word's fill/underline sweep already drawn.
    pub fill_progress: f64,
    pub scale: f64,
    /// Reference pixels; 0 means no glow.
    pub glow_px: f64,
    pub glow_color: Option<Rgba8>,
    pub outline_scale: f64,
}

impl WordStyle {
    pub fn plain(palette: &KaraokePalette) -> WordStyle {
        WordStyle {
            color: palette.base,
            font_weight: palette.base_weight,
            underline: false,
            fill_progress: 0.0,
            scale: 1.0,
            glow_px: 0.0,
            glow_color: None,
            outline_scale: 1.0,
        }
    }
}

/// Presentation of a word at `p`.
///
/// Before the word starts, a non-zero `lead_in` blends its color toward the color it takes
/// once sung, up to [`LEAD_IN_MIX`]. This applies to every style the same way; styles whose
/// color does not change at the word start have nothing to blend.
pub fn style_for(style: KaraokeStyle, p: &WordProgress, palette: &KaraokePalette) -> WordStyle {
    let resting = style_at(style, p, palette);
    if p.has_started() || p.lead_in <= 0.0 {
        return resting;
    }
    let target = style_at(style, &WordProgress::active(1.0), palette).color;
    WordStyle {
        color: resting.color.mix(target, LEAD_IN_MIX * p.lead_in),
        ..resting
    }
}

fn style_at(style: KaraokeStyle, p: &WordProgress, palette: &KaraokePalette) -> WordStyle {
    let started = p.has_started();
    let plain = WordStyle::plain(palette);
    let hl_or_base = if started {
        palette.highlight
    } else {
        palette.base
    };
    match style {
        KaraokeStyle::Weight => WordStyle {
            color: hl_or_base,
            font_weight: if started {
                SUNG_WEIGHT.max(palette.base_weight)
            } else {
                palette.base_weight
            },
            fill_progress: if started { 1.0 } else { 0.0 },
            ..plain
        },
        KaraokeStyle::Brightness => WordStyle {
            color: if started {
                palette.highlight
            } else {
                palette.base.dimmed(UPCOMING_BRIGHTNESS)
            },
            fill_progress: if started { 1.0 } else { 0.0 },
            outline_scale: if started { OUTLINE_GROWTH } else { 1.0 },
            ..plain
        },
        KaraokeStyle::Underline => WordStyle {
            underline: started,
            fill_progress: if started { p.progress } else { 0.0 },
            ..plain
        },
        KaraokeStyle::Color => {
            // The sweep continues from wherever the lead-in left the color.
            let pre = if started { LEAD_IN_MIX * p.lead_in } else { 0.0 };
            let sweep = if started { p.progress } else { 0.0 };
            WordStyle {
                color: palette.base.mix(palette.highlight, pre + (1.0 - pre) * sweep),
                fill_progress: sweep,
                ..plain
            }
        }
        KaraokeStyle::Scale => WordStyle {
            color: hl_or_base,
            scale: if p.is_active { ACTIVE_SCALE } else { 1.0 },
            fill_progress: if started { 1.0 } else { 0.0 },
            ..plain
        },
        KaraokeStyle::Glow => WordStyle {
            color: hl_or_base,
            glow_px: if started { GLOW_PX } else { 0.0 },
            glow_color: started.then_some(palette.highlight),
            fill_progress: if started { 1.0 } else { 0.0 },
            ..plain
        },
    }
}

/// Static description of a style sampled at its key points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KaraokeTemplate {
    pub style: KaraokeStyle,
    /// Appearance before the word is reached.
    pub upcoming: WordStyle,
    /// Appearance at the end of a full pre-highlight ramp.
    pub lead: WordStyle,
    /// Appearance at the last instant the word is active.
    pub sung: WordStyle,
    /// Appearance once the word has been passed.
    pub past: WordStyle,
    /// The color sweeps continuously across the word rather than switching at its start.
    pub progressive: bool,
}

impl KaraokeTemplate {
    pub fn derive(style: KaraokeStyle, palette: &KaraokePalette) -> KaraokeTemplate {
        let upcoming = style_for(style, &WordProgress::UPCOMING, palette);
        let lead = style_for(
            style,
            &WordProgress {
                lead_in: 1.0,
                ..WordProgress::UPCOMING
            },
            palette,
        );
        let mid = style_for(style, &WordProgress::active(0.5), palette);
        let sung = style_for(style, &WordProgress::active(1.0), palette);
        let past = style_for(style, &WordProgress::PAST, palette);
        KaraokeTemplate {
            style,
            upcoming,
            lead,
            sung,
            past,
            progressive: mid.color != upcoming.color && mid.color != sung.color,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/karaoke/style.rs"]
mod tests;
