//! ASS override-tag generation.
//!
//! Whole-line effect tags are chosen from [`edge_samples`] and karaoke fragments from
//! [`KaraokeTemplate`], the same curves and style functions the frame renderer evaluates.

use crate::{
    animation::window::{EdgeSamples, edge_samples},
    foundation::{core::Rgba8, math::ms_to_centis},
    karaoke::{
        progress::{KaraokeSettings, WordProgress},
        style::{KaraokePalette, KaraokeTemplate, WordStyle, style_for},
    },
    layout::{align::Alignment, placement::Placement},
    tokens::{animation::AnimationToken, typography::TypographyToken},
};

/// Make plain text safe for an ASS dialogue payload.
///
/// Override blocks are escaped, backslashes are swapped for a look-alike so they cannot
/// start a tag, and newlines become hard breaks.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push('\u{29F5}'),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '\n' => out.push_str("\\N"),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

/// Whole-line entrance/exit tags for one phrase, without the surrounding braces.
///
/// Empty when the animation has no edge transform to express.
pub fn effect_tags(token: &AnimationToken, placement: &Placement, duration_ms: u64) -> String {
    let samples = edge_samples(token);
    let (start, end) = (samples.at_start, samples.at_end);
    let fade_in = u64::from(samples.entrance_ms);
    let fade_out = u64::from(samples.exit_ms);
    let mut out = String::new();

    let in_ms = if start.opacity < 1.0 { fade_in } else { 0 };
    let out_ms = if end.opacity < 1.0 { fade_out } else { 0 };
    if in_ms > 0 || out_ms > 0 {
        out.push_str(&format!("\\fad({in_ms},{out_ms})"));
    }

    let rest = placement.anchor;
    if start.translate_y != 0.0 && fade_in > 0 {
        let from = placement.anchor_shifted(start.translate_y);
        out.push_str(&format!(
            "\\move({},{},{},{},0,{fade_in})",
            num(from.x),
            num(from.y),
            num(rest.x),
            num(rest.y)
        ));
    } else if end.translate_y != 0.0 && fade_out > 0 {
        let to = placement.anchor_shifted(end.translate_y);
        out.push_str(&format!(
            "\\move({},{},{},{},{},{duration_ms})",
            num(rest.x),
            num(rest.y),
            num(to.x),
            num(to.y),
            duration_ms.saturating_sub(fade_out)
        ));
    }

    let scale = ScaleEdges::of(&samples, duration_ms);
    out.push_str(&scale.entrance);
    out.push_str(&scale.exit);
    out
}

/// Scale part of the whole-line effect, split so karaoke blocks that set their own scale
/// can restate it around their per-word switches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ScaleEdges {
    /// Explicit starting scale plus its ramp to 100, empty without a scale entrance.
    entrance: String,
    /// Ramp away from 100 at the end of the phrase, empty without a scale exit.
    exit: String,
}

impl ScaleEdges {
    fn of(samples: &EdgeSamples, duration_ms: u64) -> Self {
        let (start, end) = (samples.at_start, samples.at_end);
        let fade_in = u64::from(samples.entrance_ms);
        let fade_out = u64::from(samples.exit_ms);
        let mut edges = Self::default();
        if start.scale != 1.0 && fade_in > 0 {
            let s = num(start.scale * 100.0);
            edges.entrance = format!("\\fscx{s}\\fscy{s}\\t(0,{fade_in},\\fscx100\\fscy100)");
        }
        if end.scale != 1.0 && fade_out > 0 {
            let s = num(end.scale * 100.0);
            edges.exit = format!(
                "\\t({},{duration_ms},\\fscx{s}\\fscy{s})",
                duration_ms.saturating_sub(fade_out)
            );
        }
        edges
    }

    /// Resting scale at the current instant of the phrase: the entrance ramp when there is
    /// one, else a plain 100.
    fn rest(&self) -> &str {
        if self.entrance.is_empty() {
            "\\fscx100\\fscy100"
        } else {
            &self.entrance
        }
    }
}

/// Outline settings the karaoke tags grow or recolor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineLook {
    pub color: Rgba8,
    pub width_px: f64,
}

/// Which non-color attributes a template changes at any sample point.
#[derive(Clone, Copy, Debug, Default)]
struct Touched {
    outline: bool,
    scale: bool,
    glow: bool,
    underline: bool,
}

impl Touched {
    fn of(t: &KaraokeTemplate) -> Self {
        let styles = [t.upcoming, t.sung, t.past];
        Self {
            outline: styles.iter().any(|s| s.outline_scale != 1.0),
            scale: styles.iter().any(|s| s.scale != 1.0),
            glow: styles.iter().any(|s| s.glow_px > 0.0),
            underline: styles.iter().any(|s| s.underline),
        }
    }

    fn any(self) -> bool {
        self.outline || self.scale || self.glow || self.underline
    }
}

/// Builds `\k` karaoke payloads for one state's karaoke style.
#[derive(Clone, Copy, Debug)]
pub struct KaraokeWriter<'a> {
    pub template: KaraokeTemplate,
    pub palette: KaraokePalette,
    pub settings: KaraokeSettings,
    pub typography: &'a TypographyToken,
    pub outline: OutlineLook,
    pub placement: &'a Placement,
    /// Whole-line animation, restated inside blocks that override scale.
    pub animation: &'a AnimationToken,
}

/// Per-phrase values shared by every word block.
struct PhraseCtx {
    touched: Touched,
    scale: ScaleEdges,
    lead_ms: u64,
}

impl KaraokeWriter<'_> {
    /// Karaoke payload for aligned lines of a phrase spanning `start_ms..end_ms`.
    ///
    /// Gaps and durations are differences of rounded absolute centiseconds, so the running
    /// total never drifts from the word timestamps.
    pub fn write(&self, alignment: &Alignment<'_>, start_ms: u64, end_ms: u64) -> String {
        let t = &self.template;
        let lead_ms = if t.lead.color != t.upcoming.color {
            u64::from(self.settings.lead_in_ms())
        } else {
            0
        };
        let phrase = PhraseCtx {
            touched: Touched::of(t),
            scale: ScaleEdges::of(
                &edge_samples(self.animation),
                end_ms.saturating_sub(start_ms),
            ),
            lead_ms,
        };
        let phrase_cs = ms_to_centis(start_ms);
        let mut cursor_cs = phrase_cs;
        let mut line_texts = Vec::with_capacity(alignment.lines.len());

        for line in &alignment.lines {
            let mut frags = Vec::with_capacity(line.tokens.len());
            for token in &line.tokens {
                let text = escape_text(&self.typography.apply_case(token.text));
                let Some(word) = token.word else {
                    frags.push(format!("{}{text}", self.untimed_block(&phrase)));
                    continue;
                };

                let start_cs = ms_to_centis(word.start_ms).max(cursor_cs);
                let end_cs = ms_to_centis(word.end_ms).max(start_cs);
                let mut frag = String::new();
                if start_cs > cursor_cs {
                    frag.push_str(&format!("{{\\k{}}}", start_cs - cursor_cs));
                }
                let rel_start_ms = (start_cs - phrase_cs) * 10;
                let rel_end_ms = (end_cs - phrase_cs) * 10;
                frag.push('{');
                let dur_cs = end_cs - start_cs;
                frag.push_str(&self.word_tags(dur_cs, rel_start_ms, rel_end_ms, &phrase));
                frag.push('}');
                frag.push_str(&text);
                if phrase.touched.any() {
                    frag.push_str(&format!("{{{}}}", self.reset_tags(&phrase)));
                }
                frags.push(frag);
                cursor_cs = end_cs;
            }
            line_texts.push(frags.join(" ").trim().to_string());
        }
        line_texts.join("\\N")
    }

    fn word_tags(
        &self,
        dur_cs: u64,
        rel_start_ms: u64,
        rel_end_ms: u64,
        phrase: &PhraseCtx,
    ) -> String {
        let t = &self.template;
        let touched = phrase.touched;
        let mut out = String::new();
        let k = if t.progressive { "kf" } else { "k" };
        out.push_str(&format!("\\{k}{dur_cs}"));
        if t.sung.color != t.upcoming.color {
            out.push_str(&format!("\\1c{}", t.sung.color.to_ass_override()));
        }
        if phrase.lead_ms > 0 {
            out.push_str(&self.lead_ramp(rel_start_ms, phrase.lead_ms));
        } else if t.upcoming.color != self.palette.base {
            out.push_str(&format!("\\2c{}", t.upcoming.color.to_ass_override()));
        }
        if touched.underline && t.sung.underline {
            out.push_str("\\u1");
        }

        let up = self.attr_tags(&t.upcoming, touched) + &self.scale_tags(&t.upcoming, touched);
        let sung = self.attr_tags(&t.sung, touched) + &self.scale_tags(&t.sung, touched);
        let past = self.attr_tags(&t.past, touched) + &self.scale_tags(&t.past, touched);
        out.push_str(&self.attr_tags(&t.upcoming, touched));
        if touched.scale {
            if t.upcoming.scale == 1.0 {
                out.push_str(phrase.scale.rest());
            } else {
                out.push_str(&self.scale_tags(&t.upcoming, touched));
            }
        }
        if sung != up {
            out.push_str(&format!("\\t({rel_start_ms},{rel_start_ms},{sung})"));
        }
        if past != sung {
            out.push_str(&format!("\\t({rel_end_ms},{rel_end_ms},{past})"));
        }
        if touched.scale {
            out.push_str(&phrase.scale.exit);
        }
        out
    }

    /// Secondary color ramp from the upcoming color to the full pre-highlight color over the
    /// `lead_ms` before the word. A ramp that would begin before the phrase starts part way.
    fn lead_ramp(&self, rel_start_ms: u64, lead_ms: u64) -> String {
        let (up, lead) = (self.template.upcoming.color, self.template.lead.color);
        if rel_start_ms == 0 {
            return format!("\\2c{}", lead.to_ass_override());
        }
        let (from, ramp_start) = if rel_start_ms >= lead_ms {
            (up, rel_start_ms - lead_ms)
        } else {
            let partial = WordProgress {
                lead_in: (lead_ms - rel_start_ms) as f64 / lead_ms as f64,
                ..WordProgress::UPCOMING
            };
            (style_for(self.template.style, &partial, &self.palette).color, 0)
        };
        format!(
            "\\2c{}\\t({ramp_start},{rel_start_ms},\\2c{})",
            from.to_ass_override(),
            lead.to_ass_override()
        )
    }

    /// Explicit values for every touched non-color attribute of `s` except scale.
    fn attr_tags(&self, s: &WordStyle, touched: Touched) -> String {
        let mut out = String::new();
        let glow_px = self.placement.px(s.glow_px);
        if touched.outline || touched.glow {
            let bord = (self.outline.width_px * s.outline_scale).max(glow_px);
            out.push_str(&format!("\\bord{}", num(bord)));
        }
        if touched.glow {
            let color = s.glow_color.unwrap_or(self.outline.color);
            out.push_str(&format!("\\3c{}\\blur{}", color.to_ass_override(), num(glow_px)));
        }
        out
    }

    fn scale_tags(&self, s: &WordStyle, touched: Touched) -> String {
        if !touched.scale {
            return String::new();
        }
        let pct = num(s.scale * 100.0);
        format!("\\fscx{pct}\\fscy{pct}")
    }

    fn reset_tags(&self, phrase: &PhraseCtx) -> String {
        let touched = phrase.touched;
        let mut out = String::new();
        if touched.underline {
            out.push_str("\\u0");
        }
        if touched.outline || touched.glow {
            out.push_str(&format!("\\bord{}", num(self.outline.width_px)));
        }
        if touched.scale {
            out.push_str(phrase.scale.rest());
            out.push_str(&phrase.scale.exit);
        }
        if touched.glow {
            out.push_str(&format!("\\3c{}\\blur0", self.outline.color.to_ass_override()));
        }
        out
    }

    /// Zero-length syllable that shows a token in the base color.
    fn untimed_block(&self, phrase: &PhraseCtx) -> String {
        let mut out = String::from("{\\k0");
        let base = self.palette.base.to_ass_override();
        if self.template.sung.color != self.palette.base {
            out.push_str(&format!("\\1c{base}"));
        }
        if self.template.upcoming.color != self.palette.base || phrase.lead_ms > 0 {
            out.push_str(&format!("\\2c{base}"));
        }
        out.push('}');
        out
    }
}

/// Compact decimal: integers print bare, fractions keep at most two places.
pub(crate) fn num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r.fract() == 0.0 {
        format!("{}", r as i64)
    } else {
        let s = format!("{r:.2}");
        s.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/tags.rs"]
mod tests;
