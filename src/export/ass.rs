use crate::{
    export::{
        tags::{KaraokeWriter, OutlineLook, effect_tags, escape_text, num},
        timecode::format_ass_timestamp,
    },
    foundation::core::{Canvas, Rgba8},
    karaoke::style::KaraokeTemplate,
    layout::align::align_lines,
    model::{
        context::CaptionContext,
        state::{CaptionState, PhraseGroup},
    },
    tokens::animation::AnimationId,
};

/// Target of a subtitle export.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExportOptions {
    /// `PlayResX`/`PlayResY` and the canvas placement is computed for.
    pub canvas: Canvas,
    /// `Title` in the script header.
    pub title: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            canvas: Canvas::PORTRAIT_1080,
            title: "capsync".to_string(),
        }
    }
}

pub const DEFAULT_STYLE: &str = "Default";
pub const HIGHLIGHT_STYLE: &str = "Highlight";

const STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, \
OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, \
BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

const EVENT_FORMAT: &str =
    "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Bottom-centre, matching the renderer's anchor.
const ALIGNMENT_BOTTOM_CENTER: u8 = 2;

/// Render `state` as a complete Advanced SubStation Alpha script.
///
/// Never fails: unknown identifiers fall back to defaults and alignment mismatches are
/// logged.
#[tracing::instrument(skip(state, opts), fields(phrases = state.phrase_groups.len()))]
pub fn export_ass(state: &CaptionState, opts: &ExportOptions) -> String {
    let ctx = CaptionContext::new(state, opts.canvas);
    let mut out = String::new();
    write_header(&mut out, &ctx, opts);

    if ctx.tokens.animation.reveal_ms > 0 {
        tracing::debug!(
            animation = ctx.tokens.animation_id.as_str(),
            "progressive reveal has no ASS equivalent, exporting without it"
        );
    }

    for group in &state.phrase_groups {
        out.push_str(&format!(
            "Dialogue: 0,{},{},{},,0,0,0,,{}\n",
            format_ass_timestamp(group.start_ms),
            format_ass_timestamp(group.end_ms),
            style_name(group, &ctx),
            dialogue_text(group, &ctx)
        ));
    }
    out
}

/// Override-tagged payload of one dialogue event.
pub fn dialogue_text(group: &PhraseGroup, ctx: &CaptionContext) -> String {
    let duration_ms = group.end_ms.saturating_sub(group.start_ms);
    let effect = if ctx.tokens.animation_id == AnimationId::None {
        String::new()
    } else {
        effect_tags(ctx.tokens.animation, &ctx.placement, duration_ms)
    };
    let prefix = if effect.is_empty() {
        String::new()
    } else {
        format!("{{{effect}}}")
    };

    let body = match (ctx.karaoke.enabled, group.timed_words()) {
        (true, Some(words)) => {
            let lines = group.display_lines();
            let alignment = align_lines(&lines, words);
            if !alignment.report.is_exact() {
                tracing::warn!(
                    phrase = %group.id,
                    untimed = alignment.report.untimed_tokens,
                    dropped = alignment.report.dropped_words,
                    "line/word token counts differ"
                );
            }
            let writer = KaraokeWriter {
                template: KaraokeTemplate::derive(ctx.karaoke.style, &ctx.palette),
                palette: ctx.palette,
                settings: ctx.karaoke,
                typography: ctx.tokens.typography,
                outline: OutlineLook {
                    color: ctx.tokens.colors.outline,
                    width_px: ctx.placement.outline_px,
                },
                placement: &ctx.placement,
                animation: ctx.tokens.animation,
            };
            writer.write(&alignment, group.start_ms, group.end_ms)
        }
        _ => escape_text(&ctx.tokens.typography.apply_case(&plain_text(group))),
    };
    format!("{prefix}{body}")
}

/// `displayText`, or the joined lines when it is empty.
pub(crate) fn plain_text(group: &PhraseGroup) -> String {
    if group.display_text.is_empty() {
        group.lines.join("\n")
    } else {
        group.display_text.clone()
    }
}

/// Karaoke words carry their own colors, so emphasis only selects `Highlight` for plain
/// phrases.
fn style_name(group: &PhraseGroup, ctx: &CaptionContext) -> &'static str {
    let karaoke = ctx.karaoke.enabled && group.timed_words().is_some();
    if group.emphasis && !karaoke {
        HIGHLIGHT_STYLE
    } else {
        DEFAULT_STYLE
    }
}

fn write_header(out: &mut String, ctx: &CaptionContext, opts: &ExportOptions) {
    let lines = [
        "[Script Info]".to_string(),
        format!("Title: {}", opts.title.replace(['\n', '\r'], " ")),
        "ScriptType: v4.00+".to_string(),
        "WrapStyle: 0".to_string(),
        "ScaledBorderAndShadow: yes".to_string(),
        "YCbCr Matrix: None".to_string(),
        format!("PlayResX: {}", opts.canvas.width),
        format!("PlayResY: {}", opts.canvas.height),
        String::new(),
        "[V4+ Styles]".to_string(),
        STYLE_FORMAT.to_string(),
        style_line(DEFAULT_STYLE, ctx.tokens.colors.text, ctx),
        style_line(HIGHLIGHT_STYLE, ctx.tokens.highlight, ctx),
        String::new(),
        "[Events]".to_string(),
        EVENT_FORMAT.to_string(),
    ];
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
}

/// One `Style:` row. A background token switches to an opaque box (`BorderStyle` 3), where
/// `OutlineColour` fills the box and `Outline` is its padding.
pub fn style_line(name: &str, primary: Rgba8, ctx: &CaptionContext) -> String {
    let typo = ctx.tokens.typography;
    let colors = ctx.tokens.colors;
    let p = &ctx.placement;
    let flag = |b: bool| if b { -1 } else { 0 };

    let (border_style, outline_color, outline, shadow) = match ctx.tokens.background {
        Some(bg) => (3, bg.color, p.px(bg.padding_px), 0.0),
        None => (1, colors.outline, p.outline_px, p.shadow_px),
    };

    format!(
        "Style: {name},{font},{size},{pri},{sec},{out},{back},{bold},{italic},0,0,100,100,{spacing},0,{border_style},{outline},{shadow},{align},{ml},{mr},{mv},1",
        font = typo.family,
        size = num(p.font_size_px),
        pri = primary.to_ass_style(),
        sec = primary.to_ass_style(),
        out = outline_color.to_ass_style(),
        back = colors.shadow.to_ass_style(),
        bold = flag(typo.weight >= 700),
        italic = flag(typo.italic),
        spacing = num(p.letter_spacing_px),
        outline = num(outline),
        shadow = num(shadow),
        align = ALIGNMENT_BOTTOM_CENTER,
        ml = p.margin_l.round() as i64,
        mr = p.margin_r.round() as i64,
        mv = p.margin_v.round() as i64,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/export/ass.rs"]
mod tests;
