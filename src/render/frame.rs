use crate::{
    animation::window::PhraseWindows,
    foundation::core::{Canvas, Fps, FrameIndex, Point},
    karaoke::{
        progress::{WordProgress, word_progress},
        style::{WordStyle, style_for},
    },
    layout::align::{AlignedLine, align_lines},
    model::{
        context::CaptionContext,
        state::{CaptionState, PhraseGroup},
    },
    render::presentation::{
        BackgroundPresentation, FontPresentation, FramePresentation, LinePresentation,
        StrokePresentation, WordPresentation,
    },
};

/// Playback parameters supplied by the hosting composition surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VideoConfig {
    pub fps: Fps,
    pub canvas: Canvas,
}

/// Stateless per-frame caption renderer.
///
/// Output depends only on the arguments, so frames may be requested in any order and any
/// number of times.
pub struct FrameRenderer;

impl FrameRenderer {
    /// Render whichever phrase is visible at `frame`, if any.
    #[tracing::instrument(skip(state))]
    pub fn render_frame(
        state: &CaptionState,
        frame: FrameIndex,
        video: &VideoConfig,
    ) -> Option<FramePresentation> {
        let group = visible_phrase(state, frame, video.fps)?;
        let ctx = CaptionContext::new(state, video.canvas);
        Self::render_phrase(group, frame, video, &ctx)
    }

    /// Render one phrase at `frame`; `None` outside `[startFrame, endFrame]`.
    pub fn render_phrase(
        group: &PhraseGroup,
        frame: FrameIndex,
        video: &VideoConfig,
        ctx: &CaptionContext,
    ) -> Option<FramePresentation> {
        let token = ctx.tokens.animation;
        let windows = PhraseWindows::resolve(token, video.fps, group.start_ms, group.end_ms);
        if !windows.contains(frame) {
            return None;
        }

        let time_ms = video.fps.frame_to_ms(frame);
        let placement = &ctx.placement;
        let transform = windows
            .transform_at(token, frame)
            .scaled(placement.ratio);
        let typo = ctx.tokens.typography;
        let colors = ctx.tokens.colors;

        let mut alignment = None;
        let (lines, karaoke) = match (ctx.karaoke.enabled, group.timed_words()) {
            (true, Some(words)) => {
                let display = group.display_lines();
                let aligned = align_lines(&display, words);
                if !aligned.report.is_exact() {
                    tracing::debug!(
                        phrase = %group.id,
                        untimed = aligned.report.untimed_tokens,
                        dropped = aligned.report.dropped_words,
                        "line/word token counts differ"
                    );
                }
                alignment = Some(aligned.report);
                let lines: Vec<LinePresentation> = aligned
                    .lines
                    .iter()
                    .map(|line| karaoke_line(line, time_ms, ctx))
                    .collect();
                (lines, true)
            }
            _ => {
                let lines: Vec<LinePresentation> = group
                    .display_lines()
                    .into_iter()
                    .map(|l| LinePresentation {
                        text: typo.apply_case(l).into_owned(),
                        words: Vec::new(),
                    })
                    .collect();
                (lines, false)
            }
        };

        let reveal_chars = windows.reveal_fraction(token, frame).map(|f| {
            let total: usize = lines
                .iter()
                .map(|l| l.text.chars().count())
                .sum();
            (total as f64 * f).floor() as usize
        });

        Some(FramePresentation {
            phrase_id: group.id.clone(),
            frame,
            time_ms,
            anchor: placement.anchor,
            position: Point::new(placement.anchor.x, placement.anchor.y + transform.translate_y),
            max_width: placement.max_width,
            transform,
            font: FontPresentation {
                family: typo.family,
                size_px: placement.font_size_px,
                weight: typo.weight,
                italic: typo.italic,
                letter_spacing_px: placement.letter_spacing_px,
                line_height_px: placement.line_height_px,
            },
            text_color: ctx.text_color(group),
            outline: StrokePresentation {
                color: colors.outline,
                width_px: placement.outline_px,
            },
            shadow: StrokePresentation {
                color: colors.shadow,
                width_px: placement.shadow_px,
            },
            background: ctx.tokens.background.map(|bg| BackgroundPresentation {
                color: bg.color,
                padding_px: placement.px(bg.padding_px),
                radius_px: placement.px(bg.radius_px),
            }),
            lines,
            karaoke,
            reveal_chars,
            alignment,
        })
    }
}

/// Render whichever phrase is visible at `frame`, if any.
pub fn render_frame(
    state: &CaptionState,
    frame: FrameIndex,
    video: &VideoConfig,
) -> Option<FramePresentation> {
    FrameRenderer::render_frame(state, frame, video)
}

/// The phrase shown at `frame`.
///
/// Visibility is inclusive on both ends, so adjacent phrases can share a boundary frame; the
/// later-starting phrase wins.
pub fn visible_phrase(state: &CaptionState, frame: FrameIndex, fps: Fps) -> Option<&PhraseGroup> {
    state
        .phrase_groups
        .iter()
        .enumerate()
        .filter(|(_, g)| {
            fps.ms_to_frames(g.start_ms) <= frame.0 && frame.0 <= fps.ms_to_frames(g.end_ms)
        })
        .max_by_key(|(i, g)| (g.start_ms, *i))
        .map(|(_, g)| g)
}

fn karaoke_line(line: &AlignedLine<'_>, time_ms: f64, ctx: &CaptionContext) -> LinePresentation {
    let typo = ctx.tokens.typography;
    let words: Vec<WordPresentation> = line
        .tokens
        .iter()
        .map(|token| {
            let (progress, mut style) = match token.word {
                Some(w) => {
                    let p = word_progress(w, time_ms, &ctx.karaoke);
                    (p, style_for(ctx.karaoke.style, &p, &ctx.palette))
                }
                None => (WordProgress::UPCOMING, WordStyle::plain(&ctx.palette)),
            };
            style.glow_px = ctx.placement.px(style.glow_px);
            WordPresentation {
                text: typo.apply_case(token.text).into_owned(),
                timed: token.word.is_some(),
                progress,
                style,
            }
        })
        .collect();
    LinePresentation {
        text: words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        words,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
