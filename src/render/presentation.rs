use crate::{
    animation::window::EdgeTransform,
    foundation::core::{FrameIndex, Point, Rgba8},
    karaoke::{progress::WordProgress, style::WordStyle},
    layout::align::AlignmentReport,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything the host's draw step needs for one caption on one frame.
pub struct FramePresentation {
    /// Identifier of the visible phrase.
    pub phrase_id: String,
    /// Frame this presentation was computed for.
    pub frame: FrameIndex,
    /// Timeline time of `frame` in milliseconds.
    pub time_ms: f64,
    /// Bottom-centre of the caption block at rest.
    pub anchor: Point,
    /// Bottom-centre after the animated vertical translation.
    pub position: Point,
    /// Maximum block width in canvas pixels.
    pub max_width: f64,
    /// Whole-phrase animation state; `translate_y` in canvas pixels.
    pub transform: EdgeTransform,
    /// Resolved font settings in canvas pixels.
    pub font: FontPresentation,
    /// Base text color for the phrase.
    pub text_color: Rgba8,
    /// Outline color and width.
    pub outline: StrokePresentation,
    /// Drop shadow color and offset.
    pub shadow: StrokePresentation,
    /// Optional box behind the text.
    pub background: Option<BackgroundPresentation>,
    /// Display lines in order.
    pub lines: Vec<LinePresentation>,
    /// Whether word-level karaoke styling is applied.
    pub karaoke: bool,
    /// Number of characters visible so far, when the animation reveals progressively.
    pub reveal_chars: Option<usize>,
    /// Line/word alignment outcome when karaoke is applied.
    pub alignment: Option<AlignmentReport>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FontPresentation {
    pub family: &'static str,
    pub size_px: f64,
    pub weight: u16,
    pub italic: bool,
    pub letter_spacing_px: f64,
    pub line_height_px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StrokePresentation {
    pub color: Rgba8,
    pub width_px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BackgroundPresentation {
    pub color: Rgba8,
    pub padding_px: f64,
    pub radius_px: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LinePresentation {
    /// Line text as displayed.
    pub text: String,
    /// Per-word styling; empty for plain lines.
    pub words: Vec<WordPresentation>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WordPresentation {
    pub text: String,
    /// `false` for line tokens that had no word timing.
    pub timed: bool,
    pub progress: WordProgress,
    pub style: WordStyle,
}

impl FramePresentation {
    /// Concatenated display text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
