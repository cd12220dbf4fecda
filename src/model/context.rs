use crate::{
    foundation::core::{Canvas, Rgba8},
    karaoke::{progress::KaraokeSettings, style::KaraokePalette},
    layout::placement::Placement,
    model::state::{CaptionOverrides, CaptionState, PhraseGroup},
    tokens::TokenBundle,
};

/// Tokens, placement and karaoke configuration resolved once for a state and canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptionContext {
    pub tokens: TokenBundle,
    pub placement: Placement,
    pub karaoke: KaraokeSettings,
    pub palette: KaraokePalette,
}

impl CaptionContext {
    pub fn new(state: &CaptionState, canvas: Canvas) -> Self {
        Self::from_parts(
            TokenBundle::for_state(state),
            &state.overrides_or_default(),
            state.karaoke_settings(),
            canvas,
        )
    }

    pub fn from_parts(
        tokens: TokenBundle,
        overrides: &CaptionOverrides,
        karaoke: KaraokeSettings,
        canvas: Canvas,
    ) -> Self {
        Self {
            tokens,
            placement: Placement::resolve(&tokens, overrides, canvas),
            karaoke,
            palette: KaraokePalette {
                base: tokens.colors.text,
                highlight: tokens.highlight,
                base_weight: tokens.typography.weight,
            },
        }
    }

    /// Base text color; emphasized phrases use the highlight color.
    pub fn text_color(&self, group: &PhraseGroup) -> Rgba8 {
        if group.emphasis {
            self.tokens.highlight
        } else {
            self.tokens.colors.text
        }
    }
}
