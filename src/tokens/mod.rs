//! Read-only token registries keyed by closed identifier enums.

pub mod animation;
pub mod background;
pub mod color;
pub mod karaoke;
pub mod preset;
pub mod safe_area;
pub mod typography;

use crate::{
    foundation::core::Rgba8,
    model::state::CaptionState,
    tokens::{
        animation::{AnimationId, AnimationToken},
        background::BackgroundToken,
        color::ColorToken,
        preset::PresetId,
        safe_area::{SafeAreaMargins, SafeAreaProfileId},
        typography::TypographyToken,
    },
};

/// Every token a caption state selects, resolved once per pass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TokenBundle {
    pub preset: PresetId,
    pub typography: &'static TypographyToken,
    pub colors: &'static ColorToken,
    pub background: Option<&'static BackgroundToken>,
    pub highlight: Rgba8,
    pub animation_id: AnimationId,
    pub animation: &'static AnimationToken,
    pub safe_area_id: SafeAreaProfileId,
    pub safe_area: &'static SafeAreaMargins,
}

impl TokenBundle {
    pub fn resolve(preset_id: &str, animation_id: &str, safe_area_id: &str) -> Self {
        let preset = PresetId::from_id(preset_id);
        let animation_id = AnimationId::from_id(animation_id);
        let safe_area_id = SafeAreaProfileId::from_id(safe_area_id);
        Self {
            preset,
            typography: typography::typography(preset),
            colors: color::colors(preset),
            background: background::background(preset),
            highlight: karaoke::highlight_color(preset),
            animation_id,
            animation: animation::animation(animation_id),
            safe_area_id,
            safe_area: safe_area::margins(safe_area_id),
        }
    }

    pub fn for_state(state: &CaptionState) -> Self {
        Self::resolve(
            &state.preset_id,
            &state.animation_id,
            &state.safe_area_profile_id,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tokens/registry.rs"]
mod tests;
