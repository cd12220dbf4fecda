use crate::{foundation::core::Rgba8, tokens::preset::PresetId};

/// Opaque box drawn behind the caption block.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BackgroundToken {
    pub color: Rgba8,
    pub padding_px: f64,
    pub radius_px: f64,
}

static BOXED: BackgroundToken = BackgroundToken {
    color: Rgba8::new(0, 0, 0, 166),
    padding_px: 18.0,
    radius_px: 12.0,
};

static MINIMAL: BackgroundToken = BackgroundToken {
    color: Rgba8::new(20, 20, 20, 96),
    padding_px: 10.0,
    radius_px: 6.0,
};

pub fn background(preset: PresetId) -> Option<&'static BackgroundToken> {
    match preset {
        PresetId::Boxed => Some(&BOXED),
        PresetId::Minimal => Some(&MINIMAL),
        PresetId::CleanWhite | PresetId::BoldPop | PresetId::NeonGlow | PresetId::OutlineHeavy => {
            None
        }
    }
}
