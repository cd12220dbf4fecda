use crate::{foundation::core::Rgba8, tokens::preset::PresetId};

/// Text, outline and shadow colors. Widths are 1080-wide reference pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ColorToken {
    pub text: Rgba8,
    pub outline: Rgba8,
    pub outline_width_px: f64,
    pub shadow: Rgba8,
    pub shadow_px: f64,
}

static CLEAN_WHITE: ColorToken = ColorToken {
    text: Rgba8::WHITE,
    outline: Rgba8::BLACK,
    outline_width_px: 4.0,
    shadow: Rgba8::new(0, 0, 0, 160),
    shadow_px: 2.0,
};

static BOLD_POP: ColorToken = ColorToken {
    text: Rgba8::WHITE,
    outline: Rgba8::BLACK,
    outline_width_px: 6.0,
    shadow: Rgba8::new(0, 0, 0, 0),
    shadow_px: 0.0,
};

static NEON_GLOW: ColorToken = ColorToken {
    text: Rgba8::rgb(240, 255, 255),
    outline: Rgba8::rgb(0, 200, 255),
    outline_width_px: 3.0,
    shadow: Rgba8::new(0, 200, 255, 180),
    shadow_px: 0.0,
};

static BOXED: ColorToken = ColorToken {
    text: Rgba8::WHITE,
    outline: Rgba8::BLACK,
    outline_width_px: 0.0,
    shadow: Rgba8::new(0, 0, 0, 0),
    shadow_px: 0.0,
};

static MINIMAL: ColorToken = ColorToken {
    text: Rgba8::rgb(235, 235, 235),
    outline: Rgba8::BLACK,
    outline_width_px: 2.0,
    shadow: Rgba8::new(0, 0, 0, 0),
    shadow_px: 0.0,
};

static OUTLINE_HEAVY: ColorToken = ColorToken {
    text: Rgba8::WHITE,
    outline: Rgba8::BLACK,
    outline_width_px: 8.0,
    shadow: Rgba8::new(0, 0, 0, 200),
    shadow_px: 4.0,
};

pub fn colors(preset: PresetId) -> &'static ColorToken {
    match preset {
        PresetId::CleanWhite => &CLEAN_WHITE,
        PresetId::BoldPop => &BOLD_POP,
        PresetId::NeonGlow => &NEON_GLOW,
        PresetId::Boxed => &BOXED,
        PresetId::Minimal => &MINIMAL,
        PresetId::OutlineHeavy => &OUTLINE_HEAVY,
    }
}
