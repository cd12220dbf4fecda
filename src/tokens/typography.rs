use std::borrow::Cow;

use crate::tokens::preset::PresetId;

/// Font settings, sizes in 1080-wide reference pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TypographyToken {
    pub family: &'static str,
    pub size_px: f64,
    pub weight: u16,
    pub italic: bool,
    pub uppercase: bool,
    pub letter_spacing_px: f64,
    pub line_height: f64,
}

static CLEAN_WHITE: TypographyToken = TypographyToken {
    family: "Inter",
    size_px: 64.0,
    weight: 700,
    italic: false,
    uppercase: false,
    letter_spacing_px: 0.0,
    line_height: 1.2,
};

static BOLD_POP: TypographyToken = TypographyToken {
    family: "Montserrat",
    size_px: 72.0,
    weight: 900,
    italic: false,
    uppercase: true,
    letter_spacing_px: 1.0,
    line_height: 1.1,
};

static NEON_GLOW: TypographyToken = TypographyToken {
    family: "Poppins",
    size_px: 66.0,
    weight: 800,
    italic: false,
    uppercase: false,
    letter_spacing_px: 0.5,
    line_height: 1.2,
};

static BOXED: TypographyToken = TypographyToken {
    family: "Inter",
    size_px: 58.0,
    weight: 600,
    italic: false,
    uppercase: false,
    letter_spacing_px: 0.0,
    line_height: 1.25,
};

static MINIMAL: TypographyToken = TypographyToken {
    family: "Helvetica Neue",
    size_px: 52.0,
    weight: 500,
    italic: false,
    uppercase: false,
    letter_spacing_px: 0.0,
    line_height: 1.3,
};

static OUTLINE_HEAVY: TypographyToken = TypographyToken {
    family: "Anton",
    size_px: 76.0,
    weight: 400,
    italic: false,
    uppercase: true,
    letter_spacing_px: 2.0,
    line_height: 1.05,
};

impl TypographyToken {
    /// Text as displayed, uppercased when the preset asks for it.
    pub fn apply_case<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.uppercase {
            Cow::Owned(text.to_uppercase())
        } else {
            Cow::Borrowed(text)
        }
    }
}

pub fn typography(preset: PresetId) -> &'static TypographyToken {
    match preset {
        PresetId::CleanWhite => &CLEAN_WHITE,
        PresetId::BoldPop => &BOLD_POP,
        PresetId::NeonGlow => &NEON_GLOW,
        PresetId::Boxed => &BOXED,
        PresetId::Minimal => &MINIMAL,
        PresetId::OutlineHeavy => &OUTLINE_HEAVY,
    }
}
