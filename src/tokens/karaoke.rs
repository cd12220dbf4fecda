use crate::{foundation::core::Rgba8, tokens::preset::PresetId};

/// Closed set of karaoke treatments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KaraokeStyle {
    #[default]
    Weight,
    Brightness,
    Underline,
    Color,
    Scale,
    Glow,
}

impl KaraokeStyle {
    pub const ALL: [KaraokeStyle; 6] = [
        KaraokeStyle::Weight,
        KaraokeStyle::Brightness,
        KaraokeStyle::Underline,
        KaraokeStyle::Color,
        KaraokeStyle::Scale,
        KaraokeStyle::Glow,
    ];

    /// Lookup-with-default: unknown ids resolve to [`KaraokeStyle::Weight`].
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "weight" | "bold" | "" => Self::Weight,
            "brightness" | "bright" => Self::Brightness,
            "underline" => Self::Underline,
            "color" | "colour" | "fill" => Self::Color,
            "scale" | "zoom" => Self::Scale,
            "glow" => Self::Glow,
            other => {
                tracing::debug!(style = other, "unknown karaoke style, using weight");
                Self::Weight
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Brightness => "brightness",
            Self::Underline => "underline",
            Self::Color => "color",
            Self::Scale => "scale",
            Self::Glow => "glow",
        }
    }
}

/// Karaoke highlight color per preset.
pub fn highlight_color(preset: PresetId) -> Rgba8 {
    match preset {
        PresetId::CleanWhite => Rgba8::rgb(255, 221, 0),
        PresetId::BoldPop => Rgba8::rgb(255, 215, 0),
        PresetId::NeonGlow => Rgba8::rgb(57, 255, 20),
        PresetId::Boxed => Rgba8::rgb(255, 214, 10),
        PresetId::Minimal => Rgba8::rgb(120, 200, 255),
        PresetId::OutlineHeavy => Rgba8::rgb(255, 64, 129),
    }
}
