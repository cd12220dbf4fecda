/// Closed set of visual presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetId {
    #[default]
    CleanWhite,
    BoldPop,
    NeonGlow,
    Boxed,
    Minimal,
    OutlineHeavy,
}

impl PresetId {
    pub const ALL: [PresetId; 6] = [
        PresetId::CleanWhite,
        PresetId::BoldPop,
        PresetId::NeonGlow,
        PresetId::Boxed,
        PresetId::Minimal,
        PresetId::OutlineHeavy,
    ];

    /// Lookup-with-default: unknown ids resolve to [`PresetId::CleanWhite`].
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "clean_white" | "cleanwhite" | "" => Self::CleanWhite,
            "bold_pop" | "boldpop" => Self::BoldPop,
            "neon_glow" | "neonglow" | "neon" => Self::NeonGlow,
            "boxed" | "box" => Self::Boxed,
            "minimal" => Self::Minimal,
            "outline_heavy" | "outlineheavy" => Self::OutlineHeavy,
            other => {
                tracing::debug!(preset = other, "unknown preset id, using clean_white");
                Self::CleanWhite
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CleanWhite => "clean_white",
            Self::BoldPop => "bold_pop",
            Self::NeonGlow => "neon_glow",
            Self::Boxed => "boxed",
            Self::Minimal => "minimal",
            Self::OutlineHeavy => "outline_heavy",
        }
    }
}
