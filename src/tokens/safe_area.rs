/// Closed set of platform safe-area profiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeAreaProfileId {
    #[default]
    Default,
    Tiktok,
    InstagramReels,
    YoutubeShorts,
}

impl SafeAreaProfileId {
    /// Lookup-with-default: unknown ids resolve to [`SafeAreaProfileId::Default`].
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "default" | "" => Self::Default,
            "tiktok" | "tik_tok" => Self::Tiktok,
            "instagram_reels" | "reels" | "instagram" => Self::InstagramReels,
            "youtube_shorts" | "shorts" | "youtube" => Self::YoutubeShorts,
            other => {
                tracing::debug!(profile = other, "unknown safe-area profile, using default");
                Self::Default
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Tiktok => "tiktok",
            Self::InstagramReels => "instagram_reels",
            Self::YoutubeShorts => "youtube_shorts",
        }
    }
}

/// Margins in 1080-wide reference pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SafeAreaMargins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

static DEFAULT: SafeAreaMargins = SafeAreaMargins {
    top: 96.0,
    bottom: 160.0,
    left: 64.0,
    right: 64.0,
};

// Right margins leave room for the platforms' action-button rails.
static TIKTOK: SafeAreaMargins = SafeAreaMargins {
    top: 160.0,
    bottom: 420.0,
    left: 64.0,
    right: 140.0,
};

static INSTAGRAM_REELS: SafeAreaMargins = SafeAreaMargins {
    top: 220.0,
    bottom: 380.0,
    left: 64.0,
    right: 120.0,
};

static YOUTUBE_SHORTS: SafeAreaMargins = SafeAreaMargins {
    top: 140.0,
    bottom: 320.0,
    left: 64.0,
    right: 120.0,
};

pub fn margins(profile: SafeAreaProfileId) -> &'static SafeAreaMargins {
    match profile {
        SafeAreaProfileId::Default => &DEFAULT,
        SafeAreaProfileId::Tiktok => &TIKTOK,
        SafeAreaProfileId::InstagramReels => &INSTAGRAM_REELS,
        SafeAreaProfileId::YoutubeShorts => &YOUTUBE_SHORTS,
    }
}
