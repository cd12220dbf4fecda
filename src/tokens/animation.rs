use crate::animation::window::EdgeTransform;

/// Duration shared by every built-in entrance/exit effect.
pub const EFFECT_DURATION_MS: u32 = 200;

/// Characters revealed per typewriter pass are spread over this window.
pub const TYPEWRITER_REVEAL_MS: u32 = 600;

/// Closed set of phrase-level animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationId {
    #[default]
    None,
    Fade,
    SlideUp,
    Pop,
    Typewriter,
}

impl AnimationId {
    pub const ALL: [AnimationId; 5] = [
        AnimationId::None,
        AnimationId::Fade,
        AnimationId::SlideUp,
        AnimationId::Pop,
        AnimationId::Typewriter,
    ];

    /// Lookup-with-default: unknown ids resolve to [`AnimationId::None`].
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "none" | "" => Self::None,
            "fade" | "fade_in_out" => Self::Fade,
            "slide_up" | "slideup" => Self::SlideUp,
            "pop" | "pop_in" => Self::Pop,
            "typewriter" => Self::Typewriter,
            other => {
                tracing::debug!(animation = other, "unknown animation id, using none");
                Self::None
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fade => "fade",
            Self::SlideUp => "slide_up",
            Self::Pop => "pop",
            Self::Typewriter => "typewriter",
        }
    }
}

/// Entrance/exit timing and the transform held at the visible edges of a phrase.
///
/// `edge` is the state at the first frame of the entrance window and the last frame of the
/// exit window; both windows interpolate linearly to [`EdgeTransform::IDENTITY`].
/// `translate_y` is in 1080-wide reference pixels, positive is downwards.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AnimationToken {
    pub entrance_ms: u32,
    pub exit_ms: u32,
    pub edge: EdgeTransform,
    /// Progressive character reveal window (0 = no reveal).
    pub reveal_ms: u32,
}

static NONE: AnimationToken = AnimationToken {
    entrance_ms: 0,
    exit_ms: 0,
    edge: EdgeTransform::IDENTITY,
    reveal_ms: 0,
};

static FADE: AnimationToken = AnimationToken {
    entrance_ms: EFFECT_DURATION_MS,
    exit_ms: EFFECT_DURATION_MS,
    edge: EdgeTransform {
        opacity: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    },
    reveal_ms: 0,
};

static SLIDE_UP: AnimationToken = AnimationToken {
    entrance_ms: EFFECT_DURATION_MS,
    exit_ms: 0,
    edge: EdgeTransform {
        opacity: 1.0,
        translate_y: 60.0,
        scale: 1.0,
    },
    reveal_ms: 0,
};

static POP: AnimationToken = AnimationToken {
    entrance_ms: EFFECT_DURATION_MS,
    exit_ms: 0,
    edge: EdgeTransform {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 0.0,
    },
    reveal_ms: 0,
};

static TYPEWRITER: AnimationToken = AnimationToken {
    entrance_ms: 0,
    exit_ms: 0,
    edge: EdgeTransform::IDENTITY,
    reveal_ms: TYPEWRITER_REVEAL_MS,
};

pub fn animation(id: AnimationId) -> &'static AnimationToken {
    match id {
        AnimationId::None => &NONE,
        AnimationId::Fade => &FADE,
        AnimationId::SlideUp => &SLIDE_UP,
        AnimationId::Pop => &POP,
        AnimationId::Typewriter => &TYPEWRITER,
    }
}
