use crate::{
    foundation::core::{FrameIndex, Fps},
    foundation::math::{clamp01, lerp},
    tokens::animation::AnimationToken,
};

/// Whole-phrase transform contribution for one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EdgeTransform {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl EdgeTransform {
    /// Rest state.
    pub const IDENTITY: EdgeTransform = EdgeTransform {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Interpolate from `self` (progress 0) to the rest state (progress 1).
    pub fn toward_rest(self, progress: f64) -> EdgeTransform {
        let p = clamp01(progress);
        if p >= 1.0 {
            return Self::IDENTITY;
        }
        EdgeTransform {
            opacity: lerp(self.opacity, 1.0, p),
            translate_y: lerp(self.translate_y, 0.0, p),
            scale: lerp(self.scale, 1.0, p),
        }
    }

    /// Stack two contributions: opacity and scale multiply, translation adds.
    pub fn combine(self, other: EdgeTransform) -> EdgeTransform {
        EdgeTransform {
            opacity: self.opacity * other.opacity,
            translate_y: self.translate_y + other.translate_y,
            scale: self.scale * other.scale,
        }
    }

    /// Convert the reference-pixel translation to canvas pixels.
    pub fn scaled(self, ratio: f64) -> EdgeTransform {
        EdgeTransform {
            translate_y: self.translate_y * ratio,
            ..self
        }
    }
}

/// Normalized progress through a window of `len_frames`; an empty window is complete.
pub fn window_progress(rel_frame: u64, len_frames: u64) -> f64 {
    if len_frames == 0 {
        return 1.0;
    }
    clamp01(rel_frame as f64 / len_frames as f64)
}

/// Entrance contribution; `progress` runs 0 (first visible frame) to 1 (rest).
pub fn entrance_transform(token: &AnimationToken, progress: f64) -> EdgeTransform {
    if token.entrance_ms == 0 {
        return EdgeTransform::IDENTITY;
    }
    token.edge.toward_rest(progress)
}

/// Exit contribution; `progress` runs 1 (rest, before the window) to 0 (last visible frame).
pub fn exit_transform(token: &AnimationToken, progress: f64) -> EdgeTransform {
    if token.exit_ms == 0 {
        return EdgeTransform::IDENTITY;
    }
    token.edge.toward_rest(progress)
}

/// The transforms held at the very first and very last instant of a phrase.
///
/// The exporter reads these to decide which whole-line effect tags to emit; the renderer
/// walks the same curves frame by frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSamples {
    pub at_start: EdgeTransform,
    pub at_end: EdgeTransform,
    pub entrance_ms: u32,
    pub exit_ms: u32,
}

pub fn edge_samples(token: &AnimationToken) -> EdgeSamples {
    EdgeSamples {
        at_start: entrance_transform(token, 0.0),
        at_end: exit_transform(token, 0.0),
        entrance_ms: token.entrance_ms,
        exit_ms: token.exit_ms,
    }
}

/// Frame-domain animation windows for one phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PhraseWindows {
    pub start: FrameIndex,
    pub end: FrameIndex, // inclusive
    pub entrance_frames: u64,
    pub exit_frames: u64,
    pub reveal_frames: u64,
}

impl PhraseWindows {
    pub fn resolve(token: &AnimationToken, fps: Fps, start_ms: u64, end_ms: u64) -> Self {
        Self {
            start: FrameIndex(fps.ms_to_frames(start_ms)),
            end: FrameIndex(fps.ms_to_frames(end_ms)),
            entrance_frames: fps.ms_to_frames(u64::from(token.entrance_ms)),
            exit_frames: fps.ms_to_frames(u64::from(token.exit_ms)),
            reveal_frames: fps.ms_to_frames(u64::from(token.reveal_ms)),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(self, frame: FrameIndex) -> bool {
        self.start.0 <= frame.0 && frame.0 <= self.end.0
    }

    pub fn entrance_progress(self, frame: FrameIndex) -> f64 {
        window_progress(frame.0.saturating_sub(self.start.0), self.entrance_frames)
    }

    pub fn exit_progress(self, frame: FrameIndex) -> f64 {
        window_progress(self.end.0.saturating_sub(frame.0), self.exit_frames)
    }

    /// Entrance and exit contributions combined. Short phrases get both at once.
    pub fn transform_at(self, token: &AnimationToken, frame: FrameIndex) -> EdgeTransform {
        let entrance = entrance_transform(token, self.entrance_progress(frame));
        let exit = exit_transform(token, self.exit_progress(frame));
        entrance.combine(exit)
    }

    /// Fraction of characters revealed, `None` when the animation does not reveal.
    pub fn reveal_fraction(self, token: &AnimationToken, frame: FrameIndex) -> Option<f64> {
        if token.reveal_ms == 0 {
            return None;
        }
        Some(window_progress(
            frame.0.saturating_sub(self.start.0),
            self.reveal_frames,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/window.rs"]
mod tests;
