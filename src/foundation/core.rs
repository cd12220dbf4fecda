use crate::foundation::error::{CapsyncError, CapsyncResult};

pub use kurbo::{Point, Vec2};

/// Width all reference-pixel token values are authored against.
pub const REFERENCE_WIDTH: f64 = 1080.0;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> CapsyncResult<Self> {
        if start.0 > end.0 {
            return Err(CapsyncError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> CapsyncResult<Self> {
        if den == 0 {
            return Err(CapsyncError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(CapsyncError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// `round(ms / 1000 * fps)`, computed in integers with ties rounding up.
    pub fn ms_to_frames(self, ms: u64) -> u64 {
        let num = u128::from(self.num);
        let den = u128::from(self.den.max(1));
        let scaled = u128::from(ms) * num * 2 + 1000 * den;
        (scaled / (2000 * den)) as u64
    }

    /// Timeline milliseconds at the start of `frame`.
    pub fn frame_to_ms(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) * 1000.0 * f64::from(self.den) / f64::from(self.num.max(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Portrait 1080×1920, the default export resolution.
    pub const PORTRAIT_1080: Canvas = Canvas {
        width: 1080,
        height: 1920,
    };

    /// Multiplier applied to reference-pixel token values.
    pub fn scale_ratio(self) -> f64 {
        f64::from(self.width) / REFERENCE_WIDTH
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::PORTRAIT_1080
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channel-wise linear blend; `t` is clamped to `[0, 1]`.
    pub fn mix(self, other: Rgba8, t: f64) -> Rgba8 {
        let t = crate::foundation::math::clamp01(t);
        let ch = |a: u8, b: u8| -> u8 {
            crate::foundation::math::lerp(f64::from(a), f64::from(b), t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgba8 {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: ch(self.a, other.a),
        }
    }

    /// Scale the color channels (not alpha) by `factor`.
    pub fn dimmed(self, factor: f64) -> Rgba8 {
        let f = crate::foundation::math::clamp01(factor);
        let ch = |c: u8| -> u8 { (f64::from(c) * f).round().clamp(0.0, 255.0) as u8 };
        Rgba8 {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
            a: self.a,
        }
    }

    /// `#RRGGBBAA`.
    pub fn to_css_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// ASS style-table notation `&HAABBGGRR` (alpha inverted: `00` is opaque).
    pub fn to_ass_style(self) -> String {
        format!(
            "&H{:02X}{:02X}{:02X}{:02X}",
            255 - self.a,
            self.b,
            self.g,
            self.r
        )
    }

    /// ASS inline override notation `&HBBGGRR&` (color only).
    pub fn to_ass_override(self) -> String {
        format!("&H{:02X}{:02X}{:02X}&", self.b, self.g, self.r)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
