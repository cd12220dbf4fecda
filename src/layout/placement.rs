use crate::{
    foundation::core::{Canvas, Point},
    model::state::CaptionOverrides,
    tokens::TokenBundle,
};

/// Spatial placement of the caption block on a concrete canvas.
///
/// Token values are authored against a 1080-wide canvas and scaled by
/// `canvas.width / 1080`. The block is anchored at its bottom-centre, `margin_v` above the
/// bottom edge and centred between the side margins.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    pub canvas: Canvas,
    pub ratio: f64,
    pub font_size_px: f64,
    pub line_height_px: f64,
    pub letter_spacing_px: f64,
    pub outline_px: f64,
    pub shadow_px: f64,
    pub margin_l: f64,
    pub margin_r: f64,
    pub margin_v: f64,
    pub max_width: f64,
    pub anchor: Point,
}

impl Placement {
    pub fn resolve(tokens: &TokenBundle, overrides: &CaptionOverrides, canvas: Canvas) -> Self {
        let ratio = canvas.scale_ratio();
        let width = f64::from(canvas.width);
        let height = f64::from(canvas.height);
        let typo = tokens.typography;
        let margins = tokens.safe_area;

        let font_size_px = typo.size_px * ratio * overrides.effective_font_size_scale();
        let margin_l = margins.left * ratio;
        let margin_r = margins.right * ratio;
        let margin_v = ((margins.bottom + overrides.effective_vertical_offset()) * ratio).max(0.0);
        let max_width = (width - margin_l - margin_r).max(0.0);

        Self {
            canvas,
            ratio,
            font_size_px,
            line_height_px: font_size_px * typo.line_height,
            letter_spacing_px: typo.letter_spacing_px * ratio,
            outline_px: tokens.colors.outline_width_px * ratio,
            shadow_px: tokens.colors.shadow_px * ratio,
            margin_l,
            margin_r,
            margin_v,
            max_width,
            anchor: Point::new(margin_l + max_width / 2.0, height - margin_v),
        }
    }

    /// Reference pixels to canvas pixels.
    pub fn px(&self, reference_px: f64) -> f64 {
        reference_px * self.ratio
    }

    /// Anchor displaced by a reference-pixel vertical translation.
    pub fn anchor_shifted(&self, translate_y_ref: f64) -> Point {
        Point::new(self.anchor.x, self.anchor.y + self.px(translate_y_ref))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
