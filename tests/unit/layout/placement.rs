use super::*;

fn bundle(safe_area: &str) -> TokenBundle {
    TokenBundle::resolve("clean_white", "none", safe_area)
}

#[test]
fn reference_canvas_uses_token_values_directly() {
    let p = Placement::resolve(
        &bundle("default"),
        &CaptionOverrides::default(),
        Canvas::PORTRAIT_1080,
    );
    assert_eq!(p.ratio, 1.0);
    assert_eq!(p.font_size_px, 64.0);
    assert_eq!(p.margin_v, 160.0);
    assert_eq!(p.max_width, 1080.0 - 128.0);
    assert_eq!(p.anchor, Point::new(540.0, 1920.0 - 160.0));
}

#[test]
fn margins_and_font_scale_with_canvas_width() {
    let canvas = Canvas {
        width: 540,
        height: 960,
    };
    let p = Placement::resolve(&bundle("tiktok"), &CaptionOverrides::default(), canvas);
    assert_eq!(p.ratio, 0.5);
    assert_eq!(p.font_size_px, 32.0);
    assert_eq!(p.margin_v, 210.0);
    assert_eq!(p.margin_l, 32.0);
    assert_eq!(p.margin_r, 70.0);
    assert_eq!(p.anchor.x, 32.0 + (540.0 - 102.0) / 2.0);
    assert_eq!(p.anchor.y, 960.0 - 210.0);
}

#[test]
fn overrides_scale_font_and_lift_the_block() {
    let overrides = CaptionOverrides {
        font_size_scale: 1.5,
        vertical_offset: 40.0,
    };
    let p = Placement::resolve(&bundle("default"), &overrides, Canvas::PORTRAIT_1080);
    assert_eq!(p.font_size_px, 96.0);
    assert_eq!(p.margin_v, 200.0);
    assert_eq!(p.outline_px, 4.0);
}

#[test]
fn invalid_overrides_degrade() {
    let overrides = CaptionOverrides {
        font_size_scale: -2.0,
        vertical_offset: -10_000.0,
    };
    let p = Placement::resolve(&bundle("default"), &overrides, Canvas::PORTRAIT_1080);
    assert_eq!(p.font_size_px, 64.0);
    assert_eq!(p.margin_v, 0.0);
    assert_eq!(p.anchor.y, 1920.0);
}
