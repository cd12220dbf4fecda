use crate::{
    foundation::{core::Rgba8, math::Fnv1a64},
    render::presentation::FramePresentation,
};

/// 128-bit digest of what a frame looks like.
///
/// `frame` and `time_ms` are not hashed, so two frames that draw the same caption in the
/// same state share a fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

pub fn fingerprint_presentation(p: Option<&FramePresentation>) -> FrameFingerprint {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    let Some(p) = p else {
        write_u8_pair(&mut a, &mut b, 0);
        return FrameFingerprint {
            hi: a.finish(),
            lo: b.finish(),
        };
    };
    write_u8_pair(&mut a, &mut b, 1);
    write_str_pair(&mut a, &mut b, &p.phrase_id);

    for v in [
        p.position.x,
        p.position.y,
        p.transform.opacity,
        p.transform.translate_y,
        p.transform.scale,
        p.font.size_px,
    ] {
        write_f64_pair(&mut a, &mut b, v);
    }
    write_rgba_pair(&mut a, &mut b, p.text_color);
    write_u8_pair(&mut a, &mut b, u8::from(p.karaoke));
    match p.reveal_chars {
        Some(n) => {
            write_u8_pair(&mut a, &mut b, 1);
            write_u64_pair(&mut a, &mut b, n as u64);
        }
        None => write_u8_pair(&mut a, &mut b, 0),
    }

    write_u64_pair(&mut a, &mut b, p.lines.len() as u64);
    for line in &p.lines {
        write_str_pair(&mut a, &mut b, &line.text);
        write_u64_pair(&mut a, &mut b, line.words.len() as u64);
        for w in &line.words {
            write_str_pair(&mut a, &mut b, &w.text);
            let s = &w.style;
            write_rgba_pair(&mut a, &mut b, s.color);
            write_u64_pair(&mut a, &mut b, u64::from(s.font_weight));
            write_u8_pair(&mut a, &mut b, u8::from(s.underline));
            for v in [s.fill_progress, s.scale, s.glow_px, s.outline_scale] {
                write_f64_pair(&mut a, &mut b, v);
            }
            match s.glow_color {
                Some(c) => {
                    write_u8_pair(&mut a, &mut b, 1);
                    write_rgba_pair(&mut a, &mut b, c);
                }
                None => write_u8_pair(&mut a, &mut b, 0),
            }
        }
    }

    FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_f64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: f64) {
    // -0.0 and 0.0 draw the same.
    let v = if v == 0.0 { 0.0 } else { v };
    write_u64_pair(a, b, v.to_bits());
}

fn write_rgba_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, c: Rgba8) {
    a.write_bytes(&[c.r, c.g, c.b, c.a]);
    b.write_bytes(&[c.r, c.g, c.b, c.a]);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
