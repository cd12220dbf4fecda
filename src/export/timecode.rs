//! Timestamp formats for the three subtitle outputs.
//!
//! ASS timestamps carry centiseconds (rounded half-to-even); SRT and WebVTT carry
//! milliseconds exactly.

use crate::foundation::{
    error::{CapsyncError, CapsyncResult},
    math::ms_to_centis,
};

/// Centiseconds as `H:MM:SS.CC`.
pub fn format_ass_centis(cs: u64) -> String {
    let h = cs / 360_000;
    let m = (cs % 360_000) / 6_000;
    let s = (cs % 6_000) / 100;
    let c = cs % 100;
    format!("{h}:{m:02}:{s:02}.{c:02}")
}

/// Milliseconds as `H:MM:SS.CC`.
pub fn format_ass_timestamp(ms: u64) -> String {
    format_ass_centis(ms_to_centis(ms))
}

/// Milliseconds as `HH:MM:SS,mmm`.
pub fn format_srt_timestamp(ms: u64) -> String {
    let (h, m, s, milli) = split_ms(ms);
    format!("{h:02}:{m:02}:{s:02},{milli:03}")
}

/// Milliseconds as `HH:MM:SS.mmm`.
pub fn format_vtt_timestamp(ms: u64) -> String {
    let (h, m, s, milli) = split_ms(ms);
    format!("{h:02}:{m:02}:{s:02}.{milli:03}")
}

/// Parse `H:MM:SS.CC` back to milliseconds.
pub fn parse_ass_timestamp(ts: &str) -> CapsyncResult<u64> {
    let (hms, frac) = ts
        .trim()
        .split_once('.')
        .ok_or_else(|| invalid("ass", ts))?;
    if frac.len() != 2 {
        return Err(invalid("ass", ts));
    }
    let cs = parse_digits(frac).ok_or_else(|| invalid("ass", ts))?;
    Ok(parse_hms(hms).ok_or_else(|| invalid("ass", ts))? + cs * 10)
}

/// Parse `HH:MM:SS,mmm` back to milliseconds.
pub fn parse_srt_timestamp(ts: &str) -> CapsyncResult<u64> {
    parse_ms_timestamp(ts, ',').ok_or_else(|| invalid("srt", ts))
}

/// Parse `HH:MM:SS.mmm` (or `MM:SS.mmm`) back to milliseconds.
pub fn parse_vtt_timestamp(ts: &str) -> CapsyncResult<u64> {
    parse_ms_timestamp(ts, '.').ok_or_else(|| invalid("vtt", ts))
}

fn split_ms(ms: u64) -> (u64, u64, u64, u64) {
    (
        ms / 3_600_000,
        (ms % 3_600_000) / 60_000,
        (ms % 60_000) / 1_000,
        ms % 1_000,
    )
}

fn parse_ms_timestamp(ts: &str, sep: char) -> Option<u64> {
    let (hms, frac) = ts.trim().split_once(sep)?;
    if frac.len() != 3 {
        return None;
    }
    Some(parse_hms(hms)? + parse_digits(frac)?)
}

/// `H:MM:SS` or `MM:SS` to milliseconds.
fn parse_hms(hms: &str) -> Option<u64> {
    let parts: Vec<&str> = hms.split(':').collect();
    let (h, m, s) = match parts.as_slice() {
        [h, m, s] => (parse_digits(h)?, parse_digits(m)?, parse_digits(s)?),
        [m, s] => (0, parse_digits(m)?, parse_digits(s)?),
        _ => return None,
    };
    if m >= 60 || s >= 60 {
        return None;
    }
    Some(h * 3_600_000 + m * 60_000 + s * 1_000)
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn invalid(kind: &str, ts: &str) -> CapsyncError {
    CapsyncError::validation(format!("invalid {kind} timestamp '{ts}'"))
}

#[cfg(test)]
#[path = "../../tests/unit/export/timecode.rs"]
mod tests;
