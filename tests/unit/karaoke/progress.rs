use super::*;

fn word(start_ms: u64, end_ms: u64) -> Word {
    Word {
        word: "w".to_string(),
        start_ms,
        end_ms,
    }
}

fn settings(highlight_ahead: bool) -> KaraokeSettings {
    KaraokeSettings {
        enabled: true,
        style: KaraokeStyle::Color,
        highlight_ahead,
        transition_ms: 100,
    }
}

#[test]
fn progress_is_monotonic_through_the_word() {
    let w = word(1000, 1500);
    let s = settings(false);

    let before = word_progress(&w, 999.0, &s);
    assert_eq!(before, WordProgress::UPCOMING);

    let at_start = word_progress(&w, 1000.0, &s);
    assert!(at_start.is_active);
    assert_eq!(at_start.progress, 0.0);

    let mid = word_progress(&w, 1250.0, &s);
    assert!(mid.is_active);
    assert_eq!(mid.progress, 0.5);

    let at_end = word_progress(&w, 1500.0, &s);
    assert!(at_end.is_active);
    assert_eq!(at_end.progress, 1.0);

    for t in [1500.5, 1501.0, 9000.0] {
        let p = word_progress(&w, t, &s);
        assert!(p.is_past);
        assert!(!p.is_active);
        assert_eq!(p.progress, 1.0);
    }
}

#[test]
fn zero_duration_word_is_complete_when_active() {
    let w = word(700, 700);
    let p = word_progress(&w, 700.0, &settings(false));
    assert!(p.is_active);
    assert_eq!(p.progress, 1.0);
}

#[test]
fn lead_in_ramps_before_start_when_enabled() {
    let w = word(1000, 1500);
    let s = settings(true);

    assert_eq!(word_progress(&w, 850.0, &s).lead_in, 0.0);
    let ramp = word_progress(&w, 950.0, &s);
    assert!(!ramp.is_active);
    assert_eq!(ramp.progress, 0.0);
    assert_eq!(ramp.lead_in, 0.5);

    assert_eq!(word_progress(&w, 1200.0, &s).lead_in, 1.0);
    assert_eq!(word_progress(&w, 2000.0, &s).lead_in, 1.0);
}

#[test]
fn lead_in_is_zero_without_highlight_ahead() {
    let w = word(1000, 1500);
    let s = settings(false);
    assert_eq!(word_progress(&w, 950.0, &s).lead_in, 0.0);
    assert_eq!(word_progress(&w, 1200.0, &s).lead_in, 0.0);
    assert_eq!(s.lead_in_ms(), 0);
}
