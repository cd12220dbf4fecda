use super::*;

#[test]
fn ass_uses_half_even_centiseconds() {
    assert_eq!(format_ass_timestamp(0), "0:00:00.00");
    assert_eq!(format_ass_timestamp(2000), "0:00:02.00");
    assert_eq!(format_ass_timestamp(61005), "0:01:01.00");
    assert_eq!(format_ass_timestamp(61015), "0:01:01.02");
    assert_eq!(format_ass_timestamp(61006), "0:01:01.01");
    assert_eq!(format_ass_timestamp(3_723_450), "1:02:03.45");
}

#[test]
fn srt_and_vtt_keep_milliseconds() {
    assert_eq!(format_srt_timestamp(61005), "00:01:01,005");
    assert_eq!(format_vtt_timestamp(61005), "00:01:01.005");
    assert_eq!(format_srt_timestamp(36_000_000), "10:00:00,000");
}

#[test]
fn both_precisions_round_trip_within_their_resolution() {
    for ms in [0u64, 5, 999, 61005, 61015, 3_599_999] {
        assert_eq!(parse_srt_timestamp(&format_srt_timestamp(ms)).unwrap(), ms);
        assert_eq!(parse_vtt_timestamp(&format_vtt_timestamp(ms)).unwrap(), ms);
        let back = parse_ass_timestamp(&format_ass_timestamp(ms)).unwrap();
        assert!(back.abs_diff(ms) <= 5, "{ms} -> {back}");
    }
}

#[test]
fn vtt_accepts_short_form() {
    assert_eq!(parse_vtt_timestamp("01:02.003").unwrap(), 62_003);
}

#[test]
fn malformed_timestamps_are_rejected() {
    assert!(parse_srt_timestamp("00:01:01.005").is_err());
    assert!(parse_srt_timestamp("00:61:01,005").is_err());
    assert!(parse_ass_timestamp("0:00:01.5").is_err());
    assert!(parse_vtt_timestamp("aa:00:01.000").is_err());
    assert!(parse_vtt_timestamp("").is_err());
}
