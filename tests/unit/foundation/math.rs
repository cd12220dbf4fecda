use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"capsync");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_u8(b'c');
    b.write_bytes(b"apsync");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn clamp01_handles_nan_and_bounds() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-1.0), 0.0);
    assert_eq!(clamp01(2.0), 1.0);
    assert_eq!(clamp01(0.25), 0.25);
}

#[test]
fn centis_round_half_to_even() {
    assert_eq!(ms_to_centis(0), 0);
    assert_eq!(ms_to_centis(500), 50);
    assert_eq!(ms_to_centis(61005), 6100);
    assert_eq!(ms_to_centis(61015), 6102);
    assert_eq!(ms_to_centis(61006), 6101);
    assert_eq!(ms_to_centis(61004), 6100);
}
