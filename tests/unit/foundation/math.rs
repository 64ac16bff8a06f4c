use super::*;

#[test]
fn fade_endpoints_and_midpoint_are_exact() {
    assert_eq!(fade(0.0), 0.0);
    assert_eq!(fade(1.0), 1.0);
    assert_eq!(fade(0.5), 0.5);
}

#[test]
fn fade_is_monotonic_on_unit_interval() {
    let mut prev = fade(0.0);
    for i in 1..=100 {
        let t = f64::from(i) / 100.0;
        let cur = fade(t);
        assert!(cur >= prev, "fade dipped at t = {t}");
        prev = cur;
    }
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(0.0, -3.0, 7.0), -3.0);
    assert_eq!(lerp(1.0, -3.0, 7.0), 7.0);
}

#[test]
fn lerp_between_equal_values_is_identity() {
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        assert_eq!(lerp(t, 4.25, 4.25), 4.25);
    }
}
