use super::*;
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn buffer_covers_three_channels_per_pixel() {
    let mut rng = StdRng::seed_from_u64(1);
    let grain = generate_grain(6, 0.1, &mut rng);
    assert_eq!(grain.size(), 6);
    assert_eq!(grain.data().len(), 3 * 6 * 6);
}

#[test]
fn every_perturbation_has_the_requested_magnitude() {
    let mut rng = StdRng::seed_from_u64(2);
    let grain = generate_grain(8, 0.1, &mut rng);
    let expected = (0.1f64 * 255.0) as f32;
    for &v in grain.data() {
        assert_eq!(v.abs(), expected, "magnitude drifted: {v}");
    }
}

#[test]
fn both_signs_occur() {
    let mut rng = StdRng::seed_from_u64(3);
    let grain = generate_grain(8, 0.5, &mut rng);
    assert!(grain.data().iter().any(|&v| v > 0.0));
    assert!(grain.data().iter().any(|&v| v < 0.0));
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = generate_grain(5, 0.075, &mut StdRng::seed_from_u64(42));
    let b = generate_grain(5, 0.075, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn zero_intensity_produces_zero_magnitudes() {
    let mut rng = StdRng::seed_from_u64(4);
    let grain = generate_grain(3, 0.0, &mut rng);
    assert!(grain.data().iter().all(|&v| v == 0.0));
}
