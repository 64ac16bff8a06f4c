use super::*;

fn identity_table() -> PermutationTable {
    let mut half = [0u8; 256];
    for (i, v) in half.iter_mut().enumerate() {
        *v = i as u8;
    }
    PermutationTable::from_values(half)
}

#[test]
fn integer_lattice_points_evaluate_to_zero() {
    let field = NoiseField::from_seed(7);
    for y in -3..=3 {
        for x in -3..=3 {
            let v = field.evaluate(f64::from(x), f64::from(y));
            assert_eq!(v, 0.0, "nonzero at lattice point ({x}, {y})");
        }
    }
}

#[test]
fn zero_hash_gradient_is_x_plus_y() {
    assert_eq!(grad(0, 0.25, 0.5), 0.75);
    assert_eq!(grad(0, -1.0, 0.125), -0.875);
    assert_eq!(grad(0, 0.0, 0.0), 0.0);
}

#[test]
fn gradient_nibble_dispatch_signs() {
    // h = 1 negates the first component, h = 2 the second.
    assert_eq!(grad(1, 0.5, 0.25), -0.5 + 0.25);
    assert_eq!(grad(2, 0.5, 0.25), 0.5 - 0.25);
    assert_eq!(grad(3, 0.5, 0.25), -0.5 - 0.25);
    // h = 12 and h = 14 pick x for the second component.
    assert_eq!(grad(12, 0.5, 0.25), 0.25 + 0.5);
    // h in 4..8 (excluding 12/14 cases): second component is zero.
    assert_eq!(grad(4, 0.5, 0.25), 0.5);
}

#[test]
fn evaluation_stays_in_practical_range() {
    let field = NoiseField::from_seed(1234);
    for yi in 0..40 {
        for xi in 0..40 {
            let x = f64::from(xi) * 0.37;
            let y = f64::from(yi) * 0.53;
            let v = field.evaluate(x, y);
            assert!(v.abs() <= 2.0, "out of range {v} at ({x}, {y})");
        }
    }
}

#[test]
fn evaluation_is_deterministic_for_a_fixed_table() {
    let field = NoiseField::new(identity_table());
    let a = field.evaluate(3.7, 11.2);
    let b = field.evaluate(3.7, 11.2);
    assert_eq!(a, b);
}

#[test]
fn clones_share_the_same_pattern() {
    let field = NoiseField::from_seed(5);
    let clone = field.clone();
    for i in 0..20 {
        let x = f64::from(i) * 0.19;
        assert_eq!(field.evaluate(x, 0.4), clone.evaluate(x, 0.4));
    }
}

#[test]
fn negative_coordinates_are_valid() {
    let field = NoiseField::new(identity_table());
    let v = field.evaluate(-2.3, -0.7);
    assert!(v.is_finite());
    assert_eq!(field.evaluate(-2.0, -5.0), 0.0);
}
