/// Quintic smoothstep used at lattice boundaries.
///
/// `fade(t) = 6t^5 - 15t^4 + 10t^3`, which has zero first and second
/// derivatives at `t = 0` and `t = 1`. Anything less smooth shows the
/// lattice grid in the output.
pub(crate) fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation, `a + t * (b - a)`.
pub(crate) fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
