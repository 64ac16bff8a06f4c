use crate::foundation::math::{fade, lerp};
use crate::noise::permutation::PermutationTable;

/// Pure scalar 2D Perlin noise field over a [`PermutationTable`].
///
/// [`evaluate`](NoiseField::evaluate) maps continuous coordinates to a value
/// in roughly `[-1, 1]`. The field owns its table; evaluation never mutates
/// anything, so a field can be shared read-only across render workers.
#[derive(Clone, Debug)]
pub struct NoiseField {
    table: PermutationTable,
}

impl NoiseField {
    /// Wrap an existing table.
    pub fn new(table: PermutationTable) -> Self {
        Self { table }
    }

    /// Field over a seeded table, for reproducible output.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(PermutationTable::from_seed(seed))
    }

    /// The table backing this field.
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Sample the field at `(x, y)`.
    ///
    /// Gradient noise over the unit lattice: hash the four corners of the
    /// containing cell, dot each corner gradient with the offset to the
    /// sample point, and blend with quintic-faded bilinear interpolation.
    /// Exact integer coordinates always yield `0.0` (the offsets are zero, so
    /// every fade weight and corner dot product collapses).
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let p = &self.table;

        let xi = ((x.floor() as i64) & 255) as usize;
        let yi = ((y.floor() as i64) & 255) as usize;

        let x = x - x.floor();
        let y = y - y.floor();

        let u = fade(x);
        let v = fade(y);

        // Hashes for the cell's left and right corner columns.
        let a = p.hash(xi) + yi;
        let b = p.hash(xi + 1) + yi;

        lerp(
            v,
            lerp(
                u,
                grad(p.hash(a), x, y),
                grad(p.hash(b), x - 1.0, y),
            ),
            lerp(
                u,
                grad(p.hash(a + 1), x, y - 1.0),
                grad(p.hash(b + 1), x - 1.0, y - 1.0),
            ),
        )
    }
}

/// Dot product of a hashed corner gradient with the offset vector `(x, y)`.
///
/// The low nibble of `hash` picks one of 8 effective directions through bit
/// tests: bit 3 chooses the first component, bits 2..0 the second and both
/// signs.
fn grad(hash: usize, x: f64, y: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        0.0
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

#[cfg(test)]
#[path = "../../tests/unit/noise/field.rs"]
mod tests;
