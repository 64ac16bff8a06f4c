use rand::{Rng, SeedableRng, rngs::StdRng};

/// Number of independently drawn entries; the stored table is twice this.
pub const TABLE_SIZE: usize = 256;

/// Gradient-index lookup table seeding all noise evaluation.
///
/// Holds 512 bytes: 256 values drawn independently from `[0, 255]` (duplicates
/// are possible, this is deliberately not a shuffle), mirrored into the second
/// half so that `field` can index one past a lattice cell without wrapping.
///
/// A table is immutable once built. "Re-rolling" the pattern means building a
/// new table, never mutating one that an in-flight evaluation might be
/// reading.
#[derive(Clone)]
pub struct PermutationTable {
    values: [u8; TABLE_SIZE * 2],
}

impl PermutationTable {
    /// Total stored length, mirrored half included.
    pub const LEN: usize = TABLE_SIZE * 2;

    /// Draw a fresh table from `rng`.
    ///
    /// Each entry is `floor(u * 256)` for an independent uniform `u` in
    /// `[0, 1)`. Infallible.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut values = [0u8; Self::LEN];
        for i in 0..TABLE_SIZE {
            let v = (rng.r#gen::<f64>() * 256.0) as u8;
            values[i] = v;
            values[i + TABLE_SIZE] = v;
        }
        Self { values }
    }

    /// Deterministic table from a seed, for reproducible textures.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(&mut rng)
    }

    /// Build a table from 256 explicit entries (the mirror half is derived).
    ///
    /// Mostly useful for regression fixtures with known corner hashes.
    pub fn from_values(first_half: [u8; TABLE_SIZE]) -> Self {
        let mut values = [0u8; Self::LEN];
        values[..TABLE_SIZE].copy_from_slice(&first_half);
        values[TABLE_SIZE..].copy_from_slice(&first_half);
        Self { values }
    }

    /// Entry at `idx`, which may address the mirrored half.
    pub fn get(&self, idx: usize) -> u8 {
        self.values[idx]
    }

    /// Entry at `idx` widened for use as a hash/index.
    pub(crate) fn hash(&self, idx: usize) -> usize {
        usize::from(self.values[idx])
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("values", &&self.values[..8])
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/permutation.rs"]
mod tests;
