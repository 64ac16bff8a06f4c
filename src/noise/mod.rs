pub mod field;
pub mod permutation;
