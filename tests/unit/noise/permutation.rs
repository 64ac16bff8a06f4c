use super::*;

#[test]
fn table_is_doubled_and_mirrored() {
    let table = PermutationTable::from_seed(42);
    assert_eq!(PermutationTable::LEN, 512);
    for i in 0..TABLE_SIZE {
        assert_eq!(table.get(i + TABLE_SIZE), table.get(i), "mirror broken at {i}");
    }
}

#[test]
fn same_seed_reproduces_same_table() {
    let a = PermutationTable::from_seed(7);
    let b = PermutationTable::from_seed(7);
    for i in 0..PermutationTable::LEN {
        assert_eq!(a.get(i), b.get(i));
    }
}

#[test]
fn different_seeds_diverge() {
    let a = PermutationTable::from_seed(1);
    let b = PermutationTable::from_seed(2);
    let same = (0..PermutationTable::LEN).all(|i| a.get(i) == b.get(i));
    assert!(!same, "distinct seeds produced identical tables");
}

#[test]
fn generated_entries_are_not_constant() {
    let table = PermutationTable::from_seed(0);
    let first = table.get(0);
    assert!((1..TABLE_SIZE).any(|i| table.get(i) != first));
}

#[test]
fn from_values_mirrors_the_given_half() {
    let mut half = [0u8; TABLE_SIZE];
    for (i, v) in half.iter_mut().enumerate() {
        *v = i as u8;
    }
    let table = PermutationTable::from_values(half);
    for i in 0..TABLE_SIZE {
        assert_eq!(table.get(i), i as u8);
        assert_eq!(table.get(i + TABLE_SIZE), i as u8);
    }
}

#[test]
fn generate_accepts_any_rng() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(99);
    let table = PermutationTable::generate(&mut rng);
    // hash() widens without remapping
    for i in 0..PermutationTable::LEN {
        assert_eq!(table.hash(i), usize::from(table.get(i)));
    }
}
