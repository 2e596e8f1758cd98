use index_forest::AvlMap;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn descending_insert_triggers_single_right_rotation() {
    let mut map = AvlMap::<i32, i32>::new();
    map.insert(3, 0);
    map.insert(2, 0);
    map.insert(1, 0);

    // One right rotation: 2 becomes the root with children 1 and 3.
    let root = map.root_index().unwrap();
    assert_eq!(*map.key(root), 2);
    assert_eq!(map.height(), 2);

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3]);
    map.assert_valid().unwrap();
}

#[test]
fn ascending_ladder_stays_balanced() {
    let mut map = AvlMap::<i32, i32>::new();
    for k in 1..=1023 {
        map.insert(k, k);
    }
    map.assert_valid().unwrap();

    // 1.44 * log2(1023 + 2) ≈ 14.4
    assert!(map.height() <= 14, "height {} too large", map.height());
    assert_eq!(map.len(), 1023);
    assert_eq!(map.min_key(), Some(&1));
    assert_eq!(map.max_key(), Some(&1023));
}

#[test]
fn interleaved_insert_remove_keeps_invariants() {
    let mut map = AvlMap::<i32, i32>::new();
    for k in 0..200 {
        map.insert(k, k);
        map.assert_valid().unwrap();
    }
    for k in (0..200).step_by(2) {
        assert!(map.remove(&k));
        map.assert_valid().unwrap();
    }
    assert_eq!(map.len(), 100);
    for k in 0..200 {
        assert_eq!(map.contains(&k), k % 2 == 1);
    }
}

#[test]
fn shuffled_soak_against_expected_order() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut keys: Vec<i32> = (0..500).collect();
    keys.shuffle(&mut rng);

    let mut map = AvlMap::<i32, i32>::new();
    for &k in &keys {
        map.insert(k, -k);
    }
    map.assert_valid().unwrap();
    assert_eq!(map.len(), 500);

    let inorder: Vec<i32> = map.keys().copied().collect();
    let expected: Vec<i32> = (0..500).collect();
    assert_eq!(inorder, expected);

    keys.shuffle(&mut rng);
    for &k in keys.iter().take(250) {
        assert!(map.remove(&k));
        map.assert_valid().unwrap();
    }
    assert_eq!(map.len(), 250);
}

#[test]
fn insert_returns_same_slot_on_overwrite() {
    let mut map = AvlMap::<&str, i32>::new();
    let a = map.insert("a", 1);
    let b = map.insert("a", 2);
    assert_eq!(a, b);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&"a"), Some(&2));
}

#[test]
fn remove_absent_is_a_no_op() {
    let mut map = AvlMap::<i32, i32>::new();
    for k in [2, 1, 3] {
        map.insert(k, k);
    }
    assert!(!map.remove(&99));
    assert_eq!(map.len(), 3);
    map.assert_valid().unwrap();
}

#[test]
fn drain_to_empty_and_reuse() {
    let mut map = AvlMap::<i32, i32>::new();
    for k in 0..50 {
        map.insert(k, k);
    }
    for k in 0..50 {
        assert!(map.remove(&k));
        map.assert_valid().unwrap();
    }
    assert!(map.is_empty());
    assert_eq!(map.root_index(), None);

    map.insert(7, 7);
    assert_eq!(map.get(&7), Some(&7));
    map.assert_valid().unwrap();
}
