use index_forest::RbMap;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn ascending_triple_recolors_and_rotates_left() {
    let mut map = RbMap::<i32, i32>::new();
    map.insert(10, 0);
    map.insert(20, 0);
    map.insert(30, 0);

    // One left rotation with recoloring: 20 becomes the root.
    let root = map.root_index().unwrap();
    assert_eq!(*map.key(root), 20);

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![10, 20, 30]);
    map.assert_valid().unwrap();
}

#[test]
fn ascending_ladder_height_stays_logarithmic() {
    let mut map = RbMap::<i32, i32>::new();
    for k in 1..=1023 {
        map.insert(k, k);
    }
    map.assert_valid().unwrap();

    // 2 * log2(1023 + 1) = 20
    assert!(map.height() <= 20, "height {} too large", map.height());
    assert_eq!(map.len(), 1023);
}

#[test]
fn interleaved_insert_remove_keeps_invariants() {
    let mut map = RbMap::<i32, i32>::new();
    for k in 0..200 {
        map.insert(k, k);
        assert_eq!(map.get(&k), Some(&k));
        map.assert_valid().unwrap();
    }
    assert_eq!(map.len(), 200);

    for k in (0..200).step_by(2) {
        assert!(map.remove(&k));
        map.assert_valid().unwrap();
    }
    assert_eq!(map.len(), 100);

    for k in 0..200 {
        if k % 2 == 0 {
            assert_eq!(map.get(&k), None);
        } else {
            assert_eq!(map.get(&k), Some(&k));
        }
    }
}

#[test]
fn shuffled_soak_with_full_drain() {
    let mut rng = StdRng::seed_from_u64(0xfacade);
    let mut keys: Vec<i32> = (0..500).collect();
    keys.shuffle(&mut rng);

    let mut map = RbMap::<i32, i32>::new();
    for &k in &keys {
        map.insert(k, k * 3);
    }
    map.assert_valid().unwrap();

    let inorder: Vec<i32> = map.keys().copied().collect();
    assert_eq!(inorder, (0..500).collect::<Vec<i32>>());

    let mut reverse = Vec::new();
    let mut curr = map.last();
    while let Some(i) = curr {
        reverse.push(*map.key(i));
        curr = map.prev(i);
    }
    assert_eq!(reverse, (0..500).rev().collect::<Vec<i32>>());

    let floor = map.get_or_next_lower(&499).unwrap();
    assert_eq!(*map.key(floor), 499);

    keys.shuffle(&mut rng);
    for &k in &keys {
        assert!(map.remove(&k));
        map.assert_valid().unwrap();
    }
    assert!(map.is_empty());
    assert_eq!(map.root_index(), None);
}

#[test]
fn overwrite_keeps_length_and_structure() {
    let mut map = RbMap::<String, i32>::new();
    map.insert("a".to_string(), 1);
    map.insert("b".to_string(), 2);
    map.insert("c".to_string(), 3);
    map.insert("b".to_string(), 20);

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&"b".to_string()), Some(&20));

    let mut entries = Vec::new();
    let mut curr = map.first();
    while let Some(i) = curr {
        entries.push((map.key(i).clone(), *map.value(i)));
        curr = map.next(i);
    }
    assert_eq!(
        entries,
        vec![
            ("a".to_string(), 1),
            ("b".to_string(), 20),
            ("c".to_string(), 3)
        ]
    );
    map.assert_valid().unwrap();
}

#[test]
fn float_keys_with_natural_order() {
    let mut map = RbMap::<f64, i32>::new();
    map.insert(1.0, 1);
    map.insert(3.0, 5);
    map.insert(4.0, 5);
    map.insert(3.0, 15);
    map.insert(4.1, 0);
    map.insert(44.0, 123);

    assert_eq!(map.get(&44.0), Some(&123));
    assert_eq!(map.get(&3.0), Some(&15));

    let keys: Vec<f64> = map.keys().copied().collect();
    assert_eq!(keys, vec![1.0, 3.0, 4.0, 4.1, 44.0]);
    map.assert_valid().unwrap();
}

#[test]
fn remove_on_empty_and_absent_keys() {
    let mut map = RbMap::<i32, i32>::new();
    assert!(!map.remove(&1));
    assert_eq!(map.len(), 0);

    map.insert(1, 1);
    assert!(!map.remove(&2));
    assert_eq!(map.len(), 1);
    assert!(map.remove(&1));
    assert!(map.is_empty());
    map.assert_valid().unwrap();
}
