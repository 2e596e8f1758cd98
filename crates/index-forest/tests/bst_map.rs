use index_forest::BstMap;

#[test]
fn inorder_keys_are_sorted() {
    let mut map = BstMap::<i32, i32>::new();
    for k in [5, 3, 8, 1, 4, 7, 9] {
        map.insert(k, k * 10);
    }

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![1, 3, 4, 5, 7, 8, 9]);
    map.assert_valid().unwrap();
}

#[test]
fn remove_on_empty_returns_false() {
    let mut map = BstMap::<i32, i32>::new();
    assert!(!map.remove(&42));
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.get(&42), None);
    assert_eq!(map.min_key(), None);
    assert_eq!(map.max_key(), None);
}

#[test]
fn insert_overwrites_existing_key() {
    let mut map = BstMap::<i32, &str>::new();
    map.insert(7, "old");
    map.insert(3, "left");
    assert_eq!(map.len(), 2);

    map.insert(7, "new");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&7), Some(&"new"));
    map.assert_valid().unwrap();
}

#[test]
fn removal_covers_all_child_counts() {
    let mut map = BstMap::<i32, i32>::new();
    for k in [50, 30, 70, 20, 40, 60, 80, 35] {
        map.insert(k, k);
    }
    map.assert_valid().unwrap();

    // Leaf.
    assert!(map.remove(&20));
    map.assert_valid().unwrap();
    // One child.
    assert!(map.remove(&40));
    map.assert_valid().unwrap();
    // Two children, successor is not the direct right child.
    assert!(map.remove(&50));
    map.assert_valid().unwrap();
    // Two children, successor is the direct right child.
    assert!(map.remove(&70));
    map.assert_valid().unwrap();

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![30, 35, 60, 80]);
    assert_eq!(map.len(), 4);

    assert!(!map.remove(&50));
    assert_eq!(map.len(), 4);
}

#[test]
fn remove_root_repeatedly_drains_the_tree() {
    let mut map = BstMap::<i32, i32>::new();
    for k in [4, 2, 6, 1, 3, 5, 7] {
        map.insert(k, k);
    }

    while let Some(root) = map.root_index() {
        let key = *map.key(root);
        assert!(map.remove(&key));
        map.assert_valid().unwrap();
    }
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}

#[test]
fn min_max_track_mutations() {
    let mut map = BstMap::<i32, i32>::new();
    map.insert(10, 0);
    map.insert(5, 0);
    map.insert(20, 0);
    assert_eq!(map.min_key(), Some(&5));
    assert_eq!(map.max_key(), Some(&20));

    assert!(map.remove(&5));
    assert_eq!(map.min_key(), Some(&10));
    assert!(map.remove(&20));
    assert_eq!(map.max_key(), Some(&10));
    map.assert_valid().unwrap();
}

#[test]
fn custom_comparator_reverses_order() {
    let mut map = BstMap::<i32, i32, _>::with_comparator(|a: &i32, b: &i32| {
        if a == b {
            0
        } else if a > b {
            -1
        } else {
            1
        }
    });
    for k in [1, 3, 2] {
        map.insert(k, k);
    }

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![3, 2, 1]);
    assert_eq!(map.min_key(), Some(&3));
    assert_eq!(map.max_key(), Some(&1));
    map.assert_valid().unwrap();
}

#[test]
fn sorted_insertion_degrades_to_a_chain() {
    let mut map = BstMap::<i32, i32>::new();
    for k in 0..64 {
        map.insert(k, k);
    }
    // No rebalancing: ascending insertion builds a right spine.
    assert_eq!(map.height(), 64);
    map.assert_valid().unwrap();
}

#[test]
fn get_or_next_lower_rounds_down() {
    let empty = BstMap::<i32, i32>::new();
    assert_eq!(empty.get_or_next_lower(&10), None);

    let mut map = BstMap::<i32, i32>::new();
    for k in [10, 20, 30, 40] {
        map.insert(k, k);
    }

    // Present key resolves to its own slot.
    let hit = map.get_or_next_lower(&30).unwrap();
    assert_eq!(*map.key(hit), 30);

    // Gap keys round down to the nearest lower key.
    let gap = map.get_or_next_lower(&25).unwrap();
    assert_eq!(*map.key(gap), 20);
    let above = map.get_or_next_lower(&99).unwrap();
    assert_eq!(*map.key(above), 40);

    // Nothing below the minimum.
    assert_eq!(map.get_or_next_lower(&5), None);
}

#[test]
fn prev_walks_keys_in_descending_order() {
    let mut map = BstMap::<i32, i32>::new();
    for k in [5, 3, 8, 1, 4, 7, 9] {
        map.insert(k, k);
    }

    let mut descending = Vec::new();
    let mut curr = map.last();
    while let Some(i) = curr {
        descending.push(*map.key(i));
        curr = map.prev(i);
    }
    assert_eq!(descending, vec![9, 8, 7, 5, 4, 3, 1]);
    assert_eq!(map.prev(map.first().unwrap()), None);
}

#[test]
fn get_mut_and_for_each() {
    let mut map = BstMap::<i32, i32>::new();
    for k in [2, 1, 3] {
        map.insert(k, 0);
    }
    *map.get_mut(&2).unwrap() = 22;

    let mut seen = Vec::new();
    map.for_each(|k, v| seen.push((*k, *v)));
    assert_eq!(seen, vec![(1, 0), (2, 22), (3, 0)]);
}

#[test]
fn clear_resets_everything() {
    let mut map = BstMap::<i32, i32>::new();
    for k in 0..10 {
        map.insert(k, k);
    }
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.keys().count(), 0);

    map.insert(1, 1);
    assert_eq!(map.get(&1), Some(&1));
    map.assert_valid().unwrap();
}
