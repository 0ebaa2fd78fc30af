use avl_tree::{AvlTree, Insertion, Removal};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::collections::BTreeMap;

fn keys_in_order<K: Clone, V, C: Fn(&K, &K) -> i32>(tree: &AvlTree<K, V, C>) -> Vec<K> {
    tree.keys().cloned().collect()
}

#[test]
fn three_ascending_keys_rotate_into_balanced_root() {
    let mut tree = AvlTree::<i32, &str>::new();
    for (k, v) in [(1, "one"), (2, "two"), (3, "three")] {
        assert!(tree.insert(k, v).is_inserted());
    }

    let root = tree.root().unwrap();
    assert_eq!(*tree.key(root), 2);
    let l = tree.node(root).l.unwrap();
    let r = tree.node(root).r.unwrap();
    assert_eq!(*tree.key(l), 1);
    assert_eq!(*tree.key(r), 3);
    assert_eq!(tree.node(l).p, Some(root));
    assert_eq!(tree.node(r).p, Some(root));
    assert_eq!(tree.count(), 3);
    tree.assert_valid().unwrap();
}

#[test]
fn single_node_has_no_links() {
    let mut tree = AvlTree::<i32, ()>::new();
    assert_eq!(tree.root(), None);
    assert_eq!(tree.height(), 0);

    tree.insert(7, ());
    let root = tree.root().unwrap();
    let node = tree.node(root);
    assert_eq!((node.p, node.l, node.r), (None, None, None));
    assert_eq!(tree.height(), 1);

    assert_eq!(tree.delete(&7), Removal::Deleted(7, ()));
    assert_eq!(tree.root(), None);
    assert!(tree.is_empty());
}

#[test]
fn ascending_fifty_insert_then_delete() {
    let mut tree = AvlTree::<i32, i32>::new();
    for i in 0..50 {
        assert!(tree.insert(i, i * 10).is_inserted());
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.count(), 50);
    // A balanced tree over 50 keys is at most 1.44 * log2(51) tall.
    assert!(tree.height() <= 8, "height {}", tree.height());

    for i in 0..50 {
        assert_eq!(tree.delete(&i), Removal::Deleted(i, i * 10));
        tree.assert_valid().unwrap();
        assert_eq!(tree.count(), (49 - i) as usize);
    }
    assert_eq!(tree.count(), 0);
    assert_eq!(tree.root(), None);
}

#[test]
fn neighbors_of_small_tree() {
    let mut tree = AvlTree::<i32, &str>::new();
    tree.insert(1, "one");
    tree.insert(2, "two");
    tree.insert(3, "three");

    let two = tree.find(&2).unwrap();
    assert_eq!(tree.successor(two).map(|i| *tree.key(i)), Some(3));
    assert_eq!(tree.predecessor(two).map(|i| *tree.key(i)), Some(1));

    let three = tree.find(&3).unwrap();
    assert_eq!(tree.successor(three), None);
    let one = tree.find(&1).unwrap();
    assert_eq!(tree.predecessor(one), None);
}

#[test]
fn delete_middle_then_missing_key() {
    let mut tree = AvlTree::<i32, &str>::new();
    tree.insert(1, "one");
    tree.insert(2, "two");
    tree.insert(3, "three");

    assert_eq!(tree.delete(&2), Removal::Deleted(2, "two"));
    assert_eq!(keys_in_order(&tree), vec![1, 3]);
    assert_eq!(tree.count(), 2);
    tree.assert_valid().unwrap();

    assert_eq!(tree.delete(&10), Removal::NotFound);
    assert_eq!(keys_in_order(&tree), vec![1, 3]);
}

#[test]
fn duplicate_insert_leaves_tree_unchanged() {
    let mut tree = AvlTree::<i32, String>::new();
    for k in [5, 3, 8, 1, 4] {
        tree.insert(k, format!("v{k}"));
    }
    let before = tree.print();

    match tree.insert(3, "other".to_string()) {
        Insertion::Duplicate {
            existing,
            key,
            value,
        } => {
            assert_eq!(*tree.key(existing), 3);
            assert_eq!(key, 3);
            assert_eq!(value, "other");
        }
        other => panic!("expected duplicate, got {other:?}"),
    }
    assert_eq!(tree.print(), before);
    assert_eq!(tree.get(&3).map(String::as_str), Some("v3"));
    assert_eq!(tree.count(), 5);
}

#[test]
fn two_children_delete_takes_successor_entry() {
    let mut tree = AvlTree::<i32, i32>::new();
    for k in [50, 30, 70, 20, 40, 60, 80, 65] {
        tree.insert(k, -k);
    }
    let root = tree.root().unwrap();
    assert_eq!(*tree.key(root), 50);

    assert_eq!(tree.delete(&50), Removal::Deleted(50, -50));
    tree.assert_valid().unwrap();
    let root = tree.root().unwrap();
    assert_eq!(*tree.key(root), 60);
    assert_eq!(*tree.value(root), -60);
    assert_eq!(tree.get(&50), None);
    assert_eq!(keys_in_order(&tree), vec![20, 30, 40, 60, 65, 70, 80]);
}

/// Minimal AVL tree of height `h` with in-order keys, collected per depth.
fn fibonacci_tree(h: u32, next_key: &mut i32, depth: usize, levels: &mut Vec<Vec<i32>>) {
    if h == 0 {
        return;
    }
    if levels.len() <= depth {
        levels.push(Vec::new());
    }
    fibonacci_tree(h - 1, next_key, depth + 1, levels);
    levels[depth].push(*next_key);
    *next_key += 1;
    if h >= 2 {
        fibonacci_tree(h - 2, next_key, depth + 1, levels);
    }
}

#[test]
fn deleting_max_of_fibonacci_tree_rotates_every_level() {
    let mut levels = Vec::new();
    let mut n = 0;
    fibonacci_tree(8, &mut n, 0, &mut levels);
    assert_eq!(n, 54);

    let mut tree = AvlTree::<i32, ()>::new();
    for k in levels.concat() {
        tree.insert(k, ());
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.count(), 54);
    assert_eq!(tree.height(), 8);
    assert_eq!(tree.balance_factor(tree.root().unwrap()), -1);

    assert!(tree.delete(&53).is_deleted());
    tree.assert_valid().unwrap();
    assert_eq!(tree.height(), 7);
    assert_eq!(tree.count(), 53);
    assert_eq!(keys_in_order(&tree), (0..53).collect::<Vec<_>>());
}

#[test]
fn ladder_insert_delete() {
    let mut tree = AvlTree::<i32, i32>::new();

    for i in 0..300 {
        tree.insert(i, i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);

    for i in (0..300).step_by(3) {
        assert!(tree.delete(&i).is_deleted());
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        if i % 3 == 0 {
            assert_eq!(tree.get(&i), None);
        } else {
            assert_eq!(tree.get(&i), Some(&i));
        }
    }
    assert_eq!(tree.len(), 200);
    assert_eq!(tree.count(), 200);
}

#[test]
fn indices_resolve_after_arena_compaction() {
    let mut tree = AvlTree::<i32, i32>::new();
    for i in 0..20 {
        tree.insert(i, i);
    }
    assert!(tree.delete(&0).is_deleted());
    assert!(tree.delete(&7).is_deleted());
    for i in (1..20).filter(|i| *i != 7) {
        let idx = tree.find(&i).unwrap();
        assert_eq!(*tree.key(idx), i);
        assert!((idx as usize) < tree.len());
    }
    tree.assert_valid().unwrap();
}

#[test]
fn payload_update_keeps_shape() {
    let mut tree = AvlTree::<String, i32>::new();
    for (i, k) in ["one", "two", "three", "four"].into_iter().enumerate() {
        tree.insert(k.to_string(), i as i32);
    }
    let shape: Vec<_> = tree
        .arena()
        .iter()
        .map(|n| (n.p, n.l, n.r))
        .collect();

    *tree.get_mut(&"three".to_string()).unwrap() = 33;
    let idx = tree.find(&"four".to_string()).unwrap();
    *tree.value_mut(idx) = 44;

    assert_eq!(tree.get(&"three".to_string()), Some(&33));
    assert_eq!(tree.get(&"four".to_string()), Some(&44));
    let after: Vec<_> = tree
        .arena()
        .iter()
        .map(|n| (n.p, n.l, n.r))
        .collect();
    assert_eq!(shape, after);
}

#[test]
fn string_keys_iterate_sorted() {
    let mut tree = AvlTree::<String, i32>::new();
    for (k, v) in [("one", 1), ("two", 2), ("three", 3)] {
        tree.insert(k.to_string(), v);
    }
    let entries: Vec<(String, i32)> = tree.iter().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(
        entries,
        vec![
            ("one".to_string(), 1),
            ("three".to_string(), 3),
            ("two".to_string(), 2)
        ]
    );
    assert_eq!(tree.min().map(|i| tree.key(i).as_str()), Some("one"));
    assert_eq!(tree.max().map(|i| tree.key(i).as_str()), Some("two"));
}

#[test]
fn custom_comparator_reverses_order() {
    let mut tree = AvlTree::<i32, (), _>::with_comparator(|a: &i32, b: &i32| b - a);
    for k in 0..10 {
        tree.insert(k, ());
    }
    tree.assert_valid().unwrap();
    assert_eq!(keys_in_order(&tree), (0..10).rev().collect::<Vec<_>>());
    assert_eq!(tree.min().map(|i| *tree.key(i)), Some(9));
    assert!(tree.delete(&4).is_deleted());
    assert!(!tree.contains_key(&4));
}

#[test]
fn subtree_extremes() {
    let mut tree = AvlTree::<i32, ()>::new();
    for k in [8, 4, 12, 2, 6, 10, 14] {
        tree.insert(k, ());
    }
    let four = tree.find(&4);
    let twelve = tree.find(&12);
    assert_eq!(tree.subtree_min(four).map(|i| *tree.key(i)), Some(2));
    assert_eq!(tree.subtree_max(four).map(|i| *tree.key(i)), Some(6));
    assert_eq!(tree.subtree_min(twelve).map(|i| *tree.key(i)), Some(10));
    assert_eq!(tree.subtree_max(twelve).map(|i| *tree.key(i)), Some(14));
    assert_eq!(tree.subtree_min(None), None);
}

#[test]
fn clear_resets_everything() {
    let mut tree = AvlTree::<i32, i32>::new();
    for i in 0..10 {
        tree.insert(i, i);
    }
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.min(), None);
    assert!(tree.insert(3, 3).is_inserted());
    assert_eq!(tree.count(), 1);
}

#[test]
fn debug_renders_as_map() {
    let mut tree = AvlTree::<i32, &str>::new();
    tree.insert(2, "b");
    tree.insert(1, "a");
    assert_eq!(format!("{tree:?}"), r#"{1: "a", 2: "b"}"#);
    assert!(tree.print().starts_with("Node["));
}

#[test]
fn seeded_shuffle_matches_btreemap() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    let mut keys: Vec<u32> = (0..2_000).collect();
    keys.shuffle(&mut rng);

    let mut tree = AvlTree::<u32, u32>::new();
    let mut model = BTreeMap::new();
    for (i, &k) in keys.iter().enumerate() {
        tree.insert(k, k ^ 0xff);
        model.insert(k, k ^ 0xff);
        if i % 97 == 0 {
            tree.assert_valid().unwrap();
        }
    }
    tree.assert_valid().unwrap();

    keys.shuffle(&mut rng);
    for (i, &k) in keys.iter().take(1_500).enumerate() {
        assert_eq!(tree.delete(&k), Removal::Deleted(k, k ^ 0xff));
        model.remove(&k);
        if i % 89 == 0 {
            tree.assert_valid().unwrap();
        }
    }
    tree.assert_valid().unwrap();

    let got: Vec<(u32, u32)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(u32, u32)> = model.into_iter().collect();
    assert_eq!(got, expected);
}
