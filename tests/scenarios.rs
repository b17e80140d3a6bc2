use searchtree::{Balance, Color, Tree};

fn values(tree: &Tree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

fn root_value(tree: &Tree<i32>) -> i32 {
    *tree.node(tree.root().unwrap()).value()
}

#[test]
fn avl_stays_balanced_after_every_insert() {
    let mut tree = Tree::avl();
    for value in [5, 3, 8, 1, 4, 7, 9, 2, 6] {
        tree.insert(value);
        assert_eq!(tree.check(), Ok(()));
    }

    assert_eq!(values(&tree), (1..=9).collect::<Vec<_>>());
    assert_eq!(tree.height(), 3);
}

#[test]
fn red_black_ascending_inserts() {
    let mut tree = Tree::red_black();
    for value in (10..=80).step_by(10) {
        tree.insert(value);
        assert_eq!(tree.check(), Ok(()));
        assert_eq!(tree.node(tree.root().unwrap()).color(), Color::Black);
    }

    assert_eq!(values(&tree), (10..=80).step_by(10).collect::<Vec<_>>());
}

#[test]
fn splay_search_brings_the_hit_to_the_root() {
    let mut tree = Tree::splay();
    for value in 1..=7 {
        tree.insert(value);
    }

    let four = tree.search(&4);
    assert!(four.is_some());
    assert_eq!(tree.root(), four);
    assert_eq!(root_value(&tree), 4);
    assert_eq!(values(&tree), (1..=7).collect::<Vec<_>>());
    assert_eq!(tree.check(), Ok(()));
}

#[test]
fn red_black_erasing_the_root_of_two_leaves_a_black_root() {
    let mut tree = Tree::red_black();
    tree.insert(1);
    tree.insert(2);

    assert_eq!(tree.erase(&1), Some(1));
    let root = tree.root().unwrap();
    assert_eq!(*tree.node(root).value(), 2);
    assert_eq!(tree.node(root).color(), Color::Black);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.check(), Ok(()));
}

#[test]
fn size_tracks_inserts_and_erases_for_every_balance() {
    for balance in [Balance::Unbalanced, Balance::Avl, Balance::RedBlack, Balance::Splay] {
        let mut tree = Tree::new(balance);
        for value in [50, 20, 80, 10, 30, 70, 90, 20, 50] {
            tree.insert(value);
        }
        assert_eq!(tree.len(), 7, "{balance:?}");

        for value in [20, 20, 60, 90] {
            tree.erase(&value);
        }
        assert_eq!(tree.len(), 5, "{balance:?}");
        assert_eq!(values(&tree), [10, 30, 50, 70, 80], "{balance:?}");
        assert_eq!(tree.check(), Ok(()), "{balance:?}");

        for value in [10, 30, 50, 70, 80] {
            assert_eq!(tree.erase(&value), Some(value), "{balance:?}");
        }
        assert!(tree.is_empty(), "{balance:?}");
        assert_eq!(tree.root(), None, "{balance:?}");
        assert_eq!(tree.check(), Ok(()), "{balance:?}");
    }
}

#[test]
fn erase_with_two_children_keeps_ids_with_their_values() {
    for balance in [Balance::Unbalanced, Balance::Avl, Balance::RedBlack] {
        let mut tree = Tree::new(balance);
        let ids: Vec<_> = (1..=15).map(|value| (value, tree.insert(value).id())).collect();

        let root = root_value(&tree);
        assert_eq!(tree.erase(&root), Some(root));
        for (value, id) in ids.into_iter().filter(|&(value, _)| value != root) {
            assert_eq!(tree.find(&value), Some(id), "{balance:?}");
            assert_eq!(*tree.node(id).value(), value, "{balance:?}");
        }
        assert_eq!(tree.check(), Ok(()), "{balance:?}");
    }
}

#[test]
fn probe_anchor_is_the_insertion_point() {
    for balance in [Balance::Unbalanced, Balance::Avl, Balance::RedBlack, Balance::Splay] {
        let mut tree = Tree::new(balance);
        for value in (0..40).step_by(4) {
            tree.insert(value);
        }

        let miss = tree.probe(&13);
        assert_eq!(miss.found, None);
        let anchor = miss.anchor.unwrap();
        let inserted = tree.insert(13).id();
        if balance == Balance::Unbalanced {
            assert_eq!(tree.node(inserted).parent(), Some(anchor));
        }
        assert_eq!(tree.check(), Ok(()), "{balance:?}");
    }
}

#[test]
fn structural_edits_then_secede_and_attach() {
    let mut tree = Tree::bst();
    let four = tree.insert_as_root(4);
    let two = tree.insert_as_left_child(four, 2);
    let six = tree.insert_as_right_child(four, 6);
    tree.insert_as_left_child(two, 1);
    tree.insert_as_right_child(two, 3);
    assert_eq!(tree.check(), Ok(()));
    assert_eq!(tree.height(), 2);

    let left = tree.secede(two);
    assert_eq!(left.len(), 3);
    assert_eq!(values(&left), [1, 2, 3]);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.check(), Ok(()));

    let grafted = tree.attach_as_left_child(four, left).unwrap();
    assert_eq!(tree.node(grafted).parent(), Some(four));
    assert_eq!(values(&tree), [1, 2, 3, 4, 6]);
    assert_eq!(tree.check(), Ok(()));

    assert_eq!(tree.remove_subtree(six), 1);
    assert_eq!(values(&tree), [1, 2, 3, 4]);
    assert_eq!(tree.check(), Ok(()));
}

#[test]
fn large_sequential_workloads_stay_valid() {
    for balance in [Balance::Avl, Balance::RedBlack, Balance::Splay] {
        let mut tree = Tree::new(balance);
        for value in 0..2_000 {
            tree.insert(value);
        }
        for value in (0..2_000).step_by(3) {
            assert_eq!(tree.erase(&value), Some(value));
        }
        assert_eq!(tree.len(), 2_000 - 667, "{balance:?}");
        assert_eq!(tree.check(), Ok(()), "{balance:?}");
    }
}

#[test]
fn erase_with_a_deeper_successor_below_the_root() {
    for balance in [Balance::Unbalanced, Balance::Avl, Balance::RedBlack, Balance::Splay] {
        let mut tree = Tree::new(balance);
        for value in [50, 20, 60, 10, 40, 30, 35, 45] {
            tree.insert(value);
        }

        assert_eq!(tree.erase(&20), Some(20), "{balance:?}");
        assert_eq!(values(&tree), [10, 30, 35, 40, 45, 50, 60], "{balance:?}");
        assert_eq!(tree.len(), 7, "{balance:?}");
        assert_eq!(tree.check(), Ok(()), "{balance:?}");
    }
}
