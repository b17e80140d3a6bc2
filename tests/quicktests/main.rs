use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};
use searchtree::{Balance, Tree};

mod splay;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
    /// Look the value up
    Search(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Search(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

pub(crate) const BALANCES: [Balance; 4] = [
    Balance::Unbalanced,
    Balance::Avl,
    Balance::RedBlack,
    Balance::Splay,
];

/// Applies `ops` to a fresh tree of every kind, checking it against a `BTreeSet` and running
/// the full invariant check after each step. Panics with the offending tree on a mismatch so
/// quickcheck reports something readable.
fn run<T>(ops: &[Op<T>])
where
    T: Ord + Clone + std::fmt::Debug,
{
    for balance in BALANCES {
        let mut tree = Tree::new(balance);
        let mut set = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(value) => {
                    let result = tree.insert(value.clone());
                    assert_eq!(result.is_inserted(), set.insert(value.clone()));
                    assert_eq!(tree.node(result.id()).value(), value);
                }
                Op::Remove(value) => {
                    assert_eq!(tree.erase(value).is_some(), set.remove(value));
                }
                Op::Search(value) => {
                    let found = tree.search(value);
                    assert_eq!(found.is_some(), set.contains(value));
                    if let Some(id) = found {
                        assert_eq!(tree.node(id).value(), value);
                    }
                }
            }

            if let Err(err) = tree.check() {
                panic!("{balance:?} tree broke after {op:?}: {err}\n{tree:?}");
            }
            assert_eq!(tree.len(), set.len());
        }

        assert!(tree.iter().eq(set.iter()));
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        run(&ops);
        true
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_u16(ops: Vec<Op<u16>>) -> bool {
        run(&ops);
        true
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let added: BTreeSet<_> = xs.iter().copied().collect();
        BALANCES.iter().all(|&balance| {
            let mut tree = Tree::new(balance);
            for x in &xs {
                tree.insert(*x);
            }

            nots.iter()
                .filter(|x| !added.contains(x))
                .all(|x| tree.find(x).is_none())
        })
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        BALANCES.iter().all(|&balance| {
            let mut tree = Tree::new(balance);
            for x in &xs {
                tree.insert(*x);
            }
            for delete in &deletes {
                tree.erase(delete);
            }

            let still_present: BTreeSet<_> = xs
                .iter()
                .filter(|x| !deletes.contains(x))
                .collect();
            tree.check().is_ok() && tree.iter().eq(still_present.into_iter())
        })
    }
}

quickcheck::quickcheck! {
    fn heights_stay_logarithmic(xs: Vec<u16>) -> bool {
        let mut avl = Tree::avl();
        let mut red_black = Tree::red_black();
        for x in &xs {
            avl.insert(*x);
            red_black.insert(*x);
        }

        // AVL: h < 1.45 lg(n + 2). Red-black: h <= 2 lg(n + 1).
        let n = avl.len() as f64;
        let avl_height = (avl.height() + 1) as f64;
        let red_black_height = red_black
            .level_order()
            .map(|id| depth(&red_black, id))
            .max()
            .map_or(0, |depth| depth + 1) as f64;
        avl_height <= 1.45 * (n + 2.0).log2() && red_black_height <= 2.0 * (n + 1.0).log2()
    }
}

/// Number of edges between `id` and the root.
pub(crate) fn depth<T>(tree: &Tree<T>, id: searchtree::NodeId) -> usize {
    std::iter::successors(tree.node(id).parent(), |&p| tree.node(p).parent()).count()
}
