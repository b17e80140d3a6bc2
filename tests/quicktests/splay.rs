use searchtree::Tree;

use crate::Op;

quickcheck::quickcheck! {
    fn accessed_node_becomes_root(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::splay();
        for op in &ops {
            match op {
                Op::Insert(value) => {
                    let id = tree.insert(*value).id();
                    if tree.root() != Some(id) {
                        return false;
                    }
                }
                Op::Search(value) => {
                    if let Some(id) = tree.search(value) {
                        if tree.root() != Some(id) {
                            return false;
                        }
                    }
                }
                Op::Remove(value) => {
                    tree.erase(value);
                }
            }
        }
        tree.check().is_ok()
    }
}

quickcheck::quickcheck! {
    fn find_never_restructures(xs: Vec<i8>, probes: Vec<i8>) -> bool {
        let mut tree = Tree::splay();
        for x in &xs {
            tree.insert(*x);
        }
        let shape: Vec<_> = tree.pre_order().collect();

        for probe in &probes {
            tree.find(probe);
        }
        tree.pre_order().eq(shape.into_iter())
    }
}

quickcheck::quickcheck! {
    fn search_miss_splays_a_neighbour(xs: Vec<i8>, probe: i8) -> bool {
        let mut tree = Tree::splay();
        for x in &xs {
            tree.insert(*x);
        }
        if xs.is_empty() || xs.contains(&probe) {
            return true;
        }

        tree.search(&probe);
        let root = *tree.node(tree.root().unwrap()).value();
        let below = xs.iter().filter(|&&x| x < probe).max();
        let above = xs.iter().filter(|&&x| x > probe).min();
        below == Some(&root) || above == Some(&root)
    }
}
