//! AVL rebalancing. See [the Wikipedia page][wiki] for terminology.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing

use std::cmp::Ordering;

use crate::bst::InsertResult;
use crate::node::NodeId;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Height of the left subtree minus height of the right subtree.
    pub(crate) fn balance_factor(&self, id: NodeId) -> i32 {
        let node = self.node(id);
        self.stature(node.left) - self.stature(node.right)
    }

    fn is_avl_balanced(&self, id: NodeId) -> bool {
        (-1..=1).contains(&self.balance_factor(id))
    }

    /// The child with the taller subtree. On a tie, the child on the same side as `id` hangs
    /// from its own parent, which turns the rotation into a single one.
    fn taller_child(&self, id: NodeId) -> NodeId {
        let node = self.node(id);
        let child = match self.stature(node.left).cmp(&self.stature(node.right)) {
            Ordering::Greater => node.left,
            Ordering::Less => node.right,
            Ordering::Equal if self.is_left_child(id) => node.left,
            Ordering::Equal => node.right,
        };
        child.expect("an unbalanced subtree has grandchildren")
    }

    /// Rotates at the taller grandchild of `g`, which must be out of balance. Returns the new
    /// subtree root.
    fn rebalance_at(&mut self, g: NodeId) -> NodeId {
        let v = self.taller_child(self.taller_child(g));
        log::trace!("{g} out of balance ({}), rotating at {v}", self.balance_factor(g));
        let root = self.rotate_at(v);

        if cfg!(debug_assertions) {
            assert!(self.is_avl_balanced(root));
        }
        root
    }

    pub(crate) fn avl_insert(&mut self, value: T) -> InsertResult
    where
        T: Ord,
    {
        let result = self.insert_leaf(value);
        let InsertResult::Inserted(id) = result else {
            return result;
        };

        // The first unbalanced ancestor is the only one. One rotation brings its subtree back to
        // the height it had before the insert, so nothing above it needs a new height.
        let mut current = self.node(id).parent;
        while let Some(g) = current {
            if !self.is_avl_balanced(g) {
                self.rebalance_at(g);
                break;
            }
            self.update_height(g);
            current = self.node(g).parent;
        }
        result
    }

    pub(crate) fn avl_erase(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let found = self.find(value)?;
        let removal = self.remove_at(found);

        // A rotation after a removal can shorten the subtree, so keep going all the way up.
        let mut current = removal.link.parent();
        while let Some(mut g) = current {
            if !self.is_avl_balanced(g) {
                g = self.rebalance_at(g);
            }
            self.update_height(g);
            current = self.node(g).parent;
        }
        Some(removal.value)
    }
}
