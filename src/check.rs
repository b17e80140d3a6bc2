//! Whole-tree invariant verification.

use thiserror::Error;

use crate::node::NodeId;
use crate::tree::{Balance, Tree};

/// The first broken invariant [`Tree::check`] ran into.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A node and the slot holding it disagree about their relationship.
    #[error("{child} is held by {holder:?} but records {recorded:?} as its parent")]
    ParentMismatch {
        /// The node whose parent link is wrong.
        child: NodeId,
        /// The node whose child slot holds `child`; `None` for the root slot.
        holder: Option<NodeId>,
        /// The parent `child` claims to have.
        recorded: Option<NodeId>,
    },
    /// The in-order sequence is not strictly increasing at this node.
    #[error("{0} is not greater than its in-order predecessor")]
    Unordered(NodeId),
    /// A stored height disagrees with the children's heights.
    #[error("{id} stores height {stored} but its children imply {expected}")]
    StaleHeight {
        /// The node with the stale height.
        id: NodeId,
        /// What the node stores.
        stored: i32,
        /// What its children imply.
        expected: i32,
    },
    /// An AVL node whose subtrees differ in height by more than one.
    #[error("{id} has balance factor {factor}")]
    AvlImbalance {
        /// The unbalanced node.
        id: NodeId,
        /// Left subtree height minus right subtree height.
        factor: i32,
    },
    /// A red-black tree with a red root.
    #[error("the root {0} is red")]
    RedRoot(NodeId),
    /// A red node with a red child.
    #[error("red node {0} has a red child")]
    DoubleRed(NodeId),
    /// A red-black node whose subtrees carry different numbers of black nodes.
    #[error("the subtrees of {id} have black-heights {left} and {right}")]
    BlackHeightMismatch {
        /// The offending node.
        id: NodeId,
        /// Stored black-height of the left subtree.
        left: i32,
        /// Stored black-height of the right subtree.
        right: i32,
    },
    /// The recorded size disagrees with the number of reachable nodes.
    #[error("the tree records {recorded} nodes but {reachable} are reachable")]
    SizeMismatch {
        /// What [`Tree::len`] says.
        recorded: usize,
        /// How many nodes a traversal from the root finds.
        reachable: usize,
    },
    /// Nodes still allocated but no longer reachable from the root.
    #[error("{0} nodes are allocated but unreachable")]
    Orphaned(usize),
}

impl<T> Tree<T> {
    /// Verifies every structural invariant of the tree and the ones its [`Balance`] promises:
    ///
    /// - every child points back at the node holding it, and the root has no parent;
    /// - values strictly increase in order;
    /// - [`Tree::len`] matches the reachable nodes and no node is orphaned;
    /// - every stored height is current;
    /// - AVL: sibling heights differ by at most one;
    /// - red-black: the root is black, no red node has a red child, and sibling subtrees have
    ///   equal black-heights.
    ///
    /// Splay trees promise nothing beyond ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::Tree;
    ///
    /// let mut tree = Tree::red_black();
    /// for value in [10, 20, 30, 40, 50, 60, 70, 80] {
    ///     tree.insert(value);
    ///     assert_eq!(tree.check(), Ok(()));
    /// }
    /// ```
    pub fn check(&self) -> Result<(), InvariantError>
    where
        T: Ord,
    {
        if let Some(root) = self.root {
            let recorded = self.node(root).parent;
            if recorded.is_some() {
                return Err(InvariantError::ParentMismatch {
                    child: root,
                    holder: None,
                    recorded,
                });
            }
        }
        for id in self.pre_order() {
            let node = self.node(id);
            for child in [node.left, node.right].into_iter().flatten() {
                let recorded = self.node(child).parent;
                if recorded != Some(id) {
                    return Err(InvariantError::ParentMismatch {
                        child,
                        holder: Some(id),
                        recorded,
                    });
                }
            }
        }

        let ids: Vec<NodeId> = self.in_order().collect();
        for pair in ids.windows(2) {
            if self.node(pair[0]).value >= self.node(pair[1]).value {
                return Err(InvariantError::Unordered(pair[1]));
            }
        }

        if ids.len() != self.size {
            return Err(InvariantError::SizeMismatch {
                recorded: self.size,
                reachable: ids.len(),
            });
        }
        let allocated = self.nodes.iter().filter(|node| node.is_some()).count();
        if allocated != ids.len() {
            return Err(InvariantError::Orphaned(allocated - ids.len()));
        }

        for id in self.post_order() {
            self.check_node(id)?;
        }

        if self.balance == Balance::RedBlack {
            if let Some(root) = self.root.filter(|&root| !self.node(root).is_black()) {
                return Err(InvariantError::RedRoot(root));
            }
        }
        Ok(())
    }

    /// Checks `id` against its children. Children are assumed checked already.
    fn check_node(&self, id: NodeId) -> Result<(), InvariantError> {
        let node = self.node(id);
        let left = self.stature(node.left);
        let right = self.stature(node.right);

        let expected = match self.balance {
            Balance::RedBlack => {
                if !node.is_black() && !(self.is_black_at(node.left) && self.is_black_at(node.right)) {
                    return Err(InvariantError::DoubleRed(id));
                }
                if left != right {
                    return Err(InvariantError::BlackHeightMismatch { id, left, right });
                }
                left + i32::from(node.is_black())
            }
            Balance::Avl => {
                let factor = self.balance_factor(id);
                if factor.abs() > 1 {
                    return Err(InvariantError::AvlImbalance { id, factor });
                }
                left.max(right) + 1
            }
            Balance::Unbalanced | Balance::Splay => left.max(right) + 1,
        };

        if node.height != expected {
            return Err(InvariantError::StaleHeight {
                id,
                stored: node.height,
                expected,
            });
        }
        Ok(())
    }
}
