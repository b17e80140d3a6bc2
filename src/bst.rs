//! Search, insertion and removal shared by every balancing discipline. The balanced variants
//! reuse these and then repair their own invariant starting from the point that changed.

use std::cmp::Ordering;

use crate::node::{Color, NodeId};
use crate::tree::{Link, Tree};

/// The outcome of a plain binary search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Search {
    /// The node holding the value, if any.
    pub found: Option<NodeId>,
    /// The parent of `found` after a hit. After a miss, the last node visited: the node a new
    /// leaf for the value would hang from. `None` when the tree is empty or the hit is the
    /// root.
    pub anchor: Option<NodeId>,
}

/// The outcome of [`Tree::insert`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertResult {
    /// A new node was created for the value.
    Inserted(NodeId),
    /// The value was already present. Nothing changed.
    AlreadyPresent(NodeId),
}

impl InsertResult {
    /// The node holding the value, whether it was just created or not.
    pub fn id(self) -> NodeId {
        match self {
            InsertResult::Inserted(id) | InsertResult::AlreadyPresent(id) => id,
        }
    }

    /// Whether the insert created a node.
    pub fn is_inserted(self) -> bool {
        matches!(self, InsertResult::Inserted(_))
    }
}

/// What [`Tree::remove_at`] took out of the tree.
pub(crate) struct Removal<T> {
    pub(crate) value: T,
    /// The color of the position that disappeared.
    pub(crate) color: Color,
    /// The slot the removed node occupied. Its parent is where rebalancing starts.
    pub(crate) link: Link,
    /// The child spliced into `link`, if any.
    pub(crate) replacement: Option<NodeId>,
}

impl<T> Tree<T> {
    /// Searches for `value` without restructuring anything, reporting the anchor alongside the
    /// result so a miss can be turned into an insertion point.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::Tree;
    ///
    /// let mut tree = Tree::bst();
    /// let two = tree.insert(2).id();
    /// let three = tree.insert(3).id();
    ///
    /// let hit = tree.probe(&3);
    /// assert_eq!(hit.found, Some(three));
    /// assert_eq!(hit.anchor, Some(two));
    ///
    /// // 4 would become the right child of 3.
    /// let miss = tree.probe(&4);
    /// assert_eq!(miss.found, None);
    /// assert_eq!(miss.anchor, Some(three));
    /// ```
    pub fn probe(&self, value: &T) -> Search
    where
        T: Ord,
    {
        self.search_in(self.root, value)
    }

    /// The node holding `value`, if any. Never restructures the tree.
    pub fn find(&self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        self.probe(value).found
    }

    /// Whether the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    pub(crate) fn search_in(&self, start: Option<NodeId>, value: &T) -> Search
    where
        T: Ord,
    {
        let mut anchor = None;
        let mut current = start;
        while let Some(id) = current {
            let node = self.node(id);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    return Search {
                        found: Some(id),
                        anchor: node.parent,
                    }
                }
            };
            anchor = Some(id);
        }
        Search {
            found: None,
            anchor,
        }
    }

    /// Hangs a new leaf for `value` from the anchor of a failed search. Heights are left for the
    /// caller, who knows how its discipline measures them.
    pub(crate) fn insert_leaf(&mut self, value: T) -> InsertResult
    where
        T: Ord,
    {
        let search = self.probe(&value);
        if let Some(found) = search.found {
            return InsertResult::AlreadyPresent(found);
        }
        let link = match search.anchor {
            None => Link::Root,
            Some(anchor) if value < self.node(anchor).value => Link::Left(anchor),
            Some(anchor) => Link::Right(anchor),
        };
        InsertResult::Inserted(self.link_new(link, value))
    }

    pub(crate) fn bst_insert(&mut self, value: T) -> InsertResult
    where
        T: Ord,
    {
        let result = self.insert_leaf(value);
        if let InsertResult::Inserted(id) = result {
            self.update_height_above(Some(id));
        }
        result
    }

    pub(crate) fn bst_erase(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let found = self.find(value)?;
        let removal = self.remove_at(found);
        self.update_height_above(removal.link.parent());
        Some(removal.value)
    }

    /// Unlinks `x` and releases it:
    ///
    /// 1. Without a right child, its left child (possibly absent) takes its place.
    /// 2. Without a left child, its right child takes its place.
    /// 3. With both, `x` first trades tree positions with its in-order successor and is then
    ///    removed from there, where it has no left child.
    ///
    /// Heights are not touched; the caller repairs from `link`'s parent upward.
    pub(crate) fn remove_at(&mut self, x: NodeId) -> Removal<T> {
        if self.node(x).has_both_children() {
            self.swap_with_successor(x);
        }

        let node = self.node(x);
        let replacement = match node.right {
            None => node.left,
            Some(_) => {
                debug_assert!(node.left.is_none(), "{x} still has two children");
                node.right
            }
        };

        let link = self.from_parent_to(x);
        self.replace_link(link, replacement);
        self.set_parent(replacement, link.parent());

        let node = self.release(x);
        self.size -= 1;
        log::trace!("removed {x} from {link:?}");

        Removal {
            value: node.value,
            color: node.color,
            link,
            replacement,
        }
    }

    /// Exchanges the tree positions of `x`, which has two children, and its in-order successor
    /// `y`. Links are swapped rather than values so ids keep naming the same values. Height and
    /// color describe the position, so they move with it.
    ///
    /// Afterwards `x` sits where `y` was and has no left child.
    pub(crate) fn swap_with_successor(&mut self, x: NodeId) -> NodeId {
        let x_right = self.node(x).right.expect("swap_with_successor needs a right child");
        let y = self.leftmost(x_right);
        log::trace!("swapping {x} with its successor {y}");

        let x_link = self.from_parent_to(x);
        let x_parent = self.node(x).parent;
        let x_left = self.node(x).left;
        let y_parent = self.node(y).parent;
        let y_right = self.node(y).right;

        self.replace_link(x_link, Some(y));
        self.node_mut(y).parent = x_parent;
        self.node_mut(y).left = x_left;
        self.set_parent(x_left, Some(y));

        if x_right == y {
            self.node_mut(y).right = Some(x);
            self.node_mut(x).parent = Some(y);
        } else {
            let y_parent = y_parent.expect("a deeper successor has a parent");
            self.node_mut(y).right = Some(x_right);
            self.node_mut(x_right).parent = Some(y);
            self.node_mut(y_parent).left = Some(x);
            self.node_mut(x).parent = Some(y_parent);
        }

        self.node_mut(x).left = None;
        self.node_mut(x).right = y_right;
        self.set_parent(y_right, Some(x));

        let (x_height, x_color) = (self.node(x).height, self.node(x).color);
        let (y_height, y_color) = (self.node(y).height, self.node(y).color);
        let x_node = self.node_mut(x);
        x_node.height = y_height;
        x_node.color = y_color;
        let y_node = self.node_mut(y);
        y_node.height = x_height;
        y_node.color = x_color;

        y
    }
}
