//! The tree vertex. Nodes live in a [`Tree`][crate::Tree]'s arena and refer to each other by
//! [`NodeId`] so a parent link is a plain index instead of a pointer.

use std::fmt;

/// A stable handle to a node inside one [`Tree`][crate::Tree].
///
/// A node keeps its id for as long as it is in the tree. Rotations and successor swaps move
/// nodes around but never change which id holds which value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The color tag of a node. Only meaningful for red-black trees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// New nodes start out red.
    Red,
    /// Absent children count as black.
    Black,
}

/// A node of a binary tree.
#[derive(Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,

    /// Physical height (a leaf is 0) for plain, AVL and splay trees. Red-black trees store the
    /// black-height here instead.
    pub(crate) height: i32,
    pub(crate) color: Color,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            left: None,
            right: None,
            height: 0,
            color: Color::Red,
        }
    }

    /// The stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The left child.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The right child.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The stored height: the physical height of the subtree (a leaf is 0) for plain, AVL and
    /// splay trees, and its black-height for red-black trees. Absent children count as -1.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The color tag.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether a left child is present.
    pub fn has_left_child(&self) -> bool {
        self.left.is_some()
    }

    /// Whether a right child is present.
    pub fn has_right_child(&self) -> bool {
        self.right.is_some()
    }

    /// Whether at least one child is present.
    pub fn has_child(&self) -> bool {
        self.has_left_child() || self.has_right_child()
    }

    /// Whether both children are present.
    pub fn has_both_children(&self) -> bool {
        self.has_left_child() && self.has_right_child()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        !self.has_child()
    }

    pub(crate) fn is_black(&self) -> bool {
        self.color == Color::Black
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .field("color", &self.color)
            .field("parent", &self.parent)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
