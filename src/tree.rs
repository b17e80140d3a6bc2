//! The arena-backed binary tree shared by every balancing strategy.
//!
//! # Examples
//!
//! ```
//! use searchtree::Tree;
//!
//! let mut tree = Tree::avl();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! let one = tree.insert(1).id();
//! assert_eq!(tree.find(&1), Some(one));
//!
//! // Inserting an existing value hands back the node that already holds it.
//! assert!(!tree.insert(1).is_inserted());
//! assert_eq!(tree.len(), 1);
//!
//! // Erasing a value returns it.
//! assert_eq!(tree.erase(&1), Some(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::fmt;

use crate::bst::InsertResult;
use crate::node::{Node, NodeId};
use crate::traverse::{InOrder, LevelOrder, PostOrder, PreOrder};

/// The rebalancing discipline a [`Tree`] applies after every insert and erase.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Balance {
    /// A plain binary search tree. Its height depends entirely on insertion order.
    #[default]
    Unbalanced,
    /// Height-balanced: sibling subtree heights never differ by more than one.
    Avl,
    /// Color-balanced: every root-to-leaf path carries the same number of black nodes.
    RedBlack,
    /// Self-adjusting: every access moves the touched node to the root.
    Splay,
}

/// The parent-held slot that references a node: the tree's root slot or one of a parent's two
/// child slots. Every structural mutation rewrites through one of these so a parent and its
/// child can never disagree about each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Link {
    Root,
    Left(NodeId),
    Right(NodeId),
}

impl Link {
    pub(crate) fn parent(self) -> Option<NodeId> {
        match self {
            Link::Root => None,
            Link::Left(parent) | Link::Right(parent) => Some(parent),
        }
    }
}

/// An ordered binary tree. The [`Balance`] chosen at construction decides how the tree keeps
/// itself shallow.
///
/// Nodes are stored in a flat arena and address each other by [`NodeId`], so parent links are
/// plain indices and no rotation can leave a dangling pointer behind.
#[derive(Clone)]
pub struct Tree<T> {
    pub(crate) nodes: Vec<Option<Node<T>>>,
    // Vacant arena slots, reused before the arena grows.
    pub(crate) free: Vec<NodeId>,
    pub(crate) root: Option<NodeId>,
    pub(crate) size: usize,
    pub(crate) balance: Balance,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new(Balance::default())
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("balance", &self.balance)
            .field("len", &self.size)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree` with the given balancing discipline.
    pub fn new(balance: Balance) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            size: 0,
            balance,
        }
    }

    /// A new, empty, plain binary search tree.
    pub fn bst() -> Self {
        Self::new(Balance::Unbalanced)
    }

    /// A new, empty AVL tree.
    pub fn avl() -> Self {
        Self::new(Balance::Avl)
    }

    /// A new, empty red-black tree.
    pub fn red_black() -> Self {
        Self::new(Balance::RedBlack)
    }

    /// A new, empty splay tree.
    pub fn splay() -> Self {
        Self::new(Balance::Splay)
    }

    /// The balancing discipline of this tree.
    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The node with the given id, if it is currently part of this tree.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    /// The node with the given id.
    ///
    /// ## Panics
    ///
    /// When `id` does not name a node of this tree.
    pub fn node(&self, id: NodeId) -> &Node<T> {
        self.get(id)
            .unwrap_or_else(|| panic!("{id} is not a node of this tree"))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("{id} is not a node of this tree"))
    }

    /// The stored height of the root, `-1` for an empty tree.
    ///
    /// For plain, AVL and splay trees this is the physical height (a single node has height 0).
    /// Red-black trees store one less than the number of black nodes on any path from a node
    /// down to an absent child, so a lone black root also reports 0.
    pub fn height(&self) -> i32 {
        self.stature(self.root)
    }

    /// Height of a possibly absent subtree. Absent subtrees have height -1.
    pub(crate) fn stature(&self, id: Option<NodeId>) -> i32 {
        id.map_or(-1, |id| self.node(id).height)
    }

    /// Puts a new, unlinked node into the arena. The caller links it and accounts for it in
    /// `size`.
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        let node = Node::new(value);
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.index()] = Some(node);
                id
            }
            None => {
                let index = u32::try_from(self.nodes.len()).expect("Tree holds at most u32::MAX nodes");
                self.nodes.push(Some(node));
                NodeId(index)
            }
        }
    }

    /// Takes a node out of the arena. The caller must have unlinked it already.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
        let node = self
            .nodes
            .get_mut(id.index())
            .and_then(Option::take)
            .unwrap_or_else(|| panic!("{id} is not a node of this tree"));
        self.free.push(id);
        node
    }

    /// Whether `id` is the root of this tree.
    pub fn is_root(&self, id: NodeId) -> bool {
        self.node(id).parent.is_none()
    }

    /// Whether `id` is the left child of its parent.
    pub fn is_left_child(&self, id: NodeId) -> bool {
        match self.node(id).parent {
            Some(parent) => self.node(parent).left == Some(id),
            None => false,
        }
    }

    /// Whether `id` is the right child of its parent.
    pub fn is_right_child(&self, id: NodeId) -> bool {
        match self.node(id).parent {
            Some(parent) => self.node(parent).right == Some(id),
            None => false,
        }
    }

    /// The in-order next node: the left-most node of the right subtree if there is one,
    /// otherwise the nearest ancestor whose left subtree holds `id`. `None` for the maximum.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.node(id).right {
            return Some(self.leftmost(right));
        }
        let mut current = id;
        while self.is_right_child(current) {
            current = self.node(current).parent?;
        }
        self.node(current).parent
    }

    /// The node holding the smallest value.
    pub fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    /// The node holding the largest value.
    pub fn last(&self) -> Option<NodeId> {
        let mut current = self.root?;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        Some(current)
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// The number of nodes in the subtree rooted at `id`, `id` included.
    pub fn subtree_size(&self, id: NodeId) -> usize {
        self.pre_order_from(id).count()
    }

    /// Node ids in in-order (sorted) order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self, self.root)
    }

    /// Node ids in pre-order: a node, then its left subtree, then its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self, self.root)
    }

    /// Node ids in post-order: both subtrees before the node itself.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self, self.root)
    }

    /// Node ids level by level, left to right.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self, self.root)
    }

    /// Node ids of the subtree rooted at `id`, in in-order.
    pub fn in_order_from(&self, id: NodeId) -> InOrder<'_, T> {
        InOrder::new(self, Some(id))
    }

    /// Node ids of the subtree rooted at `id`, in pre-order.
    pub fn pre_order_from(&self, id: NodeId) -> PreOrder<'_, T> {
        PreOrder::new(self, Some(id))
    }

    /// Node ids of the subtree rooted at `id`, in post-order.
    pub fn post_order_from(&self, id: NodeId) -> PostOrder<'_, T> {
        PostOrder::new(self, Some(id))
    }

    /// Node ids of the subtree rooted at `id`, level by level.
    pub fn level_order_from(&self, id: NodeId) -> LevelOrder<'_, T> {
        LevelOrder::new(self, Some(id))
    }

    /// The stored values in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.in_order().map(move |id| self.node(id).value())
    }

    /// Resolves the slot that currently references `id`.
    ///
    /// ## Panics
    ///
    /// When `id` claims a parent that doesn't hold it, or claims to be the root but isn't.
    pub(crate) fn from_parent_to(&self, id: NodeId) -> Link {
        match self.node(id).parent {
            None => {
                assert_eq!(self.root, Some(id), "{id} has no parent but is not the root");
                Link::Root
            }
            Some(parent) => {
                let parent_node = self.node(parent);
                if parent_node.left == Some(id) {
                    Link::Left(parent)
                } else if parent_node.right == Some(id) {
                    Link::Right(parent)
                } else {
                    panic!("{id} is not a child of its parent {parent}")
                }
            }
        }
    }

    /// The node currently held by `link`.
    pub(crate) fn slot(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Root => self.root,
            Link::Left(parent) => self.node(parent).left,
            Link::Right(parent) => self.node(parent).right,
        }
    }

    /// Points `link` at `child`. Doesn't touch `child`'s parent link.
    pub(crate) fn replace_link(&mut self, link: Link, child: Option<NodeId>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.node_mut(parent).left = child,
            Link::Right(parent) => self.node_mut(parent).right = child,
        }
    }

    pub(crate) fn set_parent(&mut self, child: Option<NodeId>, parent: Option<NodeId>) {
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
    }

    pub(crate) fn set_children(&mut self, id: NodeId, left: Option<NodeId>, right: Option<NodeId>) {
        let node = self.node_mut(id);
        node.left = left;
        node.right = right;
        self.set_parent(left, Some(id));
        self.set_parent(right, Some(id));
    }

    /// Links a brand new node for `value` into the empty slot `link`.
    ///
    /// ## Panics
    ///
    /// When the slot is already occupied.
    pub(crate) fn link_new(&mut self, link: Link, value: T) -> NodeId {
        assert!(
            self.slot(link).is_none(),
            "cannot link a new node into occupied slot {link:?}"
        );
        let id = self.alloc(value);
        self.node_mut(id).parent = link.parent();
        self.replace_link(link, Some(id));
        self.size += 1;
        id
    }

    /// Recomputes the stored height of `id` from its children.
    pub(crate) fn update_height(&mut self, id: NodeId) {
        let node = self.node(id);
        let tallest = self.stature(node.left).max(self.stature(node.right));
        let height = match self.balance {
            Balance::RedBlack => tallest + i32::from(node.is_black()),
            Balance::Unbalanced | Balance::Avl | Balance::Splay => tallest + 1,
        };
        self.node_mut(id).height = height;
    }

    /// Recomputes heights from `id` up to the root.
    pub(crate) fn update_height_above(&mut self, mut id: Option<NodeId>) {
        while let Some(current) = id {
            self.update_height(current);
            id = self.node(current).parent;
        }
    }

    /// Rotate `id` to the right. This moves the left child up vertically and `id` down
    /// vertically. Only the demoted node's height is recomputed; the caller refreshes the
    /// promoted node and everything above it.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    Option<parent>            Option<parent>
    ///      /                         /
    ///     id                       left
    ///    /  \                      /  \
    ///  left  z     zig ->         x    id
    ///  / \                            /  \
    /// x   y                          y    z
    /// ```
    pub(crate) fn zig(&mut self, id: NodeId) -> NodeId {
        let left = self.node(id).left.expect("zig needs a left child");
        log::trace!("zig at {id}, promoting {left}");

        let link = self.from_parent_to(id);
        let parent = self.node(id).parent;
        let moved = self.node(left).right;

        self.node_mut(id).left = moved;
        self.set_parent(moved, Some(id));

        self.node_mut(left).right = Some(id);
        self.node_mut(id).parent = Some(left);

        self.node_mut(left).parent = parent;
        self.replace_link(link, Some(left));

        self.update_height(id);
        left
    }

    /// Rotate `id` to the left. The mirror image of [`Tree::zig`].
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    pub(crate) fn zag(&mut self, id: NodeId) -> NodeId {
        let right = self.node(id).right.expect("zag needs a right child");
        log::trace!("zag at {id}, promoting {right}");

        let link = self.from_parent_to(id);
        let parent = self.node(id).parent;
        let moved = self.node(right).left;

        self.node_mut(id).right = moved;
        self.set_parent(moved, Some(id));

        self.node_mut(right).left = Some(id);
        self.node_mut(id).parent = Some(right);

        self.node_mut(right).parent = parent;
        self.replace_link(link, Some(right));

        self.update_height(id);
        right
    }

    /// Rebuilds three nodes `a < b < c` and four subtrees into the canonical balanced shape and
    /// returns `b`. The caller links `b` into the slot the old local root occupied.
    ///
    /// ```text
    ///        b
    ///      /   \
    ///     a     c
    ///    / \   / \
    ///   T0 T1 T2 T3
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn connect34(
        &mut self,
        a: NodeId,
        b: NodeId,
        c: NodeId,
        t0: Option<NodeId>,
        t1: Option<NodeId>,
        t2: Option<NodeId>,
        t3: Option<NodeId>,
    ) -> NodeId {
        self.set_children(a, t0, t1);
        self.update_height(a);
        self.set_children(c, t2, t3);
        self.update_height(c);
        self.set_children(b, Some(a), Some(c));
        self.update_height(b);
        b
    }

    /// Restructures `v`, its parent and its grandparent with a single [`Tree::connect34`] and
    /// returns the new local subtree root. Covers all four double-rotation shapes.
    ///
    /// ## Panics
    ///
    /// When `v` has no grandparent.
    pub(crate) fn rotate_at(&mut self, v: NodeId) -> NodeId {
        let p = self.node(v).parent.expect("rotate_at needs a parent");
        let g = self.node(p).parent.expect("rotate_at needs a grandparent");

        let link = self.from_parent_to(g);
        let above = self.node(g).parent;
        let (vl, vr) = (self.node(v).left, self.node(v).right);
        let (pl, pr) = (self.node(p).left, self.node(p).right);
        let (gl, gr) = (self.node(g).left, self.node(g).right);

        let b = match (self.is_left_child(p), self.is_left_child(v)) {
            (true, true) => {
                log::trace!("zig-zig at {v}");
                self.connect34(v, p, g, vl, vr, pr, gr)
            }
            (true, false) => {
                log::trace!("zig-zag at {v}");
                self.connect34(p, v, g, pl, vl, vr, gr)
            }
            (false, false) => {
                log::trace!("zag-zag at {v}");
                self.connect34(g, p, v, gl, pl, vl, vr)
            }
            (false, true) => {
                log::trace!("zag-zig at {v}");
                self.connect34(g, v, p, gl, vl, vr, pr)
            }
        };

        self.node_mut(b).parent = above;
        self.replace_link(link, Some(b));
        b
    }

    /// Inserts `value` into the tree, rebalancing according to [`Tree::balance`]. Inserting a
    /// value that is already present changes nothing and hands back the existing node.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::{InsertResult, Tree};
    ///
    /// let mut tree = Tree::red_black();
    ///
    /// let InsertResult::Inserted(id) = tree.insert(5) else {
    ///     panic!("5 wasn't in the tree yet");
    /// };
    /// assert_eq!(tree.insert(5), InsertResult::AlreadyPresent(id));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> InsertResult
    where
        T: Ord,
    {
        let result = match self.balance {
            Balance::Unbalanced => self.bst_insert(value),
            Balance::Avl => self.avl_insert(value),
            Balance::RedBlack => self.red_black_insert(value),
            Balance::Splay => self.splay_insert(value),
        };
        if let InsertResult::Inserted(id) = result {
            log::debug!("inserted {id} into {:?} tree, {} nodes", self.balance, self.size);
        }
        result
    }

    /// Erases the node holding `value` and returns the value. If the tree does not contain it,
    /// nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::Tree;
    ///
    /// let mut tree = Tree::splay();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.erase(&1), Some(1));
    /// assert_eq!(tree.erase(&1), None);
    /// ```
    pub fn erase(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let erased = match self.balance {
            Balance::Unbalanced => self.bst_erase(value),
            Balance::Avl => self.avl_erase(value),
            Balance::RedBlack => self.red_black_erase(value),
            Balance::Splay => self.splay_erase(value),
        };
        if erased.is_some() {
            log::debug!("erased from {:?} tree, {} nodes left", self.balance, self.size);
        }
        erased
    }

    /// Looks `value` up. Splay trees also move the last node touched by the search to the root,
    /// which is why this takes `&mut self`; see [`Tree::find`] for a lookup that never
    /// restructures.
    pub fn search(&mut self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        match self.balance {
            Balance::Splay => self.splay_search(value),
            Balance::Unbalanced | Balance::Avl | Balance::RedBlack => self.find(value),
        }
    }

    /// Creates the root of an empty tree.
    ///
    /// ## Panics
    ///
    /// When the tree already has a root.
    pub fn insert_as_root(&mut self, value: T) -> NodeId {
        assert!(self.root.is_none(), "insert_as_root on a non-empty tree");
        let id = self.link_new(Link::Root, value);
        self.update_height(id);
        id
    }

    /// Creates a new left child of `parent`. This is structural editing: it does not look at
    /// ordering or balance.
    ///
    /// ## Panics
    ///
    /// When `parent` already has a left child.
    pub fn insert_as_left_child(&mut self, parent: NodeId, value: T) -> NodeId {
        let id = self.link_new(Link::Left(parent), value);
        self.update_height_above(Some(id));
        id
    }

    /// Creates a new right child of `parent`. This is structural editing: it does not look at
    /// ordering or balance.
    ///
    /// ## Panics
    ///
    /// When `parent` already has a right child.
    pub fn insert_as_right_child(&mut self, parent: NodeId, value: T) -> NodeId {
        let id = self.link_new(Link::Right(parent), value);
        self.update_height_above(Some(id));
        id
    }

    /// Moves every node of `subtree` under `parent`'s empty left slot and returns the new id of
    /// the grafted root, or `None` when `subtree` is empty.
    ///
    /// ## Panics
    ///
    /// When `parent` already has a left child.
    pub fn attach_as_left_child(&mut self, parent: NodeId, subtree: Tree<T>) -> Option<NodeId> {
        self.attach(Link::Left(parent), subtree)
    }

    /// Moves every node of `subtree` under `parent`'s empty right slot and returns the new id of
    /// the grafted root, or `None` when `subtree` is empty.
    ///
    /// ## Panics
    ///
    /// When `parent` already has a right child.
    pub fn attach_as_right_child(&mut self, parent: NodeId, subtree: Tree<T>) -> Option<NodeId> {
        self.attach(Link::Right(parent), subtree)
    }

    fn attach(&mut self, link: Link, mut subtree: Tree<T>) -> Option<NodeId> {
        assert!(
            self.slot(link).is_none(),
            "cannot attach a subtree into occupied slot {link:?}"
        );
        let root = subtree.root.take()?;
        let (grafted, moved) = self.transplant(&mut subtree, root, link);
        self.size += moved;
        log::debug!("attached {moved} nodes at {grafted}");
        Some(grafted)
    }

    /// Unlinks the subtree rooted at `id` and releases all of its nodes. Returns how many nodes
    /// were removed.
    pub fn remove_subtree(&mut self, id: NodeId) -> usize {
        let link = self.from_parent_to(id);
        self.replace_link(link, None);
        let removed = self.release_subtree(id);
        self.size -= removed;
        self.update_height_above(link.parent());
        log::debug!("removed {removed} nodes below {link:?}");
        removed
    }

    /// Detaches the subtree rooted at `id` into a new tree with the same balancing discipline.
    /// The nodes get new ids in the returned tree.
    pub fn secede(&mut self, id: NodeId) -> Tree<T> {
        let link = self.from_parent_to(id);
        self.replace_link(link, None);
        self.update_height_above(link.parent());

        let mut seceded = Tree::new(self.balance);
        let (_, moved) = seceded.transplant(self, id, Link::Root);
        self.size -= moved;
        seceded.size = moved;
        log::debug!("seceded {moved} nodes from below {link:?}");
        seceded
    }

    /// Releases every node, leaves first.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            self.release_subtree(root);
        }
        self.nodes.clear();
        self.free.clear();
        self.size = 0;
    }

    /// Releases the already unlinked subtree rooted at `id` in post-order.
    fn release_subtree(&mut self, id: NodeId) -> usize {
        let doomed: Vec<NodeId> = PostOrder::new(self, Some(id)).collect();
        for &id in &doomed {
            self.release(id);
        }
        doomed.len()
    }

    /// Moves the subtree rooted at `from` out of `source` and into this tree's empty slot
    /// `link`, preserving shape and colors. Heights are recomputed for this tree's discipline.
    /// The caller has already unlinked `from` in `source` and fixes up both sizes.
    fn transplant(&mut self, source: &mut Tree<T>, from: NodeId, link: Link) -> (NodeId, usize) {
        let mut pending = vec![(from, link)];
        let mut moved = Vec::new();
        while let Some((old, link)) = pending.pop() {
            let Node {
                value,
                left,
                right,
                color,
                ..
            } = source.release(old);
            let id = self.alloc(value);
            self.node_mut(id).color = color;
            self.node_mut(id).parent = link.parent();
            self.replace_link(link, Some(id));
            moved.push(id);

            if let Some(right) = right {
                pending.push((right, Link::Right(id)));
            }
            if let Some(left) = left {
                pending.push((left, Link::Left(id)));
            }
        }

        // `moved` is in pre-order so walking it backwards visits children before parents.
        for &id in moved.iter().rev() {
            self.update_height(id);
        }
        self.update_height_above(link.parent());
        (moved[0], moved.len())
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    const BALANCES: [Balance; 4] = [
        Balance::Unbalanced,
        Balance::Avl,
        Balance::RedBlack,
        Balance::Splay,
    ];

    /// Applies a set of operations to a tree and a set.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same set of values in both, and every
    /// invariant of the tree held after every step.
    fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
    where
        T: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(value) => {
                    if tree.insert(value.clone()).is_inserted() != set.insert(value.clone()) {
                        return false;
                    }
                }
                Op::Remove(value) => {
                    if tree.erase(value).is_some() != set.remove(value) {
                        return false;
                    }
                }
                Op::Search(value) => {
                    if tree.search(value).is_some() != set.contains(value) {
                        return false;
                    }
                }
            }
            if tree.check().is_err() || tree.len() != set.len() {
                return false;
            }
        }
        true
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            BALANCES.iter().all(|&balance| {
                let mut tree = Tree::new(balance);
                let mut set = BTreeSet::new();

                do_ops(&ops, &mut tree, &mut set)
                    && tree.iter().eq(set.iter())
            })
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            BALANCES.iter().all(|&balance| {
                let mut tree = Tree::new(balance);
                for x in &xs {
                    tree.insert(*x);
                }

                xs.iter().all(|x| tree.contains(x))
            })
        }
    }

    quickcheck::quickcheck! {
        fn clear_then_reuse(xs: Vec<i8>, ys: Vec<i8>) -> bool {
            let mut tree = Tree::avl();
            for x in &xs {
                tree.insert(*x);
            }
            tree.clear();
            for y in &ys {
                tree.insert(*y);
            }

            let expected: BTreeSet<_> = ys.iter().collect();
            tree.check().is_ok() && tree.iter().eq(expected.into_iter())
        }
    }
}
