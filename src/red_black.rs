//! Red-black rebalancing.
//!
//! Stored heights are black-heights: a node stores the larger stature of its children, plus one
//! when it is black. Absent children have stature -1 and count as black.

use crate::bst::InsertResult;
use crate::node::{Color, NodeId};
use crate::tree::{Link, Tree};

impl<T> Tree<T> {
    /// Whether a possibly absent node is black. Absent nodes are.
    pub(crate) fn is_black_at(&self, id: Option<NodeId>) -> bool {
        id.is_none_or(|id| self.node(id).is_black())
    }

    fn paint(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    fn child(&self, id: NodeId, left: bool) -> Option<NodeId> {
        let node = self.node(id);
        if left {
            node.left
        } else {
            node.right
        }
    }

    /// Paints a freshly restructured local root `b` and its two children, then refreshes their
    /// heights bottom-up.
    fn paint_triple(&mut self, b: NodeId, root: Color, children: Color) {
        let a = self.node(b).left.expect("a restructured subtree has a left child");
        let c = self.node(b).right.expect("a restructured subtree has a right child");
        self.paint(a, children);
        self.paint(c, children);
        self.paint(b, root);
        self.update_height(a);
        self.update_height(c);
        self.update_height(b);
    }

    pub(crate) fn red_black_insert(&mut self, value: T) -> InsertResult
    where
        T: Ord,
    {
        let result = self.insert_leaf(value);
        if let InsertResult::Inserted(id) = result {
            self.update_height(id);
            self.solve_double_red(id);
        }

        if cfg!(debug_assertions) {
            assert!(self.is_black_at(self.root));
        }
        result
    }

    /// Repairs a red `v` that may hang from a red parent.
    fn solve_double_red(&mut self, mut v: NodeId) {
        loop {
            let Some(p) = self.node(v).parent else {
                if !self.node(v).is_black() {
                    log::trace!("double red reached the root {v}, painting it black");
                    self.paint(v, Color::Black);
                    self.update_height(v);
                }
                return;
            };
            if self.node(p).is_black() {
                return;
            }

            let g = self.node(p).parent.expect("a red node is never the root");
            let uncle = if self.is_left_child(p) {
                self.node(g).right
            } else {
                self.node(g).left
            };

            if self.is_black_at(uncle) {
                log::trace!("double red at {v} with black uncle, restructuring");
                let b = self.rotate_at(v);
                self.paint_triple(b, Color::Black, Color::Red);
                return;
            }

            let uncle = uncle.expect("a red uncle exists");
            log::trace!("double red at {v} with red uncle {uncle}, recoloring");
            self.paint(p, Color::Black);
            self.paint(uncle, Color::Black);
            self.paint(g, Color::Red);
            self.update_height(p);
            self.update_height(uncle);
            self.update_height(g);

            // `g` is red now and may clash with its own parent.
            v = g;
        }
    }

    pub(crate) fn red_black_erase(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let found = self.find(value)?;
        let removal = self.remove_at(found);

        if removal.color == Color::Black {
            match (removal.replacement, removal.link) {
                (Some(replacement), _) if !self.node(replacement).is_black() => {
                    self.paint(replacement, Color::Black);
                }
                (_, Link::Left(parent)) => self.solve_double_black(parent, true),
                (_, Link::Right(parent)) => self.solve_double_black(parent, false),
                (_, Link::Root) => {}
            }
        }

        // Every position whose black-height may have changed lies on this path.
        self.update_height_above(removal.replacement.or(removal.link.parent()));

        if cfg!(debug_assertions) {
            assert!(self.is_black_at(self.root));
        }
        Some(removal.value)
    }

    /// Repairs a black-height deficit in `p`'s left (`left == true`) or right subtree. The
    /// deficient child itself may be absent.
    fn solve_double_black(&mut self, mut p: NodeId, mut left: bool) {
        loop {
            let s = self
                .child(p, !left)
                .expect("a subtree short on black nodes always has a sibling");

            if !self.node(s).is_black() {
                // Turn the red sibling into the parent so the deficient side gets a black
                // sibling, then look again.
                log::trace!("double black under {p} with red sibling {s}, rotating");
                self.paint(s, Color::Black);
                self.paint(p, Color::Red);
                if left {
                    self.zag(p);
                } else {
                    self.zig(p);
                }
                self.update_height(s);
                continue;
            }

            let far = self.child(s, !left);
            let near = self.child(s, left);
            let nephew = if !self.is_black_at(far) {
                far
            } else if !self.is_black_at(near) {
                near
            } else {
                None
            };

            if let Some(nephew) = nephew {
                log::trace!("double black under {p} with red nephew {nephew}, restructuring");
                let color = self.node(p).color;
                let b = self.rotate_at(nephew);
                self.paint_triple(b, color, Color::Black);
                return;
            }

            self.paint(s, Color::Red);
            self.update_height(s);
            if !self.node(p).is_black() {
                log::trace!("double black under red {p}, recoloring");
                self.paint(p, Color::Black);
                self.update_height(p);
                return;
            }

            // Both sides of `p` are one black short now: push the deficit up a level.
            log::trace!("double black under black {p}, moving up");
            self.update_height(p);
            let Some(g) = self.node(p).parent else {
                return;
            };
            left = self.node(g).left == Some(p);
            p = g;
        }
    }
}
