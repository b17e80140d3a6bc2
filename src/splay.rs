//! Splay trees: every access rotates the touched node all the way to the root.

use std::cmp::Ordering;

use crate::bst::InsertResult;
use crate::node::{Node, NodeId};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Rotates `v` up to the root two levels at a time, finishing with a single rotation when
    /// only a parent is left. Heights stay current throughout.
    pub(crate) fn splay_to_root(&mut self, v: NodeId) {
        loop {
            let Some(p) = self.node(v).parent else {
                break;
            };
            let v_is_left = self.is_left_child(v);
            let grandparent = self.node(p).parent;
            match grandparent {
                Some(g) if v_is_left == self.is_left_child(p) => {
                    if v_is_left {
                        log::trace!("splay zig-zig {v}");
                        self.zig(g);
                        self.zig(p);
                    } else {
                        log::trace!("splay zag-zag {v}");
                        self.zag(g);
                        self.zag(p);
                    }
                    self.update_height(v);
                }
                Some(_) => {
                    log::trace!("splay bent step {v}");
                    self.rotate_at(v);
                }
                None => {
                    if v_is_left {
                        self.zig(p);
                    } else {
                        self.zag(p);
                    }
                    self.update_height(v);
                }
            }
        }
        debug_assert_eq!(self.root, Some(v));
    }

    /// Searches for `value` and splays the node found, or the last node visited on a miss.
    pub(crate) fn splay_search(&mut self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let search = self.probe(value);
        if let Some(target) = search.found.or(search.anchor) {
            self.splay_to_root(target);
        }
        search.found
    }

    pub(crate) fn splay_insert(&mut self, value: T) -> InsertResult
    where
        T: Ord,
    {
        if self.root.is_none() {
            return InsertResult::Inserted(self.insert_as_root(value));
        }

        self.splay_search(&value);
        let landed = self.root.expect("splaying a non-empty tree leaves a root");

        // `landed` is now the in-order neighbour of `value`, so one of its subtrees lies wholly
        // on the far side of `value` and moves over to the new root.
        let (left, right) = match value.cmp(&self.node(landed).value) {
            Ordering::Equal => return InsertResult::AlreadyPresent(landed),
            Ordering::Greater => {
                let right = self.node_mut(landed).right.take();
                (Some(landed), right)
            }
            Ordering::Less => {
                let left = self.node_mut(landed).left.take();
                (left, Some(landed))
            }
        };

        let id = self.alloc(value);
        self.set_children(id, left, right);
        self.root = Some(id);
        self.size += 1;
        self.update_height(landed);
        self.update_height(id);
        InsertResult::Inserted(id)
    }

    pub(crate) fn splay_erase(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let found = self.splay_search(value)?;
        let Node {
            value: erased,
            left,
            right,
            ..
        } = self.release(found);
        self.size -= 1;
        self.set_parent(left, None);
        self.set_parent(right, None);

        let root = match (left, right) {
            (Some(left), Some(right)) => {
                // Bring the right subtree's minimum to its top; it has no left child there, so
                // the old left subtree fits underneath.
                self.root = Some(right);
                let min = self.leftmost(right);
                self.splay_to_root(min);
                self.node_mut(min).left = Some(left);
                self.node_mut(left).parent = Some(min);
                self.update_height(min);
                Some(min)
            }
            (left, right) => left.or(right),
        };
        self.root = root;
        Some(erased)
    }
}
