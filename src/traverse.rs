//! Iterative traversals. Each iterator yields [`NodeId`]s and keeps its own explicit stack or
//! queue, so degenerate (list-shaped) trees can't overflow the call stack.

use std::collections::VecDeque;

use crate::node::NodeId;
use crate::tree::Tree;

/// In-order traversal. Created by [`Tree::in_order`].
pub struct InOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: Option<NodeId>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            current: start,
        }
    }
}

impl<T> Iterator for InOrder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.tree.node(id).left();
        }
        let id = self.stack.pop()?;
        self.current = self.tree.node(id).right();
        Some(id)
    }
}

/// Pre-order traversal. Created by [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: Option<NodeId>) -> Self {
        Self {
            tree,
            stack: start.into_iter().collect(),
        }
    }
}

impl<T> Iterator for PreOrder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(id)
    }
}

/// Post-order traversal. Created by [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    tree: &'a Tree<T>,
    // `true` once the node's children have been pushed above it.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: Option<NodeId>) -> Self {
        Self {
            tree,
            stack: start.map(|id| (id, false)).into_iter().collect(),
        }
    }
}

impl<T> Iterator for PostOrder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            if expanded {
                return Some(id);
            }
            let node = self.tree.node(id);
            self.stack.push((id, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

/// Breadth-first traversal. Created by [`Tree::level_order`].
pub struct LevelOrder<'a, T> {
    tree: &'a Tree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: Option<NodeId>) -> Self {
        Self {
            tree,
            queue: start.into_iter().collect(),
        }
    }
}

impl<T> Iterator for LevelOrder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.queue.pop_front()?;
        let node = self.tree.node(id);
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(id)
    }
}
