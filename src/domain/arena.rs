use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::domain::entities::{RouteId, RouteKind};

/// Data payload for route nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteData {
    pub id: RouteId,
    pub kind: RouteKind,
}

impl fmt::Display for RouteData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RouteKind::Root => write!(f, "{}", self.id),
            RouteKind::Layout { tag: Some(tag) } => write!(f, "{} [layout <{}>]", self.id, tag),
            RouteKind::Layout { tag: None } => write!(f, "{} [layout]", self.id),
            RouteKind::Page { .. } => write!(f, "{} [page]", self.id),
        }
    }
}

/// Route node in the arena-based hierarchy.
#[derive(Debug)]
pub struct RouteNode {
    pub data: RouteData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in declaration order
    pub children: Vec<Index>,
}

/// Arena storage for one route tree.
///
/// Uses a generational arena for memory-safe node references and O(1) lookups.
#[derive(Debug)]
pub struct RouteArena {
    arena: Arena<RouteNode>,
    root: Option<Index>,
}

impl Default for RouteArena {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: RouteData, parent: Option<Index>) -> Index {
        let node = RouteNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&RouteNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn iter(&self) -> RouteIterator<'_> {
        RouteIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Ids of all routes without children, left to right.
    ///
    /// A root-only tree reports the root itself.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<RouteId> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, node_idx: Index, leaves: &mut Vec<RouteId>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.children.is_empty() {
                leaves.push(node.data.id.clone());
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }

    /// Root-first chain of indices ending at `idx`.
    #[instrument(level = "trace", skip(self))]
    pub fn ancestry(&self, idx: Index) -> Vec<Index> {
        let mut chain = Vec::new();
        let mut current = Some(idx);
        while let Some(current_idx) = current {
            match self.get_node(current_idx) {
                Some(node) => {
                    chain.push(current_idx);
                    current = node.parent;
                }
                None => break,
            }
        }
        chain.reverse();
        chain
    }
}

/// Pre-order traversal, children left to right.
pub struct RouteIterator<'a> {
    arena: &'a RouteArena,
    stack: Vec<Index>,
}

impl<'a> RouteIterator<'a> {
    fn new(arena: &'a RouteArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for RouteIterator<'a> {
    type Item = (Index, &'a RouteNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(id: &str, kind: RouteKind) -> RouteData {
        RouteData {
            id: RouteId::from(id),
            kind,
        }
    }

    fn sample() -> (RouteArena, Index, Index, Index) {
        let mut arena = RouteArena::new();
        let root = arena.insert_node(data("__root__", RouteKind::Root), None);
        let app = arena.insert_node(data("app", RouteKind::Layout { tag: None }), Some(root));
        let home = arena.insert_node(
            data(
                "home",
                RouteKind::Page {
                    content: "Home".into(),
                },
            ),
            Some(app),
        );
        (arena, root, app, home)
    }

    #[test]
    fn test_ancestry_is_root_first() {
        let (arena, root, app, home) = sample();
        assert_eq!(arena.ancestry(home), vec![root, app, home]);
    }

    #[test]
    fn test_iter_is_preorder() {
        let (arena, root, app, home) = sample();
        let pre: Vec<_> = arena.iter().map(|(idx, _)| idx).collect();
        assert_eq!(pre, vec![root, app, home]);
    }

    #[test]
    fn test_depth_and_leaves() {
        let (arena, ..) = sample();
        assert_eq!(arena.depth(), 3);
        assert_eq!(arena.leaf_nodes(), vec![RouteId::from("home")]);
    }
}
