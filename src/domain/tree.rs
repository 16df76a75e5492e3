//! Immutable route tree with a guaranteed root.

use std::collections::HashMap;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{RouteArena, RouteData, RouteNode};
use crate::domain::entities::{RouteId, RouteKind, RouteMatch};

/// Route tree constructed once from a static route configuration.
///
/// The root always exists and is the only parentless node. There is no
/// public mutation: navigation changes which node is active, never the shape.
#[derive(Debug)]
pub struct RouteTree {
    arena: RouteArena,
    root: Index,
    by_id: HashMap<RouteId, Index>,
}

impl Default for RouteTree {
    fn default() -> Self {
        Self::bare()
    }
}

impl RouteTree {
    /// A tree holding only the root.
    pub fn bare() -> Self {
        let mut arena = RouteArena::new();
        let root = arena.insert_node(
            RouteData {
                id: RouteId::root(),
                kind: RouteKind::Root,
            },
            None,
        );
        let mut by_id = HashMap::new();
        by_id.insert(RouteId::root(), root);
        Self { arena, root, by_id }
    }

    /// Used by the builder only, after validation.
    pub(crate) fn attach(&mut self, data: RouteData, parent: Index) -> Index {
        let id = data.id.clone();
        let idx = self.arena.insert_node(data, Some(parent));
        self.by_id.insert(id, idx);
        idx
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn arena(&self) -> &RouteArena {
        &self.arena
    }

    pub fn node(&self, idx: Index) -> Option<&RouteNode> {
        self.arena.get_node(idx)
    }

    pub fn find(&self, id: &RouteId) -> Option<Index> {
        self.by_id.get(id).copied()
    }

    /// Number of routes, root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// A tree is never empty: the root is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn depth(&self) -> usize {
        self.arena.depth()
    }

    pub fn leaves(&self) -> Vec<RouteId> {
        self.arena.leaf_nodes()
    }

    /// Active chain for `id`, root excluded.
    ///
    /// Returns `None` for unknown ids and for the root itself.
    #[instrument(level = "debug", skip(self))]
    pub fn chain_to(&self, id: &RouteId) -> Option<RouteMatch> {
        let idx = self.find(id)?;
        let chain = self
            .arena
            .ancestry(idx)
            .into_iter()
            .filter(|&i| i != self.root)
            .collect();
        RouteMatch::new(chain)
    }

    /// Ids along a match, outermost first.
    pub fn ids(&self, route_match: &RouteMatch) -> Vec<RouteId> {
        route_match
            .chain()
            .iter()
            .filter_map(|&idx| self.node(idx).map(|n| n.data.id.clone()))
            .collect()
    }

    pub fn to_tree_string(&self) -> Tree<String> {
        fn build(tree: &RouteTree, idx: Index) -> Tree<String> {
            match tree.node(idx) {
                Some(node) => Tree::new(node.data.to_string())
                    .with_leaves(node.children.iter().map(|&child| build(tree, child))),
                None => Tree::new(String::new()),
            }
        }
        build(self, self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_tree_has_only_root() {
        let tree = RouteTree::bare();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.find(&RouteId::root()), Some(tree.root()));
        assert!(tree.chain_to(&RouteId::root()).is_none());
    }

    #[test]
    fn test_chain_to_unknown_is_none() {
        let tree = RouteTree::bare();
        assert!(tree.chain_to(&RouteId::from("missing")).is_none());
    }
}
