//! Resolver seam: decides which nested route is active.
//!
//! Matching URLs to routes is not done here. A resolver is read-only input
//! to a render pass and is asked again on every pass.

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{RouteId, RouteMatch, RouteTree};

/// Source of the currently active nested route.
pub trait RouteResolver {
    /// `Ok(None)` means no route is active (in-flight or unmatched), which
    /// is not an error. `Err` is a resolver failure and propagates.
    fn resolve(&self, tree: &RouteTree) -> ApplicationResult<Option<RouteMatch>>;
}

/// Resolver naming the active leaf route by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafResolver {
    leaf: Option<RouteId>,
}

impl LeafResolver {
    pub fn new(leaf: Option<RouteId>) -> Self {
        Self { leaf }
    }

    pub fn leaf(id: impl Into<RouteId>) -> Self {
        Self {
            leaf: Some(id.into()),
        }
    }

    /// No active route.
    pub fn pending() -> Self {
        Self { leaf: None }
    }
}

impl RouteResolver for LeafResolver {
    fn resolve(&self, tree: &RouteTree) -> ApplicationResult<Option<RouteMatch>> {
        let Some(leaf) = &self.leaf else {
            debug!("resolve: no active route");
            return Ok(None);
        };
        if leaf.is_root() {
            return Ok(None);
        }
        let route_match = tree
            .chain_to(leaf)
            .ok_or_else(|| ApplicationError::UnknownRoute(leaf.clone()))?;
        debug!("resolve: {} -> {} routes", leaf, route_match.len());
        Ok(Some(route_match))
    }
}

impl<R: RouteResolver + ?Sized> RouteResolver for &R {
    fn resolve(&self, tree: &RouteTree) -> ApplicationResult<Option<RouteMatch>> {
        (**self).resolve(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteDefinition, RouteTreeBuilder};

    #[test]
    fn test_pending_resolves_to_none() {
        let tree = RouteTree::bare();
        assert!(LeafResolver::pending().resolve(&tree).unwrap().is_none());
    }

    #[test]
    fn test_unknown_leaf_is_resolver_failure() {
        let tree = RouteTree::bare();
        let result = LeafResolver::leaf("nope").resolve(&tree);
        assert!(matches!(result, Err(ApplicationError::UnknownRoute(_))));
    }

    #[test]
    fn test_known_leaf_resolves_chain() {
        let tree = RouteTreeBuilder::new()
            .route(RouteDefinition::layout("app", None))
            .route(RouteDefinition::page("home", "Home").under("app"))
            .build()
            .unwrap();
        let m = LeafResolver::leaf("home").resolve(&tree).unwrap().unwrap();
        assert_eq!(tree.ids(&m), vec![RouteId::from("app"), RouteId::from("home")]);
    }
}
