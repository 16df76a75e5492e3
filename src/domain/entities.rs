//! Domain entities: core data structures

use std::fmt;

use generational_arena::Index;
use serde::{Deserialize, Serialize};

/// Id of the distinguished root route. Never valid in a route file.
pub const ROOT_ID: &str = "__root__";

/// Stable, human-readable identifier of a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the root route.
    pub fn root() -> Self {
        Self(ROOT_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_ID
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RouteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// What a route renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// The parentless entry of the tree.
    Root,
    /// Shared structure around exactly one outlet, optionally wrapped in `tag`.
    Layout { tag: Option<String> },
    /// Terminal content.
    Page { content: String },
}

impl RouteKind {
    /// Whether this kind may own child routes (i.e. exposes an outlet).
    pub fn has_outlet(&self) -> bool {
        !matches!(self, RouteKind::Page { .. })
    }
}

/// One route as declared in the static route configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    pub id: RouteId,
    /// Parent route; `None` attaches the route directly below the root.
    pub parent: Option<RouteId>,
    pub kind: RouteKind,
}

impl RouteDefinition {
    pub fn page(id: impl Into<RouteId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            kind: RouteKind::Page {
                content: content.into(),
            },
        }
    }

    pub fn layout(id: impl Into<RouteId>, tag: Option<&str>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            kind: RouteKind::Layout {
                tag: tag.map(str::to_string),
            },
        }
    }

    /// Attach this definition below `parent`.
    pub fn under(mut self, parent: impl Into<RouteId>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// The active nested chain below the root, outermost first and leaf last.
///
/// "No active route" is expressed as `Option::<RouteMatch>::None`,
/// a match always holds at least one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    chain: Vec<Index>,
}

impl RouteMatch {
    /// Returns `None` for an empty chain. Resolvers obtain matches through
    /// [`RouteTree::chain_to`](crate::domain::RouteTree::chain_to).
    pub(crate) fn new(chain: Vec<Index>) -> Option<Self> {
        if chain.is_empty() {
            None
        } else {
            Some(Self { chain })
        }
    }

    pub fn chain(&self) -> &[Index] {
        &self.chain
    }

    pub fn leaf(&self) -> Index {
        // chain is non-empty by construction
        self.chain[self.chain.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generational_arena::Arena;

    #[test]
    fn test_route_match_rejects_empty_chain() {
        assert!(RouteMatch::new(vec![]).is_none());
    }

    #[test]
    fn test_route_match_leaf_is_last() {
        let mut arena = Arena::new();
        let a = arena.insert(());
        let b = arena.insert(());
        let m = RouteMatch::new(vec![a, b]).unwrap();
        assert_eq!(m.leaf(), b);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_root_id_is_reserved() {
        assert!(RouteId::root().is_root());
        assert!(!RouteId::from("home").is_root());
    }
}
