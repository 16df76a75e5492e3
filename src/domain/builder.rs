//! Tree builder turning static route definitions into a [`RouteTree`].

use std::collections::{HashMap, HashSet};

use generational_arena::Index;
use tracing::debug;

use crate::domain::arena::RouteData;
use crate::domain::entities::{RouteDefinition, RouteId, RouteKind};
use crate::domain::error::DomainError;
use crate::domain::layout::validate_tag;
use crate::domain::tree::RouteTree;

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;

/// Constructs a route tree from definitions.
///
/// Definitions without a parent hang directly below the root. Sibling order
/// follows definition order.
#[derive(Debug, Default)]
pub struct RouteTreeBuilder {
    definitions: Vec<RouteDefinition>,
}

impl RouteTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, definition: RouteDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn routes(mut self, definitions: impl IntoIterator<Item = RouteDefinition>) -> Self {
        self.definitions.extend(definitions);
        self
    }

    pub fn build(self) -> TreeResult<RouteTree> {
        self.validate_definitions()?;

        // Relationship cache: parent id -> definition positions
        let mut relationships: HashMap<RouteId, Vec<usize>> = HashMap::new();
        for (pos, def) in self.definitions.iter().enumerate() {
            let parent = def.parent.clone().unwrap_or_else(RouteId::root);
            relationships.entry(parent).or_default().push(pos);
        }
        self.validate_parents()?;

        let mut tree = RouteTree::bare();
        let mut attached: HashSet<usize> = HashSet::new();
        let mut stack: Vec<(RouteId, Index)> = vec![(RouteId::root(), tree.root())];

        while let Some((current_id, current_idx)) = stack.pop() {
            let Some(children) = relationships.get(&current_id) else {
                continue;
            };
            let mut pushed = Vec::with_capacity(children.len());
            for &pos in children {
                if !attached.insert(pos) {
                    return Err(DomainError::CycleDetected(self.definitions[pos].id.clone()));
                }
                let def = &self.definitions[pos];
                let idx = tree.attach(
                    RouteData {
                        id: def.id.clone(),
                        kind: def.kind.clone(),
                    },
                    current_idx,
                );
                pushed.push((def.id.clone(), idx));
            }
            // Reverse so the first declared child is expanded first
            stack.extend(pushed.into_iter().rev());
        }

        // Anything unreachable from the root sits on a parent cycle
        if let Some(def) = self
            .definitions
            .iter()
            .enumerate()
            .find(|(pos, _)| !attached.contains(pos))
            .map(|(_, def)| def)
        {
            return Err(DomainError::CycleDetected(def.id.clone()));
        }

        debug!("build: {} routes, depth {}", tree.len(), tree.depth());
        Ok(tree)
    }

    fn validate_definitions(&self) -> TreeResult<()> {
        let mut seen = HashSet::new();
        for def in &self.definitions {
            if def.id.as_str().trim().is_empty() {
                return Err(DomainError::EmptyRouteId);
            }
            if def.id.is_root() {
                return Err(DomainError::ReservedRouteId(def.id.clone()));
            }
            if !seen.insert(&def.id) {
                return Err(DomainError::DuplicateRoute(def.id.clone()));
            }
            if let RouteKind::Layout { tag: Some(tag) } = &def.kind {
                validate_tag(tag)?;
            }
        }
        Ok(())
    }

    fn validate_parents(&self) -> TreeResult<()> {
        let by_id: HashMap<&RouteId, &RouteDefinition> =
            self.definitions.iter().map(|d| (&d.id, d)).collect();

        for def in &self.definitions {
            let Some(parent) = &def.parent else {
                continue;
            };
            if parent.is_root() {
                continue;
            }
            match by_id.get(parent) {
                None => {
                    return Err(DomainError::UnknownParent {
                        route: def.id.clone(),
                        parent: parent.clone(),
                    })
                }
                Some(parent_def) if !parent_def.kind.has_outlet() => {
                    return Err(DomainError::PageWithChildren {
                        page: parent.clone(),
                        child: def.id.clone(),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparented_routes_attach_to_root() {
        let tree = RouteTreeBuilder::new()
            .route(RouteDefinition::page("home", "Home page"))
            .route(RouteDefinition::page("about", "About"))
            .build()
            .unwrap();

        let root = tree.node(tree.root()).unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(tree.leaves(), vec![RouteId::from("home"), RouteId::from("about")]);
    }

    #[test]
    fn test_explicit_root_parent_is_accepted() {
        let tree = RouteTreeBuilder::new()
            .route(RouteDefinition::page("home", "Home").under(RouteId::root()))
            .build()
            .unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_cycle_is_detected() {
        let result = RouteTreeBuilder::new()
            .route(RouteDefinition::layout("a", None).under("b"))
            .route(RouteDefinition::layout("b", None).under("a"))
            .build();
        assert!(matches!(result, Err(DomainError::CycleDetected(_))));
    }

    #[test]
    fn test_layout_tag_with_attributes_is_rejected() {
        let result = RouteTreeBuilder::new()
            .route(RouteDefinition::layout("app", Some("div class='x'")))
            .build();
        assert!(matches!(result, Err(DomainError::InvalidTag(_))));
    }
}
