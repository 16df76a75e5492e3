//! Render service
//!
//! Composes the active route chain into the root's outlet.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::resolver::RouteResolver;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{
    Layout, NestedLayout, Outlet, RootLayout, RouteKind, RouteMatch, RouteNode, RouteTree, View,
};

/// Service turning resolver state into a rendered view.
#[derive(Debug, Clone)]
pub struct RenderService {
    tree: Arc<RouteTree>,
    root: RootLayout,
}

impl RenderService {
    pub fn new(tree: Arc<RouteTree>, root: RootLayout) -> Self {
        Self { tree, root }
    }

    pub fn tree(&self) -> &RouteTree {
        &self.tree
    }

    pub fn root(&self) -> &RootLayout {
        &self.root
    }

    /// One render pass against the resolver's current state.
    ///
    /// Resolver failures are returned unchanged, and so is a match that does
    /// not describe a path below this tree's root. The root itself cannot fail.
    #[instrument(level = "debug", skip_all)]
    pub fn render(&self, resolver: &dyn RouteResolver) -> ApplicationResult<View> {
        let route_match = resolver.resolve(&self.tree)?;
        self.render_match(route_match.as_ref())
    }

    /// Render the root for a given match; `None` yields an empty outlet.
    pub fn render_match(&self, route_match: Option<&RouteMatch>) -> ApplicationResult<View> {
        let active = match route_match {
            Some(m) => Some(compose(&self.active_nodes(m)?)),
            None => None,
        };
        debug!(active = active.is_some(), "render_match");
        Ok(self.root.render(Outlet::from(active)))
    }

    /// Nodes of `route_match`, checked to form a parent to child path that
    /// starts below the root and has a page only in leaf position.
    fn active_nodes(&self, route_match: &RouteMatch) -> ApplicationResult<Vec<&RouteNode>> {
        let last = route_match.len() - 1;
        let mut parent = self.tree.root();
        let mut nodes = Vec::with_capacity(route_match.len());

        for (pos, &idx) in route_match.chain().iter().enumerate() {
            let node = self.tree.node(idx).ok_or_else(|| {
                invalid_match(format!("position {} is not a route of this tree", pos))
            })?;
            if node.parent != Some(parent) {
                return Err(invalid_match(format!(
                    "'{}' is not a child of the route before it",
                    node.data.id
                )));
            }
            if pos < last && !node.data.kind.has_outlet() {
                return Err(invalid_match(format!(
                    "page '{}' is not the leaf of the match",
                    node.data.id
                )));
            }
            nodes.push(node);
            parent = idx;
        }
        Ok(nodes)
    }
}

/// Output of the active chain below the root, composed leaf outward.
fn compose(nodes: &[&RouteNode]) -> View {
    let mut inner: Option<View> = None;
    for node in nodes.iter().rev() {
        let view = match &node.data.kind {
            RouteKind::Page { content } => View::text(content.clone()),
            RouteKind::Layout { tag } => {
                NestedLayout { tag: tag.clone() }.render(Outlet::from(inner.take()))
            }
            // Never part of a checked chain: the root has no parent
            RouteKind::Root => continue,
        };
        inner = Some(view);
    }
    inner.unwrap_or_default()
}

fn invalid_match(message: String) -> ApplicationError {
    ApplicationError::InvalidMatch { message }
}
