//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::RouteId;

/// Domain errors represent violations of the route tree invariants.
/// They are raised while building a tree, never while rendering one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("route id must not be empty")]
    EmptyRouteId,

    #[error("route id is reserved for the root: {0}")]
    ReservedRouteId(RouteId),

    #[error("duplicate route id: {0}")]
    DuplicateRoute(RouteId),

    #[error("unknown parent '{parent}' for route '{route}'")]
    UnknownParent { route: RouteId, parent: RouteId },

    #[error("page '{page}' cannot host child route '{child}'")]
    PageWithChildren { page: RouteId, child: RouteId },

    #[error("invalid element tag '{0}': use ASCII letters, digits and '-'")]
    InvalidTag(String),

    #[error("cycle detected in route hierarchy: {0}")]
    CycleDetected(RouteId),
}
