//! Root of a declarative route tree.
//!
//! The [`RootLayout`] is the unconditional outer frame of every render pass.
//! It exposes exactly one [`Outlet`] into which the output of the currently
//! active nested route is substituted. Which route is active is decided
//! elsewhere, by a [`RouteResolver`], and handed to each render pass as
//! explicit input.
//!
//! ```
//! use std::sync::Arc;
//! use routeroot::{LeafResolver, RenderService, RootLayout, RouteDefinition, RouteTreeBuilder, View};
//!
//! let tree = RouteTreeBuilder::new()
//!     .route(RouteDefinition::page("home", "Home page"))
//!     .build()
//!     .unwrap();
//! let service = RenderService::new(Arc::new(tree), RootLayout::new());
//!
//! let view = service.render(&LeafResolver::leaf("home")).unwrap();
//! assert_eq!(view.outlet(), Some(&View::text("Home page")));
//!
//! let view = service.render(&LeafResolver::pending()).unwrap();
//! assert_eq!(view.outlet(), Some(&View::Empty));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::services::{RenderService, RouteFileService};
pub use application::{
    ApplicationError, ApplicationResult, ErrorBoundary, HostLoop, HostSummary, LeafResolver,
    MountedRoot, NavigationEvent, RootMount, RouteResolver,
};
pub use config::{OutputFormat, Settings};
pub use domain::{
    DomainError, Layout, Outlet, RootLayout, RouteDefinition, RouteId, RouteMatch, RouteTree,
    RouteTreeBuilder, View,
};
