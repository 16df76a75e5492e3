//! Domain layer: route tree, views and the root layout
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod layout;
pub mod outlet;
pub mod tree;
pub mod view;

pub use arena::{RouteArena, RouteData, RouteNode};
pub use builder::RouteTreeBuilder;
pub use entities::*;
pub use error::DomainError;
pub use layout::{validate_tag, Layout, NestedLayout, RootLayout};
pub use outlet::Outlet;
pub use tree::RouteTree;
pub use view::View;
