//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod boundary;
pub mod error;
pub mod error_ext;
pub mod host;
pub mod mount;
pub mod resolver;
pub mod services;

pub use boundary::ErrorBoundary;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use host::{HostLoop, HostSummary, NavigationEvent};
pub use mount::{MountedRoot, RootMount};
pub use resolver::{LeafResolver, RouteResolver};
