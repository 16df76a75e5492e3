//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, RenderTarget)
//! but are themselves concrete structs, not traits.

mod render;
mod routes_file;

pub use render::RenderService;
pub use routes_file::{RootSection, RouteEntry, RouteEntryKind, RouteFile, RouteFileService};
