//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::services::{RenderService, RouteFileService};
use crate::application::{ApplicationResult, ErrorBoundary, RootMount};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Directory relative paths are resolved against
    pub project_dir: PathBuf,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings, project_dir: PathBuf) -> Self {
        Self::with_deps(settings, project_dir, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, project_dir: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            settings: Arc::new(settings),
            fs,
            project_dir,
        }
    }

    /// Absolute location of the route file.
    pub fn routes_path(&self) -> PathBuf {
        resolve_against(&self.project_dir, &self.settings.routes_file)
    }

    pub fn route_file_service(&self) -> RouteFileService {
        RouteFileService::new(self.fs.clone())
    }

    /// Load the route file and build a render service for it.
    pub fn render_service(&self) -> ApplicationResult<RenderService> {
        let (tree, root) = self.route_file_service().load(&self.routes_path())?;
        Ok(RenderService::new(Arc::new(tree), root))
    }

    /// Load the route file and prepare the root for mounting, with the
    /// configured boundary composed around it.
    pub fn root_mount(&self) -> ApplicationResult<RootMount> {
        let path = self.routes_path();
        debug!("root_mount: routes={}", path.display());
        let (tree, root) = self.route_file_service().load(&path)?;
        let mount = RootMount::new(Arc::new(tree), root);

        let boundary = &self.settings.boundary;
        Ok(if boundary.enabled {
            mount.with_boundary(ErrorBoundary::new(boundary.fallback.clone()))
        } else {
            mount
        })
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::MemoryFileSystem;

    #[test]
    fn test_relative_routes_file_resolves_against_project() {
        let container = ServiceContainer::new(Settings::default(), PathBuf::from("/project"));
        assert_eq!(container.routes_path(), PathBuf::from("/project/routes.toml"));
    }

    #[test]
    fn test_root_mount_applies_boundary_setting() {
        let mut settings = Settings::default();
        settings.boundary.enabled = true;
        let fs = MemoryFileSystem::new().with_file("/p/routes.toml", "");
        let container = ServiceContainer::with_deps(settings, PathBuf::from("/p"), Arc::new(fs));

        let mount = container.root_mount().unwrap();
        assert!(!mount.is_mounted());
        assert_eq!(mount.service().tree().len(), 1);
    }
}
