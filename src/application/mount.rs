//! Application shell: owns the root and attaches it to a render target.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::boundary::ErrorBoundary;
use crate::application::resolver::RouteResolver;
use crate::application::services::RenderService;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{RootLayout, RouteTree, View};
use crate::infrastructure::traits::RenderTarget;

/// Process-wide owner of the route tree root.
///
/// Lives from application start to teardown. The root can be mounted once.
pub struct RootMount {
    service: RenderService,
    boundary: Option<ErrorBoundary>,
    mounted: AtomicBool,
}

impl RootMount {
    pub fn new(tree: Arc<RouteTree>, root: RootLayout) -> Self {
        Self {
            service: RenderService::new(tree, root),
            boundary: None,
            mounted: AtomicBool::new(false),
        }
    }

    /// Compose an error boundary around the root.
    pub fn with_boundary(mut self, boundary: ErrorBoundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn service(&self) -> &RenderService {
        &self.service
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Attach the root to `target`. A second call fails with
    /// [`ApplicationError::AlreadyMounted`].
    pub fn mount(&self, target: Box<dyn RenderTarget>) -> ApplicationResult<MountedRoot<'_>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return Err(ApplicationError::AlreadyMounted);
        }
        info!("root mounted");
        Ok(MountedRoot {
            owner: self,
            target,
            frames: 0,
            failures: 0,
        })
    }
}

/// Handle to the mounted root. Dropping it tears the root down.
pub struct MountedRoot<'a> {
    owner: &'a RootMount,
    target: Box<dyn RenderTarget>,
    frames: usize,
    failures: usize,
}

impl MountedRoot<'_> {
    /// Render one frame for the resolver's current state and commit it.
    ///
    /// Without a boundary, resolver failures propagate and nothing is committed.
    pub fn render_frame(&mut self, resolver: &dyn RouteResolver) -> ApplicationResult<View> {
        let (view, recovered) = match self.owner.service.render(resolver) {
            Ok(view) => (view, false),
            Err(e) => match &self.owner.boundary {
                Some(boundary) => (boundary.recover(&e), true),
                None => return Err(e),
            },
        };

        self.target
            .commit(&view)
            .map_err(|source| ApplicationError::Target {
                context: format!("commit frame {}", self.frames + 1),
                source,
            })?;
        self.frames += 1;
        if recovered {
            self.failures += 1;
        }
        debug!("render_frame: committed frame {}", self.frames);
        Ok(view)
    }

    /// Frames committed so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Render passes recovered by the boundary.
    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl Drop for MountedRoot<'_> {
    fn drop(&mut self) {
        info!(frames = self.frames, "root unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::resolver::LeafResolver;
    use crate::infrastructure::traits::MemoryTarget;
    use std::io;

    struct ClosedTarget;

    impl RenderTarget for ClosedTarget {
        fn commit(&mut self, _frame: &View) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_second_mount_is_rejected() {
        let mount = RootMount::new(Arc::new(RouteTree::bare()), RootLayout::new());
        let _first = mount.mount(Box::new(MemoryTarget::new())).unwrap();
        let second = mount.mount(Box::new(MemoryTarget::new()));
        assert!(matches!(second, Err(ApplicationError::AlreadyMounted)));
    }

    #[test]
    fn test_pending_frame_is_committed() {
        let target = MemoryTarget::new();
        let mount = RootMount::new(Arc::new(RouteTree::bare()), RootLayout::new());
        let mut mounted = mount.mount(Box::new(target.clone())).unwrap();

        mounted.render_frame(&LeafResolver::pending()).unwrap();

        assert_eq!(mounted.frames(), 1);
        assert_eq!(target.frames(), vec![View::Outlet(Box::new(View::Empty))]);
    }

    #[test]
    fn test_recovery_is_counted_only_when_committed() {
        let mount = RootMount::new(Arc::new(RouteTree::bare()), RootLayout::new())
            .with_boundary(ErrorBoundary::silent());
        let mut mounted = mount.mount(Box::new(ClosedTarget)).unwrap();

        let result = mounted.render_frame(&LeafResolver::leaf("missing"));

        assert!(matches!(result, Err(ApplicationError::Target { .. })));
        assert_eq!(mounted.failures(), 0);
        assert_eq!(mounted.frames(), 0);
    }

    #[test]
    fn test_recovered_frame_is_counted() {
        let mount = RootMount::new(Arc::new(RouteTree::bare()), RootLayout::new())
            .with_boundary(ErrorBoundary::silent());
        let mut mounted = mount.mount(Box::new(MemoryTarget::new())).unwrap();

        mounted.render_frame(&LeafResolver::leaf("missing")).unwrap();

        assert_eq!(mounted.failures(), 1);
        assert_eq!(mounted.frames(), 1);
    }
}
