//! Tests for mounting the root and the event-driven host loop

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use routeroot::infrastructure::traits::MemoryTarget;
use routeroot::util::testing;
use routeroot::{
    ApplicationError, ApplicationResult, ErrorBoundary, HostLoop, LeafResolver, NavigationEvent,
    RootLayout, RootMount, RouteDefinition, RouteMatch, RouteResolver, RouteTree,
    RouteTreeBuilder, View,
};

fn tree() -> Arc<RouteTree> {
    Arc::new(
        RouteTreeBuilder::new()
            .route(RouteDefinition::page("home", "Home page"))
            .route(RouteDefinition::page("about", "About"))
            .build()
            .unwrap(),
    )
}

fn home() -> View {
    View::Outlet(Box::new(View::text("Home page")))
}

fn empty() -> View {
    View::Outlet(Box::new(View::Empty))
}

/// Resolver standing in for a broken route configuration.
struct FailingResolver;

impl RouteResolver for FailingResolver {
    fn resolve(&self, _tree: &RouteTree) -> ApplicationResult<Option<RouteMatch>> {
        Err(ApplicationError::Resolver {
            message: "malformed route configuration".to_string(),
        })
    }
}

#[test]
fn given_navigation_events_when_running_host_loop_then_frames_follow_event_order() {
    testing::init_test_setup();
    // Arrange
    let target = MemoryTarget::new();
    let mount = RootMount::new(tree(), RootLayout::new());
    let mounted = mount.mount(Box::new(target.clone())).unwrap();
    let (tx, rx) = mpsc::channel();

    tx.send(NavigationEvent::Navigate(None)).unwrap();
    tx.send(NavigationEvent::Navigate(Some("home".into()))).unwrap();
    tx.send(NavigationEvent::Navigate(Some("about".into()))).unwrap();
    tx.send(NavigationEvent::Navigate(Some("home".into()))).unwrap();
    tx.send(NavigationEvent::Shutdown).unwrap();
    tx.send(NavigationEvent::Navigate(Some("about".into()))).unwrap();

    // Act
    let summary = HostLoop::new(mounted).run(rx).unwrap();

    // Assert
    assert_eq!(summary.frames, 4);
    assert_eq!(summary.failures, 0);
    assert_eq!(
        target.frames(),
        vec![
            empty(),
            home(),
            View::Outlet(Box::new(View::text("About"))),
            home()
        ]
    );
}

#[test]
fn given_sender_on_other_thread_when_dropped_then_loop_ends() {
    let target = MemoryTarget::new();
    let mount = RootMount::new(tree(), RootLayout::new());
    let mounted = mount.mount(Box::new(target.clone())).unwrap();
    let (tx, rx) = mpsc::channel();

    let producer = thread::spawn(move || {
        tx.send(NavigationEvent::Navigate(Some("home".into()))).unwrap();
    });
    let summary = HostLoop::new(mounted).run(rx).unwrap();
    producer.join().unwrap();

    assert_eq!(summary.frames, 1);
    assert_eq!(target.frames(), vec![home()]);
}

#[test]
fn given_unknown_route_without_boundary_when_running_then_loop_stops_with_error() {
    let target = MemoryTarget::new();
    let mount = RootMount::new(tree(), RootLayout::new());
    let mounted = mount.mount(Box::new(target.clone())).unwrap();
    let (tx, rx) = mpsc::channel();

    tx.send(NavigationEvent::Navigate(Some("home".into()))).unwrap();
    tx.send(NavigationEvent::Navigate(Some("missing".into()))).unwrap();
    tx.send(NavigationEvent::Navigate(Some("about".into()))).unwrap();

    let result = HostLoop::new(mounted).run(rx);

    assert!(matches!(result, Err(ApplicationError::UnknownRoute(_))));
    assert_eq!(target.frames(), vec![home()]);
}

#[test]
fn given_boundary_when_resolver_fails_then_fallback_frame_is_committed() {
    // Arrange
    let target = MemoryTarget::new();
    let mount = RootMount::new(tree(), RootLayout::new())
        .with_boundary(ErrorBoundary::new(Some("Something went wrong".into())));
    let mut mounted = mount.mount(Box::new(target.clone())).unwrap();

    // Act
    let failed = mounted.render_frame(&FailingResolver).unwrap();
    let recovered = mounted.render_frame(&LeafResolver::leaf("home")).unwrap();

    // Assert
    assert_eq!(failed, View::text("Something went wrong"));
    assert_eq!(recovered, home());
    assert_eq!(mounted.frames(), 2);
    assert_eq!(mounted.failures(), 1);
}

#[test]
fn given_resolver_failure_without_boundary_when_rendering_then_error_is_not_swallowed() {
    let target = MemoryTarget::new();
    let mount = RootMount::new(tree(), RootLayout::new());
    let mut mounted = mount.mount(Box::new(target.clone())).unwrap();

    let result = mounted.render_frame(&FailingResolver);

    assert!(matches!(result, Err(ApplicationError::Resolver { .. })));
    assert_eq!(mounted.frames(), 0);
    assert!(target.frames().is_empty());
}

#[test]
fn given_mounted_root_when_mounting_again_then_rejected_even_after_drop() {
    let mount = RootMount::new(tree(), RootLayout::new());
    {
        let mounted = mount.mount(Box::new(MemoryTarget::new())).unwrap();
        drop(mounted);
    }

    assert!(mount.is_mounted());
    assert!(matches!(
        mount.mount(Box::new(MemoryTarget::new())),
        Err(ApplicationError::AlreadyMounted)
    ));
}
