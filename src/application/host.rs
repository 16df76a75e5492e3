//! Event-driven host loop.
//!
//! Navigation events arrive on a channel and are handled strictly in order,
//! one render pass each. Nothing here blocks except waiting for the next event.

use std::sync::mpsc::Receiver;

use tracing::{debug, info};

use crate::application::mount::MountedRoot;
use crate::application::resolver::LeafResolver;
use crate::application::ApplicationResult;
use crate::domain::RouteId;

/// Event dispatched by the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// The resolver now reports this leaf as active (`None` = no active route).
    Navigate(Option<RouteId>),
    Shutdown,
}

/// Outcome of a host loop run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostSummary {
    pub frames: usize,
    pub failures: usize,
}

/// Serializes navigation events into render passes on a mounted root.
pub struct HostLoop<'a> {
    mounted: MountedRoot<'a>,
}

impl<'a> HostLoop<'a> {
    pub fn new(mounted: MountedRoot<'a>) -> Self {
        Self { mounted }
    }

    /// Run until `Shutdown` arrives or every sender is dropped.
    ///
    /// A render failure without a boundary stops the loop and is returned.
    pub fn run(mut self, events: Receiver<NavigationEvent>) -> ApplicationResult<HostSummary> {
        for event in events.iter() {
            match event {
                NavigationEvent::Navigate(leaf) => {
                    debug!("navigate: {:?}", leaf);
                    let resolver = LeafResolver::new(leaf);
                    self.mounted.render_frame(&resolver)?;
                }
                NavigationEvent::Shutdown => break,
            }
        }

        let summary = HostSummary {
            frames: self.mounted.frames(),
            failures: self.mounted.failures(),
        };
        info!(?summary, "host loop finished");
        Ok(summary)
    }
}
