//! Error boundary composed around the root.

use tracing::warn;

use crate::application::ApplicationError;
use crate::domain::View;

/// Turns a failed render pass into fallback output.
///
/// The boundary sits outside the root: the root never catches anything
/// itself, it is the boundary that decides what the user sees instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBoundary {
    fallback: Option<String>,
}

impl ErrorBoundary {
    pub fn new(fallback: Option<String>) -> Self {
        Self { fallback }
    }

    /// Boundary rendering nothing on failure.
    pub fn silent() -> Self {
        Self { fallback: None }
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    pub fn recover(&self, error: &ApplicationError) -> View {
        warn!("render pass failed, showing fallback: {}", error);
        match &self.fallback {
            Some(text) => View::text(text.clone()),
            None => View::Empty,
        }
    }
}
