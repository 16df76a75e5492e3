//! Layout nodes: shared structure around exactly one outlet.

use tracing::trace;

use crate::domain::error::DomainError;
use crate::domain::outlet::Outlet;
use crate::domain::view::View;

/// A node that establishes shared structure and defers the rest to its outlet.
///
/// Implementations are pure: same outlet in, same view out. They never
/// omit the outlet and never fail.
pub trait Layout {
    fn render(&self, outlet: Outlet) -> View;
}

/// The outermost frame of the route tree.
///
/// Without a wrapper the root renders nothing but its delegation point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootLayout {
    wrapper: Option<String>,
}

impl RootLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root whose delegation point sits inside a `tag` element.
    pub fn with_wrapper(tag: impl Into<String>) -> Result<Self, DomainError> {
        let tag = tag.into();
        validate_tag(&tag)?;
        Ok(Self { wrapper: Some(tag) })
    }

    pub fn wrapper(&self) -> Option<&str> {
        self.wrapper.as_deref()
    }
}

impl Layout for RootLayout {
    fn render(&self, outlet: Outlet) -> View {
        trace!(filled = outlet.is_filled(), "root render");
        wrap(self.wrapper.as_deref(), outlet)
    }
}

/// A layout route below the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedLayout {
    pub(crate) tag: Option<String>,
}

impl NestedLayout {
    pub fn new(tag: Option<&str>) -> Result<Self, DomainError> {
        if let Some(tag) = tag {
            validate_tag(tag)?;
        }
        Ok(Self {
            tag: tag.map(str::to_string),
        })
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

/// Element tags are non-empty and made of ASCII letters, digits and `-`.
pub fn validate_tag(tag: &str) -> Result<(), DomainError> {
    let valid = !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidTag(tag.to_string()))
    }
}

impl Layout for NestedLayout {
    fn render(&self, outlet: Outlet) -> View {
        wrap(self.tag.as_deref(), outlet)
    }
}

fn wrap(tag: Option<&str>, outlet: Outlet) -> View {
    match tag {
        Some(tag) => View::element(tag, vec![outlet.into_view()]),
        None => outlet.into_view(),
    }
}
