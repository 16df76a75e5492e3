//! Delegation point of a layout.

use crate::domain::view::View;

/// Slot into which the active child's output is substituted.
///
/// An outlet without content still renders: it degrades to an empty
/// delegation point instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outlet {
    content: Option<View>,
}

impl Outlet {
    pub fn empty() -> Self {
        Self { content: None }
    }

    pub fn filled(view: View) -> Self {
        Self {
            content: Some(view),
        }
    }

    pub fn is_filled(&self) -> bool {
        self.content.is_some()
    }

    pub fn into_view(self) -> View {
        View::Outlet(Box::new(self.content.unwrap_or_default()))
    }
}

impl From<Option<View>> for Outlet {
    fn from(content: Option<View>) -> Self {
        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_outlet_yields_empty_delegation_point() {
        assert_eq!(Outlet::empty().into_view(), View::Outlet(Box::new(View::Empty)));
    }

    #[test]
    fn test_filled_outlet_keeps_content_unchanged() {
        let view = Outlet::filled(View::text("Home page")).into_view();
        assert_eq!(view.outlet(), Some(&View::text("Home page")));
    }
}
