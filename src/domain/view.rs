//! Render output of a route tree pass.

use std::fmt;

use termtree::Tree;

/// Rendered tree produced by layouts and pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Renders nothing.
    #[default]
    Empty,
    Text(String),
    Element { tag: String, children: Vec<View> },
    /// A delegation point and whatever was substituted into it.
    Outlet(Box<View>),
}

impl View {
    pub fn text(text: impl Into<String>) -> Self {
        View::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<View>) -> Self {
        View::Element {
            tag: tag.into(),
            children,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, View::Empty)
    }

    /// Number of delegation points anywhere in this tree.
    pub fn outlet_count(&self) -> usize {
        match self {
            View::Empty | View::Text(_) => 0,
            View::Element { children, .. } => children.iter().map(View::outlet_count).sum(),
            View::Outlet(inner) => 1 + inner.outlet_count(),
        }
    }

    /// Content of the outermost delegation point, searched depth first.
    pub fn outlet(&self) -> Option<&View> {
        match self {
            View::Empty | View::Text(_) => None,
            View::Element { children, .. } => children.iter().find_map(View::outlet),
            View::Outlet(inner) => Some(inner),
        }
    }

    /// HTML-like markup. Outlets are transparent.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            View::Empty => {}
            View::Text(text) => escape_into(text, out),
            View::Element { tag, children } => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                for child in children {
                    child.write_markup(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            View::Outlet(inner) => inner.write_markup(out),
        }
    }

    /// Structural view of the render output, outlets included.
    pub fn to_tree(&self) -> Tree<String> {
        match self {
            View::Empty => Tree::new("∅".to_string()),
            View::Text(text) => Tree::new(format!("{:?}", text)),
            View::Element { tag, children } => {
                Tree::new(format!("<{}>", tag)).with_leaves(children.iter().map(View::to_tree))
            }
            View::Outlet(inner) => Tree::new("<outlet>".to_string()).with_leaves([inner.to_tree()]),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
