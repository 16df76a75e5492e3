//! Route file service
//!
//! Loads the static route configuration (TOML) and builds the route tree.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{RootLayout, RouteDefinition, RouteId, RouteKind, RouteTree, RouteTreeBuilder};
use crate::infrastructure::traits::FileSystem;

/// Root section of a route file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RootSection {
    /// Optional element wrapping the root outlet
    pub wrapper: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RouteEntryKind {
    Layout,
    #[default]
    Page,
}

/// One `[[routes]]` entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub id: RouteId,
    #[serde(default)]
    pub parent: Option<RouteId>,
    #[serde(default)]
    pub kind: RouteEntryKind,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Parsed route file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RouteFile {
    pub root: RootSection,
    pub routes: Vec<RouteEntry>,
}

impl RouteFile {
    pub fn parse(content: &str, path: &Path) -> ApplicationResult<Self> {
        toml::from_str(content).map_err(|e| ApplicationError::RouteFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Convert entries into domain definitions, rejecting fields that do not
    /// apply to the entry's kind.
    pub fn definitions(&self, path: &Path) -> ApplicationResult<Vec<RouteDefinition>> {
        self.routes
            .iter()
            .map(|entry| {
                let kind = match entry.kind {
                    RouteEntryKind::Layout => {
                        if entry.content.is_some() {
                            let message = format!("layout '{}' cannot have content", entry.id);
                            return Err(invalid(path, message));
                        }
                        RouteKind::Layout {
                            tag: entry.tag.clone(),
                        }
                    }
                    RouteEntryKind::Page => {
                        if entry.tag.is_some() {
                            let message = format!("page '{}' cannot have a tag", entry.id);
                            return Err(invalid(path, message));
                        }
                        RouteKind::Page {
                            content: entry.content.clone().unwrap_or_default(),
                        }
                    }
                };
                Ok(RouteDefinition {
                    id: entry.id.clone(),
                    parent: entry.parent.clone(),
                    kind,
                })
            })
            .collect()
    }

    pub fn root_layout(&self) -> ApplicationResult<RootLayout> {
        match &self.root.wrapper {
            Some(tag) => Ok(RootLayout::with_wrapper(tag.clone())?),
            None => Ok(RootLayout::new()),
        }
    }
}

fn invalid(path: &Path, message: String) -> ApplicationError {
    ApplicationError::RouteFile {
        path: path.to_path_buf(),
        message,
    }
}

/// Service loading route trees from disk.
pub struct RouteFileService {
    fs: Arc<dyn FileSystem>,
}

impl RouteFileService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read, parse and build the route tree described by `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<(RouteTree, RootLayout)> {
        let content = self.fs.read_to_string(path).with_path_context("read route file", path)?;
        let file = RouteFile::parse(&content, path)?;
        let definitions = file.definitions(path)?;
        debug!("load: {} route definitions", definitions.len());

        let tree = RouteTreeBuilder::new().routes(definitions).build()?;
        Ok((tree, file.root_layout()?))
    }
}
