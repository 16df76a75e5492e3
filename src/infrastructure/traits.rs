//! I/O boundary traits for testability
//!
//! These traits abstract reading route files and committing rendered frames,
//! allowing services to be tested with in-memory implementations.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::OutputFormat;
use crate::domain::View;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Host render target the mounted root is attached to.
pub trait RenderTarget: Send {
    /// Commit one rendered frame.
    fn commit(&mut self, frame: &View) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Writes each frame to a writer, one frame per line (markup) or block (tree).
pub struct WriterTarget<W: Write + Send> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write + Send> WriterTarget<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterTarget<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write + Send> RenderTarget for WriterTarget<W> {
    fn commit(&mut self, frame: &View) -> io::Result<()> {
        match self.format {
            OutputFormat::Markup => writeln!(self.writer, "{}", frame)?,
            OutputFormat::Tree => write!(self.writer, "{}", frame.to_tree())?,
        }
        self.writer.flush()
    }
}

// ============================================================
// IN-MEMORY IMPLEMENTATIONS
// ============================================================

/// Render target keeping every committed frame. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    frames: Arc<Mutex<Vec<View>>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the committed frames, oldest first.
    pub fn frames(&self) -> Vec<View> {
        self.frames
            .lock()
            .map(|frames| frames.clone())
            .unwrap_or_default()
    }
}

impl RenderTarget for MemoryTarget {
    fn commit(&mut self, frame: &View) -> io::Result<()> {
        self.frames
            .lock()
            .map_err(|_| io::Error::other("frame store poisoned"))?
            .push(frame.clone());
        Ok(())
    }
}

/// In-memory filesystem keyed by path.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_target_writes_markup_line() {
        let mut target = WriterTarget::new(Vec::new(), OutputFormat::Markup);
        target
            .commit(&View::Outlet(Box::new(View::text("Home page"))))
            .unwrap();
        assert_eq!(String::from_utf8(target.into_inner()).unwrap(), "Home page\n");
    }

    #[test]
    fn test_memory_target_clones_share_frames() {
        let target = MemoryTarget::new();
        let mut handle = target.clone();
        handle.commit(&View::Empty).unwrap();
        assert_eq!(target.frames(), vec![View::Empty]);
    }

    #[test]
    fn test_memory_fs_missing_file_is_not_found() {
        let fs = MemoryFileSystem::new();
        let err = fs.read_to_string(Path::new("routes.toml")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
