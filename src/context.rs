//! Workspace state supplied by the host editor for one invocation.

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ActiveContext {
    root: PathBuf,
    active: Option<PathBuf>,
}

impl ActiveContext {
    pub fn new(root: &Path, active: Option<&Path>) -> Result<Self> {
        let root = std::path::absolute(root)
            .with_context(|| format!("invalid workspace root {}", root.display()))?;
        let active = active
            .map(|path| {
                std::path::absolute(path)
                    .with_context(|| format!("invalid active document path {}", path.display()))
            })
            .transpose()?;
        Ok(ActiveContext { root, active })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The document currently focused in the editor, if any.
    pub fn active_document(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    /// Directory a relative target resolves against.
    ///
    /// None when the command needs the active document's directory and no
    /// document is active.
    pub fn base_dir(&self, relative_to_root: bool) -> Option<PathBuf> {
        if relative_to_root {
            return Some(self.root.clone());
        }
        self.active
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
    }
}
