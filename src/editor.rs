//! Host editor integration.
//!
//! Opening a document means two things in production: spawn the configured
//! `editor_command` (when there is one) and print a JSON outcome record on
//! stdout for the host to act on. Tests substitute a recording fake for
//! the `Editor` trait.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::config::Config;
use crate::dialog::Outcome;

/// Handle to the document the host should treat as active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenedDocument {
    pub path: PathBuf,
}

pub trait Editor {
    /// Open `path` as the active document.
    fn open_document(&mut self, path: &Path) -> Result<OpenedDocument>;
}

pub struct HostEditor<'a> {
    config: &'a Config,
}

impl<'a> HostEditor<'a> {
    pub fn new(config: &'a Config) -> Self {
        HostEditor { config }
    }
}

impl Editor for HostEditor<'_> {
    fn open_document(&mut self, path: &Path) -> Result<OpenedDocument> {
        if let Some(editor) = &self.config.editor_command {
            let status = Command::new(&editor.command)
                .args(&editor.args)
                .arg(path)
                .status()
                .with_context(|| format!("failed to run {}", editor.command))?;
            if !status.success() {
                anyhow::bail!("{} exited with {}", editor.command, status);
            }
        }
        Ok(OpenedDocument {
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Serialize)]
struct OutcomeRecord<'a> {
    action: &'static str,
    path: &'a Path,
}

/// Print the machine-readable outcome for the host on stdout.
///
/// A skipped flow prints nothing: the host saw the user decline and there
/// is no document to focus.
pub fn emit(outcome: &Outcome) -> Result<()> {
    let record = match outcome {
        Outcome::Opened(doc) => OutcomeRecord {
            action: "opened",
            path: &doc.path,
        },
        Outcome::Created { path } => OutcomeRecord {
            action: "created",
            path,
        },
        Outcome::Removed { path } => OutcomeRecord {
            action: "removed",
            path,
        },
        Outcome::Skipped { .. } => return Ok(()),
    };
    println!("{}", serde_json::to_string(&record)?);
    Ok(())
}
