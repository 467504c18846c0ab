//! Dialog flows behind the file-management commands.
//!
//! Every flow is the same sequential chain: pick a base directory, prompt
//! for a target, resolve it, settle conflicts with the user, touch the
//! filesystem, open the result. A failed step short-circuits the rest; no
//! partial cleanup is attempted, so directories created before a failed
//! write stay in place.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::context::ActiveContext;
use crate::editor::{Editor, OpenedDocument};
use crate::paths;
use crate::ui::{InputBoxOptions, Ui};

/// Why a flow stopped without completing.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The command needed an active document and none is focused.
    #[error("no active document")]
    NoActiveContext,
    /// The user dismissed the input prompt.
    #[error("cancelled")]
    Cancelled,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A failure that has already been shown through the error-display
/// adapter. The binary's outer error path checks for it so the user does
/// not see the same message twice.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Surfaced(pub anyhow::Error);

/// What a completed flow did.
#[derive(Debug)]
pub enum Outcome {
    /// A document was created, renamed, or copied, and opened.
    Opened(OpenedDocument),
    /// A folder was created.
    Created { path: PathBuf },
    /// A file was deleted.
    Removed { path: PathBuf },
    /// The user declined the conflict prompt; nothing was touched.
    Skipped { path: PathBuf },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NewFileOptions {
    /// Resolve against the workspace root instead of the active
    /// document's directory.
    pub relative_to_root: bool,
}

pub struct Dialogs<'a> {
    context: &'a ActiveContext,
    config: &'a Config,
    ui: &'a mut dyn Ui,
    editor: &'a mut dyn Editor,
}

impl<'a> Dialogs<'a> {
    pub fn new(
        context: &'a ActiveContext,
        config: &'a Config,
        ui: &'a mut dyn Ui,
        editor: &'a mut dyn Editor,
    ) -> Self {
        Dialogs {
            context,
            config,
            ui,
            editor,
        }
    }

    /// Prompt for a file name, create the (empty) file, open it.
    ///
    /// An existing file at the target is a conflict, not an error: the
    /// user decides whether to overwrite, and declining succeeds without
    /// touching anything.
    pub fn new_file(&mut self, options: &NewFileOptions) -> Result<Outcome, FlowError> {
        let base = self
            .context
            .base_dir(options.relative_to_root)
            .ok_or(FlowError::NoActiveContext)?;
        let entered = self.prompt("File Name", None)?;
        let target = paths::resolve_target(&base, &entered);
        debug!(path = %target.display(), "new file target resolved");
        if target.is_file() && !self.confirm_overwrite(&target, "File")? {
            return Ok(Outcome::Skipped { path: target });
        }
        create_parent_dirs(&target)?;
        fs::write(&target, "")
            .with_context(|| format!("failed to create {}", target.display()))?;
        self.open(target)
    }

    /// Prompt for a folder name and create it, including missing parents.
    ///
    /// Overwriting an existing folder recreates it empty, symmetric with
    /// file truncation.
    pub fn new_folder(&mut self, options: &NewFileOptions) -> Result<Outcome, FlowError> {
        let base = self
            .context
            .base_dir(options.relative_to_root)
            .ok_or(FlowError::NoActiveContext)?;
        let entered = self.prompt("Folder Name", None)?;
        let target = paths::resolve_target(&base, &entered);
        debug!(path = %target.display(), "new folder target resolved");
        if target.is_dir() {
            if !self.confirm_overwrite(&target, "Folder")? {
                return Ok(Outcome::Skipped { path: target });
            }
            fs::remove_dir_all(&target)
                .with_context(|| format!("failed to remove {}", target.display()))?;
        }
        fs::create_dir_all(&target)
            .with_context(|| format!("failed to create {}", target.display()))?;
        Ok(Outcome::Created { path: target })
    }

    /// Rename the active document within its directory.
    pub fn rename_active(&mut self) -> Result<Outcome, FlowError> {
        let source = self.active_file()?;
        let base = source
            .parent()
            .map(Path::to_path_buf)
            .ok_or(FlowError::NoActiveContext)?;
        let default = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let entered = self.prompt("New Name", default)?;
        let target = paths::resolve_target(&base, &entered);
        self.relocate(&source, target)
    }

    /// Move the active document anywhere under (or outside) the root.
    pub fn move_active(&mut self) -> Result<Outcome, FlowError> {
        let source = self.active_file()?;
        let default = source
            .strip_prefix(self.context.root())
            .unwrap_or(&source)
            .to_string_lossy()
            .into_owned();
        let entered = self.prompt("New Location", Some(default))?;
        let target = paths::resolve_target(self.context.root(), &entered);
        self.relocate(&source, target)
    }

    /// Copy the active document to a new name and open the copy.
    pub fn duplicate_active(&mut self) -> Result<Outcome, FlowError> {
        let source = self.active_file()?;
        let base = source
            .parent()
            .map(Path::to_path_buf)
            .ok_or(FlowError::NoActiveContext)?;
        let default = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let entered = self.prompt("Duplicate As", default)?;
        let target = paths::resolve_target(&base, &entered);
        if target == source {
            return Ok(Outcome::Skipped { path: target });
        }
        if target.is_file() && !self.confirm_overwrite(&target, "File")? {
            return Ok(Outcome::Skipped { path: target });
        }
        create_parent_dirs(&target)?;
        fs::copy(&source, &target).with_context(|| {
            format!(
                "failed to copy {} to {}",
                source.display(),
                target.display()
            )
        })?;
        self.open(target)
    }

    /// Delete the active document after a modal confirmation.
    pub fn remove_active(&mut self) -> Result<Outcome, FlowError> {
        let source = self.active_file()?;
        if self.config.confirm_delete {
            let message = format!("Delete file '{}'?", source.display());
            if !self.ui.confirm_modal(&message, "Delete")? {
                return Ok(Outcome::Skipped { path: source });
            }
        }
        fs::remove_file(&source)
            .with_context(|| format!("failed to delete {}", source.display()))?;
        Ok(Outcome::Removed { path: source })
    }

    fn active_file(&self) -> Result<PathBuf, FlowError> {
        self.context
            .active_document()
            .map(Path::to_path_buf)
            .ok_or(FlowError::NoActiveContext)
    }

    fn prompt(
        &mut self,
        label: &'static str,
        default: Option<String>,
    ) -> Result<String, FlowError> {
        let options = InputBoxOptions {
            prompt: label,
            default,
        };
        match self.ui.input_box(&options)? {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(FlowError::Cancelled),
        }
    }

    fn confirm_overwrite(&mut self, target: &Path, kind: &str) -> Result<bool, FlowError> {
        let message = format!("{kind} '{}' already exists.", target.display());
        Ok(self.ui.confirm_modal(&message, "Overwrite")?)
    }

    /// Shared tail of the rename/move flows.
    fn relocate(&mut self, source: &Path, target: PathBuf) -> Result<Outcome, FlowError> {
        if target.as_path() == source {
            return Ok(Outcome::Skipped { path: target });
        }
        if target.is_file() && !self.confirm_overwrite(&target, "File")? {
            return Ok(Outcome::Skipped { path: target });
        }
        create_parent_dirs(&target)?;
        fs::rename(source, &target).with_context(|| {
            format!(
                "failed to move {} to {}",
                source.display(),
                target.display()
            )
        })?;
        self.open(target)
    }

    fn open(&mut self, path: PathBuf) -> Result<Outcome, FlowError> {
        let document = self.editor.open_document(&path)?;
        Ok(Outcome::Opened(document))
    }
}

fn create_parent_dirs(target: &Path) -> Result<(), FlowError> {
    if let Some(parent) = target.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Entry-point policy: silent conditions resolve quietly, everything else
/// goes through the error-display adapter and then propagates.
pub fn settle(
    result: Result<Outcome, FlowError>,
    ui: &mut dyn Ui,
) -> anyhow::Result<Option<Outcome>> {
    match result {
        Ok(outcome) => Ok(Some(outcome)),
        Err(FlowError::NoActiveContext) => {
            debug!("no active document, ignoring command");
            Ok(None)
        }
        Err(FlowError::Cancelled) => {
            debug!("prompt cancelled");
            Ok(None)
        }
        Err(FlowError::Other(err)) => {
            ui.error_message(&format!("{err:#}"));
            Err(Surfaced(err).into())
        }
    }
}
