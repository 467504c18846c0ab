//! CLI integration tests for editor-files.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn editor_files_cmd(workspace: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("editor-files");
    // Keep the user's real config out of the picture.
    cmd.env("XDG_CONFIG_HOME", workspace.join("xdg-config"));
    cmd.current_dir(workspace);
    cmd
}

/// Workspace with src/file_one.rb to act as the active document.
fn workspace() -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("src")).unwrap();
    let active = tmp.path().join("src").join("file_one.rb");
    std::fs::write(&active, "class FileOne; end").unwrap();
    (tmp, active)
}

#[test]
fn test_cli_help() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("File management commands"));
}

#[test]
fn test_cli_no_args_shows_error() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.assert().failure();
}

#[test]
fn test_cli_unknown_subcommand() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.arg("nonexistent-command");
    cmd.assert().failure();
}

#[test]
fn test_new_file_creates_and_reports_opened() {
    let (tmp, active) = workspace();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "new-file"]);
    cmd.write_stdin("notes/todo.md\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"action\":\"opened\""))
        .stdout(predicate::str::contains("todo.md"));

    let created = tmp.path().join("src").join("notes").join("todo.md");
    assert_eq!(std::fs::read_to_string(created).unwrap(), "");
}

#[test]
fn test_new_file_at_root_ignores_active_directory() {
    let (tmp, active) = workspace();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "new-file-at-root"]);
    cmd.write_stdin("README.md\n");
    cmd.assert().success();

    assert!(tmp.path().join("README.md").is_file());
    assert!(!tmp.path().join("src").join("README.md").exists());
}

#[test]
fn test_new_file_without_active_document_is_silent() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.arg("new-file");
    cmd.write_stdin("never-read.md\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_new_file_cancelled_prompt_is_silent() {
    let (tmp, active) = workspace();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "new-file"]);
    // EOF without an answer: the user dismissed the prompt.
    cmd.write_stdin("");
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_new_file_overwrite_confirmed_truncates() {
    let (tmp, active) = workspace();
    let existing = tmp.path().join("src").join("file_two.rb");
    std::fs::write(&existing, "class FileTwo; end").unwrap();

    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "new-file"]);
    cmd.write_stdin("file_two.rb\nOverwrite\n");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read_to_string(&existing).unwrap(), "");
}

#[test]
fn test_new_file_overwrite_declined_keeps_content() {
    let (tmp, active) = workspace();
    let existing = tmp.path().join("src").join("file_two.rb");
    std::fs::write(&existing, "class FileTwo; end").unwrap();

    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "new-file"]);
    cmd.write_stdin("file_two.rb\nno\n");
    cmd.assert().success().stdout(predicate::str::is_empty());

    assert_eq!(
        std::fs::read_to_string(&existing).unwrap(),
        "class FileTwo; end"
    );
}

#[test]
fn test_new_file_filesystem_failure_is_surfaced() {
    let (tmp, active) = workspace();

    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "new-file"]);
    // The active document is a file, so using it as a directory fails.
    cmd.write_stdin("file_one.rb/inner.txt\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to create"));
}

#[test]
fn test_new_folder_creates_nested_tree() {
    let (tmp, active) = workspace();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "new-folder-at-root"]);
    cmd.write_stdin("a/b/c\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"action\":\"created\""));

    assert!(tmp.path().join("a").join("b").join("c").is_dir());
}

#[test]
fn test_rename_moves_the_active_document() {
    let (tmp, active) = workspace();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "rename"]);
    cmd.write_stdin("file_renamed.rb\n");
    cmd.assert().success();

    let renamed = tmp.path().join("src").join("file_renamed.rb");
    assert_eq!(
        std::fs::read_to_string(renamed).unwrap(),
        "class FileOne; end"
    );
    assert!(!active.exists());
}

#[test]
fn test_duplicate_keeps_the_source() {
    let (tmp, active) = workspace();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "duplicate"]);
    cmd.write_stdin("file_copy.rb\n");
    cmd.assert().success();

    assert!(active.is_file());
    assert!(tmp.path().join("src").join("file_copy.rb").is_file());
}

#[test]
fn test_remove_deletes_after_confirmation() {
    let (tmp, active) = workspace();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "remove"]);
    cmd.write_stdin("Delete\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"action\":\"removed\""));

    assert!(!active.exists());
}

#[test]
fn test_remove_declined_keeps_the_file() {
    let (tmp, active) = workspace();
    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "remove"]);
    cmd.write_stdin("\n");
    cmd.assert().success().stdout(predicate::str::is_empty());

    assert!(active.is_file());
}

#[test]
fn test_remove_honors_confirm_delete_config() {
    let (tmp, active) = workspace();
    let config_dir = tmp.path().join("xdg-config").join("editor-files");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "confirm_delete = false\n").unwrap();

    let mut cmd = editor_files_cmd(tmp.path());
    cmd.args(["--active", active.to_str().unwrap(), "remove"]);
    cmd.assert().success();

    assert!(!active.exists());
}
