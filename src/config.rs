use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Command used to focus a document in the host editor, e.g. `code -g`.
    /// When unset, hosts act on the JSON outcome printed to stdout instead.
    #[serde(default)]
    pub editor_command: Option<EditorCommand>,
    /// Ask before deleting. Hosts with their own confirmation UI disable this.
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EditorCommand {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            editor_command: None,
            confirm_delete: true,
        }
    }
}

fn default_confirm_delete() -> bool {
    true
}

/// Load config from ~/.config/editor-files/config.toml, or return defaults.
pub fn load() -> Result<Config> {
    let path = config_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    } else {
        Ok(Config::default())
    }
}

fn config_path() -> PathBuf {
    dirs_config_dir().join("editor-files").join("config.toml")
}

fn dirs_config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
}
