//! Vault configuration
//!
//! Configuration lives in `codex.config.json` at the vault root. Every key is
//! optional; missing keys fall back to the defaults below.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{RenderSettings, TaskMatcher};

/// File name that marks a vault root
pub const CONFIG_FILE_NAME: &str = "codex.config.json";

/// Marker used when the config does not name one
pub const DEFAULT_MARKER: &str = "## 🧠 Auto-Generated Codex";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse {}: {}", .path.display(), .message)]
    Parse { path: PathBuf, message: String },

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Scan and render options for one vault
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodexConfig {
    /// Extensions of files to scan, with leading dot
    pub include_extensions: Vec<String>,

    /// Directory names never descended into, at any depth
    pub exclude_folders: Vec<String>,

    /// Global cap on harvested tasks
    pub max_tasks: usize,

    /// Case-insensitive substrings that make a line a task
    pub task_markers: Vec<String>,

    /// Line prefixes that make a line a task
    pub task_checkbox_patterns: Vec<String>,

    pub title: String,

    /// Entries in the "Recently Updated" list
    pub max_recent_files: usize,

    /// Heading that separates hand-written and generated README content
    pub generated_section_marker: String,
}

impl Default for CodexConfig {
    fn default() -> Self {
        Self {
            include_extensions: vec![".md".to_string()],
            exclude_folders: vec![],
            max_tasks: 25,
            task_markers: vec!["TODO".to_string(), "FIXME".to_string()],
            task_checkbox_patterns: vec!["- [ ]".to_string(), "* [ ]".to_string()],
            title: "Vault".to_string(),
            max_recent_files: 15,
            generated_section_marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl CodexConfig {
    /// Loads `codex.config.json` from the vault root
    pub fn load(vault_root: &Path) -> Result<Self, ConfigError> {
        let path = vault_root.join(CONFIG_FILE_NAME);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path));
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path,
            message: e.to_string(),
        })
    }

    /// Parses config JSON, applying defaults for missing keys
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Configured extensions, lowercased and dot-prefixed
    pub fn extensions(&self) -> HashSet<String> {
        self.include_extensions
            .iter()
            .map(|ext| {
                let ext = ext.to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect()
    }

    pub fn excluded_folders(&self) -> HashSet<&str> {
        self.exclude_folders.iter().map(String::as_str).collect()
    }

    /// Line classifier built from the task settings
    pub fn task_matcher(&self) -> TaskMatcher {
        TaskMatcher::new(&self.task_checkbox_patterns, &self.task_markers)
    }

    pub fn render_settings(&self) -> RenderSettings<'_> {
        RenderSettings {
            title: &self.title,
            max_recent_files: self.max_recent_files,
        }
    }

    pub fn marker(&self) -> &str {
        &self.generated_section_marker
    }

    /// Finds the vault root by walking up from `start` to the first
    /// directory containing `codex.config.json`
    pub fn find_vault_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(CONFIG_FILE_NAME).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
