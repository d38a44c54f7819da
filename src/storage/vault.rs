//! Vault handle
//!
//! Resolves the vault root, loads its configuration and exposes the scan,
//! harvest and README operations against it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::harvester::{harvest_tasks, HarvestReport};
use super::readme::ReadmeFile;
use super::scanner::{scan_vault, ScanReport};
use super::CodexConfig;
use crate::domain::FileRecord;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Could not find codex.config.json in {} or any parent folder", .0.display())]
    RootNotFound(PathBuf),
}

/// A notes vault with its loaded configuration
#[derive(Debug)]
pub struct Vault {
    root: PathBuf,
    config: CodexConfig,
}

impl Vault {
    /// Opens the vault at exactly `root`; no parent search is done
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = CodexConfig::load(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the nearest vault at or above `start`
    pub fn discover(start: &Path) -> Result<Self> {
        let root = CodexConfig::find_vault_root(start)
            .ok_or_else(|| VaultError::RootNotFound(start.to_path_buf()))?;

        Self::open(root)
    }

    /// Opens an explicitly given root, or discovers one from the current
    /// directory when none is given
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;

        match explicit {
            Some(path) => Self::open(cwd.join(path)),
            None => Self::discover(&cwd),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &CodexConfig {
        &self.config
    }

    pub fn readme(&self) -> ReadmeFile {
        ReadmeFile::for_vault(&self.root)
    }

    pub fn scan(&self) -> ScanReport {
        scan_vault(&self.root, &self.config)
    }

    pub fn harvest(&self, files: &[FileRecord]) -> HarvestReport {
        harvest_tasks(&self.root, files, &self.config)
    }
}
