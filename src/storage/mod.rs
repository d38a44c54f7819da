//! # Storage Layer
//!
//! Everything that touches the filesystem.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | JSON | `<vault>/codex.config.json` |
//! | Notes | Markdown (read only) | anywhere under `<vault>/` |
//! | Output | Markdown | `<vault>/README.md` |
//!
//! Per-file failures while scanning or harvesting are returned as
//! [`Skipped`] entries. Only a missing or malformed config, an undiscoverable
//! vault root, or a failed README write are errors.

mod config;
mod scanner;
mod harvester;
mod readme;
mod vault;

pub use config::{CodexConfig, ConfigError, CONFIG_FILE_NAME, DEFAULT_MARKER};
pub use scanner::{scan_vault, ScanReport, Skipped};
pub use harvester::{harvest_tasks, HarvestReport};
pub use readme::{ReadmeFile, README_FILE_NAME};
pub use vault::{Vault, VaultError};
