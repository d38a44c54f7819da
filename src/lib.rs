//! Vault Codex - a README generator for markdown notes vaults
//!
//! Walks a vault of notes, collects recently modified files and task-like
//! lines (unchecked checkboxes, TODO/FIXME markers), and rewrites the
//! generated section of the vault's `README.md` below a marker heading.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{FileRecord, TaskKind, TaskRecord};
pub use storage::{CodexConfig, Vault};
