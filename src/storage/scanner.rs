//! Vault tree scanning
//!
//! Walks the vault lazily, pruning excluded directories before descending,
//! and stats every candidate note. Files that cannot be stat'ed are reported
//! as [`Skipped`] rather than failing the scan.
//!
//! The vault's own `README.md` is the generator's output and is never scanned.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use walkdir::{DirEntry, WalkDir};

use super::readme::README_FILE_NAME;
use super::CodexConfig;
use crate::domain::{sort_by_recency, FileRecord};

/// A file left out of a scan or harvest, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of looking at one walk entry
#[derive(Debug)]
enum Entry {
    Record(FileRecord),
    Skipped(Skipped),
    Ignored,
}

/// Result of scanning a vault
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Included notes, most recently modified first
    pub files: Vec<FileRecord>,

    pub skipped: Vec<Skipped>,
}

/// Scans `root` for notes matching the configured extensions
pub fn scan_vault(root: &Path, config: &CodexConfig) -> ScanReport {
    let extensions = config.extensions();
    let excluded = config.excluded_folders();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded_dir(e, &excluded));

    let mut report = ScanReport::default();

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                report.skipped.push(Skipped {
                    path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf()),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match inspect(root, &entry, &extensions) {
            Entry::Record(record) => report.files.push(record),
            Entry::Skipped(skipped) => report.skipped.push(skipped),
            Entry::Ignored => {}
        }
    }

    sort_by_recency(&mut report.files);
    report
}

fn is_excluded_dir(entry: &DirEntry, excluded: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excluded.contains(name))
}

fn inspect(root: &Path, entry: &DirEntry, extensions: &HashSet<String>) -> Entry {
    if entry.file_type().is_dir() || !has_included_extension(entry.path(), extensions) {
        return Entry::Ignored;
    }
    // The root README is the generated output, not a note
    if entry.depth() == 1 && is_root_readme(entry) {
        return Entry::Ignored;
    }

    let path = entry.path();
    let skipped = |reason: String| {
        Entry::Skipped(Skipped {
            path: path.to_path_buf(),
            reason,
        })
    };

    // fs::metadata follows symlinks, so linked notes are included
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) => return skipped(e.to_string()),
    };
    if !meta.is_file() {
        return Entry::Ignored;
    }

    let modified = match meta.modified() {
        Ok(t) => DateTime::<Utc>::from(t),
        Err(e) => return skipped(e.to_string()),
    };

    let rel_path = match path.strip_prefix(root) {
        Ok(rel) => to_posix(rel),
        Err(e) => return skipped(e.to_string()),
    };

    Entry::Record(FileRecord::new(rel_path, modified, meta.len()))
}

/// Case-insensitive so `readme.md` matches on case-insensitive filesystems
fn is_root_readme(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.eq_ignore_ascii_case(README_FILE_NAME))
}

fn has_included_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&format!(".{}", ext.to_lowercase())))
}

/// Joins path components with `/` regardless of platform
fn to_posix(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
