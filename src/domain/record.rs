//! Records produced by a vault scan
//!
//! Both record types are created once and never mutated. The scan order
//! (most recently modified first) is load-bearing: task harvesting and
//! module grouping both inherit it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Grouping key for files that sit directly in the vault root
pub const ROOT_GROUP: &str = "(root)";

/// Metadata for a single note file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the vault root, always `/`-separated
    pub rel_path: String,

    /// Last modification time
    pub modified: DateTime<Utc>,

    /// Size in bytes
    pub size: u64,
}

impl FileRecord {
    pub fn new(rel_path: impl Into<String>, modified: DateTime<Utc>, size: u64) -> Self {
        Self {
            rel_path: rel_path.into(),
            modified,
            size,
        }
    }

    /// Final path component, used as link text
    pub fn file_name(&self) -> &str {
        basename(&self.rel_path)
    }

    /// First path component when the file lives inside a folder
    pub fn top_folder(&self) -> Option<&str> {
        self.rel_path
            .split_once('/')
            .map(|(top, _)| top)
    }
}

/// Which rule classified a line as a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Line starts with an unchecked checkbox pattern
    Checkbox,
    /// Line contains a marker such as TODO or FIXME
    Marker,
}

/// A task-like line harvested from a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Relative path of the owning file
    pub rel_path: String,

    /// 1-based line number
    pub line: usize,

    /// The line with surrounding whitespace removed
    pub text: String,

    pub kind: TaskKind,
}

impl TaskRecord {
    /// Link target pointing at the task's line
    pub fn anchor(&self) -> String {
        format!("{}#L{}", self.rel_path, self.line)
    }

    pub fn file_name(&self) -> &str {
        basename(&self.rel_path)
    }
}

/// Sorts records most recent first, keeping traversal order on ties
pub fn sort_by_recency(files: &mut [FileRecord]) {
    // slice::sort_by is stable
    files.sort_by(|a, b| b.modified.cmp(&a.modified));
}

/// Files grouped by their top-level folder
///
/// Keys iterate in lexicographic order. Each group keeps the order of the
/// input slice, so a recency-sorted input gives recency-sorted groups.
#[derive(Debug, Default)]
pub struct Grouping<'a> {
    groups: BTreeMap<&'a str, Vec<&'a FileRecord>>,
}

impl<'a> Grouping<'a> {
    pub fn from_files(files: &'a [FileRecord]) -> Self {
        let mut groups: BTreeMap<&'a str, Vec<&'a FileRecord>> = BTreeMap::new();
        for file in files {
            let key = file.top_folder().unwrap_or(ROOT_GROUP);
            groups.entry(key).or_default().push(file);
        }
        Self { groups }
    }

    /// Iterates `(folder, files)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a FileRecord])> + '_ {
        self.groups.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

fn basename(rel_path: &str) -> &str {
    rel_path.rsplit('/').next().unwrap_or(rel_path)
}
