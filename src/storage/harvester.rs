//! Task harvesting
//!
//! Re-reads scanned notes in recency order and collects task-like lines
//! until the global cap is reached.

use std::fs;
use std::path::Path;

use super::scanner::Skipped;
use super::CodexConfig;
use crate::domain::{FileRecord, TaskRecord};

/// Result of harvesting tasks
#[derive(Debug, Default)]
pub struct HarvestReport {
    /// Tasks in file order, then line order
    pub tasks: Vec<TaskRecord>,

    /// Files that could not be read
    pub skipped: Vec<Skipped>,
}

/// Collects up to `max_tasks` tasks from `files`
///
/// Invalid UTF-8 is replaced rather than rejected. Unreadable files are
/// recorded in the report and contribute no tasks.
pub fn harvest_tasks(root: &Path, files: &[FileRecord], config: &CodexConfig) -> HarvestReport {
    let matcher = config.task_matcher();
    let cap = config.max_tasks;
    let mut report = HarvestReport::default();

    if cap == 0 {
        return report;
    }

    for file in files {
        let path = root.join(&file.rel_path);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                report.skipped.push(Skipped {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        for (idx, line) in text_lines(&content).enumerate() {
            let text = line.trim();
            let Some(kind) = matcher.classify(text) else {
                continue;
            };

            report.tasks.push(TaskRecord {
                rel_path: file.rel_path.clone(),
                line: idx + 1,
                text: text.to_string(),
                kind,
            });

            if report.tasks.len() >= cap {
                return report;
            }
        }
    }

    report
}

/// Splits on `\r\n`, `\n` or a lone `\r`, each counting as one break
fn text_lines(content: &str) -> impl Iterator<Item = &str> {
    let bytes = content.as_bytes();
    let mut pos = 0;

    std::iter::from_fn(move || {
        if pos >= bytes.len() {
            return None;
        }

        let start = pos;
        while pos < bytes.len() {
            match bytes[pos] {
                b'\n' => {
                    pos += 1;
                    return Some(&content[start..pos - 1]);
                }
                b'\r' => {
                    let end = pos;
                    pos += if bytes.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
                    return Some(&content[start..end]);
                }
                _ => pos += 1,
            }
        }

        Some(&content[start..])
    })
}
