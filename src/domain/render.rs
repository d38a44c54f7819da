//! Markdown rendering for the codex section
//!
//! Rendering is a pure function of its inputs plus a [`Clock`], so tests can
//! pin the "Last generated" line and compare whole documents.

use chrono::{DateTime, Utc};

use super::record::{FileRecord, Grouping, TaskRecord, ROOT_GROUP};

/// Top-level folders that hold tooling rather than notes
pub const INFRA_FOLDERS: &[&str] = &["tools", ".github", ".git", "__pycache__", "node_modules"];

/// Files listed per module
pub const MODULE_FILE_LIMIT: usize = 8;

const QUICK_START: &[&str] = &[
    "- Add new notes anywhere under a module folder.",
    "- Commit/push → CI regenerates this Codex automatically.",
    "- Or run locally: `codex` from anywhere inside the vault.",
];

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The subset of vault configuration the renderer reads
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings<'a> {
    pub title: &'a str,
    pub max_recent_files: usize,
}

/// Formats a markdown link to a file, using its basename as text
pub fn md_link(rel_path: &str) -> String {
    let name = rel_path.rsplit('/').next().unwrap_or(rel_path);
    format!("[{}]({})", name, rel_path)
}

/// Renders the generated block that follows the marker
pub fn render_section(
    settings: RenderSettings<'_>,
    files: &[FileRecord],
    tasks: &[TaskRecord],
    clock: &dyn Clock,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {} — Codex Snapshot", settings.title));
    lines.push(String::new());
    lines.push(format!(
        "**Last generated:** {}",
        clock.now().format("%Y-%m-%d %H:%M UTC")
    ));
    lines.push(String::new());

    lines.push("#### 🔥 Recently Updated".to_string());
    let recent = &files[..files.len().min(settings.max_recent_files)];
    if recent.is_empty() {
        lines.push("- (No markdown files found yet.)".to_string());
    } else {
        for file in recent {
            lines.push(format!(
                "- {} — {} · {} bytes",
                md_link(&file.rel_path),
                file.modified.format("%Y-%m-%d"),
                file.size
            ));
        }
    }
    lines.push(String::new());

    lines.push("#### ✅ Open Tasks (harvested)".to_string());
    if tasks.is_empty() {
        lines.push("- (No TODO/FIXME or unchecked tasks found.)".to_string());
    } else {
        for task in tasks {
            lines.push(format!(
                "- [{}]({}): {}",
                task.file_name(),
                task.anchor(),
                task.text
            ));
        }
    }
    lines.push(String::new());

    lines.push("#### 🗂️ Modules".to_string());
    let grouping = Grouping::from_files(files);
    for (folder, group) in grouping.iter() {
        if folder == ROOT_GROUP || INFRA_FOLDERS.contains(&folder) {
            continue;
        }
        lines.push(format!("- **{}/**", folder));
        for file in group.iter().take(MODULE_FILE_LIMIT) {
            lines.push(format!("  - {}", md_link(&file.rel_path)));
        }
    }
    lines.push(String::new());

    lines.push("#### 🧭 Quick Start".to_string());
    lines.extend(QUICK_START.iter().map(|s| s.to_string()));
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskKind;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap())
    }

    fn settings() -> RenderSettings<'static> {
        RenderSettings {
            title: "Vault",
            max_recent_files: 15,
        }
    }

    fn task(rel: &str, line: usize, text: &str) -> TaskRecord {
        TaskRecord {
            rel_path: rel.to_string(),
            line,
            text: text.to_string(),
            kind: TaskKind::Marker,
        }
    }

    #[test]
    fn md_link_uses_basename() {
        assert_eq!(md_link("notes/deep/a.md"), "[a.md](notes/deep/a.md)");
        assert_eq!(md_link("top.md"), "[top.md](top.md)");
    }

    #[test]
    fn empty_vault_renders_placeholders() {
        let out = render_section(settings(), &[], &[], &clock());
        let expected = "\
### Vault — Codex Snapshot

**Last generated:** 2024-03-09 14:05 UTC

#### 🔥 Recently Updated
- (No markdown files found yet.)

#### ✅ Open Tasks (harvested)
- (No TODO/FIXME or unchecked tasks found.)

#### 🗂️ Modules

#### 🧭 Quick Start
- Add new notes anywhere under a module folder.
- Commit/push → CI regenerates this Codex automatically.
- Or run locally: `codex` from anywhere inside the vault.
";
        assert_eq!(out, expected);
    }

    #[test]
    fn renders_two_note_scenario() {
        // 2024-01-01T00:00:00Z and ten seconds later
        let t = 1_704_067_200;
        let files = vec![
            FileRecord::new("notes/b.md", at(t + 10), 50),
            FileRecord::new("notes/a.md", at(t), 100),
        ];
        let tasks = vec![
            task("notes/b.md", 1, "// TODO fix bug"),
            task("notes/a.md", 1, "- [ ] buy milk"),
        ];

        let out = render_section(settings(), &files, &tasks, &clock());

        assert!(out.contains(
            "#### 🔥 Recently Updated\n\
             - [b.md](notes/b.md) — 2024-01-01 · 50 bytes\n\
             - [a.md](notes/a.md) — 2024-01-01 · 100 bytes\n"
        ));
        assert!(out.contains(
            "#### ✅ Open Tasks (harvested)\n\
             - [b.md](notes/b.md#L1): // TODO fix bug\n\
             - [a.md](notes/a.md#L1): - [ ] buy milk\n"
        ));
        assert!(out.contains(
            "#### 🗂️ Modules\n\
             - **notes/**\n  - [b.md](notes/b.md)\n  - [a.md](notes/a.md)\n"
        ));
    }

    #[test]
    fn recent_list_respects_limit() {
        let files: Vec<_> = (0..5)
            .map(|i| FileRecord::new(format!("n{}.md", i), at(100 - i), 1))
            .collect();
        let out = render_section(
            RenderSettings {
                title: "Vault",
                max_recent_files: 2,
            },
            &files,
            &[],
            &clock(),
        );

        assert!(out.contains("[n0.md](n0.md)"));
        assert!(out.contains("[n1.md](n1.md)"));
        assert!(!out.contains("[n2.md](n2.md)"));
    }

    #[test]
    fn modules_skip_root_and_infra_and_cap_files() {
        let mut files = vec![
            FileRecord::new("top.md", at(1), 1),
            FileRecord::new("tools/codex.md", at(1), 1),
            FileRecord::new("node_modules/pkg/readme.md", at(1), 1),
        ];
        files.extend((0..10).map(|i| FileRecord::new(format!("zeta/{}.md", i), at(1), 1)));
        files.push(FileRecord::new("alpha/x.md", at(1), 1));

        let out = render_section(settings(), &files, &[], &clock());
        let modules = out
            .split("#### 🗂️ Modules\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap();

        assert!(!modules.contains("(root)"));
        assert!(!modules.contains("tools/"));
        assert!(!modules.contains("node_modules/"));
        assert!(modules.find("**alpha/**").unwrap() < modules.find("**zeta/**").unwrap());
        assert_eq!(modules.matches("](zeta/").count(), MODULE_FILE_LIMIT);
    }

    #[test]
    fn title_is_used_in_heading() {
        let out = render_section(
            RenderSettings {
                title: "Garden",
                max_recent_files: 15,
            },
            &[],
            &[],
            &clock(),
        );
        assert!(out.starts_with("### Garden — Codex Snapshot\n"));
    }
}
