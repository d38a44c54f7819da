//! The generate run: scan, harvest, render, merge

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use super::output::Output;
use crate::domain::{render_section, splice_section, placeholder_readme, Clock};
use crate::storage::{Skipped, Vault};

/// What a run did, printed as JSON with `--format json`
#[derive(Debug, Serialize)]
pub struct GenerateSummary {
    pub files_scanned: usize,
    pub tasks_found: usize,
    pub readme: String,
    pub written: bool,

    /// Merged README, only in JSON dry runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Regenerates the codex section of the vault's README
///
/// With `dry_run` the merged README is printed instead of written, and a
/// missing README is not created.
pub fn run(
    output: &Output,
    root: Option<&Path>,
    dry_run: bool,
    clock: &dyn Clock,
) -> Result<GenerateSummary> {
    let vault = Vault::resolve(root)?;
    let config = vault.config();
    output.verbose_ctx("vault", &format!("Using vault root: {}", vault.root().display()));

    let scan = vault.scan();
    report_skipped(output, "scan", &scan.skipped);

    let harvest = vault.harvest(&scan.files);
    report_skipped(output, "harvest", &harvest.skipped);

    output.status(&format!(
        "files scanned: {} | tasks found: {}",
        scan.files.len(),
        harvest.tasks.len()
    ));

    let section = render_section(config.render_settings(), &scan.files, &harvest.tasks, clock);
    let readme = vault.readme();

    let mut preview = None;
    if dry_run {
        let current = readme
            .read()?
            .unwrap_or_else(|| placeholder_readme(&config.title, config.marker()));
        let merged = splice_section(&current, config.marker(), &section);
        if output.is_json() {
            preview = Some(merged);
        } else {
            output.document(&merged);
        }
    } else {
        if readme.merge(&config.title, config.marker(), &section)? {
            output.verbose_ctx("readme", "Created placeholder README");
        }
        output.verbose_ctx("readme", &format!("Wrote {}", readme.path().display()));
    }

    Ok(GenerateSummary {
        files_scanned: scan.files.len(),
        tasks_found: harvest.tasks.len(),
        readme: readme.path().display().to_string(),
        written: !dry_run,
        preview,
    })
}

fn report_skipped(output: &Output, context: &str, skipped: &[Skipped]) {
    if !output.is_verbose() {
        return;
    }
    for entry in skipped {
        output.verbose_ctx(
            context,
            &format!("Skipped {}: {}", entry.path.display(), entry.reason),
        );
    }
}
