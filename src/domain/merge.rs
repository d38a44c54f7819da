//! Splicing the generated codex into README text
//!
//! Everything before the first occurrence of the marker is hand-authored and
//! kept verbatim (minus trailing whitespace). Everything from the marker
//! onward belongs to the generator and is replaced on every run.

/// README body used when the vault has none yet
pub fn placeholder_readme(title: &str, marker: &str) -> String {
    format!("# {}\n\n{}\n\n(Placeholder)\n", title, marker)
}

/// Replaces the marker and everything after it with `marker` + `block`
///
/// When the marker is absent the block is appended and the existing text is
/// kept in full. The result always ends with a single newline and contains
/// the marker exactly once at the splice point.
pub fn splice_section(readme: &str, marker: &str, block: &str) -> String {
    let prefix = match readme.find(marker) {
        Some(idx) => &readme[..idx],
        None => readme,
    }
    .trim_end();

    let mut out = String::with_capacity(prefix.len() + marker.len() + block.len() + 8);
    if !prefix.is_empty() {
        out.push_str(prefix);
        out.push_str("\n\n");
    }
    out.push_str(marker);
    out.push_str("\n\n");
    out.push_str(block.trim_end());
    out.push('\n');
    out
}
