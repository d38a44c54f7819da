//! README file access
//!
//! The README is read whole and overwritten whole. There is no temp file or
//! backup: an interrupted write can leave it truncated.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::{placeholder_readme, splice_section};

pub const README_FILE_NAME: &str = "README.md";

/// The README at the vault root
pub struct ReadmeFile {
    path: PathBuf,
}

impl ReadmeFile {
    pub fn for_vault(vault_root: &Path) -> Self {
        Self {
            path: vault_root.join(README_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the README, or `None` if it does not exist
    pub fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read README: {}", self.path.display())),
        }
    }

    /// Writes a placeholder README if none exists, returning the current text
    /// and whether it was created
    pub fn ensure(&self, title: &str, marker: &str) -> Result<(String, bool)> {
        if let Some(content) = self.read()? {
            return Ok((content, false));
        }

        let content = placeholder_readme(title, marker);
        self.write(&content)?;
        Ok((content, true))
    }

    pub fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write README: {}", self.path.display()))
    }

    /// Splices `block` into the README after `marker` and writes it back,
    /// returning true if a placeholder had to be created first
    pub fn merge(&self, title: &str, marker: &str, block: &str) -> Result<bool> {
        let (current, created) = self.ensure(title, marker)?;
        let merged = splice_section(&current, marker, block);
        self.write(&merged)?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MARKER: &str = "## Generated";

    #[test]
    fn ensure_creates_placeholder_once() {
        let dir = TempDir::new().unwrap();
        let readme = ReadmeFile::for_vault(dir.path());

        let (content, created) = readme.ensure("Notes", MARKER).unwrap();
        assert!(created);
        assert!(content.starts_with("# Notes\n"));
        assert!(content.contains(MARKER));

        let (_, created) = readme.ensure("Notes", MARKER).unwrap();
        assert!(!created);
    }

    #[test]
    fn merge_into_missing_readme() {
        let dir = TempDir::new().unwrap();
        let readme = ReadmeFile::for_vault(dir.path());

        assert!(readme.merge("Notes", MARKER, "block one").unwrap());

        let content = fs::read_to_string(readme.path()).unwrap();
        assert_eq!(content, "# Notes\n\n## Generated\n\nblock one\n");
    }

    #[test]
    fn merge_preserves_hand_written_prefix() {
        let dir = TempDir::new().unwrap();
        let readme = ReadmeFile::for_vault(dir.path());
        fs::write(readme.path(), "# Mine\n\nKeep me.\n\n## Generated\n\nstale\n").unwrap();

        assert!(!readme.merge("Ignored", MARKER, "fresh").unwrap());

        let content = fs::read_to_string(readme.path()).unwrap();
        assert_eq!(content, "# Mine\n\nKeep me.\n\n## Generated\n\nfresh\n");
    }

    #[test]
    fn merge_appends_without_marker() {
        let dir = TempDir::new().unwrap();
        let readme = ReadmeFile::for_vault(dir.path());
        fs::write(readme.path(), "# Mine\n\nNo marker here.\n").unwrap();

        readme.merge("Ignored", MARKER, "fresh").unwrap();

        let content = fs::read_to_string(readme.path()).unwrap();
        assert_eq!(content, "# Mine\n\nNo marker here.\n\n## Generated\n\nfresh\n");
    }
}
