//! # Command-Line Interface
//!
//! ```bash
//! codex                 # discover the vault from the current directory
//! codex path/to/vault   # use this directory as the vault root
//! codex --dry-run       # print the merged README without writing it
//! ```
//!
//! ## Output Formats
//!
//! - `text` (default) - status line plus confirmation
//! - `json` - one summary object
//!
//! Use `--verbose` (or `CODEX_VERBOSE=true`) for debug output on stderr,
//! including every file skipped during the scan.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and regenerate the README.

mod app;
mod output;
mod generate;

pub use app::{Cli, run};
pub use generate::GenerateSummary;
pub use output::{Output, OutputFormat};
