//! Codex - regenerate the summary section of a notes vault README

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = vault_codex::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
