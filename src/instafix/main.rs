//! # Instafix CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/instafix/cli/`, and
//! this file only invokes `cli::run()` and turns its outcome into an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - One-shot command handlers (commands.rs)                  │
//! │  - Interactive session loop (session.rs)                    │
//! │  - Card and list rendering (render.rs, styles.rs)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (instafix::controller and below)                   │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG` or pass `--verbose`.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
