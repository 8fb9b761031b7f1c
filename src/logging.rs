//! Tracing setup
//!
//! The TUI owns the terminal, so logs go to a file when one is given. Without a
//! file only warnings reach stderr, and those are emitted before the TUI starts.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const FILE_FILTER: &str = "wordle_game=info";
const STDERR_FILTER: &str = "warn";

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sink {
    File,
    Stderr,
    /// Stderr while the TUI draws on the alternate screen
    TerminalUi,
}

/// Filter directives for a sink, given the value of `RUST_LOG`
///
/// The TUI sink ignores `RUST_LOG`: anything louder than warnings would draw over
/// the game screen.
fn directives(sink: Sink, rust_log: Option<String>) -> String {
    match (sink, rust_log) {
        (Sink::TerminalUi, _) => STDERR_FILTER.to_string(),
        (_, Some(env)) if !env.trim().is_empty() => env,
        (Sink::File, _) => FILE_FILTER.to_string(),
        (Sink::Stderr, _) => STDERR_FILTER.to_string(),
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default filter, except when logging to stderr while
/// `owns_terminal` is set.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is already set.
pub fn init_tracing(log_file: Option<&Path>, owns_terminal: bool) -> Result<()> {
    let filter = |sink| {
        EnvFilter::new(directives(sink, std::env::var(EnvFilter::DEFAULT_ENV).ok()))
    };

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter(Sink::File))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => {
            let sink = if owns_terminal {
                Sink::TerminalUi
            } else {
                Sink::Stderr
            };

            tracing_subscriber::fmt()
                .with_env_filter(filter(sink))
                .with_writer(std::io::stderr)
                .try_init()
        }
    };

    installed
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing tracing subscriber")
}
