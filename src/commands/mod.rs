//! Command handlers.
//!
//! Each submodule owns the clap arguments of one subcommand and the async
//! function that runs it. Handlers return `anyhow::Result` and attach
//! context to every fallible step.

pub mod config;
pub mod generate;
pub mod mass;

use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Whether `path` names a JSON file.
pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Write `content` to `path`, or to stdout when `path` is `None`.
pub(crate) fn write_text(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")
        }
    }
}
