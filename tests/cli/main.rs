//! Command-level integration tests.
//!
//! These tests drive the command handlers end to end: load a fixture
//! configuration, generate with a fixed seed, export to a temporary file
//! and read the export back.

mod config_cli;
mod generate_cli;
mod mass_cli;

use demgen_export::{ExportArgs, ExportFormat};
use std::path::{Path, PathBuf};

pub const SEED: u64 = 42;

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn export_to(path: &Path, format: ExportFormat) -> ExportArgs {
    ExportArgs {
        format,
        output: Some(path.to_path_buf()),
    }
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("demgen=debug,demgen_generator=info")
        .try_init()
        .ok();
}
