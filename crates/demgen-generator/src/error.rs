//! Error type for generator operations.

use demgen_core::ConfigError;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Configuration rejected before generation started
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A batch worker thread panicked
    #[error("Batch worker {0} panicked")]
    WorkerPanicked(usize),
}
