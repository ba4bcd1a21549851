//! demgen library
//!
//! Command handlers behind the `demgen` binary. The generation logic lives
//! in the workspace crates:
//!
//! - `demgen_core` - configuration model, loading and validation
//! - `demgen_generator` - date range, transformation pipeline and mass sampling
//! - `demgen_export` - CSV and JSON writers
//!
//! # CLI Usage
//!
//! ```bash
//! # Scaffold a configuration, then generate one series as CSV
//! demgen init single -o demand.yaml
//! demgen generate -c demand.yaml --seed 42 -o demand.csv
//!
//! # Derive a mass configuration and generate 500 items on 4 threads
//! demgen derive-mass -c demand.yaml -n 500 -o mass.yaml
//! demgen mass -c mass.yaml --workers 4 --format json -o batch.json
//!
//! # Record a manual edit
//! demgen set-override -c demand.yaml --date 2024-03-01 --value 0 --notes "Store closed"
//! ```

pub mod commands;

pub use commands::config::{ConfigKind, DeriveMassArgs, InitArgs, SetOverrideArgs};
pub use commands::generate::GenerateArgs;
pub use commands::mass::MassArgs;
