//! Demand series generation for demgen.
//!
//! This crate turns a [`DemGenConfig`](demgen_core::DemGenConfig) into a
//! dated series, and a [`MassGenConfig`](demgen_core::MassGenConfig) into a
//! batch of independently sampled items. All randomness flows through an
//! injected RNG, so a seed reproduces a run exactly.
//!
//! # Architecture
//!
//! ```text
//! DemGenConfig
//!      │
//!      ▼
//! generate_date_range ──► points (value 0)
//!                            │
//!                            ▼
//!   base → trend → patterns → seasonality → markers → realism → overrides
//!                            │
//!                            ▼
//!                   Vec<TimeSeriesPoint>
//!
//! MassGenConfig
//!      │
//!      ▼
//! BatchGenerator ──► ItemSynthesizer ──► pipeline ──► GeneratedItem × N
//! ```
//!
//! # Example
//!
//! ```rust
//! use demgen_core::DemGenConfig;
//! use demgen_generator::DemandGenerator;
//!
//! let config = DemGenConfig::from_yaml(r#"
//! time:
//!   start_date: 2024-01-01
//!   period_count: 90
//! demand:
//!   average_daily: 120
//!   growth_rate: 5
//! "#).unwrap();
//!
//! let mut generator = DemandGenerator::new(Some(42));
//! let series = generator.generate(&config).unwrap();
//! assert_eq!(series.len(), 90);
//! ```

pub mod batch;
pub mod dates;
pub mod error;
pub mod ids;
pub mod pipeline;
pub mod resolver;
pub mod stages;
pub mod synthesizer;
pub mod triangular;

// Re-exports for convenience
pub use batch::BatchGenerator;
pub use dates::{aligned_start, generate_date_range};
pub use error::GeneratorError;
pub use pipeline::{generate, DemandGenerator};
pub use resolver::{ConfigResolver, EffectiveConfig};
pub use stages::Stage;
pub use synthesizer::ItemSynthesizer;
