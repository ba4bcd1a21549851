//! Core types for the demgen demand series generator.
//!
//! This crate provides the data model shared by the generator, the exporters
//! and the command-line binary:
//!
//! - [`DemGenConfig`] - Single-series configuration (the aggregate root)
//! - [`MassGenConfig`] - Distributions driving mass generation
//! - [`Overlay`] - Partial-override merging for segment-scoped settings
//! - [`TimeSeriesPoint`] / [`GeneratedItem`] - Generator output
//! - [`ConfigError`] - Every way a configuration can be rejected
//!
//! # Architecture
//!
//! ```text
//! demgen-core (this crate)
//!    │
//!    ├─── demgen-generator  (date range, pipeline, mass sampling)
//!    │
//!    └─── demgen-export     (CSV / JSON writers)
//! ```
//!
//! # Example
//!
//! ```rust
//! use demgen_core::{DemGenConfig, Volatility};
//!
//! let config = DemGenConfig::from_yaml(r#"
//! time:
//!   start_date: 2024-01-01
//!   period_count: 30
//! demand:
//!   average_daily: 80
//!   volatility: none
//! "#).unwrap();
//!
//! assert_eq!(config.demand.volatility, Volatility::None);
//! config.validate().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod mass;
pub mod overlay;
pub mod series;
pub mod settings;

// Re-exports for convenience
pub use config::{
    DataOverride, DemGenConfig, MarkerKind, SeasonalityMarker, SegmentPrecedence, TimeSegment,
};
pub use error::{parse_iso_date, ConfigError};
pub use mass::{Distribution, MassDemand, MassGenConfig, MassSeasonality};
pub use overlay::{overlay_opt, DemandPatch, Overlay, PatternsPatch, RealismPatch};
pub use series::{GeneratedItem, TimeSeriesPoint};
pub use settings::{
    BusinessPatterns, DataType, DemandSettings, Frequency, MonthlyPattern, RealismSettings,
    SeasonalityEvent, SeasonalitySettings, StoreHours, TimeSettings, Volatility,
};
