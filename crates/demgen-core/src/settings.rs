//! Settings groups that make up a single-series configuration.
//!
//! Each group deserializes with defaults for every missing field, so a
//! configuration file only has to name what it changes.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Time
// ============================================================================

/// Period length of the generated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Quarterly => write!(f, "quarterly"),
            Frequency::Yearly => write!(f, "yearly"),
        }
    }
}

/// Defines the date sequence of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSettings {
    /// First date before alignment
    pub start_date: NaiveDate,

    /// Number of periods to generate (at least 1)
    pub period_count: u32,

    /// Period length
    pub frequency: Frequency,

    /// Weekday to align weekly series to (0 = Sunday ... 6 = Saturday)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_day: Option<u32>,

    /// Day of month to align monthly series to (1-31)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_day: Option<u32>,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
            period_count: 365,
            frequency: Frequency::Daily,
            weekly_day: None,
            monthly_day: None,
        }
    }
}

// ============================================================================
// Demand
// ============================================================================

/// Categorical noise level applied to the base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Volatility {
    None,
    #[default]
    Low,
    Medium,
    High,
}

impl Volatility {
    /// Half-width `r` of the multiplicative noise band `[1 - r, 1 + r]`.
    pub fn noise_range(self) -> f64 {
        match self {
            Volatility::None => 0.0,
            Volatility::Low => 0.1,
            Volatility::Medium => 0.3,
            Volatility::High => 0.6,
        }
    }

    /// Map a continuous volatility factor (0-3 scale) onto the categories.
    pub fn from_factor(factor: f64) -> Self {
        if factor < 0.5 {
            Volatility::None
        } else if factor < 1.5 {
            Volatility::Low
        } else if factor < 2.5 {
            Volatility::Medium
        } else {
            Volatility::High
        }
    }

    /// Position of the category on the 0-3 factor scale.
    pub fn as_factor(self) -> f64 {
        match self {
            Volatility::None => 0.0,
            Volatility::Low => 1.0,
            Volatility::Medium => 2.0,
            Volatility::High => 3.0,
        }
    }
}

impl std::fmt::Display for Volatility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Volatility::None => write!(f, "none"),
            Volatility::Low => write!(f, "low"),
            Volatility::Medium => write!(f, "medium"),
            Volatility::High => write!(f, "high"),
        }
    }
}

/// Base demand level and its drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandSettings {
    /// Average volume per period
    pub average_daily: f64,

    /// Annualized growth in percent
    pub growth_rate: f64,

    /// Noise level
    pub volatility: Volatility,
}

impl Default for DemandSettings {
    fn default() -> Self {
        Self {
            average_daily: 100.0,
            growth_rate: 0.0,
            volatility: Volatility::Low,
        }
    }
}

// ============================================================================
// Business patterns
// ============================================================================

/// Opening hours tag. Carried for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StoreHours {
    #[default]
    #[serde(rename = "9-5")]
    NineToFive,
    #[serde(rename = "10-9")]
    TenToNine,
    #[serde(rename = "24-7")]
    AlwaysOpen,
}

/// Named intra-month demand shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyPattern {
    /// Last three days of the month sell 30% more
    EndSurge,
    /// Days 14-16 sell 30% less
    MidSlump,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessPatterns {
    pub store_hours: StoreHours,

    /// Extra weekend demand (0.5 = 50% boost)
    pub weekend_boost: f64,

    pub monthly_patterns: Vec<MonthlyPattern>,
}

impl BusinessPatterns {
    pub fn has(&self, pattern: MonthlyPattern) -> bool {
        self.monthly_patterns.contains(&pattern)
    }
}

impl Default for BusinessPatterns {
    fn default() -> Self {
        Self {
            store_hours: StoreHours::NineToFive,
            weekend_boost: 0.0,
            monthly_patterns: Vec::new(),
        }
    }
}

// ============================================================================
// Seasonality
// ============================================================================

/// A named one-off demand event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityEvent {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    /// First day of the event
    pub date: NaiveDate,

    /// Length in days (at least 1)
    #[serde(default = "default_event_duration")]
    pub duration: i64,

    /// Multiplier applied on every day of the event
    pub boost: f64,
}

fn default_event_duration() -> i64 {
    1
}

impl SeasonalityEvent {
    /// Last day covered by the event (inclusive), or `None` when it falls
    /// outside the representable calendar.
    pub fn end_date(&self) -> Option<NaiveDate> {
        let extra = u64::try_from(self.duration.checked_sub(1)?).ok()?;
        self.date.checked_add_days(Days::new(extra))
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.date && (date - self.date).num_days() < self.duration
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalitySettings {
    /// Legacy binary holiday months (1-12)
    pub holiday_months: Vec<u32>,

    /// Multiplier for legacy holiday months
    pub holiday_strength: f64,

    pub events: Vec<SeasonalityEvent>,

    /// Per-month multipliers. When present, even empty, the legacy holiday
    /// months are ignored entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_weights: Option<BTreeMap<u32, f64>>,
}

impl Default for SeasonalitySettings {
    fn default() -> Self {
        Self {
            holiday_months: Vec::new(),
            holiday_strength: 1.0,
            events: Vec::new(),
            monthly_weights: None,
        }
    }
}

// ============================================================================
// Realism
// ============================================================================

/// Numeric type of the output values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Integer,
    Decimal,
}

impl DataType {
    /// Round a value to this type's precision.
    pub fn format(self, value: f64) -> f64 {
        match self {
            DataType::Integer => value.round(),
            DataType::Decimal => (value * 100.0).round() / 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealismSettings {
    /// Probability of an anomaly per point (0-0.1 in practice)
    pub anomaly_rate: f64,

    /// Whether forced-zero stockouts may be injected
    pub include_stockouts: bool,

    pub data_type: DataType,
}

impl Default for RealismSettings {
    fn default() -> Self {
        Self {
            anomaly_rate: 0.0,
            include_stockouts: false,
            data_type: DataType::Integer,
        }
    }
}
