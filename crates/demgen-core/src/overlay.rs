//! Partial overrides for the segment-aware settings groups.
//!
//! A segment carries one optional patch per group. Resolving a date merges
//! the patch over the global settings: every field the patch sets wins,
//! every field it leaves unset falls through to the base. The merge is
//! total and shallow.

use crate::settings::{
    BusinessPatterns, DataType, DemandSettings, MonthlyPattern, RealismSettings, StoreHours,
    Volatility,
};
use serde::{Deserialize, Serialize};

/// Settings that can be merged with a partial override.
pub trait Overlay {
    /// Partial form of the settings; every field optional.
    type Patch;

    /// Return a copy of `self` with every field set in `patch` replaced.
    fn overlay(&self, patch: &Self::Patch) -> Self;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_daily: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<Volatility>,
}

impl Overlay for DemandSettings {
    type Patch = DemandPatch;

    fn overlay(&self, patch: &DemandPatch) -> Self {
        Self {
            average_daily: patch.average_daily.unwrap_or(self.average_daily),
            growth_rate: patch.growth_rate.unwrap_or(self.growth_rate),
            volatility: patch.volatility.unwrap_or(self.volatility),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_hours: Option<StoreHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekend_boost: Option<f64>,
    /// Replaces the whole flag list when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_patterns: Option<Vec<MonthlyPattern>>,
}

impl Overlay for BusinessPatterns {
    type Patch = PatternsPatch;

    fn overlay(&self, patch: &PatternsPatch) -> Self {
        Self {
            store_hours: patch.store_hours.unwrap_or(self.store_hours),
            weekend_boost: patch.weekend_boost.unwrap_or(self.weekend_boost),
            monthly_patterns: patch
                .monthly_patterns
                .clone()
                .unwrap_or_else(|| self.monthly_patterns.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealismPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_stockouts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
}

impl Overlay for RealismSettings {
    type Patch = RealismPatch;

    fn overlay(&self, patch: &RealismPatch) -> Self {
        Self {
            anomaly_rate: patch.anomaly_rate.unwrap_or(self.anomaly_rate),
            include_stockouts: patch.include_stockouts.unwrap_or(self.include_stockouts),
            data_type: patch.data_type.unwrap_or(self.data_type),
        }
    }
}

/// Merge an optional patch over a base.
pub fn overlay_opt<T: Overlay + Clone>(base: &T, patch: Option<&T::Patch>) -> T {
    match patch {
        Some(patch) => base.overlay(patch),
        None => base.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_is_identity() {
        let demand = DemandSettings {
            average_daily: 250.0,
            growth_rate: 12.0,
            volatility: Volatility::High,
        };
        assert_eq!(demand.overlay(&DemandPatch::default()), demand);

        let patterns = BusinessPatterns {
            weekend_boost: 0.4,
            monthly_patterns: vec![MonthlyPattern::EndSurge],
            ..Default::default()
        };
        assert_eq!(patterns.overlay(&PatternsPatch::default()), patterns);

        let realism = RealismSettings::default();
        assert_eq!(realism.overlay(&RealismPatch::default()), realism);
    }

    #[test]
    fn test_patch_fields_win() {
        let demand = DemandSettings::default();
        let merged = demand.overlay(&DemandPatch {
            average_daily: Some(40.0),
            volatility: Some(Volatility::None),
            ..Default::default()
        });

        assert_eq!(merged.average_daily, 40.0);
        assert_eq!(merged.volatility, Volatility::None);
        // Untouched field falls through
        assert_eq!(merged.growth_rate, demand.growth_rate);
    }

    #[test]
    fn test_pattern_list_replaced_not_merged() {
        let patterns = BusinessPatterns {
            monthly_patterns: vec![MonthlyPattern::EndSurge],
            ..Default::default()
        };
        let merged = patterns.overlay(&PatternsPatch {
            monthly_patterns: Some(vec![MonthlyPattern::MidSlump]),
            ..Default::default()
        });

        assert_eq!(merged.monthly_patterns, vec![MonthlyPattern::MidSlump]);
    }

    #[test]
    fn test_overlay_opt() {
        let realism = RealismSettings::default();
        assert_eq!(overlay_opt(&realism, None), realism);

        let patch = RealismPatch {
            anomaly_rate: Some(0.05),
            ..Default::default()
        };
        assert_eq!(overlay_opt(&realism, Some(&patch)).anomaly_rate, 0.05);
    }

    #[test]
    fn test_patch_yaml_omits_unset_fields() {
        let patch: DemandPatch = serde_yaml::from_str("volatility: medium").unwrap();
        assert_eq!(patch.volatility, Some(Volatility::Medium));
        assert_eq!(patch.average_daily, None);

        let yaml = serde_yaml::to_string(&patch).unwrap();
        assert!(!yaml.contains("average_daily"));
    }
}
