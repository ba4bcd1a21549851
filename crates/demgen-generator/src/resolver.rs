//! Per-date resolution of segment-scoped settings.

use chrono::NaiveDate;
use demgen_core::{
    overlay_opt, BusinessPatterns, DemGenConfig, DemandSettings, RealismSettings,
    SegmentPrecedence, TimeSegment,
};
use std::borrow::Cow;

/// Settings in force on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig<'a> {
    pub demand: Cow<'a, DemandSettings>,
    pub patterns: Cow<'a, BusinessPatterns>,
    pub realism: Cow<'a, RealismSettings>,
    pub segment: Option<&'a TimeSegment>,
}

/// Merges global settings with the segment active on a date.
///
/// Stateless: every call scans the segment list, and dates outside all
/// segments borrow the global settings without copying.
#[derive(Debug, Clone, Copy)]
pub struct ConfigResolver<'a> {
    config: &'a DemGenConfig,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(config: &'a DemGenConfig) -> Self {
        Self { config }
    }

    /// The segment whose inclusive interval contains `date`, chosen by the
    /// configured precedence when several overlap.
    pub fn active_segment(&self, date: NaiveDate) -> Option<&'a TimeSegment> {
        let mut matching = self.config.segments.iter().filter(|s| s.contains(date));
        match self.config.segment_precedence {
            SegmentPrecedence::First => matching.next(),
            SegmentPrecedence::Last => matching.last(),
        }
    }

    pub fn resolve(&self, date: NaiveDate) -> EffectiveConfig<'a> {
        let config = self.config;

        match self.active_segment(date) {
            Some(segment) => EffectiveConfig {
                demand: Cow::Owned(overlay_opt(&config.demand, segment.demand.as_ref())),
                patterns: Cow::Owned(overlay_opt(&config.patterns, segment.patterns.as_ref())),
                realism: Cow::Owned(overlay_opt(&config.realism, segment.realism.as_ref())),
                segment: Some(segment),
            },
            None => EffectiveConfig {
                demand: Cow::Borrowed(&config.demand),
                patterns: Cow::Borrowed(&config.patterns),
                realism: Cow::Borrowed(&config.realism),
                segment: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demgen_core::{DemandPatch, RealismPatch, Volatility};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn segment(name: &str, start: NaiveDate, end: NaiveDate, average: f64) -> TimeSegment {
        let mut segment = TimeSegment::new(name, start, end);
        segment.demand = Some(DemandPatch {
            average_daily: Some(average),
            ..Default::default()
        });
        segment
    }

    #[test]
    fn test_no_segment_borrows_globals() {
        let config = DemGenConfig::default();
        let resolved = ConfigResolver::new(&config).resolve(date(2024, 3, 1));

        assert!(resolved.segment.is_none());
        assert!(matches!(resolved.demand, Cow::Borrowed(_)));
        assert_eq!(*resolved.demand, config.demand);
    }

    #[test]
    fn test_segment_bounds_inclusive() {
        let mut config = DemGenConfig::default();
        config
            .segments
            .push(segment("Promo", date(2024, 2, 1), date(2024, 2, 10), 300.0));
        let resolver = ConfigResolver::new(&config);

        assert_eq!(resolver.resolve(date(2024, 1, 31)).demand.average_daily, 100.0);
        assert_eq!(resolver.resolve(date(2024, 2, 1)).demand.average_daily, 300.0);
        assert_eq!(resolver.resolve(date(2024, 2, 10)).demand.average_daily, 300.0);
        assert_eq!(resolver.resolve(date(2024, 2, 11)).demand.average_daily, 100.0);
    }

    #[test]
    fn test_partial_override_keeps_other_fields() {
        let mut config = DemGenConfig::default();
        config.demand.volatility = Volatility::High;
        let mut promo = segment("Promo", date(2024, 2, 1), date(2024, 2, 10), 300.0);
        promo.realism = Some(RealismPatch {
            anomaly_rate: Some(0.05),
            ..Default::default()
        });
        config.segments.push(promo);

        let resolved = ConfigResolver::new(&config).resolve(date(2024, 2, 5));
        assert_eq!(resolved.demand.average_daily, 300.0);
        assert_eq!(resolved.demand.volatility, Volatility::High);
        assert_eq!(resolved.realism.anomaly_rate, 0.05);
        assert_eq!(resolved.realism.data_type, config.realism.data_type);
        assert_eq!(*resolved.patterns, config.patterns);
    }

    #[test]
    fn test_overlap_first_match_wins_by_default() {
        let mut config = DemGenConfig::default();
        config
            .segments
            .push(segment("Wide", date(2024, 1, 1), date(2024, 12, 31), 10.0));
        config
            .segments
            .push(segment("Narrow", date(2024, 6, 1), date(2024, 6, 30), 20.0));

        let resolver = ConfigResolver::new(&config);
        let resolved = resolver.resolve(date(2024, 6, 15));
        assert_eq!(resolved.segment.unwrap().name, "Wide");
        assert_eq!(resolved.demand.average_daily, 10.0);
    }

    #[test]
    fn test_overlap_last_match_when_configured() {
        let mut config = DemGenConfig::default();
        config.segment_precedence = SegmentPrecedence::Last;
        config
            .segments
            .push(segment("Wide", date(2024, 1, 1), date(2024, 12, 31), 10.0));
        config
            .segments
            .push(segment("Narrow", date(2024, 6, 1), date(2024, 6, 30), 20.0));

        let resolver = ConfigResolver::new(&config);
        assert_eq!(
            resolver.resolve(date(2024, 6, 15)).segment.unwrap().name,
            "Narrow"
        );
        assert_eq!(
            resolver.resolve(date(2024, 7, 1)).segment.unwrap().name,
            "Wide"
        );
    }
}
