//! Filter criteria for narrowing the survey catalog

use crate::data::{SurveyRecord, SurveyStatus};
use crate::state::threshold::{ThresholdEvent, ThresholdSync};
use std::collections::BTreeSet;

/// Named spectral-resolution bins offered by the resolution filter.
///
/// Each bin is half-open `[lo, hi)`; the lowest bin is unbounded below.
/// Resolutions of 5500 and above fall in no bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResolutionBin {
    Below500,
    From500To1500,
    From1500To2500,
    From2500To3500,
    From3500To5500,
}

impl ResolutionBin {
    pub const ALL: [ResolutionBin; 5] = [
        ResolutionBin::Below500,
        ResolutionBin::From500To1500,
        ResolutionBin::From1500To2500,
        ResolutionBin::From2500To3500,
        ResolutionBin::From3500To5500,
    ];

    pub fn bounds(self) -> (f64, f64) {
        match self {
            ResolutionBin::Below500 => (f64::NEG_INFINITY, 500.0),
            ResolutionBin::From500To1500 => (500.0, 1500.0),
            ResolutionBin::From1500To2500 => (1500.0, 2500.0),
            ResolutionBin::From2500To3500 => (2500.0, 3500.0),
            ResolutionBin::From3500To5500 => (3500.0, 5500.0),
        }
    }

    pub fn contains(self, resolution: f64) -> bool {
        let (lo, hi) = self.bounds();
        resolution >= lo && resolution < hi
    }

    pub fn label(self) -> &'static str {
        match self {
            ResolutionBin::Below500 => "<500",
            ResolutionBin::From500To1500 => "500-1500",
            ResolutionBin::From1500To2500 => "1500-2500",
            ResolutionBin::From2500To3500 => "2500-3500",
            ResolutionBin::From3500To5500 => "3500-5500",
        }
    }
}

/// Current values of every filter control.
///
/// Empty-set semantics are deliberately asymmetric: no selected status
/// matches nothing, while no selected facility or resolution bin means that
/// clause does not restrict.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub statuses: BTreeSet<SurveyStatus>,
    pub facilities: BTreeSet<String>,
    pub threshold: ThresholdSync,
    pub resolution_bins: BTreeSet<ResolutionBin>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            statuses: SurveyStatus::ALL.into_iter().collect(),
            facilities: BTreeSet::new(),
            threshold: ThresholdSync::default(),
            resolution_bins: ResolutionBin::ALL.into_iter().collect(),
        }
    }
}

impl FilterCriteria {
    /// Restore every control to its default
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn min_nspec(&self) -> u64 {
        self.threshold.min_nspec()
    }

    /// True when `record` passes all four clauses
    pub fn matches(&self, record: &SurveyRecord) -> bool {
        self.statuses.contains(&record.status)
            && (self.facilities.is_empty() || self.facilities.contains(&record.facility))
            && record.nspec >= self.min_nspec()
            && (self.resolution_bins.is_empty()
                || self
                    .resolution_bins
                    .iter()
                    .any(|bin| bin.contains(record.resolution)))
    }

    /// Check if any control differs from its default
    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }

    /// Apply one user edit. Returns true if the criteria changed.
    pub fn apply(&mut self, event: FilterEvent) -> bool {
        let before = self.clone();
        match event {
            FilterEvent::SetStatus(status, on) => set_member(&mut self.statuses, status, on),
            FilterEvent::SetFacility(facility, on) => {
                set_member(&mut self.facilities, facility, on)
            }
            FilterEvent::ClearFacilities => self.facilities.clear(),
            FilterEvent::SetResolutionBin(bin, on) => {
                set_member(&mut self.resolution_bins, bin, on)
            }
            FilterEvent::Threshold(edit) => {
                self.threshold.apply(edit);
            }
            FilterEvent::Reset => self.clear(),
        }
        *self != before
    }
}

fn set_member<T: Ord>(set: &mut BTreeSet<T>, value: T, on: bool) {
    if on {
        set.insert(value);
    } else {
        set.remove(&value);
    }
}

/// A single user interaction with the filter controls
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    SetStatus(SurveyStatus, bool),
    SetFacility(String, bool),
    ClearFacilities,
    SetResolutionBin(ResolutionBin, bool),
    Threshold(ThresholdEvent),
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WavelengthBand;
    use crate::data::record::tests::sample;

    fn record_with_resolution(resolution: f64) -> SurveyRecord {
        sample(
            "R",
            "VLT",
            WavelengthBand::Optical,
            SurveyStatus::Complete,
            10.0,
            50_000,
            resolution,
        )
    }

    fn only_bin(bin: ResolutionBin) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        criteria.resolution_bins = [bin].into_iter().collect();
        criteria
    }

    #[test]
    fn test_defaults() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.statuses.len(), 4);
        assert!(criteria.facilities.is_empty());
        assert_eq!(criteria.min_nspec(), 10_000);
        assert_eq!(criteria.resolution_bins.len(), 5);
        assert!(!criteria.has_active_filters());
    }

    #[test]
    fn test_resolution_bin_edges() {
        let edge = record_with_resolution(1500.0);
        assert!(!only_bin(ResolutionBin::Below500).matches(&edge));
        assert!(!only_bin(ResolutionBin::From500To1500).matches(&edge));
        assert!(only_bin(ResolutionBin::From1500To2500).matches(&edge));

        let below = record_with_resolution(1499.0);
        assert!(only_bin(ResolutionBin::From500To1500).matches(&below));

        let lower_edge = record_with_resolution(500.0);
        assert!(!only_bin(ResolutionBin::Below500).matches(&lower_edge));
        assert!(only_bin(ResolutionBin::From500To1500).matches(&lower_edge));

        assert!(only_bin(ResolutionBin::Below500).matches(&record_with_resolution(12.0)));
    }

    #[test]
    fn test_high_resolution_only_without_restriction() {
        let high = record_with_resolution(20_000.0);
        assert!(!FilterCriteria::default().matches(&high));
        assert!(!only_bin(ResolutionBin::From3500To5500).matches(&high));

        let mut unrestricted = FilterCriteria::default();
        unrestricted.resolution_bins.clear();
        assert!(unrestricted.matches(&high));
        assert!(!only_bin(ResolutionBin::From3500To5500).matches(&record_with_resolution(5500.0)));
    }

    #[test]
    fn test_empty_status_matches_nothing() {
        let mut criteria = FilterCriteria::default();
        criteria.statuses.clear();
        assert!(!criteria.matches(&record_with_resolution(1000.0)));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(FilterEvent::Threshold(ThresholdEvent::LinearEdited(Some(50_000))));
        assert!(criteria.matches(&record_with_resolution(1000.0)));
        criteria.apply(FilterEvent::Threshold(ThresholdEvent::LinearEdited(Some(50_001))));
        assert!(!criteria.matches(&record_with_resolution(1000.0)));
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut criteria = FilterCriteria::default();
        assert!(!criteria.apply(FilterEvent::SetStatus(SurveyStatus::Ongoing, true)));
        assert!(criteria.apply(FilterEvent::SetStatus(SurveyStatus::Ongoing, false)));
        assert!(criteria.apply(FilterEvent::SetFacility("VLT".to_string(), true)));
        assert!(criteria.has_active_filters());
        assert!(criteria.apply(FilterEvent::ClearFacilities));
        assert!(!criteria.apply(FilterEvent::Threshold(ThresholdEvent::LinearEdited(None))));
        assert!(criteria.apply(FilterEvent::Reset));
        assert_eq!(criteria, FilterCriteria::default());
    }
}
