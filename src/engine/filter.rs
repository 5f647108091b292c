use crate::data::{Catalog, SurveyRecord};
use crate::state::FilterCriteria;

/// Surveys passing `criteria`, in plot order.
///
/// Sorted by wavelength band so that legend groups and colours follow the
/// band sequence; the sort is stable, so surveys within a band keep catalog
/// order. An empty result is a normal outcome.
pub fn filter_surveys<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a SurveyRecord> {
    profiling::scope!("filter_surveys");

    let mut visible: Vec<&SurveyRecord> = catalog
        .records()
        .iter()
        .filter(|record| criteria.matches(record))
        .collect();
    visible.sort_by_key(|record| record.band.ordinal());

    log::debug!("{} of {} surveys visible", visible.len(), catalog.len());
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::tests::sample;
    use crate::data::{SurveyStatus, WavelengthBand};
    use crate::state::ResolutionBin;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            sample("Radio1", "VLA", WavelengthBand::Radio, SurveyStatus::Complete, 100.0, 20_000, 200.0),
            sample("Opt1", "VLT", WavelengthBand::Optical, SurveyStatus::Ongoing, 10.0, 50_000, 2000.0),
            sample("Uv1", "HST", WavelengthBand::Ultraviolet, SurveyStatus::Proposed, 1.0, 15_000, 4000.0),
            sample("Opt2", "Mayall", WavelengthBand::Optical, SurveyStatus::Special, 14000.0, 40_000_000, 3000.0),
            sample("Tiny", "VLT", WavelengthBand::Blue, SurveyStatus::Complete, 0.1, 2_000, 1000.0),
        ])
    }

    fn names(records: &[&SurveyRecord]) -> Vec<String> {
        records.iter().map(|r| r.survey.clone()).collect()
    }

    #[test]
    fn test_sorted_by_band_stable() {
        let catalog = catalog();
        let visible = filter_surveys(&catalog, &FilterCriteria::default());
        // Tiny is below the default threshold of 10^4
        assert_eq!(names(&visible), vec!["Uv1", "Opt1", "Opt2", "Radio1"]);
    }

    #[test]
    fn test_idempotent() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.resolution_bins.remove(&ResolutionBin::From2500To3500);
        let first = filter_surveys(&catalog, &criteria);
        let second = filter_surveys(&catalog, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_status_set_empties_result() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        criteria.statuses.clear();
        criteria.resolution_bins.clear();
        criteria.threshold.on_log_changed(3.0);
        assert!(filter_surveys(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_empty_facility_set_is_unrestricted() {
        let catalog = catalog();
        let mut criteria = FilterCriteria::default();
        let unrestricted = filter_surveys(&catalog, &criteria).len();

        criteria.facilities.insert("VLT".to_string());
        assert_eq!(names(&filter_surveys(&catalog, &criteria)), vec!["Opt1"]);

        criteria.facilities.clear();
        assert_eq!(filter_surveys(&catalog, &criteria).len(), unrestricted);
    }

    #[test]
    fn test_status_scenario_excludes_proposed_only() {
        let catalog = Catalog::from_records(vec![
            sample("A", "VLT", WavelengthBand::Optical, SurveyStatus::Complete, 10.0, 5_000, 1000.0),
            sample("B", "VLT", WavelengthBand::Optical, SurveyStatus::Ongoing, 10.0, 5_000, 1000.0),
            sample("C", "VLT", WavelengthBand::Optical, SurveyStatus::Proposed, 10.0, 5_000, 1000.0),
        ]);
        let mut criteria = FilterCriteria::default();
        criteria.statuses = [SurveyStatus::Complete, SurveyStatus::Ongoing].into_iter().collect();
        criteria.threshold.on_linear_changed(Some(1000));

        assert_eq!(names(&filter_surveys(&catalog, &criteria)), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(filter_surveys(&catalog, &FilterCriteria::default()).is_empty());
    }
}
