//! Application state management
//!
//! The catalog and filter criteria are owned by a `Session`, which is the
//! single writer of the criteria. Every user edit enters as one
//! `FilterEvent`, is applied completely, and the derived view is recomputed
//! before anything reads it again.

mod filters;
mod threshold;
mod ui;

pub use filters::{FilterCriteria, FilterEvent, ResolutionBin};
pub use threshold::{ThresholdEvent, ThresholdPair};
pub use ui::UiState;

use crate::config::AppConfig;
use crate::data::{Catalog, RejectedRecord, SurveyRecord, export};
use crate::engine::{self, AxisRange, RenderData};

/// Everything derived from the catalog for the current criteria
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub axis: AxisRange,
    pub render: RenderData,
}

impl FilteredView {
    fn compute(catalog: &Catalog, criteria: &FilterCriteria) -> Self {
        profiling::scope!("FilteredView::compute");
        let visible = engine::filter_surveys(catalog, criteria);
        Self {
            axis: engine::axis_range(&visible),
            render: engine::assemble(&visible),
        }
    }

    pub fn visible_count(&self) -> usize {
        self.render.points.len()
    }
}

/// The immutable catalog plus the criteria currently applied to it
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    criteria: FilterCriteria,
    view: FilteredView,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        let criteria = FilterCriteria::default();
        let view = FilteredView::compute(&catalog, &criteria);
        Self {
            catalog,
            criteria,
            view,
        }
    }

    /// Apply one user edit; recomputes the view only if the criteria changed
    pub fn apply(&mut self, event: FilterEvent) -> bool {
        let changed = self.criteria.apply(event);
        if changed {
            self.view = FilteredView::compute(&self.catalog, &self.criteria);
        }
        changed
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn threshold(&self) -> ThresholdPair {
        self.criteria.threshold.pair()
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Visible surveys in plot (wavelength band) order
    #[cfg(test)]
    pub fn visible(&self) -> Vec<&SurveyRecord> {
        engine::filter_surveys(&self.catalog, &self.criteria)
    }

    /// Visible surveys in catalog order, for export
    pub fn export_rows(&self) -> Vec<&SurveyRecord> {
        export::export_rows(&self.catalog, &self.criteria)
    }

    pub fn find(&self, survey: &str) -> Option<&SurveyRecord> {
        self.catalog.records().iter().find(|r| r.survey == survey)
    }
}

/// Main application state container
#[derive(Default)]
pub struct AppState {
    /// Catalog plus filter criteria
    pub session: Session,

    /// Display settings
    pub config: AppConfig,

    /// Survey files skipped during the last load
    pub rejected: Vec<RejectedRecord>,

    /// UI interaction state
    pub ui: UiState,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Session::default(),
            config,
            rejected: Vec::new(),
            ui: UiState::new(),
        }
    }

    /// Check if a catalog with at least one survey is loaded
    pub fn has_data(&self) -> bool {
        !self.session.catalog().is_empty()
    }

    /// Replace the catalog; criteria return to their defaults
    pub fn set_catalog(&mut self, catalog: Catalog, rejected: Vec<RejectedRecord>) {
        self.session = Session::new(catalog);
        self.rejected = rejected;
        self.ui.clear_selection();
        self.ui.linear_text.clear();
        self.ui.reset_bounds = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::tests::sample;
    use crate::data::{SurveyStatus, WavelengthBand};
    use crate::error::RecordError;
    use std::path::PathBuf;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            sample("Complete", "VLT", WavelengthBand::Radio, SurveyStatus::Complete, 100.0, 50_000, 1000.0),
            sample("Ongoing", "Mayall", WavelengthBand::Optical, SurveyStatus::Ongoing, 14000.0, 40_000_000, 3000.0),
            sample("Proposed", "VLT", WavelengthBand::Ultraviolet, SurveyStatus::Proposed, 10.0, 2_000, 200.0),
        ])
    }

    fn visible_names(session: &Session) -> Vec<String> {
        session.visible().iter().map(|r| r.survey.clone()).collect()
    }

    #[test]
    fn test_end_to_end_status_filter() {
        let mut session = Session::new(catalog());
        session.apply(FilterEvent::Threshold(ThresholdEvent::LinearEdited(Some(1000))));
        session.apply(FilterEvent::SetStatus(SurveyStatus::Proposed, false));
        session.apply(FilterEvent::SetStatus(SurveyStatus::Special, false));

        assert_eq!(visible_names(&session), vec!["Ongoing", "Complete"]);
        assert_eq!(session.view().visible_count(), 2);
        let exported: Vec<&str> = session.export_rows().iter().map(|r| r.survey.as_str()).collect();
        assert_eq!(exported, vec!["Complete", "Ongoing"]);
    }

    #[test]
    fn test_view_follows_events() {
        let mut session = Session::new(catalog());
        // Default threshold of 10^4 hides "Proposed"
        assert_eq!(session.view().visible_count(), 2);

        assert!(session.apply(FilterEvent::Threshold(ThresholdEvent::LogEdited(3.0))));
        assert_eq!(session.threshold().linear, 1000);
        assert_eq!(session.view().visible_count(), 3);

        assert!(session.apply(FilterEvent::SetFacility("VLT".to_string(), true)));
        let names: Vec<&str> = session
            .view()
            .render
            .points
            .iter()
            .map(|p| p.detail.survey.as_str())
            .collect();
        assert_eq!(names, vec!["Proposed", "Complete"]);
    }

    #[test]
    fn test_empty_view_uses_default_axes() {
        let mut session = Session::new(catalog());
        for status in SurveyStatus::ALL {
            session.apply(FilterEvent::SetStatus(status, false));
        }
        assert_eq!(session.view().visible_count(), 0);
        assert_eq!(session.view().axis, AxisRange::default());
        assert_eq!(session.view().render.reference_curves.len(), 6);
    }

    #[test]
    fn test_noop_event_keeps_view() {
        let mut session = Session::new(catalog());
        let before = session.view().clone();
        assert!(!session.apply(FilterEvent::Threshold(ThresholdEvent::LinearEdited(Some(-5)))));
        assert_eq!(session.view(), &before);
        assert_eq!(session.threshold().linear, 10_000);
    }

    #[test]
    fn test_set_catalog_resets() {
        let mut state = AppState::new(AppConfig::default());
        assert!(!state.has_data());
        state.ui.selected_survey = Some("Old".to_string());

        let rejected = vec![RejectedRecord {
            path: PathBuf::from("bad.json"),
            error: RecordError::MissingField("Area"),
        }];
        state.set_catalog(catalog(), rejected);

        assert!(state.has_data());
        assert_eq!(state.rejected.len(), 1);
        assert_eq!(state.ui.selected_survey, None);
        assert!(state.session.find("Ongoing").is_some());
        assert_eq!(state.session.criteria(), &FilterCriteria::default());
    }
}
