//! Reusable UI widgets for SurveyOxide

mod filter_controls;
mod threshold_input;

pub use filter_controls::{FacilityPicker, ResolutionFilter, StatusFilter};
pub use threshold_input::ThresholdInput;
