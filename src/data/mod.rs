pub mod catalog;
pub mod export;
pub mod record;

// Re-export key types for convenience
pub use catalog::{Catalog, FacilityGroups, RejectedRecord};
pub use record::{SurveyRecord, SurveyStatus, WavelengthBand};
