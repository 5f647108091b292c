//! Pure derivations from the catalog and the current filter criteria
//!
//! Nothing here mutates the catalog or holds state between calls.

pub mod axis;
pub mod filter;
pub mod links;
pub mod render;

pub use axis::{AxisRange, axis_range};
pub use filter::filter_surveys;
pub use links::reference_url;
pub use render::{RenderData, SurveyPoint, assemble, format_count};
