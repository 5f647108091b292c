//! Application-wide constants and default values
//!
//! Numeric limits for the threshold controls, plot window defaults and the
//! reference-curve family all live here so the engine and UI agree on them.

/// Minimum-sample threshold limits
pub mod threshold {
    /// Lower bound of the log-scale slider
    pub const LOG_MIN: f64 = 3.0;

    /// Upper bound of the log-scale slider
    pub const LOG_MAX: f64 = 8.0;

    /// Lower bound of the linear input
    pub const LINEAR_MIN: u64 = 1_000;

    /// Upper bound of the linear input
    pub const LINEAR_MAX: u64 = 100_000_000;

    /// Default minimum number of spectra (10^4)
    pub const DEFAULT_LOG: f64 = 4.0;
}

/// Catalog loading defaults
pub mod catalog {
    /// Spectral resolution assumed when a survey file omits it
    pub const DEFAULT_RESOLUTION: f64 = 1000.0;

    /// Extension of survey description files
    pub const SURVEY_FILE_EXTENSION: &str = "json";

    /// Default directory holding survey description files
    pub const DEFAULT_CATALOG_DIR: &str = "surveys";

    /// Facilities grouped as space-based in the facility picker
    pub const SPACE_BASED_FACILITIES: [&str; 3] = ["HST", "JWST", "Euclid"];
}

/// Plot window and reference curve defaults
pub mod plot {
    /// Area of the full celestial sphere in square degrees (4π sr)
    pub const FULL_SKY_AREA: f64 = 41_252.961_249_419_27;

    /// Smallest area sampled by the reference curves (deg²)
    pub const REFERENCE_AREA_MIN: f64 = 0.01;

    /// Number of log-spaced samples per reference curve
    pub const REFERENCE_SAMPLES: usize = 100;

    /// Total source counts drawn as constant-N reference curves
    pub const REFERENCE_TOTALS: [f64; 6] = [1e3, 1e4, 1e5, 1e6, 1e7, 1e8];

    /// Log10 axis window used when no survey is visible
    pub const DEFAULT_X_RANGE: [f64; 2] = [-1.2, 4.7];
    pub const DEFAULT_Y_RANGE: [f64; 2] = [-1.0, 5.2];

    /// Floor applied to both lower axis bounds
    pub const AXIS_FLOOR: f64 = -2.0;

    /// Ceilings applied to the upper axis bounds
    pub const X_CEILING: f64 = 4.7;
    pub const Y_CEILING: f64 = 5.2;

    /// Head room added above the largest value (dex)
    pub const UPPER_PADDING: f64 = 0.5;

    /// Marker radius for survey points
    pub const MARKER_RADIUS: f32 = 7.0;

    /// Tolerance for point selection (in normalized plot coordinates)
    pub const POINT_SELECT_TOLERANCE: f64 = 0.0004;
}

/// Export defaults
pub mod export {
    /// File name offered by the save dialog
    pub const DEFAULT_FILE_NAME: &str = "surveys_data.csv";
}

/// UI layout defaults
pub mod layout {
    /// Right panel (survey details) default width
    pub const DETAIL_PANEL_WIDTH: f32 = 320.0;

    /// Bottom panel (visible survey table) default height
    pub const TABLE_PANEL_HEIGHT: f32 = 220.0;

    /// Left panel (filter controls) default width
    pub const FILTER_PANEL_WIDTH: f32 = 300.0;
}

/// Configuration file paths
pub mod config {
    /// Configuration file name
    pub const CONFIG_FILE: &str = "survey-oxide.json";
}
