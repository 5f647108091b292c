//! UI interaction state

/// Transient widget state that is not part of the filter criteria
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Survey whose details are pinned in the side panel
    pub selected_survey: Option<String>,

    /// Index into the plotted points currently under the pointer
    pub hovered_point: Option<usize>,

    /// Search string typed into the facility picker
    pub facility_search: String,

    /// Edit buffer of the linear threshold field
    pub linear_text: String,

    /// Show the visible-survey table under the plot
    pub show_table: bool,

    /// Column index the survey table is sorted by (None = plot order)
    pub sort_column: Option<usize>,

    /// Sort direction for the survey table
    pub sort_ascending: bool,

    /// Show the about window
    pub show_about: bool,

    /// Reset plot bounds on next frame
    pub reset_bounds: bool,

    /// Error message to display in UI (toast/status bar)
    pub error_message: Option<String>,

    /// Last informational message (export done, catalog loaded)
    pub status_message: Option<String>,
}

impl UiState {
    /// Create a new UiState with default values
    pub fn new() -> Self {
        Self {
            reset_bounds: true,
            ..Self::default()
        }
    }

    /// Select a survey, or clear the selection when it is already selected
    pub fn toggle_selection(&mut self, survey: &str) {
        if self.selected_survey.as_deref() == Some(survey) {
            self.selected_survey = None;
        } else {
            self.selected_survey = Some(survey.to_string());
        }
    }

    /// Clear selection and hover
    pub fn clear_selection(&mut self) {
        self.selected_survey = None;
        self.hovered_point = None;
    }

    /// Toggle sort on a column (same column flips direction)
    pub fn toggle_sort(&mut self, column: usize) {
        if self.sort_column == Some(column) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_column = Some(column);
            self.sort_ascending = true;
        }
    }

    pub fn clear_sort(&mut self) {
        self.sort_column = None;
        self.sort_ascending = true;
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Check if there's an error to display
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
