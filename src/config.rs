//! Persistent display settings
//!
//! Only presentation preferences live here. Filter criteria always start from
//! their defaults.

use crate::constants::{catalog, export};
use crate::error::{Result, SurveyError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory of survey description files
    pub catalog_dir: PathBuf,
    pub dark_mode: bool,
    pub show_reference_curves: bool,
    /// Draw survey names next to their markers
    pub show_labels: bool,
    /// Facilities listed under "Space-based" in the facility picker
    pub space_based_facilities: Vec<String>,
    pub export_file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from(catalog::DEFAULT_CATALOG_DIR),
            dark_mode: false,
            show_reference_curves: true,
            show_labels: true,
            space_based_facilities: catalog::SPACE_BASED_FACILITIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            export_file_name: export::DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Read the config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| SurveyError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Like `load`, but falls back to the defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{}; using default configuration", e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {}", path.display());
        Ok(())
    }
}
