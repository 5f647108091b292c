use crate::constants::catalog::SURVEY_FILE_EXTENSION;
use crate::data::record::{RawSurvey, SurveyRecord};
use crate::error::{RecordError, Result, SurveyError};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// A survey file that could not be turned into a record
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub path: PathBuf,
    pub error: RecordError,
}

/// Outcome of loading a catalog directory: the valid surveys plus a
/// diagnostic for every file that was skipped
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub rejected: Vec<RejectedRecord>,
}

/// Facilities split for the grouped facility picker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacilityGroups {
    pub ground_based: Vec<String>,
    pub space_based: Vec<String>,
}

/// The immutable survey catalog.
///
/// Record order is the load order (survey files sorted by name); the export
/// follows it, the plot re-sorts by wavelength band.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<SurveyRecord>,
    source: Option<PathBuf>,
}

impl Catalog {
    #[cfg(test)]
    pub fn from_records(records: Vec<SurveyRecord>) -> Self {
        Self {
            records,
            source: None,
        }
    }

    /// Load every `*.json` survey file in `dir`.
    ///
    /// Only an unreadable directory is an error. Individual files that fail to
    /// parse or validate are reported in `CatalogLoad::rejected`.
    pub fn load_dir(dir: &Path) -> Result<CatalogLoad> {
        profiling::scope!("Catalog::load_dir");

        let entries = std::fs::read_dir(dir).map_err(|source| SurveyError::CatalogDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    None
                }
            })
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(SURVEY_FILE_EXTENSION))
            })
            .collect();
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        let mut rejected = Vec::new();
        let mut names = HashSet::new();

        for path in paths {
            // Survey names identify records for selection; the first file wins
            let loaded = Self::load_file(&path).and_then(|record| {
                if names.insert(record.survey.clone()) {
                    Ok(record)
                } else {
                    Err(RecordError::DuplicateSurvey(record.survey))
                }
            });
            match loaded {
                Ok(record) => records.push(record),
                Err(error) => {
                    log::warn!("Skipping survey file {}: {}", path.display(), error);
                    rejected.push(RejectedRecord { path, error });
                }
            }
        }

        log::info!(
            "Loaded {} surveys from {} ({} rejected)",
            records.len(),
            dir.display(),
            rejected.len()
        );

        Ok(CatalogLoad {
            catalog: Self {
                records,
                source: Some(dir.to_path_buf()),
            },
            rejected,
        })
    }

    fn load_file(path: &Path) -> std::result::Result<SurveyRecord, RecordError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| RecordError::Malformed(e.to_string()))?;
        let raw: RawSurvey =
            serde_json::from_str(&contents).map_err(|e| RecordError::Malformed(e.to_string()))?;
        SurveyRecord::try_from(raw)
    }

    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Directory the catalog was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Distinct facility names, sorted
    pub fn facilities(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.facility.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct facilities split into space- and ground-based groups
    pub fn facility_groups(&self, space_based: &[String]) -> FacilityGroups {
        let (space_based, ground_based) = self
            .facilities()
            .into_iter()
            .partition(|facility| space_based.iter().any(|s| s == facility));
        FacilityGroups {
            ground_based,
            space_based,
        }
    }
}
