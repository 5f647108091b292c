//! Survey records and their enumerated attributes

use crate::constants::catalog::DEFAULT_RESOLUTION;
use crate::error::RecordError;
use serde::{Deserialize, Serialize};

/// Selection wavelength band, ordered from short to long wavelength.
///
/// The discriminant is the fixed ordinal used for sorting and colour
/// assignment; it plays no part in filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WavelengthBand {
    XRay = 0,
    Ultraviolet = 1,
    Blue = 2,
    Optical = 3,
    NearInfrared = 4,
    MidInfrared = 5,
    FarInfrared = 6,
    Radio = 7,
}

impl WavelengthBand {
    pub const ALL: [WavelengthBand; 8] = [
        WavelengthBand::XRay,
        WavelengthBand::Ultraviolet,
        WavelengthBand::Blue,
        WavelengthBand::Optical,
        WavelengthBand::NearInfrared,
        WavelengthBand::MidInfrared,
        WavelengthBand::FarInfrared,
        WavelengthBand::Radio,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Label as written in survey files and shown in the legend
    pub fn label(self) -> &'static str {
        match self {
            WavelengthBand::XRay => "X-ray",
            WavelengthBand::Ultraviolet => "UV",
            WavelengthBand::Blue => "300-500nm",
            WavelengthBand::Optical => "500-950nm",
            WavelengthBand::NearInfrared => "0.95-2.5µm",
            WavelengthBand::MidInfrared => "2.5-5µm",
            WavelengthBand::FarInfrared => "5-1000µm",
            WavelengthBand::Radio => "Radio",
        }
    }

    /// Parse a band label. Accepts both micro signs (U+00B5, U+03BC) and "um".
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().replace('\u{03bc}', "\u{00b5}").replace("um", "\u{00b5}m");
        Self::ALL
            .into_iter()
            .find(|band| band.label().eq_ignore_ascii_case(&normalized))
    }
}

/// Survey status as encoded by the integer `Status` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SurveyStatus {
    Complete = 0,
    Ongoing = 1,
    Proposed = 2,
    Special = 3,
}

impl SurveyStatus {
    pub const ALL: [SurveyStatus; 4] = [
        SurveyStatus::Complete,
        SurveyStatus::Ongoing,
        SurveyStatus::Proposed,
        SurveyStatus::Special,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(SurveyStatus::Complete),
            1 => Some(SurveyStatus::Ongoing),
            2 => Some(SurveyStatus::Proposed),
            3 => Some(SurveyStatus::Special),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        match self {
            SurveyStatus::Complete => "Complete",
            SurveyStatus::Ongoing => "Ongoing",
            SurveyStatus::Proposed => "Proposed",
            SurveyStatus::Special => "Special / Unfinished",
        }
    }
}

/// One survey of the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyRecord {
    pub survey: String,
    pub full_name: String,
    pub reference: String,
    pub facility: String,
    pub band: WavelengthBand,
    pub status: SurveyStatus,
    /// Survey footprint in deg², always > 0
    pub area: f64,
    pub nspec: u64,
    pub resolution: f64,
    pub notes: String,
    /// Spectra per deg², computed once at load
    pub density: f64,
}

/// Survey description exactly as found on disk.
///
/// Every field is optional here so that validation can name the missing one
/// instead of failing with a generic serde message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSurvey {
    #[serde(rename = "Survey")]
    pub survey: Option<String>,
    #[serde(rename = "Full Name")]
    pub full_name: Option<String>,
    #[serde(rename = "Reference")]
    pub reference: Option<String>,
    #[serde(rename = "Facility")]
    pub facility: Option<String>,
    #[serde(rename = "Selection Wavelength")]
    pub selection_wavelength: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<f64>,
    #[serde(rename = "Area")]
    pub area: Option<f64>,
    #[serde(rename = "Nspec")]
    pub nspec: Option<f64>,
    #[serde(rename = "Resolution")]
    pub resolution: Option<f64>,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

impl TryFrom<RawSurvey> for SurveyRecord {
    type Error = RecordError;

    fn try_from(raw: RawSurvey) -> Result<Self, Self::Error> {
        let survey = raw.survey.ok_or(RecordError::MissingField("Survey"))?;
        let full_name = raw.full_name.unwrap_or_else(|| survey.clone());
        let reference = raw.reference.ok_or(RecordError::MissingField("Reference"))?;
        let facility = raw.facility.ok_or(RecordError::MissingField("Facility"))?;

        let band_label = raw
            .selection_wavelength
            .ok_or(RecordError::MissingField("Selection Wavelength"))?;
        let band = WavelengthBand::from_label(&band_label)
            .ok_or(RecordError::UnknownBand(band_label))?;

        let status_code = raw.status.ok_or(RecordError::MissingField("Status"))?;
        if status_code.fract() != 0.0 {
            return Err(RecordError::UnknownStatus(status_code as i64));
        }
        let status = SurveyStatus::from_code(status_code as i64)
            .ok_or(RecordError::UnknownStatus(status_code as i64))?;

        let area = raw.area.ok_or(RecordError::MissingField("Area"))?;
        if !area.is_finite() || area <= 0.0 {
            return Err(RecordError::NonPositiveArea(area));
        }

        let nspec = raw.nspec.ok_or(RecordError::MissingField("Nspec"))?;
        if !nspec.is_finite() || nspec < 0.0 || nspec.fract() != 0.0 {
            return Err(RecordError::InvalidNspec(nspec));
        }
        let nspec = nspec as u64;

        let resolution = raw.resolution.unwrap_or(DEFAULT_RESOLUTION);
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(RecordError::NonPositiveResolution(resolution));
        }

        Ok(SurveyRecord {
            survey,
            full_name,
            reference,
            facility,
            band,
            status,
            area,
            nspec,
            resolution,
            notes: raw.notes.unwrap_or_default(),
            density: nspec as f64 / area,
        })
    }
}
