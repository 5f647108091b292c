//! Point and curve data handed to the plot
//!
//! Survey points depend on the filter state; the constant-N reference curves
//! and the beyond-full-sky region never do.

use crate::constants::plot::*;
use crate::data::{SurveyRecord, WavelengthBand};

/// What the hover card and detail panel show for one survey
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyDetail {
    pub survey: String,
    pub full_name: String,
    pub reference: String,
    pub facility: String,
    pub nspec: u64,
    pub area: f64,
    pub resolution: f64,
    pub status: &'static str,
    pub notes: String,
}

impl SurveyDetail {
    /// Hover text, one line per entry
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.full_name.clone(),
            format!("Reference: {}", self.reference),
            format!("Status: {}", self.status),
            format!(
                "{} over {} sq.deg",
                format_count(self.nspec as f64),
                format_count(self.area)
            ),
            format!("Resolution: {}", self.resolution),
        ];
        if !self.notes.is_empty() {
            lines.push(format!("Selection notes: {}", self.notes));
        }
        lines
    }
}

/// One plotted survey
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyPoint {
    /// (area in deg², density in deg⁻²)
    pub position: (f64, f64),
    pub band: WavelengthBand,
    pub detail: SurveyDetail,
}

impl SurveyPoint {
    fn from_record(record: &SurveyRecord) -> Self {
        Self {
            position: (record.area, record.density),
            band: record.band,
            detail: SurveyDetail {
                survey: record.survey.clone(),
                full_name: record.full_name.clone(),
                reference: record.reference.clone(),
                facility: record.facility.clone(),
                nspec: record.nspec,
                area: record.area,
                resolution: record.resolution,
                status: record.status.label(),
                notes: record.notes.clone(),
            },
        }
    }

    /// Position in the log10 coordinates the plot is drawn in
    pub fn log_position(&self) -> [f64; 2] {
        [self.position.0.log10(), self.position.1.log10()]
    }
}

/// `density = total / area` for a fixed total source count
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurve {
    pub total: f64,
    /// (area, density) samples, log-spaced in area
    pub samples: Vec<(f64, f64)>,
}

impl ReferenceCurve {
    pub fn new(total: f64) -> Self {
        let samples = log_space(REFERENCE_AREA_MIN, FULL_SKY_AREA, REFERENCE_SAMPLES)
            .into_iter()
            .map(|area| (area, total / area))
            .collect();
        Self { total, samples }
    }

    pub fn label(&self) -> String {
        format!("n={}", format_count(self.total))
    }

    pub fn log_samples(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|&(area, density)| [area.log10(), density.log10()])
            .collect()
    }
}

/// Areas larger than the whole sky cannot be surveyed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpossibleRegion {
    /// Smallest impossible area (deg²)
    pub min_area: f64,
}

impl Default for ImpossibleRegion {
    fn default() -> Self {
        Self {
            min_area: FULL_SKY_AREA,
        }
    }
}

impl ImpossibleRegion {
    /// Polygon corners in log10 space, spanning the given y window and
    /// extending `width` dex to the right of the full-sky line
    pub fn log_polygon(&self, y: [f64; 2], width: f64) -> Vec<[f64; 2]> {
        let x0 = self.min_area.log10();
        vec![[x0, y[0]], [x0 + width, y[0]], [x0 + width, y[1]], [x0, y[1]]]
    }
}

/// Everything the plot draws for one filter state
#[derive(Debug, Clone, PartialEq)]
pub struct RenderData {
    /// Visible surveys, in band order
    pub points: Vec<SurveyPoint>,
    pub reference_curves: Vec<ReferenceCurve>,
    pub impossible: ImpossibleRegion,
}

impl RenderData {
    /// Points grouped by band, bands in ascending order, empty bands omitted
    pub fn groups(&self) -> Vec<(WavelengthBand, Vec<&SurveyPoint>)> {
        let mut groups: Vec<(WavelengthBand, Vec<&SurveyPoint>)> = Vec::new();
        for point in &self.points {
            match groups.iter_mut().find(|(band, _)| *band == point.band) {
                Some((_, members)) => members.push(point),
                None => groups.push((point.band, vec![point])),
            }
        }
        groups.sort_by_key(|(band, _)| band.ordinal());
        groups
    }
}

/// Build plot data for the visible surveys
pub fn assemble(visible: &[&SurveyRecord]) -> RenderData {
    profiling::scope!("assemble_render_data");

    RenderData {
        points: visible.iter().map(|r| SurveyPoint::from_record(r)).collect(),
        reference_curves: reference_curves(),
        impossible: ImpossibleRegion::default(),
    }
}

pub fn reference_curves() -> Vec<ReferenceCurve> {
    REFERENCE_TOTALS.into_iter().map(ReferenceCurve::new).collect()
}

/// `n` points evenly spaced in log10 between `start` and `stop` inclusive
pub fn log_space(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let (lo, hi) = (start.log10(), stop.log10());
            let step = (hi - lo) / (n - 1) as f64;
            (0..n).map(|i| 10f64.powf(lo + step * i as f64)).collect()
        }
    }
}

/// `value` rounded to two significant figures
fn round_two_figures(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let exponent = 1 - value.abs().log10().floor() as i32;
    // Only non-negative powers of ten are exact
    if exponent >= 0 {
        let factor = 10f64.powi(exponent);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-exponent);
        (value / factor).round() * factor
    }
}

/// Two significant figures with an SI suffix, e.g. 2.5M, 41k, 0.5
pub fn format_count(value: f64) -> String {
    const SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")];

    // Pick the suffix after rounding so 999_999 becomes 1M, not 1000k
    let rounded = round_two_figures(value);
    let (scaled, suffix) = SUFFIXES
        .iter()
        .find(|(scale, _)| rounded.abs() >= *scale)
        .map(|&(scale, suffix)| (rounded / scale, suffix))
        .unwrap_or((rounded, ""));

    let text = if scaled == 0.0 {
        "0".to_string()
    } else {
        let digits = scaled.abs().log10().floor() as i32;
        let decimals = (1 - digits).max(0) as usize;
        format!("{:.*}", decimals, scaled)
    };
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    format!("{}{}", text, suffix)
}
