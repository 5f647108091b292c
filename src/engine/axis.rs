use crate::constants::plot::*;
use crate::data::SurveyRecord;

/// Plot window in log10 space: x is survey area, y is source density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            x: DEFAULT_X_RANGE,
            y: DEFAULT_Y_RANGE,
        }
    }
}

/// Fit the plot window around the visible surveys.
///
/// Lower bounds sit a factor of two below the smallest value (never below
/// 10^-2); upper bounds sit half a dex above the largest value, capped at the
/// default window's ceiling. No visible surveys gives the default window.
pub fn axis_range(visible: &[&SurveyRecord]) -> AxisRange {
    profiling::scope!("axis_range");

    let Some((area_min, area_max)) = min_max(visible.iter().map(|r| r.area)) else {
        return AxisRange::default();
    };
    let Some((density_min, density_max)) = min_max(visible.iter().map(|r| r.density)) else {
        return AxisRange::default();
    };

    AxisRange {
        x: lower_upper(area_min, area_max, X_CEILING),
        y: lower_upper(density_min, density_max, Y_CEILING),
    }
}

fn lower_upper(min: f64, max: f64, ceiling: f64) -> [f64; 2] {
    [
        (min.log10() - 2f64.log10()).max(AXIS_FLOOR),
        (max.log10() + UPPER_PADDING).min(ceiling),
    ]
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
