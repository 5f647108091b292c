//! Tabular export of the visible surveys

use crate::data::{Catalog, SurveyRecord};
use crate::error::Result;
use crate::state::FilterCriteria;
use polars::prelude::*;
use std::io::Write;

/// Surveys passing `criteria`, in catalog order.
///
/// Uses the same predicate as the plot, so the exported set always equals
/// the plotted set; only the order differs.
pub fn export_rows<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a SurveyRecord> {
    profiling::scope!("export_rows");
    catalog
        .records()
        .iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

/// All record columns plus the derived density and status label
pub fn to_dataframe(rows: &[&SurveyRecord]) -> Result<DataFrame> {
    fn strings<'a>(rows: &[&'a SurveyRecord], f: impl Fn(&'a SurveyRecord) -> &'a str) -> Vec<&'a str> {
        rows.iter().map(|r| f(r)).collect()
    }

    let df = df!(
        "Survey" => strings(rows, |r| &r.survey),
        "Full Name" => strings(rows, |r| &r.full_name),
        "Reference" => strings(rows, |r| &r.reference),
        "Facility" => strings(rows, |r| &r.facility),
        "Selection Wavelength" => rows.iter().map(|r| r.band.label()).collect::<Vec<_>>(),
        "Status" => rows.iter().map(|r| r.status.code()).collect::<Vec<_>>(),
        "Survey Status" => rows.iter().map(|r| r.status.label()).collect::<Vec<_>>(),
        "Area" => rows.iter().map(|r| r.area).collect::<Vec<_>>(),
        "Nspec" => rows.iter().map(|r| r.nspec).collect::<Vec<_>>(),
        "Resolution" => rows.iter().map(|r| r.resolution).collect::<Vec<_>>(),
        "Notes" => strings(rows, |r| &r.notes),
        "Density" => rows.iter().map(|r| r.density).collect::<Vec<_>>()
    )?;
    Ok(df)
}

/// Encode `rows` as CSV with a header line
pub fn write_csv<W: Write>(rows: &[&SurveyRecord], writer: W) -> Result<()> {
    profiling::scope!("write_csv");
    let mut df = to_dataframe(rows)?;
    CsvWriter::new(writer).include_header(true).finish(&mut df)?;
    Ok(())
}
