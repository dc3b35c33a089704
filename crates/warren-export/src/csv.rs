//! CSV row emission for the export collaborator.

use std::io::Write;

use warren_core::models::weight::WeightRecord;

use crate::error::ExportError;
use crate::projection::SummaryRow;

pub fn write_assessment_csv<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Date", "Scale", "Result"])?;
    for row in rows {
        csv.write_record([&row.date, &row.scale, &row.result])?;
    }
    csv.flush()?;
    tracing::debug!(rows = rows.len(), "assessment CSV written");
    Ok(())
}

pub fn write_weight_csv<W: Write>(writer: W, history: &[WeightRecord]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Date", "Weight (kg)"])?;
    for record in history {
        csv.write_record([record.date.to_string(), record.weight.to_string()])?;
    }
    csv.flush()?;
    tracing::debug!(rows = history.len(), "weight CSV written");
    Ok(())
}
