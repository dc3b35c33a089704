//! Projection of stored results into display/export shapes.

use serde::Serialize;

use warren_core::models::assessment::AssessmentRecord;
use warren_scales::scoring::{AnswerDetail, ResultPayload};

/// A stored result string, interpreted. Legacy records predate the JSON
/// payload and hold free text; anything that does not parse as the expected
/// shape is shown verbatim. This fallback is required behavior, not an
/// error path.
#[derive(Debug, Clone)]
pub enum ProjectedResult {
    Structured(ResultPayload),
    Legacy(String),
}

pub fn project_result(raw: &str) -> ProjectedResult {
    match ResultPayload::parse(raw) {
        Ok(payload) => ProjectedResult::Structured(payload),
        Err(_) => ProjectedResult::Legacy(raw.to_string()),
    }
}

/// One line of the tabular assessment listing.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub date: String,
    pub scale: String,
    pub result: String,
}

pub fn summary_row(record: &AssessmentRecord) -> SummaryRow {
    let result = match project_result(&record.result) {
        ProjectedResult::Structured(payload) => {
            format!("{} - {}", payload.score, payload.interpretation)
        }
        ProjectedResult::Legacy(raw) => raw,
    };
    SummaryRow {
        date: record.date.to_string(),
        scale: record.scale_name.clone(),
        result,
    }
}

/// Per-question rows for the detailed/export view. Legacy results have no
/// question breakdown.
pub fn detail_rows(result: &ProjectedResult) -> &[AnswerDetail] {
    match result {
        ProjectedResult::Structured(payload) => &payload.details,
        ProjectedResult::Legacy(_) => &[],
    }
}
