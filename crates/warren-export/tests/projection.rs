//! Projection and CSV tests.

use jiff::civil::date;
use uuid::Uuid;

use warren_core::models::assessment::AssessmentRecord;
use warren_core::models::weight::WeightRecord;
use warren_export::csv::{write_assessment_csv, write_weight_csv};
use warren_export::projection::{detail_rows, project_result, summary_row, ProjectedResult};

fn assessment(result: &str) -> AssessmentRecord {
    AssessmentRecord {
        id: Uuid::new_v4(),
        animal_id: Uuid::new_v4(),
        date: date(2025, 3, 14),
        scale_name: "Body Condition Score (BCS)".to_string(),
        result: result.to_string(),
        created_at: jiff::Timestamp::now(),
    }
}

fn structured_payload() -> String {
    serde_json::json!({
        "score": 7,
        "interpretation": "Slightly overweight",
        "details": [
            {"question": "Flesh cover over the spine", "answer": "Palpable with light pressure", "score": 3},
            {"question": "Flesh cover over the pelvis", "answer": "Thick cover", "score": 4}
        ]
    })
    .to_string()
}

#[test]
fn structured_payload_projects() {
    let projected = project_result(&structured_payload());
    match projected {
        ProjectedResult::Structured(payload) => {
            assert_eq!(payload.score, 7);
            assert_eq!(payload.interpretation, "Slightly overweight");
            assert_eq!(payload.details.len(), 2);
        }
        ProjectedResult::Legacy(_) => panic!("expected structured projection"),
    }
}

#[test]
fn free_text_projects_as_legacy_verbatim() {
    let raw = "healthy, mild limp on left hind";
    match project_result(raw) {
        ProjectedResult::Legacy(text) => assert_eq!(text, raw),
        ProjectedResult::Structured(_) => panic!("expected legacy projection"),
    }
}

#[test]
fn wrong_shape_json_projects_as_legacy() {
    let raw = r#"{"score": "high", "notes": []}"#;
    match project_result(raw) {
        ProjectedResult::Legacy(text) => assert_eq!(text, raw),
        ProjectedResult::Structured(_) => panic!("expected legacy projection"),
    }
}

#[test]
fn summary_row_formats_structured_result() {
    let row = summary_row(&assessment(&structured_payload()));
    assert_eq!(row.date, "2025-03-14");
    assert_eq!(row.scale, "Body Condition Score (BCS)");
    assert_eq!(row.result, "7 - Slightly overweight");
}

#[test]
fn summary_row_passes_legacy_text_through() {
    let row = summary_row(&assessment("needs recheck in two weeks"));
    assert_eq!(row.result, "needs recheck in two weeks");
}

#[test]
fn detail_rows_empty_for_legacy() {
    let projected = project_result("free text");
    assert!(detail_rows(&projected).is_empty());

    let projected = project_result(&structured_payload());
    assert_eq!(detail_rows(&projected).len(), 2);
}

#[test]
fn assessment_csv_has_header_and_rows() {
    let rows = vec![
        summary_row(&assessment(&structured_payload())),
        summary_row(&assessment("legacy note")),
    ];

    let mut buf = Vec::new();
    write_assessment_csv(&mut buf, &rows).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Date,Scale,Result"));
    assert_eq!(
        lines.next(),
        Some("2025-03-14,Body Condition Score (BCS),7 - Slightly overweight")
    );
    assert_eq!(
        lines.next(),
        Some("2025-03-14,Body Condition Score (BCS),legacy note")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn weight_csv_has_header_and_rows() {
    let history = vec![
        WeightRecord::new(0, date(2025, 1, 1), 95.0).unwrap(),
        WeightRecord::new(1, date(2025, 2, 1), 94.5).unwrap(),
    ];

    let mut buf = Vec::new();
    write_weight_csv(&mut buf, &history).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Date,Weight (kg)"));
    assert_eq!(lines.next(), Some("2025-01-01,95"));
    assert_eq!(lines.next(), Some("2025-02-01,94.5"));
    assert_eq!(lines.next(), None);
}
