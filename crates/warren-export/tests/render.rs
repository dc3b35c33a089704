//! Report rendering tests.

use jiff::civil::date;
use uuid::Uuid;

use warren_core::models::animal::{Animal, Sex};
use warren_core::models::assessment::AssessmentRecord;
use warren_core::models::weight::{WeightRecord, WeightTarget};
use warren_export::render::{render_report, ReportContext, DEFAULT_REPORT_TEMPLATE};

fn animal() -> Animal {
    Animal {
        id: Uuid::new_v4(),
        name: "Clover".to_string(),
        species: "Goat".to_string(),
        breed: Some("Boer".to_string()),
        birthday: Some(date(2022, 5, 4)),
        sex: Some(Sex::Female),
        castrated: None,
        current_weight: Some(48.0),
        target: None,
        created_at: jiff::Timestamp::now(),
        updated_at: jiff::Timestamp::now(),
    }
}

fn weights(values: &[(i16, i8, i8, f64)]) -> Vec<WeightRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, (y, m, d, w))| WeightRecord::new(i as u64, date(*y, *m, *d), *w).unwrap())
        .collect()
}

fn assessment(result: &str) -> AssessmentRecord {
    AssessmentRecord {
        id: Uuid::new_v4(),
        animal_id: Uuid::new_v4(),
        date: date(2025, 6, 2),
        scale_name: "FAMACHA\u{a9} Score".to_string(),
        result: result.to_string(),
        created_at: jiff::Timestamp::now(),
    }
}

#[test]
fn report_header_and_basics() {
    let ctx = ReportContext::build(&animal(), &[], &[]);
    let out = render_report(DEFAULT_REPORT_TEMPLATE, &ctx).unwrap();

    assert!(out.starts_with("# Clover (Goat)"));
    assert!(out.contains("Breed: Boer"));
    assert!(out.contains("Sex: Female"));
    // Tera prints floats through serde_json, which keeps the trailing .0.
    assert!(out.contains("Current Weight: 48.0 kg"));
}

#[test]
fn weight_section_only_when_history_present() {
    let ctx = ReportContext::build(&animal(), &[], &[]);
    let out = render_report(DEFAULT_REPORT_TEMPLATE, &ctx).unwrap();
    assert!(!out.contains("## Weight History"));

    let history = weights(&[(2025, 1, 1, 50.0), (2025, 2, 1, 49.0)]);
    let ctx = ReportContext::build(&animal(), &history, &[]);
    let out = render_report(DEFAULT_REPORT_TEMPLATE, &ctx).unwrap();
    assert!(out.contains("## Weight History"));
    assert!(out.contains("- 2025-01-01: 50.0 kg"));
    assert!(out.contains("- 2025-02-01: 49.0 kg"));
}

#[test]
fn target_lines_only_when_target_set() {
    let ctx = ReportContext::build(&animal(), &[], &[]);
    let out = render_report(DEFAULT_REPORT_TEMPLATE, &ctx).unwrap();
    assert!(!out.contains("Target Weight:"));

    let mut subject = animal();
    subject.target = Some(WeightTarget {
        target_weight: 45.0,
        target_date: date(2025, 9, 1),
    });
    let ctx = ReportContext::build(&subject, &[], &[]);
    let out = render_report(DEFAULT_REPORT_TEMPLATE, &ctx).unwrap();
    assert!(out.contains("Target Weight: 45.0 kg"));
    assert!(out.contains("Target Date: 2025-09-01"));
    // Target alone, with no history, yields no progress section.
    assert!(!out.contains("## Target Progress"));
}

#[test]
fn progress_section_reports_percent_and_trend() {
    let mut subject = animal();
    subject.target = Some(WeightTarget {
        target_weight: 46.0,
        target_date: date(2025, 9, 1),
    });
    let history = weights(&[(2025, 1, 1, 50.0), (2025, 2, 1, 48.0)]);

    let ctx = ReportContext::build(&subject, &history, &[]);
    let out = render_report(DEFAULT_REPORT_TEMPLATE, &ctx).unwrap();

    assert!(out.contains("## Target Progress"));
    assert!(out.contains("Progress toward target: 50.0%"));
    assert!(out.contains("Remaining: -2.0 kg"));
    assert!(out.contains("Trend: losing"));
}

#[test]
fn at_target_renders_sentinel_line() {
    let mut subject = animal();
    subject.target = Some(WeightTarget {
        target_weight: 48.0,
        target_date: date(2025, 9, 1),
    });
    let history = weights(&[(2025, 1, 1, 50.0), (2025, 2, 1, 48.0)]);

    let ctx = ReportContext::build(&subject, &history, &[]);
    let out = render_report(DEFAULT_REPORT_TEMPLATE, &ctx).unwrap();

    assert!(out.contains("Already at target weight."));
    assert!(!out.contains("Progress toward target:"));
}

#[test]
fn structured_assessments_show_score_and_details() {
    let payload = serde_json::json!({
        "score": 2,
        "interpretation": "Borderline",
        "details": [
            {"question": "Eyelid color", "answer": "Pink-red", "score": 2}
        ]
    })
    .to_string();

    let ctx = ReportContext::build(&animal(), &[], &[assessment(&payload)]);
    let out = render_report(DEFAULT_REPORT_TEMPLATE, &ctx).unwrap();

    assert!(out.contains("### 2025-06-02 - FAMACHA\u{a9} Score"));
    assert!(out.contains("Score 2 - Borderline"));
    assert!(out.contains("- Eyelid color: Pink-red (score 2)"));
}

#[test]
fn legacy_assessments_render_verbatim() {
    let ctx = ReportContext::build(&animal(), &[], &[assessment("pale eyelids, treated")]);
    let out = render_report(DEFAULT_REPORT_TEMPLATE, &ctx).unwrap();

    assert!(out.contains("pale eyelids, treated"));
    assert!(!out.contains("(score"));
}

#[test]
fn empty_record_set_renders_placeholder() {
    let ctx = ReportContext::build(&animal(), &[], &[]);
    let out = render_report(DEFAULT_REPORT_TEMPLATE, &ctx).unwrap();
    assert!(out.contains("No assessments recorded."));
}

#[test]
fn custom_template_receives_same_context() {
    let ctx = ReportContext::build(&animal(), &[], &[]);
    let out = render_report("{{ animal.name }} / {{ animal.species }}", &ctx).unwrap();
    assert_eq!(out, "Clover / Goat");
}

#[test]
fn bad_template_is_a_parse_error() {
    let ctx = ReportContext::build(&animal(), &[], &[]);
    assert!(render_report("{% if animal.name %}unterminated", &ctx).is_err());
}
