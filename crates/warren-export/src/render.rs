//! Narrative report rendering.
//!
//! A [`ReportContext`] is the structured hand-off: every field is
//! addressable by name in a Tera template. The built-in template produces
//! Markdown with the same section rules as the legacy PDF export: the
//! weight section only appears when history exists, the target lines only
//! when a target is set.

use serde::Serialize;
use tera::{Context, Tera};

use warren_core::models::animal::{Animal, Sex};
use warren_core::models::assessment::AssessmentRecord;
use warren_core::models::weight::WeightRecord;
use warren_core::progress::{self, GoalProgress, WeightTrend};
use warren_scales::scoring::AnswerDetail;

use crate::error::ExportError;
use crate::projection::{project_result, ProjectedResult};

pub const DEFAULT_REPORT_TEMPLATE: &str = r#"# {{ animal.name }} ({{ animal.species }})

{% if animal.breed %}Breed: {{ animal.breed }}
{% endif %}{% if animal.birthday %}Birthday: {{ animal.birthday }}
{% endif %}{% if animal.sex %}Sex: {{ animal.sex }}
{% endif %}{% if animal.current_weight %}Current Weight: {{ animal.current_weight }} kg
{% endif %}{% if animal.target_weight %}Target Weight: {{ animal.target_weight }} kg
Target Date: {{ animal.target_date }}
{% endif %}
{% if weights | length > 0 %}## Weight History

{% for w in weights %}- {{ w.date }}: {{ w.weight }} kg
{% endfor %}
{% endif %}{% if progress %}## Target Progress

{% if progress.at_target %}Already at target weight.
{% else %}Progress toward target: {{ progress.percent | round(method="common", precision=1) }}%
{% endif %}Remaining: {{ progress.remaining }} kg
Trend: {{ progress.trend }}

{% endif %}## Assessments

{% if assessments | length > 0 %}{% for a in assessments %}### {{ a.date }} - {{ a.scale }}

{{ a.summary }}
{% for d in a.details %}- {{ d.question }}: {{ d.answer }} (score {{ d.score }})
{% endfor %}
{% endfor %}{% else %}No assessments recorded.
{% endif %}"#;

#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub animal: AnimalInfo,
    pub weights: Vec<WeightRow>,
    pub progress: Option<ProgressSection>,
    pub assessments: Vec<AssessmentSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnimalInfo {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birthday: Option<String>,
    pub sex: Option<String>,
    pub castrated: Option<bool>,
    pub current_weight: Option<f64>,
    pub target_weight: Option<f64>,
    pub target_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightRow {
    pub date: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressSection {
    pub at_target: bool,
    /// Absent when at target; otherwise the unclamped percent.
    pub percent: Option<f64>,
    pub remaining: f64,
    pub trend: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSection {
    pub date: String,
    pub scale: String,
    pub summary: String,
    pub details: Vec<AnswerDetail>,
    pub legacy: bool,
}

impl ReportContext {
    pub fn build(
        animal: &Animal,
        history: &[WeightRecord],
        records: &[AssessmentRecord],
    ) -> Self {
        let progress_section =
            progress::progress(history, animal.target.as_ref()).map(|report| {
                let (at_target, percent) = match report.status {
                    GoalProgress::AtTarget => (true, None),
                    GoalProgress::Tracking { percent } => (false, Some(percent)),
                };
                ProgressSection {
                    at_target,
                    percent,
                    remaining: report.remaining,
                    trend: match report.trend {
                        WeightTrend::Gaining => "gaining".to_string(),
                        WeightTrend::Losing => "losing".to_string(),
                        WeightTrend::Stable => "stable".to_string(),
                    },
                }
            });

        Self {
            animal: AnimalInfo {
                name: animal.name.clone(),
                species: animal.species.clone(),
                breed: animal.breed.clone(),
                birthday: animal.birthday.map(|d| d.to_string()),
                sex: animal.sex.map(|s| {
                    match s {
                        Sex::Male => "Male",
                        Sex::Female => "Female",
                    }
                    .to_string()
                }),
                castrated: animal.castrated,
                current_weight: animal.current_weight,
                target_weight: animal.target.map(|t| t.target_weight),
                target_date: animal.target.map(|t| t.target_date.to_string()),
            },
            weights: history
                .iter()
                .map(|r| WeightRow {
                    date: r.date.to_string(),
                    weight: r.weight,
                })
                .collect(),
            progress: progress_section,
            assessments: records.iter().map(assessment_section).collect(),
        }
    }
}

fn assessment_section(record: &AssessmentRecord) -> AssessmentSection {
    match project_result(&record.result) {
        ProjectedResult::Structured(payload) => AssessmentSection {
            date: record.date.to_string(),
            scale: record.scale_name.clone(),
            summary: format!("Score {} - {}", payload.score, payload.interpretation),
            details: payload.details,
            legacy: false,
        },
        ProjectedResult::Legacy(raw) => AssessmentSection {
            date: record.date.to_string(),
            scale: record.scale_name.clone(),
            summary: raw,
            details: Vec::new(),
            legacy: true,
        },
    }
}

/// Render a report template against a context. The template is raw Tera
/// (Jinja2 syntax); [`DEFAULT_REPORT_TEMPLATE`] is what the CLI export
/// uses.
pub fn render_report(
    template_content: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("report", template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let ctx = Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("report", &ctx)?;
    Ok(rendered)
}
