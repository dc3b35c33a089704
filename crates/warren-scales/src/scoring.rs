use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScaleError;

/// Interpretation label used when no band contains the total score. The
/// score is still persisted and reviewable; only the label is a sentinel.
pub const NO_INTERPRETATION: &str = "No interpretation available";

/// One assessment scale for one species.
///
/// Question order is semantically significant: answer slot `i` of a walk
/// refers to `questions[i]`. Band order is equally significant: several
/// built-in scales carry overlapping or duplicate ranges, and the first
/// declared match decides the label (see [`resolve_interpretation`]).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    /// Catalog key, e.g. "Body Condition Score".
    pub name: String,
    /// Display name, e.g. "Rat Body Condition Score (BCS)".
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionDefinition>,
    pub interpretation: Vec<InterpretationBand>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionDefinition {
    pub question: String,
    /// Scores are not monotonic with option order; a "hyperactive" option
    /// can score lower than "normal".
    pub options: Vec<AnswerOption>,
    /// Display-only help text.
    pub guidance: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub text: String,
    pub score: i32,
}

/// An inclusive score range mapped to a severity label and color.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationBand {
    pub min: i32,
    pub max: i32,
    pub label: String,
    pub color: BandColor,
}

impl InterpretationBand {
    pub fn contains(&self, score: i32) -> bool {
        self.min <= score && score <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BandColor {
    Green,
    Yellow,
    Orange,
    Red,
    /// Sentinel color for the no-interpretation case.
    Blue,
}

/// The resolved severity for a total score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub label: String,
    pub color: BandColor,
}

/// One line of the per-question detail trail, in question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerDetail {
    pub question: String,
    pub answer: String,
    pub score: i32,
}

/// The immutable outcome of scoring a completed (or partially answered)
/// answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub total_score: i32,
    pub details: Vec<AnswerDetail>,
    pub interpretation: Interpretation,
}

impl AssessmentResult {
    pub fn to_payload(&self) -> ResultPayload {
        ResultPayload {
            score: self.total_score,
            interpretation: self.interpretation.label.clone(),
            details: self.details.clone(),
        }
    }
}

/// The persisted wire shape:
/// `{"score": <int>, "interpretation": "<str>", "details": [{"question", "answer", "score"}]}`.
///
/// Both the detail views and the report projection consume this, so it must
/// round-trip exactly. The stored record is a plain string; legacy records
/// hold free text instead, which [`ResultPayload::parse`] rejects so callers
/// can fall back to verbatim display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultPayload {
    pub score: i32,
    pub interpretation: String,
    pub details: Vec<AnswerDetail>,
}

impl ResultPayload {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Score a scale against a sequence of per-question answers.
///
/// `answers[i]` is the selected option index for `questions[i]`, or `None`
/// for an unanswered slot. Unanswered slots contribute nothing; the
/// interactive walk guarantees completeness before finalization, so a
/// `None` here only occurs for callers scoring mid-walk previews.
///
/// A length mismatch is a caller programming error and fails fast rather
/// than truncating.
pub fn score(
    scale: &ScaleDefinition,
    answers: &[Option<usize>],
) -> Result<AssessmentResult, ScaleError> {
    if answers.len() != scale.questions.len() {
        return Err(ScaleError::AnswerCountMismatch {
            expected: scale.questions.len(),
            got: answers.len(),
        });
    }

    let mut total_score = 0;
    let mut details = Vec::new();

    for (question, slot) in scale.questions.iter().zip(answers) {
        let Some(index) = slot else { continue };
        let option =
            question
                .options
                .get(*index)
                .ok_or_else(|| ScaleError::OptionOutOfRange {
                    question: question.question.clone(),
                    index: *index,
                    options: question.options.len(),
                })?;

        total_score += option.score;
        details.push(AnswerDetail {
            question: question.question.clone(),
            answer: option.text.clone(),
            score: option.score,
        });
    }

    Ok(AssessmentResult {
        total_score,
        details,
        interpretation: resolve_interpretation(&scale.interpretation, total_score),
    })
}

/// First declared band whose inclusive range contains `total_score` wins.
///
/// Declaration order, not numeric tightness, is the tie-break over
/// overlapping or duplicate ranges. Changing this rule (or reordering the
/// catalog) changes the externally visible label for existing scores.
pub fn resolve_interpretation(bands: &[InterpretationBand], total_score: i32) -> Interpretation {
    bands
        .iter()
        .find(|band| band.contains(total_score))
        .map(|band| Interpretation {
            label: band.label.clone(),
            color: band.color,
        })
        .unwrap_or(Interpretation {
            label: NO_INTERPRETATION.to_string(),
            color: BandColor::Blue,
        })
}
