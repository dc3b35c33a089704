//! Built-in scale data, one module per species.
//!
//! The question texts, option scores, and interpretation bands are carried
//! over from the published welfare scales as deployed, including the
//! duplicate and overlapping bands some of them contain. Band order is
//! load-bearing (first match wins), so entries stay exactly as declared.

pub mod goat;
pub mod mouse;
pub mod pig;
pub mod rabbit;
pub mod rat;
pub mod sheep;

use crate::scoring::{
    AnswerOption, BandColor, InterpretationBand, QuestionDefinition, ScaleDefinition,
};

pub(crate) fn scale(
    name: &str,
    title: &str,
    description: &str,
    questions: Vec<QuestionDefinition>,
    interpretation: Vec<InterpretationBand>,
) -> ScaleDefinition {
    ScaleDefinition {
        name: name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        questions,
        interpretation,
    }
}

pub(crate) fn question(
    prompt: &str,
    guidance: &str,
    options: Vec<AnswerOption>,
) -> QuestionDefinition {
    QuestionDefinition {
        question: prompt.to_string(),
        options,
        guidance: Some(guidance.to_string()),
    }
}

pub(crate) fn opt(text: &str, score: i32) -> AnswerOption {
    AnswerOption {
        text: text.to_string(),
        score,
    }
}

pub(crate) fn band(min: i32, max: i32, label: &str, color: BandColor) -> InterpretationBand {
    InterpretationBand {
        min,
        max,
        label: label.to_string(),
        color,
    }
}

/// Grimace-style item: the same 0/1/2 presence options recur across the
/// rodent and rabbit grimace scales.
pub(crate) fn presence_item(prompt: &str, guidance: &str) -> QuestionDefinition {
    question(
        prompt,
        guidance,
        vec![
            opt("Not present", 0),
            opt("Moderately present", 1),
            opt("Obviously present", 2),
        ],
    )
}
