//! The interactive answer walk.
//!
//! One [`AnswerSet`] is one user's run through a scale's questions: created
//! when an assessment starts, mutated one slot at a time as questions are
//! answered (backward navigation re-answers), finalized exactly once when
//! every slot is set, and simply dropped if abandoned. A completed set
//! cannot be re-entered: reviewing a finished assessment goes through the
//! stored record, and re-assessing starts a fresh walk.

use uuid::Uuid;

use warren_core::models::animal::Animal;

use crate::error::ScaleError;
use crate::scoring::{self, AssessmentResult, QuestionDefinition, ScaleDefinition};

/// Display/reporting context carried alongside the answers.
#[derive(Debug, Clone)]
pub struct AnimalContext {
    pub animal_id: Uuid,
    pub animal_name: String,
    pub animal_species: String,
}

impl AnimalContext {
    pub fn for_animal(animal: &Animal) -> Self {
        Self {
            animal_id: animal.id,
            animal_name: animal.name.clone(),
            animal_species: animal.species.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// Waiting for an answer to question `index`.
    Answering(usize),
    /// Every question answered; only finalization remains.
    Completed,
}

#[derive(Debug, Clone)]
pub struct AnswerSet {
    scale: ScaleDefinition,
    context: AnimalContext,
    answers: Vec<Option<usize>>,
    state: WalkState,
}

impl AnswerSet {
    pub fn new(scale: ScaleDefinition, context: AnimalContext) -> Self {
        let total = scale.questions.len();
        let state = if total == 0 {
            WalkState::Completed
        } else {
            WalkState::Answering(0)
        };
        Self {
            scale,
            context,
            answers: vec![None; total],
            state,
        }
    }

    pub fn scale(&self) -> &ScaleDefinition {
        &self.scale
    }

    pub fn context(&self) -> &AnimalContext {
        &self.context
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.state == WalkState::Completed
    }

    /// The question the walk is currently waiting on.
    pub fn current_question(&self) -> Option<&QuestionDefinition> {
        match self.state {
            WalkState::Answering(index) => self.scale.questions.get(index),
            WalkState::Completed => None,
        }
    }

    /// Record `option` for the current question and advance. Selecting the
    /// answer to the final question transitions to [`WalkState::Completed`].
    pub fn select(&mut self, option: usize) -> Result<WalkState, ScaleError> {
        let WalkState::Answering(index) = self.state else {
            return Err(ScaleError::AlreadyCompleted);
        };

        let question = &self.scale.questions[index];
        if option >= question.options.len() {
            return Err(ScaleError::OptionOutOfRange {
                question: question.question.clone(),
                index: option,
                options: question.options.len(),
            });
        }

        self.answers[index] = Some(option);
        self.state = if index + 1 == self.scale.questions.len() {
            WalkState::Completed
        } else {
            WalkState::Answering(index + 1)
        };
        Ok(self.state)
    }

    /// Move back one question, flooring at the first. The earlier answer
    /// stays recorded until overwritten by the next `select`.
    pub fn retreat(&mut self) -> Result<usize, ScaleError> {
        let WalkState::Answering(index) = self.state else {
            return Err(ScaleError::AlreadyCompleted);
        };
        let back = index.saturating_sub(1);
        self.state = WalkState::Answering(back);
        Ok(back)
    }

    /// Consume the walk and score it. Rejected unless every slot is set;
    /// partial scoring of an abandoned walk is not supported.
    pub fn finalize(self) -> Result<AssessmentResult, ScaleError> {
        let answered = self.answers.iter().filter(|slot| slot.is_some()).count();
        let total = self.answers.len();
        if self.state != WalkState::Completed || answered != total {
            return Err(ScaleError::IncompleteAssessment { answered, total });
        }
        scoring::score(&self.scale, &self.answers)
    }
}
