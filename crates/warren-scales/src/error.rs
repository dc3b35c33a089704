use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("no scale named '{name}' for species '{species}'")]
    UnknownScale { species: String, name: String },

    #[error("answer count {got} does not match question count {expected}")]
    AnswerCountMismatch { expected: usize, got: usize },

    #[error("option index {index} out of range for question '{question}' ({options} options)")]
    OptionOutOfRange {
        question: String,
        index: usize,
        options: usize,
    },

    #[error("assessment incomplete: {answered} of {total} questions answered")]
    IncompleteAssessment { answered: usize, total: usize },

    #[error("assessment already completed; start a new answer set")]
    AlreadyCompleted,
}
