use crate::{FormId, QuestionType, Status, Violation};

/// Error type for engine operations.
///
/// Data problems in a schema or answer set are not errors; validators report
/// them as [`Violation`]s. These variants signal a rejected operation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A question type outside the known enumeration.
    #[error("Unknown question type: {0}")]
    UnknownQuestionType(String),

    /// The operation needs a different kind of question.
    #[error("Question {index} has type {kind}, which does not support this operation")]
    InvalidQuestionType { index: usize, kind: QuestionType },

    /// An index past the end of a question or option list.
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot move a form from {from} to {to}")]
    InvalidStatusTransition { from: Status, to: Status },

    #[error("No form with id {0}")]
    NotFound(FormId),

    #[error("Form {0} is not accepting submissions")]
    FormNotActive(FormId),

    /// Validation failed; carries every violation found.
    #[error("Validation failed with {} violation(s)", .0.len())]
    Invalid(Vec<Violation>),

    /// Failure inside a store collaborator (I/O, network, ...).
    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl EngineError {
    /// Create a store error from any error type.
    pub fn store(err: impl Into<anyhow::Error>) -> Self {
        Self::Store(err.into())
    }

    /// Check if this error carries validation violations.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The violations carried by an `Invalid` error.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Invalid(violations) => violations,
            _ => &[],
        }
    }

    /// Check if this error means the form does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
