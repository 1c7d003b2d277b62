use crate::{AnswerSet, EngineError, Form, FormId, Violation};

/// Proof that a submission was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub form_id: FormId,
    /// Sequence number of the submission within its form, starting at 1.
    pub submission: u64,
}

/// Result of submitting an answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Receipt),
    /// The answers were not stored; the violations say why.
    Rejected(Vec<Violation>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn receipt(&self) -> Option<Receipt> {
        match self {
            Self::Accepted(receipt) => Some(*receipt),
            Self::Rejected(_) => None,
        }
    }
}

/// The persistence collaborator the engine hands forms and answers to.
///
/// Implementations decide where data lives. They must validate before
/// accepting: a saved form passes the schema validator and an accepted
/// submission passes the answer validator against the stored schema.
pub trait FormStore {
    /// Load a stored form.
    ///
    /// Fails with [`EngineError::NotFound`] if there is no such form.
    fn load_form(&self, id: FormId) -> Result<Form, EngineError>;

    /// Store a form, assigning an id on first save. Returns the stored form.
    fn save_form(&mut self, form: Form) -> Result<Form, EngineError>;

    /// Validate and store an answer set for a form.
    fn submit_answers(&mut self, id: FormId, answers: AnswerSet)
    -> Result<SubmitOutcome, EngineError>;
}
