//! In-memory form store for tests and embedding.
//!
//! `MemoryStore` implements [`FormStore`] over plain maps. It enforces the
//! same gates a networked store would: forms are schema-checked before they
//! are saved, and answer sets are checked against the stored schema before
//! they are accepted.
//!
//! # Example
//!
//! ```
//! use form_engine::{
//!     AnswerSet, Category, Form, FormEditor, FormStore, MemoryStore, QuestionType, Status,
//! };
//!
//! let mut editor = FormEditor::new(Form::new("Club sign-up", Category::Other));
//! let q = editor.add_question();
//! editor.change_question_type(q, QuestionType::Email).unwrap();
//! editor.set_status(Status::Active).unwrap();
//!
//! let mut store = MemoryStore::new();
//! let saved = store.save_form(editor.finish().unwrap()).unwrap();
//! let id = saved.id.unwrap();
//!
//! let outcome = store
//!     .submit_answers(id, AnswerSet::new().with("q1", "ada@example.org"))
//!     .unwrap();
//! assert!(outcome.is_accepted());
//! ```

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::{
    AnswerSet, EngineError, Form, FormId, FormStore, Receipt, SchemaLimits, Status, SubmitOutcome,
    ValidationMode, ValidationResult, validate_answers, validate_schema_with,
};

/// A store that keeps forms and accepted submissions in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    forms: BTreeMap<FormId, Form>,
    submissions: BTreeMap<FormId, Vec<AnswerSet>>,
    last_id: u64,
    limits: SchemaLimits,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom limits when checking saved forms.
    pub fn with_limits(mut self, limits: SchemaLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Accepted submissions for a form, oldest first.
    pub fn submissions(&self, id: FormId) -> &[AnswerSet] {
        self.submissions.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Ids of all stored forms.
    pub fn form_ids(&self) -> impl Iterator<Item = FormId> + '_ {
        self.forms.keys().copied()
    }

    /// Get the number of stored forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Check if no form is stored.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl FormStore for MemoryStore {
    fn load_form(&self, id: FormId) -> Result<Form, EngineError> {
        self.forms.get(&id).cloned().ok_or(EngineError::NotFound(id))
    }

    fn save_form(&mut self, mut form: Form) -> Result<Form, EngineError> {
        if let Err(err) =
            validate_schema_with(&form, &self.limits, ValidationMode::Persist).into_result()
        {
            warn!("Refusing to save '{}': {err}", form.title);
            return Err(err);
        }

        let id = match form.id {
            Some(id) if self.forms.contains_key(&id) => id,
            Some(id) => return Err(EngineError::NotFound(id)),
            None => {
                self.last_id += 1;
                FormId(self.last_id)
            }
        };
        form.id = Some(id);
        debug!("Saved '{}' as {id}", form.title);
        self.forms.insert(id, form.clone());
        Ok(form)
    }

    fn submit_answers(
        &mut self,
        id: FormId,
        answers: AnswerSet,
    ) -> Result<SubmitOutcome, EngineError> {
        let form = self.forms.get(&id).ok_or(EngineError::NotFound(id))?;
        if form.status != Status::Active {
            warn!("Submission to {id} refused: form is {}", form.status);
            return Err(EngineError::FormNotActive(id));
        }

        match validate_answers(form, &answers)? {
            ValidationResult::Valid => {
                let accepted = self.submissions.entry(id).or_default();
                accepted.push(answers);
                let receipt = Receipt {
                    form_id: id,
                    submission: accepted.len() as u64,
                };
                debug!("Accepted submission {} for {id}", receipt.submission);
                Ok(SubmitOutcome::Accepted(receipt))
            }
            ValidationResult::Invalid(violations) => {
                debug!("Rejected submission for {id}: {} violation(s)", violations.len());
                Ok(SubmitOutcome::Rejected(violations))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Question, QuestionType, ViolationKind};

    fn active_form() -> Form {
        let mut form = Form::new("Attendance", Category::Attendance)
            .with_question(Question::new("q1", "Student id", QuestionType::ShortText))
            .with_question(
                Question::new("q2", "Present?", QuestionType::SingleChoice)
                    .with_options(["Yes", "No"]),
            );
        form.status = Status::Active;
        form
    }

    #[test]
    fn save_assigns_ids() {
        let mut store = MemoryStore::new();
        let first = store.save_form(active_form()).unwrap();
        let second = store.save_form(active_form()).unwrap();
        assert_eq!(first.id, Some(FormId(1)));
        assert_eq!(second.id, Some(FormId(2)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.load_form(FormId(2)).unwrap(), second);
        assert_eq!(store.form_ids().collect::<Vec<_>>(), vec![FormId(1), FormId(2)]);
    }

    #[test]
    fn resave_keeps_id() {
        let mut store = MemoryStore::new();
        let mut form = store.save_form(active_form()).unwrap();
        form.title = "Attendance (week 2)".into();
        let saved = store.save_form(form).unwrap();
        assert_eq!(saved.id, Some(FormId(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.load_form(FormId(1)).unwrap().title, "Attendance (week 2)");
    }

    #[test]
    fn save_rejects_invalid_schema() {
        let mut store = MemoryStore::new();
        let err = store
            .save_form(Form::new("Empty", Category::Survey))
            .unwrap_err();
        assert_eq!(err.violations()[0].kind, ViolationKind::NoQuestions);
        assert!(store.is_empty());
    }

    #[test]
    fn save_rejects_blank_keys() {
        let mut store = MemoryStore::new();
        let mut form = active_form();
        form.questions[0].key = "".into();

        let err = store.save_form(form).unwrap_err();
        assert_eq!(err.violations()[0].kind, ViolationKind::InvalidQuestionKey);
        assert_eq!(err.violations()[0].path.as_str(), "form.questions[0].key");
        assert!(store.is_empty());
    }

    #[test]
    fn save_with_foreign_id_fails() {
        let mut store = MemoryStore::new();
        let mut form = active_form();
        form.id = Some(FormId(42));
        assert!(store.save_form(form).unwrap_err().is_not_found());
    }

    #[test]
    fn load_missing() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.load_form(FormId(7)),
            Err(EngineError::NotFound(FormId(7)))
        ));
    }

    #[test]
    fn submissions_are_validated() {
        let mut store = MemoryStore::new();
        let id = store.save_form(active_form()).unwrap().id.unwrap();

        let rejected = store
            .submit_answers(id, AnswerSet::new().with("q1", "s-104").with("q2", "Maybe"))
            .unwrap();
        let SubmitOutcome::Rejected(violations) = rejected else {
            panic!("expected rejection");
        };
        assert_eq!(violations[0].kind, ViolationKind::NotAnOption);
        assert!(store.submissions(id).is_empty());

        let accepted = store
            .submit_answers(id, AnswerSet::new().with("q1", "s-104").with("q2", "Yes"))
            .unwrap();
        assert_eq!(
            accepted.receipt(),
            Some(Receipt {
                form_id: id,
                submission: 1
            })
        );
        assert_eq!(store.submissions(id).len(), 1);
    }

    #[test]
    fn only_active_forms_accept_answers() {
        let mut store = MemoryStore::new();
        let mut draft = active_form();
        draft.status = Status::Draft;
        let id = store.save_form(draft).unwrap().id.unwrap();

        assert!(matches!(
            store.submit_answers(id, AnswerSet::new()),
            Err(EngineError::FormNotActive(_))
        ));
        assert!(matches!(
            store.submit_answers(FormId(99), AnswerSet::new()),
            Err(EngineError::NotFound(_))
        ));
    }
}
