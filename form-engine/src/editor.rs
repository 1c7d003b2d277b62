//! Builder operations over a form schema.
//!
//! The editor lets a form pass through invalid states while it is being built;
//! only [`FormEditor::finish`] gates on a fully valid schema. Every operation
//! either succeeds or leaves the form exactly as it was.

use log::{debug, warn};

use crate::{
    Category, Constraints, Declared, EngineError, Form, Question, QuestionType, SchemaLimits,
    Status, TypeRules, ValidationMode, ValidationResult, validate_schema_with,
};

/// Text given to freshly added questions.
pub const DEFAULT_QUESTION_TEXT: &str = "Untitled question";

/// Type given to freshly added questions.
pub const DEFAULT_QUESTION_TYPE: QuestionType = QuestionType::ShortText;

/// Owns a form while it is being built.
///
/// # Example
///
/// ```
/// use form_engine::{Category, Form, FormEditor, QuestionType, ViolationKind};
///
/// let mut editor = FormEditor::new(Form::new("Open day", Category::Survey));
/// let index = editor.add_question();
/// editor.change_question_type(index, QuestionType::Dropdown).unwrap();
///
/// let result = editor.validate();
/// assert_eq!(result.kinds(), vec![ViolationKind::OptionsRequired]);
///
/// editor.add_option(index).unwrap();
/// assert!(editor.validate().is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormEditor {
    form: Form,
    limits: SchemaLimits,
}

impl FormEditor {
    /// Start editing a form.
    pub fn new(form: Form) -> Self {
        Self {
            form,
            limits: SchemaLimits::default(),
        }
    }

    /// Use custom limits for validation.
    pub fn with_limits(mut self, limits: SchemaLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The form as currently edited.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Stop editing without validating.
    pub fn into_form(self) -> Form {
        self.form
    }

    /// Validate the form as an in-progress draft.
    pub fn validate(&self) -> ValidationResult {
        validate_schema_with(&self.form, &self.limits, ValidationMode::Editing)
    }

    /// Stop editing, returning the form only if it is ready to be saved.
    pub fn finish(self) -> Result<Form, EngineError> {
        validate_schema_with(&self.form, &self.limits, ValidationMode::Persist).into_result()?;
        Ok(self.form)
    }

    // === Form metadata ===

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.form.description = description;
    }

    pub fn set_category(&mut self, category: Category) {
        self.form.category = Declared::Known(category);
    }

    /// Move the form to another administrative status.
    ///
    /// Structure is not re-validated.
    pub fn set_status(&mut self, status: Status) -> Result<(), EngineError> {
        let from = self.form.status;
        if !from.can_transition_to(status) {
            warn!("Rejected status change of '{}' from {from} to {status}", self.form.title);
            return Err(EngineError::InvalidStatusTransition { from, to: status });
        }
        self.form.status = status;
        debug!("Form '{}' is now {status}", self.form.title);
        Ok(())
    }

    // === Questions ===

    /// Append a required short-text question; returns its index.
    pub fn add_question(&mut self) -> usize {
        let key = self.form.next_key();
        debug!("Adding question {key}");
        self.form.questions.push(Question::new(
            key,
            DEFAULT_QUESTION_TEXT,
            DEFAULT_QUESTION_TYPE,
        ));
        self.form.questions.len() - 1
    }

    /// Remove a question, keeping the order of the rest.
    pub fn remove_question(&mut self, index: usize) -> Result<Question, EngineError> {
        self.check_index(index)?;
        let removed = self.form.questions.remove(index);
        debug!("Removed question {} at {index}", removed.key);
        Ok(removed)
    }

    /// Insert a copy of a question directly after it; returns the copy's index.
    pub fn duplicate_question(&mut self, index: usize) -> Result<usize, EngineError> {
        let mut copy = self.question(index)?.clone();
        copy.key = self.form.next_key();
        debug!("Duplicating question at {index} as {}", copy.key);
        self.form.questions.insert(index + 1, copy);
        Ok(index + 1)
    }

    /// Swap a question with the one before it. No-op for the first question.
    pub fn move_question_up(&mut self, index: usize) -> Result<(), EngineError> {
        self.check_index(index)?;
        if index > 0 {
            self.form.questions.swap(index - 1, index);
        }
        Ok(())
    }

    /// Swap a question with the one after it. No-op for the last question.
    pub fn move_question_down(&mut self, index: usize) -> Result<(), EngineError> {
        self.check_index(index)?;
        if index + 1 < self.form.questions.len() {
            self.form.questions.swap(index, index + 1);
        }
        Ok(())
    }

    pub fn set_question_text(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), EngineError> {
        self.question_mut(index)?.text = text.into();
        Ok(())
    }

    pub fn set_required(&mut self, index: usize, required: bool) -> Result<(), EngineError> {
        self.question_mut(index)?.required = required;
        Ok(())
    }

    /// Change a question's type.
    ///
    /// Options always start over empty, and constraints the new type does not
    /// allow are dropped.
    pub fn change_question_type(
        &mut self,
        index: usize,
        kind: QuestionType,
    ) -> Result<(), EngineError> {
        let question = self.question_mut(index)?;
        debug!("Question {} changes type {} -> {kind}", question.key, question.kind);
        question.kind = Declared::Known(kind);
        question.options.clear();
        question.constraints.retain_applicable(&kind.rules());
        Ok(())
    }

    // === Options ===

    /// Append an option to a choice question; returns its index.
    pub fn add_option(&mut self, index: usize) -> Result<usize, EngineError> {
        let question = self.question_where(index, |rules| rules.needs_options)?;
        let label = (question.options.len() + 1..)
            .map(|n| format!("Option {n}"))
            .find(|label| !question.options.contains(label))
            .unwrap_or_default();
        question.options.push(label);
        Ok(question.options.len() - 1)
    }

    /// Remove an option from a choice question.
    pub fn remove_option(&mut self, index: usize, option: usize) -> Result<String, EngineError> {
        let question = self.question_where(index, |rules| rules.needs_options)?;
        let len = question.options.len();
        if option >= len {
            return Err(reject(EngineError::IndexOutOfRange { index: option, len }));
        }
        Ok(question.options.remove(option))
    }

    pub fn set_option_text(
        &mut self,
        index: usize,
        option: usize,
        text: impl Into<String>,
    ) -> Result<(), EngineError> {
        let question = self.question_where(index, |rules| rules.needs_options)?;
        let len = question.options.len();
        let slot = question
            .options
            .get_mut(option)
            .ok_or_else(|| reject(EngineError::IndexOutOfRange { index: option, len }))?;
        *slot = text.into();
        Ok(())
    }

    // === Constraints ===

    pub fn set_numeric_bounds(
        &mut self,
        index: usize,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<(), EngineError> {
        let question = self.question_where(index, |rules| rules.allows_numeric_bounds)?;
        question.constraints.min = min;
        question.constraints.max = max;
        Ok(())
    }

    pub fn set_date_bounds(
        &mut self,
        index: usize,
        min_date: Option<chrono::NaiveDate>,
        max_date: Option<chrono::NaiveDate>,
    ) -> Result<(), EngineError> {
        let question = self.question_where(index, |rules| rules.allows_date_bounds)?;
        question.constraints.min_date = min_date;
        question.constraints.max_date = max_date;
        Ok(())
    }

    /// Restrict a file question to the given extensions, or lift the
    /// restriction with `None`.
    ///
    /// Extensions are stored lowercase without a leading dot.
    pub fn set_allowed_extensions<I, S>(
        &mut self,
        index: usize,
        extensions: Option<I>,
    ) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let question = self.question_where(index, |rules| rules.allows_file_filter)?;
        question.constraints.allowed_extensions = extensions.map(|exts| {
            exts.into_iter()
                .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
                .collect()
        });
        Ok(())
    }

    /// Drop every constraint from a question.
    pub fn clear_constraints(&mut self, index: usize) -> Result<(), EngineError> {
        self.question_mut(index)?.constraints = Constraints::none();
        Ok(())
    }

    // === Helpers ===

    fn check_index(&self, index: usize) -> Result<(), EngineError> {
        let len = self.form.questions.len();
        if index < len {
            Ok(())
        } else {
            Err(reject(EngineError::IndexOutOfRange { index, len }))
        }
    }

    fn question(&self, index: usize) -> Result<&Question, EngineError> {
        self.check_index(index)?;
        Ok(&self.form.questions[index])
    }

    fn question_mut(&mut self, index: usize) -> Result<&mut Question, EngineError> {
        self.check_index(index)?;
        Ok(&mut self.form.questions[index])
    }

    /// The question at `index`, provided its type satisfies `allowed`.
    fn question_where(
        &mut self,
        index: usize,
        allowed: impl Fn(&TypeRules) -> bool,
    ) -> Result<&mut Question, EngineError> {
        let question = self.question_mut(index)?;
        let kind = question.known_type().map_err(reject)?;
        if !allowed(&kind.rules()) {
            return Err(reject(EngineError::InvalidQuestionType { index, kind }));
        }
        Ok(question)
    }
}

fn reject(err: EngineError) -> EngineError {
    warn!("Rejected edit: {err}");
    err
}
