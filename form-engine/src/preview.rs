//! Read-only presentation of a form.

use crate::{
    AnswerSet, AnswerValue, Constraints, EngineError, FieldPath, Form, InputKind, QuestionKey,
    Violation, validate_answers,
};

/// Everything a UI needs to draw one question.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub key: QuestionKey,
    pub text: String,
    pub required: bool,
    pub input_kind: InputKind,
    /// Choices for radio, checkbox and select inputs.
    pub options: Vec<String>,
    pub constraints: Constraints,
    /// The answer given so far, if any.
    pub current_value: Option<AnswerValue>,
    /// Violations of the current answers that concern this field.
    pub current_errors: Vec<Violation>,
}

impl FieldView {
    /// Check if this field currently has errors.
    pub fn has_errors(&self) -> bool {
        !self.current_errors.is_empty()
    }
}

/// Build one view per question, in form order.
///
/// With `answers`, each view carries its current value and the answer
/// validator's verdict for it. Without, values and errors are empty.
/// Nothing is mutated, so repeated calls give equal results.
pub fn present(form: &Form, answers: Option<&AnswerSet>) -> Result<Vec<FieldView>, EngineError> {
    let violations = match answers {
        Some(answers) => validate_answers(form, answers)?.into_violations(),
        None => Vec::new(),
    };
    let root = FieldPath::answers();

    form.questions
        .iter()
        .map(|question| {
            let kind = question.known_type()?;
            let path = root.child(question.key.as_str());
            Ok(FieldView {
                key: question.key.clone(),
                text: question.text.clone(),
                required: question.required,
                input_kind: kind.rules().input_kind,
                options: question.options.clone(),
                constraints: question.constraints.clone(),
                current_value: answers.and_then(|a| a.get(&question.key)).cloned(),
                current_errors: violations
                    .iter()
                    .filter(|v| v.path == path)
                    .cloned()
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Declared, Question, QuestionType, ViolationKind};

    fn sample() -> Form {
        Form::new("Open day", Category::Survey)
            .with_question(Question::new("q1", "Name", QuestionType::ShortText))
            .with_question(
                Question::new("q2", "Year", QuestionType::SingleChoice)
                    .with_options(["First", "Second"]),
            )
            .with_question(
                Question::new("q3", "Interests", QuestionType::MultiChoice)
                    .with_options(["Art", "Math"])
                    .optional(),
            )
            .with_question(Question::new("q4", "Photo", QuestionType::File).optional())
    }

    #[test]
    fn input_kinds_follow_registry() {
        let views = present(&sample(), None).unwrap();
        let kinds: Vec<_> = views.iter().map(|v| v.input_kind).collect();
        assert_eq!(
            kinds,
            vec![
                InputKind::TextLine,
                InputKind::RadioGroup,
                InputKind::CheckboxGroup,
                InputKind::FilePicker
            ]
        );
        assert!(views.iter().all(|v| v.current_value.is_none() && !v.has_errors()));
        assert_eq!(views[1].options, vec!["First", "Second"]);
    }

    #[test]
    fn errors_attach_to_their_fields() {
        let answers = AnswerSet::new().with("q2", "Third").with("q3", vec!["Art"]);
        let views = present(&sample(), Some(&answers)).unwrap();

        assert_eq!(
            views[0].current_errors[0].kind,
            ViolationKind::RequiredFieldMissing
        );
        assert_eq!(views[1].current_errors[0].kind, ViolationKind::NotAnOption);
        assert_eq!(views[1].current_value, Some(AnswerValue::from("Third")));
        assert!(!views[2].has_errors());
        assert!(!views[3].has_errors());
    }

    #[test]
    fn presenting_is_repeatable() {
        let form = sample();
        let answers = AnswerSet::new().with("q1", "Ada");
        let before = form.clone();
        let first = present(&form, Some(&answers)).unwrap();
        assert_eq!(present(&form, Some(&answers)).unwrap(), first);
        assert_eq!(form, before);
    }

    #[test]
    fn unknown_type_fails() {
        let mut form = sample();
        form.questions[3].kind = Declared::Unknown("camera".into());
        assert!(present(&form, None).is_err());
    }
}
