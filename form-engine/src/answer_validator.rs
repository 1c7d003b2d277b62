//! Validation of submitted answers against a form schema.

use chrono::{NaiveDate, NaiveTime};
use log::debug;

use crate::{
    AnswerSet, AnswerValue, EngineError, FieldPath, Form, Question, QuestionType,
    ValidationResult, ViolationKind, Violations,
};

type Failure = (ViolationKind, String);

/// Validate an answer set against a form.
///
/// Questions are checked in schema order; each gets at most one violation at
/// `answers.<key>`. An optional question without an answer is always fine.
/// Answers for keys the form does not have are reported as unexpected.
///
/// Fails only if the schema itself holds an unknown question type.
///
/// # Example
///
/// ```
/// use form_engine::{
///     AnswerSet, Category, Constraints, Form, Question, QuestionType, ViolationKind,
///     validate_answers,
/// };
///
/// let form = Form::new("Screening", Category::Interview).with_question(
///     Question::new("q1", "Score", QuestionType::Number)
///         .with_constraints(Constraints::numeric(Some(1.0), Some(10.0))),
/// );
///
/// let ok = validate_answers(&form, &AnswerSet::new().with("q1", "5")).unwrap();
/// assert!(ok.is_valid());
///
/// let high = validate_answers(&form, &AnswerSet::new().with("q1", "11")).unwrap();
/// assert_eq!(high.kinds(), vec![ViolationKind::OutOfRange]);
/// ```
pub fn validate_answers(form: &Form, answers: &AnswerSet) -> Result<ValidationResult, EngineError> {
    let mut violations = Violations::new();
    let root = FieldPath::answers();

    for question in &form.questions {
        let kind = question.known_type()?;
        let path = root.child(question.key.as_str());

        let Some(value) = answers.value_of(&question.key) else {
            if question.required {
                violations.report(
                    path,
                    ViolationKind::RequiredFieldMissing,
                    "This field is required",
                );
            }
            continue;
        };

        if let Err((violation, message)) = check_answer(question, kind, value) {
            violations.report(path, violation, message);
        }
    }

    for key in answers.keys() {
        if form.find(key).is_none() {
            violations.report(
                root.child(key.as_str()),
                ViolationKind::UnexpectedAnswer,
                format!("This form has no question '{key}'"),
            );
        }
    }

    debug!(
        "Answer check for '{}': {} answer(s), {} violation(s)",
        form.title,
        answers.len(),
        violations.len()
    );
    Ok(violations.finish())
}

fn check_answer(question: &Question, kind: QuestionType, value: &AnswerValue) -> Result<(), Failure> {
    let expected = kind.rules().answer_shape;
    if value.shape() != expected {
        return Err((
            ViolationKind::ShapeMismatch,
            format!("Expected {}, got {}", expected.name(), value.shape().name()),
        ));
    }

    let constraints = &question.constraints;
    match (kind, value) {
        (QuestionType::ShortText | QuestionType::LongText, _) => Ok(()),

        (QuestionType::Number, AnswerValue::Text(text)) => {
            let number = parse_number(text)?;
            check_range(number, constraints.min, constraints.max)
        }

        (QuestionType::Date, AnswerValue::Text(text)) => {
            let date = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
                (
                    ViolationKind::InvalidFormat,
                    "Enter a date as YYYY-MM-DD".to_string(),
                )
            })?;
            check_range(date, constraints.min_date, constraints.max_date)
        }

        (QuestionType::Time, AnswerValue::Text(text)) => {
            let text = text.trim();
            NaiveTime::parse_from_str(text, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
                .map(drop)
                .map_err(|_| {
                    (
                        ViolationKind::InvalidFormat,
                        "Enter a time as HH:MM".to_string(),
                    )
                })
        }

        (QuestionType::Email, AnswerValue::Text(text)) => {
            if is_email(text.trim()) {
                Ok(())
            } else {
                Err((
                    ViolationKind::InvalidFormat,
                    "Enter a valid email (e.g., you@example.com)".to_string(),
                ))
            }
        }

        (QuestionType::Phone, AnswerValue::Text(text)) => {
            if is_phone(text.trim()) {
                Ok(())
            } else {
                Err((
                    ViolationKind::InvalidFormat,
                    "Enter a phone number of 7 to 15 digits".to_string(),
                ))
            }
        }

        (QuestionType::SingleChoice | QuestionType::Dropdown, AnswerValue::Text(choice)) => {
            check_option(&question.options, choice)
        }

        (QuestionType::MultiChoice, AnswerValue::List(choices)) => {
            for (index, choice) in choices.iter().enumerate() {
                check_option(&question.options, choice)?;
                if choices[..index].contains(choice) {
                    return Err((
                        ViolationKind::DuplicateSelection,
                        format!("'{choice}' is selected more than once"),
                    ));
                }
            }
            Ok(())
        }

        (QuestionType::File, AnswerValue::File(file)) => {
            let Some(allowed) = &constraints.allowed_extensions else {
                return Ok(());
            };
            let accepted = file
                .extension()
                .is_some_and(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext)));
            if accepted {
                Ok(())
            } else {
                Err((
                    ViolationKind::DisallowedFileType,
                    format!("Allowed file types: {}", allowed.join(", ")),
                ))
            }
        }

        // Shapes were checked above, so no other pairing can occur.
        _ => Err((
            ViolationKind::ShapeMismatch,
            format!("Expected {}", expected.name()),
        )),
    }
}

fn parse_number(text: &str) -> Result<f64, Failure> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| (ViolationKind::InvalidFormat, "Enter a number".to_string()))
}

fn check_range<T>(value: T, min: Option<T>, max: Option<T>) -> Result<(), Failure>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    let below = min.is_some_and(|min| value < min);
    let above = max.is_some_and(|max| value > max);
    if !below && !above {
        return Ok(());
    }
    let message = match (min, max) {
        (Some(min), Some(max)) => format!("Must be between {min} and {max}"),
        (Some(min), None) => format!("Must be at least {min}"),
        (None, Some(max)) => format!("Must be at most {max}"),
        (None, None) => "Value is out of range".to_string(),
    };
    Err((ViolationKind::OutOfRange, message))
}

fn check_option(options: &[String], choice: &str) -> Result<(), Failure> {
    if options.iter().any(|option| option == choice) {
        Ok(())
    } else {
        Err((
            ViolationKind::NotAnOption,
            format!("'{choice}' is not one of the options"),
        ))
    }
}

fn is_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !text.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn is_phone(text: &str) -> bool {
    let allowed = text
        .chars()
        .enumerate()
        .all(|(i, c)| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')') || (c == '+' && i == 0));
    let digits = text.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=15).contains(&digits)
}
