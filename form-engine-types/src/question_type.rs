//! The question type registry.
//!
//! Every rule that depends on a question's type is looked up here, so adding a
//! type means adding one variant and one row in [`QuestionType::rules`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Declared, EngineError};

/// The closed set of question types a form may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Single-line free text.
    ShortText,
    /// Multi-line free text.
    LongText,
    /// A number, optionally bounded.
    Number,
    /// A calendar date, optionally bounded.
    Date,
    /// A time of day.
    Time,
    /// An email address.
    Email,
    /// A phone number.
    Phone,
    /// Pick exactly one option (radio buttons).
    SingleChoice,
    /// Pick any number of options (checkboxes).
    MultiChoice,
    /// Pick exactly one option (select box).
    Dropdown,
    /// An uploaded file, optionally filtered by extension.
    File,
}

/// How an answer to a question is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerShape {
    /// A single string.
    Scalar,
    /// A list of strings.
    Array,
    /// A file descriptor.
    File,
}

impl AnswerShape {
    /// Name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Scalar => "a single value",
            Self::Array => "a list of values",
            Self::File => "a file",
        }
    }
}

/// The kind of input widget a question is presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    TextLine,
    TextArea,
    Number,
    Date,
    Time,
    Email,
    Phone,
    RadioGroup,
    CheckboxGroup,
    Select,
    FilePicker,
}

/// Structural requirements of a question type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRules {
    /// Question must carry at least one option (and only then may carry any).
    pub needs_options: bool,
    /// `min`/`max` constraints are allowed.
    pub allows_numeric_bounds: bool,
    /// `minDate`/`maxDate` constraints are allowed.
    pub allows_date_bounds: bool,
    /// `allowedExtensions` constraint is allowed.
    pub allows_file_filter: bool,
    /// Shape of a submitted answer.
    pub answer_shape: AnswerShape,
    /// Widget used to present the question.
    pub input_kind: InputKind,
}

impl TypeRules {
    const fn scalar(input_kind: InputKind) -> Self {
        Self {
            needs_options: false,
            allows_numeric_bounds: false,
            allows_date_bounds: false,
            allows_file_filter: false,
            answer_shape: AnswerShape::Scalar,
            input_kind,
        }
    }

    const fn choice(answer_shape: AnswerShape, input_kind: InputKind) -> Self {
        Self {
            needs_options: true,
            answer_shape,
            ..Self::scalar(input_kind)
        }
    }
}

impl QuestionType {
    /// Every question type, in declaration order.
    pub const ALL: [QuestionType; 11] = [
        Self::ShortText,
        Self::LongText,
        Self::Number,
        Self::Date,
        Self::Time,
        Self::Email,
        Self::Phone,
        Self::SingleChoice,
        Self::MultiChoice,
        Self::Dropdown,
        Self::File,
    ];

    /// The snake_case name used in form documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShortText => "short_text",
            Self::LongText => "long_text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::SingleChoice => "single_choice",
            Self::MultiChoice => "multi_choice",
            Self::Dropdown => "dropdown",
            Self::File => "file",
        }
    }

    /// Look up the structural rules for this type.
    pub const fn rules(self) -> TypeRules {
        use InputKind as K;

        match self {
            Self::ShortText => TypeRules::scalar(K::TextLine),
            Self::LongText => TypeRules::scalar(K::TextArea),
            Self::Number => TypeRules {
                allows_numeric_bounds: true,
                ..TypeRules::scalar(K::Number)
            },
            Self::Date => TypeRules {
                allows_date_bounds: true,
                ..TypeRules::scalar(K::Date)
            },
            Self::Time => TypeRules::scalar(K::Time),
            Self::Email => TypeRules::scalar(K::Email),
            Self::Phone => TypeRules::scalar(K::Phone),
            Self::SingleChoice => TypeRules::choice(AnswerShape::Scalar, K::RadioGroup),
            Self::MultiChoice => TypeRules::choice(AnswerShape::Array, K::CheckboxGroup),
            Self::Dropdown => TypeRules::choice(AnswerShape::Scalar, K::Select),
            Self::File => TypeRules {
                allows_file_filter: true,
                answer_shape: AnswerShape::File,
                ..TypeRules::scalar(K::FilePicker)
            },
        }
    }

    /// Shorthand for `self.rules().needs_options`.
    pub fn needs_options(self) -> bool {
        self.rules().needs_options
    }
}

/// Look up the rules for a type as declared in a form document.
///
/// Fails with [`EngineError::UnknownQuestionType`] for text outside the
/// enumeration.
pub fn rules_for(kind: &Declared<QuestionType>) -> Result<TypeRules, EngineError> {
    match kind {
        Declared::Known(kind) => Ok(kind.rules()),
        Declared::Unknown(raw) => Err(EngineError::UnknownQuestionType(raw.clone())),
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EngineError::UnknownQuestionType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_choice_types_need_options() {
        let needing: Vec<_> = QuestionType::ALL
            .into_iter()
            .filter(|kind| kind.needs_options())
            .collect();
        assert_eq!(
            needing,
            vec![
                QuestionType::SingleChoice,
                QuestionType::MultiChoice,
                QuestionType::Dropdown
            ]
        );
    }

    #[test]
    fn constraint_payloads_are_exclusive() {
        for kind in QuestionType::ALL {
            let rules = kind.rules();
            let allowed = [
                rules.allows_numeric_bounds,
                rules.allows_date_bounds,
                rules.allows_file_filter,
            ];
            assert!(allowed.iter().filter(|a| **a).count() <= 1, "{kind}");
        }
        assert!(QuestionType::Number.rules().allows_numeric_bounds);
        assert!(QuestionType::Date.rules().allows_date_bounds);
        assert!(QuestionType::File.rules().allows_file_filter);
    }

    #[test]
    fn answer_shapes() {
        assert_eq!(
            QuestionType::MultiChoice.rules().answer_shape,
            AnswerShape::Array
        );
        assert_eq!(QuestionType::File.rules().answer_shape, AnswerShape::File);
        assert_eq!(
            QuestionType::Dropdown.rules().answer_shape,
            AnswerShape::Scalar
        );
    }

    #[test]
    fn parse_names() {
        for kind in QuestionType::ALL {
            assert_eq!(kind.as_str().parse::<QuestionType>().unwrap(), kind);
        }
        let err = "slider".parse::<QuestionType>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownQuestionType(raw) if raw == "slider"));
    }

    #[test]
    fn unknown_declared_type_fails_lookup() {
        let declared = Declared::<QuestionType>::Unknown("rating".into());
        assert!(rules_for(&declared).is_err());
        assert!(rules_for(&Declared::Known(QuestionType::Date)).is_ok());
    }

    #[test]
    fn serde_names_match_as_str() {
        for kind in QuestionType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
