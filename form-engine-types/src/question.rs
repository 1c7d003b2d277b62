use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Declared, EngineError, QuestionType, TypeRules};

/// Stable identity of a question within its form, e.g. `q3`.
///
/// Answers are keyed by this rather than by position, so reordering questions
/// does not misattribute answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionKey(String);

impl QuestionKey {
    /// Create a key from arbitrary text.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key allocated for the `n`th question (`q{n}`).
    pub fn numbered(n: u64) -> Self {
        Self(format!("q{n}"))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `n` of a `q{n}` key, if this key has that form.
    pub fn number(&self) -> Option<u64> {
        self.0.strip_prefix('q')?.parse().ok()
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Type-specific constraints on a question's answer.
///
/// Which fields may be set depends on the question type; see [`TypeRules`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Smallest accepted number (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Largest accepted number (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Earliest accepted date (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,

    /// Latest accepted date (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<NaiveDate>,

    /// Accepted file extensions: lowercase, no leading dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_extensions: Option<Vec<String>>,
}

impl Constraints {
    /// No constraints at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Numeric bounds.
    pub fn numeric(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Date bounds.
    pub fn dates(min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> Self {
        Self {
            min_date,
            max_date,
            ..Self::default()
        }
    }

    /// An extension filter for file questions.
    pub fn extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_extensions: Some(extensions.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Check if no constraint is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Names of the set fields that `rules` does not allow.
    pub fn disallowed_fields(&self, rules: &TypeRules) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if !rules.allows_numeric_bounds {
            if self.min.is_some() {
                fields.push("min");
            }
            if self.max.is_some() {
                fields.push("max");
            }
        }
        if !rules.allows_date_bounds {
            if self.min_date.is_some() {
                fields.push("minDate");
            }
            if self.max_date.is_some() {
                fields.push("maxDate");
            }
        }
        if !rules.allows_file_filter && self.allowed_extensions.is_some() {
            fields.push("allowedExtensions");
        }
        fields
    }

    /// Keep only the fields that `rules` allows.
    pub fn retain_applicable(&mut self, rules: &TypeRules) {
        if !rules.allows_numeric_bounds {
            self.min = None;
            self.max = None;
        }
        if !rules.allows_date_bounds {
            self.min_date = None;
            self.max_date = None;
        }
        if !rules.allows_file_filter {
            self.allowed_extensions = None;
        }
    }
}

/// A single prompt within a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identity used to key answers.
    pub key: QuestionKey,

    /// The prompt text shown to the respondent.
    pub text: String,

    /// The declared question type.
    #[serde(rename = "type")]
    pub kind: Declared<QuestionType>,

    /// Whether an answer must be supplied.
    #[serde(default)]
    pub required: bool,

    /// Choices, in presentation order. Only choice types carry any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Type-specific answer constraints.
    #[serde(default, skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
}

impl Question {
    /// Create a required question with no options or constraints.
    pub fn new(key: impl Into<QuestionKey>, text: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            kind: Declared::Known(kind),
            required: true,
            options: Vec::new(),
            constraints: Constraints::none(),
        }
    }

    /// Set whether the question is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Make the question optional.
    pub fn optional(self) -> Self {
        self.with_required(false)
    }

    /// Set the choices.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Set the constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// The declared type, if it is a known one.
    pub fn question_type(&self) -> Option<QuestionType> {
        self.kind.get()
    }

    /// The declared type, failing with [`EngineError::UnknownQuestionType`]
    /// if it is not a known one.
    pub fn known_type(&self) -> Result<QuestionType, EngineError> {
        match &self.kind {
            Declared::Known(kind) => Ok(*kind),
            Declared::Unknown(raw) => Err(EngineError::UnknownQuestionType(raw.clone())),
        }
    }
}
