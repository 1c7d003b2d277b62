use std::fmt;

use crate::{EngineError, FieldPath};

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    // Schema structure
    TitleMissing,
    TitleTooLong,
    DescriptionTooLong,
    UnknownCategory,
    NoQuestions,
    QuestionTextMissing,
    InvalidQuestionKey,
    DuplicateQuestionKey,
    UnknownQuestionType,
    OptionsRequired,
    EmptyOption,
    DuplicateOption,
    UnexpectedOptions,
    UnexpectedConstraint,
    NonFiniteBound,
    InvertedBounds,
    EmptyExtensionFilter,
    InvalidExtension,
    DuplicateExtension,

    // Answers
    RequiredFieldMissing,
    ShapeMismatch,
    InvalidFormat,
    NotAnOption,
    DuplicateSelection,
    OutOfRange,
    DisallowedFileType,
    UnexpectedAnswer,
}

impl ViolationKind {
    /// Check if this kind is raised by the answer validator.
    pub fn is_answer_violation(self) -> bool {
        matches!(
            self,
            Self::RequiredFieldMissing
                | Self::ShapeMismatch
                | Self::InvalidFormat
                | Self::NotAnOption
                | Self::DuplicateSelection
                | Self::OutOfRange
                | Self::DisallowedFileType
                | Self::UnexpectedAnswer
        )
    }
}

/// A single field-addressable validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: FieldPath,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(path: FieldPath, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Outcome of validating a schema or an answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// Every problem found, in field order. Never empty.
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    /// Build a result from a collected list of violations.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// All violations (empty when valid).
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Valid => &[],
            Self::Invalid(violations) => violations,
        }
    }

    /// Violations at exactly `path`.
    pub fn violations_at<'a>(&'a self, path: &'a FieldPath) -> impl Iterator<Item = &'a Violation> {
        self.violations().iter().filter(move |v| &v.path == path)
    }

    /// Kinds of all violations, in order.
    pub fn kinds(&self) -> Vec<ViolationKind> {
        self.violations().iter().map(|v| v.kind).collect()
    }

    /// Consume the result, returning the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        match self {
            Self::Valid => Vec::new(),
            Self::Invalid(violations) => violations,
        }
    }

    /// Convert into a `Result` so callers can gate on validity with `?`.
    pub fn into_result(self) -> Result<(), EngineError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violations) => Err(EngineError::Invalid(violations)),
        }
    }
}

/// Collects violations while keeping at most one per path.
#[derive(Debug, Default)]
pub struct Violations {
    list: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unless `path` already has one.
    pub fn report(&mut self, path: FieldPath, kind: ViolationKind, message: impl Into<String>) {
        if !self.has(&path) {
            self.list.push(Violation::new(path, kind, message));
        }
    }

    /// Check if a violation was already recorded at `path`.
    pub fn has(&self, path: &FieldPath) -> bool {
        self.list.iter().any(|v| &v.path == path)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn finish(self) -> ValidationResult {
        ValidationResult::from_violations(self.list)
    }
}
