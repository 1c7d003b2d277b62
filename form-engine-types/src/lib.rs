//! Core types for the form-engine crate.
//!
//! This crate provides the foundational types for defining dynamic forms:
//! - `Form` and `Question` - The schema a form builder edits
//! - `QuestionType` and `TypeRules` - The registry of per-type structural rules
//! - `AnswerSet` and `AnswerValue` - Submitted answers keyed by question
//! - `Violation` and `ValidationResult` - Field-addressable validation output
//! - `FormStore` - The persistence collaborator contract

mod field_path;
pub use field_path::FieldPath;

mod declared;
pub use declared::Declared;

mod question_type;
pub use question_type::{AnswerShape, InputKind, QuestionType, TypeRules, rules_for};

mod question;
pub use question::{Constraints, Question, QuestionKey};

mod form;
pub use form::{Category, Form, FormId, Status};

mod answer_value;
pub use answer_value::{AnswerValue, FileDescriptor};

mod answers;
pub use answers::AnswerSet;

mod violation;
pub use violation::{ValidationResult, Violation, ViolationKind, Violations};

mod limits;
pub use limits::{SchemaLimits, ValidationMode};

mod error;
pub use error::EngineError;

mod traits;
pub use traits::{FormStore, Receipt, SubmitOutcome};
