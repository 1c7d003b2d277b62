//! # form-engine
//!
//! Dynamic form definitions with builder operations, schema validation,
//! answer validation and preview. Presentation-agnostic.
//!
//! A [`Form`] is plain data: a title, a category, a lifecycle status and an
//! ordered list of typed questions. Everything that can be said about a
//! question type (does it take options, which constraints apply, what shape
//! its answers have, how it is drawn) lives in one place, the
//! [`QuestionType`] registry, and every component here reads from it.
//!
//! ## Usage
//!
//! ```rust
//! use form_engine::{
//!     AnswerSet, Category, Constraints, Form, Question, QuestionType, ViolationKind,
//!     validate_answers, validate_schema,
//! };
//!
//! let form = Form::new("Admission", Category::Admission).with_question(
//!     Question::new("q1", "Age", QuestionType::Number)
//!         .with_constraints(Constraints::numeric(Some(18.0), Some(99.0))),
//! );
//! assert!(validate_schema(&form).is_valid());
//!
//! let result = validate_answers(&form, &AnswerSet::new().with("q1", "17")).unwrap();
//! assert_eq!(result.kinds(), vec![ViolationKind::OutOfRange]);
//! ```
//!
//! ## Components
//!
//! - [`validate_schema`] / [`validate_draft`] - Structural checks on a form
//! - [`FormEditor`] - Builder operations that keep a form editable
//! - [`validate_answers`] - Checks a submission against a form
//! - [`present`] - Per-question views for a renderer
//! - [`MemoryStore`] - An in-memory [`FormStore`]
//!
//! The `form-engine-html` crate turns [`present`] output into HTML.

// Re-export all types from form-engine-types
pub use form_engine_types::*;

mod schema_validator;
pub use schema_validator::{validate_draft, validate_schema, validate_schema_with};

mod editor;
pub use editor::{DEFAULT_QUESTION_TEXT, DEFAULT_QUESTION_TYPE, FormEditor};

mod answer_validator;
pub use answer_validator::validate_answers;

mod preview;
pub use preview::{FieldView, present};

// Store for embedding and tests without a backend
mod memory_store;
pub use memory_store::MemoryStore;
