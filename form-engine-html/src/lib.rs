//! # form-engine-html
//!
//! Render a form as a fillable HTML document.
//!
//! The renderer works from the engine's read-only preview, so the HTML shows
//! exactly what [`form_engine::present`] reports: one input per question,
//! chosen through the question type registry, with current answers filled in
//! and their violations shown next to the field.
//!
//! ## Usage
//!
//! ```rust
//! use form_engine::{AnswerSet, Category, Form, Question, QuestionType};
//! use form_engine_html::{HtmlOptions, to_html};
//!
//! let form = Form::new("Feedback", Category::Survey)
//!     .with_question(Question::new("q1", "Your email", QuestionType::Email));
//! let answers = AnswerSet::new().with("q1", "not-an-email");
//!
//! let html = to_html(&form, Some(&answers), &HtmlOptions::new()).unwrap();
//! assert!(html.contains("type=\"email\""));
//! assert!(html.contains("Enter a valid email"));
//! ```
//!
//! No stylesheet is emitted; every element carries a class under
//! [`HtmlOptions::class_prefix`] for the host page to style.

mod generator;

pub use generator::{HtmlOptions, to_html};
