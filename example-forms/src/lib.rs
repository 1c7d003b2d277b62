//! Ready-made forms used by tests, doctests and the HTML preview.
//!
//! Every form here passes the schema validator in persist mode and comes
//! with a matching answer set that passes the answer validator.

pub mod admission;
pub mod attendance;
pub mod job_interview;
pub mod satisfaction_survey;

// Re-export admission forms
pub use admission::{admission_answers, admission_form};

// Re-export attendance forms
pub use attendance::{attendance_answers, attendance_form};

// Re-export job_interview forms
pub use job_interview::{interview_answers, interview_form};

// Re-export satisfaction_survey forms
pub use satisfaction_survey::{survey_answers, survey_form};

use form_engine::Form;

/// All sample forms, in module order.
pub fn all_forms() -> Vec<Form> {
    vec![
        admission_form(),
        attendance_form(),
        interview_form(),
        survey_form(),
    ]
}
