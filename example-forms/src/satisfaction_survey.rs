use form_engine::{AnswerSet, Category, Constraints, Form, Question, QuestionType, Status};

/// Ratings offered for every aspect.
pub const RATINGS: [&str; 5] = ["Very poor", "Poor", "Okay", "Good", "Excellent"];

/// End-of-term survey. Mostly optional questions.
pub fn survey_form() -> Form {
    let mut form = Form::new("End of term survey", Category::Survey)
        .with_question(
            Question::new("q1", "How was the course overall?", QuestionType::SingleChoice)
                .with_options(RATINGS),
        )
        .with_question(
            Question::new("q2", "Hours spent per week", QuestionType::Number)
                .optional()
                .with_constraints(Constraints::numeric(Some(0.0), None)),
        )
        .with_question(
            Question::new("q3", "What should change?", QuestionType::LongText).optional(),
        )
        .with_question(
            Question::new("q4", "May we contact you?", QuestionType::Email).optional(),
        );
    form.status = Status::Active;
    form
}

/// Only the required answer.
pub fn survey_answers() -> AnswerSet {
    AnswerSet::new().with("q1", "Good")
}
