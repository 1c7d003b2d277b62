use form_engine::{AnswerSet, Category, Form, Question, QuestionType, Status};

/// Daily attendance sheet: the smallest useful form.
pub fn attendance_form() -> Form {
    let mut form = Form::new("Daily attendance", Category::Attendance)
        .with_question(Question::new("q1", "Student id", QuestionType::ShortText))
        .with_question(
            Question::new("q2", "Status", QuestionType::SingleChoice)
                .with_options(["Present", "Late", "Absent"]),
        )
        .with_question(Question::new("q3", "Arrival time", QuestionType::Time).optional());
    form.status = Status::Active;
    form
}

pub fn attendance_answers() -> AnswerSet {
    AnswerSet::new()
        .with("q1", "s-1042")
        .with("q2", "Late")
        .with("q3", "08:47")
}
