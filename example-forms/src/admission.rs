use chrono::NaiveDate;
use form_engine::{
    AnswerSet, Category, Constraints, FileDescriptor, Form, Question, QuestionType, Status,
};

/// Grades a new applicant may enter.
pub const GRADES: [&str; 4] = ["Grade 9", "Grade 10", "Grade 11", "Grade 12"];

/// School admission: covers every question type.
pub fn admission_form() -> Form {
    let mut form = Form::new("Admission 2027", Category::Admission)
        .with_description("Application for the 2027 intake. All times are local.")
        .with_question(Question::new("q1", "Applicant's full name", QuestionType::ShortText))
        .with_question(
            Question::new("q2", "Date of birth", QuestionType::Date).with_constraints(
                Constraints::dates(
                    NaiveDate::from_ymd_opt(2005, 1, 1),
                    NaiveDate::from_ymd_opt(2015, 12, 31),
                ),
            ),
        )
        .with_question(
            Question::new("q3", "Age on 1 September", QuestionType::Number)
                .with_constraints(Constraints::numeric(Some(12.0), Some(20.0))),
        )
        .with_question(Question::new("q4", "Parent email", QuestionType::Email))
        .with_question(Question::new("q5", "Parent phone", QuestionType::Phone))
        .with_question(
            Question::new("q6", "Grade applying for", QuestionType::Dropdown).with_options(GRADES),
        )
        .with_question(
            Question::new("q7", "Boarding", QuestionType::SingleChoice)
                .with_options(["Day pupil", "Weekly boarder", "Full boarder"]),
        )
        .with_question(
            Question::new("q8", "Activities of interest", QuestionType::MultiChoice)
                .with_options(["Music", "Sport", "Drama", "Robotics"])
                .optional(),
        )
        .with_question(
            Question::new("q9", "Preferred interview time", QuestionType::Time).optional(),
        )
        .with_question(
            Question::new("q10", "Why this school?", QuestionType::LongText).optional(),
        )
        .with_question(
            Question::new("q11", "Latest school report", QuestionType::File)
                .with_constraints(Constraints::extensions(["pdf", "jpg", "png"])),
        );
    form.status = Status::Active;
    form
}

/// A complete, valid application.
pub fn admission_answers() -> AnswerSet {
    AnswerSet::new()
        .with("q1", "Ada Lovelace")
        .with("q2", "2012-12-10")
        .with("q3", "14")
        .with("q4", "parent@example.org")
        .with("q5", "+44 20 7946 0958")
        .with("q6", "Grade 10")
        .with("q7", "Weekly boarder")
        .with("q8", vec!["Music", "Robotics"])
        .with("q9", "14:30")
        .with("q11", FileDescriptor::named("report-2026.PDF"))
}
