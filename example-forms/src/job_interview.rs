use form_engine::{
    AnswerSet, Category, Constraints, FileDescriptor, Form, Question, QuestionType,
};

/// Interview scorecard, kept as a draft.
pub fn interview_form() -> Form {
    Form::new("Interview scorecard", Category::Interview)
        .with_description("Filled in by the panel after each interview.")
        .with_question(Question::new("q1", "Candidate", QuestionType::ShortText))
        .with_question(Question::new("q2", "Interviewer email", QuestionType::Email))
        .with_question(
            Question::new("q3", "Technical score", QuestionType::Number)
                .with_constraints(Constraints::numeric(Some(1.0), Some(10.0))),
        )
        .with_question(
            Question::new("q4", "Strengths", QuestionType::MultiChoice).with_options([
                "Communication",
                "Problem solving",
                "Domain knowledge",
                "Teamwork",
            ]),
        )
        .with_question(
            Question::new("q5", "Recommendation", QuestionType::Dropdown)
                .with_options(["Hire", "Second round", "Reject"]),
        )
        .with_question(Question::new("q6", "Notes", QuestionType::LongText).optional())
        .with_question(
            Question::new("q7", "Take-home submission", QuestionType::File)
                .optional()
                .with_constraints(Constraints::extensions(["zip", "tar"])),
        )
}

pub fn interview_answers() -> AnswerSet {
    AnswerSet::new()
        .with("q1", "Grace Hopper")
        .with("q2", "panel@example.com")
        .with("q3", "9.5")
        .with("q4", vec!["Problem solving", "Teamwork"])
        .with("q5", "Hire")
        .with("q7", FileDescriptor::named("solution.zip"))
}
