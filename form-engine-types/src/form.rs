use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Declared, Question, QuestionKey};

/// Identifier assigned to a form by the store on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub u64);

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "form#{}", self.0)
    }
}

/// What a form is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Admission,
    Interview,
    Survey,
    Attendance,
    Consent,
    Evaluation,
    Medical,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Self::Admission,
        Self::Interview,
        Self::Survey,
        Self::Attendance,
        Self::Consent,
        Self::Evaluation,
        Self::Medical,
        Self::Other,
    ];

    /// The snake_case name used in form documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admission => "admission",
            Self::Interview => "interview",
            Self::Survey => "survey",
            Self::Attendance => "attendance",
            Self::Consent => "consent",
            Self::Evaluation => "evaluation",
            Self::Medical => "medical",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative lifecycle state of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Being built; not open for submissions.
    #[default]
    Draft,
    /// Open for submissions.
    Active,
    /// Closed for submissions.
    Inactive,
}

impl Status {
    /// Check whether an administrative move from `self` to `to` is allowed.
    ///
    /// A form never returns to `Draft` once published.
    pub fn can_transition_to(self, to: Status) -> bool {
        matches!(
            (self, to),
            (Self::Draft, Self::Active) | (Self::Active, Self::Inactive) | (Self::Inactive, Self::Active)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A form: metadata plus an ordered list of questions.
///
/// The order of `questions` is the presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    /// Absent until the form has been saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FormId>,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub category: Declared<Category>,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Form {
    /// Create an unsaved draft form with no questions.
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            category: Declared::Known(category),
            status: Status::Draft,
            questions: Vec::new(),
        }
    }

    /// Create an untitled draft in the `other` category.
    pub fn empty() -> Self {
        Self::new("", Category::Other)
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a question.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Find a question and its position by key.
    pub fn find(&self, key: &QuestionKey) -> Option<(usize, &Question)> {
        self.questions.iter().enumerate().find(|(_, q)| &q.key == key)
    }

    /// The key the next added question should get.
    ///
    /// Normally one past the highest `q{n}` key. If that number is already
    /// `u64::MAX`, the lowest unused `q{n}` is taken instead.
    pub fn next_key(&self) -> QuestionKey {
        let numbers: Vec<u64> = self.questions.iter().filter_map(|q| q.key.number()).collect();
        let highest = numbers.iter().copied().max().unwrap_or(0);
        if let Some(next) = highest.checked_add(1) {
            return QuestionKey::numbered(next);
        }

        let mut next = 1;
        while numbers.contains(&next) {
            next += 1;
        }
        QuestionKey::numbered(next)
    }

    /// Check if the form has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionType;

    #[test]
    fn status_transitions() {
        assert!(Status::Draft.can_transition_to(Status::Active));
        assert!(Status::Active.can_transition_to(Status::Inactive));
        assert!(Status::Inactive.can_transition_to(Status::Active));
        assert!(!Status::Active.can_transition_to(Status::Draft));
        assert!(!Status::Draft.can_transition_to(Status::Inactive));
        assert!(!Status::Draft.can_transition_to(Status::Draft));
    }

    #[test]
    fn next_key_skips_past_highest() {
        let form = Form::new("Intake", Category::Admission)
            .with_question(Question::new("q1", "Name", QuestionType::ShortText))
            .with_question(Question::new("q7", "Age", QuestionType::Number))
            .with_question(Question::new("custom", "Notes", QuestionType::LongText));
        assert_eq!(form.next_key(), QuestionKey::numbered(8));
        assert_eq!(Form::empty().next_key().as_str(), "q1");
    }

    #[test]
    fn next_key_at_u64_max_reuses_lowest_free_number() {
        let form = Form::new("Intake", Category::Admission)
            .with_question(Question::new("q1", "Name", QuestionType::ShortText))
            .with_question(Question::new(
                QuestionKey::numbered(u64::MAX),
                "Age",
                QuestionType::Number,
            ))
            .with_question(Question::new("q2", "Notes", QuestionType::LongText));
        assert_eq!(form.next_key().as_str(), "q3");
    }

    #[test]
    fn unknown_category_survives_loading() {
        let form: Form = serde_json::from_str(
            r#"{"title": "Trip", "category": "field_trip", "questions": []}"#,
        )
        .unwrap();
        assert_eq!(form.category, Declared::Unknown("field_trip".into()));
        assert!(!form.category.is_known());
        assert!(Form::empty().category.is_known());
        assert_eq!(form.status, Status::Draft);
    }

    #[test]
    fn wire_format() {
        let json = r#"{
            "id": 4,
            "title": "Interview",
            "category": "interview",
            "status": "active",
            "questions": [
                {"key": "q1", "text": "Score", "type": "number", "required": true,
                 "constraints": {"min": 1, "max": 10}},
                {"key": "q2", "text": "Start", "type": "date", "required": false,
                 "constraints": {"minDate": "2026-01-01"}},
                {"key": "q3", "text": "CV", "type": "file", "required": true,
                 "constraints": {"allowedExtensions": ["pdf", "docx"]}},
                {"key": "q4", "text": "Mood", "type": "emoji"}
            ]
        }"#;
        let form: Form = serde_json::from_str(json).unwrap();
        assert_eq!(form.id, Some(FormId(4)));
        assert_eq!(form.status, Status::Active);
        assert_eq!(form.questions[0].constraints.max, Some(10.0));
        assert_eq!(
            form.questions[1].constraints.min_date,
            chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
        );
        assert_eq!(
            form.questions[2].constraints.allowed_extensions,
            Some(vec!["pdf".to_string(), "docx".to_string()])
        );
        assert_eq!(form.questions[3].kind, Declared::Unknown("emoji".into()));
        assert!(!form.questions[3].required);
    }
}
