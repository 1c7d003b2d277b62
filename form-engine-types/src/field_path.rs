use std::fmt;

/// A path to a field in a form or answer set, e.g. `form.questions[2].options`.
///
/// Violations carry a path so that a UI can attach each message to the input
/// it concerns. Segments are joined with dots; list positions are rendered as
/// `[i]` suffixes on the preceding segment.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath {
    path: String,
}

impl FieldPath {
    /// Create a new path from its textual form.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The root of every schema path.
    pub fn form() -> Self {
        Self::new("form")
    }

    /// The root of every answer path.
    pub fn answers() -> Self {
        Self::new("answers")
    }

    /// Path of the question at `index` inside a form.
    pub fn question(index: usize) -> Self {
        Self::form().child("questions").index(index)
    }

    /// Append a child segment to this path, returning a new path.
    pub fn child(&self, name: &str) -> Self {
        if name.is_empty() {
            self.clone()
        } else if self.path.is_empty() {
            Self::new(name)
        } else {
            Self::new(format!("{}.{}", self.path, name))
        }
    }

    /// Append a list position to this path, returning a new path.
    pub fn index(&self, index: usize) -> Self {
        Self::new(format!("{}[{index}]", self.path))
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the dot-separated segments of this path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.').filter(|s| !s.is_empty())
    }

    /// Check whether `self` equals `prefix` or lies underneath it.
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        match self.path.strip_prefix(prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with('['),
            None => false,
        }
    }

    /// Get the last segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.path.rsplit('.').next().filter(|s| !s.is_empty())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child() {
        let path = FieldPath::form().child("title");
        assert_eq!(path.as_str(), "form.title");
    }

    #[test]
    fn child_from_empty() {
        let path = FieldPath::new("").child("answers");
        assert_eq!(path.as_str(), "answers");
    }

    #[test]
    fn question_paths() {
        let path = FieldPath::question(2).child("options");
        assert_eq!(path.as_str(), "form.questions[2].options");
        assert_eq!(path.last(), Some("options"));
    }

    #[test]
    fn starts_with() {
        let question = FieldPath::question(1);
        assert!(question.child("text").starts_with(&question));
        assert!(question.starts_with(&FieldPath::form()));
        assert!(!FieldPath::question(10).starts_with(&question));
    }

    #[test]
    fn segments() {
        let path = FieldPath::question(0).child("constraints");
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments, vec!["form", "questions[0]", "constraints"]);
    }

    #[test]
    fn display() {
        let path = FieldPath::answers().child("q3");
        assert_eq!(format!("{path}"), "answers.q3");
    }
}
