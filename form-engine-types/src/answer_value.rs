use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::AnswerShape;

/// Metadata of an uploaded file. The bytes travel out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    /// Original file name, including its extension.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl FileDescriptor {
    /// Describe a file by name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            content_type: None,
        }
    }

    /// The lowercased extension of the file name, without the dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }
}

/// A single submitted answer.
///
/// On the wire this is a JSON string, array of strings, or file object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A single value (text, number, date, time, email, phone, single choice).
    Text(String),

    /// Several values (multi choice).
    List(Vec<String>),

    /// An uploaded file.
    File(FileDescriptor),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a list of strings.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as a file descriptor.
    pub fn as_file(&self) -> Option<&FileDescriptor> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// Check if this value counts as "no answer".
    ///
    /// Whitespace-only text, an empty list and a file without a name are empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::File(file) => file.name.trim().is_empty(),
        }
    }

    /// The shape of this value.
    pub fn shape(&self) -> AnswerShape {
        match self {
            Self::Text(_) => AnswerShape::Scalar,
            Self::List(_) => AnswerShape::Array,
            Self::File(_) => AnswerShape::File,
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<FileDescriptor> for AnswerValue {
    fn from(file: FileDescriptor) -> Self {
        Self::File(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(
            FileDescriptor::named("Transcript.PDF").extension(),
            Some("pdf".to_string())
        );
        assert_eq!(FileDescriptor::named("README").extension(), None);
        assert_eq!(
            FileDescriptor::named("archive.tar.gz").extension(),
            Some("gz".to_string())
        );
    }

    #[test]
    fn emptiness() {
        assert!(AnswerValue::from("   ").is_empty());
        assert!(AnswerValue::List(Vec::new()).is_empty());
        assert!(AnswerValue::File(FileDescriptor::named("")).is_empty());
        assert!(!AnswerValue::from("0").is_empty());
        assert!(!AnswerValue::from(vec!["A"]).is_empty());
    }

    #[test]
    fn untagged_wire_format() {
        let text: AnswerValue = serde_json::from_str(r#""5""#).unwrap();
        assert_eq!(text.shape(), AnswerShape::Scalar);

        let list: AnswerValue = serde_json::from_str(r#"["A", "B"]"#).unwrap();
        assert_eq!(list.as_list().map(<[String]>::len), Some(2));

        let file: AnswerValue =
            serde_json::from_str(r#"{"name": "cv.pdf", "size": 1024, "contentType": "application/pdf"}"#)
                .unwrap();
        assert_eq!(file.as_file().and_then(|f| f.size), Some(1024));
    }
}
