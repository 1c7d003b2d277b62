use serde::Deserialize;

/// Length limits applied by the schema validator.
///
/// Lengths count characters, not bytes. Missing fields in a config document
/// fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaLimits {
    pub title_max_chars: usize,
    pub description_max_chars: usize,
}

impl SchemaLimits {
    pub const DEFAULT_TITLE_MAX_CHARS: usize = 100;
    pub const DEFAULT_DESCRIPTION_MAX_CHARS: usize = 500;

    /// Set the title limit.
    pub fn with_title_max_chars(mut self, max: usize) -> Self {
        self.title_max_chars = max;
        self
    }

    /// Set the description limit.
    pub fn with_description_max_chars(mut self, max: usize) -> Self {
        self.description_max_chars = max;
        self
    }
}

impl Default for SchemaLimits {
    fn default() -> Self {
        Self {
            title_max_chars: Self::DEFAULT_TITLE_MAX_CHARS,
            description_max_chars: Self::DEFAULT_DESCRIPTION_MAX_CHARS,
        }
    }
}

/// When a schema is being validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Interactive editing: a form may transiently have no questions.
    Editing,
    /// About to be saved: every rule applies.
    #[default]
    Persist,
}
