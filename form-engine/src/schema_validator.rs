//! Structural validation of form schemas.

use std::collections::HashSet;

use log::debug;

use crate::{
    Constraints, Declared, FieldPath, Form, Question, SchemaLimits, TypeRules, ValidationMode,
    ValidationResult, ViolationKind, Violations,
};

/// Validate a form before it is saved.
///
/// Uses the default [`SchemaLimits`] and applies every rule, including the
/// requirement that the form has at least one question.
pub fn validate_schema(form: &Form) -> ValidationResult {
    validate_schema_with(form, &SchemaLimits::default(), ValidationMode::Persist)
}

/// Validate a form under interactive editing, where an empty question list is
/// tolerated.
pub fn validate_draft(form: &Form) -> ValidationResult {
    validate_schema_with(form, &SchemaLimits::default(), ValidationMode::Editing)
}

/// Validate a form with explicit limits and mode.
///
/// Every field is checked; at most one violation is reported per field path.
/// The result depends only on the arguments.
pub fn validate_schema_with(
    form: &Form,
    limits: &SchemaLimits,
    mode: ValidationMode,
) -> ValidationResult {
    let mut violations = Violations::new();
    let root = FieldPath::form();

    check_metadata(form, limits, &root, &mut violations);

    if mode == ValidationMode::Persist && form.questions.is_empty() {
        violations.report(
            root.child("questions"),
            ViolationKind::NoQuestions,
            "Add at least one question",
        );
    }

    let mut seen_keys = HashSet::new();
    for (index, question) in form.questions.iter().enumerate() {
        let path = FieldPath::question(index);
        if !is_valid_key(question.key.as_str()) {
            violations.report(
                path.child("key"),
                ViolationKind::InvalidQuestionKey,
                format!(
                    "Key '{}' must be non-empty without spaces, dots or brackets",
                    question.key
                ),
            );
        } else if !seen_keys.insert(&question.key) {
            violations.report(
                path.child("key"),
                ViolationKind::DuplicateQuestionKey,
                format!("Key '{}' is used by an earlier question", question.key),
            );
        }
        check_question(question, &path, &mut violations);
    }

    debug!(
        "Schema check of '{}' ({mode:?}): {} question(s), {} violation(s)",
        form.title,
        form.questions.len(),
        violations.len()
    );
    violations.finish()
}

fn check_metadata(
    form: &Form,
    limits: &SchemaLimits,
    root: &FieldPath,
    violations: &mut Violations,
) {
    let title = root.child("title");
    if form.title.trim().is_empty() {
        violations.report(title, ViolationKind::TitleMissing, "Title is required");
    } else if form.title.chars().count() > limits.title_max_chars {
        violations.report(
            title,
            ViolationKind::TitleTooLong,
            format!("Title must be at most {} characters", limits.title_max_chars),
        );
    }

    if let Some(description) = &form.description
        && description.chars().count() > limits.description_max_chars
    {
        violations.report(
            root.child("description"),
            ViolationKind::DescriptionTooLong,
            format!(
                "Description must be at most {} characters",
                limits.description_max_chars
            ),
        );
    }

    if let Declared::Unknown(raw) = &form.category {
        violations.report(
            root.child("category"),
            ViolationKind::UnknownCategory,
            format!("Unknown category '{raw}'"),
        );
    }
}

fn check_question(question: &Question, path: &FieldPath, violations: &mut Violations) {
    if question.text.trim().is_empty() {
        violations.report(
            path.child("text"),
            ViolationKind::QuestionTextMissing,
            "Question text is required",
        );
    }

    let rules = match &question.kind {
        Declared::Known(kind) => kind.rules(),
        Declared::Unknown(raw) => {
            // Options and constraints cannot be judged without a type.
            violations.report(
                path.child("type"),
                ViolationKind::UnknownQuestionType,
                format!("Unknown question type '{raw}'"),
            );
            return;
        }
    };

    check_options(&question.options, &rules, &path.child("options"), violations);
    check_constraints(
        &question.constraints,
        &rules,
        &path.child("constraints"),
        violations,
    );
}

fn check_options(
    options: &[String],
    rules: &TypeRules,
    path: &FieldPath,
    violations: &mut Violations,
) {
    if !rules.needs_options {
        if !options.is_empty() {
            violations.report(
                path.clone(),
                ViolationKind::UnexpectedOptions,
                "This question type does not take options",
            );
        }
        return;
    }

    if options.is_empty() {
        violations.report(
            path.clone(),
            ViolationKind::OptionsRequired,
            "Add at least one option",
        );
        return;
    }

    let mut seen = HashSet::new();
    for (index, option) in options.iter().enumerate() {
        let option_path = path.index(index);
        if option.trim().is_empty() {
            violations.report(option_path, ViolationKind::EmptyOption, "Option cannot be empty");
        } else if !seen.insert(option.as_str()) {
            violations.report(
                option_path,
                ViolationKind::DuplicateOption,
                format!("Option '{option}' appears more than once"),
            );
        }
    }
}

fn check_constraints(
    constraints: &Constraints,
    rules: &TypeRules,
    path: &FieldPath,
    violations: &mut Violations,
) {
    let disallowed = constraints.disallowed_fields(rules);
    if !disallowed.is_empty() {
        violations.report(
            path.clone(),
            ViolationKind::UnexpectedConstraint,
            format!(
                "This question type does not take {}",
                disallowed.join(", ")
            ),
        );
    }

    if rules.allows_numeric_bounds {
        for (field, bound) in [("min", constraints.min), ("max", constraints.max)] {
            if let Some(bound) = bound
                && !bound.is_finite()
            {
                violations.report(
                    path.child(field),
                    ViolationKind::NonFiniteBound,
                    format!("Bound must be a finite number, got {bound}"),
                );
            }
        }
    }

    if rules.allows_numeric_bounds
        && let (Some(min), Some(max)) = (constraints.min, constraints.max)
        && min > max
    {
        violations.report(
            path.child("max"),
            ViolationKind::InvertedBounds,
            format!("Maximum ({max}) is below minimum ({min})"),
        );
    }

    if rules.allows_date_bounds
        && let (Some(min), Some(max)) = (constraints.min_date, constraints.max_date)
        && min > max
    {
        violations.report(
            path.child("maxDate"),
            ViolationKind::InvertedBounds,
            format!("Latest date ({max}) is before earliest date ({min})"),
        );
    }

    if rules.allows_file_filter
        && let Some(extensions) = &constraints.allowed_extensions
    {
        check_extensions(extensions, &path.child("allowedExtensions"), violations);
    }
}

fn check_extensions(extensions: &[String], path: &FieldPath, violations: &mut Violations) {
    if extensions.is_empty() {
        violations.report(
            path.clone(),
            ViolationKind::EmptyExtensionFilter,
            "List at least one allowed extension, or remove the filter",
        );
        return;
    }

    let mut seen = HashSet::new();
    for extension in extensions {
        if extension.trim().is_empty()
            || extension.contains('.')
            || *extension != extension.to_lowercase()
        {
            violations.report(
                path.clone(),
                ViolationKind::InvalidExtension,
                format!("'{extension}' is not a valid extension (use lowercase, e.g. 'pdf')"),
            );
        } else if !seen.insert(extension.to_lowercase()) {
            violations.report(
                path.clone(),
                ViolationKind::DuplicateExtension,
                format!("Extension '{extension}' appears more than once"),
            );
        }
    }
}

/// Keys become answer paths, so they must form a single path segment.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '.' | '[' | ']'))
}
