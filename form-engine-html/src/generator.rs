//! HTML form generator implementation.

use form_engine::{AnswerSet, EngineError, FieldView, Form, InputKind, present};
use log::debug;

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Overrides the form title in the heading and document title.
    pub title: Option<String>,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// CSS class prefix for all generated elements and ids. Escaped on output.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            full_document: true,
            class_prefix: "form".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Render `form` as HTML, optionally filled in with `answers`.
///
/// Fails only if the form holds a question type the registry does not know.
pub fn to_html(
    form: &Form,
    answers: Option<&AnswerSet>,
    options: &HtmlOptions,
) -> Result<String, EngineError> {
    let fields = present(form, answers)?;
    debug!("Rendering '{}' with {} field(s)", form.title, fields.len());

    let title = options.title.as_deref().unwrap_or(&form.title);
    let prefix = &escape_html(&options.class_prefix);
    let mut html = String::new();

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!(
        "<form class=\"{prefix}-form\" data-status=\"{}\">\n",
        form.status
    ));
    html.push_str(&format!(
        "  <h1 class=\"{prefix}-title\">{}</h1>\n",
        escape_html(title)
    ));
    if let Some(description) = &form.description {
        html.push_str(&format!(
            "  <p class=\"{prefix}-description\">{}</p>\n",
            escape_html(description)
        ));
    }

    html.push_str(&format!("  <div class=\"{prefix}-questions\">\n"));
    for field in &fields {
        html.push_str(&generate_field(field, prefix, 2));
    }
    html.push_str("  </div>\n");

    html.push_str(&format!(
        "  <button type=\"submit\" class=\"{prefix}-submit\">Submit</button>\n"
    ));
    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    Ok(html)
}

/// Generate HTML for a single field.
fn generate_field(field: &FieldView, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let name = escape_html(field.key.as_str());
    let field_id = format!("{prefix}-{name}");
    let label = format_label(&field.text, field.required);
    let required = if field.required { " required" } else { "" };
    let invalid = if field.has_errors() {
        format!(" aria-invalid=\"true\" aria-describedby=\"{field_id}-error\"")
    } else {
        String::new()
    };
    let text_value = field
        .current_value
        .as_ref()
        .and_then(|v| v.as_str())
        .map(escape_html);

    let mut classes = format!("{prefix}-field");
    if field.required {
        classes.push_str(&format!(" {prefix}-required"));
    }
    if field.has_errors() {
        classes.push_str(&format!(" {prefix}-invalid"));
    }

    let mut html = String::new();

    match field.input_kind {
        InputKind::RadioGroup | InputKind::CheckboxGroup => {
            let (input_type, input_name) = match field.input_kind {
                InputKind::RadioGroup => ("radio", name.clone()),
                _ => ("checkbox", format!("{name}[]")),
            };
            let chosen = |option: &str| match &field.current_value {
                Some(value) => match value.as_list() {
                    Some(list) => list.iter().any(|c| c == option),
                    None => value.as_str() == Some(option),
                },
                None => false,
            };

            html.push_str(&format!(
                "{ind}<fieldset class=\"{classes} {prefix}-{input_type}-group\"{invalid}>\n"
            ));
            html.push_str(&format!("{ind}  <legend>{}</legend>\n", escape_html(&label)));
            for (idx, option) in field.options.iter().enumerate() {
                let option_id = format!("{field_id}-{idx}");
                let checked = if chosen(option) { " checked" } else { "" };
                // A required checkbox would demand every box be ticked.
                let option_required = if input_type == "radio" { required } else { "" };
                html.push_str(&format!(
                    "{ind}  <div class=\"{prefix}-{input_type}-option\">\n"
                ));
                html.push_str(&format!(
                    "{ind}    <input type=\"{input_type}\" id=\"{option_id}\" name=\"{input_name}\" value=\"{}\"{checked}{option_required}>\n",
                    escape_html(option)
                ));
                html.push_str(&format!(
                    "{ind}    <label for=\"{option_id}\">{}</label>\n",
                    escape_html(option)
                ));
                html.push_str(&format!("{ind}  </div>\n"));
            }
            html.push_str(&generate_errors(field, prefix, &field_id, indent + 1));
            html.push_str(&format!("{ind}</fieldset>\n"));
            return html;
        }

        InputKind::TextArea => {
            html.push_str(&open_field(&ind, &classes, &field_id, &label));
            html.push_str(&format!(
                "{ind}  <textarea id=\"{field_id}\" name=\"{name}\" rows=\"4\" class=\"{prefix}-textarea\"{required}{invalid}>{}</textarea>\n",
                text_value.unwrap_or_default()
            ));
        }

        InputKind::Select => {
            html.push_str(&open_field(&ind, &classes, &field_id, &label));
            html.push_str(&format!(
                "{ind}  <select id=\"{field_id}\" name=\"{name}\" class=\"{prefix}-select\"{required}{invalid}>\n"
            ));
            html.push_str(&format!("{ind}    <option value=\"\">Choose...</option>\n"));
            for option in &field.options {
                let option = escape_html(option);
                let selected = if text_value.as_deref() == Some(option.as_str()) {
                    " selected"
                } else {
                    ""
                };
                html.push_str(&format!(
                    "{ind}    <option value=\"{option}\"{selected}>{option}</option>\n"
                ));
            }
            html.push_str(&format!("{ind}  </select>\n"));
        }

        InputKind::FilePicker => {
            let accept = field
                .constraints
                .allowed_extensions
                .as_ref()
                .map(|exts| {
                    let list: Vec<_> = exts.iter().map(|e| format!(".{e}")).collect();
                    format!(" accept=\"{}\"", escape_html(&list.join(",")))
                })
                .unwrap_or_default();

            html.push_str(&open_field(&ind, &classes, &field_id, &label));
            html.push_str(&format!(
                "{ind}  <input type=\"file\" id=\"{field_id}\" name=\"{name}\" class=\"{prefix}-input\"{accept}{required}{invalid}>\n"
            ));
            // File inputs cannot be pre-filled.
            if let Some(file) = field.current_value.as_ref().and_then(|v| v.as_file()) {
                html.push_str(&format!(
                    "{ind}  <span class=\"{prefix}-file-name\">{}</span>\n",
                    escape_html(&file.name)
                ));
            }
        }

        InputKind::TextLine
        | InputKind::Number
        | InputKind::Date
        | InputKind::Time
        | InputKind::Email
        | InputKind::Phone => {
            let mut attrs = format!(
                "type=\"{}\" id=\"{field_id}\" name=\"{name}\" class=\"{prefix}-input\"",
                input_type(field.input_kind)
            );
            match field.input_kind {
                InputKind::Number => {
                    attrs.push_str(" step=\"any\"");
                    if let Some(min) = field.constraints.min {
                        attrs.push_str(&format!(" min=\"{min}\""));
                    }
                    if let Some(max) = field.constraints.max {
                        attrs.push_str(&format!(" max=\"{max}\""));
                    }
                }
                InputKind::Date => {
                    if let Some(min) = field.constraints.min_date {
                        attrs.push_str(&format!(" min=\"{}\"", min.format("%Y-%m-%d")));
                    }
                    if let Some(max) = field.constraints.max_date {
                        attrs.push_str(&format!(" max=\"{}\"", max.format("%Y-%m-%d")));
                    }
                }
                _ => {}
            }
            if let Some(value) = &text_value {
                attrs.push_str(&format!(" value=\"{value}\""));
            }

            html.push_str(&open_field(&ind, &classes, &field_id, &label));
            html.push_str(&format!("{ind}  <input {attrs}{required}{invalid}>\n"));
        }
    }

    html.push_str(&generate_errors(field, prefix, &field_id, indent + 1));
    html.push_str(&format!("{ind}</div>\n"));
    html
}

fn open_field(ind: &str, classes: &str, field_id: &str, label: &str) -> String {
    format!(
        "{ind}<div class=\"{classes}\">\n{ind}  <label for=\"{field_id}\">{}</label>\n",
        escape_html(label)
    )
}

/// Inline messages for the field's current violations.
fn generate_errors(field: &FieldView, prefix: &str, field_id: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    field
        .current_errors
        .iter()
        .map(|violation| {
            format!(
                "{ind}<p id=\"{field_id}-error\" class=\"{prefix}-error\">{}</p>\n",
                escape_html(&violation.message)
            )
        })
        .collect()
}

fn input_type(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Number => "number",
        InputKind::Date => "date",
        InputKind::Time => "time",
        InputKind::Email => "email",
        InputKind::Phone => "tel",
        _ => "text",
    }
}

/// Format a prompt as a label, marking required fields.
fn format_label(text: &str, required: bool) -> String {
    if required {
        format!("{text} *")
    } else {
        text.to_string()
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use example_forms::{admission_answers, admission_form, attendance_form};
    use form_engine::{Category, Question, QuestionType};

    #[test]
    fn html_options_chaining() {
        let options = HtmlOptions::new()
            .with_title("Test Form")
            .full_document(false)
            .with_class_prefix("my-form");

        assert_eq!(options.title, Some("Test Form".to_string()));
        assert!(!options.full_document);
        assert_eq!(options.class_prefix, "my-form");
        assert!(HtmlOptions::new().full_document);
    }

    #[test]
    fn full_document_and_fragment() {
        let form = attendance_form();
        let full = to_html(&form, None, &HtmlOptions::new()).unwrap();
        assert!(full.starts_with("<!DOCTYPE html>"));
        assert!(full.contains("<title>Daily attendance</title>"));
        assert!(full.ends_with("</html>\n"));

        let fragment = to_html(&form, None, &HtmlOptions::new().full_document(false)).unwrap();
        assert!(fragment.starts_with("<form class=\"form-form\" data-status=\"active\">"));
        assert!(!fragment.contains("<html"));
    }

    #[test]
    fn every_input_kind_is_rendered() {
        let html = to_html(&admission_form(), None, &HtmlOptions::new()).unwrap();

        assert!(html.contains("<input type=\"text\" id=\"form-q1\" name=\"q1\""));
        assert!(html.contains("type=\"date\" id=\"form-q2\" name=\"q2\" class=\"form-input\" min=\"2005-01-01\" max=\"2015-12-31\""));
        assert!(html.contains("step=\"any\" min=\"12\" max=\"20\""));
        assert!(html.contains("type=\"email\" id=\"form-q4\""));
        assert!(html.contains("type=\"tel\" id=\"form-q5\""));
        assert!(html.contains("<select id=\"form-q6\" name=\"q6\""));
        assert!(html.contains("<option value=\"Grade 9\">Grade 9</option>"));
        assert!(html.contains("type=\"radio\" id=\"form-q7-0\" name=\"q7\" value=\"Day pupil\" required"));
        assert!(html.contains("type=\"checkbox\" id=\"form-q8-3\" name=\"q8[]\" value=\"Robotics\">"));
        assert!(html.contains("type=\"time\" id=\"form-q9\""));
        assert!(html.contains("<textarea id=\"form-q10\" name=\"q10\""));
        assert!(html.contains("accept=\".pdf,.jpg,.png\""));
    }

    #[test]
    fn answers_are_filled_in() {
        let html = to_html(&admission_form(), Some(&admission_answers()), &HtmlOptions::new()).unwrap();

        assert!(html.contains("value=\"Ada Lovelace\""));
        assert!(html.contains("<option value=\"Grade 10\" selected>"));
        assert!(html.contains("value=\"Weekly boarder\" checked"));
        assert!(html.contains("value=\"Music\" checked"));
        assert!(!html.contains("value=\"Sport\" checked"));
        assert!(html.contains("<span class=\"form-file-name\">report-2026.PDF</span>"));
        assert!(!html.contains("form-error"));
    }

    #[test]
    fn errors_are_inline() {
        let mut answers = admission_answers();
        answers.insert("q3", "30");
        answers.remove(&"q1".into());

        let html = to_html(&admission_form(), Some(&answers), &HtmlOptions::new()).unwrap();
        assert!(html.contains("<p id=\"form-q1-error\" class=\"form-error\">This field is required</p>"));
        assert!(html.contains("<p id=\"form-q3-error\" class=\"form-error\">Must be between 12 and 20</p>"));
        assert!(html.contains("aria-describedby=\"form-q3-error\""));
        assert_eq!(html.matches("class=\"form-error\"").count(), 2);
    }

    #[test]
    fn text_is_escaped() {
        let form = Form::new("Q&A <live>", Category::Other).with_question(
            Question::new("q1", "Pick \"one\"", QuestionType::Dropdown).with_options(["<b>", "a&b"]),
        );
        let html = to_html(&form, None, &HtmlOptions::new()).unwrap();

        assert!(html.contains("<title>Q&amp;A &lt;live&gt;</title>"));
        assert!(html.contains("Pick &quot;one&quot; *"));
        assert!(html.contains("<option value=\"&lt;b&gt;\">&lt;b&gt;</option>"));
        assert!(html.contains("<option value=\"a&amp;b\">a&amp;b</option>"));
    }

    #[test]
    fn title_override_and_prefix() {
        let options = HtmlOptions::new()
            .with_title("Preview")
            .with_class_prefix("intake");
        let html = to_html(&attendance_form(), None, &options).unwrap();
        assert!(html.contains("<h1 class=\"intake-title\">Preview</h1>"));
        assert!(html.contains("class=\"intake-field intake-required\""));
        assert!(!html.contains("Daily attendance"));
    }

    #[test]
    fn class_prefix_is_escaped() {
        let options = HtmlOptions::new()
            .full_document(false)
            .with_class_prefix("x\" onclick=\"alert(1)");
        let html = to_html(&attendance_form(), None, &options).unwrap();

        assert!(!html.contains("onclick=\"alert"));
        assert!(html.contains("<form class=\"x&quot; onclick=&quot;alert(1)-form\""));
    }

    #[test]
    fn escape_html_special_chars() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
