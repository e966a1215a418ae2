//! Free text fields.

use crate::validation::FieldErrors;

/// Replace HTML-significant characters with entities.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

/// Trimmed, escaped text, or `None` when absent or blank.
#[must_use]
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(escape)
}

/// Like [`optional_text`], recording `message` against `param` when blank.
pub fn required_text(
    errors: &mut FieldErrors,
    param: &str,
    value: Option<&str>,
    message: &str,
) -> Option<String> {
    let text = optional_text(value);

    if text.is_none() {
        errors.push(param, value, message);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape(r#"<a href="/x">Tom & Jerry's `\`</a>"#),
            "&lt;a href=&quot;&#x2F;x&quot;&gt;Tom &amp; Jerry&#x27;s &#96;&#x5C;&#96;&lt;&#x2F;a&gt;"
        );
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Flat White 12.50"), "Flat White 12.50");
    }

    #[test]
    fn optional_text_trims_and_drops_blank_values() {
        assert_eq!(optional_text(Some("  Latte ")), Some("Latte".to_string()));
        assert_eq!(optional_text(Some("   ")), None);
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn required_text_records_missing_values() {
        let mut errors = FieldErrors::new();

        assert_eq!(
            required_text(&mut errors, "title", Some(" "), "Title is required"),
            None
        );
        assert_eq!(
            required_text(&mut errors, "name", Some("Mocha"), "Name is required"),
            Some("Mocha".to_string())
        );

        let recorded: Vec<_> = errors.into_iter().collect();

        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].param, "title");
        assert_eq!(recorded[0].msg, "Title is required");
        assert_eq!(recorded[0].value.as_deref(), Some(" "));
    }
}
