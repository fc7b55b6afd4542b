// XPath string rendering
//
// Selector templates across the page objects embed user-supplied text
// (product names, option labels, category names). XPath 1.0 has no string
// escaping, so text containing both quote kinds must be rendered through
// concat().

/// Renders `text` as an XPath string literal.
///
/// Picks single or double quoting when possible and falls back to a
/// `concat(..)` expression when the text contains both, so names like
/// `Apple Cinema 30"` or `50's Rockabilly Polka Dot Top S-4X` resolve
/// correctly inside selector templates.
pub fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        return format!("'{text}'");
    }
    if !text.contains('"') {
        return format!("\"{text}\"");
    }
    // Both quote kinds present: split on single quotes and stitch them back
    // in as "'" pieces.
    let parts: Vec<String> = text
        .split('\'')
        .map(|part| format!("'{part}'"))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_uses_single_quotes() {
        assert_eq!(xpath_literal("Laptop"), "'Laptop'");
    }

    #[test]
    fn text_with_apostrophe_uses_double_quotes() {
        assert_eq!(
            xpath_literal("50's Rockabilly Polka Dot Top S-4X"),
            "\"50's Rockabilly Polka Dot Top S-4X\""
        );
    }

    #[test]
    fn text_with_double_quote_uses_single_quotes() {
        assert_eq!(xpath_literal("Apple Cinema 30\""), "'Apple Cinema 30\"'");
    }

    #[test]
    fn text_with_both_quote_kinds_uses_concat() {
        assert_eq!(
            xpath_literal("it's a 30\" screen"),
            "concat('it', \"'\", 's a 30\" screen')"
        );
    }
}
