//! SSML payload construction

use std::borrow::Cow;

/// Escape the characters that would break the markup around the text
///
/// Only `&`, `<` and `>` are replaced. Quotes are left alone because the
/// text only ever appears as element content.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Wrap text in a single-voice SSML document
pub fn build_ssml(language: &str, voice: &str, text: &str) -> String {
    format!(
        r#"<speak version="1.0" xml:lang="{}"><voice name="{}">{}</voice></speak>"#,
        language,
        voice,
        escape_xml(text)
    )
}
