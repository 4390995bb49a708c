//! Storage encoding for multi-line admin text.
//!
//! The backend keeps prompt templates and detail fields as single-line JSON
//! strings. Newlines travel as the two-character escape `\n`, paragraphs are
//! separated by `\n\n`.
//!
//! ```text
//!   "Intro line\n  second line  \n\n\n\nNext paragraph"      (as typed)
//!   "Intro line\\nsecond line\\n\\nNext paragraph"            (stored)
//! ```
//!
//! [`encode`] unescapes its input before cleaning it, so already-stored text
//! can be passed through again without being mangled:
//! `encode(decode(encode(x))) == encode(x)` for every `x`.

const ESCAPED_NEWLINE: &str = "\\n";
const ESCAPED_PARAGRAPH: &str = "\\n\\n";

/// Encode human-entered text for storage.
///
/// Trims the text, drops whitespace around line breaks, collapses runs of
/// blank lines into one paragraph break, removes empty paragraphs, and
/// escapes the remaining line and paragraph breaks. Placeholders and every
/// other character are left as they are.
pub fn encode(text: &str) -> String {
    let text = decode(text);

    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.split('\n').map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
        .iter()
        .map(|lines| lines.join(ESCAPED_NEWLINE))
        .collect::<Vec<_>>()
        .join(ESCAPED_PARAGRAPH)
}

/// Decode stored text back into editable multi-line form.
///
/// Paragraph separators become blank lines and single escapes become line
/// breaks; since a paragraph separator is two line escapes, one pass covers
/// both.
pub fn decode(stored: &str) -> String {
    stored.replace(ESCAPED_NEWLINE, "\n")
}

/// Replace double quotes with single quotes in prompt-template input.
pub fn sanitize_quotes(text: &str) -> String {
    text.replace('"', "'")
}
