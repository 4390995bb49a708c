//! Placeholder tokenizer.
//!
//! A placeholder is `{` followed by one or more characters other than `}`,
//! closed by the next `}`. There is no nesting: in `{a{b}` the single match is
//! `{a{b}`. An opening brace with no closing brace after it never matches, and
//! `{}` is not a placeholder. Matching is byte-oriented on the ASCII braces, so
//! any UTF-8 content between them is carried through untouched.

/// A placeholder occurrence inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The full token including braces, e.g. `{conversation_text}`.
    pub text: &'a str,
    /// Byte offset of the opening brace.
    pub start: usize,
}

/// Iterator over the placeholders of a template, left to right.
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.source.as_bytes();
        loop {
            let open = self.pos + find_byte(b'{', &bytes[self.pos..])?;
            // No `}` after this brace means no later brace can close either.
            let close = open + 1 + find_byte(b'}', &bytes[open + 1..])?;
            if close == open + 1 {
                // `{}`: retry from the character after the opening brace
                self.pos = open + 1;
                continue;
            }
            self.pos = close + 1;
            return Some(Placeholder {
                text: &self.source[open..=close],
                start: open,
            });
        }
    }
}

fn find_byte(needle: u8, haystack: &[u8]) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}

/// Scan `template` for placeholders, preserving order and multiplicity.
pub fn scan(template: &str) -> Placeholders<'_> {
    Placeholders {
        source: template,
        pos: 0,
    }
}

/// Collect every placeholder token (with braces) in order of appearance.
pub fn extract(template: &str) -> Vec<&str> {
    scan(template).map(|p| p.text).collect()
}

/// True when `s` is exactly one placeholder and nothing else.
pub fn is_placeholder(s: &str) -> bool {
    let mut found = scan(s);
    matches!(found.next(), Some(p) if p.start == 0 && p.text.len() == s.len())
}
