//! Caret-relative insertion.
//!
//! Offsets are counted in characters (Unicode scalar values), never bytes, so
//! any offset a caller passes in is safe: out-of-range values are clamped to
//! the end of the text.

use serde::Serialize;

/// Result of splicing a token into a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    pub template: String,
    /// Character offset immediately after the inserted token.
    pub caret: usize,
}

/// Insert `token` at `caret`, or at the end when no caret is known.
///
/// ```
/// use promptdesk_core::caret::insert_at_caret;
///
/// let ins = insert_at_caret("ab", "{x}", Some(1));
/// assert_eq!(ins.template, "a{x}b");
/// assert_eq!(ins.caret, 4);
/// ```
pub fn insert_at_caret(template: &str, token: &str, caret: Option<usize>) -> Insertion {
    let len = template.chars().count();
    let at = caret.unwrap_or(len).min(len);
    splice(template, token, at, at)
}

/// Replace the selection `[start, end)` with `token`.
///
/// The range is clamped to the text and may be given in either order; an
/// empty selection behaves like [`insert_at_caret`].
pub fn replace_selection(template: &str, token: &str, start: usize, end: usize) -> Insertion {
    let len = template.chars().count();
    let (a, b) = (start.min(len), end.min(len));
    splice(template, token, a.min(b), a.max(b))
}

fn splice(template: &str, token: &str, start: usize, end: usize) -> Insertion {
    let from = byte_offset(template, start);
    let to = byte_offset(template, end);

    let mut out = String::with_capacity(template.len() - (to - from) + token.len());
    out.push_str(&template[..from]);
    out.push_str(token);
    out.push_str(&template[to..]);

    Insertion {
        template: out,
        caret: start + token.chars().count(),
    }
}

/// Byte index of the `n`th character, or the string length past the end.
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let ins = insert_at_caret("ab", "{x}", Some(1));
        assert_eq!(ins.template, "a{x}b");
        assert_eq!(ins.caret, 4);
    }

    #[test]
    fn test_missing_caret_appends() {
        let ins = insert_at_caret("hello", "{y}", None);
        assert_eq!(ins.template, "hello{y}");
        assert_eq!(ins.caret, 8);
    }

    #[test]
    fn test_caret_past_end_is_clamped() {
        assert_eq!(
            insert_at_caret("hello", "{y}", Some(99)),
            insert_at_caret("hello", "{y}", None)
        );
    }

    #[test]
    fn test_insert_at_start_and_into_empty() {
        let ins = insert_at_caret("body", "{x}", Some(0));
        assert_eq!(ins.template, "{x}body");
        assert_eq!(ins.caret, 3);

        let ins = insert_at_caret("", "{x}", Some(5));
        assert_eq!(ins.template, "{x}");
        assert_eq!(ins.caret, 3);
    }

    #[test]
    fn test_repeated_insertions_compose_left_to_right() {
        let first = insert_at_caret("Dear , bye", "{name}", Some(5));
        let second = insert_at_caret(&first.template, " of {role}", Some(first.caret));
        assert_eq!(second.template, "Dear {name} of {role}, bye");
        assert_eq!(second.caret, 21);
    }

    #[test]
    fn test_offsets_are_characters_not_bytes() {
        let ins = insert_at_caret("héllo ✓", "{x}", Some(2));
        assert_eq!(ins.template, "hé{x}llo ✓");
        assert_eq!(ins.caret, 5);

        let ins = insert_at_caret("✓✓", "{é}", None);
        assert_eq!(ins.template, "✓✓{é}");
        assert_eq!(ins.caret, 5);
    }

    #[test]
    fn test_replace_selection() {
        let ins = replace_selection("Hello NAME!", "{name}", 6, 10);
        assert_eq!(ins.template, "Hello {name}!");
        assert_eq!(ins.caret, 12);
    }

    #[test]
    fn test_replace_selection_reversed_and_clamped() {
        let ins = replace_selection("abcdef", "{x}", 4, 2);
        assert_eq!(ins.template, "ab{x}ef");
        assert_eq!(ins.caret, 5);

        let ins = replace_selection("abc", "{x}", 1, 50);
        assert_eq!(ins.template, "a{x}");
        assert_eq!(ins.caret, 4);
    }

    #[test]
    fn test_empty_selection_matches_insert() {
        assert_eq!(
            replace_selection("abc", "{x}", 1, 1),
            insert_at_caret("abc", "{x}", Some(1))
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn gen_text() -> impl Strategy<Value = String> {
            let c = prop_oneof![
                3 => Just('a'),
                2 => Just('é'),
                2 => Just('名'),
                2 => Just('✓'),
                1 => Just('🎯'),
                1 => Just('\n'),
                1 => Just('{'),
            ];
            prop::collection::vec(c, 0..20)
                .prop_map(|chars| chars.into_iter().collect::<String>())
        }

        proptest! {
            #[test]
            fn insert_at_any_offset_keeps_char_counts(
                text in gen_text(),
                caret in prop::option::of(0usize..64),
            ) {
                let token = "{naïve}";
                let len = text.chars().count();
                let ins = insert_at_caret(&text, token, caret);

                let at = caret.unwrap_or(len).min(len);
                prop_assert_eq!(ins.template.chars().count(), len + 7);
                prop_assert_eq!(ins.caret, at + 7);
                let before: String = ins.template.chars().take(at).collect();
                prop_assert_eq!(before, text.chars().take(at).collect::<String>());
            }

            #[test]
            fn replace_at_any_offsets_keeps_char_counts(
                text in gen_text(),
                start in 0usize..64,
                end in 0usize..64,
            ) {
                let len = text.chars().count();
                let ins = replace_selection(&text, "{名}", start, end);

                let (a, b) = (start.min(len), end.min(len));
                let removed = a.max(b) - a.min(b);
                prop_assert_eq!(ins.template.chars().count(), len - removed + 3);
                prop_assert_eq!(ins.caret, a.min(b) + 3);
                prop_assert!(ins.caret <= ins.template.chars().count());
            }
        }
    }
}
