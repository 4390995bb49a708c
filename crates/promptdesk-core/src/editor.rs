//! Editing state for one template field.
//!
//! [`TemplateDraft`] holds what a form keeps while an admin edits a template:
//! the current text and the last caret position reported by a click or key
//! release. Drops do not report a caret of their own, so dropped placeholders
//! land at that remembered position.
//!
//! Insertion through the draft is guarded: a token must belong to the
//! vocabulary and must not already be in the text. The underlying
//! [`caret::insert_at_caret`] stays unconditional.

use tracing::debug;

use crate::caret::{self, Insertion};
use crate::error::{PromptDeskError, Result};
use crate::newline;
use crate::validator::ValidationResult;
use crate::vocabulary::Vocabulary;

/// A template being edited against a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct TemplateDraft {
    vocabulary: Vocabulary,
    text: String,
    caret: Option<usize>,
}

impl TemplateDraft {
    /// Start an empty draft.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            text: String::new(),
            caret: None,
        }
    }

    /// Open a stored template for editing.
    pub fn from_stored(vocabulary: Vocabulary, stored: &str) -> Self {
        Self {
            vocabulary,
            text: newline::decode(stored),
            caret: None,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last known caret, in characters.
    pub fn caret(&self) -> Option<usize> {
        self.caret
    }

    /// Replace the whole text, as on a keystroke.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Remember where the caret is, as on a click or key release.
    pub fn set_caret(&mut self, offset: usize) {
        self.caret = Some(offset);
    }

    /// True when `token` can be offered as an insertable chip.
    pub fn can_insert(&self, token: &str) -> bool {
        self.vocabulary.contains(token) && !self.text.contains(token)
    }

    /// Insert `token` at the remembered caret (or the end) and move the caret
    /// behind it. Returns the new caret.
    pub fn insert(&mut self, token: &str) -> Result<usize> {
        self.guard(token)?;
        let ins = caret::insert_at_caret(&self.text, token, self.caret);
        Ok(self.apply(ins))
    }

    /// Handle a dropped chip. The payload is the placeholder itself, braces
    /// included, and is inserted unchanged.
    pub fn drop_payload(&mut self, payload: &str) -> Result<usize> {
        debug!(payload, caret = ?self.caret, "placeholder dropped");
        self.insert(payload)
    }

    /// Replace the selection `[start, end)` with `token`.
    pub fn replace_selection(&mut self, token: &str, start: usize, end: usize) -> Result<usize> {
        self.guard(token)?;
        let ins = caret::replace_selection(&self.text, token, start, end);
        Ok(self.apply(ins))
    }

    pub fn validate(&self) -> ValidationResult {
        self.vocabulary.validate(Some(self.text.as_str()))
    }

    /// The storage form of the current text.
    pub fn to_stored(&self) -> String {
        newline::encode(&self.text)
    }

    fn guard(&self, token: &str) -> Result<()> {
        if !self.vocabulary.contains(token) {
            debug!(token, vocabulary = %self.vocabulary.name, "refusing unknown placeholder");
            return Err(PromptDeskError::PlaceholderNotAllowed {
                token: token.to_string(),
                vocabulary: self.vocabulary.name.clone(),
            });
        }
        if self.text.contains(token) {
            debug!(token, "refusing placeholder already in template");
            return Err(PromptDeskError::PlaceholderAlreadyUsed(token.to_string()));
        }
        Ok(())
    }

    fn apply(&mut self, ins: Insertion) -> usize {
        self.text = ins.template;
        self.caret = Some(ins.caret);
        ins.caret
    }
}
