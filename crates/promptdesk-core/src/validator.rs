//! Template validation against an allowed placeholder set.
//!
//! [`validate`] is a pure function of its arguments and is meant to be called
//! on every keystroke. Its [`ValidationResult`] drives three things in a form:
//! whether the field is marked as errored, the helper text shown under it, and
//! whether the save action is enabled.
//!
//! Two policies share the same result type:
//! - a single required token (coaching prompts): the token must appear, and
//!   nothing else may;
//! - full coverage (closing-mode prompts): every allowed token must appear.
//!
//! In both, every placeholder may appear at most once.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::placeholder;
use crate::vocabulary::{Coverage, Vocabulary};

/// Outcome of validating one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub has_invalid_placeholders: bool,
    /// Distinct tokens outside the allowed set, in order of first appearance.
    pub invalid_placeholders: Vec<String>,
    pub has_duplicate_placeholders: bool,
    /// Distinct tokens seen more than once, in order of their first repeat.
    pub duplicate_placeholders: Vec<String>,
    /// Only meaningful when a single required token was designated.
    pub is_missing_required_placeholder: bool,
    /// Allowed tokens not yet used; filled only under full coverage.
    pub missing_placeholders: Vec<String>,
    #[serde(skip)]
    style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MessageStyle {
    /// One allowed token: messages name it directly.
    Single(String),
    /// Larger vocabularies: messages list the offending keywords.
    Keywords { required: Option<String> },
}

/// Validate `template` against `allowed`.
///
/// `None` is treated as an empty template: no invalid or duplicate findings,
/// but a designated `require_exactly_one` token is reported missing.
pub fn validate(
    template: Option<&str>,
    allowed: &BTreeSet<&str>,
    require_exactly_one: Option<&str>,
) -> ValidationResult {
    let template = template.unwrap_or_default();
    let found = placeholder::extract(template);

    let mut invalid: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();

    for token in found {
        if !allowed.contains(token) && !invalid.iter().any(|t| t == token) {
            invalid.push(token.to_string());
        }
        if !seen.insert(token) && !duplicates.iter().any(|t| t == token) {
            duplicates.push(token.to_string());
        }
    }

    let missing_required = require_exactly_one.is_some_and(|req| !template.contains(req));

    let style = match require_exactly_one {
        Some(req) if allowed.len() == 1 && allowed.contains(req) => {
            MessageStyle::Single(req.to_string())
        }
        _ => MessageStyle::Keywords {
            required: require_exactly_one.map(str::to_string),
        },
    };

    ValidationResult {
        has_invalid_placeholders: !invalid.is_empty(),
        invalid_placeholders: invalid,
        has_duplicate_placeholders: !duplicates.is_empty(),
        duplicate_placeholders: duplicates,
        is_missing_required_placeholder: missing_required,
        missing_placeholders: Vec::new(),
        style,
    }
}

/// Validate `template` under the coverage policy of `vocab`.
pub fn validate_with(template: Option<&str>, vocab: &Vocabulary) -> ValidationResult {
    let allowed = vocab.allowed();
    let mut result = validate(template, &allowed, vocab.required());

    if vocab.coverage == Coverage::All {
        let text = template.unwrap_or_default();
        result.missing_placeholders = vocab
            .available(text)
            .into_iter()
            .map(str::to_string)
            .collect();
    }

    result
}

impl ValidationResult {
    /// True when the template may be saved.
    pub fn can_save(&self) -> bool {
        !self.has_invalid_placeholders
            && !self.has_duplicate_placeholders
            && !self.is_missing_required_placeholder
            && self.missing_placeholders.is_empty()
    }

    /// Helper text for the form, by priority: invalid, duplicate, missing.
    /// Empty when there is nothing to report.
    pub fn helper_message(&self) -> String {
        if self.has_invalid_placeholders {
            return match &self.style {
                MessageStyle::Single(token) => {
                    format!("Only {token} is allowed as a placeholder.")
                }
                MessageStyle::Keywords { .. } => format!(
                    "Invalid keywords detected: {}. Please use only the provided keywords.",
                    self.invalid_placeholders.join(", ")
                ),
            };
        }

        if self.has_duplicate_placeholders {
            return match &self.style {
                MessageStyle::Single(token) => format!("{token} can only be used once."),
                MessageStyle::Keywords { .. } => format!(
                    "Duplicate keywords detected: {}. Each keyword can only be used once.",
                    self.duplicate_placeholders.join(", ")
                ),
            };
        }

        let mut missing: Vec<&str> = self
            .missing_placeholders
            .iter()
            .map(String::as_str)
            .collect();
        if self.is_missing_required_placeholder {
            match &self.style {
                MessageStyle::Single(token) => {
                    return format!("{token} is required in the template.");
                }
                MessageStyle::Keywords {
                    required: Some(token),
                } if !missing.contains(&token.as_str()) => missing.insert(0, token),
                MessageStyle::Keywords { .. } => {}
            }
        }

        if missing.is_empty() {
            String::new()
        } else {
            format!("Missing keywords: {}", missing.join(", "))
        }
    }
}
