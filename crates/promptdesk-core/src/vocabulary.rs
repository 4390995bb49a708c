//! Placeholder vocabularies.
//!
//! A [`Vocabulary`] is the set of placeholders a kind of template may use,
//! plus a [`Coverage`] rule: either one token is required and nothing else is
//! allowed (coaching prompts), or every token must appear (closing-mode
//! prompts). Two vocabularies are built in; more can be declared in the
//! config file.
//!
//! ```
//! use promptdesk_core::vocabulary::Vocabulary;
//!
//! let coaching = Vocabulary::coaching();
//! assert_eq!(coaching.required(), Some("{conversation_text}"));
//! assert!(coaching.validate(Some("Review {conversation_text}")).can_save());
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{PromptDeskError, Result};
use crate::placeholder;
use crate::validator::{self, ValidationResult};

/// The placeholder every coaching prompt must carry.
pub const CONVERSATION_TEXT: &str = "{conversation_text}";

/// Placeholders of closing-mode prompts, in the order the editor offers them.
pub const CLOSING_MODE_PLACEHOLDERS: [&str; 16] = [
    "{industry}",
    "{name}",
    "{plant_size_impact_details}",
    "{industry_details}",
    "{manufacturing_model_details}",
    "{plant_size_impact}",
    "{role_details}",
    "{manufacturing_model}",
    "{role}",
    "{behavioral_detail}",
    "{company_size}",
    "{company_size_detail}",
    "{persona_products}",
    "{gender}",
    "{scenario}",
    "{document_content}",
];

/// How much of the vocabulary a template has to use before it can be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    /// This one placeholder must appear (and, like every placeholder, only once).
    Required(String),
    /// Every placeholder of the vocabulary must appear at least once.
    All,
}

/// The fixed set of placeholders permitted in one business context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub name: String,
    /// Allowed tokens including braces, in display order.
    pub placeholders: Vec<String>,
    pub coverage: Coverage,
}

impl Vocabulary {
    /// Coaching prompts: only `{conversation_text}`, required once.
    pub fn coaching() -> Self {
        Self {
            name: "coaching".into(),
            placeholders: vec![CONVERSATION_TEXT.into()],
            coverage: Coverage::Required(CONVERSATION_TEXT.into()),
        }
    }

    /// Closing-mode prompts: all 16 persona/company tokens, each used once.
    pub fn closing_mode() -> Self {
        Self {
            name: "closing-mode".into(),
            placeholders: CLOSING_MODE_PLACEHOLDERS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            coverage: Coverage::All,
        }
    }

    /// All vocabularies shipped with the toolkit.
    pub fn builtins() -> Vec<Self> {
        vec![Self::coaching(), Self::closing_mode()]
    }

    /// Resolve a built-in vocabulary by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "coaching" => Some(Self::coaching()),
            "closing-mode" => Some(Self::closing_mode()),
            _ => None,
        }
    }

    /// The allowed set, for membership tests.
    pub fn allowed(&self) -> BTreeSet<&str> {
        self.placeholders.iter().map(String::as_str).collect()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.placeholders.iter().any(|p| p == token)
    }

    /// The single required token, when the vocabulary is in `Required` mode.
    pub fn required(&self) -> Option<&str> {
        match &self.coverage {
            Coverage::Required(token) => Some(token),
            Coverage::All => None,
        }
    }

    /// Placeholders that can still be inserted: chips for tokens the template
    /// already contains are shown as "Already used".
    pub fn available<'a>(&'a self, template: &str) -> Vec<&'a str> {
        self.placeholders
            .iter()
            .map(String::as_str)
            .filter(|p| !template.contains(p))
            .collect()
    }

    /// Validate a template against this vocabulary.
    pub fn validate(&self, template: Option<&str>) -> ValidationResult {
        validator::validate_with(template, self)
    }

    /// Reject vocabularies that could never be satisfied or matched.
    pub fn ensure_well_formed(&self) -> Result<()> {
        let fail = |reason: String| PromptDeskError::InvalidVocabulary {
            name: self.name.clone(),
            reason,
        };

        if self.placeholders.is_empty() {
            return Err(fail("no placeholders listed".into()));
        }

        let mut seen = BTreeSet::new();
        for token in &self.placeholders {
            if !placeholder::is_placeholder(token) {
                return Err(fail(format!("'{token}' is not a single {{...}} placeholder")));
            }
            if !seen.insert(token.as_str()) {
                return Err(fail(format!("{token} is listed twice")));
            }
        }

        if let Some(required) = self.required() {
            if !self.contains(required) {
                return Err(fail(format!("required {required} is not in the vocabulary")));
            }
        }

        Ok(())
    }
}
