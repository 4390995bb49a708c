//! Core library for the promptdesk toolkit.
//!
//! Holds the logic behind the admin dashboard's template fields, independent
//! of any UI framework:
//! - [`validator`] checks a template against a [`vocabulary::Vocabulary`] of
//!   allowed placeholders and derives the helper text and save gating;
//! - [`caret`] splices a placeholder into a template at a caret offset;
//! - [`newline`] converts between typed multi-line text and the escaped
//!   single-line form the backend stores.
//!
//! [`editor::TemplateDraft`] ties these together for a form, and
//! [`subscription`] covers the plan editor's field checks.

pub mod caret;
pub mod config;
pub mod editor;
pub mod error;
pub mod newline;
pub mod placeholder;
pub mod subscription;
pub mod validator;
pub mod vocabulary;
