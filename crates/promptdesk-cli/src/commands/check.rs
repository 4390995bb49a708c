use std::path::Path;

use anyhow::{bail, Result};
use serde::Serialize;

use promptdesk_core::newline;
use promptdesk_core::validator::ValidationResult;

use crate::output;

/// JSON form of a check, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub vocabulary: &'a str,
    pub can_save: bool,
    pub helper_message: String,
    pub result: &'a ValidationResult,
}

impl<'a> CheckReport<'a> {
    pub fn new(vocabulary: &'a str, result: &'a ValidationResult) -> Self {
        Self {
            vocabulary,
            can_save: result.can_save(),
            helper_message: result.helper_message(),
            result,
        }
    }
}

/// Validate a template file against a vocabulary.
///
/// Prints the invalid, duplicated and missing placeholders followed by the
/// helper message a form would show. Fails when the template could not be
/// saved, so the command can gate scripts and CI jobs.
pub async fn run(
    config_path: &Path,
    file: &Path,
    vocabulary: &str,
    stored: bool,
    json: bool,
) -> Result<()> {
    let vocab = super::load_vocabulary(config_path, vocabulary)?;
    let raw = super::read_text(file).await?;
    let template = if stored { newline::decode(&raw) } else { raw };

    let result = vocab.validate(Some(template.as_str()));

    if json {
        let report = CheckReport::new(&vocab.name, &result);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_header(&format!("promptdesk check: {}", file.display()));
        output::print_key_value("Vocabulary", &vocab.name);
        output::print_key_value("Placeholders", &vocab.placeholders.len().to_string());
        output::print_validation(&result);
    }

    if !result.can_save() {
        bail!("{}", result.helper_message());
    }
    Ok(())
}
