use std::path::Path;

use anyhow::Result;
use dialoguer::{Input, Select};

use promptdesk_core::caret;
use promptdesk_core::editor::TemplateDraft;
use promptdesk_core::newline;

use crate::output;

const ACTIONS: &[&str] = &[
    "Insert placeholder",
    "Type text at caret",
    "Move caret",
    "Save",
    "Cancel",
];

/// Compose a template interactively.
///
/// Works like the dashboard's template field: placeholders are picked from
/// the chips that are still available and land at the caret, validation is
/// shown after every change, and saving is refused until the template is
/// valid. On save the storage form is printed.
pub async fn run(config_path: &Path, vocabulary: &str, file: Option<&Path>) -> Result<()> {
    let vocab = super::load_vocabulary(config_path, vocabulary)?;

    let mut draft = match file {
        Some(path) => {
            let stored = super::read_text(path).await?;
            TemplateDraft::from_stored(vocab, stored.trim_end_matches(['\n', '\r']))
        }
        None => TemplateDraft::new(vocab),
    };

    output::print_header(&format!("promptdesk compose: {}", draft.vocabulary().name));

    loop {
        output::print_template(draft.text());
        let len = draft.text().chars().count();
        let caret = draft.caret().unwrap_or(len).min(len);
        output::print_key_value("Caret", &format!("{caret}/{len}"));
        output::print_validation(&draft.validate());

        let action = Select::new()
            .with_prompt("Action")
            .items(ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => {
                let chips: Vec<String> = draft
                    .vocabulary()
                    .available(draft.text())
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                if chips.is_empty() {
                    output::print_warning("Every placeholder is already used");
                    continue;
                }
                let pick = Select::new()
                    .with_prompt("Placeholder")
                    .items(&chips)
                    .default(0)
                    .interact()?;
                draft.set_caret(caret);
                if let Err(e) = draft.insert(&chips[pick]) {
                    output::print_warning(&e.to_string());
                }
            }
            1 => {
                let typed: String = Input::new()
                    .with_prompt("Text (\\n for a line break)")
                    .allow_empty(true)
                    .interact_text()?;
                let ins = caret::insert_at_caret(draft.text(), &newline::decode(&typed), Some(caret));
                draft.set_text(ins.template);
                draft.set_caret(ins.caret);
            }
            2 => {
                let at: usize = Input::new()
                    .with_prompt(format!("Caret offset (0-{len})"))
                    .default(caret)
                    .interact_text()?;
                draft.set_caret(at.min(len));
            }
            3 => {
                let result = draft.validate();
                if result.can_save() {
                    output::print_success("Saved");
                    println!("{}", draft.to_stored());
                    return Ok(());
                }
                output::print_error(&format!("Save disabled: {}", result.helper_message()));
            }
            _ => {
                output::print_warning("Discarded");
                return Ok(());
            }
        }
    }
}
