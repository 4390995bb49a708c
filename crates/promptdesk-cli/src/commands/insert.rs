use std::path::Path;

use anyhow::Result;

use promptdesk_core::editor::TemplateDraft;

use crate::output;

/// Insert a placeholder into a template file at a caret offset.
///
/// Goes through [`TemplateDraft`], so tokens outside the vocabulary and
/// tokens already present are refused. With `select_end`, the characters
/// between `caret` and `select_end` are replaced.
pub async fn run(
    config_path: &Path,
    file: &Path,
    vocabulary: &str,
    token: &str,
    caret: Option<usize>,
    select_end: Option<usize>,
    in_place: bool,
) -> Result<()> {
    let vocab = super::load_vocabulary(config_path, vocabulary)?;
    let text = super::read_text(file).await?;

    let mut draft = TemplateDraft::new(vocab);
    draft.set_text(text.trim_end_matches(['\n', '\r']));

    let new_caret = match (caret, select_end) {
        (Some(start), Some(end)) => draft.replace_selection(token, start, end)?,
        (Some(at), None) => {
            draft.set_caret(at);
            draft.insert(token)?
        }
        (None, _) => draft.insert(token)?,
    };

    if in_place {
        tokio::fs::write(file, draft.text()).await?;
        output::print_success(&format!("Inserted {token} into {}", file.display()));
    } else {
        output::print_template(draft.text());
    }
    output::print_key_value("Caret", &new_caret.to_string());

    let result = draft.validate();
    if !result.can_save() {
        output::print_warning(&result.helper_message());
    }

    Ok(())
}
