//! `encode` / `decode`: plain text in, plain text out, for use in pipes.

use std::path::Path;

use anyhow::Result;

use promptdesk_core::newline;

/// Print the storage form of a multi-line text file.
pub async fn encode(file: &Path, sanitize_quotes: bool) -> Result<()> {
    let text = super::read_text(file).await?;
    let text = if sanitize_quotes {
        newline::sanitize_quotes(&text)
    } else {
        text
    };
    println!("{}", newline::encode(&text));
    Ok(())
}

/// Print the editable multi-line form of a stored text file.
pub async fn decode(file: &Path) -> Result<()> {
    let stored = super::read_text(file).await?;
    // Stored text is a single line; a trailing newline comes from the file.
    println!("{}", newline::decode(stored.trim_end_matches(['\n', '\r'])));
    Ok(())
}
