use std::path::Path;

use anyhow::Result;

use promptdesk_core::config::DeskConfig;
use promptdesk_core::vocabulary::Coverage;

use crate::output;

/// List the known vocabularies, or the placeholders of one of them.
pub fn run(config_path: &Path, name: Option<&str>) -> Result<()> {
    let config = DeskConfig::load_or_default(config_path)?;

    match name {
        Some(name) => {
            let vocab = config.resolve(name)?;
            output::print_header(&format!("vocabulary: {}", vocab.name));
            let policy = match &vocab.coverage {
                Coverage::Required(token) => format!("{token} required once"),
                Coverage::All => "every placeholder once".to_string(),
            };
            output::print_key_value("Policy", &policy);
            for token in &vocab.placeholders {
                println!("  {token}");
            }
        }
        None => {
            output::print_header("vocabularies");
            for vocab in config.all_vocabularies() {
                output::print_key_value(
                    &vocab.name,
                    &format!("{} placeholder(s)", vocab.placeholders.len()),
                );
            }
        }
    }

    Ok(())
}
