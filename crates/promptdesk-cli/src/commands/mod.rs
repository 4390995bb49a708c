//! CLI command implementations for promptdesk.
//!
//! Each module corresponds to a subcommand (`promptdesk <command>`).

pub mod check;
pub mod codec;
pub mod compose;
pub mod insert;
pub mod plan;
pub mod vocab;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use promptdesk_core::config::DeskConfig;
use promptdesk_core::vocabulary::Vocabulary;

/// Resolve a vocabulary by name, consulting the config file when present.
pub fn load_vocabulary(config_path: &Path, name: &str) -> Result<Vocabulary> {
    let config = DeskConfig::load_or_default(config_path)?;
    let vocab = config.resolve(name)?;
    debug!(
        vocabulary = %vocab.name,
        placeholders = vocab.placeholders.len(),
        "resolved vocabulary"
    );
    Ok(vocab)
}

/// Read a whole text file.
pub async fn read_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptdesk_core::vocabulary::Coverage;

    #[test]
    fn test_load_vocabulary_builtin_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let vocab = load_vocabulary(&dir.path().join("promptdesk.config.json"), "coaching").unwrap();
        assert_eq!(vocab, Vocabulary::coaching());
    }

    #[test]
    fn test_load_vocabulary_custom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("promptdesk.config.json");
        DeskConfig {
            vocabularies: vec![Vocabulary {
                name: "greeting".into(),
                placeholders: vec!["{name}".into()],
                coverage: Coverage::Required("{name}".into()),
            }],
        }
        .save(&path)
        .unwrap();

        let vocab = load_vocabulary(&path, "greeting").unwrap();
        assert_eq!(vocab.required(), Some("{name}"));
        assert!(load_vocabulary(&path, "missing").is_err());
    }

    #[tokio::test]
    async fn test_read_text_reports_path() {
        let err = read_text(Path::new("/tmp/nonexistent_promptdesk_template.txt"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("nonexistent_promptdesk_template.txt"));
    }

    #[tokio::test]
    async fn test_check_rejects_duplicate_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("coaching.txt");
        std::fs::write(&file, "Summarize: {conversation_text} {conversation_text}").unwrap();

        let err = check::run(&dir.path().join("none.json"), &file, "coaching", false, true)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "{conversation_text} can only be used once.");
    }

    #[tokio::test]
    async fn test_insert_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("coaching.txt");
        std::fs::write(&file, "Review: ").unwrap();

        insert::run(
            &dir.path().join("none.json"),
            &file,
            "coaching",
            "{conversation_text}",
            None,
            None,
            true,
        )
        .await
        .unwrap();
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "Review: {conversation_text}"
        );

        // second copy is refused and the file stays as it was
        assert!(insert::run(
            &dir.path().join("none.json"),
            &file,
            "coaching",
            "{conversation_text}",
            Some(0),
            None,
            true,
        )
        .await
        .is_err());
    }

    #[tokio::test]
    async fn test_insert_ignores_trailing_newline_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("coaching.txt");
        std::fs::write(&file, "Review: \r\n").unwrap();

        insert::run(
            &dir.path().join("none.json"),
            &file,
            "coaching",
            "{conversation_text}",
            None,
            None,
            true,
        )
        .await
        .unwrap();
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "Review: {conversation_text}"
        );
    }

    #[test]
    fn test_check_report_json_shape() {
        let vocab = Vocabulary::coaching();
        let result = vocab.validate(Some("{name}"));
        let report = check::CheckReport::new(&vocab.name, &result);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["vocabulary"], "coaching");
        assert_eq!(value["can_save"], false);
        assert_eq!(
            value["helper_message"],
            "Only {conversation_text} is allowed as a placeholder."
        );
        assert_eq!(value["result"]["invalid_placeholders"][0], "{name}");
        assert!(value["result"].get("style").is_none());
    }

    #[tokio::test]
    async fn test_plan_failure_carries_field_messages() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plan.json");
        std::fs::write(
            &file,
            r#"{"plan_type":"pro","billing_cycle":"monthly","credits_per_month":10,
                "max_users":0,"max_session_duration":30,"monthly_price":9}"#,
        )
        .unwrap();

        let err = plan::run(&file, true).await.unwrap_err();
        let err = err
            .downcast::<promptdesk_core::error::PromptDeskError>()
            .unwrap();
        assert!(matches!(
            err,
            promptdesk_core::error::PromptDeskError::InvalidPlan(_)
        ));
        assert_eq!(
            err.to_string(),
            "invalid plan: Max users must be a positive number"
        );
    }

    #[tokio::test]
    async fn test_plan_valid_passes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plan.json");
        std::fs::write(
            &file,
            r#"{"plan_type":"team","billing_cycle":"yearly","credits_per_month":10,
                "max_users":3,"max_session_duration":45,"yearly_price":0}"#,
        )
        .unwrap();

        plan::run(&file, true).await.unwrap();
    }
}
