use std::path::Path;

use anyhow::{Context, Result};

use promptdesk_core::subscription::{self, PlanDraft};

use crate::output;

/// Validate a subscription plan draft stored as JSON.
pub async fn run(file: &Path, json: bool) -> Result<()> {
    let raw = super::read_text(file).await?;
    let plan: PlanDraft = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse plan at {}", file.display()))?;

    let errors = plan.validate();

    if json {
        println!("{}", serde_json::to_string_pretty(&errors)?);
    } else {
        output::print_header(&format!("promptdesk plan: {}", file.display()));
        output::print_key_value(
            "Plan type",
            &subscription::display_label(plan.plan_type.as_deref()),
        );
        output::print_key_value(
            "Billing cycle",
            &subscription::display_label(plan.billing_cycle.map(|c| c.as_str())),
        );
        output::print_key_value(
            "Price",
            &subscription::format_currency(plan.display_price()),
        );

        if errors.is_empty() {
            output::print_success("Plan can be saved");
        }
        for (field, message) in &errors {
            output::print_error(&format!("{field}: {message}"));
        }
    }

    plan.ensure_valid()?;
    Ok(())
}
