//! Subscription plan drafts: field validation and price display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PromptDeskError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// A subscription plan as edited in the admin form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanDraft {
    pub plan_type: Option<String>,
    pub billing_cycle: Option<BillingCycle>,
    pub credits_per_month: Option<i64>,
    pub max_users: Option<i64>,
    /// Minutes.
    pub max_session_duration: Option<i64>,
    pub monthly_price: Option<f64>,
    pub yearly_price: Option<f64>,
}

/// Field name to error message, sorted by field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

impl PlanDraft {
    /// Switch billing cycle; the price of the other cycle is cleared.
    pub fn set_billing_cycle(&mut self, cycle: BillingCycle) {
        match cycle {
            BillingCycle::Monthly => self.yearly_price = None,
            BillingCycle::Yearly => self.monthly_price = None,
        }
        self.billing_cycle = Some(cycle);
    }

    /// Check every field. An empty map means the draft can be saved.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.plan_type.as_deref().is_none_or(|t| t.trim().is_empty()) {
            errors.insert("plan_type", "Plan type is required");
        }
        if self.billing_cycle.is_none() {
            errors.insert("billing_cycle", "Billing cycle is required");
        }

        let counters = [
            (
                "credits_per_month",
                self.credits_per_month,
                "Credits per month must be a positive number",
            ),
            (
                "max_users",
                self.max_users,
                "Max users must be a positive number",
            ),
            (
                "max_session_duration",
                self.max_session_duration,
                "Max session duration must be a positive number",
            ),
        ];
        for (field, value, message) in counters {
            if value.is_none_or(|v| v <= 0) {
                errors.insert(field, message);
            }
        }

        // Zero is a valid price (free plans); negative or absent is not.
        let price_ok = |p: Option<f64>| p.is_some_and(|v| v.is_finite() && v >= 0.0);
        match self.billing_cycle {
            Some(BillingCycle::Monthly) if !price_ok(self.monthly_price) => {
                errors.insert("monthly_price", "Monthly price must be a positive number");
            }
            Some(BillingCycle::Yearly) if !price_ok(self.yearly_price) => {
                errors.insert("yearly_price", "Yearly price must be a positive number");
            }
            _ => {}
        }

        errors
    }

    /// Like [`validate`](Self::validate), folded into a single error.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let joined = errors.values().copied().collect::<Vec<_>>().join("; ");
        Err(PromptDeskError::InvalidPlan(joined))
    }

    /// Price shown in the plan list: the one matching the billing cycle,
    /// otherwise whichever is set.
    pub fn display_price(&self) -> Option<f64> {
        match self.billing_cycle {
            Some(BillingCycle::Monthly) => self.monthly_price,
            Some(BillingCycle::Yearly) => self.yearly_price,
            None => self.monthly_price.or(self.yearly_price),
        }
    }
}

/// Format an amount as US dollars, e.g. `$1,234.50`. `N/A` when absent.
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        return "N/A".into();
    };

    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Capitalize the first letter for display, `N/A` for empty values.
pub fn display_label(value: Option<&str>) -> String {
    let mut chars = match value {
        Some(v) if !v.is_empty() => v.chars(),
        _ => return "N/A".into(),
    };
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "N/A".into(),
    }
}

fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_monthly() -> PlanDraft {
        PlanDraft {
            plan_type: Some("pro".into()),
            billing_cycle: Some(BillingCycle::Monthly),
            credits_per_month: Some(100),
            max_users: Some(5),
            max_session_duration: Some(30),
            monthly_price: Some(49.0),
            yearly_price: None,
        }
    }

    #[test]
    fn test_valid_plan_has_no_errors() {
        assert!(valid_monthly().validate().is_empty());
        assert!(valid_monthly().ensure_valid().is_ok());
    }

    #[test]
    fn test_empty_plan_reports_required_fields() {
        let errors = PlanDraft::default().validate();
        assert_eq!(errors.get("plan_type"), Some(&"Plan type is required"));
        assert_eq!(errors.get("billing_cycle"), Some(&"Billing cycle is required"));
        assert!(errors.contains_key("credits_per_month"));
        assert!(errors.contains_key("max_users"));
        assert!(errors.contains_key("max_session_duration"));
        // no cycle, so no price check
        assert!(!errors.contains_key("monthly_price"));
    }

    #[test]
    fn test_zero_counters_rejected() {
        let mut plan = valid_monthly();
        plan.max_users = Some(0);
        plan.credits_per_month = Some(-3);
        let errors = plan.validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_price_checked_against_cycle() {
        let mut plan = valid_monthly();
        plan.monthly_price = Some(-1.0);
        assert!(plan.validate().contains_key("monthly_price"));

        plan.monthly_price = Some(0.0);
        assert!(plan.validate().is_empty());

        plan.set_billing_cycle(BillingCycle::Yearly);
        assert_eq!(plan.monthly_price, None);
        assert_eq!(
            plan.validate().get("yearly_price"),
            Some(&"Yearly price must be a positive number")
        );
    }

    #[test]
    fn test_ensure_valid_joins_messages() {
        let mut plan = valid_monthly();
        plan.plan_type = Some("  ".into());
        let err = plan.ensure_valid().unwrap_err();
        assert!(err.to_string().contains("Plan type is required"));
    }

    #[test]
    fn test_display_price() {
        let plan = valid_monthly();
        assert_eq!(plan.display_price(), Some(49.0));

        let plan = PlanDraft {
            yearly_price: Some(490.0),
            ..Default::default()
        };
        assert_eq!(plan.display_price(), Some(490.0));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some(1234.5)), "$1,234.50");
        assert_eq!(format_currency(Some(0.0)), "$0.00");
        assert_eq!(format_currency(Some(999.999)), "$1,000.00");
        assert_eq!(format_currency(Some(-5.0)), "-$5.00");
        assert_eq!(format_currency(None), "N/A");
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label(Some("monthly")), "Monthly");
        assert_eq!(display_label(Some("")), "N/A");
        assert_eq!(display_label(None), "N/A");
    }

    #[test]
    fn test_plan_from_json() {
        let plan: PlanDraft = serde_json::from_str(
            r#"{"plan_type":"team","billing_cycle":"yearly","credits_per_month":10,
                "max_users":3,"max_session_duration":45,"yearly_price":100}"#,
        )
        .unwrap();
        assert_eq!(plan.billing_cycle, Some(BillingCycle::Yearly));
        assert!(plan.validate().is_empty());
    }
}
