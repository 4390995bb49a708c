//! Terminal output formatting for the promptdesk CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use console::style;

use promptdesk_core::validator::ValidationResult;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.chars().count())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a warning message prefixed with yellow `[WARN]`.
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

/// Print an error message prefixed with red `[ERROR]`.
pub fn print_error(text: &str) {
    println!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print template text indented under a dim rule.
pub fn print_template(text: &str) {
    println!("{}", style("-".repeat(40)).dim());
    for line in text.lines() {
        println!("  {line}");
    }
    println!("{}", style("-".repeat(40)).dim());
}

/// Print the findings of a validation run, helper message last.
pub fn print_validation(result: &ValidationResult) {
    if result.has_invalid_placeholders {
        print_key_value("Invalid", &result.invalid_placeholders.join(", "));
    }
    if result.has_duplicate_placeholders {
        print_key_value("Duplicated", &result.duplicate_placeholders.join(", "));
    }
    if !result.missing_placeholders.is_empty() {
        print_key_value("Missing", &result.missing_placeholders.join(", "));
    }

    if result.can_save() {
        print_success("Template can be saved");
    } else {
        print_error(&result.helper_message());
    }
}
