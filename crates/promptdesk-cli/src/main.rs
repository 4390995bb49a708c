//! promptdesk CLI: template tooling for the sales-training admin dashboard.
//!
//! Provides commands that mirror what the dashboard's template forms do:
//! `check`, `insert`, `encode`, `decode`, `vocab`, `compose`, and `plan`.
//!
//! All template logic lives in [`promptdesk_core`]; this binary reads files,
//! resolves vocabularies from the config, and prints results.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "promptdesk",
    about = "Prompt template toolkit: validate placeholders, insert at caret, encode for storage",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to promptdesk.config.json (default: ./promptdesk.config.json)
    #[arg(long, global = true, default_value = "promptdesk.config.json")]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a template against a placeholder vocabulary
    Check {
        /// Template file
        file: PathBuf,

        /// Vocabulary name (built-in: coaching, closing-mode)
        #[arg(long, visible_alias = "vocab")]
        vocabulary: String,

        /// The file holds the escaped storage form
        #[arg(long)]
        stored: bool,

        /// Print the validation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Insert a placeholder at a caret offset
    Insert {
        /// Template file
        file: PathBuf,

        /// Vocabulary name
        #[arg(long, visible_alias = "vocab")]
        vocabulary: String,

        /// Placeholder to insert, braces included (e.g. "{role}")
        #[arg(long, short)]
        token: String,

        /// Caret offset in characters (default: end of text)
        #[arg(long)]
        caret: Option<usize>,

        /// End of a selection starting at --caret, replaced by the token
        #[arg(long, requires = "caret")]
        select_end: Option<usize>,

        /// Write the result back to the file
        #[arg(long)]
        in_place: bool,
    },

    /// Encode multi-line text into the escaped storage form
    Encode {
        /// Text file
        file: PathBuf,

        /// Also replace double quotes with single quotes
        #[arg(long)]
        sanitize_quotes: bool,
    },

    /// Decode stored text back into multi-line form
    Decode {
        /// Stored text file
        file: PathBuf,
    },

    /// List vocabularies, or the placeholders of one
    Vocab {
        /// Vocabulary name
        name: Option<String>,
    },

    /// Compose a template interactively
    Compose {
        /// Vocabulary name
        #[arg(long, visible_alias = "vocab")]
        vocabulary: String,

        /// Start from an existing stored template
        file: Option<PathBuf>,
    },

    /// Validate a subscription plan draft (JSON)
    Plan {
        /// Plan JSON file
        file: PathBuf,

        /// Print field errors as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            file,
            vocabulary,
            stored,
            json,
        } => {
            commands::check::run(&cli.config, &file, &vocabulary, stored, json).await?;
        }
        Commands::Insert {
            file,
            vocabulary,
            token,
            caret,
            select_end,
            in_place,
        } => {
            commands::insert::run(
                &cli.config,
                &file,
                &vocabulary,
                &token,
                caret,
                select_end,
                in_place,
            )
            .await?;
        }
        Commands::Encode {
            file,
            sanitize_quotes,
        } => {
            commands::codec::encode(&file, sanitize_quotes).await?;
        }
        Commands::Decode { file } => {
            commands::codec::decode(&file).await?;
        }
        Commands::Vocab { name } => {
            commands::vocab::run(&cli.config, name.as_deref())?;
        }
        Commands::Compose { vocabulary, file } => {
            commands::compose::run(&cli.config, &vocabulary, file.as_deref()).await?;
        }
        Commands::Plan { file, json } => {
            commands::plan::run(&file, json).await?;
        }
    }

    Ok(())
}
