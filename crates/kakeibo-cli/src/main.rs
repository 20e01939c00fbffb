//! Kakeibo CLI - shared household-expense ledger
//!
//! Usage:
//!   kakeibo record 3500 食費 共同 イオン イオンザビッグ
//!   kakeibo recent --limit 10
//!   kakeibo delete 12
//!   kakeibo undo
//!   kakeibo summary
//!   kakeibo month
//!
//! Set GEMINI_API_KEY to get a short AI remark on record/summary; without it
//! the ledger works normally and the remark is skipped.

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use kakeibo_core::ai::Commentary;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let db = commands::open_db(&cli.db)?;

    match cli.command {
        Commands::Record {
            amount,
            category,
            payer,
            card,
            shop,
        } => {
            let commentary = Commentary::from_env();
            commands::cmd_record(
                &db,
                &commentary,
                amount,
                &category,
                &payer,
                &card,
                &shop.join(" "),
            )
            .await
        }
        Commands::Recent { limit } => commands::cmd_recent(&db, limit),
        Commands::Delete { id } => commands::cmd_delete(&db, id),
        Commands::Undo => commands::cmd_undo(&db),
        Commands::Summary => {
            let commentary = Commentary::from_env();
            commands::cmd_summary(&db, &commentary).await
        }
        Commands::Month => commands::cmd_month(&db),
    }
}
