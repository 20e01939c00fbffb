//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kakeibo - shared household-expense ledger
#[derive(Parser)]
#[command(name = "kakeibo")]
#[command(about = "Record shared household expenses and get monthly breakdowns", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "payments.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an expense
    ///
    /// Example: kakeibo record 3500 食費 共同 イオン イオンザビッグ
    Record {
        /// Amount in whole yen
        amount: i64,

        /// Category (食費 / 日用品 / 外食 など)
        category: String,

        /// Who paid (夫 / 妻 / 共同 など)
        payer: String,

        /// Card used (イオン / 三井住友 / エポス など)
        card: String,

        /// Shop name; remaining words are joined with spaces
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        shop: Vec<String>,
    },

    /// List recent expenses
    Recent {
        /// How many entries to show (clamped to 1-50)
        #[arg(short, long, default_value = "10")]
        limit: i64,
    },

    /// Delete an expense by id
    Delete {
        /// Id shown by `kakeibo recent`
        id: i64,
    },

    /// Undo the most recent expense
    Undo,

    /// Show the current-month summary with breakdowns
    Summary,

    /// Show the current-month total alone
    Month,
}
