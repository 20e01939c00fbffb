//! CLI command implementations
//!
//! Thin wrappers: each opens nothing itself, takes the already-opened
//! database (and commentary adapter where the command comments), calls one
//! core handler, and prints the reply. Store errors propagate to main;
//! commentary failures never do.

use std::path::Path;

use anyhow::{Context, Result};
use kakeibo_core::ai::Commentary;
use kakeibo_core::db::Database;
use kakeibo_core::handlers;
use kakeibo_core::models::NewPayment;

/// Open the ledger database, creating it on first use
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

pub async fn cmd_record(
    db: &Database,
    commentary: &Commentary,
    amount: i64,
    category: &str,
    payer: &str,
    card: &str,
    shop: &str,
) -> Result<()> {
    let new = NewPayment {
        amount,
        category: category.to_string(),
        payer: payer.to_string(),
        card_type: card.to_string(),
        shop: shop.to_string(),
    };

    let reply = handlers::handle_record(db, commentary, &new).await?;
    println!("{}", reply);
    Ok(())
}

pub fn cmd_recent(db: &Database, limit: i64) -> Result<()> {
    let reply = handlers::handle_recent(db, limit)?;
    println!("{}", reply);
    Ok(())
}

pub fn cmd_delete(db: &Database, id: i64) -> Result<()> {
    let reply = handlers::handle_delete(db, id)?;
    println!("{}", reply);
    Ok(())
}

pub fn cmd_undo(db: &Database) -> Result<()> {
    let reply = handlers::handle_undo(db)?;
    println!("{}", reply);
    Ok(())
}

pub async fn cmd_summary(db: &Database, commentary: &Commentary) -> Result<()> {
    let reply = handlers::handle_summary(db, commentary).await?;
    println!("{}", reply);
    Ok(())
}

pub fn cmd_month(db: &Database) -> Result<()> {
    let reply = handlers::handle_month_total(db)?;
    println!("{}", reply);
    Ok(())
}
