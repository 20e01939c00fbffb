//! CLI command tests
//!
//! These drive the command wrappers against an in-memory database, the same
//! way main.rs does after argument parsing.

use clap::Parser;
use kakeibo_core::ai::Commentary;
use kakeibo_core::db::Database;
use kakeibo_core::models::NewPayment;

use crate::cli::{Cli, Commands};
use crate::commands;

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn seed_payment(db: &Database, amount: i64) -> i64 {
    db.record(&NewPayment {
        amount,
        category: "食費".to_string(),
        payer: "共同".to_string(),
        card_type: "イオン".to_string(),
        shop: "イオンザビッグ".to_string(),
    })
    .unwrap()
    .id
}

// ========== Argument Parsing ==========

#[test]
fn test_parse_record_with_multi_word_shop() {
    let cli = Cli::parse_from([
        "kakeibo", "record", "1200", "外食", "夫", "三井住友", "マクドナルド", "渋谷店",
    ]);

    match cli.command {
        Commands::Record {
            amount,
            category,
            payer,
            card,
            shop,
        } => {
            assert_eq!(amount, 1200);
            assert_eq!(category, "外食");
            assert_eq!(payer, "夫");
            assert_eq!(card, "三井住友");
            assert_eq!(shop.join(" "), "マクドナルド 渋谷店");
        }
        _ => panic!("expected Record"),
    }
}

#[test]
fn test_parse_recent_default_limit() {
    let cli = Cli::parse_from(["kakeibo", "recent"]);
    match cli.command {
        Commands::Recent { limit } => assert_eq!(limit, 10),
        _ => panic!("expected Recent"),
    }
}

#[test]
fn test_parse_global_db_flag() {
    let cli = Cli::parse_from(["kakeibo", "--db", "/tmp/house.db", "month"]);
    assert_eq!(cli.db.to_str().unwrap(), "/tmp/house.db");
    assert!(matches!(cli.command, Commands::Month));
}

// ========== Command Wrappers ==========

#[tokio::test]
async fn test_cmd_record_without_credential() {
    let db = setup_test_db();
    let commentary = Commentary::disabled();

    let result = commands::cmd_record(
        &db,
        &commentary,
        3500,
        "食費",
        "共同",
        "イオン",
        "イオンザビッグ",
    )
    .await;
    assert!(result.is_ok());

    let recent = db.list_recent(10).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].amount, 3500);
}

#[test]
fn test_cmd_recent_and_month_on_empty_db() {
    let db = setup_test_db();
    assert!(commands::cmd_recent(&db, 10).is_ok());
    assert!(commands::cmd_month(&db).is_ok());
}

#[test]
fn test_cmd_delete_then_undo() {
    let db = setup_test_db();
    let id = seed_payment(&db, 500);
    seed_payment(&db, 700);

    assert!(commands::cmd_delete(&db, id).is_ok());
    assert!(commands::cmd_undo(&db).is_ok());

    assert!(db.list_recent(10).unwrap().is_empty());
}

#[tokio::test]
async fn test_cmd_summary_without_credential() {
    let db = setup_test_db();
    seed_payment(&db, 3500);

    let commentary = Commentary::disabled();
    assert!(commands::cmd_summary(&db, &commentary).await.is_ok());
}
