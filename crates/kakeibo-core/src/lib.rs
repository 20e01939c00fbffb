//! Kakeibo Core Library
//!
//! Shared functionality for the kakeibo household-expense ledger:
//! - Ledger store (SQLite) with soft-delete semantics
//! - Monthly aggregation (total, per-category and per-card breakdowns)
//! - Resilient AI commentary adapter (Gemini, best effort)
//! - Command handlers that render chat replies

pub mod ai;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

/// Test utilities including the mock Gemini server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use ai::{Commentary, CommentaryBackend, GeminiBackend, MockBackend};
pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    CommentEvent, DeleteOutcome, GroupTotal, MonthSummary, NewPayment, Payment, UndoOutcome,
};
