//! Domain models for kakeibo

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single expense entry in the shared ledger
///
/// Rows are append-only: after insertion the only permitted mutation is the
/// one-way `is_deleted` transition. `paid_at` is the canonical ordering key,
/// with `id` breaking ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    /// When the expense was recorded, with the local UTC offset
    pub paid_at: DateTime<FixedOffset>,
    pub shop: String,
    /// Whole yen; sign is not validated (negative entries act as refunds)
    pub amount: i64,
    pub category: String,
    pub payer: String,
    pub card_type: String,
    /// Reserved for future use; always empty at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing)]
    pub is_deleted: bool,
}

/// Fields supplied by a record command, before the store assigns id/paid_at
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub amount: i64,
    pub category: String,
    pub payer: String,
    pub card_type: String,
    pub shop: String,
}

/// Outcome of a soft delete by id
///
/// NotFound and AlreadyDeleted are expected user-facing outcomes, not errors.
#[derive(Debug, Clone)]
pub enum DeleteOutcome {
    /// Row was active and is now deleted; carries the pre-deletion payment
    Deleted(Payment),
    NotFound,
    AlreadyDeleted,
}

/// Outcome of undoing the most recent active payment
#[derive(Debug, Clone)]
pub enum UndoOutcome {
    Undone(Payment),
    NothingToUndo,
}

/// One group row in a monthly breakdown (raw string label, summed amount)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupTotal {
    pub label: String,
    pub amount: i64,
}

/// Current-month aggregate: total plus per-category and per-card breakdowns
///
/// Group keys are the raw stored strings; no normalization or case folding.
/// Both breakdowns are sorted by amount descending and each partitions the
/// total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Calendar month key, `YYYY-MM`, in the operating timezone
    pub month: String,
    pub total: i64,
    pub by_category: Vec<GroupTotal>,
    pub by_card: Vec<GroupTotal>,
}

/// The event a commentary request is about
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payment")]
pub enum CommentEvent {
    /// A payment was just recorded
    #[serde(rename = "payment_recorded")]
    Recorded(Payment),
    /// Summary-only request, no specific transaction attached
    #[serde(rename = "monthly_summary_request")]
    SummaryRequest,
}
