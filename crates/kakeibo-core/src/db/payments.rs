//! Ledger store operations

use chrono::{Local, SecondsFormat};
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::{parse_paid_at, Database};
use crate::error::Result;
use crate::models::{DeleteOutcome, NewPayment, Payment, UndoOutcome};

/// Default number of entries for a recent listing
const DEFAULT_RECENT_LIMIT: i64 = 10;
/// Upper bound on a recent listing, regardless of caller input
const MAX_RECENT_LIMIT: i64 = 50;

const PAYMENT_COLUMNS: &str =
    "id, paid_at, shop, amount, category, payer, card_type, memo, is_deleted";

fn row_to_payment(row: &rusqlite::Row<'_>) -> rusqlite::Result<Payment> {
    let paid_at: String = row.get(1)?;
    Ok(Payment {
        id: row.get(0)?,
        paid_at: parse_paid_at(1, &paid_at)?,
        shop: row.get(2)?,
        amount: row.get(3)?,
        category: row.get(4)?,
        payer: row.get(5)?,
        card_type: row.get(6)?,
        memo: row.get(7)?,
        is_deleted: row.get(8)?,
    })
}

impl Database {
    /// Record a new expense, assigning paid_at = now in the local timezone
    ///
    /// Returns the fully populated payment. A storage failure means nothing
    /// was written; there is no partial success.
    pub fn record(&self, new: &NewPayment) -> Result<Payment> {
        let conn = self.conn()?;

        let paid_at = Local::now().fixed_offset();
        conn.execute(
            r#"
            INSERT INTO payments (paid_at, shop, amount, category, payer, card_type, memo)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)
            "#,
            params![
                paid_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                new.shop,
                new.amount,
                new.category,
                new.payer,
                new.card_type,
            ],
        )?;
        let id = conn.last_insert_rowid();

        debug!(id, amount = new.amount, category = %new.category, "Recorded payment");

        Ok(Payment {
            id,
            paid_at,
            shop: new.shop.clone(),
            amount: new.amount,
            category: new.category.clone(),
            payer: new.payer.clone(),
            card_type: new.card_type.clone(),
            memo: None,
            is_deleted: false,
        })
    }

    /// List active payments, most recent first
    ///
    /// `limit` is clamped to [1, 50]: zero or negative falls back to the
    /// default of 10, anything above 50 becomes 50. Bad input is never
    /// rejected.
    pub fn list_recent(&self, limit: i64) -> Result<Vec<Payment>> {
        let limit = if limit <= 0 {
            DEFAULT_RECENT_LIMIT
        } else {
            limit.min(MAX_RECENT_LIMIT)
        };

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {}
            FROM payments
            WHERE is_deleted = 0
            ORDER BY paid_at DESC, id DESC
            LIMIT ?1
            "#,
            PAYMENT_COLUMNS
        ))?;

        let payments = stmt
            .query_map(params![limit], row_to_payment)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(payments)
    }

    /// Soft-delete a payment by id
    ///
    /// A second call on the same id reports `AlreadyDeleted` and changes
    /// nothing. Rows are never physically removed.
    pub fn soft_delete(&self, id: i64) -> Result<DeleteOutcome> {
        let conn = self.conn()?;

        let payment = conn
            .query_row(
                &format!("SELECT {} FROM payments WHERE id = ?1", PAYMENT_COLUMNS),
                params![id],
                row_to_payment,
            )
            .optional()?;

        let payment = match payment {
            None => return Ok(DeleteOutcome::NotFound),
            Some(p) if p.is_deleted => return Ok(DeleteOutcome::AlreadyDeleted),
            Some(p) => p,
        };

        conn.execute("UPDATE payments SET is_deleted = 1 WHERE id = ?1", params![id])?;
        debug!(id, "Soft-deleted payment");

        Ok(DeleteOutcome::Deleted(payment))
    }

    /// Soft-delete the most recent active payment
    ///
    /// Targets exactly the entry `list_recent(1)` would return.
    pub fn undo_last(&self) -> Result<UndoOutcome> {
        let conn = self.conn()?;

        let payment = conn
            .query_row(
                &format!(
                    r#"
                    SELECT {}
                    FROM payments
                    WHERE is_deleted = 0
                    ORDER BY paid_at DESC, id DESC
                    LIMIT 1
                    "#,
                    PAYMENT_COLUMNS
                ),
                [],
                row_to_payment,
            )
            .optional()?;

        let payment = match payment {
            None => return Ok(UndoOutcome::NothingToUndo),
            Some(p) => p,
        };

        conn.execute(
            "UPDATE payments SET is_deleted = 1 WHERE id = ?1",
            params![payment.id],
        )?;
        debug!(id = payment.id, "Undid most recent payment");

        Ok(UndoOutcome::Undone(payment))
    }
}
