//! Monthly totals and breakdowns
//!
//! Month windows are keyed on the stored local-time `YYYY-MM` prefix of
//! paid_at, so entries group by the calendar month they were recorded in,
//! in the operating timezone.

use chrono::{DateTime, Local};
use rusqlite::params;

use super::{Database, DbConn};
use crate::error::Result;
use crate::models::{GroupTotal, MonthSummary};

/// Calendar month key (`YYYY-MM`) for a point in time
fn month_key(as_of: DateTime<Local>) -> String {
    as_of.format("%Y-%m").to_string()
}

fn group_totals(conn: &DbConn, column: &str, month: &str) -> Result<Vec<GroupTotal>> {
    let mut stmt = conn.prepare(&format!(
        r#"
        SELECT {0}, COALESCE(SUM(amount), 0) AS total
        FROM payments
        WHERE substr(paid_at, 1, 7) = ?1 AND is_deleted = 0
        GROUP BY {0}
        ORDER BY total DESC
        "#,
        column
    ))?;

    let groups = stmt
        .query_map(params![month], |row| {
            Ok(GroupTotal {
                label: row.get(0)?,
                amount: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(groups)
}

impl Database {
    /// Sum of active amounts in the calendar month containing `as_of`
    ///
    /// Returns 0 when no rows match, never null.
    pub fn monthly_total(&self, as_of: DateTime<Local>) -> Result<i64> {
        let conn = self.conn()?;

        let total = conn.query_row(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM payments
            WHERE substr(paid_at, 1, 7) = ?1 AND is_deleted = 0
            "#,
            params![month_key(as_of)],
            |row| row.get(0),
        )?;

        Ok(total)
    }

    /// Current-month total plus per-category and per-card breakdowns
    ///
    /// Groups by the raw stored strings with no normalization; each breakdown
    /// is sorted by amount descending and partitions the total. An empty
    /// active month yields a zero total and empty breakdowns.
    pub fn monthly_breakdown(&self, as_of: DateTime<Local>) -> Result<MonthSummary> {
        let month = month_key(as_of);
        let conn = self.conn()?;

        let total: i64 = conn.query_row(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM payments
            WHERE substr(paid_at, 1, 7) = ?1 AND is_deleted = 0
            "#,
            params![month],
            |row| row.get(0),
        )?;

        let by_category = group_totals(&conn, "category", &month)?;
        let by_card = group_totals(&conn, "card_type", &month)?;

        Ok(MonthSummary {
            month,
            total,
            by_category,
            by_card,
        })
    }
}
