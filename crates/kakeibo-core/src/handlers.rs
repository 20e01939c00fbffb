//! Command handlers
//!
//! One function per chat command. Each performs exactly one ledger store or
//! aggregator call, then at most one commentary call (record and summary
//! only), then renders one reply string. Store errors propagate to the
//! dispatcher; commentary never fails and is appended only when non-empty.

use chrono::Local;

use crate::ai::Commentary;
use crate::db::Database;
use crate::error::Result;
use crate::models::{CommentEvent, DeleteOutcome, NewPayment, Payment, UndoOutcome};

/// Format whole yen with 3-digit grouping (e.g. 12,800)
pub fn yen(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// One-line description of a payment for reply texts
fn describe(p: &Payment) -> String {
    format!(
        "{} {} {}円（カテゴリ: {}, 支払者: {}, カード: {}）",
        p.paid_at.format("%Y-%m-%d %H:%M:%S"),
        p.shop,
        p.amount,
        p.category,
        p.payer,
        p.card_type
    )
}

/// Record a new expense and confirm it, with an optional AI remark
///
/// The insert is committed before the commentary request is sent, so a slow
/// or failed remote call can only delay the reply, never the record.
pub async fn handle_record(
    db: &Database,
    commentary: &Commentary,
    new: &NewPayment,
) -> Result<String> {
    let payment = db.record(new)?;
    let summary = db.monthly_breakdown(Local::now())?;

    let comment = commentary
        .comment_on(&CommentEvent::Recorded(payment.clone()), &summary)
        .await;

    let mut reply = format!("記録しました：{}", describe(&payment));
    if !comment.is_empty() {
        reply.push_str(&format!("\nAIコメント：{}", comment));
    }

    Ok(reply)
}

/// List recent active payments, most recent first
pub fn handle_recent(db: &Database, limit: i64) -> Result<String> {
    let payments = db.list_recent(limit)?;

    if payments.is_empty() {
        return Ok("最近の支出記録はありません。".to_string());
    }

    let mut lines = vec![format!("直近 {} 件の支出:", payments.len())];
    for p in &payments {
        lines.push(format!("[ID: {}] {}", p.id, describe(p)));
    }

    Ok(lines.join("\n"))
}

/// Soft-delete a payment by id
pub fn handle_delete(db: &Database, id: i64) -> Result<String> {
    let reply = match db.soft_delete(id)? {
        DeleteOutcome::Deleted(p) => {
            format!("ID {} の支出記録を削除しました：{}", id, describe(&p))
        }
        DeleteOutcome::NotFound => format!("ID {} の支出記録は見つかりませんでした。", id),
        DeleteOutcome::AlreadyDeleted => format!("ID {} の支出記録は既に削除されています。", id),
    };

    Ok(reply)
}

/// Undo (soft-delete) the most recent active payment
pub fn handle_undo(db: &Database) -> Result<String> {
    let reply = match db.undo_last()? {
        UndoOutcome::Undone(p) => format!(
            "直近の支出記録を取り消しました：[ID: {}] {}",
            p.id,
            describe(&p)
        ),
        UndoOutcome::NothingToUndo => "取り消せる支出記録はありません。".to_string(),
    };

    Ok(reply)
}

/// Current-month summary with breakdowns and an optional AI remark
pub async fn handle_summary(db: &Database, commentary: &Commentary) -> Result<String> {
    let now = Local::now();
    let summary = db.monthly_breakdown(now)?;

    let mut lines = vec![
        format!("{}の支出サマリ：", now.format("%Y年%m月")),
        format!("合計支出: {} 円", yen(summary.total)),
    ];

    if !summary.by_category.is_empty() {
        lines.push(String::new());
        lines.push("カテゴリ別支出:".to_string());
        for g in &summary.by_category {
            lines.push(format!(" - {}: {} 円", g.label, yen(g.amount)));
        }
    }

    if !summary.by_card.is_empty() {
        lines.push(String::new());
        lines.push("カード別支出:".to_string());
        for g in &summary.by_card {
            lines.push(format!(" - {}: {} 円", g.label, yen(g.amount)));
        }
    }

    let comment = commentary
        .comment_on(&CommentEvent::SummaryRequest, &summary)
        .await;
    if !comment.is_empty() {
        lines.push(String::new());
        lines.push(format!("AIコメント：{}", comment));
    }

    Ok(lines.join("\n"))
}

/// Current-month total alone, no commentary
pub fn handle_month_total(db: &Database) -> Result<String> {
    let total = db.monthly_total(Local::now())?;
    Ok(format!("今月の合計支出は {} 円です。", total))
}
