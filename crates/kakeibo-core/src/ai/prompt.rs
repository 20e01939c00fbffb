//! Commentary prompt construction
//!
//! One fixed instruction template for both the "payment just recorded" and
//! the summary-only case; only the serialized event payload differs.

use crate::error::Result;
use crate::models::{CommentEvent, MonthSummary};

/// Fixed instruction block: output language, length ceiling, tone, no emoji
const INSTRUCTIONS: &str = "\
あなたは日本語で家計をゆるく見守るアシスタントです。

・出力は必ず日本語で、120文字以内で書いてください。
・親しみやすい口調で、堅苦しくならないようにしてください。
・絵文字は使わないでください。
・敬語で話してください。";

/// Build the full prompt from an event and the current month's aggregate
pub fn build_prompt(event: &CommentEvent, summary: &MonthSummary) -> Result<String> {
    let event_json = serde_json::to_string_pretty(event)?;
    let summary_json = serde_json::to_string_pretty(summary)?;

    Ok(format!(
        "{}\n\n[最新の支出]\n{}\n\n[今月のサマリ]\n{}\n",
        INSTRUCTIONS, event_json, summary_json
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupTotal;

    fn summary() -> MonthSummary {
        MonthSummary {
            month: "2026-08".to_string(),
            total: 4700,
            by_category: vec![GroupTotal {
                label: "食費".to_string(),
                amount: 4700,
            }],
            by_card: vec![GroupTotal {
                label: "イオン".to_string(),
                amount: 4700,
            }],
        }
    }

    #[test]
    fn prompt_includes_instructions_and_both_payloads() {
        let prompt = build_prompt(&CommentEvent::SummaryRequest, &summary()).unwrap();

        assert!(prompt.contains("120文字以内"));
        assert!(prompt.contains("絵文字は使わないでください"));
        assert!(prompt.contains("[最新の支出]"));
        assert!(prompt.contains("[今月のサマリ]"));
        assert!(prompt.contains("monthly_summary_request"));
        assert!(prompt.contains("食費"));
    }
}
