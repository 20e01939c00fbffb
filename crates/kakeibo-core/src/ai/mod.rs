//! Best-effort AI commentary
//!
//! This module provides a backend-agnostic interface for asking a language
//! model for a short remark about a spending event.
//!
//! # Architecture
//!
//! - `CommentaryBackend` trait: a single non-streaming text generation call
//! - Backend implementations: `GeminiBackend`, `MockBackend`
//! - `Commentary` adapter: wraps an optional backend and absorbs every
//!   failure, so the ledger operation that triggered it always completes
//!
//! # Configuration
//!
//! Environment variables:
//! - `GEMINI_API_KEY`: API key for the Gemini API (commentary is disabled
//!   without it)
//! - `GEMINI_MODEL`: Model name (default: gemini-2.5-flash)
//! - `GEMINI_BASE_URL`: API base URL override, used by tests

mod gemini;
mod mock;
mod prompt;

pub use gemini::GeminiBackend;
pub use mock::MockBackend;
pub use prompt::build_prompt;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::models::{CommentEvent, MonthSummary};

/// Fixed reply when no API key is configured; returned without network I/O
pub const NO_CREDENTIAL_NOTICE: &str = "Gemini APIキーが設定されていません。";

/// Trait defining the interface for commentary backends
///
/// Backends must be Send + Sync to allow use across async tasks.
#[async_trait]
pub trait CommentaryBackend: Send + Sync {
    /// Send one non-streaming generation request and return the reply text
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model name this backend targets
    fn model(&self) -> &str;
}

/// Resilient commentary adapter
///
/// `comment_on` never fails: a missing credential short-circuits to a fixed
/// notice, and any transport error, timeout, or malformed response collapses
/// to an empty string. Callers treat "" as "no commentary", a degraded but
/// successful outcome. No retry is attempted; skipping the remark beats
/// delaying or duplicating the primary operation.
pub struct Commentary {
    backend: Option<Box<dyn CommentaryBackend>>,
}

impl Commentary {
    /// Create an adapter around a concrete backend
    pub fn new(backend: impl CommentaryBackend + 'static) -> Self {
        Self {
            backend: Some(Box::new(backend)),
        }
    }

    /// Create a disabled adapter (no credential configured)
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Create from environment variables
    ///
    /// Commentary is disabled (not an error) when `GEMINI_API_KEY` is unset.
    pub fn from_env() -> Self {
        match GeminiBackend::from_env() {
            Some(backend) => Self::new(backend),
            None => Self::disabled(),
        }
    }

    /// Whether a backend is configured
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Produce a short remark about a spending event (possibly empty)
    pub async fn comment_on(&self, event: &CommentEvent, summary: &MonthSummary) -> String {
        let backend = match &self.backend {
            Some(b) => b.as_ref(),
            None => return NO_CREDENTIAL_NOTICE.to_string(),
        };

        let prompt = match build_prompt(event, summary) {
            Ok(p) => p,
            Err(e) => {
                warn!("Failed to build commentary prompt: {}", e);
                return String::new();
            }
        };

        match backend.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(model = backend.model(), "Commentary request failed: {}", e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupTotal, Payment};
    use crate::test_utils::MockGeminiServer;
    use chrono::DateTime;

    fn summary() -> MonthSummary {
        MonthSummary {
            month: "2026-08".to_string(),
            total: 3500,
            by_category: vec![GroupTotal {
                label: "食費".to_string(),
                amount: 3500,
            }],
            by_card: vec![GroupTotal {
                label: "イオン".to_string(),
                amount: 3500,
            }],
        }
    }

    fn payment() -> Payment {
        Payment {
            id: 1,
            paid_at: DateTime::parse_from_rfc3339("2026-08-28T12:00:00+09:00").unwrap(),
            shop: "イオンザビッグ".to_string(),
            amount: 3500,
            category: "食費".to_string(),
            payer: "共同".to_string(),
            card_type: "イオン".to_string(),
            memo: None,
            is_deleted: false,
        }
    }

    #[tokio::test]
    async fn gemini_round_trip_through_mock_server() {
        let server = MockGeminiServer::start("今月は落ち着いたペースですね。").await;
        let commentary = Commentary::new(GeminiBackend::new(
            &server.url(),
            "gemini-2.5-flash",
            "test-key",
        ));

        let comment = commentary
            .comment_on(&CommentEvent::Recorded(payment()), &summary())
            .await;

        assert_eq!(comment, "今月は落ち着いたペースですね。");
    }

    #[tokio::test]
    async fn blank_model_reply_becomes_empty_string() {
        let server = MockGeminiServer::start("   ").await;
        let commentary = Commentary::new(GeminiBackend::new(
            &server.url(),
            "gemini-2.5-flash",
            "test-key",
        ));

        let comment = commentary
            .comment_on(&CommentEvent::SummaryRequest, &summary())
            .await;

        assert_eq!(comment, "");
    }

    #[tokio::test]
    async fn transport_failure_is_absorbed() {
        // Nothing listens on this port; the request fails at the transport layer
        let commentary = Commentary::new(GeminiBackend::new(
            "http://127.0.0.1:9",
            "gemini-2.5-flash",
            "test-key",
        ));

        let comment = commentary
            .comment_on(&CommentEvent::SummaryRequest, &summary())
            .await;

        assert_eq!(comment, "");
    }

    #[tokio::test]
    async fn missing_credential_short_circuits_to_notice() {
        let commentary = Commentary::disabled();
        assert!(!commentary.is_enabled());

        let comment = commentary
            .comment_on(&CommentEvent::SummaryRequest, &summary())
            .await;

        assert_eq!(comment, NO_CREDENTIAL_NOTICE);
    }

    #[tokio::test]
    async fn mock_backend_reply_is_trimmed() {
        let commentary = Commentary::new(MockBackend::replying("  節約できていますね。  "));

        let comment = commentary
            .comment_on(&CommentEvent::SummaryRequest, &summary())
            .await;

        assert_eq!(comment, "節約できていますね。");
    }
}
