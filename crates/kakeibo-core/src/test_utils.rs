//! Test utilities for kakeibo-core
//!
//! Provides a mock Gemini server so the commentary adapter can be exercised
//! end to end without the real API.

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Mock Gemini server for testing
///
/// Answers every generateContent request with a fixed reply text.
pub struct MockGeminiServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockGeminiServer {
    /// Start the mock server on an available port
    pub async fn start(reply: &str) -> Self {
        let app = Router::new()
            .route("/v1beta/models/*model", post(handle_generate_content))
            .with_state(reply.to_string());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockGeminiServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// generateContent endpoint: echo the configured reply in Gemini's shape
async fn handle_generate_content(
    State(reply): State<String>,
    Json(request): Json<Value>,
) -> Json<Value> {
    // Sanity-check the request carries a prompt in the expected shape
    let prompt = request["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    assert!(!prompt.is_empty(), "generateContent request had no prompt");

    Json(json!({
        "candidates": [
            {
                "content": {
                    "parts": [{ "text": reply }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }
        ]
    }))
}
