//! Mock backend for testing
//!
//! Returns a canned reply or a forced failure, so adapter behavior can be
//! tested without a network.

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::CommentaryBackend;

/// Mock commentary backend for testing
#[derive(Clone)]
pub struct MockBackend {
    reply: String,
    fail: bool,
}

impl MockBackend {
    /// Backend that always replies with the given text
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail: false,
        }
    }

    /// Backend whose every call fails
    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CommentaryBackend for MockBackend {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        if self.fail {
            return Err(Error::InvalidData("mock backend failure".into()));
        }
        Ok(self.reply.clone())
    }

    fn model(&self) -> &str {
        "mock"
    }
}
