// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use thiserror::Error;

/// Errors from clipboard operations
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Adapter for writing to the system clipboard
#[async_trait]
pub trait ClipboardAdapter: Clone + Send + Sync + 'static {
    /// Replace the clipboard contents with `text`
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{ClipboardAdapter, ClipboardError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeClipboardState {
        copies: Vec<String>,
        fail: bool,
    }

    /// Fake clipboard for testing
    #[derive(Clone, Default)]
    pub struct FakeClipboard {
        inner: Arc<Mutex<FakeClipboardState>>,
    }

    impl FakeClipboard {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every following copy fail
        pub fn set_failing(&self, fail: bool) {
            self.inner.lock().fail = fail;
        }

        /// Texts copied so far, oldest first
        pub fn copies(&self) -> Vec<String> {
            self.inner.lock().copies.clone()
        }
    }

    #[async_trait]
    impl ClipboardAdapter for FakeClipboard {
        async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
            let mut inner = self.inner.lock();
            if inner.fail {
                return Err(ClipboardError::Unavailable("fake clipboard set to fail".to_string()));
            }
            inner.copies.push(text.to_string());
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeClipboard;
