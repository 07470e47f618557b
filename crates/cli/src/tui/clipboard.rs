// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! System clipboard through arboard

use async_trait::async_trait;
use parking_lot::Mutex;
use vigil_engine::{ClipboardAdapter, ClipboardError};

/// On X11 the clipboard owner must stay alive to answer paste requests, so
/// one instance is kept for the life of the process.
static SYSTEM_CLIPBOARD: Mutex<Option<arboard::Clipboard>> = Mutex::new(None);

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardAdapter for SystemClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || set_text(&text))
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
    }
}

fn set_text(text: &str) -> Result<(), ClipboardError> {
    let mut guard = SYSTEM_CLIPBOARD.lock();
    if guard.is_none() {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        *guard = Some(clipboard);
    }
    let Some(clipboard) = guard.as_mut() else {
        return Err(ClipboardError::Unavailable("clipboard not initialized".to_string()));
    };
    match clipboard.set_text(text) {
        Ok(()) => {
            tracing::debug!(bytes = text.len(), "copied to clipboard");
            Ok(())
        }
        Err(e) => {
            // Start over with a fresh handle next time
            *guard = None;
            Err(ClipboardError::WriteFailed(e.to_string()))
        }
    }
}
