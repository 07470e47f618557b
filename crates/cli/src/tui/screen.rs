// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::keys::Scroll;
use super::render::Frame;
use std::io::Write;
use vigil_core::ViewState;

/// Last snapshot plus the presenter-local pager position
pub struct Screen {
    hostname: String,
    view: Option<ViewState>,
    scroll: usize,
    page: usize,
    max_scroll: usize,
}

impl Screen {
    pub fn new(hostname: String) -> Self {
        Self { hostname, view: None, scroll: 0, page: 0, max_scroll: 0 }
    }

    pub fn present(&mut self, view: &ViewState) {
        self.view = Some(view.clone());
        self.redraw();
    }

    pub fn scroll(&mut self, scroll: Scroll) {
        let offset = scroll.apply(self.scroll, self.page, self.max_scroll);
        if offset != self.scroll {
            self.scroll = offset;
            self.redraw();
        }
    }

    fn redraw(&mut self) {
        let Some(view) = &self.view else {
            return;
        };
        let label = view.title.as_deref().unwrap_or(&self.hostname);
        let frame = Frame::build(view, label, self.scroll);
        self.scroll = frame.scroll;
        self.page = frame.page();
        self.max_scroll = frame.max_scroll;

        let mut out = std::io::stdout().lock();
        if let Err(e) = frame.draw(&mut out).and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "redraw failed");
        }
    }
}
