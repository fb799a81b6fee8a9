//! # TitleBar Component
//!
//! Top status line: app name, backend URL and the current status message.
//!
//! Purely presentational. All data arrives as props:
//! - `backend_url`: from the resolved config (via the analyzer)
//! - `status_message`: core App state ("Waiting for grammar...", timestamps)
//! - `is_pending`: whether a request is in flight (adds a spinner)
//!
//! Formatting priority, so narrow terminals keep the most useful part:
//!
//! 1. **Pending**: `"📝 Student Writing Helper | <spinner> <status> | <url>"`
//! 2. **Status**: `"📝 Student Writing Helper | <status> | <url>"`
//! 3. **Default**: `"📝 Student Writing Helper | <url>"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const APP_TITLE: &str = "📝 Student Writing Helper";
const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct TitleBar {
    pub backend_url: String,
    pub status_message: String,
    pub is_pending: bool,
    /// Animation frame counter (only used while pending)
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(backend_url: String, status_message: String, is_pending: bool) -> Self {
        Self {
            backend_url,
            status_message,
            is_pending,
            spinner_frame: 0,
        }
    }

    fn status_text(&self) -> String {
        if self.is_pending {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            format!("{} {}", spinner, self.status_message)
        } else {
            self.status_message.clone()
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(" | ", Style::default().fg(Color::DarkGray));
        let mut spans = vec![Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Indexed(63))
                .add_modifier(Modifier::BOLD),
        )];

        let status = self.status_text();
        if !status.is_empty() {
            spans.push(separator.clone());
            spans.push(Span::raw(status));
        }

        spans.push(separator);
        spans.push(Span::styled(
            self.backend_url.clone(),
            Style::default().fg(Color::DarkGray),
        ));

        frame.render_widget(Line::from(spans), area);
    }
}
