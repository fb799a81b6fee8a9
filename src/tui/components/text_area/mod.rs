//! # BoundedTextArea Component
//!
//! Multi-line text input with a word cap and a live word counter.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, Ctrl+J newlines)
//! - Reject any edit whose result would exceed `max_words` (silently)
//! - Grow to fit its content, from `MIN_VISIBLE_LINES` rows up to the space
//!   the parent grants; past that it scrolls internally
//! - Show `<count>/<max> words` with escalating emphasis near the cap
//!
//! ## State Management
//!
//! The buffer is internal state; every accepted edit is reported to the
//! parent as `InputEvent::Changed(new_value)` so the page can own the value.

mod cursor;
mod text_wrap;

use log::debug;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::words::count_words;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{MIN_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, wrap_line_count, wrapped_lines};
pub(crate) use text_wrap::{
    next_char_boundary, next_word_boundary, prev_char_boundary, prev_word_boundary,
};

/// Counter switches to "approaching" this many words below the cap.
const APPROACHING_MARGIN: usize = 100;

/// High-level events emitted by the form inputs
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// An edit was accepted; carries the full new value.
    Changed(String),
    /// User pressed Enter.
    Submit,
}

/// How loudly the word counter is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Neutral,
    Approaching,
    AtLimit,
}

impl Emphasis {
    pub fn for_count(count: usize, max_words: usize) -> Self {
        if count >= max_words {
            Emphasis::AtLimit
        } else if count >= max_words.saturating_sub(APPROACHING_MARGIN) {
            Emphasis::Approaching
        } else {
            Emphasis::Neutral
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Emphasis::Neutral => Style::default().fg(Color::DarkGray),
            Emphasis::Approaching => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Emphasis::AtLimit => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

/// Word-capped, auto-growing text input.
///
/// # Props
///
/// - `focused`: whether keyboard input is routed here (set by the parent)
/// - `max_visible_lines`: growth limit granted by the parent layout
pub struct BoundedTextArea {
    buffer: String,
    title: String,
    hint: String,
    placeholder: String,
    max_words: usize,
    pub focused: bool,
    pub max_visible_lines: u16,
    cursor: CursorState,
}

impl BoundedTextArea {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>, max_words: usize) -> Self {
        Self {
            buffer: String::new(),
            title: title.into(),
            hint: String::new(),
            placeholder: placeholder.into(),
            max_words,
            focused: false,
            max_visible_lines: u16::MAX,
            cursor: CursorState::new(),
        }
    }

    /// Key hint drawn in the bottom-left corner of the border.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Limit growth so the whole widget, borders included, fits in `total_rows`.
    pub fn set_height_budget(&mut self, total_rows: u16) {
        self.max_visible_lines = total_rows.saturating_sub(VERTICAL_OVERHEAD).max(1);
    }

    pub fn word_count(&self) -> usize {
        count_words(&self.buffer)
    }

    pub fn emphasis(&self) -> Emphasis {
        Emphasis::for_count(self.word_count(), self.max_words)
    }

    pub fn counter_text(&self) -> String {
        format!("{}/{} words", self.word_count(), self.max_words)
    }

    /// Rows needed for the current value: starts at `MIN_VISIBLE_LINES` and
    /// grows with the wrapped content, up to `max_visible_lines`.
    ///
    /// Derived from the buffer on every call, so any value change is
    /// reflected on the next frame.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let content_lines = wrap_line_count(&self.buffer, inner_width(content_width));
        let ceiling = self.max_visible_lines.max(1);
        let rows = content_lines.max(MIN_VISIBLE_LINES).min(ceiling);
        rows + VERTICAL_OVERHEAD
    }

    /// Apply `candidate` only if it stays within the word cap.
    fn try_commit(&mut self, candidate: String, new_pos: usize) -> Option<InputEvent> {
        let words = count_words(&candidate);
        if words > self.max_words {
            debug!(
                "Rejected edit in '{}': {} words exceeds cap of {}",
                self.title, words, self.max_words
            );
            return None;
        }

        self.buffer = candidate;
        self.cursor.pos = new_pos;
        Some(InputEvent::Changed(self.buffer.clone()))
    }

    fn insert(&mut self, text: &str) -> Option<InputEvent> {
        let mut candidate = self.buffer.clone();
        candidate.insert_str(self.cursor.pos, text);
        self.try_commit(candidate, self.cursor.pos + text.len())
    }

    fn visible_lines(&self, content_width: u16, rows: u16) -> Vec<String> {
        let lines = wrapped_lines(&self.buffer, inner_width(content_width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + rows.max(1) as usize).min(lines.len());
        lines[start..end].to_vec()
    }
}

impl Component for BoundedTextArea {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        let rows = area
            .height
            .saturating_sub(VERTICAL_OVERHEAD)
            .min(self.max_visible_lines);
        self.cursor.update_scroll_offset(&self.buffer, area.width, rows);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let emphasis = self.emphasis();
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_bottom(
                Line::from(Span::styled(format!(" {} ", self.counter_text()), emphasis.style()))
                    .right_aligned(),
            );
        if !self.hint.is_empty() {
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {} ", self.hint),
                    Style::default().fg(Color::DarkGray),
                ))
                .left_aligned(),
            );
        }

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            let lines: Vec<Line> = self.visible_lines(area.width, rows).into_iter().map(Line::from).collect();
            Paragraph::new(lines)
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for BoundedTextArea {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let pos = self.cursor.pos;
        match event {
            TuiEvent::InputChar(c) => {
                let mut encoded = [0u8; 4];
                self.insert(c.encode_utf8(&mut encoded))
            }
            TuiEvent::Paste(text) => {
                // Terminals send CR for line breaks inside pastes
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert(&text)
            }
            TuiEvent::Backspace if pos > 0 => {
                let prev = prev_char_boundary(&self.buffer, pos);
                let mut candidate = self.buffer.clone();
                candidate.drain(prev..pos);
                self.try_commit(candidate, prev)
            }
            TuiEvent::Delete if pos < self.buffer.len() => {
                let next = next_char_boundary(&self.buffer, pos);
                let mut candidate = self.buffer.clone();
                candidate.drain(pos..next);
                self.try_commit(candidate, pos)
            }
            TuiEvent::ClearInput if !self.buffer.is_empty() => {
                self.cursor.scroll_offset = 0;
                self.try_commit(String::new(), 0)
            }
            TuiEvent::CursorLeft if pos > 0 => {
                self.cursor.pos = prev_char_boundary(&self.buffer, pos);
                None
            }
            TuiEvent::CursorRight if pos < self.buffer.len() => {
                self.cursor.pos = next_char_boundary(&self.buffer, pos);
                None
            }
            TuiEvent::WordLeft => {
                self.cursor.pos = prev_word_boundary(&self.buffer, pos);
                None
            }
            TuiEvent::WordRight => {
                self.cursor.pos = next_word_boundary(&self.buffer, pos);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = self.buffer[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.buffer[pos..]
                    .find('\n')
                    .map(|i| pos + i)
                    .unwrap_or(self.buffer.len());
                None
            }
            TuiEvent::CursorUp => {
                let width = self.cursor.last_content_width;
                self.cursor.move_vertically(&self.buffer, -1, width);
                None
            }
            TuiEvent::CursorDown => {
                let width = self.cursor.last_content_width;
                self.cursor.move_vertically(&self.buffer, 1, width);
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
