//! # WordField Component
//!
//! Single-line input for the word to define. Uncapped, but newlines are
//! never accepted: Enter submits and pasted line breaks become spaces.
//! Scrolls horizontally so the cursor stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_area::{
    InputEvent, next_char_boundary, next_word_boundary, prev_char_boundary, prev_word_boundary,
};
use crate::tui::event::TuiEvent;

/// Border (2) + horizontal padding (2)
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Fixed height: one text row between two borders
pub const WORD_FIELD_HEIGHT: u16 = 3;

pub struct WordField {
    buffer: String,
    pos: usize,
    title: String,
    hint: String,
    placeholder: String,
    pub focused: bool,
}

impl WordField {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            pos: 0,
            title: title.into(),
            hint: String::new(),
            placeholder: placeholder.into(),
            focused: false,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::Changed(self.buffer.clone()))
    }

    /// Slice of the buffer that fits in `width` columns with the cursor
    /// visible, and the cursor column within that slice.
    fn visible_window(&self, width: usize) -> (&str, u16) {
        if width == 0 {
            return ("", 0);
        }

        let before_cursor = &self.buffer[..self.pos];
        let cursor_col = before_cursor.width();
        let col_from = |start: usize| cursor_col.saturating_sub(before_cursor[..start].width());

        // Earliest start that leaves the cursor inside the window
        let start = before_cursor
            .char_indices()
            .map(|(i, _)| i)
            .find(|&i| col_from(i) < width)
            .unwrap_or(self.pos);

        (&self.buffer[start..], col_from(start) as u16)
    }
}

impl Component for WordField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        if !self.hint.is_empty() {
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {} ", self.hint),
                    Style::default().fg(Color::DarkGray),
                ))
                .left_aligned(),
            );
        }

        let width = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let (visible, cursor_col) = self.visible_window(width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Paragraph::new(visible)
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            frame.set_cursor_position((area.x + 2 + cursor_col, area.y + 1));
        }
    }
}

impl EventHandler for WordField {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar('\n') => None,
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                let text: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.buffer.insert_str(self.pos, &text);
                self.pos += text.len();
                self.changed()
            }
            TuiEvent::Backspace if self.pos > 0 => {
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                self.changed()
            }
            TuiEvent::Delete if self.pos < self.buffer.len() => {
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                self.changed()
            }
            TuiEvent::ClearInput if !self.buffer.is_empty() => {
                self.buffer.clear();
                self.pos = 0;
                self.changed()
            }
            TuiEvent::CursorLeft if self.pos > 0 => {
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::CursorRight if self.pos < self.buffer.len() => {
                self.pos = next_char_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::WordLeft => {
                self.pos = prev_word_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::WordRight => {
                self.pos = next_word_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::CursorHome => {
                self.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_and_backspace() {
        let mut field = WordField::new("Define a Word", "Enter a word...");
        for c in "eph".chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
        assert_eq!(
            field.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::Changed("ep".to_string()))
        );
    }

    #[test]
    fn test_newlines_are_never_inserted() {
        let mut field = WordField::new("t", "p");
        assert_eq!(field.handle_event(&TuiEvent::InputChar('\n')), None);
        field.handle_event(&TuiEvent::Paste("fleeting\r\nthing".to_string()));
        assert_eq!(field.value(), "fleeting  thing");
    }

    #[test]
    fn test_home_end_and_insert() {
        let mut field = WordField::new("t", "p");
        field.handle_event(&TuiEvent::Paste("phemeral".to_string()));
        field.handle_event(&TuiEvent::CursorHome);
        field.handle_event(&TuiEvent::InputChar('e'));
        assert_eq!(field.value(), "ephemeral");
        field.handle_event(&TuiEvent::CursorEnd);
        field.handle_event(&TuiEvent::Backspace);
        assert_eq!(field.value(), "ephemera");
    }

    #[test]
    fn test_window_scrolls_to_keep_cursor_visible() {
        let mut field = WordField::new("t", "p");
        field.handle_event(&TuiEvent::Paste("abcdefghij".to_string()));

        let (visible, col) = field.visible_window(4);
        assert_eq!(visible, "hij");
        assert_eq!(col, 3);

        field.handle_event(&TuiEvent::CursorHome);
        let (visible, col) = field.visible_window(4);
        assert_eq!(visible, "abcdefghij");
        assert_eq!(col, 0);
    }

    #[test]
    fn test_window_handles_joined_emoji() {
        let mut field = WordField::new("t", "p");
        field.handle_event(&TuiEvent::Paste("x👨‍👩‍👧x".to_string()));

        for width in 1..=6 {
            let (visible, col) = field.visible_window(width);
            assert!((col as usize) < width, "cursor column {col} outside width {width}");
            assert!(field.value().ends_with(visible));
        }
    }

    #[test]
    fn test_render_placeholder() {
        let backend = TestBackend::new(40, WORD_FIELD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = WordField::new("3) Define a Word", "Enter a word...");
        terminal.draw(|f| field.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("3) Define a Word"));
        assert!(text.contains("Enter a word..."));
    }
}
