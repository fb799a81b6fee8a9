//! Cursor position and internal scrolling for the text area.
//!
//! `CursorState` owns the cursor byte offset and scroll offset. The text is
//! owned by `BoundedTextArea` and passed in explicitly.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use super::text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, inner_width, wrap_line_count, wrap_options,
    wrapped_lines,
};

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible wrapped line (0 when content fits)
    pub scroll_offset: u16,
    /// Content width from the last render, used for vertical movement
    pub last_content_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Move to the previous (`direction < 0`) or next wrapped line, keeping
    /// the column where possible. Returns `false` at the first/last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        // Byte span of a wrapped line, including the newline that ended it
        let line_byte_span = |line: &str, offset: usize| -> usize {
            let has_newline = offset + line.len() < buffer.len()
                && buffer.as_bytes()[offset + line.len()] == b'\n';
            line.len() + usize::from(has_newline)
        };

        let mut line_start = 0;
        let mut current = lines.len() - 1;
        for (idx, line) in lines.iter().enumerate() {
            if line_start + line.len() >= self.pos {
                current = idx;
                break;
            }
            line_start += line_byte_span(line, line_start);
        }
        let column = self.pos.saturating_sub(line_start);

        let target = match direction {
            d if d < 0 && current > 0 => current - 1,
            d if d > 0 && current + 1 < lines.len() => current + 1,
            _ => return false,
        };

        let mut target_start = 0;
        for line in lines.iter().take(target) {
            target_start += line_byte_span(line, target_start);
        }

        let mut new_pos = (target_start + column.min(lines[target].len())).min(buffer.len());
        while !buffer.is_char_boundary(new_pos) {
            new_pos -= 1;
        }
        self.pos = new_pos;
        true
    }

    /// Which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 || self.pos == 0 {
            return 0;
        }
        wrap_line_count(&buffer[..self.pos], width).saturating_sub(1)
    }

    /// Keep the cursor line inside a window of `max_lines` rows.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16, max_lines: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(buffer, width);
        let max_lines = max_lines.max(1);

        if total_lines <= max_lines {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + max_lines {
            self.scroll_offset = cursor_line + 1 - max_lines;
        }
        self.scroll_offset = self.scroll_offset.min(total_lines - max_lines);
    }

    /// Screen (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_OFFSET_X.min(area.width), area.y + CONTENT_OFFSET_Y);
        }

        let before = &buffer[..self.pos];
        let lines = wrapped_lines(before, width);
        let cursor_line = lines.len().saturating_sub(1) as u16;

        // textwrap trims trailing spaces, so measure the last logical line
        // ourselves and subtract the wrapped segments before the cursor.
        let logical_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let logical = &before[logical_start..];
        let segments = textwrap::wrap(logical, wrap_options(width));
        let consumed: usize = segments
            .iter()
            .take(segments.len().saturating_sub(1))
            .map(|seg| seg.width())
            .sum();
        let column = (logical.width().saturating_sub(consumed) as u16).min(width);

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);
        (
            area.x + CONTENT_OFFSET_X + column,
            area.y + CONTENT_OFFSET_Y + visible_line,
        )
    }
}
