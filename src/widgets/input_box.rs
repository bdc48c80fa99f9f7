use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_PRIMARY};

/// Single-line text input for the feedback overlay's notes field.
///
/// Features:
/// - Basic editing (insert, delete, backspace)
/// - Cursor movement with horizontal scrolling when text exceeds the width
/// - Placeholder text while empty
///
/// The content is capture-only: the overlay discards it on close, so there is
/// no submit path out of this widget.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// The text content
    content: String,
    /// Cursor position as a character index
    cursor: usize,
    /// First visible character index when the text overflows
    scroll_offset: usize,
}

impl InputBox {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.content.len())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete the character under the cursor (Delete key).
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete the character before the cursor (Backspace key).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move the cursor one position left.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one position right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Clear all content and reset the cursor.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Whether the input holds no text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Render as a bordered one-line field with optional placeholder.
    pub fn render(&self, area: Rect, buf: &mut Buffer, title: &str, placeholder: &str, focused: bool) {
        let border_color = if focused { COLOR_PRIMARY } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        block.render(area, buf);

        let inner_width = area.width.saturating_sub(2) as usize;
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: inner_width as u16,
            height: if area.height > 2 { 1 } else { 0 },
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.content.is_empty() {
            let hint: String = placeholder.chars().take(inner_width).collect();
            buf.set_string(inner.x, inner.y, hint, Style::default().fg(COLOR_DIM));
        } else {
            // Keep the cursor inside the visible window.
            let mut scroll = self.scroll_offset;
            if self.cursor < scroll {
                scroll = self.cursor;
            }
            if self.cursor >= scroll + inner_width {
                scroll = self.cursor - inner_width + 1;
            }

            let visible: String = self.content.chars().skip(scroll).take(inner_width).collect();
            buf.set_string(inner.x, inner.y, visible, Style::default().fg(COLOR_ACCENT));

            if focused {
                let cursor_x = (self.cursor - scroll) as u16;
                if (cursor_x as usize) < inner_width {
                    let under = self.content.chars().nth(self.cursor).unwrap_or(' ');
                    buf.set_string(
                        inner.x + cursor_x,
                        inner.y,
                        under.to_string(),
                        Style::default()
                            .fg(COLOR_PRIMARY)
                            .add_modifier(Modifier::REVERSED),
                    );
                }
            }
        }
    }
}
