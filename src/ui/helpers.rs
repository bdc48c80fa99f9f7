//! Shared rendering helpers.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_ACCENT, COLOR_ALERT, COLOR_DIM, COLOR_SUCCESS};
use crate::models::FeedbackTone;

/// Center a fixed-size rectangle inside `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Truncate a string to `max_len` characters, appending "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

/// Pad a label with spaces on both sides until it spans `width` columns.
///
/// Display-width aware so glyph labels line up with ASCII ones.
pub fn pad_center(label: &str, width: usize) -> String {
    let label_width = label.width();
    if label_width >= width {
        return label.to_string();
    }
    let total = width - label_width;
    let left = total / 2;
    let right = total - left;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}

/// Color for a feedback label, from its tone bucket.
pub fn tone_color(tone: FeedbackTone) -> Color {
    match tone {
        FeedbackTone::Alert => COLOR_ALERT,
        FeedbackTone::Positive => COLOR_SUCCESS,
        FeedbackTone::Neutral => COLOR_DIM,
    }
}

/// Build the dim keybind-hint line shown at the bottom of each screen.
pub fn keybind_hints(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 3);
    for (i, (key, action)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(spans)
}
