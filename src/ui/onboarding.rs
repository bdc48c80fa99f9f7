//! Onboarding carousel rendering.
//!
//! One slide at a time with step dots underneath. The continue action on the
//! last slide is relabeled, matching the advance-or-finish transition.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::helpers::{centered_rect, keybind_hints};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PRIMARY};
use crate::app::App;
use crate::content;

pub fn render_onboarding(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let slides = content::onboarding_slides();
    let slide = &slides[app.onboarding_step];

    let card = centered_rect(56, 16, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(block.clone(), card);

    let inner = block.inner(card);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Icon
            Constraint::Length(2), // Title
            Constraint::Length(4), // Description
            Constraint::Length(2), // Step dots
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let icon = Paragraph::new(Line::from(Span::styled(
        slide.icon,
        Style::default().fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(icon, chunks[0]);

    let title = Paragraph::new(Line::from(Span::styled(
        slide.title.clone(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let description = Paragraph::new(Line::from(Span::styled(
        slide.description.clone(),
        Style::default().fg(COLOR_ACCENT),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[2]);

    // One dot per slide, the current one filled.
    let dots: Vec<Span> = (0..slides.len())
        .map(|i| {
            if i == app.onboarding_step {
                Span::styled("● ", Style::default().fg(COLOR_PRIMARY))
            } else {
                Span::styled("○ ", Style::default().fg(COLOR_DIM))
            }
        })
        .collect();
    let dots = Paragraph::new(Line::from(dots)).alignment(Alignment::Center);
    frame.render_widget(dots, chunks[3]);

    let continue_label = if app.onboarding_step < slides.len() - 1 {
        "continue"
    } else {
        "let's get started"
    };
    let hints = Paragraph::new(keybind_hints(&[("Enter", continue_label), ("q", "quit")]))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[5]);
}
