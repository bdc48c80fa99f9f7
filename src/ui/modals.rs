//! Overlay dialogs.
//!
//! Two independent overlays layered above whichever screen is active: the
//! feedback capture dialog and the therapy detail dialog. Both render last in
//! the frame, over a cleared region, so they always sit on top. Neither
//! persists anything; their primary action just closes them.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::{centered_rect, keybind_hints};
use super::theme::{
    COLOR_ACCENT, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER, COLOR_PRIMARY, COLOR_SELECTED,
};
use crate::app::{App, DetailTab, FeedbackFocus};
use crate::content;

/// Render whichever overlays are open, feedback above detail.
pub fn render_overlays(frame: &mut Frame, app: &App) {
    if app.detail_modal_open {
        render_detail_modal(frame, app);
    }
    if app.feedback_modal_open {
        render_feedback_modal(frame, app);
    }
}

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_PRIMARY))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
}

// ============================================================================
// Feedback Capture
// ============================================================================

fn render_feedback_modal(frame: &mut Frame, app: &App) {
    let area = centered_rect(54, 18, frame.area());
    frame.render_widget(Clear, area);

    let block = dialog_block("How are you feeling after your session?");
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                           // Subtitle
            Constraint::Length(2),                           // Mood row
            Constraint::Length(content::SYMPTOMS.len() as u16 + 1), // Symptoms
            Constraint::Length(3),                           // Notes
            Constraint::Min(0),                              // Spacer
            Constraint::Length(1),                           // Hints
        ])
        .split(inner);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Your feedback helps us provide better care",
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[0]);

    render_mood_row(frame, chunks[1], app);
    render_symptom_list(frame, chunks[2], app);

    app.notes.render(
        chunks[3],
        frame.buffer_mut(),
        " Additional Notes ",
        "Anything else you'd like to share?",
        app.feedback_focus == FeedbackFocus::Notes,
    );

    let hints = keybind_hints(&[
        ("Tab", "next section"),
        ("Space", "toggle"),
        ("Enter", "submit"),
        ("Esc", "close"),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[5]);
}

fn render_mood_row(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.feedback_focus == FeedbackFocus::Mood;
    let mut spans = vec![Span::styled(
        if focused { "Mood ▸ " } else { "Mood   " },
        Style::default().fg(if focused { COLOR_PRIMARY } else { COLOR_DIM }),
    )];
    for (i, mood) in content::MOODS.iter().enumerate() {
        let style = if i == app.mood_index {
            Style::default()
                .fg(COLOR_ACCENT)
                .bg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!(" {} ", mood), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_symptom_list(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.feedback_focus == FeedbackFocus::Symptoms;
    let mut lines = vec![Line::from(Span::styled(
        "Symptoms (check all that apply)",
        Style::default().fg(if focused { COLOR_PRIMARY } else { COLOR_DIM }),
    ))];
    for (i, symptom) in content::SYMPTOMS.iter().enumerate() {
        let checkbox = if app.symptoms_checked[i] { "☑" } else { "☐" };
        let cursor = if focused && i == app.symptom_index { "▸" } else { " " };
        let style = if focused && i == app.symptom_index {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", cursor), Style::default().fg(COLOR_PRIMARY)),
            Span::styled(format!("{} ", checkbox), Style::default().fg(COLOR_PRIMARY)),
            Span::styled(*symptom, style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// Therapy Detail
// ============================================================================

fn render_detail_modal(frame: &mut Frame, app: &App) {
    // The overlay only opens with a selection; render nothing if the state
    // was constructed inconsistently.
    let Some(therapy) = app.selected_therapy.as_ref() else {
        return;
    };

    let area = centered_rect(58, 14, frame.area());
    frame.render_widget(Clear, area);

    let block = dialog_block(&therapy.name);
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Tab row
            Constraint::Min(4),    // Tab body
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Therapy Details & Options",
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(subtitle, chunks[0]);

    let mut tab_spans = Vec::with_capacity(DetailTab::ALL.len() * 2);
    for tab in DetailTab::ALL {
        let style = if tab == app.detail_tab {
            Style::default()
                .fg(COLOR_ACCENT)
                .bg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        tab_spans.push(Span::styled(format!(" {} ", tab.label()), style));
        tab_spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tab_spans)), chunks[1]);

    let body: Vec<Line> = match app.detail_tab {
        DetailTab::Description => vec![
            Line::from(Span::styled(
                therapy.description.clone(),
                Style::default().fg(COLOR_ACCENT),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Time: ", Style::default().fg(COLOR_DIM)),
                Span::styled(therapy.time.clone(), Style::default().fg(COLOR_ACCENT)),
            ]),
            Line::from(vec![
                Span::styled("Date: ", Style::default().fg(COLOR_DIM)),
                Span::styled(therapy.date.clone(), Style::default().fg(COLOR_ACCENT)),
            ]),
        ],
        DetailTab::PreCare => bullet_lines(content::PRE_CARE),
        DetailTab::PostCare => bullet_lines(content::POST_CARE),
    };
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), chunks[2]);

    let hints = keybind_hints(&[
        ("←/→", "switch tab"),
        ("r", "request reschedule"),
        ("Esc", "close"),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[3]);
}

fn bullet_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(COLOR_PRIMARY)),
                Span::styled(item.to_string(), Style::default().fg(COLOR_ACCENT)),
            ])
        })
        .collect()
}
