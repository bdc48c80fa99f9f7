//! Patient mode rendering.
//!
//! Shell with a bottom tab bar, plus the dashboard, schedule, and profile
//! screens. The `Feedback` tab has no screen of its own: the dispatch sends
//! it through the fallback arm to the dashboard, and the feedback overlay is
//! reached from the dashboard quick action instead.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::helpers::{keybind_hints, pad_center};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER, COLOR_PRIMARY,
    COLOR_PROGRESS, COLOR_PROGRESS_BG, COLOR_SELECTED, COLOR_SUCCESS,
};
use crate::app::{App, PatientTab};
use crate::content;
use crate::models::TherapyPhase;

// ============================================================================
// Shell
// ============================================================================

/// Render the patient shell: active screen, bottom tab bar, keybind hints.
pub fn render_patient(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Active screen
            Constraint::Length(3), // Bottom tab bar
            Constraint::Length(1), // Hints
        ])
        .split(area);

    // Closed-enum dispatch with an explicit fallback: Feedback has no screen
    // and renders the dashboard, as the product does.
    match app.patient_tab {
        PatientTab::Schedule => render_schedule(frame, chunks[0], app),
        PatientTab::Profile => render_profile(frame, chunks[0]),
        PatientTab::Dashboard | PatientTab::Feedback => render_dashboard(frame, chunks[0]),
    }

    render_tab_bar(frame, chunks[1], app.patient_tab);

    let hints = match app.patient_tab {
        PatientTab::Schedule => keybind_hints(&[
            ("↑/↓", "select"),
            ("Enter", "details"),
            ("Tab", "next tab"),
            ("q", "quit"),
        ]),
        _ => keybind_hints(&[
            ("f", "log feedback"),
            ("s", "schedule"),
            ("Tab", "next tab"),
            ("q", "quit"),
        ]),
    };
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        chunks[2],
    );
}

fn render_tab_bar(frame: &mut Frame, area: Rect, active: PatientTab) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let constraints: Vec<Constraint> = PatientTab::ALL
        .iter()
        .map(|_| Constraint::Ratio(1, PatientTab::ALL.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (i, tab) in PatientTab::ALL.iter().enumerate() {
        let label = format!("{} {}", i + 1, tab.label());
        let style = if *tab == active {
            Style::default()
                .fg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let cell = Paragraph::new(Line::from(Span::styled(
            pad_center(&label, cells[i].width as usize),
            style,
        )));
        frame.render_widget(cell, cells[i]);
    }
}

// ============================================================================
// Dashboard
// ============================================================================

fn render_dashboard(frame: &mut Frame, area: Rect) {
    let patient = content::current_patient();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Greeting
            Constraint::Length(5), // Today's focus card
            Constraint::Length(5), // Journey progress
            Constraint::Min(4),    // Recent guidance
        ])
        .split(area);

    let greeting = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Hello, {}!", patient.name),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ❁", Style::default().fg(COLOR_PRIMARY)),
    ]));
    frame.render_widget(greeting, chunks[0]);

    render_focus_card(frame, chunks[1], patient);
    render_journey_card(frame, chunks[2], patient);
    render_guidance_card(frame, chunks[3]);
}

fn render_focus_card(frame: &mut Frame, area: Rect, patient: &crate::models::CurrentPatient) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_FOCUS))
        .title(Span::styled(
            " Today's Focus ",
            Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let lines = vec![
        Line::from(Span::styled(
            patient.next_therapy.clone(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("◷ ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("at {}", patient.next_time),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_journey_card(frame: &mut Frame, area: Rect, patient: &crate::models::CurrentPatient) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(
            " Your {}-Day Panchakarma Journey ",
            patient.total_days
        ));
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    // The gauge contract wants [0, 1]; the raw fraction is already in range
    // for all static records.
    let gauge = Gauge::default()
        .ratio(patient.progress().clamp(0.0, 1.0))
        .label(format!(
            "Day {} of {}",
            patient.current_day, patient.total_days
        ))
        .gauge_style(Style::default().fg(COLOR_PROGRESS).bg(COLOR_PROGRESS_BG));
    frame.render_widget(gauge, rows[0]);

    let caption = Paragraph::new(Line::from(Span::styled(
        "You're doing great! Keep following your personalized treatment plan.",
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(caption, rows[1]);
}

fn render_guidance_card(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Recent Guidance ");
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let lines: Vec<Line> = content::RECENT_GUIDANCE
        .iter()
        .map(|guidance| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(COLOR_PRIMARY)),
                Span::styled(*guidance, Style::default().fg(COLOR_ACCENT)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

// ============================================================================
// Schedule
// ============================================================================

fn render_schedule(frame: &mut Frame, area: Rect, app: &App) {
    let therapies = content::therapies();

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(therapies.iter().map(|_| Constraint::Length(4)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Your Schedule",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    for (i, therapy) in therapies.iter().enumerate() {
        let selected = i == app.schedule_index;
        let border_color = if selected {
            COLOR_SELECTED
        } else if therapy.phase == TherapyPhase::Today {
            COLOR_PRIMARY
        } else {
            COLOR_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let card_area = chunks[i + 1];
        frame.render_widget(block.clone(), card_area);
        let inner = block.inner(card_area);

        let (status_icon, status_color) = if therapy.completed {
            ("✔", COLOR_SUCCESS)
        } else {
            ("◷", COLOR_DIM)
        };

        // Completed sessions render dimmed, mirroring the faded card style.
        let name_style = if therapy.completed {
            Style::default().fg(COLOR_DIM)
        } else {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", status_icon), Style::default().fg(status_color)),
                Span::styled(therapy.name.clone(), name_style),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", therapy.phase.label()),
                    Style::default().fg(if therapy.phase == TherapyPhase::Today {
                        COLOR_PRIMARY
                    } else {
                        COLOR_DIM
                    }),
                ),
            ]),
            Line::from(Span::styled(
                format!("  {} • {} — {}", therapy.time, therapy.date, therapy.description),
                Style::default().fg(COLOR_DIM),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Bar glyphs for the 1-5 feeling scale.
const TREND_GLYPHS: [&str; 5] = ["▁", "▂", "▄", "▆", "█"];

fn render_profile(frame: &mut Frame, area: Rect) {
    let patient = content::current_patient();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(4), // Identity card
            Constraint::Length(5), // Progress trend
            Constraint::Min(4),    // Milestones
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Your Profile",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    let identity = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(identity.clone(), chunks[1]);
    let inner = identity.inner(chunks[1]);
    let identity_lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", crate::models::initials(&patient.name)),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .bg(COLOR_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                patient.name.clone(),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "     Patient ID: #12345",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(identity_lines), inner);

    render_trend_card(frame, chunks[2]);
    render_milestones_card(frame, chunks[3]);
}

fn render_trend_card(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" My Progress ");
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let bars: Vec<Span> = content::FEELING_TREND
        .iter()
        .map(|value| {
            let glyph = TREND_GLYPHS[(*value as usize - 1).min(TREND_GLYPHS.len() - 1)];
            Span::styled(format!("{} ", glyph), Style::default().fg(COLOR_PRIMARY))
        })
        .collect();

    let lines = vec![
        Line::from(bars),
        Line::from(Span::styled(
            "Overall feeling trend (1-5 scale)",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_milestones_card(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Milestones Unlocked ");
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let lines = vec![
        Line::from(vec![
            Span::styled("✔ ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(
                "7 Days Complete!",
                Style::default().fg(COLOR_SUCCESS).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Great progress", Style::default().fg(COLOR_DIM)),
        ]),
        Line::from(vec![
            Span::styled("✚ ", Style::default().fg(COLOR_PRIMARY)),
            Span::styled(
                "First Feedback!",
                Style::default().fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Communication started", Style::default().fg(COLOR_DIM)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
