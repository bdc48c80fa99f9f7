//! Practitioner mode rendering.
//!
//! Sidebar navigation plus the dashboard, patient management, and AI
//! assistant screens. `Schedule` and `Analytics` have no screens of their own
//! and fall back to the dashboard, as the product does.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::helpers::{keybind_hints, tone_color, truncate_string};
use super::theme::{
    COLOR_ACCENT, COLOR_ALERT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PRIMARY,
    COLOR_PROGRESS, COLOR_PROGRESS_BG, COLOR_SELECTED, COLOR_SUCCESS,
};
use crate::app::{App, PractitionerTab};
use crate::content;

// ============================================================================
// Shell
// ============================================================================

/// Render the practitioner shell: sidebar, active screen, keybind hints.
pub fn render_practitioner(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(30)])
        .split(rows[0]);

    render_sidebar(frame, columns[0], app.practitioner_tab);

    // Closed-enum dispatch with an explicit fallback arm for the tabs that
    // have no dedicated screen.
    match app.practitioner_tab {
        PractitionerTab::Patients => render_patients(frame, columns[1]),
        PractitionerTab::AiAssistant => render_ai_assistant(frame, columns[1]),
        PractitionerTab::Dashboard | PractitionerTab::Schedule | PractitionerTab::Analytics => {
            render_dashboard(frame, columns[1])
        }
    }

    let hints = keybind_hints(&[("1-5", "switch tab"), ("Tab", "next tab"), ("q", "quit")]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), rows[1]);
}

fn render_sidebar(frame: &mut Frame, area: Rect, active: PractitionerTab) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Ayur-Connect ");
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let mut lines = Vec::with_capacity(PractitionerTab::ALL.len() + 4);
    lines.push(Line::default());
    for (i, tab) in PractitionerTab::ALL.iter().enumerate() {
        let label = format!(" {} {}", i + 1, tab.label());
        let line = if *tab == active {
            Line::from(Span::styled(
                label,
                Style::default()
                    .fg(COLOR_ACCENT)
                    .bg(COLOR_SELECTED)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(label, Style::default().fg(COLOR_DIM)))
        };
        lines.push(line);
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" {}", content::PRACTITIONER_NAME),
        Style::default().fg(COLOR_ACCENT),
    )));
    lines.push(Line::from(Span::styled(
        format!(" {}", content::PRACTITIONER_TITLE),
        Style::default().fg(COLOR_DIM),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Dashboard
// ============================================================================

fn render_dashboard(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(4), // Urgent alerts
            Constraint::Min(8),    // Appointments + KPI columns
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} Dashboard", content::CLINIC_NAME),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  —  {}", content::PRACTITIONER_NAME),
            Style::default().fg(COLOR_DIM),
        ),
    ]));
    frame.render_widget(title, chunks[0]);

    render_urgent_alerts(frame, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    render_appointments(frame, columns[0]);
    render_kpis(frame, columns[1]);
}

fn render_urgent_alerts(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ALERT))
        .title(Span::styled(
            " Immediate Attention: Patient Feedback ",
            Style::default().fg(COLOR_ALERT).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    // Substring filter on the feedback label, exactly as asserted in the data.
    let lines: Vec<Line> = content::urgent_patients()
        .iter()
        .map(|patient| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", patient.initials()),
                    Style::default().fg(COLOR_ALERT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    patient.name.clone(),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  Reported: {}", patient.recent_feedback),
                    Style::default().fg(COLOR_ALERT),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_appointments(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Today's Appointments ");
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let mut lines = Vec::with_capacity(6);
    for therapy in content::therapies().iter().take(3) {
        let (badge, badge_color) = if therapy.completed {
            ("Completed", COLOR_SUCCESS)
        } else {
            ("Scheduled", COLOR_PRIMARY)
        };
        lines.push(Line::from(Span::styled(
            truncate_string(&therapy.name, inner.width.saturating_sub(1) as usize),
            Style::default().fg(COLOR_ACCENT),
        )));
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", therapy.time), Style::default().fg(COLOR_DIM)),
            Span::styled(format!("[{}]", badge), Style::default().fg(badge_color)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_kpis(frame: &mut Frame, area: Rect) {
    let stats = content::clinic_stats();
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_kpi_card(
        frame,
        cards[0],
        &stats.patients_today.to_string(),
        "Total Patients Today",
    );
    render_kpi_card(
        frame,
        cards[1],
        &stats.therapies_completed.to_string(),
        "Therapies Completed",
    );
    render_kpi_card(frame, cards[2], &stats.occupancy, "Clinic Resource Occupancy");
}

fn render_kpi_card(frame: &mut Frame, area: Rect, value: &str, label: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let line = Line::from(vec![
        Span::styled(
            format!("{}  ", value),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(label.to_string(), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

// ============================================================================
// Patient Management
// ============================================================================

fn render_patients(frame: &mut Frame, area: Rect) {
    let patients = content::patients();

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(patients.iter().map(|_| Constraint::Length(4)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Patient Management",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    for (i, patient) in patients.iter().enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER));
        let card_area = chunks[i + 1];
        frame.render_widget(block.clone(), card_area);
        let inner = block.inner(card_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let header = Line::from(vec![
            Span::styled(
                format!(" {} ", patient.initials()),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .bg(COLOR_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", patient.name),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  Age {} • {}", patient.age, patient.diagnosis),
                Style::default().fg(COLOR_DIM),
            ),
            Span::styled(
                format!("  Recent: {}", patient.recent_feedback),
                Style::default().fg(tone_color(patient.feedback_tone())),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), rows[0]);

        let gauge_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(10)])
            .split(rows[1]);
        let day_badge = Paragraph::new(Line::from(Span::styled(
            format!(" Day {}/{}", patient.current_day, patient.total_days),
            Style::default().fg(COLOR_DIM),
        )));
        frame.render_widget(day_badge, gauge_row[0]);

        let gauge = Gauge::default()
            .ratio(patient.progress().clamp(0.0, 1.0))
            .label("")
            .gauge_style(Style::default().fg(COLOR_PROGRESS).bg(COLOR_PROGRESS_BG));
        frame.render_widget(gauge, gauge_row[1]);
    }
}

// ============================================================================
// AI Assistant
// ============================================================================

fn render_ai_assistant(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(10), // Plan form
            Constraint::Min(4),     // Insight
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " AI Scheduling Assistant",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    let form = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Create New Panchakarma Plan ");
    frame.render_widget(form.clone(), chunks[1]);
    let inner = form.inner(chunks[1]);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Patient:   ", Style::default().fg(COLOR_DIM)),
            Span::styled("Select Patient", Style::default().fg(COLOR_ACCENT)),
        ]),
        Line::from(vec![
            Span::styled("Diagnosis: ", Style::default().fg(COLOR_DIM)),
            Span::styled("Stress & Digestive Issues", Style::default().fg(COLOR_ACCENT)),
        ]),
        Line::from(vec![
            Span::styled("Duration:  ", Style::default().fg(COLOR_DIM)),
            Span::styled("21 Days (standard cycle)", Style::default().fg(COLOR_ACCENT)),
        ]),
        Line::from(Span::styled("Protocol:", Style::default().fg(COLOR_DIM))),
    ];
    for option in content::PROTOCOL_OPTIONS {
        lines.push(Line::from(vec![
            Span::styled("  ☐ ", Style::default().fg(COLOR_PRIMARY)),
            Span::styled(*option, Style::default().fg(COLOR_ACCENT)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    let insight = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_PRIMARY))
        .title(" AI Recommendations ");
    frame.render_widget(insight.clone(), chunks[2]);
    let insight_inner = insight.inner(chunks[2]);
    let insight_text = Paragraph::new(Line::from(vec![
        Span::styled("AI Insight: ", Style::default().fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD)),
        Span::styled(content::AI_INSIGHT, Style::default().fg(COLOR_ACCENT)),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(insight_text, insight_inner);
}
