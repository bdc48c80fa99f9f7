//! Login screen rendering.
//!
//! A centered menu of sign-in actions. Every sign-in entry performs the same
//! transition (onboarding as a patient); the final entry opens the
//! practitioner portal instead.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::{centered_rect, keybind_hints};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PRIMARY, COLOR_SELECTED};
use crate::app::App;

/// Login menu entries, in display order. The last entry is the practitioner
/// portal; everything before it is a patient sign-in action.
pub const LOGIN_OPTIONS: &[&str] = &[
    "Continue with Google",
    "Continue with Apple",
    "Continue with Phone",
    "Register Here",
    "Portal Access (Healthcare Provider)",
];

const LOGO: &[&str] = &[
    " █████╗ ██╗   ██╗██╗   ██╗██████╗ ",
    "██╔══██╗╚██╗ ██╔╝██║   ██║██╔══██╗",
    "███████║ ╚████╔╝ ██║   ██║██████╔╝",
    "██╔══██║  ╚██╔╝  ██║   ██║██╔══██╗",
    "██║  ██║   ██║   ╚██████╔╝██║  ██║",
    "╚═╝  ╚═╝   ╚═╝    ╚═════╝ ╚═╝  ╚═╝",
];

pub fn render_login(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let card = centered_rect(46, 22, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Ayur-Connect ");
    frame.render_widget(block.clone(), card);

    let inner = block.inner(card);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LOGO.len() as u16), // Logo
            Constraint::Length(2),                 // Tagline
            Constraint::Length(LOGIN_OPTIONS.len() as u16 + 1), // Menu
            Constraint::Min(0),                    // Spacer
            Constraint::Length(1),                 // Hints
        ])
        .split(inner);

    let logo_lines: Vec<Line> = LOGO
        .iter()
        .map(|line| {
            Line::from(Span::styled(*line, Style::default().fg(COLOR_HEADER)))
                .alignment(Alignment::Center)
        })
        .collect();
    frame.render_widget(Paragraph::new(logo_lines), chunks[0]);

    let tagline = Paragraph::new(Line::from(vec![Span::styled(
        "Your journey to wellness begins here",
        Style::default().fg(COLOR_DIM),
    )]))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[1]);

    let menu_lines: Vec<Line> = LOGIN_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if i == app.login_index {
                Line::from(vec![
                    Span::styled("▸ ", Style::default().fg(COLOR_PRIMARY)),
                    Span::styled(
                        *option,
                        Style::default()
                            .fg(COLOR_SELECTED)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
                .alignment(Alignment::Center)
            } else {
                Line::from(Span::styled(*option, Style::default().fg(COLOR_ACCENT)))
                    .alignment(Alignment::Center)
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(menu_lines), chunks[2]);

    let hints = Paragraph::new(keybind_hints(&[
        ("↑/↓", "select"),
        ("Enter", "continue"),
        ("q", "quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[4]);
}
