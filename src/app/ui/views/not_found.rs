use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::app::ui::widgets::create_page_footer;

/// Catch-all page for unknown routes, echoing the requested path.
pub fn render(frame: &mut Frame<'_>, app: &mut App, path: &str) {
    let config = &app.config;

    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(7),
        Constraint::Percentage(60),
        Constraint::Length(1), // Key hints
    ])
    .split(frame.area());

    let lines = vec![
        Line::from(Span::styled(
            "404",
            Style::default().fg(config.colors.accent_color()).bold(),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("Route not found: {}", path),
            Style::default().fg(config.colors.value_color()),
        )),
        Line::default(),
        Line::from(Span::styled(
            "[1] BACK TO CONTROLLER",
            Style::default().fg(config.colors.label_color()),
        )),
    ];

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(config.colors.border_color())),
    );

    let centered = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(50),
        Constraint::Percentage(25),
    ])
    .split(chunks[1]);
    frame.render_widget(card, centered[1]);

    frame.render_widget(create_page_footer(config), chunks[3]);
}
