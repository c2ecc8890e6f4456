use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;

/// Electrical readings strip under the output grid.
pub fn create_system_strip<'a>(app: &App) -> Paragraph<'a> {
    let colors = &app.config.colors;
    let label_color = colors.label_color();
    let value_color = colors.value_color();
    let stats = &app.device.stats;

    let readings = [
        ("TEMPERATURE", format!("{:.0}°C", stats.temperature_c)),
        ("VOLTAGE", format!("{:.1}V", stats.voltage_v)),
        ("CURRENT", format!("{:.1}A", stats.current_a)),
    ];

    let mut spans = Vec::new();
    for (index, (label, value)) in readings.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors.border_color())));
        }
        spans.push(Span::styled(format!("{} ", label), Style::default().fg(label_color)));
        spans.push(Span::styled(value, Style::default().fg(value_color)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(
                    " SYSTEM STATUS ",
                    Style::default().fg(colors.border_title_color()),
                ))
                .border_style(Style::default().fg(colors.border_color())),
        )
}
