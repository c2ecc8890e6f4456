use ratatui::{
    layout::Alignment,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::app::device::stats;

const LABEL_WIDTH: usize = 13;

/// Compact network readout under the LCD panel. Shows the draft settings,
/// so MODE tracks the panel edits before they are saved.
pub fn create_network_panel<'a>(app: &App) -> Paragraph<'a> {
    let colors = &app.config.colors;
    let label_color = colors.label_color();
    let value_color = colors.value_color();

    // Both RJ45 jacks follow the simulated link state
    let link_span = |connected: bool| {
        if connected {
            Span::styled("CONNECTED", Style::default().fg(colors.link_up()).bold())
        } else {
            Span::styled("DISCONNECTED", Style::default().fg(colors.link_down()).bold())
        }
    };

    let network = &app.device.draft.network;
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", "ETH IN"), Style::default().fg(label_color)),
            link_span(app.device.artnet.link_up),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", "ETH OUT"), Style::default().fg(label_color)),
            link_span(app.device.artnet.link_up),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", "MODE"), Style::default().fg(label_color)),
            Span::styled(network.mode.label().to_string(), Style::default().fg(value_color)),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", "IP"), Style::default().fg(label_color)),
            Span::styled(network.current_ip().to_string(), Style::default().fg(value_color)),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", "PACKETS/SEC"), Style::default().fg(label_color)),
            Span::styled(
                format!("{}", app.device.packets_per_sec),
                Style::default().fg(value_color),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", "DATA RATE"), Style::default().fg(label_color)),
            Span::styled(stats::DATA_RATE, Style::default().fg(value_color)),
        ]),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(colors.led_on())),
            Span::styled("SYSTEM ACTIVE", Style::default().fg(label_color)),
        ])
        .alignment(Alignment::Center),
    ];

    let mut title = vec![Span::styled(
        " NETWORK ",
        Style::default().fg(colors.border_title_color()),
    )];
    if app.device.network_dirty() {
        title.push(Span::styled("* ", Style::default().fg(colors.unsaved())));
    }

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Line::from(title))
            .border_style(Style::default().fg(colors.border_color())),
    )
}
