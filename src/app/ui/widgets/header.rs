use ratatui::{
    layout::Alignment,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::app::Config;
use crate::app::ui::Focus;

/// Build the "[KEY]LABEL" hint spans used by the footer lines.
fn hint_spans(hints: &[(&str, &str)], key_color: Color, text_color: Color) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (index, (key, label)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(key_color)));
        spans.push(Span::styled((*label).to_string(), Style::default().fg(text_color)));
    }
    spans
}

/// Device banner across the top of the controller page.
pub fn create_header<'a>(app: &App) -> Paragraph<'a> {
    let colors = &app.config.colors;
    let header_color = colors.header_color();
    let label_color = colors.label_color();
    let value_color = colors.value_color();
    let separator = Span::styled(" │ ", Style::default().fg(colors.border_color()));

    let link_span = if app.device.artnet.link_up {
        Span::styled("ART-NET ACTIVE", Style::default().fg(colors.link_up()))
    } else {
        Span::styled("ART-NET DOWN", Style::default().fg(colors.link_down()))
    };

    let mut spans = vec![
        Span::styled(
            format!("{} LED CONTROLLER - 32 OUTPUTS", app.device.draft.ic.chip),
            Style::default().fg(header_color).bold(),
        ),
        separator.clone(),
        Span::styled(
            format!("{}", app.device.active_outputs()),
            Style::default().fg(value_color),
        ),
        Span::styled(" ACTIVE OUTPUTS", Style::default().fg(label_color)),
        separator.clone(),
        Span::styled(
            format!("{}", app.device.total_universes()),
            Style::default().fg(value_color),
        ),
        Span::styled(" UNIVERSES TOTAL", Style::default().fg(label_color)),
        separator.clone(),
        link_span,
    ];
    if app.device.dirty() {
        spans.push(separator.clone());
        spans.push(Span::styled("UNSAVED", Style::default().fg(colors.unsaved()).bold()));
    }
    spans.push(separator);
    spans.push(Span::styled(app.clock.clone(), Style::default().fg(value_color)));

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(app.config.colors.border_color())),
        )
}

/// Title bar shared by the hardware documentation pages.
pub fn create_page_header<'a>(config: &Config, title: &str) -> Paragraph<'a> {
    let spans = vec![
        Span::styled(
            "WS2811 LED CONTROLLER",
            Style::default().fg(config.colors.header_color()).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(config.colors.border_color())),
        Span::styled(title.to_string(), Style::default().fg(config.colors.accent_color())),
    ];

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(config.colors.border_color())),
        )
}

/// Totals strip below the controller content.
pub fn create_summary<'a>(app: &App) -> Paragraph<'a> {
    let colors = &app.config.colors;
    let label_color = colors.label_color();
    let value_color = colors.value_color();
    let separator = Span::styled(" │ ", Style::default().fg(colors.border_color()));

    let spans = vec![
        Span::styled(
            format!("{}", app.device.active_outputs()),
            Style::default().fg(value_color).bold(),
        ),
        Span::styled(" ACTIVE OUTPUTS", Style::default().fg(label_color)),
        separator.clone(),
        Span::styled(
            format!("{}", app.device.total_universes()),
            Style::default().fg(value_color).bold(),
        ),
        Span::styled(" UNIVERSES", Style::default().fg(label_color)),
        separator.clone(),
        Span::styled(
            format!("{}", app.device.packets_per_sec),
            Style::default().fg(value_color).bold(),
        ),
        Span::styled(" PACKETS/SEC", Style::default().fg(label_color)),
        separator,
        Span::styled(
            format!("{}", app.device.total_channels()),
            Style::default().fg(value_color).bold(),
        ),
        Span::styled(" CHANNELS", Style::default().fg(label_color)),
    ];

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors.border_color())),
        )
}

/// Key hints for the controller page, switched on the focused widget.
pub fn create_footer<'a>(app: &App) -> Paragraph<'a> {
    let key_color = app.config.colors.accent_color();
    let text_color = app.config.colors.label_color();

    let hints: &[(&str, &str)] = match app.focus {
        Focus::Panel => &[
            ("TAB", "FOCUS"),
            ("ENTER", "OK"),
            ("BKSP", "BACK"),
            ("1-5", "PAGES"),
            ("E", "EXPORT"),
            ("Q", "QUIT"),
        ],
        Focus::Grid => &[
            ("TAB", "FOCUS"),
            ("SPACE", "TOGGLE"),
            ("+/-", "UNIVERSES"),
            ("S", "SAVE ALL"),
            ("Q", "QUIT"),
        ],
    };

    Paragraph::new(Line::from(hint_spans(hints, key_color, text_color)))
        .alignment(Alignment::Center)
}

/// Key hints for the hardware documentation pages.
pub fn create_page_footer<'a>(config: &Config) -> Paragraph<'a> {
    let key_color = config.colors.accent_color();
    let text_color = config.colors.label_color();

    let hints: &[(&str, &str)] = &[
        ("1", "CONTROLLER"),
        ("2", "DIAGRAM"),
        ("3", "MAIN PCB"),
        ("4", "DISPLAY PCB"),
        ("5", "OUTPUT PCBS"),
        ("E", "EXPORT"),
        ("G", "GERBERS"),
        ("O", "CELUS"),
        ("Q", "QUIT"),
    ];

    Paragraph::new(Line::from(hint_spans(hints, key_color, text_color)))
        .alignment(Alignment::Center)
}
