use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, Config};
use crate::app::catalog::{OUTPUT_BOARDS, SCHEMATIC_NOTES};
use crate::app::ui::widgets::{create_bullet_list, create_page_footer, create_page_header};

/// System wiring diagram drawn as nested boxes: main board, distribution
/// hub, and the four output boards feeding the strips.
pub fn render(frame: &mut Frame<'_>, app: &mut App) {
    let config = &app.config;

    let chunks = Layout::vertical([
        Constraint::Length(3),       // Page title
        Constraint::Percentage(100), // Diagram
        Constraint::Length(6),       // Legend cards
        Constraint::Length(1),       // Tagline
        Constraint::Length(1),       // Key hints
    ])
    .split(frame.area());

    frame.render_widget(create_page_header(config, app.page.title()), chunks[0]);

    render_diagram(frame, app, chunks[1]);

    let legend_columns =
        Layout::horizontal(vec![Constraint::Ratio(1, SCHEMATIC_NOTES.len() as u32); SCHEMATIC_NOTES.len()])
            .split(chunks[2]);
    for (index, &(title, items)) in SCHEMATIC_NOTES.iter().enumerate() {
        frame.render_widget(create_bullet_list(title, items, config), legend_columns[index]);
    }

    let tagline = Paragraph::new(Line::from(Span::styled(
        "WS2811 CONTROLLER - 32 OUTPUTS | ART-NET PROTOCOL | COMPLETE WIRING DIAGRAM",
        Style::default().fg(config.colors.label_color()),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[3]);

    frame.render_widget(create_page_footer(config), chunks[4]);
}

fn render_diagram(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let config = &app.config;

    let stages = Layout::vertical([
        Constraint::Length(4), // Main board
        Constraint::Length(1), // Cable label
        Constraint::Length(4), // Distribution hub
        Constraint::Length(1), // Cable label
        Constraint::Length(4), // Output boards
        Constraint::Length(1), // Strip arrows
        Constraint::Min(0),
    ])
    .split(area);

    let main_board = stage_box(
        "MAIN BOARD",
        &[
            "STM32F4 + ETHERNET PHY",
            "ART-NET NODE - 32 UNIVERSE BUFFER",
        ],
        config,
    );
    frame.render_widget(main_board, centered(stages[0], 48));

    frame.render_widget(cable_label("▼ 50-PIN FLAT CABLE ▼", config), stages[1]);

    let hub_row = Layout::horizontal([
        Constraint::Percentage(100),
        Constraint::Length(26), // Power supply sits beside the hub
    ])
    .split(stages[2]);

    let hub = stage_box(
        "DISTRIBUTION HUB",
        &["SIGNAL BUFFERING - 4x FFC 20P OUT"],
        config,
    );
    frame.render_widget(hub, centered(hub_row[0], 48));

    let power = stage_box("POWER", &["5V/12V/24V HIGH CURRENT"], config);
    frame.render_widget(power, hub_row[1]);

    frame.render_widget(cable_label("▼ FFC 20P x4 ▼", config), stages[3]);

    let board_columns =
        Layout::horizontal(vec![Constraint::Ratio(1, OUTPUT_BOARDS.len() as u32); OUTPUT_BOARDS.len()])
            .split(stages[4]);
    for (index, board) in OUTPUT_BOARDS.iter().enumerate() {
        let title = format!("OUTPUT BOARD {}", board.number);
        let body = format!("OUTPUTS {}", board.range);
        let card = stage_box(&title, &[body.as_str(), "+ LINE DRIVERS"], config);
        frame.render_widget(card, board_columns[index]);
    }

    frame.render_widget(cable_label("▼ ▼ ▼ WS2811 LED STRIPS ▼ ▼ ▼", config), stages[5]);
}

fn stage_box<'a>(title: &str, lines: &[&str], config: &Config) -> Paragraph<'a> {
    let body: Vec<Line> = lines
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                (*line).to_string(),
                Style::default().fg(config.colors.value_color()),
            ))
        })
        .collect();

    Paragraph::new(body).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(config.colors.accent_color()).bold(),
            ))
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(config.colors.border_color())),
    )
}

fn cable_label<'a>(text: &str, config: &Config) -> Paragraph<'a> {
    Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(config.colors.lcd_dim()),
    )))
    .alignment(Alignment::Center)
}

/// Center a fixed-width box inside the given area.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
