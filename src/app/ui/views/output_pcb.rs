use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, Config};
use crate::app::catalog::{
    OUTPUT_BOARDS, OUTPUT_PCB_COMPONENTS, OUTPUT_PCB_SPECS, OUTPUT_SYSTEM_NOTES, OutputBoard,
};
use crate::app::ui::widgets::{
    create_bullet_list, create_component_table, create_page_footer, create_page_header,
    create_spec_table,
};

/// The four identical output boards: one card per board plus the shared
/// specification and component tables.
pub fn render(frame: &mut Frame<'_>, app: &mut App) {
    let config = &app.config;

    let chunks = Layout::vertical([
        Constraint::Length(3),       // Page title
        Constraint::Length(6),       // Board cards
        Constraint::Percentage(100), // Shared tables
        Constraint::Length(6),       // Notes columns
        Constraint::Length(1),       // Tagline
        Constraint::Length(1),       // Key hints
    ])
    .split(frame.area());

    frame.render_widget(create_page_header(config, app.page.title()), chunks[0]);

    let cards =
        Layout::horizontal(vec![Constraint::Ratio(1, OUTPUT_BOARDS.len() as u32); OUTPUT_BOARDS.len()])
            .split(chunks[1]);
    for (index, board) in OUTPUT_BOARDS.iter().enumerate() {
        frame.render_widget(create_board_card(board, config), cards[index]);
    }

    let tables = Layout::horizontal([
        Constraint::Percentage(45), // Specifications
        Constraint::Percentage(55), // Components
    ])
    .split(chunks[2]);
    frame.render_widget(
        create_spec_table("SPECIFICATIONS", OUTPUT_PCB_SPECS, config),
        tables[0],
    );
    frame.render_widget(
        create_component_table("COMPONENTS", OUTPUT_PCB_COMPONENTS, config),
        tables[1],
    );

    let notes =
        Layout::horizontal(vec![Constraint::Ratio(1, OUTPUT_SYSTEM_NOTES.len() as u32); OUTPUT_SYSTEM_NOTES.len()])
            .split(chunks[3]);
    for (index, &(title, items)) in OUTPUT_SYSTEM_NOTES.iter().enumerate() {
        frame.render_widget(create_bullet_list(title, items, config), notes[index]);
    }

    let tagline = Paragraph::new(Line::from(Span::styled(
        "MODULAR WS2811 SYSTEM | 4 BOARDS x 8 OUTPUTS | SCREW TERMINALS | FLAT CABLE LINK",
        Style::default().fg(config.colors.label_color()),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[4]);

    frame.render_widget(create_page_footer(config), chunks[5]);
}

fn create_board_card<'a>(board: &OutputBoard, config: &Config) -> Paragraph<'a> {
    let lines = vec![
        Line::from(Span::styled(
            format!("OUTPUTS {}", board.range),
            Style::default().fg(config.colors.value_color()).bold(),
        )),
        Line::from(Span::styled(
            "8x WS2811 - SCREW TERMINALS",
            Style::default().fg(config.colors.label_color()),
        )),
        Line::from(Span::styled(
            "FFC 20P UPLINK",
            Style::default().fg(config.colors.lcd_dim()),
        )),
    ];

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                format!(" BOARD {} ", board.number),
                Style::default().fg(config.colors.accent_color()).bold(),
            ))
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(config.colors.border_color())),
    )
}
