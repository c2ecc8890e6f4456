use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::App;
use crate::app::ui::widgets::{
    create_footer, create_header, create_network_panel, create_summary, create_system_strip,
    outputs_grid, panel,
};

/// The interactive page: LCD panel and network readout on the left,
/// output grid and system readings on the right.
pub fn render(frame: &mut Frame<'_>, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),       // Device banner
        Constraint::Percentage(100), // Panel and output grid
        Constraint::Length(3),       // Totals strip
        Constraint::Length(1),       // Key hints
    ])
    .split(frame.area());

    let content = Layout::horizontal([
        Constraint::Percentage(32), // LCD panel column
        Constraint::Percentage(68), // Output grid column
    ])
    .split(chunks[1]);

    let left = Layout::vertical([
        Constraint::Percentage(100), // LCD panel
        Constraint::Length(9),       // Network readout
    ])
    .split(content[0]);

    let right = Layout::vertical([
        Constraint::Percentage(100), // Output grid
        Constraint::Length(3),       // System readings
    ])
    .split(content[1]);

    frame.render_widget(create_header(app), chunks[0]);

    panel::render(frame, app, left[0]);
    frame.render_widget(create_network_panel(app), left[1]);

    outputs_grid::render(frame, app, right[0]);
    frame.render_widget(create_system_strip(app), right[1]);

    frame.render_widget(create_summary(app), chunks[2]);
    frame.render_widget(create_footer(app), chunks[3]);
}
