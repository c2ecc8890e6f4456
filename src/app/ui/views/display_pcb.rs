use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::App;
use crate::app::catalog::{
    DISPLAY_PCB_ADVANTAGES, DISPLAY_PCB_COMPONENTS, DISPLAY_PCB_SPECS, FLAT_CABLE_PINOUT,
};
use crate::app::ui::widgets::{
    create_bullet_list, create_component_table, create_page_footer, create_page_header,
    create_pinout_table, create_spec_table,
};

/// Display board documentation, including the 20-pin flat cable pinout
/// that links it to the main board.
pub fn render(frame: &mut Frame<'_>, app: &mut App) {
    let config = &app.config;

    let chunks = Layout::vertical([
        Constraint::Length(3),       // Page title
        Constraint::Percentage(100), // Tables
        Constraint::Length(1),       // Key hints
    ])
    .split(frame.area());

    frame.render_widget(create_page_header(config, app.page.title()), chunks[0]);

    let columns = Layout::horizontal([
        Constraint::Percentage(45), // Specifications and advantages
        Constraint::Percentage(55), // Components and pinout
    ])
    .split(chunks[1]);

    let left = Layout::vertical([
        Constraint::Length(DISPLAY_PCB_SPECS.len() as u16 + 2),
        Constraint::Percentage(100),
    ])
    .split(columns[0]);

    frame.render_widget(
        create_spec_table("SPECIFICATIONS", DISPLAY_PCB_SPECS, config),
        left[0],
    );
    frame.render_widget(
        create_bullet_list("ADVANTAGES", DISPLAY_PCB_ADVANTAGES, config),
        left[1],
    );

    let right = Layout::vertical([
        Constraint::Length(DISPLAY_PCB_COMPONENTS.len() as u16 + 2),
        Constraint::Percentage(100),
    ])
    .split(columns[1]);

    frame.render_widget(
        create_component_table("COMPONENTS", DISPLAY_PCB_COMPONENTS, config),
        right[0],
    );
    frame.render_widget(
        create_pinout_table("FLAT CABLE PINOUT", FLAT_CABLE_PINOUT, config),
        right[1],
    );

    frame.render_widget(create_page_footer(config), chunks[2]);
}
