use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::App;
use crate::app::catalog::{MAIN_PCB_CHARACTERISTICS, MAIN_PCB_COMPONENTS, MAIN_PCB_SPECS};
use crate::app::ui::widgets::{
    create_bullet_list, create_component_table, create_page_footer, create_page_header,
    create_spec_table,
};

/// Main board documentation: specifications and characteristics on the
/// left, the component listing on the right.
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
        Constraint::Percentage(45), // Specifications
        Constraint::Percentage(55), // Components
    ])
    .split(chunks[1]);

    let left = Layout::vertical([
        Constraint::Length(MAIN_PCB_SPECS.len() as u16 + 2),
        Constraint::Percentage(100),
    ])
    .split(columns[0]);

    frame.render_widget(
        create_spec_table("SPECIFICATIONS", MAIN_PCB_SPECS, config),
        left[0],
    );
    frame.render_widget(
        create_bullet_list("CHARACTERISTICS", MAIN_PCB_CHARACTERISTICS, config),
        left[1],
    );
    frame.render_widget(
        create_component_table("COMPONENTS", MAIN_PCB_COMPONENTS, config),
        columns[1],
    );

    frame.render_widget(create_page_footer(config), chunks[2]);
}
