pub mod views;
pub mod widgets;

pub use views::{Focus, Page};

use ratatui::Frame;

use crate::app::App;

/// Draw one frame: dispatch on the current page, then lay the toast
/// overlay on top if a status message is showing.
pub fn render(frame: &mut Frame<'_>, app: &mut App) {
    let page = app.page.clone();
    match page {
        Page::Controller => views::controller::render(frame, app),
        Page::Schematic => views::schematic::render(frame, app),
        Page::MainPcb => views::main_pcb::render(frame, app),
        Page::DisplayPcb => views::display_pcb::render(frame, app),
        Page::OutputPcb => views::output_pcb::render(frame, app),
        Page::NotFound(path) => views::not_found::render(frame, app, &path),
    }

    if let Some(message) = app.status_message.clone() {
        widgets::toast::render(frame, &app.config, &message);
    }
}
