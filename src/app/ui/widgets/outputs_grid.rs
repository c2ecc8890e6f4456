use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::app::device::{OUTPUT_COUNT, OutputConfig};
use crate::app::navigation::GRID_COLS;
use crate::app::ui::Focus;

/// Render the 4x8 output grid, one bordered cell per physical connector.
pub fn render(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let border_color = if app.focus == Focus::Grid {
        app.config.colors.accent_color()
    } else {
        app.config.colors.border_color()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            format!(" {} OUTPUTS ", app.device.draft.ic.chip),
            Style::default().fg(app.config.colors.border_title_color()),
        ))
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut row_constraints = vec![Constraint::Length(3); OUTPUT_COUNT / GRID_COLS];
    row_constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(row_constraints).split(inner);

    for row in 0..OUTPUT_COUNT / GRID_COLS {
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, GRID_COLS as u32); GRID_COLS])
                .split(rows[row]);
        for column in 0..GRID_COLS {
            let index = row * GRID_COLS + column;
            if let Some(output) = app.device.draft.outputs.get(index) {
                let cell = create_output_cell(app, index, output);
                frame.render_widget(cell, columns[column]);
            }
        }
    }
}

fn create_output_cell(app: &App, index: usize, output: &OutputConfig) -> Paragraph<'static> {
    let colors = &app.config.colors;
    let selected = app.focus == Focus::Grid && app.grid_cursor == index;

    let border_color = if selected {
        colors.accent_color()
    } else if output.active {
        colors.led_on()
    } else {
        colors.border_color()
    };

    let led = if output.active {
        Span::styled("●", Style::default().fg(colors.led_on()))
    } else {
        Span::styled("○", Style::default().fg(colors.led_off()))
    };
    let state = if output.active { " ON" } else { " OFF" };

    let mut title = Style::default().fg(colors.border_title_color());
    if selected {
        title = title.bold();
    }

    let body = Line::from(vec![
        Span::styled(
            format!("{}U ", output.universes),
            Style::default().fg(colors.value_color()),
        ),
        led,
        Span::styled(state.to_string(), Style::default().fg(colors.label_color())),
    ]);

    Paragraph::new(body).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(format!(" OUT {:02} ", index + 1), title))
            .border_style(Style::default().fg(border_color)),
    )
}
