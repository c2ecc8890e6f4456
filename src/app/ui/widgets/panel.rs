use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::app::panel::MenuScreen;
use crate::app::ui::Focus;

/// Render the simulated LCD panel: status header, option list, and the
/// four-button legend printed under the screen.
pub fn render(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let border_color = if app.focus == Focus::Panel {
        app.config.colors.accent_color()
    } else {
        app.config.colors.border_color()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " CONTROL PANEL ",
            Style::default().fg(app.config.colors.border_title_color()),
        ))
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(2),       // LCD status lines
        Constraint::Percentage(100), // Option list
        Constraint::Length(1),       // Button legend
    ])
    .split(inner);

    let lcd_header = create_lcd_header(app, chunks[0].width);
    frame.render_widget(lcd_header, chunks[0]);

    let list = create_option_list(app, chunks[1].width);
    frame.render_stateful_widget(list, chunks[1], &mut app.panel_list_state);

    let legend = Paragraph::new(Line::from(Span::styled(
        "[^]UP [v]DOWN [ENTER]OK [<]BACK",
        Style::default().fg(app.config.colors.lcd_dim()),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(legend, chunks[2]);
}

/// Two LCD status lines: device banner with the link badge, then the
/// current screen title with an unsaved star when the section has edits.
fn create_lcd_header(app: &App, width: u16) -> Paragraph<'static> {
    let colors = &app.config.colors;
    let lcd_text = colors.lcd_text();

    let banner = "LED CONTROLLER WS2811";
    let badge = if app.device.artnet.link_up {
        "ART-NET OK"
    } else {
        "ART-NET ERR"
    };
    let badge_color = if app.device.artnet.link_up {
        colors.link_up()
    } else {
        colors.link_down()
    };

    let padding = (width as usize).saturating_sub(banner.width() + badge.width());
    let first = Line::from(vec![
        Span::styled(banner.to_string(), Style::default().fg(lcd_text).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(badge.to_string(), Style::default().fg(badge_color)),
    ]);

    let dirty = match app.panel.screen {
        MenuScreen::Network => app.device.network_dirty(),
        MenuScreen::IcConfig => app.device.ic_dirty(),
        MenuScreen::OutputsConfig => app.device.outputs_dirty(),
        _ => false,
    };
    let mut second = vec![Span::styled(
        app.panel.screen.title().to_string(),
        Style::default().fg(colors.lcd_dim()),
    )];
    if dirty {
        second.push(Span::styled(" *", Style::default().fg(colors.unsaved())));
    }

    Paragraph::new(vec![first, Line::from(second)])
}

/// The active screen's option rows, values right-aligned LCD style.
fn create_option_list(app: &App, width: u16) -> List<'static> {
    let colors = &app.config.colors;
    let lcd_text = colors.lcd_text();
    let value_color = colors.value_color();

    // Two columns are taken by the highlight symbol.
    let usable = (width as usize).saturating_sub(2);

    let items: Vec<ListItem> = app
        .panel
        .screen
        .entries(&app.device)
        .into_iter()
        .map(|entry| {
            let mut spans = vec![Span::styled(
                entry.label.clone(),
                Style::default().fg(lcd_text),
            )];
            if let Some(value) = entry.value {
                let filler = usable.saturating_sub(entry.label.width() + value.width());
                spans.push(Span::raw(" ".repeat(filler)));
                spans.push(Span::styled(value, Style::default().fg(value_color)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    List::new(items)
        .highlight_style(
            Style::default()
                .bg(colors.lcd_selected_bg())
                .fg(colors.lcd_selected_text()),
        )
        .highlight_symbol("> ")
}
