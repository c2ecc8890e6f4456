use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::Config;
use crate::app::catalog::{ComponentRow, PinoutRow, SpecRow};

fn titled_block<'a>(title: &str, config: &Config) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(config.colors.border_title_color()),
        ))
        .border_style(Style::default().fg(config.colors.border_color()))
}

/// Label/value rows, e.g. board dimensions and finish.
pub fn create_spec_table<'a>(title: &str, rows: &[SpecRow], config: &Config) -> Paragraph<'a> {
    let label_color = config.colors.label_color();
    let value_color = config.colors.value_color();

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(format!("{:<18}", row.label), Style::default().fg(label_color)),
                Span::styled(row.value, Style::default().fg(value_color)),
            ])
        })
        .collect();

    Paragraph::new(lines).block(titled_block(title, config))
}

/// Quantity, component name, and part reference per row.
pub fn create_component_table<'a>(
    title: &str,
    rows: &[ComponentRow],
    config: &Config,
) -> Paragraph<'a> {
    let accent_color = config.colors.accent_color();
    let label_color = config.colors.label_color();
    let value_color = config.colors.value_color();

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(format!("{:<5}", row.qty), Style::default().fg(accent_color)),
                Span::styled(format!("{:<28}", row.name), Style::default().fg(value_color)),
                Span::styled(row.part, Style::default().fg(label_color)),
            ])
        })
        .collect();

    Paragraph::new(lines).block(titled_block(title, config))
}

/// Flat-cable pin assignment rows.
pub fn create_pinout_table<'a>(
    title: &str,
    rows: &[PinoutRow],
    config: &Config,
) -> Paragraph<'a> {
    let accent_color = config.colors.accent_color();
    let label_color = config.colors.label_color();
    let value_color = config.colors.value_color();

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(format!("{:<8}", row.pins), Style::default().fg(accent_color)),
                Span::styled(format!("{:<16}", row.signal), Style::default().fg(value_color)),
                Span::styled(row.description, Style::default().fg(label_color)),
            ])
        })
        .collect();

    Paragraph::new(lines).block(titled_block(title, config))
}

/// Plain bullet rows for characteristics and advantages.
pub fn create_bullet_list<'a>(title: &str, items: &[&str], config: &Config) -> Paragraph<'a> {
    let accent_color = config.colors.accent_color();
    let value_color = config.colors.value_color();

    let lines: Vec<Line> = items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(accent_color)),
                Span::styled((*item).to_string(), Style::default().fg(value_color)),
            ])
        })
        .collect();

    Paragraph::new(lines).block(titled_block(title, config))
}
