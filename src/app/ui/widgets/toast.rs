use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{Config, MessageType, StatusMessage};

/// Notification overlay in the bottom-right corner, drawn over whatever
/// page is showing. Skipped entirely on terminals too small to hold it.
pub fn render(frame: &mut Frame<'_>, config: &Config, message: &StatusMessage) {
    let area = frame.area();
    if area.height < 5 || area.width < 12 {
        return;
    }

    let text_color = match message.kind {
        MessageType::Info => config.colors.toast_info(),
        MessageType::Success => config.colors.toast_success(),
        MessageType::Error => config.colors.toast_error(),
    };

    let width = (message.text.width() as u16 + 4).min(area.width.saturating_sub(2));
    let rect = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.height.saturating_sub(4),
        width,
        height: 3,
    };

    frame.render_widget(Clear, rect);

    let toast = Paragraph::new(Line::from(Span::styled(
        message.text.clone(),
        Style::default().fg(text_color),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                " STATUS ",
                Style::default().fg(config.colors.border_title_color()),
            ))
            .border_style(Style::default().fg(text_color)),
    );
    frame.render_widget(toast, rect);
}
