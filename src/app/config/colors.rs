use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ColorsConfig {
    #[serde(default = "ColorsConfig::default_border")]
    pub border: String,
    #[serde(default = "ColorsConfig::default_border_title")]
    pub border_title: String,
    #[serde(default = "ColorsConfig::default_header")]
    pub header: String,
    #[serde(default = "ColorsConfig::default_accent")]
    pub accent: String,
    #[serde(default = "ColorsConfig::default_label")]
    pub label: String,
    #[serde(default = "ColorsConfig::default_value")]
    pub value: String,
    #[serde(default = "ColorsConfig::default_lcd_text")]
    pub lcd_text: String,
    #[serde(default = "ColorsConfig::default_lcd_dim")]
    pub lcd_dim: String,
    #[serde(default = "ColorsConfig::default_lcd_selected_bg")]
    pub lcd_selected_bg: String,
    #[serde(default = "ColorsConfig::default_lcd_selected_text")]
    pub lcd_selected_text: String,
    #[serde(default = "ColorsConfig::default_led_on")]
    pub led_on: String,
    #[serde(default = "ColorsConfig::default_led_off")]
    pub led_off: String,
    #[serde(default = "ColorsConfig::default_link_up")]
    pub link_up: String,
    #[serde(default = "ColorsConfig::default_link_down")]
    pub link_down: String,
    #[serde(default = "ColorsConfig::default_unsaved")]
    pub unsaved: String,
    #[serde(default = "ColorsConfig::default_toast_info")]
    pub toast_info: String,
    #[serde(default = "ColorsConfig::default_toast_success")]
    pub toast_success: String,
    #[serde(default = "ColorsConfig::default_toast_error")]
    pub toast_error: String,
}

impl ColorsConfig {
    /// Parse a hex color string like "#FF5500" into RGB values
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    pub fn border_color(&self) -> Color {
        Self::parse_hex(&self.border)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::White)
    }

    pub fn border_title_color(&self) -> Color {
        Self::parse_hex(&self.border_title)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::White)
    }

    pub fn header_color(&self) -> Color {
        Self::parse_hex(&self.header)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::White)
    }

    pub fn accent_color(&self) -> Color {
        Self::parse_hex(&self.accent)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Blue)
    }

    pub fn label_color(&self) -> Color {
        Self::parse_hex(&self.label)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::White)
    }

    pub fn value_color(&self) -> Color {
        Self::parse_hex(&self.value)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::White)
    }

    pub fn lcd_text(&self) -> Color {
        Self::parse_hex(&self.lcd_text)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Green)
    }

    pub fn lcd_dim(&self) -> Color {
        Self::parse_hex(&self.lcd_dim)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Green)
    }

    pub fn lcd_selected_bg(&self) -> Color {
        Self::parse_hex(&self.lcd_selected_bg)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Black)
    }

    pub fn lcd_selected_text(&self) -> Color {
        Self::parse_hex(&self.lcd_selected_text)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::White)
    }

    pub fn led_on(&self) -> Color {
        Self::parse_hex(&self.led_on)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Green)
    }

    pub fn led_off(&self) -> Color {
        Self::parse_hex(&self.led_off)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Black)
    }

    pub fn link_up(&self) -> Color {
        Self::parse_hex(&self.link_up)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Green)
    }

    pub fn link_down(&self) -> Color {
        Self::parse_hex(&self.link_down)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Red)
    }

    pub fn unsaved(&self) -> Color {
        Self::parse_hex(&self.unsaved)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Yellow)
    }

    pub fn toast_info(&self) -> Color {
        Self::parse_hex(&self.toast_info)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Blue)
    }

    pub fn toast_success(&self) -> Color {
        Self::parse_hex(&self.toast_success)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Green)
    }

    pub fn toast_error(&self) -> Color {
        Self::parse_hex(&self.toast_error)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Red)
    }
}

impl ColorsConfig {
    fn default_border() -> String {
        "#334155".to_string()
    }

    fn default_border_title() -> String {
        "#94a3b8".to_string()
    }

    fn default_header() -> String {
        "#e2e8f0".to_string()
    }

    fn default_accent() -> String {
        "#3b82f6".to_string()
    }

    fn default_label() -> String {
        "#94a3b8".to_string()
    }

    fn default_value() -> String {
        "#e2e8f0".to_string()
    }

    fn default_lcd_text() -> String {
        "#86efac".to_string()
    }

    fn default_lcd_dim() -> String {
        "#166534".to_string()
    }

    fn default_lcd_selected_bg() -> String {
        "#14532d".to_string()
    }

    fn default_lcd_selected_text() -> String {
        "#dcfce7".to_string()
    }

    fn default_led_on() -> String {
        "#22c55e".to_string()
    }

    fn default_led_off() -> String {
        "#475569".to_string()
    }

    fn default_link_up() -> String {
        "#22c55e".to_string()
    }

    fn default_link_down() -> String {
        "#ef4444".to_string()
    }

    fn default_unsaved() -> String {
        "#f97316".to_string()
    }

    fn default_toast_info() -> String {
        "#3b82f6".to_string()
    }

    fn default_toast_success() -> String {
        "#22c55e".to_string()
    }

    fn default_toast_error() -> String {
        "#ef4444".to_string()
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            border: Self::default_border(),
            border_title: Self::default_border_title(),
            header: Self::default_header(),
            accent: Self::default_accent(),
            label: Self::default_label(),
            value: Self::default_value(),
            lcd_text: Self::default_lcd_text(),
            lcd_dim: Self::default_lcd_dim(),
            lcd_selected_bg: Self::default_lcd_selected_bg(),
            lcd_selected_text: Self::default_lcd_selected_text(),
            led_on: Self::default_led_on(),
            led_off: Self::default_led_off(),
            link_up: Self::default_link_up(),
            link_down: Self::default_link_down(),
            unsaved: Self::default_unsaved(),
            toast_info: Self::default_toast_info(),
            toast_success: Self::default_toast_success(),
            toast_error: Self::default_toast_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_accepts_leading_hash() {
        assert_eq!(ColorsConfig::parse_hex("#22c55e"), Some((0x22, 0xc5, 0x5e)));
        assert_eq!(ColorsConfig::parse_hex("22c55e"), Some((0x22, 0xc5, 0x5e)));
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert_eq!(ColorsConfig::parse_hex("#fff"), None);
        assert_eq!(ColorsConfig::parse_hex("#zzzzzz"), None);
        assert_eq!(ColorsConfig::parse_hex(""), None);
    }

    #[test]
    fn test_accessor_falls_back_on_garbage() {
        let config = ColorsConfig {
            led_on: "not-a-color".to_string(),
            ..ColorsConfig::default()
        };
        assert_eq!(config.led_on(), Color::Green);
    }
}
