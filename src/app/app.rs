use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::app::binds_handler::KeyBinds;
use crate::app::config::Config;
use crate::app::device::DeviceState;
use crate::app::panel::PanelState;
use crate::app::ui::{Focus, Page};

/// How long a status message stays on screen
const MESSAGE_DISPLAY_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Transient toast shown in the bottom-right corner
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageType,
    shown_at: Instant,
}

impl StatusMessage {
    pub fn new(text: String, kind: MessageType) -> Self {
        Self {
            text,
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.shown_at.elapsed() >= Duration::from_secs(MESSAGE_DISPLAY_SECS)
    }
}

/// Application state
pub struct App {
    pub running: bool,
    pub config: Config,
    pub key_binds: KeyBinds,
    pub page: Page,
    pub focus: Focus,
    pub device: DeviceState,
    pub panel: PanelState,
    pub panel_list_state: ListState,
    pub grid_cursor: usize,
    pub status_message: Option<StatusMessage>,
    pub clock: String,
    pub config_warnings: Vec<String>,
}

impl App {
    pub fn notify(&mut self, text: impl Into<String>, kind: MessageType) {
        self.status_message = Some(StatusMessage::new(text.into(), kind));
    }

    /// Fresh device and panel state, as if the controller was power-cycled.
    /// Used when entering the controller page.
    pub fn reset_controller_state(&mut self) {
        self.device = DeviceState::new();
        self.panel = PanelState::default();
        self.panel_list_state = ListState::default();
        self.panel_list_state.select(Some(0));
        self.grid_cursor = 0;
        self.focus = Focus::Panel;
    }

    /// One-second housekeeping: wall clock, simulated traffic, toast expiry.
    pub fn on_tick(&mut self) {
        self.clock = chrono::Local::now().format("%H:%M:%S").to_string();

        if self.page == Page::Controller {
            self.device.tick();
        }

        if self
            .status_message
            .as_ref()
            .is_some_and(|message| message.expired())
        {
            self.status_message = None;
        }
    }
}
