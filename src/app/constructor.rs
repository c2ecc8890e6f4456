use super::App;
use crate::app::binds_handler::KeyBinds;
use crate::app::config::Config;
use crate::app::device::DeviceState;
use crate::app::panel::PanelState;
use crate::app::ui::{Focus, Page};
use ratatui::widgets::ListState;

/// Trait for App construction
pub trait AppConstructor {
    fn new_with_config(config: Config, page: Page) -> color_eyre::Result<Self>
    where
        Self: Sized;
}

impl AppConstructor for App {
    /// Construct a new instance of [`App`].
    fn new_with_config(config: Config, page: Page) -> color_eyre::Result<Self> {
        if let Page::NotFound(path) = &page {
            log::warn!("No page registered for route: {}", path);
        }

        // Build key maps from config
        let (global_map, controller_map) = config.binds.build_key_maps();
        let key_binds = KeyBinds::new(global_map, controller_map);

        let mut panel_list_state = ListState::default();
        panel_list_state.select(Some(0));

        Ok(Self {
            running: false,
            config,
            key_binds,
            page,
            focus: Focus::Panel,
            device: DeviceState::new(),
            panel: PanelState::default(),
            panel_list_state,
            grid_cursor: 0,
            status_message: None,
            clock: chrono::Local::now().format("%H:%M:%S").to_string(),
            config_warnings: Vec::new(),
        })
    }
}
