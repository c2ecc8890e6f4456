use super::App;
use crate::app::MessageType;
use crate::app::actions::Action;
use crate::app::catalog::{DESIGN_TOOL_URL, GERBER_FILES};
use crate::app::device::{DeviceState, OUTPUT_COUNT};
use crate::app::export;
use crate::app::logging::{log_export_result, log_user_interaction};
use crate::app::panel::{MenuAction, PanelInput};
use crate::app::ui::{Focus, Page};

/// Columns in the output grid
pub const GRID_COLS: usize = 8;

/// Trait for navigation-related functionality
pub trait Navigation {
    fn handle_action(&mut self, action: Action);
    fn goto_page(&mut self, page: Page);
}

impl Navigation for App {
    /// Handle navigation and UI-related actions
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::NavigateUp => match self.focus {
                Focus::Panel => self.panel_press(PanelInput::Up),
                Focus::Grid => self.move_grid_cursor(action),
            },
            Action::NavigateDown => match self.focus {
                Focus::Panel => self.panel_press(PanelInput::Down),
                Focus::Grid => self.move_grid_cursor(action),
            },
            Action::NavigateLeft | Action::NavigateRight => {
                // With panel focus these arrive remapped as Back/Confirm
                if self.focus == Focus::Grid {
                    self.move_grid_cursor(action);
                }
            }
            Action::Confirm => match self.focus {
                Focus::Panel => self.panel_press(PanelInput::Enter),
                Focus::Grid => self.toggle_grid_output(),
            },
            Action::Back => match self.focus {
                Focus::Panel => self.panel_press(PanelInput::Back),
                Focus::Grid => self.focus = Focus::Panel,
            },
            Action::ToggleOutput => {
                if self.focus == Focus::Grid {
                    self.toggle_grid_output();
                }
            }
            Action::UniverseInc => {
                if self.focus == Focus::Grid
                    && let Some(output) = self.device.draft.outputs.get_mut(self.grid_cursor)
                {
                    output.add_universe();
                }
            }
            Action::UniverseDec => {
                if self.focus == Focus::Grid
                    && let Some(output) = self.device.draft.outputs.get_mut(self.grid_cursor)
                {
                    output.remove_universe();
                }
            }
            Action::SaveAll => {
                self.device.save_all();
                log::info!("All pending device settings saved");
                self.notify("All settings saved", MessageType::Success);
            }
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Panel => Focus::Grid,
                    Focus::Grid => Focus::Panel,
                };
                log_user_interaction("switch focus", None);
            }
            Action::GotoController => self.goto_page(Page::Controller),
            Action::GotoSchematic => self.goto_page(Page::Schematic),
            Action::GotoMainPcb => self.goto_page(Page::MainPcb),
            Action::GotoDisplayPcb => self.goto_page(Page::DisplayPcb),
            Action::GotoOutputPcb => self.goto_page(Page::OutputPcb),
            Action::ExportProject => self.export_project(),
            Action::DownloadGerbers => {
                for file in GERBER_FILES {
                    log::info!("Downloading gerber file: {}", file);
                }
                self.notify("Gerber files are being downloaded", MessageType::Info);
            }
            Action::OpenDesignTool => {
                log::info!("Design platform: {}", DESIGN_TOOL_URL);
                self.notify(
                    format!("Open {} in a browser", DESIGN_TOOL_URL),
                    MessageType::Info,
                );
            }
            Action::Quit => self.running = false,
        }
    }

    /// Switch to another page. Entering the controller page power-cycles
    /// the simulated device.
    fn goto_page(&mut self, page: Page) {
        if self.page == page {
            return;
        }

        log::info!("Switching page: {} -> {}", self.page.path(), page.path());
        if let Page::NotFound(path) = &page {
            log::warn!("No page registered for route: {}", path);
        }

        if page == Page::Controller {
            self.reset_controller_state();
        }
        self.page = page;
    }
}

impl App {
    /// Feed one front-panel button press through the menu state machine
    fn panel_press(&mut self, input: PanelInput) {
        let entries = self.panel.screen.entries(&self.device);
        let action = self.panel.press(input, &entries);
        self.panel_list_state.select(Some(self.panel.selected));

        if let Some(action) = action {
            self.apply_menu_action(action);
        }
    }

    fn apply_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::CycleNetworkMode => {
                let network = &mut self.device.draft.network;
                network.mode = network.mode.next();
                log_user_interaction("cycle network mode", Some(network.mode.label()));
            }
            MenuAction::SaveNetwork => {
                self.device.save_network();
                log::info!("Network configuration saved");
                self.notify("Network configuration saved", MessageType::Success);
            }
            MenuAction::CycleChipType => {
                self.device.draft.ic.cycle_chip();
                log_user_interaction("cycle chip type", Some(self.device.draft.ic.chip));
            }
            MenuAction::CycleFrequency => {
                self.device.draft.ic.cycle_frequency();
                log_user_interaction("cycle frequency", Some(self.device.draft.ic.frequency));
            }
            MenuAction::CycleColorOrder => {
                self.device.draft.ic.cycle_color_order();
                log_user_interaction("cycle color order", Some(self.device.draft.ic.color_order));
            }
            MenuAction::CycleVoltage => {
                self.device.draft.ic.cycle_voltage();
                log_user_interaction("cycle voltage", Some(self.device.draft.ic.voltage));
            }
            MenuAction::CyclePixelsPerMeter => {
                self.device.draft.ic.cycle_pixels_per_meter();
                let density = self.device.draft.ic.pixels_per_meter.to_string();
                log_user_interaction("cycle pixel density", Some(&density));
            }
            MenuAction::SaveIc => {
                self.device.save_ic();
                log::info!("IC configuration saved");
                self.notify("IC configuration saved", MessageType::Success);
            }
            MenuAction::ToggleOutput(index) => {
                if let Some(output) = self.device.draft.outputs.get_mut(index) {
                    output.active = !output.active;
                }
            }
            MenuAction::SaveOutputs => {
                self.device.save_outputs();
                log::info!("Output configuration saved");
                self.notify("Output configuration saved", MessageType::Success);
            }
            MenuAction::RunTest(kind) => {
                // Placeholder firmware routine, nothing to drive
                log::info!("Test routine triggered: {}", kind.label());
            }
            MenuAction::RunEffect(kind) => {
                log::info!("Effect triggered: {}", kind.label());
            }
        }
    }

    fn move_grid_cursor(&mut self, action: Action) {
        let column = self.grid_cursor % GRID_COLS;
        match action {
            Action::NavigateUp if self.grid_cursor >= GRID_COLS => {
                self.grid_cursor -= GRID_COLS;
            }
            Action::NavigateDown if self.grid_cursor + GRID_COLS < OUTPUT_COUNT => {
                self.grid_cursor += GRID_COLS;
            }
            Action::NavigateLeft if column > 0 => {
                self.grid_cursor -= 1;
            }
            Action::NavigateRight
                if column + 1 < GRID_COLS && self.grid_cursor + 1 < OUTPUT_COUNT =>
            {
                self.grid_cursor += 1;
            }
            _ => {}
        }
    }

    fn toggle_grid_output(&mut self) {
        if let Some(output) = self.device.draft.outputs.get_mut(self.grid_cursor) {
            output.active = !output.active;
            let context = format!("OUT {:02}", self.grid_cursor + 1);
            log_user_interaction("toggle output", Some(&context));
        }
    }

    fn export_project(&mut self) {
        match export::write_export(&self.config.export) {
            Ok(path) => {
                log_export_result(Some(&path), true, None);
                self.notify("Project exported for Celus import", MessageType::Success);
            }
            Err(e) => {
                log_export_result(None, false, Some(&e.to_string()));
                self.notify("Could not export the project", MessageType::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::MessageType;
    use crate::app::config::Config;
    use crate::app::constructor::AppConstructor;
    use crate::app::device::NetworkMode;
    use crate::app::panel::MenuScreen;

    fn app_on(page: Page) -> App {
        App::new_with_config(Config::default(), page).unwrap()
    }

    #[test]
    fn test_entering_controller_resets_device_and_panel() {
        let mut app = app_on(Page::Controller);
        app.focus = Focus::Grid;
        app.handle_action(Action::ToggleOutput);
        assert!(app.device.dirty());

        app.handle_action(Action::GotoSchematic);
        app.handle_action(Action::GotoController);

        assert!(!app.device.dirty());
        assert_eq!(app.panel.screen, MenuScreen::Main);
        assert_eq!(app.panel.selected, 0);
        assert_eq!(app.focus, Focus::Panel);
    }

    #[test]
    fn test_goto_current_page_keeps_state() {
        let mut app = app_on(Page::Controller);
        app.focus = Focus::Grid;
        app.handle_action(Action::ToggleOutput);

        app.handle_action(Action::GotoController);
        assert!(app.device.dirty());
    }

    #[test]
    fn test_grid_cursor_stays_in_bounds() {
        let mut app = app_on(Page::Controller);
        app.focus = Focus::Grid;

        app.handle_action(Action::NavigateUp);
        app.handle_action(Action::NavigateLeft);
        assert_eq!(app.grid_cursor, 0);

        for _ in 0..10 {
            app.handle_action(Action::NavigateRight);
        }
        assert_eq!(app.grid_cursor, GRID_COLS - 1);

        for _ in 0..10 {
            app.handle_action(Action::NavigateDown);
        }
        assert_eq!(app.grid_cursor, OUTPUT_COUNT - 1);

        app.handle_action(Action::NavigateRight);
        app.handle_action(Action::NavigateDown);
        assert_eq!(app.grid_cursor, OUTPUT_COUNT - 1);
    }

    #[test]
    fn test_switch_focus_toggles() {
        let mut app = app_on(Page::Controller);
        assert_eq!(app.focus, Focus::Panel);

        app.handle_action(Action::SwitchFocus);
        assert_eq!(app.focus, Focus::Grid);

        app.handle_action(Action::SwitchFocus);
        assert_eq!(app.focus, Focus::Panel);
    }

    #[test]
    fn test_save_all_clears_pending_changes() {
        let mut app = app_on(Page::Controller);
        app.focus = Focus::Grid;
        app.handle_action(Action::ToggleOutput);
        assert!(app.device.dirty());

        app.handle_action(Action::SaveAll);

        assert!(!app.device.dirty());
        let message = app.status_message.as_ref().unwrap();
        assert_eq!(message.kind, MessageType::Success);
        assert_eq!(message.text, "All settings saved");
    }

    #[test]
    fn test_grid_editing_needs_grid_focus() {
        let mut app = app_on(Page::Controller);

        app.handle_action(Action::ToggleOutput);
        app.handle_action(Action::UniverseInc);
        assert!(!app.device.dirty());
    }

    #[test]
    fn test_universe_keys_clamp() {
        let mut app = app_on(Page::Controller);
        app.focus = Focus::Grid;

        for _ in 0..12 {
            app.handle_action(Action::UniverseInc);
        }
        assert_eq!(app.device.draft.outputs[0].universes, 8);

        for _ in 0..12 {
            app.handle_action(Action::UniverseDec);
        }
        assert_eq!(app.device.draft.outputs[0].universes, 1);
    }

    #[test]
    fn test_panel_enter_cycles_network_mode() {
        let mut app = app_on(Page::Controller);

        // MAIN MENU -> NETWORK -> MODE row
        app.handle_action(Action::NavigateDown);
        app.handle_action(Action::Confirm);
        assert_eq!(app.panel.screen, MenuScreen::Network);

        app.handle_action(Action::Confirm);
        assert_eq!(app.device.draft.network.mode, NetworkMode::Auto);
        assert!(app.device.network_dirty());
    }

    #[test]
    fn test_back_from_grid_returns_to_panel() {
        let mut app = app_on(Page::Controller);
        app.focus = Focus::Grid;

        app.handle_action(Action::Back);
        assert_eq!(app.focus, Focus::Panel);
    }
}
