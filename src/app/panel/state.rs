use super::menu::{EntryKind, MenuAction, MenuEntry, MenuScreen};

/// The four physical buttons of the front panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInput {
    Up,
    Down,
    Enter,
    Back,
}

/// Cursor position on the simulated LCD menu.
///
/// The selection clamps at both ends instead of wrapping, matching the
/// feel of the real ART-NET controllers this panel imitates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub screen: MenuScreen,
    pub selected: usize,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            screen: MenuScreen::Main,
            selected: 0,
        }
    }
}

impl PanelState {
    /// Apply one button press against the entry list of the current screen.
    /// Returns the leaf action to run, if the press confirmed one.
    pub fn press(&mut self, input: PanelInput, entries: &[MenuEntry]) -> Option<MenuAction> {
        match input {
            PanelInput::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            PanelInput::Down => {
                if self.selected + 1 < entries.len() {
                    self.selected += 1;
                }
                None
            }
            PanelInput::Back => {
                if self.screen != MenuScreen::Main {
                    self.screen = MenuScreen::Main;
                    self.selected = 0;
                }
                None
            }
            PanelInput::Enter => match entries.get(self.selected).map(|entry| &entry.kind) {
                Some(EntryKind::Submenu(target)) => {
                    self.screen = *target;
                    self.selected = 0;
                    None
                }
                Some(EntryKind::Action(action)) => Some(*action),
                Some(EntryKind::Readout) | None => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::device::DeviceState;

    #[test]
    fn test_up_clamps_at_first_row() {
        let device = DeviceState::new();
        let entries = MenuScreen::Main.entries(&device);
        let mut panel = PanelState::default();

        assert_eq!(panel.press(PanelInput::Up, &entries), None);
        assert_eq!(panel.selected, 0);
    }

    #[test]
    fn test_down_clamps_at_last_row() {
        let device = DeviceState::new();
        let entries = MenuScreen::Main.entries(&device);
        let mut panel = PanelState::default();

        for _ in 0..entries.len() + 3 {
            panel.press(PanelInput::Down, &entries);
        }
        assert_eq!(panel.selected, entries.len() - 1);
    }

    #[test]
    fn test_selection_stays_in_bounds_under_any_sequence() {
        let device = DeviceState::new();
        let entries = MenuScreen::Network.entries(&device);
        let mut panel = PanelState {
            screen: MenuScreen::Network,
            selected: 0,
        };

        let presses = [
            PanelInput::Down,
            PanelInput::Down,
            PanelInput::Up,
            PanelInput::Down,
            PanelInput::Down,
            PanelInput::Down,
            PanelInput::Down,
            PanelInput::Up,
            PanelInput::Up,
            PanelInput::Up,
            PanelInput::Up,
            PanelInput::Up,
        ];
        for press in presses {
            panel.press(press, &entries);
            assert!(panel.selected < entries.len());
        }
    }

    #[test]
    fn test_back_returns_to_main_and_resets_cursor() {
        let device = DeviceState::new();
        let screens = [
            MenuScreen::Artnet,
            MenuScreen::Network,
            MenuScreen::IcConfig,
            MenuScreen::OutputsConfig,
            MenuScreen::Test,
            MenuScreen::Effects,
            MenuScreen::SystemInfo,
        ];

        for screen in screens {
            let entries = screen.entries(&device);
            let mut panel = PanelState {
                screen,
                selected: 2,
            };
            panel.press(PanelInput::Back, &entries);
            assert_eq!(panel.screen, MenuScreen::Main);
            assert_eq!(panel.selected, 0);
        }
    }

    #[test]
    fn test_back_on_main_is_inert() {
        let device = DeviceState::new();
        let entries = MenuScreen::Main.entries(&device);
        let mut panel = PanelState::default();
        panel.press(PanelInput::Down, &entries);

        panel.press(PanelInput::Back, &entries);
        assert_eq!(panel.screen, MenuScreen::Main);
        assert_eq!(panel.selected, 1);
    }

    #[test]
    fn test_enter_on_submenu_descends_and_resets_cursor() {
        let device = DeviceState::new();
        let entries = MenuScreen::Main.entries(&device);
        let mut panel = PanelState::default();
        panel.press(PanelInput::Down, &entries);

        let action = panel.press(PanelInput::Enter, &entries);
        assert_eq!(action, None);
        assert_eq!(panel.screen, MenuScreen::Network);
        assert_eq!(panel.selected, 0);
    }

    #[test]
    fn test_enter_on_readout_does_nothing() {
        let device = DeviceState::new();
        let entries = MenuScreen::Artnet.entries(&device);
        let mut panel = PanelState {
            screen: MenuScreen::Artnet,
            selected: 0,
        };

        let action = panel.press(PanelInput::Enter, &entries);
        assert_eq!(action, None);
        assert_eq!(panel.screen, MenuScreen::Artnet);
    }

    #[test]
    fn test_enter_on_setting_returns_its_action() {
        let device = DeviceState::new();
        let entries = MenuScreen::Network.entries(&device);
        let mut panel = PanelState {
            screen: MenuScreen::Network,
            selected: 0,
        };

        let action = panel.press(PanelInput::Enter, &entries);
        assert_eq!(action, Some(MenuAction::CycleNetworkMode));
    }
}
