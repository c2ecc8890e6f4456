use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::app::actions::Action;
use crate::app::ui::{Focus, Page};

/// Key binding definitions resolved into lookup maps
#[derive(Debug)]
pub struct KeyBinds {
    global_map: HashMap<(KeyModifiers, KeyCode), Action>,
    controller_map: HashMap<(KeyModifiers, KeyCode), Action>,
}

impl KeyBinds {
    pub fn new(
        global_map: HashMap<(KeyModifiers, KeyCode), Action>,
        controller_map: HashMap<(KeyModifiers, KeyCode), Action>,
    ) -> Self {
        Self {
            global_map,
            controller_map,
        }
    }

    /// Resolve a key event into an action for the current page and focus.
    pub fn handle_key(&self, key: KeyEvent, page: &Page, focus: &Focus) -> Option<Action> {
        let key_tuple = (key.modifiers, key.code);

        // Global bindings take priority on every page
        if let Some(action) = self.global_map.get(&key_tuple) {
            return Some(*action);
        }

        // The rest only applies on the controller page
        if *page != Page::Controller {
            return None;
        }

        let action = *self.controller_map.get(&key_tuple)?;

        // The panel has no horizontal axis, so sideways movement doubles
        // as back/confirm there, matching the four physical buttons
        match (action, focus) {
            (Action::NavigateLeft, Focus::Panel) => Some(Action::Back),
            (Action::NavigateRight, Focus::Panel) => Some(Action::Confirm),
            _ => Some(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::binds::BindsConfig;

    fn key_binds() -> KeyBinds {
        let (global_map, controller_map) = BindsConfig::default().build_key_maps();
        KeyBinds::new(global_map, controller_map)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_global_bindings_work_on_every_page() {
        let binds = key_binds();
        let pages = [
            Page::Controller,
            Page::Schematic,
            Page::MainPcb,
            Page::NotFound("/nope".to_string()),
        ];
        for page in pages {
            assert_eq!(
                binds.handle_key(press(KeyCode::Char('q')), &page, &Focus::Panel),
                Some(Action::Quit)
            );
            assert_eq!(
                binds.handle_key(press(KeyCode::Char('1')), &page, &Focus::Panel),
                Some(Action::GotoController)
            );
        }
    }

    #[test]
    fn test_left_on_panel_becomes_back() {
        let binds = key_binds();
        assert_eq!(
            binds.handle_key(press(KeyCode::Left), &Page::Controller, &Focus::Panel),
            Some(Action::Back)
        );
        assert_eq!(
            binds.handle_key(press(KeyCode::Right), &Page::Controller, &Focus::Panel),
            Some(Action::Confirm)
        );
    }

    #[test]
    fn test_left_on_grid_stays_navigation() {
        let binds = key_binds();
        assert_eq!(
            binds.handle_key(press(KeyCode::Left), &Page::Controller, &Focus::Grid),
            Some(Action::NavigateLeft)
        );
    }

    #[test]
    fn test_controller_bindings_ignored_on_other_pages() {
        let binds = key_binds();
        assert_eq!(
            binds.handle_key(press(KeyCode::Enter), &Page::Schematic, &Focus::Panel),
            None
        );
        assert_eq!(
            binds.handle_key(press(KeyCode::Char(' ')), &Page::MainPcb, &Focus::Grid),
            None
        );
    }
}
