use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::app::actions::Action;

#[derive(Debug, Deserialize, Serialize)]
pub struct BindsConfig {
    #[serde(default = "BindsConfig::default_navigate_up")]
    pub navigate_up: Vec<String>,
    #[serde(default = "BindsConfig::default_navigate_down")]
    pub navigate_down: Vec<String>,
    #[serde(default = "BindsConfig::default_navigate_left")]
    pub navigate_left: Vec<String>,
    #[serde(default = "BindsConfig::default_navigate_right")]
    pub navigate_right: Vec<String>,
    #[serde(default = "BindsConfig::default_confirm")]
    pub confirm: Vec<String>,
    #[serde(default = "BindsConfig::default_back")]
    pub back: Vec<String>,
    #[serde(default = "BindsConfig::default_switch_focus")]
    pub switch_focus: Vec<String>,
    #[serde(default = "BindsConfig::default_toggle_output")]
    pub toggle_output: Vec<String>,
    #[serde(default = "BindsConfig::default_universe_inc")]
    pub universe_inc: Vec<String>,
    #[serde(default = "BindsConfig::default_universe_dec")]
    pub universe_dec: Vec<String>,
    #[serde(default = "BindsConfig::default_save")]
    pub save: Vec<String>,
    #[serde(default = "BindsConfig::default_export")]
    pub export: Vec<String>,
    #[serde(default = "BindsConfig::default_download_gerbers")]
    pub download_gerbers: Vec<String>,
    #[serde(default = "BindsConfig::default_open_design_tool")]
    pub open_design_tool: Vec<String>,
    #[serde(default = "BindsConfig::default_goto_controller")]
    pub goto_controller: Vec<String>,
    #[serde(default = "BindsConfig::default_goto_schematic")]
    pub goto_schematic: Vec<String>,
    #[serde(default = "BindsConfig::default_goto_main_pcb")]
    pub goto_main_pcb: Vec<String>,
    #[serde(default = "BindsConfig::default_goto_display_pcb")]
    pub goto_display_pcb: Vec<String>,
    #[serde(default = "BindsConfig::default_goto_output_pcb")]
    pub goto_output_pcb: Vec<String>,
    #[serde(default = "BindsConfig::default_quit")]
    pub quit: Vec<String>,
}

impl BindsConfig {
    fn default_navigate_up() -> Vec<String> {
        vec!["k".to_string(), "up".to_string()]
    }
    fn default_navigate_down() -> Vec<String> {
        vec!["j".to_string(), "down".to_string()]
    }
    fn default_navigate_left() -> Vec<String> {
        vec!["h".to_string(), "left".to_string()]
    }
    fn default_navigate_right() -> Vec<String> {
        vec!["l".to_string(), "right".to_string()]
    }
    fn default_confirm() -> Vec<String> {
        vec!["enter".to_string()]
    }
    fn default_back() -> Vec<String> {
        vec!["backspace".to_string(), "esc".to_string()]
    }
    fn default_switch_focus() -> Vec<String> {
        vec!["tab".to_string()]
    }
    fn default_toggle_output() -> Vec<String> {
        vec!["space".to_string()]
    }
    fn default_universe_inc() -> Vec<String> {
        vec!["+".to_string(), "=".to_string()]
    }
    fn default_universe_dec() -> Vec<String> {
        vec!["-".to_string(), "_".to_string()]
    }
    fn default_save() -> Vec<String> {
        vec!["s".to_string()]
    }
    fn default_export() -> Vec<String> {
        vec!["e".to_string()]
    }
    fn default_download_gerbers() -> Vec<String> {
        vec!["g".to_string()]
    }
    fn default_open_design_tool() -> Vec<String> {
        vec!["o".to_string()]
    }
    fn default_goto_controller() -> Vec<String> {
        vec!["1".to_string()]
    }
    fn default_goto_schematic() -> Vec<String> {
        vec!["2".to_string()]
    }
    fn default_goto_main_pcb() -> Vec<String> {
        vec!["3".to_string()]
    }
    fn default_goto_display_pcb() -> Vec<String> {
        vec!["4".to_string()]
    }
    fn default_goto_output_pcb() -> Vec<String> {
        vec!["5".to_string()]
    }
    fn default_quit() -> Vec<String> {
        vec!["q".to_string(), "ctrl-c".to_string()]
    }

    pub fn parse_keybinding(&self, key_str: &str) -> Option<(KeyModifiers, KeyCode)> {
        let key_str = key_str.to_lowercase();

        // Special case for standalone "-" character
        if key_str == "-" {
            return Some((KeyModifiers::NONE, KeyCode::Char('-')));
        }

        let parts: Vec<&str> = key_str.split('-').collect();
        if parts.is_empty() {
            return None;
        }

        let mut modifiers = KeyModifiers::NONE;
        let key_part = parts[parts.len() - 1];

        // Parse modifiers
        for part in &parts[..parts.len() - 1] {
            match *part {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        // Parse key code
        let code = match key_part {
            "esc" => KeyCode::Esc,
            "enter" => KeyCode::Enter,
            "backspace" => KeyCode::Backspace,
            "tab" => KeyCode::Tab,
            "delete" => KeyCode::Delete,
            "insert" => KeyCode::Insert,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "f1" => KeyCode::F(1),
            "f2" => KeyCode::F(2),
            "f3" => KeyCode::F(3),
            "f4" => KeyCode::F(4),
            "f5" => KeyCode::F(5),
            "f6" => KeyCode::F(6),
            "f7" => KeyCode::F(7),
            "f8" => KeyCode::F(8),
            "f9" => KeyCode::F(9),
            "f10" => KeyCode::F(10),
            "f11" => KeyCode::F(11),
            "f12" => KeyCode::F(12),
            // Handle special single-character keys
            "space" => KeyCode::Char(' '),
            // Handle characters - if shift is present, capitalize
            c if c.len() == 1 => {
                let ch = c.chars().next()?;
                if modifiers.contains(KeyModifiers::SHIFT) {
                    KeyCode::Char(ch.to_ascii_uppercase())
                } else {
                    KeyCode::Char(ch)
                }
            }
            _ => return None,
        };

        Some((modifiers, code))
    }

    /// Build the key maps the handler dispatches on: bindings that work on
    /// every page, and bindings that only apply on the controller page.
    pub fn build_key_maps(
        &self,
    ) -> (
        HashMap<(KeyModifiers, KeyCode), Action>,
        HashMap<(KeyModifiers, KeyCode), Action>,
    ) {
        let mut global_map = HashMap::new();
        let mut controller_map = HashMap::new();

        // Global bindings - these work on all pages
        self.add_binding_for_action(&self.switch_focus, Action::SwitchFocus, &mut global_map);
        self.add_binding_for_action(&self.export, Action::ExportProject, &mut global_map);
        self.add_binding_for_action(
            &self.download_gerbers,
            Action::DownloadGerbers,
            &mut global_map,
        );
        self.add_binding_for_action(
            &self.open_design_tool,
            Action::OpenDesignTool,
            &mut global_map,
        );
        self.add_binding_for_action(&self.goto_controller, Action::GotoController, &mut global_map);
        self.add_binding_for_action(&self.goto_schematic, Action::GotoSchematic, &mut global_map);
        self.add_binding_for_action(&self.goto_main_pcb, Action::GotoMainPcb, &mut global_map);
        self.add_binding_for_action(&self.goto_display_pcb, Action::GotoDisplayPcb, &mut global_map);
        self.add_binding_for_action(&self.goto_output_pcb, Action::GotoOutputPcb, &mut global_map);
        self.add_binding_for_action(&self.quit, Action::Quit, &mut global_map);

        // Controller page bindings
        self.add_binding_for_action(&self.navigate_up, Action::NavigateUp, &mut controller_map);
        self.add_binding_for_action(&self.navigate_down, Action::NavigateDown, &mut controller_map);
        self.add_binding_for_action(&self.navigate_left, Action::NavigateLeft, &mut controller_map);
        self.add_binding_for_action(
            &self.navigate_right,
            Action::NavigateRight,
            &mut controller_map,
        );
        self.add_binding_for_action(&self.confirm, Action::Confirm, &mut controller_map);
        self.add_binding_for_action(&self.back, Action::Back, &mut controller_map);
        self.add_binding_for_action(&self.toggle_output, Action::ToggleOutput, &mut controller_map);
        self.add_binding_for_action(&self.universe_inc, Action::UniverseInc, &mut controller_map);
        self.add_binding_for_action(&self.universe_dec, Action::UniverseDec, &mut controller_map);
        self.add_binding_for_action(&self.save, Action::SaveAll, &mut controller_map);

        (global_map, controller_map)
    }

    fn add_binding_for_action(
        &self,
        binding_strings: &[String],
        action: Action,
        map: &mut HashMap<(KeyModifiers, KeyCode), Action>,
    ) {
        for binding_str in binding_strings {
            if let Some(key) = self.parse_keybinding(binding_str) {
                map.insert(key, action);
            }
        }
    }
}

impl Default for BindsConfig {
    fn default() -> Self {
        Self {
            navigate_up: Self::default_navigate_up(),
            navigate_down: Self::default_navigate_down(),
            navigate_left: Self::default_navigate_left(),
            navigate_right: Self::default_navigate_right(),
            confirm: Self::default_confirm(),
            back: Self::default_back(),
            switch_focus: Self::default_switch_focus(),
            toggle_output: Self::default_toggle_output(),
            universe_inc: Self::default_universe_inc(),
            universe_dec: Self::default_universe_dec(),
            save: Self::default_save(),
            export: Self::default_export(),
            download_gerbers: Self::default_download_gerbers(),
            open_design_tool: Self::default_open_design_tool(),
            goto_controller: Self::default_goto_controller(),
            goto_schematic: Self::default_goto_schematic(),
            goto_main_pcb: Self::default_goto_main_pcb(),
            goto_display_pcb: Self::default_goto_display_pcb(),
            goto_output_pcb: Self::default_goto_output_pcb(),
            quit: Self::default_quit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keybinding_named_keys() {
        let binds = BindsConfig::default();
        assert_eq!(
            binds.parse_keybinding("space"),
            Some((KeyModifiers::NONE, KeyCode::Char(' ')))
        );
        assert_eq!(
            binds.parse_keybinding("esc"),
            Some((KeyModifiers::NONE, KeyCode::Esc))
        );
        assert_eq!(
            binds.parse_keybinding("tab"),
            Some((KeyModifiers::NONE, KeyCode::Tab))
        );
    }

    #[test]
    fn test_parse_keybinding_modifiers() {
        let binds = BindsConfig::default();
        assert_eq!(
            binds.parse_keybinding("ctrl-c"),
            Some((KeyModifiers::CONTROL, KeyCode::Char('c')))
        );
        assert_eq!(
            binds.parse_keybinding("shift-a"),
            Some((KeyModifiers::SHIFT, KeyCode::Char('A')))
        );
    }

    #[test]
    fn test_parse_keybinding_bare_dash() {
        let binds = BindsConfig::default();
        assert_eq!(
            binds.parse_keybinding("-"),
            Some((KeyModifiers::NONE, KeyCode::Char('-')))
        );
    }

    #[test]
    fn test_parse_keybinding_rejects_unknown() {
        let binds = BindsConfig::default();
        assert_eq!(binds.parse_keybinding("hyper-x"), None);
        assert_eq!(binds.parse_keybinding("doubleclick"), None);
    }

    #[test]
    fn test_build_key_maps_covers_defaults() {
        let binds = BindsConfig::default();
        let (global_map, controller_map) = binds.build_key_maps();

        assert_eq!(
            global_map.get(&(KeyModifiers::NONE, KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            global_map.get(&(KeyModifiers::NONE, KeyCode::Char('1'))),
            Some(&Action::GotoController)
        );
        assert_eq!(
            controller_map.get(&(KeyModifiers::NONE, KeyCode::Enter)),
            Some(&Action::Confirm)
        );
        assert_eq!(
            controller_map.get(&(KeyModifiers::NONE, KeyCode::Char(' '))),
            Some(&Action::ToggleOutput)
        );
    }
}
