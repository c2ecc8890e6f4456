use crate::app::device::DeviceState;
use crate::app::device::stats::{FIRMWARE_VERSION, format_uptime};

/// Screens of the simulated front-panel LCD. MAIN is the home screen every
/// other screen backs out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuScreen {
    Main,
    Artnet,
    Network,
    IcConfig,
    OutputsConfig,
    Test,
    Effects,
    SystemInfo,
}

/// Placeholder test routines on the TEST screen. The simulated firmware
/// only logs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    All,
    Channel,
    Rgb,
    Reset,
}

impl TestKind {
    pub fn label(&self) -> &'static str {
        match self {
            TestKind::All => "TEST ALL",
            TestKind::Channel => "TEST CHANNEL",
            TestKind::Rgb => "TEST RGB",
            TestKind::Reset => "RESET OUTPUTS",
        }
    }
}

/// Placeholder lighting effects on the EFFECTS screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Rainbow,
    Fade,
    Strobe,
    Chase,
}

impl EffectKind {
    pub fn label(&self) -> &'static str {
        match self {
            EffectKind::Rainbow => "RAINBOW",
            EffectKind::Fade => "FADE",
            EffectKind::Strobe => "STROBE",
            EffectKind::Chase => "CHASE",
        }
    }
}

/// Leaf actions a menu row fires when confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CycleNetworkMode,
    SaveNetwork,
    CycleChipType,
    CycleFrequency,
    CycleColorOrder,
    CycleVoltage,
    CyclePixelsPerMeter,
    SaveIc,
    ToggleOutput(usize),
    SaveOutputs,
    RunTest(TestKind),
    RunEffect(EffectKind),
}

/// What confirming a highlighted row does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Descend into another screen.
    Submenu(MenuScreen),
    /// Fire a leaf action.
    Action(MenuAction),
    /// Inert display row.
    Readout,
}

/// One row of the current screen: a label, an optional value shown
/// right-aligned, and what Enter does on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub value: Option<String>,
    pub kind: EntryKind,
}

impl MenuEntry {
    fn submenu(label: &str, target: MenuScreen) -> Self {
        Self {
            label: label.to_string(),
            value: None,
            kind: EntryKind::Submenu(target),
        }
    }

    fn action(label: &str, action: MenuAction) -> Self {
        Self {
            label: label.to_string(),
            value: None,
            kind: EntryKind::Action(action),
        }
    }

    fn setting(label: &str, value: String, action: MenuAction) -> Self {
        Self {
            label: label.to_string(),
            value: Some(value),
            kind: EntryKind::Action(action),
        }
    }

    fn readout(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value: Some(value),
            kind: EntryKind::Readout,
        }
    }
}

impl MenuScreen {
    /// Caption shown on the second LCD line.
    pub fn title(&self) -> &'static str {
        match self {
            MenuScreen::Main => "MAIN MENU",
            MenuScreen::Artnet => "ART-NET CONFIG",
            MenuScreen::Network => "NETWORK CONFIG",
            MenuScreen::IcConfig => "IC CONFIG",
            MenuScreen::OutputsConfig => "OUTPUTS CONFIG",
            MenuScreen::Test => "TEST MODE",
            MenuScreen::Effects => "EFFECTS",
            MenuScreen::SystemInfo => "SYSTEM INFO",
        }
    }

    /// Build the option list for this screen from the current device state.
    /// The list is rebuilt on every render so values always track the draft.
    pub fn entries(&self, device: &DeviceState) -> Vec<MenuEntry> {
        match self {
            MenuScreen::Main => vec![
                MenuEntry::submenu("ART-NET", MenuScreen::Artnet),
                MenuEntry::submenu("NETWORK", MenuScreen::Network),
                MenuEntry::submenu("IC CONFIG", MenuScreen::IcConfig),
                MenuEntry::submenu("OUTPUTS", MenuScreen::OutputsConfig),
                MenuEntry::submenu("TEST", MenuScreen::Test),
                MenuEntry::submenu("EFFECTS", MenuScreen::Effects),
                MenuEntry::submenu("SYSTEM INFO", MenuScreen::SystemInfo),
            ],
            MenuScreen::Artnet => {
                let status = if device.artnet.link_up {
                    "CONNECTED"
                } else {
                    "DISCONNECTED"
                };
                vec![
                    MenuEntry::readout("UNIVERSE", format!("{:03}", device.artnet.universe)),
                    MenuEntry::readout("SUBNET", format!("{:03}", device.artnet.subnet)),
                    MenuEntry::readout("NET", format!("{:03}", device.artnet.net)),
                    MenuEntry::readout("STATUS", status.to_string()),
                ]
            }
            MenuScreen::Network => {
                let network = &device.draft.network;
                vec![
                    MenuEntry::setting(
                        "MODE",
                        network.mode.label().to_string(),
                        MenuAction::CycleNetworkMode,
                    ),
                    MenuEntry::readout("IP", network.current_ip().to_string()),
                    MenuEntry::readout("SUBNET", network.subnet.clone()),
                    MenuEntry::readout("GATEWAY", network.gateway.clone()),
                    MenuEntry::action("SAVE CONFIG", MenuAction::SaveNetwork),
                ]
            }
            MenuScreen::IcConfig => {
                let ic = &device.draft.ic;
                vec![
                    MenuEntry::setting("TYPE", ic.chip.to_string(), MenuAction::CycleChipType),
                    MenuEntry::setting("FREQ", ic.frequency.to_string(), MenuAction::CycleFrequency),
                    MenuEntry::setting(
                        "ORDER",
                        ic.color_order.to_string(),
                        MenuAction::CycleColorOrder,
                    ),
                    MenuEntry::setting("VOLTAGE", ic.voltage.to_string(), MenuAction::CycleVoltage),
                    MenuEntry::setting(
                        "PX/M",
                        ic.pixels_per_meter.to_string(),
                        MenuAction::CyclePixelsPerMeter,
                    ),
                    MenuEntry::action("SAVE IC CFG", MenuAction::SaveIc),
                ]
            }
            MenuScreen::OutputsConfig => {
                let mut entries: Vec<MenuEntry> = device
                    .draft
                    .outputs
                    .iter()
                    .enumerate()
                    .map(|(index, output)| {
                        let state = if output.active { "ON" } else { "OFF" };
                        MenuEntry::setting(
                            &format!("OUT {:02}", index + 1),
                            format!("{}U {}", output.universes, state),
                            MenuAction::ToggleOutput(index),
                        )
                    })
                    .collect();
                entries.push(MenuEntry::action("SAVE OUTPUTS", MenuAction::SaveOutputs));
                entries
            }
            MenuScreen::Test => vec![
                MenuEntry::action(TestKind::All.label(), MenuAction::RunTest(TestKind::All)),
                MenuEntry::action(
                    TestKind::Channel.label(),
                    MenuAction::RunTest(TestKind::Channel),
                ),
                MenuEntry::action(TestKind::Rgb.label(), MenuAction::RunTest(TestKind::Rgb)),
                MenuEntry::action(TestKind::Reset.label(), MenuAction::RunTest(TestKind::Reset)),
            ],
            MenuScreen::Effects => vec![
                MenuEntry::action(
                    EffectKind::Rainbow.label(),
                    MenuAction::RunEffect(EffectKind::Rainbow),
                ),
                MenuEntry::action(
                    EffectKind::Fade.label(),
                    MenuAction::RunEffect(EffectKind::Fade),
                ),
                MenuEntry::action(
                    EffectKind::Strobe.label(),
                    MenuAction::RunEffect(EffectKind::Strobe),
                ),
                MenuEntry::action(
                    EffectKind::Chase.label(),
                    MenuAction::RunEffect(EffectKind::Chase),
                ),
            ],
            MenuScreen::SystemInfo => vec![
                MenuEntry::readout("FIRMWARE", FIRMWARE_VERSION.to_string()),
                MenuEntry::readout("UPTIME", format_uptime(device.uptime())),
                MenuEntry::readout("TEMP", format!("{:.0}C", device.stats.temperature_c)),
                MenuEntry::readout("VOLTAGE", format!("{:.1}V", device.stats.voltage_v)),
                MenuEntry::readout("CURRENT", format!("{:.1}A", device.stats.current_a)),
                MenuEntry::readout("PACKETS", device.packets_total.to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_screen_lists_every_submenu() {
        let device = DeviceState::new();
        let entries = MenuScreen::Main.entries(&device);
        assert_eq!(entries.len(), 7);
        assert!(entries
            .iter()
            .all(|e| matches!(e.kind, EntryKind::Submenu(_))));
    }

    #[test]
    fn test_artnet_rows_are_inert_readouts() {
        let device = DeviceState::new();
        let entries = MenuScreen::Artnet.entries(&device);
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.kind == EntryKind::Readout));
        assert_eq!(entries[0].value.as_deref(), Some("001"));
        assert_eq!(entries[3].value.as_deref(), Some("CONNECTED"));
    }

    #[test]
    fn test_outputs_screen_has_row_per_output_plus_save() {
        let device = DeviceState::new();
        let entries = MenuScreen::OutputsConfig.entries(&device);
        assert_eq!(entries.len(), 33);
        assert_eq!(entries[0].label, "OUT 01");
        assert_eq!(entries[0].value.as_deref(), Some("1U OFF"));
        assert_eq!(
            entries.last().map(|e| &e.kind),
            Some(&EntryKind::Action(MenuAction::SaveOutputs))
        );
    }

    #[test]
    fn test_network_rows_track_the_draft() {
        let mut device = DeviceState::new();
        device.draft.network.mode = device.draft.network.mode.next();

        let entries = MenuScreen::Network.entries(&device);
        assert_eq!(entries[0].value.as_deref(), Some("AUTO"));
        assert_eq!(entries[1].value.as_deref(), Some("192.168.1.105"));
    }

    #[test]
    fn test_system_info_reports_firmware_and_packets() {
        let mut device = DeviceState::new();
        device.tick();
        let entries = MenuScreen::SystemInfo.entries(&device);
        assert_eq!(entries[0].value.as_deref(), Some(FIRMWARE_VERSION));
        assert_eq!(
            entries[5].value.as_deref(),
            Some(device.packets_total.to_string().as_str())
        );
    }
}
