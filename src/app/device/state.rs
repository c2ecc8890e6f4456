use std::time::{Duration, Instant};

use rand::Rng;

use crate::app::device::ic::IcConfig;
use crate::app::device::network::NetworkConfig;
use crate::app::device::outputs::{CHANNELS_PER_UNIVERSE, OUTPUT_COUNT, OutputConfig};
use crate::app::device::stats::{ArtnetStatus, SystemStats};

/// Everything the save actions commit. Held twice on [`DeviceState`] so the
/// draft being edited can be compared against the committed copy.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceConfig {
    pub network: NetworkConfig,
    pub ic: IcConfig,
    pub outputs: Vec<OutputConfig>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            ic: IcConfig::default(),
            outputs: vec![OutputConfig::default(); OUTPUT_COUNT],
        }
    }
}

/// The simulated controller: committed settings, the draft being edited on
/// the panel, and read-only telemetry. Created fresh every time the
/// controller page is entered and dropped when it is left.
#[derive(Debug)]
pub struct DeviceState {
    pub committed: DeviceConfig,
    pub draft: DeviceConfig,
    pub artnet: ArtnetStatus,
    pub stats: SystemStats,
    pub packets_total: u64,
    pub packets_per_sec: u32,
    started: Instant,
}

impl DeviceState {
    pub fn new() -> Self {
        Self {
            committed: DeviceConfig::default(),
            draft: DeviceConfig::default(),
            artnet: ArtnetStatus::default(),
            stats: SystemStats::default(),
            packets_total: 0,
            packets_per_sec: 0,
            started: Instant::now(),
        }
    }

    /// True while any draft section differs from its committed copy.
    pub fn dirty(&self) -> bool {
        self.draft != self.committed
    }

    pub fn network_dirty(&self) -> bool {
        self.draft.network != self.committed.network
    }

    pub fn ic_dirty(&self) -> bool {
        self.draft.ic != self.committed.ic
    }

    pub fn outputs_dirty(&self) -> bool {
        self.draft.outputs != self.committed.outputs
    }

    pub fn save_network(&mut self) {
        self.committed.network = self.draft.network.clone();
    }

    pub fn save_ic(&mut self) {
        self.committed.ic = self.draft.ic.clone();
    }

    pub fn save_outputs(&mut self) {
        self.committed.outputs = self.draft.outputs.clone();
    }

    pub fn save_all(&mut self) {
        self.committed = self.draft.clone();
    }

    /// Outputs currently patched in, counted on the draft since the grid
    /// edits live.
    pub fn active_outputs(&self) -> usize {
        self.draft.outputs.iter().filter(|o| o.active).count()
    }

    /// Universes consumed by active outputs only.
    pub fn total_universes(&self) -> u32 {
        self.draft
            .outputs
            .iter()
            .filter(|o| o.active)
            .map(|o| u32::from(o.universes))
            .sum()
    }

    pub fn total_channels(&self) -> u32 {
        self.total_universes() * CHANNELS_PER_UNIVERSE
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Advance the once-per-second simulation: the node "receives" a random
    /// burst of 5 to 14 ART-NET packets.
    pub fn tick(&mut self) {
        let burst: u32 = rand::thread_rng().gen_range(5..15);
        self.packets_per_sec = burst;
        self.packets_total += u64::from(burst);
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_has_no_unsaved_changes() {
        let device = DeviceState::new();
        assert!(!device.dirty());
        assert_eq!(device.draft.outputs.len(), OUTPUT_COUNT);
        assert_eq!(device.packets_total, 0);
    }

    #[test]
    fn test_toggle_twice_restores_clean_state() {
        let mut device = DeviceState::new();
        device.draft.outputs[3].active = !device.draft.outputs[3].active;
        assert!(device.dirty());
        assert!(device.outputs_dirty());

        device.draft.outputs[3].active = !device.draft.outputs[3].active;
        assert!(!device.dirty());
    }

    #[test]
    fn test_section_save_copies_only_that_section() {
        let mut device = DeviceState::new();
        device.draft.network.mode = device.draft.network.mode.next();
        device.draft.ic.cycle_chip();
        assert!(device.network_dirty());
        assert!(device.ic_dirty());

        device.save_network();
        assert!(!device.network_dirty());
        assert!(device.ic_dirty());
        assert_eq!(device.committed.network, device.draft.network);
    }

    #[test]
    fn test_save_all_copies_draft_exactly() {
        let mut device = DeviceState::new();
        device.draft.network.mode = device.draft.network.mode.next();
        device.draft.ic.cycle_voltage();
        device.draft.outputs[0].active = true;
        device.draft.outputs[0].add_universe();

        device.save_all();
        assert!(!device.dirty());
        assert_eq!(device.committed, device.draft);
    }

    #[test]
    fn test_totals_count_active_outputs_only() {
        let mut device = DeviceState::new();
        assert_eq!(device.active_outputs(), 0);
        assert_eq!(device.total_universes(), 0);

        device.draft.outputs[0].active = true;
        device.draft.outputs[0].universes = 4;
        device.draft.outputs[1].universes = 8; // inactive, must not count
        device.draft.outputs[2].active = true;

        assert_eq!(device.active_outputs(), 2);
        assert_eq!(device.total_universes(), 5);
        assert_eq!(device.total_channels(), 5 * CHANNELS_PER_UNIVERSE);
    }

    #[test]
    fn test_tick_bursts_stay_in_range() {
        let mut device = DeviceState::new();
        let mut total = 0u64;
        for _ in 0..50 {
            device.tick();
            assert!((5..=14).contains(&device.packets_per_sec));
            total += u64::from(device.packets_per_sec);
        }
        assert_eq!(device.packets_total, total);
    }
}
