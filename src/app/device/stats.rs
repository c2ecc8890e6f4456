use std::time::Duration;

/// Firmware revision reported on the SYSTEM INFO screen.
pub const FIRMWARE_VERSION: &str = "2.1.4";

/// Link speed shown on the network widget.
pub const DATA_RATE: &str = "125 Mbps";

/// Electrical readings shown on the dashboard. The simulation never varies
/// them; they are the figures printed in the product documentation.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemStats {
    pub temperature_c: f32,
    pub voltage_v: f32,
    pub current_a: f32,
}

impl Default for SystemStats {
    fn default() -> Self {
        Self {
            temperature_c: 42.0,
            voltage_v: 5.0,
            current_a: 15.2,
        }
    }
}

/// Read-only ART-NET node status shown on the ART-NET screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtnetStatus {
    pub universe: u16,
    pub subnet: u8,
    pub net: u8,
    pub link_up: bool,
}

impl Default for ArtnetStatus {
    fn default() -> Self {
        Self {
            universe: 1,
            subnet: 0,
            net: 0,
            link_up: true,
        }
    }
}

/// Format an uptime as HH:MM:SS, hours not wrapping at 24.
pub fn format_uptime(uptime: Duration) -> String {
    let total_seconds = uptime.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime_pads_fields() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(61)), "00:01:01");
        assert_eq!(format_uptime(Duration::from_secs(3661)), "01:01:01");
    }

    #[test]
    fn test_format_uptime_keeps_counting_past_a_day() {
        assert_eq!(format_uptime(Duration::from_secs(90_000)), "25:00:00");
    }
}
