/// Addressing modes of the simulated Ethernet interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkMode {
    Auto,
    Broadcast,
    Fixed,
}

impl NetworkMode {
    /// Label shown on the LCD panel and the network widget.
    pub fn label(&self) -> &'static str {
        match self {
            NetworkMode::Auto => "AUTO",
            NetworkMode::Broadcast => "BROADCAST",
            NetworkMode::Fixed => "FIXED",
        }
    }

    /// Cycling order used by the MODE row: AUTO -> BROADCAST -> FIXED.
    pub fn next(&self) -> Self {
        match self {
            NetworkMode::Auto => NetworkMode::Broadcast,
            NetworkMode::Broadcast => NetworkMode::Fixed,
            NetworkMode::Fixed => NetworkMode::Auto,
        }
    }
}

/// Address the simulated DHCP lease hands out in AUTO mode.
const DHCP_LEASED_IP: &str = "192.168.1.105";

/// Address used when the node broadcasts to the whole ART-NET net.
const BROADCAST_IP: &str = "2.255.255.255";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub ip: String,
    pub subnet: String,
    pub gateway: String,
    pub mode: NetworkMode,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ip: "192.168.1.100".to_string(),
            subnet: "255.255.255.0".to_string(),
            gateway: "192.168.1.1".to_string(),
            mode: NetworkMode::Fixed,
        }
    }
}

impl NetworkConfig {
    /// Effective address as derived from the addressing mode. Only FIXED
    /// mode uses the configured address directly.
    pub fn current_ip(&self) -> &str {
        match self.mode {
            NetworkMode::Auto => DHCP_LEASED_IP,
            NetworkMode::Broadcast => BROADCAST_IP,
            NetworkMode::Fixed => &self.ip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycle_wraps_around() {
        let mut mode = NetworkMode::Auto;
        mode = mode.next();
        assert_eq!(mode, NetworkMode::Broadcast);
        mode = mode.next();
        assert_eq!(mode, NetworkMode::Fixed);
        mode = mode.next();
        assert_eq!(mode, NetworkMode::Auto);
    }

    #[test]
    fn test_current_ip_follows_mode() {
        let mut config = NetworkConfig::default();
        assert_eq!(config.current_ip(), "192.168.1.100");

        config.mode = NetworkMode::Auto;
        assert_eq!(config.current_ip(), "192.168.1.105");

        config.mode = NetworkMode::Broadcast;
        assert_eq!(config.current_ip(), "2.255.255.255");
    }

    #[test]
    fn test_defaults_describe_fixed_lan_address() {
        let config = NetworkConfig::default();
        assert_eq!(config.mode, NetworkMode::Fixed);
        assert_eq!(config.subnet, "255.255.255.0");
        assert_eq!(config.gateway, "192.168.1.1");
    }
}
