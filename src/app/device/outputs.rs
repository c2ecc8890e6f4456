/// Physical outputs on the controller.
pub const OUTPUT_COUNT: usize = 32;

/// Universes assignable to a single output.
pub const MAX_UNIVERSES: u8 = 8;

/// DMX channels carried by one universe.
pub const CHANNELS_PER_UNIVERSE: u32 = 512;

/// Per-output settings: how many universes the output consumes and whether
/// it is patched in at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub universes: u8,
    pub active: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            universes: 1,
            active: false,
        }
    }
}

impl OutputConfig {
    /// Assign one more universe, capped at [`MAX_UNIVERSES`].
    pub fn add_universe(&mut self) {
        if self.universes < MAX_UNIVERSES {
            self.universes += 1;
        }
    }

    /// Release one universe, never dropping below one.
    pub fn remove_universe(&mut self) {
        if self.universes > 1 {
            self.universes -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universes_clamp_at_upper_bound() {
        let mut output = OutputConfig::default();
        for _ in 0..20 {
            output.add_universe();
        }
        assert_eq!(output.universes, MAX_UNIVERSES);
    }

    #[test]
    fn test_universes_clamp_at_one() {
        let mut output = OutputConfig::default();
        output.remove_universe();
        output.remove_universe();
        assert_eq!(output.universes, 1);
    }

    #[test]
    fn test_outputs_start_inactive_with_one_universe() {
        let output = OutputConfig::default();
        assert!(!output.active);
        assert_eq!(output.universes, 1);
    }
}
