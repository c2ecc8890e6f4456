/// Driver chips the controller claims to support, in panel cycling order.
pub const CHIP_TYPES: &[&str] = &[
    "WS2811", "WS2812", "WS2812B", "SK6812", "APA102", "APA104", "UCS1903", "TM1809", "TM1804",
];

/// Data clock presets.
pub const FREQUENCIES: &[&str] = &["400kHz", "800kHz"];

/// Wire orders of the color channels.
pub const COLOR_ORDERS: &[&str] = &["RGB", "GRB", "RBG", "BRG", "BGR", "GBR"];

/// Strip supply voltages.
pub const VOLTAGES: &[&str] = &["5V", "12V", "24V"];

/// Common strip densities.
pub const PIXELS_PER_METER: &[u16] = &[30, 60, 96, 144];

/// Advance to the next preset, wrapping at the end of the list. Unknown
/// values restart the cycle from the first preset.
fn cycle<T: Copy + PartialEq>(presets: &[T], current: T) -> T {
    let index = presets.iter().position(|v| *v == current).unwrap_or(0);
    presets[(index + 1) % presets.len()]
}

/// LED strip driver settings edited on the IC CONFIG screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcConfig {
    pub chip: &'static str,
    pub frequency: &'static str,
    pub color_order: &'static str,
    pub voltage: &'static str,
    pub pixels_per_meter: u16,
}

impl Default for IcConfig {
    fn default() -> Self {
        Self {
            chip: "WS2811",
            frequency: "400kHz",
            color_order: "GRB",
            voltage: "5V",
            pixels_per_meter: 60,
        }
    }
}

impl IcConfig {
    pub fn cycle_chip(&mut self) {
        self.chip = cycle(CHIP_TYPES, self.chip);
    }

    pub fn cycle_frequency(&mut self) {
        self.frequency = cycle(FREQUENCIES, self.frequency);
    }

    pub fn cycle_color_order(&mut self) {
        self.color_order = cycle(COLOR_ORDERS, self.color_order);
    }

    pub fn cycle_voltage(&mut self) {
        self.voltage = cycle(VOLTAGES, self.voltage);
    }

    pub fn cycle_pixels_per_meter(&mut self) {
        self.pixels_per_meter = cycle(PIXELS_PER_METER, self.pixels_per_meter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_advances_and_wraps() {
        let mut ic = IcConfig::default();
        assert_eq!(ic.frequency, "400kHz");
        ic.cycle_frequency();
        assert_eq!(ic.frequency, "800kHz");
        ic.cycle_frequency();
        assert_eq!(ic.frequency, "400kHz");
    }

    #[test]
    fn test_chip_cycle_visits_every_preset() {
        let mut ic = IcConfig::default();
        for expected in CHIP_TYPES.iter().cycle().skip(1).take(CHIP_TYPES.len()) {
            ic.cycle_chip();
            assert_eq!(ic.chip, *expected);
        }
        assert_eq!(ic.chip, "WS2811");
    }

    #[test]
    fn test_density_cycle_follows_preset_list() {
        let mut ic = IcConfig::default();
        assert_eq!(ic.pixels_per_meter, 60);
        ic.cycle_pixels_per_meter();
        assert_eq!(ic.pixels_per_meter, 96);
        ic.cycle_pixels_per_meter();
        assert_eq!(ic.pixels_per_meter, 144);
        ic.cycle_pixels_per_meter();
        assert_eq!(ic.pixels_per_meter, 30);
    }
}
