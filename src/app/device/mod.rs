pub mod ic;
pub mod network;
pub mod outputs;
pub mod state;
pub mod stats;

pub use ic::IcConfig;
pub use network::{NetworkConfig, NetworkMode};
pub use outputs::{CHANNELS_PER_UNIVERSE, MAX_UNIVERSES, OUTPUT_COUNT, OutputConfig};
pub use state::{DeviceConfig, DeviceState};
pub use stats::{ArtnetStatus, SystemStats};
