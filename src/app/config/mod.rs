pub mod binds;
pub mod colors;
pub mod config;
pub mod export;
pub mod logging;

pub use config::Config;
pub use export::ExportConfig;
pub use logging::LoggingConfig;
