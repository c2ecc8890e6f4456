pub use crate::app::main_loop::AppMainLoop;
pub use app::{App, MessageType, StatusMessage};
pub use config::Config;
pub use ui::{Focus, Page};

// Module declarations
pub mod actions;
pub mod app;
pub mod binds_handler;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constructor;
pub mod device;
pub mod event_handlers;
pub mod export;
pub mod logging;
pub mod main_loop;
pub mod navigation;
pub mod panel;
pub mod terminal;
pub mod ui;
