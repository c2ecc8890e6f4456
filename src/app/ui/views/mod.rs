pub mod controller;
pub mod display_pcb;
pub mod main_pcb;
pub mod not_found;
pub mod output_pcb;
pub mod page;
pub mod schematic;

pub use page::{Focus, Page};
