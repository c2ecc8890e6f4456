pub mod header;
pub mod network;
pub mod outputs_grid;
pub mod panel;
pub mod system;
pub mod tables;
pub mod toast;

pub use header::{
    create_footer, create_header, create_page_footer, create_page_header, create_summary,
};
pub use network::create_network_panel;
pub use system::create_system_strip;
pub use tables::{
    create_bullet_list, create_component_table, create_pinout_table, create_spec_table,
};
