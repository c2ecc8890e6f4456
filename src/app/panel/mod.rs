pub mod menu;
pub mod state;

pub use menu::{EffectKind, EntryKind, MenuAction, MenuEntry, MenuScreen, TestKind};
pub use state::{PanelInput, PanelState};
