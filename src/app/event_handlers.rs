use crossterm::event::{Event, KeyEvent, KeyEventKind};

use super::App;
use crate::app::actions::Action;
use crate::app::navigation::Navigation;

/// Trait for event handling
pub trait EventHandlers {
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()>;
    fn on_key_event(&mut self, key: KeyEvent);
    fn quit(&mut self);
}

impl EventHandlers for App {
    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.on_key_event(key);
            }
            Event::Mouse(_) => {}
            Event::Resize(_, _) => {}
            _ => {}
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if let Some(action) = self.key_binds.handle_key(key, &self.page, &self.focus) {
            match action {
                Action::Quit => self.quit(),
                _ => self.handle_action(action),
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
