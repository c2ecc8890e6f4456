use std::time::Duration;

use ratatui::DefaultTerminal;

use super::App;
use crate::app::event_handlers::EventHandlers;
use crate::app::ui;

/// Poll interval for keyboard input (in milliseconds)
const INPUT_POLL_INTERVAL_MS: u64 = 10;

/// Interval for the simulated device tick (in milliseconds)
const TICK_INTERVAL_MS: u64 = 1000;

/// Trait for main application loop
pub trait AppMainLoop {
    async fn run(self, terminal: DefaultTerminal) -> color_eyre::Result<()>
    where
        Self: Sized;
}

impl AppMainLoop for App {
    /// Run the application's main loop.
    async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        // Device tick drives the simulated traffic and the clock
        let tick_interval = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
        tokio::pin!(tick_interval);

        // Set up signal handlers for graceful shutdown (Unix only)
        #[cfg(unix)]
        let mut sigint =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;
        #[cfg(unix)]
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

        log::info!("Entering event-driven main loop");

        while self.running {
            terminal.draw(|frame| ui::render(frame, &mut self))?;

            tokio::select! {
                // Keyboard events (with short timeout for responsive UI)
                _ = tokio::time::sleep(Duration::from_millis(INPUT_POLL_INTERVAL_MS)) => {
                    if crossterm::event::poll(Duration::from_millis(0))? {
                        self.handle_crossterm_events()?;
                    }
                }

                _ = tick_interval.tick() => {
                    self.on_tick();
                }
            }

            // Check for Unix signals outside of select! to avoid conditional compilation issues
            #[cfg(unix)]
            {
                use std::pin::Pin;
                use std::task::Poll;

                let waker = futures::task::noop_waker();
                let mut cx = std::task::Context::from_waker(&waker);

                if let Poll::Ready(Some(())) = Pin::new(&mut sigint).poll_recv(&mut cx) {
                    log::info!("Received SIGINT, shutting down gracefully");
                    self.quit();
                }

                if let Poll::Ready(Some(())) = Pin::new(&mut sigterm).poll_recv(&mut cx) {
                    log::info!("Received SIGTERM, shutting down gracefully");
                    self.quit();
                }
            }
        }

        log::info!("Exiting main loop");

        Ok(())
    }
}
