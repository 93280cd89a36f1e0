//! Event handling for the TUI
//!
//! Terminal events (key presses, resize) are read on a background thread and
//! forwarded over a channel, interleaved with periodic ticks. Only the main
//! thread touches application state.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::error;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates (notification expiry)
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
    /// Event thread handle
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            // Ignore key releases on platforms that report them
                            Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                Some(Event::Key(key))
                            }
                            Ok(CrosstermEvent::Resize(width, height)) => {
                                Some(Event::Resize(width, height))
                            }
                            Ok(_) => None,
                            Err(e) => {
                                error!(error = %e, "failed to read terminal event");
                                return;
                            }
                        };
                        if let Some(ev) = forwarded {
                            if sender.send(ev).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(e) => {
                        error!(error = %e, "failed to poll terminal events");
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver, handler }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
