//! Event handling for the TUI
//!
//! A reader thread polls crossterm and forwards key, mouse and resize
//! events over a channel, with a tick at a fixed rate. The thread is stopped
//! and joined when the handler is dropped, so no keystroke is read after the
//! form interface hands the terminal back.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::error;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let worker = thread::spawn(move || {
            let mut last_tick = Instant::now();
            while !stop_flag.load(Ordering::Relaxed) {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                let ready = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(e) => {
                        error!(error = %e, "failed to poll terminal events");
                        return;
                    }
                };

                if ready {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                        Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            Some(Event::Resize(width, height))
                        }
                        Ok(_) => None,
                        Err(e) => {
                            error!(error = %e, "failed to read terminal event");
                            return;
                        }
                    };
                    if let Some(event) = forwarded {
                        if sender.send(event).is_err() {
                            return;
                        }
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

        Self {
            receiver,
            stop,
            worker: Some(worker),
        }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Stop the reader thread and wait for it to exit.
    ///
    /// Waits at most one tick, since every poll is bounded by the tick rate.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("terminal event thread panicked");
            }
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_joins_reader_thread() {
        let mut events = EventHandler::new(Duration::from_millis(5));
        events.stop();
        assert!(events.worker.is_none());

        // Once the thread is gone its sender is dropped, so the channel
        // drains and then disconnects
        while events.receiver.try_recv().is_ok() {}
        assert!(events.next().is_err());

        // Stopping twice is harmless
        events.stop();
    }

    #[test]
    fn test_drop_stops_reader_thread() {
        let events = EventHandler::new(Duration::from_millis(5));
        let stop = Arc::clone(&events.stop);
        drop(events);
        assert!(stop.load(Ordering::Relaxed));
    }
}
