use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, KeyEventKind};

#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// The poll timed out, or the screen needs redrawing.
    Tick,
}

/// Timed key reader. Runs on the calling thread: the poll timeout is the
/// game clock.
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits for the next key press. With a timeout, returns `Tick` once it
    /// expires; without one, blocks until a key arrives or the terminal is
    /// resized. Releases, repeats and other events are skipped without
    /// shortening the wait.
    pub fn next(&self, timeout: Option<Duration>) -> io::Result<Event> {
        let deadline = timeout.map(|t| Instant::now() + t);
        loop {
            if let Some(deadline) = deadline {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() || !event::poll(remaining)? {
                    return Ok(Event::Tick);
                }
            }
            if let Some(ev) = translate(event::read()?, deadline.is_some()) {
                return Ok(ev);
            }
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a terminal event to a game event, or `None` to keep waiting.
/// A resize only ends an unclocked wait; during play the next tick redraws.
pub fn translate(ev: crossterm::event::Event, clocked: bool) -> Option<Event> {
    match ev {
        crossterm::event::Event::Key(key) if key.kind == KeyEventKind::Press => {
            Some(Event::Key(key))
        }
        crossterm::event::Event::Resize(..) if !clocked => Some(Event::Tick),
        _ => None,
    }
}
