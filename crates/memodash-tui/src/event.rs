//! Terminal event handling.
//!
//! Captures keyboard and resize events from the terminal and hands them to
//! the application state machine. A tick is produced whenever no event
//! arrives within the tick rate.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Nothing happened within the tick rate.
    Tick,
}

impl From<Event> for TerminalEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Self::Key(key),
            Event::Resize(width, height) => Self::Resize(width, height),
            _ => Self::Tick,
        }
    }
}

/// Waits up to `tick_rate` for the next terminal event.
///
/// # Errors
///
/// Returns an I/O error if the terminal cannot be polled or read.
pub fn next_event(tick_rate: Duration) -> io::Result<TerminalEvent> {
    if event::poll(tick_rate)? {
        Ok(event::read()?.into())
    } else {
        Ok(TerminalEvent::Tick)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn maps_crossterm_events() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(TerminalEvent::from(Event::Key(key)), TerminalEvent::Key(k) if k == key));
        assert!(matches!(
            TerminalEvent::from(Event::Resize(80, 24)),
            TerminalEvent::Resize(80, 24)
        ));
        assert!(matches!(
            TerminalEvent::from(Event::FocusGained),
            TerminalEvent::Tick
        ));
    }
}
