use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::Duration,
};

/// Terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    /// Key press event.
    KeyPress(KeyCode),
    /// Terminal resize event.
    Resize,
}

impl TermEvent {
    /// Translate a crossterm event.
    ///
    /// Only presses of character keys, `Enter` and `Esc` are kept, since the
    /// application has no binding for any other key.
    fn from_event(event: Event) -> Option<Self> {
        match event {
            Event::Key(e) if e.kind == KeyEventKind::Press => match e.code {
                code @ (KeyCode::Char(_) | KeyCode::Enter | KeyCode::Esc) => {
                    Some(Self::KeyPress(code))
                }
                _ => None,
            },
            Event::Resize(_, _) => Some(Self::Resize),
            _ => None,
        }
    }
}

/// Terminal events handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Channel to receive events from the event thread.
    rx: Receiver<TermEvent>,
}

impl EventHandler {
    /// Create a new [`EventHandler`].
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || -> Result<()> {
            loop {
                if let Some(event) = TermEvent::from_event(event::read()?) {
                    tx.send(event)?;
                }
            }
        });

        Self { rx }
    }

    /// Receive an event.
    pub fn recv(&self) -> Result<TermEvent> {
        Ok(self.rx.recv()?)
    }

    /// Wait for an event for at most `timeout`.
    ///
    /// If no event arrives in time, return [`None`].
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<TermEvent>> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_from_event() {
        assert_eq!(
            TermEvent::from_event(key(KeyCode::Char('n'), KeyEventKind::Press)),
            Some(TermEvent::KeyPress(KeyCode::Char('n')))
        );
        assert_eq!(
            TermEvent::from_event(key(KeyCode::Esc, KeyEventKind::Press)),
            Some(TermEvent::KeyPress(KeyCode::Esc))
        );
        assert_eq!(
            TermEvent::from_event(key(KeyCode::Char('n'), KeyEventKind::Release)),
            None
        );
        assert_eq!(
            TermEvent::from_event(key(KeyCode::F(1), KeyEventKind::Press)),
            None
        );
        assert_eq!(
            TermEvent::from_event(Event::Resize(80, 24)),
            Some(TermEvent::Resize)
        );
        assert_eq!(TermEvent::from_event(Event::FocusGained), None);
    }
}
