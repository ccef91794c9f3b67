use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::core::navigation::Arrow;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Reload,
    Check,
    Reveal,
    Reset,
    Arrow(Arrow),
    Tab,
    Letter(char),
    Erase,
    /// Space: acts like clicking the selected cell.
    Toggle,
    /// Left mouse button pressed at (column, row).
    Click(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read() {
        Ok(event) => map_event(event),
        Err(e) => {
            log::warn!("Failed to read terminal event: {}", e);
            None
        }
    }
}

/// Translates a raw crossterm event. Unbound input maps to `None`.
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::Click(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') => Some(TuiEvent::Quit),
            KeyCode::Char('k') => Some(TuiEvent::Check),
            KeyCode::Char('s') => Some(TuiEvent::Reveal),
            KeyCode::Char('x') => Some(TuiEvent::Reset),
            KeyCode::Char('l') => Some(TuiEvent::Reload),
            _ => None,
        };
    }
    match key_event.code {
        KeyCode::Esc => Some(TuiEvent::Quit),
        KeyCode::F(5) => Some(TuiEvent::Reload),
        KeyCode::Up => Some(TuiEvent::Arrow(Arrow::Up)),
        KeyCode::Down => Some(TuiEvent::Arrow(Arrow::Down)),
        KeyCode::Left => Some(TuiEvent::Arrow(Arrow::Left)),
        KeyCode::Right => Some(TuiEvent::Arrow(Arrow::Right)),
        KeyCode::Tab | KeyCode::BackTab => Some(TuiEvent::Tab),
        KeyCode::Backspace | KeyCode::Delete => Some(TuiEvent::Erase),
        KeyCode::Char(' ') => Some(TuiEvent::Toggle),
        KeyCode::Char(c) if c.is_alphanumeric() => Some(TuiEvent::Letter(c)),
        _ => None,
    }
}
