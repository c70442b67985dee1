use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (mapped to core::Action)
    ForceQuit,
    Quit,
    Back,

    // TUI-local events (routed to the active screen)
    CursorUp,
    CursorDown,
    First,
    Last,
    Submit,
    Resize,
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    // A failed poll is treated like no input; the loop simply polls again.
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h')) => {
            Some(TuiEvent::Back)
        }
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Home | KeyCode::Char('g')) => Some(TuiEvent::First),
        (_, KeyCode::End | KeyCode::Char('G')) => Some(TuiEvent::Last),
        (_, KeyCode::Enter | KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::Submit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_is_force_quit() {
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(TuiEvent::ForceQuit)
        );
        // Plain 'c' does nothing.
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('c')), None);
    }

    #[test]
    fn test_back_keys() {
        for code in [KeyCode::Esc, KeyCode::Backspace, KeyCode::Left, KeyCode::Char('h')] {
            assert_eq!(map_key(KeyModifiers::NONE, code), Some(TuiEvent::Back));
        }
    }

    #[test]
    fn test_vim_and_arrow_keys_agree() {
        assert_eq!(
            map_key(KeyModifiers::NONE, KeyCode::Char('j')),
            map_key(KeyModifiers::NONE, KeyCode::Down)
        );
        assert_eq!(
            map_key(KeyModifiers::NONE, KeyCode::Char('l')),
            map_key(KeyModifiers::NONE, KeyCode::Enter)
        );
        assert_eq!(
            map_key(KeyModifiers::SHIFT, KeyCode::Char('G')),
            Some(TuiEvent::Last)
        );
    }
}
