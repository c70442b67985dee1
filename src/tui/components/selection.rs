//! Cursor state shared by the list screens.
//!
//! Lives in `TuiState` so the highlighted row survives redraws and
//! returning to a screen with Back.

use ratatui::widgets::ListState;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Emitted when the user activates the highlighted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Activate(usize),
}

pub struct SelectionState {
    pub selected: usize,
    len: usize,
    pub list_state: ListState,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            len: 0,
            list_state: ListState::default(),
        }
    }

    /// Sync the row count with the current props, clamping the cursor.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.list_state = ListState::default();
        self.set_len(self.len);
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SelectionState {
    type Event = SelectionEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SelectionEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select((self.selected + 1).min(self.len - 1));
                None
            }
            TuiEvent::First => {
                self.select(0);
                None
            }
            TuiEvent::Last => {
                self.select(self.len - 1);
                None
            }
            TuiEvent::Submit => Some(SelectionEvent::Activate(self.selected)),
            _ => None,
        }
    }
}
