//! # TitleBar Component
//!
//! Top bar showing where the user is and whether Back does anything.
//!
//! ## Props
//!
//! - `title`: screen title from the resolver ("Explore Boston", "Categories",
//!   the category name, or "Details")
//! - `can_go_back`: draws a `←` marker in front of the title
//! - `status_message`: transient status from core `App` state
//!
//! ## Conditional Formatting
//!
//! 1. **Back + status**: `"← Cafes | 3 places"`
//! 2. **Back only**: `"← Cafes"`
//! 3. **Root**: `"Explore Boston | Welcome to Boston!"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top bar component. Purely presentational; all fields are props.
pub struct TitleBar {
    pub title: String,
    pub can_go_back: bool,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, can_go_back: bool, status_message: String) -> Self {
        Self {
            title,
            can_go_back,
            status_message,
        }
    }

    fn spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::with_capacity(3);
        if self.can_go_back {
            spans.push(Span::styled("← ", Style::default().fg(Color::Green)));
        }
        spans.push(Span::styled(
            self.title.as_str(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Line::from(self.spans()), area);
    }
}
