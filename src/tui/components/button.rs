//! A single-line, always-focused button. Enter activates it; the owning
//! screen decides what that means.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Button<'a> {
    pub label: &'a str,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }

    pub fn line(&self) -> Line<'a> {
        Line::from(Span::styled(
            format!("[ {} ]", self.label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    }
}

impl Component for Button<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()).alignment(Alignment::Center), area);
    }
}
