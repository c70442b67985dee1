//! # Detail Screen
//!
//! Name and description of one location, plus a "Go Back to Home" button
//! that discards the navigation history.
//!
//! A location that failed to resolve renders placeholder text instead.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::catalog::Location;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::button::Button;
use crate::tui::components::text::{truncate_str, wrap_lines};
use crate::tui::event::TuiEvent;

pub const UNKNOWN_NAME: &str = "Unknown Location";
pub const UNKNOWN_DESCRIPTION: &str = "No details available.";
pub const HOME_LABEL: &str = "Go Back to Home";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    GoHome,
}

pub struct DetailScreen<'a> {
    location: Option<&'a Location>,
}

impl<'a> DetailScreen<'a> {
    pub fn new(location: Option<&'a Location>) -> Self {
        Self { location }
    }

    fn name(&self) -> &'a str {
        self.location.map_or(UNKNOWN_NAME, |l| l.name.as_str())
    }

    fn description(&self) -> &'a str {
        self.location
            .map_or(UNKNOWN_DESCRIPTION, |l| l.description.as_str())
    }
}

impl Component for DetailScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text_width = area.width.saturating_sub(4);
        let description = wrap_lines(self.description(), text_width);

        let [name_area, _, description_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(description.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let name = Paragraph::new(Line::from(Span::styled(
            truncate_str(self.name(), area.width as usize),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(name, name_area);

        let lines: Vec<Line> = description.into_iter().map(Line::from).collect();
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            description_area,
        );

        Button::new(HOME_LABEL).render(frame, button_area);
    }
}

impl EventHandler for DetailScreen<'_> {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Submit => Some(DetailEvent::GoHome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::test_support::render_to_string;

    #[test]
    fn test_renders_found_location() {
        let catalog = Catalog::boston();
        let location = catalog.find_location("Landmarks", 3);

        let text = render_to_string(80, 10, |f, area| {
            DetailScreen::new(location).render(f, area)
        });

        assert!(text.contains("Old North Church"));
        assert!(text.contains("One if by land, two if by sea."));
        assert!(text.contains("[ Go Back to Home ]"));
    }

    #[test]
    fn test_renders_placeholder_when_not_found() {
        let text = render_to_string(60, 10, |f, area| DetailScreen::new(None).render(f, area));

        assert!(text.contains(UNKNOWN_NAME));
        assert!(text.contains(UNKNOWN_DESCRIPTION));
        assert!(text.contains("[ Go Back to Home ]"));
    }

    #[test]
    fn test_long_description_wraps() {
        let catalog = Catalog::boston();
        let location = catalog.find_location("Neighborhoods", 7);

        let text = render_to_string(24, 12, |f, area| {
            DetailScreen::new(location).render(f, area)
        });

        // 20 usable columns: "Victorian" / "brownstones, Newbury" / ...
        assert!(text.contains("brownstones, Newbury"));
        assert!(text.contains("Square."));
    }

    #[test]
    fn test_submit_goes_home() {
        let mut screen = DetailScreen::new(None);
        assert_eq!(screen.handle_event(&TuiEvent::Submit), Some(DetailEvent::GoHome));
        assert_eq!(screen.handle_event(&TuiEvent::CursorUp), None);
    }
}
