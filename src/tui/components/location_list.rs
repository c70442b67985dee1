//! # Location List Screen
//!
//! "Showing all: {category}" header above a selectable list of location
//! names. An unknown category renders just the header.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph};

use crate::core::catalog::Location;
use crate::tui::component::Component;
use crate::tui::components::selection::SelectionState;
use crate::tui::components::text::truncate_str;

pub struct LocationListScreen<'a> {
    category: &'a str,
    locations: &'a [Location],
    state: &'a mut SelectionState,
}

impl<'a> LocationListScreen<'a> {
    pub fn new(
        category: &'a str,
        locations: &'a [Location],
        state: &'a mut SelectionState,
    ) -> Self {
        state.set_len(locations.len());
        Self {
            category,
            locations,
            state,
        }
    }

    pub fn header(category: &str) -> String {
        format!("Showing all: {category}")
    }
}

impl Component for LocationListScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, _, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let header = Paragraph::new(Line::from(Span::styled(
            truncate_str(&Self::header(self.category), header_area.width as usize),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(header, header_area);

        if self.locations.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        let name_width = list_area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = self
            .locations
            .iter()
            .map(|location| ListItem::new(truncate_str(&location.name, name_width)))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::test_support::render_to_string;

    #[test]
    fn test_renders_header_and_locations() {
        let catalog = Catalog::boston();
        let mut state = SelectionState::new();

        let text = render_to_string(40, 10, |f, area| {
            LocationListScreen::new("Cafes", catalog.locations_in("Cafes"), &mut state)
                .render(f, area)
        });

        assert!(text.contains("Showing all: Cafes"));
        assert!(text.contains("> Tatte Bakery & Cafe"));
        assert!(text.contains("Thinking Cup"));
        assert!(text.contains("Flour Bakery"));
    }

    #[test]
    fn test_unknown_category_renders_header_only() {
        let mut state = SelectionState::new();

        let text = render_to_string(40, 10, |f, area| {
            LocationListScreen::new("NoSuchCategory", &[], &mut state).render(f, area)
        });

        assert!(text.contains("Showing all: NoSuchCategory"));
        assert!(!text.contains('>'));
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_long_names_are_truncated() {
        let locations = vec![Location::new(1, "An Extremely Long Location Name Indeed", "")];
        let mut state = SelectionState::new();

        let text = render_to_string(20, 6, |f, area| {
            LocationListScreen::new("X", &locations, &mut state).render(f, area)
        });

        assert!(text.contains("An Extremel..."));
    }
}
