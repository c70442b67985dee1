//! # Categories Screen
//!
//! Selectable list of category names in catalog order.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SelectionState` lives in `TuiState`
//! - `CategoriesScreen` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding};

use crate::tui::component::Component;
use crate::tui::components::selection::SelectionState;
use crate::tui::components::text::truncate_str;

pub struct CategoriesScreen<'a> {
    categories: &'a [&'a str],
    state: &'a mut SelectionState,
}

impl<'a> CategoriesScreen<'a> {
    pub fn new(categories: &'a [&'a str], state: &'a mut SelectionState) -> Self {
        state.set_len(categories.len());
        Self { categories, state }
    }
}

impl Component for CategoriesScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        // borders + padding + highlight symbol
        let name_width = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = self
            .categories
            .iter()
            .map(|name| ListItem::new(truncate_str(name, name_width)))
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

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::test_support::render_to_string;

    #[test]
    fn test_renders_categories_in_order() {
        let catalog = Catalog::boston();
        let categories = catalog.categories();
        let mut state = SelectionState::new();

        let text = render_to_string(30, 8, |f, area| {
            CategoriesScreen::new(&categories, &mut state).render(f, area)
        });

        let landmarks = text.find("Landmarks").unwrap();
        let cafes = text.find("Cafes").unwrap();
        let neighborhoods = text.find("Neighborhoods").unwrap();
        let universities = text.find("Universities").unwrap();
        assert!(landmarks < cafes && cafes < neighborhoods && neighborhoods < universities);
        assert!(text.contains("> Landmarks"));
    }

    #[test]
    fn test_new_syncs_selection_len() {
        let categories = ["A", "B"];
        let mut state = SelectionState::new();
        state.selected = 7;
        let _ = CategoriesScreen::new(&categories, &mut state);
        assert_eq!(state.selected, 1);
    }
}
