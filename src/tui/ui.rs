use crate::core::navigator::NavigationEntry;
use crate::core::resolver::ViewModel;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CategoriesScreen, DetailScreen, HomeScreen, LocationListScreen, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let hints_height = if tui.show_key_hints { 1 } else { 0 };
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(hints_height)]);
    let [title_area, _, main_area, hints_area] = layout.areas(frame.area());

    let chrome = app.chrome();
    TitleBar::new(
        chrome.title.to_string(),
        chrome.can_go_back,
        app.status_message.clone(),
    )
    .render(frame, title_area);

    draw_screen(frame, main_area, app.view_model(), tui);

    if tui.show_key_hints {
        let hints = Paragraph::new(key_hints(app.navigator.current()))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hints, hints_area);
    }
}

fn draw_screen(frame: &mut Frame, area: Rect, view_model: ViewModel<'_>, tui: &mut TuiState) {
    match view_model {
        ViewModel::Home => HomeScreen.render(frame, area),
        ViewModel::Categories { categories } => {
            CategoriesScreen::new(&categories, &mut tui.categories).render(frame, area)
        }
        ViewModel::List {
            category,
            locations,
        } => LocationListScreen::new(category, locations, &mut tui.locations).render(frame, area),
        ViewModel::Detail { location } => DetailScreen::new(location).render(frame, area),
    }
}

/// One-line key help for the active screen.
pub fn key_hints(entry: &NavigationEntry) -> &'static str {
    match entry {
        NavigationEntry::Home => " Enter Start  Esc/q Quit ",
        NavigationEntry::CategoryList | NavigationEntry::LocationList { .. } => {
            " ↑↓ Move  Enter Open  Esc Back  q Quit "
        }
        NavigationEntry::LocationDetail { .. } => " Enter Home  Esc Back  q Quit ",
    }
}
