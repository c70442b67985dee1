//! # Home Screen
//!
//! Welcome text and a "Start Exploring" button. No catalog data.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::button::Button;
use crate::tui::event::TuiEvent;

pub const HEADLINE: &str = "Welcome to Boston!";
pub const TAGLINE: &str = "Explore the best places the city has to offer.";
pub const START_LABEL: &str = "Start Exploring";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEvent {
    StartExploring,
}

pub struct HomeScreen;

impl Component for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [headline_area, _, tagline_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let headline = Paragraph::new(Line::from(Span::styled(
            HEADLINE,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(headline, headline_area);

        frame.render_widget(
            Paragraph::new(TAGLINE).alignment(Alignment::Center),
            tagline_area,
        );

        Button::new(START_LABEL).render(frame, button_area);
    }
}

impl EventHandler for HomeScreen {
    type Event = HomeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<HomeEvent> {
        match event {
            TuiEvent::Submit => Some(HomeEvent::StartExploring),
            _ => None,
        }
    }
}
