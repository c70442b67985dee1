//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! screen, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Data Flow
//!
//! ```text
//! key press → TuiEvent → screen component → Action → update() → Navigator
//!                                                                  │
//!          redraw ← TuiState::on_navigate ← subscription channel ←─┘
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after input, a terminal
//! resize, or a navigator notification. Between events it sleeps in
//! `poll` for up to 500ms.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigator::NavigationEntry;
use crate::core::resolver::ViewModel;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DetailEvent, DetailScreen, HomeEvent, HomeScreen, SelectionEvent, SelectionState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub categories: SelectionState,
    pub locations: SelectionState,
    /// Category the `locations` cursor belongs to.
    locations_for: Option<String>,
    pub show_key_hints: bool,
}

impl TuiState {
    pub fn new(show_key_hints: bool) -> Self {
        Self {
            categories: SelectionState::new(),
            locations: SelectionState::new(),
            locations_for: None,
            show_key_hints,
        }
    }

    /// Called for every navigator change notification.
    ///
    /// Cursors are kept when returning to a screen with Back, reset when a
    /// different category is opened, and all reset when history is
    /// discarded on the way Home.
    pub fn on_navigate(&mut self, entry: &NavigationEntry) {
        match entry {
            NavigationEntry::Home => {
                self.categories.reset();
                self.locations.reset();
                self.locations_for = None;
            }
            NavigationEntry::LocationList { category } => {
                if self.locations_for.as_deref() != Some(category.as_str()) {
                    self.locations.reset();
                    self.locations_for = Some(category.clone());
                }
            }
            NavigationEntry::CategoryList | NavigationEntry::LocationDetail { .. } => {}
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Map a terminal event to a navigation intent for the active screen.
///
/// Quit and Back are global; everything else is routed to the screen
/// component for the current view model.
pub fn intent_for(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::Back => return Some(Action::GoBack),
        TuiEvent::Resize => return None,
        _ => {}
    }

    match app.view_model() {
        ViewModel::Home => match HomeScreen.handle_event(event)? {
            HomeEvent::StartExploring => Some(Action::GoToCategories),
        },
        ViewModel::Categories { categories } => {
            tui.categories.set_len(categories.len());
            match tui.categories.handle_event(event)? {
                SelectionEvent::Activate(index) => categories
                    .get(index)
                    .map(|name| Action::GoToList(name.to_string())),
            }
        }
        ViewModel::List {
            category,
            locations,
        } => {
            tui.locations.set_len(locations.len());
            match tui.locations.handle_event(event)? {
                SelectionEvent::Activate(index) => {
                    locations.get(index).map(|location| Action::GoToDetail {
                        category: category.to_string(),
                        location_id: location.id,
                    })
                }
            }
        }
        ViewModel::Detail { location } => match DetailScreen::new(location).handle_event(event)? {
            DetailEvent::GoHome => Some(Action::GoHome),
        },
    }
}

/// Apply a batch of events in order.
///
/// Navigator notifications are drained after every update, so a key typed
/// ahead in the same batch already sees the reset cursors.
fn process_events(
    app: &mut App,
    tui: &mut TuiState,
    navigation: &Receiver<NavigationEntry>,
    events: impl IntoIterator<Item = TuiEvent>,
) -> Effect {
    for event in events {
        let Some(action) = intent_for(app, tui, &event) else {
            continue;
        };
        let effect = update(app, action);
        while let Ok(entry) = navigation.try_recv() {
            debug!("Navigated to {:?}", entry);
            tui.on_navigate(&entry);
        }
        if effect == Effect::Quit {
            return Effect::Quit;
        }
    }
    Effect::None
}

pub fn run(app: &mut App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.show_key_hints);
    let navigation = app.navigator.subscribe();

    let mut terminal = ratatui::try_init()?;
    let _terminal_mode_guard =
        TerminalModeGuard::new().inspect_err(|e| warn!("Failed to hide cursor: {e}"));

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL) else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let events = std::iter::once(first_event).chain(std::iter::from_fn(poll_event_immediate));
        if process_events(app, &mut tui, &navigation, events) == Effect::Quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("Terminal restored");
    result
}
