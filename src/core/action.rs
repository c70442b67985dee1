//! # Actions
//!
//! Every navigation intent a screen can emit becomes an `Action`.
//! User picks "Cafes" on the categories screen? That's `Action::GoToList("Cafes")`.
//! User presses Esc? That's `Action::GoBack`.
//!
//! The `update()` function applies an action to the app state and tells the
//! caller what else to do via an `Effect`. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::navigator::NavigationEntry;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GoToCategories,
    GoToList(String),
    GoToDetail { category: String, location_id: u32 },
    GoBack,
    /// Return to Home, discarding all history.
    GoHome,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    let effect = match action {
        Action::GoToCategories => {
            app.navigator.push(NavigationEntry::CategoryList);
            Effect::None
        }
        Action::GoToList(category) => {
            app.navigator.push(NavigationEntry::LocationList { category });
            Effect::None
        }
        Action::GoToDetail {
            category,
            location_id,
        } => {
            app.navigator.push(NavigationEntry::LocationDetail {
                category,
                location_id,
            });
            Effect::None
        }
        Action::GoBack => {
            // Back from the first screen leaves the app.
            if app.navigator.back() {
                Effect::None
            } else {
                Effect::Quit
            }
        }
        Action::GoHome => {
            app.navigator.reset_to(NavigationEntry::Home);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    };

    app.status_message = status_for(app);
    effect
}

fn status_for(app: &App) -> String {
    match app.navigator.current() {
        NavigationEntry::Home => String::from("Welcome to Boston!"),
        NavigationEntry::CategoryList => format!("{} categories", app.catalog.len()),
        NavigationEntry::LocationList { category } => {
            let count = app.catalog.locations_in(category).len();
            match count {
                0 => String::from("Nothing here yet"),
                1 => String::from("1 place"),
                n => format!("{n} places"),
            }
        }
        NavigationEntry::LocationDetail {
            category,
            location_id,
        } => {
            if app.catalog.find_location(category, *location_id).is_some() {
                format!("{} screens deep", app.navigator.depth() - 1)
            } else {
                String::from("Location not found")
            }
        }
    }
}
