//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: screen title, back marker and status
//! - `HomeScreen`: welcome text and the start button
//! - `DetailScreen`: one location, or a placeholder when it didn't resolve
//! - `Button`: the green single-line button used by Home and Detail
//!
//! ### Stateful Components (Event-Driven)
//!
//! Screens whose cursor position lives in `TuiState`:
//! - `CategoriesScreen`: category names
//! - `LocationListScreen`: locations of one category
//!
//! Both borrow a `SelectionState` for the duration of one frame (the
//! persistent state + transient wrapper pattern).
//!
//! ### Props-Based Data Flow
//!
//! Components receive resolved data from the core `ViewModel`, never the
//! `App` or the `Catalog` directly:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! LocationListScreen::new(category, locations, &mut tui.locations).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! LocationListScreen::render(frame, area); // reads from App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top bar)
//! ├── home.rs           (Home screen)
//! ├── categories.rs     (Category list screen)
//! ├── location_list.rs  (Location list screen)
//! ├── detail.rs         (Location detail screen)
//! ├── button.rs         (Shared button)
//! ├── selection.rs      (List cursor state)
//! └── text.rs           (Truncation and wrapping helpers)
//! ```

mod button;
pub mod categories;
pub mod detail;
pub mod home;
pub mod location_list;
pub mod selection;
pub mod text;
mod title_bar;

pub use categories::CategoriesScreen;
pub use detail::{DetailEvent, DetailScreen};
pub use home::{HomeEvent, HomeScreen};
pub use location_list::LocationListScreen;
pub use selection::{SelectionEvent, SelectionState};
pub use title_bar::TitleBar;
