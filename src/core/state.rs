//! # Application State
//!
//! Core business state for the tour. Domain logic only, no TUI types.
//! Presentation state (list selections, redraw flags) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // immutable, built once at startup
//! ├── navigator: Navigator      // screen stack + subscribers
//! └── status_message: String    // title bar status text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::catalog::Catalog;
use crate::core::navigator::Navigator;
use crate::core::resolver::{self, Chrome, ViewModel};

pub struct App {
    pub catalog: Catalog,
    pub navigator: Navigator,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            navigator: Navigator::new(),
            status_message: String::from("Welcome to Boston!"),
        }
    }

    /// Data for the active screen.
    pub fn view_model(&self) -> ViewModel<'_> {
        resolver::resolve(self.navigator.current(), &self.catalog)
    }

    /// Title bar state for the active screen.
    pub fn chrome(&self) -> Chrome<'_> {
        resolver::chrome(self.navigator.current())
    }
}
