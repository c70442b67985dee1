//! # Screen Resolver
//!
//! Turns a [`NavigationEntry`] into the data its screen needs.
//!
//! ```text
//! NavigationEntry + &Catalog  →  resolve()  →  ViewModel
//!                             →  chrome()   →  Chrome { title, can_go_back }
//! ```
//!
//! Pure functions, no failure modes. Unknown categories resolve to an empty
//! list and unknown ids to `location: None`.

use log::debug;

use crate::core::catalog::{Catalog, Location};
use crate::core::navigator::NavigationEntry;

pub const HOME_TITLE: &str = "Explore Boston";
pub const CATEGORIES_TITLE: &str = "Categories";
pub const DETAIL_TITLE: &str = "Details";

/// Screen-ready data borrowed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel<'a> {
    Home,
    Categories {
        categories: Vec<&'a str>,
    },
    List {
        category: &'a str,
        locations: &'a [Location],
    },
    Detail {
        location: Option<&'a Location>,
    },
}

/// Title bar state for the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome<'a> {
    pub title: &'a str,
    pub can_go_back: bool,
}

pub fn resolve<'a>(entry: &'a NavigationEntry, catalog: &'a Catalog) -> ViewModel<'a> {
    match entry {
        NavigationEntry::Home => ViewModel::Home,
        NavigationEntry::CategoryList => ViewModel::Categories {
            categories: catalog.categories(),
        },
        NavigationEntry::LocationList { category } => {
            let locations = catalog.locations_in(category);
            if locations.is_empty() {
                debug!("no locations for category {:?}", category);
            }
            ViewModel::List {
                category: category.as_str(),
                locations,
            }
        }
        NavigationEntry::LocationDetail {
            category,
            location_id,
        } => {
            let location = catalog.find_location(category, *location_id);
            if location.is_none() {
                debug!("location {} not found in {:?}", location_id, category);
            }
            ViewModel::Detail { location }
        }
    }
}

pub fn title(entry: &NavigationEntry) -> &str {
    match entry {
        NavigationEntry::Home => HOME_TITLE,
        NavigationEntry::CategoryList => CATEGORIES_TITLE,
        NavigationEntry::LocationList { category } => category.as_str(),
        NavigationEntry::LocationDetail { .. } => DETAIL_TITLE,
    }
}

pub fn can_go_back(entry: &NavigationEntry) -> bool {
    !matches!(entry, NavigationEntry::Home)
}

pub fn chrome(entry: &NavigationEntry) -> Chrome<'_> {
    Chrome {
        title: title(entry),
        can_go_back: can_go_back(entry),
    }
}
