//! Boston Tour library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::catalog::{Catalog, CatalogError, Category, Location};
pub use crate::core::navigator::{NavigationEntry, Navigator};
pub use crate::core::resolver::{Chrome, ViewModel};
