//! # Core Application Logic
//!
//! This module contains the tour's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (places)     │
//!                    │  • Navigator (stack)    │
//!                    │  • Resolver (screens)   │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌──────┴─────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Catalog`, `Category`, `Location` and the Boston seed data
//! - [`navigator`]: `NavigationEntry` and the `Navigator` stack
//! - [`resolver`]: `ViewModel`, titles and the back flag for each screen
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigator;
pub mod resolver;
pub mod state;
