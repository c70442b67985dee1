//! # Navigator
//!
//! Owns the navigation stack and is the only thing allowed to change which
//! screen is active.
//!
//! ```text
//!   push(CategoryList)        push(LocationList)         back()
//! [Home] ──────────► [Home, CategoryList] ──────► [Home, CategoryList, List] ──► [Home, CategoryList]
//!
//!   reset_to(Home)
//! [.., .., ..] ──────────► [Home]
//! ```
//!
//! The stack is never empty. `back()` refuses to pop the last entry.
//!
//! ## Subscriptions
//!
//! Views don't poll the navigator. They call [`Navigator::subscribe`] and
//! receive the new current entry on a channel after every change. Receivers
//! that have been dropped are pruned on the next notification.

use log::debug;
use std::sync::mpsc::{self, Receiver, Sender};

/// A screen plus the parameters it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEntry {
    Home,
    CategoryList,
    LocationList { category: String },
    LocationDetail { category: String, location_id: u32 },
}

impl NavigationEntry {
    pub fn list(category: impl Into<String>) -> Self {
        NavigationEntry::LocationList {
            category: category.into(),
        }
    }

    pub fn detail(category: impl Into<String>, location_id: u32) -> Self {
        NavigationEntry::LocationDetail {
            category: category.into(),
            location_id,
        }
    }
}

pub struct Navigator {
    stack: Vec<NavigationEntry>,
    subscribers: Vec<Sender<NavigationEntry>>,
}

impl Navigator {
    /// A navigator sitting on the Home screen.
    pub fn new() -> Self {
        Self {
            stack: vec![NavigationEntry::Home],
            subscribers: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: NavigationEntry) {
        debug!("push {:?} (depth {})", entry, self.stack.len() + 1);
        self.stack.push(entry);
        self.notify();
    }

    /// Pops the current entry. Returns `false`, leaving the stack alone,
    /// when only the root remains.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            debug!("back refused at root");
            return false;
        }
        let popped = self.stack.pop();
        debug!("back from {:?} (depth {})", popped, self.stack.len());
        self.notify();
        true
    }

    /// Discards all history; the stack becomes exactly `[entry]`.
    pub fn reset_to(&mut self, entry: NavigationEntry) {
        debug!("reset_to {:?} (discarding {} entries)", entry, self.stack.len());
        self.stack.clear();
        self.stack.push(entry);
        self.notify();
    }

    pub fn current(&self) -> &NavigationEntry {
        // Every mutation leaves at least one entry behind.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The full stack, root first.
    pub fn history(&self) -> &[NavigationEntry] {
        &self.stack
    }

    /// Register for change notifications. The returned receiver gets the new
    /// current entry after every push, successful back, and reset.
    pub fn subscribe(&mut self) -> Receiver<NavigationEntry> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self) {
        let current = self.current().clone();
        self.subscribers.retain(|tx| tx.send(current.clone()).is_ok());
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), &NavigationEntry::Home);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_back_on_fresh_navigator_is_refused() {
        let mut nav = Navigator::new();
        assert!(!nav.back());
        assert_eq!(nav.history(), &[NavigationEntry::Home]);
    }

    #[test]
    fn test_push_push_back_returns_to_category_list() {
        let mut nav = Navigator::new();
        nav.push(NavigationEntry::CategoryList);
        nav.push(NavigationEntry::list("Cafes"));
        assert!(nav.back());
        assert_eq!(nav.current(), &NavigationEntry::CategoryList);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_reset_to_home_discards_history() {
        let mut nav = Navigator::new();
        nav.push(NavigationEntry::CategoryList);
        nav.push(NavigationEntry::list("Landmarks"));
        nav.push(NavigationEntry::detail("Landmarks", 1));

        nav.reset_to(NavigationEntry::Home);

        assert_eq!(nav.current(), &NavigationEntry::Home);
        assert_eq!(nav.depth(), 1);
        assert!(!nav.back());
    }

    #[test]
    fn test_reset_to_non_home_root_is_never_popped() {
        let mut nav = Navigator::new();
        nav.reset_to(NavigationEntry::CategoryList);
        assert!(!nav.back());
        assert_eq!(nav.current(), &NavigationEntry::CategoryList);
    }

    #[test]
    fn test_back_unwinds_full_path() {
        let mut nav = Navigator::new();
        nav.push(NavigationEntry::CategoryList);
        nav.push(NavigationEntry::list("Universities"));
        nav.push(NavigationEntry::detail("Universities", 11));

        assert!(nav.back());
        assert_eq!(nav.current(), &NavigationEntry::list("Universities"));
        assert!(nav.back());
        assert!(nav.back());
        assert_eq!(nav.current(), &NavigationEntry::Home);
        assert!(!nav.back());
    }

    #[test]
    fn test_subscriber_sees_every_change() {
        let mut nav = Navigator::new();
        let rx = nav.subscribe();

        nav.push(NavigationEntry::CategoryList);
        nav.push(NavigationEntry::list("Cafes"));
        nav.back();
        nav.reset_to(NavigationEntry::Home);

        let seen: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            seen,
            vec![
                NavigationEntry::CategoryList,
                NavigationEntry::list("Cafes"),
                NavigationEntry::CategoryList,
                NavigationEntry::Home,
            ]
        );
    }

    #[test]
    fn test_refused_back_does_not_notify() {
        let mut nav = Navigator::new();
        let rx = nav.subscribe();
        nav.back();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut nav = Navigator::new();
        let kept = nav.subscribe();
        drop(nav.subscribe());

        nav.push(NavigationEntry::CategoryList);

        assert_eq!(nav.subscribers.len(), 1);
        assert_eq!(kept.try_recv(), Ok(NavigationEntry::CategoryList));
    }
}
