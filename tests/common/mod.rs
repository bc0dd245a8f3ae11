//! Shared test utilities for router integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use dr_ceylon_frontend::{config, HistoryState, NavLink, Platform, PlatformError, SiteMap};

pub const INITIAL_TITLE: &str = "DR Ceylon Tours";

/// In-memory stand-in for the browser's history stack, location hash and
/// document title.
#[derive(Debug)]
pub struct MemoryPlatform {
    entries: Vec<(Option<HistoryState>, String)>,
    cursor: usize,
    pub title: String,
    pub pushes: usize,
}

#[allow(dead_code)]
impl MemoryPlatform {
    /// A fresh tab opened at `hash` (e.g. `""` or `"#about"`).
    pub fn new(hash: &str) -> Self {
        Self {
            entries: vec![(None, hash.to_string())],
            cursor: 0,
            title: INITIAL_TITLE.to_string(),
            pushes: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Moves one entry back, returning the state `popstate` would carry.
    pub fn back(&mut self) -> Option<HistoryState> {
        assert!(self.cursor > 0, "no entry to go back to");
        self.cursor -= 1;
        self.entries[self.cursor].0.clone()
    }

    pub fn forward(&mut self) -> Option<HistoryState> {
        assert!(self.cursor + 1 < self.entries.len(), "no entry to go forward to");
        self.cursor += 1;
        self.entries[self.cursor].0.clone()
    }
}

impl Platform for MemoryPlatform {
    fn current_hash(&self) -> String {
        self.entries[self.cursor].1.clone()
    }

    fn push_entry(&mut self, state: &HistoryState, url: &str) -> Result<(), PlatformError> {
        self.entries.truncate(self.cursor + 1);
        self.entries.push((Some(state.clone()), url.to_string()));
        self.cursor += 1;
        self.pushes += 1;
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}

/// Platform whose history rejects every push.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct BrokenHistory {
    pub title: String,
}

impl Platform for BrokenHistory {
    fn current_hash(&self) -> String {
        String::new()
    }

    fn push_entry(&mut self, _state: &HistoryState, _url: &str) -> Result<(), PlatformError> {
        Err(PlatformError::Unavailable("history"))
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}

/// The production site map plus an `unmapped` section that has no title and
/// no nav link.
#[allow(dead_code)]
pub fn site_with_unmapped() -> SiteMap {
    let mut links: Vec<NavLink> = config::site_map().links().to_vec();
    links.push(NavLink::new("Elsewhere", "https://example.com"));
    SiteMap::new(
        config::PAGES
            .iter()
            .map(|(id, _)| id.to_string())
            .chain(std::iter::once("unmapped".to_string())),
        links,
        config::PAGES
            .iter()
            .map(|(id, title)| (id.to_string(), title.to_string())),
    )
}

#[allow(dead_code)]
pub fn title_of(id: &str) -> &'static str {
    config::PAGES
        .iter()
        .find(|(page, _)| *page == id)
        .map(|(_, title)| *title)
        .expect("known page")
}
