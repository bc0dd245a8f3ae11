use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE;
use crate::error::{PlatformError, RouterError};
use crate::site_map::{fragment, SiteMap};

/// Payload stored with every history entry the router pushes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub page: String,
}

impl HistoryState {
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }
}

/// Browser facilities the router writes to. The history stack itself belongs
/// to the browser; the router only appends to it.
pub trait Platform {
    /// Current URL fragment including the leading `#`, or empty.
    fn current_hash(&self) -> String;

    fn push_entry(&mut self, state: &HistoryState, url: &str) -> Result<(), PlatformError>;

    fn set_title(&mut self, title: &str);
}

/// What the view needs to mark the visible section and the active link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_page: String,
    pub active_section: Option<String>,
    pub active_link: Option<usize>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_page: DEFAULT_PAGE.to_string(),
            active_section: None,
            active_link: None,
        }
    }
}

impl NavigationState {
    pub fn is_section_active(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }

    pub fn is_link_active(&self, index: usize) -> bool {
        self.active_link == Some(index)
    }
}

/// Stimuli the router reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    /// A link with a `#<page>` href was clicked. `link` is its index in the
    /// site map when it is a registered nav link.
    LinkClicked { href: String, link: Option<usize> },
    /// The browser reported back/forward traversal (`popstate`).
    HistoryTraversed { state: Option<HistoryState> },
    /// The page finished loading with this URL fragment.
    InitialLoad { hash: String },
}

/// Side effects the shell performs after a dispatch. Only the click path
/// produces any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    CloseMobileMenu,
    ScrollToTop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    PushIfChanged,
    Replay,
}

pub struct SectionRouter<P: Platform> {
    site: SiteMap,
    platform: P,
    state: NavigationState,
    applied: u64,
}

impl<P: Platform> SectionRouter<P> {
    pub fn new(site: SiteMap, platform: P) -> Self {
        Self {
            site,
            platform,
            state: NavigationState::default(),
            applied: 0,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn snapshot(&self) -> NavigationState {
        self.state.clone()
    }

    pub fn current_page(&self) -> &str {
        &self.state.current_page
    }

    /// Count of navigations applied so far, repeats of the current page
    /// included. Ignored requests do not count.
    pub fn applied_navigations(&self) -> u64 {
        self.applied
    }

    pub fn site(&self) -> &SiteMap {
        &self.site
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Shows `page_id`, syncing the active link, URL fragment and title.
    /// Unknown ids leave everything untouched.
    pub fn navigate_to(&mut self, page_id: &str) {
        if let Err(err) = self.apply(page_id, HistoryMode::PushIfChanged) {
            debug!("ignoring navigation: {}", err);
        }
    }

    pub fn dispatch(&mut self, event: RouterEvent) -> Vec<SideEffect> {
        match event {
            RouterEvent::LinkClicked { href, link } => {
                let target = fragment(&href).to_string();
                match self.apply(&target, HistoryMode::PushIfChanged) {
                    Ok(()) => {
                        if let Some(index) = link.filter(|&i| self.site.link(i).is_some()) {
                            self.state.active_link = Some(index);
                        }
                    }
                    Err(err) => debug!("ignoring link click: {}", err),
                }
                vec![SideEffect::CloseMobileMenu, SideEffect::ScrollToTop]
            }
            RouterEvent::HistoryTraversed { state } => {
                match state {
                    Some(HistoryState { page }) => self.replay(&page),
                    None => debug!("history entry carries no page state"),
                }
                Vec::new()
            }
            RouterEvent::InitialLoad { hash } => {
                match decode_fragment(&hash) {
                    Some(page) if self.site.contains(&page) => self.replay(&page),
                    _ => self.navigate_to(DEFAULT_PAGE),
                }
                Vec::new()
            }
        }
    }

    /// Applies a page whose fragment the browser already shows. Never pushes.
    fn replay(&mut self, page_id: &str) {
        match self.apply(page_id, HistoryMode::Replay) {
            Ok(()) => self.sync_active_link(),
            Err(err) => debug!("ignoring replayed entry: {}", err),
        }
    }

    fn sync_active_link(&mut self) {
        self.state.active_link = self.site.first_link_to(&self.state.current_page);
    }

    fn apply(&mut self, page_id: &str, mode: HistoryMode) -> Result<(), RouterError> {
        let section = self
            .site
            .section(page_id)
            .ok_or_else(|| RouterError::UnknownPage(page_id.to_string()))?
            .to_string();

        // Clear-then-set: the single slot holds the one visible section.
        self.state.active_section = Some(section);
        self.state.active_link = self.site.first_link_to(page_id);

        if mode == HistoryMode::PushIfChanged {
            let shown = decode_fragment(&self.platform.current_hash());
            if shown.as_deref() != Some(page_id) {
                let url = format!("#{}", page_id);
                if let Err(err) = self.platform.push_entry(&HistoryState::new(page_id), &url) {
                    warn!("could not push history entry for `{}`: {}", page_id, err);
                }
            }
        }

        if let Some(title) = self.site.title(page_id) {
            self.platform.set_title(title);
        }

        self.state.current_page = page_id.to_string();
        self.applied += 1;
        info!("showing page `{}`", page_id);
        Ok(())
    }
}

/// Turns `#about` (possibly percent-encoded) into `about`. Empty fragments
/// yield `None`.
pub fn decode_fragment(hash: &str) -> Option<String> {
    let raw = fragment(hash);
    if raw.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(raw)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    Some(decoded)
}
