use log::Level;

use crate::site_map::{NavLink, SiteMap};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose router tracing while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "DR Ceylon Tours";
pub const CONTACT_PHONE: &str = "+94 70 191 4681";
pub const WHATSAPP_URL: &str = "https://wa.me/94701914681";

/// Page shown on a cold start when the URL carries no usable fragment.
pub const DEFAULT_PAGE: &str = "home";

/// Section ids with their window titles, in document order.
pub const PAGES: &[(&str, &str)] = &[
    ("home", "DR Ceylon Tours - Best Taxi & Tour Service in Sri Lanka"),
    ("taxi", "Taxi Services - DR Ceylon Tours"),
    ("tours", "Tour Packages - DR Ceylon Tours"),
    ("about", "About Us - DR Ceylon Tours"),
    ("contact", "Contact - DR Ceylon Tours"),
];

/// Header navigation, rendered before any section.
pub const HEADER_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Taxi Service", "#taxi"),
    ("Tour Packages", "#tours"),
    ("About Us", "#about"),
    ("Contact", "#contact"),
];

/// Footer quick links, rendered after every section.
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Taxi Service", "#taxi"),
    ("Tour Packages", "#tours"),
    ("About Us", "#about"),
    ("Contact Us", "#contact"),
];

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
pub const NAVBAR_SCROLL_DEBOUNCE_MS: u32 = 10;
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
pub const BACK_TO_TOP_DEBOUNCE_MS: u32 = 100;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_FRAME_MS: u32 = 16;
pub const COUNTER_VISIBLE_THRESHOLD: f64 = 0.5;

pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const SUCCESS_MESSAGE_MS: u32 = 5000;

/// Builds the site map once at startup. Header links precede footer links,
/// matching document order; `Nav` and `Footer` render from this table.
pub fn site_map() -> SiteMap {
    let links = HEADER_LINKS
        .iter()
        .map(|(label, href)| NavLink::new(*label, *href))
        .chain(FOOTER_LINKS.iter().map(|(label, href)| NavLink::footer(*label, *href)))
        .collect();

    SiteMap::new(
        PAGES.iter().map(|(id, _)| id.to_string()),
        links,
        PAGES.iter().map(|(id, title)| (id.to_string(), title.to_string())),
    )
}
