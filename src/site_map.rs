use std::collections::HashMap;

/// Where a nav link is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkArea {
    Header,
    Footer,
}

/// A navigation link as rendered in the page: a label and a `#<page>` href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub area: LinkArea,
}

impl NavLink {
    /// A header link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            area: LinkArea::Header,
        }
    }

    pub fn footer(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            area: LinkArea::Footer,
            ..Self::new(label, href)
        }
    }

    /// The page id this link points at.
    pub fn target(&self) -> &str {
        fragment(&self.href)
    }
}

/// Strips a leading `#` from an href or `location.hash`.
pub fn fragment(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// The static shape of the site: which sections exist, which nav links point
/// at them and which window title each page carries.
///
/// Lookups go through a table built once here instead of querying the
/// document for "the section whose id is X" on every navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMap {
    sections: Vec<String>,
    section_index: HashMap<String, usize>,
    links: Vec<NavLink>,
    titles: HashMap<String, String>,
}

impl SiteMap {
    pub fn new<S, T>(sections: S, links: Vec<NavLink>, titles: T) -> Self
    where
        S: IntoIterator<Item = String>,
        T: IntoIterator<Item = (String, String)>,
    {
        let mut ordered = Vec::new();
        let mut section_index = HashMap::new();
        for id in sections {
            if section_index.contains_key(&id) {
                // Duplicate ids cannot be addressed separately; the first wins.
                continue;
            }
            section_index.insert(id.clone(), ordered.len());
            ordered.push(id);
        }

        Self {
            sections: ordered,
            section_index,
            links,
            titles: titles.into_iter().collect(),
        }
    }

    /// Resolves a page id to its section, `None` when no section carries it.
    pub fn section(&self, id: &str) -> Option<&str> {
        self.section_index
            .get(id)
            .map(|&index| self.sections[index].as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.section_index.contains_key(id)
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(String::as_str)
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn link(&self, index: usize) -> Option<&NavLink> {
        self.links.get(index)
    }

    /// Links rendered in `area`, paired with their index in the whole table.
    pub fn links_in(&self, area: LinkArea) -> impl Iterator<Item = (usize, &NavLink)> {
        self.links
            .iter()
            .enumerate()
            .filter(move |(_, link)| link.area == area)
    }

    /// First link in document order whose target is `id`.
    pub fn first_link_to(&self, id: &str) -> Option<usize> {
        self.links.iter().position(|link| link.target() == id)
    }

    pub fn title(&self, id: &str) -> Option<&str> {
        self.titles.get(id).map(String::as_str)
    }
}
