//! Client-side frontend for the DR Ceylon Tours site: one page of
//! pre-rendered sections, switched by a hash-based section router.

pub mod app;
pub mod browser;
pub mod config;
pub mod counter;
pub mod error;
pub mod observer;
pub mod router;
pub mod scroll;
pub mod site_map;
pub mod tracking;
pub mod validation;

pub mod components {
    pub mod back_to_top;
    pub mod contact_form;
    pub mod faq;
    pub mod footer;
    pub mod nav;
    pub mod page_link;
    pub mod stats;
    pub mod whatsapp;
}

pub mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod taxi;
    pub mod tours;
}

pub use error::{FieldError, PlatformError, RouterError};
pub use router::{
    HistoryState, NavigationState, Platform, RouterEvent, SectionRouter, SideEffect,
};
pub use site_map::{LinkArea, NavLink, SiteMap};
