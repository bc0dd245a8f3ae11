mod common;

use common::{site_with_unmapped, title_of, BrokenHistory, MemoryPlatform, INITIAL_TITLE};
use dr_ceylon_frontend::{
    config, HistoryState, LinkArea, Platform, RouterEvent, SectionRouter, SideEffect,
};

fn started(hash: &str) -> SectionRouter<MemoryPlatform> {
    let mut router = SectionRouter::new(site_with_unmapped(), MemoryPlatform::new(hash));
    router.dispatch(RouterEvent::InitialLoad {
        hash: hash.to_string(),
    });
    router
}

fn active_sections(router: &SectionRouter<MemoryPlatform>) -> usize {
    router
        .site()
        .sections()
        .filter(|id| router.state().is_section_active(id))
        .count()
}

fn active_links(router: &SectionRouter<MemoryPlatform>) -> usize {
    (0..router.site().links().len())
        .filter(|&i| router.state().is_link_active(i))
        .count()
}

#[test]
fn cold_start_shows_home_and_pushes_its_fragment() {
    let router = started("");
    assert_eq!(router.current_page(), "home");
    assert!(router.state().is_section_active("home"));
    assert_eq!(router.state().active_link, Some(0));
    assert_eq!(router.platform().current_hash(), "#home");
    assert_eq!(router.platform().pushes, 1);
    assert_eq!(router.platform().title, title_of("home"));
}

#[test]
fn navigating_to_tours_pushes_one_entry_and_updates_title() {
    let mut router = started("");
    let pushes = router.platform().pushes;

    router.navigate_to("tours");

    assert!(router.state().is_section_active("tours"));
    assert_eq!(router.current_page(), "tours");
    assert_eq!(router.platform().current_hash(), "#tours");
    assert_eq!(router.platform().pushes, pushes + 1);
    assert_eq!(router.platform().title, title_of("tours"));
    assert_eq!(router.state().active_link, router.site().first_link_to("tours"));
}

#[test]
fn exactly_one_section_is_active_after_every_navigation() {
    let mut router = started("");
    for id in ["taxi", "tours", "about", "unmapped", "contact", "home", "home", "taxi"] {
        router.navigate_to(id);
        assert_eq!(active_sections(&router), 1, "after navigating to {}", id);
        assert!(active_links(&router) <= 1);
        assert!(router.state().is_section_active(id));
    }
}

#[test]
fn repeated_navigation_is_idempotent() {
    let mut router = started("");
    router.navigate_to("about");
    let once = router.snapshot();
    let pushes = router.platform().pushes;
    let title = router.platform().title.clone();

    router.navigate_to("about");

    assert_eq!(router.snapshot(), once);
    assert_eq!(router.platform().pushes, pushes);
    assert_eq!(router.platform().title, title);
}

#[test]
fn unknown_page_changes_nothing() {
    let mut router = started("");
    router.navigate_to("taxi");
    let before = router.snapshot();
    let hash = router.platform().current_hash();
    let title = router.platform().title.clone();
    let pushes = router.platform().pushes;

    router.navigate_to("doesNotExist");

    assert_eq!(router.snapshot(), before);
    assert_eq!(router.current_page(), "taxi");
    assert_eq!(router.platform().current_hash(), hash);
    assert_eq!(router.platform().title, title);
    assert_eq!(router.platform().pushes, pushes);
}

#[test]
fn back_traversal_applies_state_without_pushing() {
    let mut router = started("");
    router.navigate_to("taxi");
    router.navigate_to("contact");
    let pushes = router.platform().pushes;

    let state = router.platform_mut().back();
    assert_eq!(state, Some(HistoryState::new("taxi")));
    let effects = router.dispatch(RouterEvent::HistoryTraversed { state });

    assert!(effects.is_empty());
    assert_eq!(router.current_page(), "taxi");
    assert!(router.state().is_section_active("taxi"));
    assert_eq!(router.state().active_link, router.site().first_link_to("taxi"));
    assert_eq!(router.platform().pushes, pushes);
    assert_eq!(router.platform().title, title_of("taxi"));
}

#[test]
fn traversal_state_is_applied_even_when_fragment_disagrees() {
    let mut router = started("");
    let pushes = router.platform().pushes;

    router.dispatch(RouterEvent::HistoryTraversed {
        state: Some(HistoryState::new("taxi")),
    });

    assert_eq!(router.current_page(), "taxi");
    assert_eq!(router.platform().pushes, pushes);
}

#[test]
fn back_then_forward_keeps_the_stack_intact() {
    let mut router = started("");
    router.navigate_to("tours");
    router.navigate_to("about");
    let len = router.platform().len();

    let state = router.platform_mut().back();
    router.dispatch(RouterEvent::HistoryTraversed { state });
    let state = router.platform_mut().forward();
    router.dispatch(RouterEvent::HistoryTraversed { state });

    assert_eq!(router.current_page(), "about");
    assert_eq!(router.platform().len(), len);
}

#[test]
fn traversal_to_unknown_page_is_ignored() {
    let mut router = started("");
    router.navigate_to("tours");
    let before = router.snapshot();

    router.dispatch(RouterEvent::HistoryTraversed {
        state: Some(HistoryState::new("gone")),
    });

    assert_eq!(router.snapshot(), before);
}

#[test]
fn title_is_left_alone_for_unmapped_page() {
    let mut router = started("");
    router.navigate_to("contact");
    assert_eq!(router.platform().title, title_of("contact"));

    router.navigate_to("unmapped");

    assert_eq!(router.current_page(), "unmapped");
    assert!(router.state().is_section_active("unmapped"));
    assert_eq!(router.state().active_link, None);
    assert_eq!(router.platform().current_hash(), "#unmapped");
    assert_eq!(router.platform().title, title_of("contact"));
}

#[test]
fn initial_fragment_is_applied_without_pushing() {
    let router = started("#about");
    assert_eq!(router.current_page(), "about");
    assert!(router.state().is_section_active("about"));
    assert_eq!(router.state().active_link, router.site().first_link_to("about"));
    assert_eq!(router.platform().pushes, 0);
    assert_eq!(router.platform().title, title_of("about"));
}

#[test]
fn initial_fragment_for_untitled_page_keeps_document_title() {
    let router = started("#unmapped");
    assert_eq!(router.current_page(), "unmapped");
    assert_eq!(router.platform().title, INITIAL_TITLE);
}

#[test]
fn initial_load_produces_no_side_effects() {
    for hash in ["", "#about", "#why-us"] {
        let mut router = SectionRouter::new(site_with_unmapped(), MemoryPlatform::new(hash));
        let effects = router.dispatch(RouterEvent::InitialLoad {
            hash: hash.to_string(),
        });
        assert_eq!(effects, Vec::new(), "initial load with `{}`", hash);
    }
}

#[test]
fn unknown_initial_fragment_falls_back_to_home() {
    let router = started("#why-us");
    assert_eq!(router.current_page(), "home");
    assert_eq!(router.platform().current_hash(), "#home");
    assert_eq!(router.platform().pushes, 1);
}

#[test]
fn footer_click_marks_the_clicked_link_not_the_header_one() {
    let mut router = started("");
    let footer_taxi = router
        .site()
        .links_in(LinkArea::Footer)
        .find(|(_, link)| link.target() == "taxi")
        .map(|(index, _)| index)
        .unwrap();
    assert_ne!(Some(footer_taxi), router.site().first_link_to("taxi"));

    let effects = router.dispatch(RouterEvent::LinkClicked {
        href: "#taxi".to_string(),
        link: Some(footer_taxi),
    });

    assert_eq!(router.state().active_link, Some(footer_taxi));
    assert_eq!(router.current_page(), "taxi");
    assert_eq!(effects, vec![SideEffect::CloseMobileMenu, SideEffect::ScrollToTop]);
}

#[test]
fn header_link_is_chosen_when_lookup_decides() {
    let mut router = started("");
    router.dispatch(RouterEvent::LinkClicked {
        href: "#contact".to_string(),
        link: None,
    });
    assert_eq!(router.state().active_link, Some(4));
    assert_eq!(active_links(&router), 1);
}

#[test]
fn clicking_the_current_page_pushes_nothing_but_still_scrolls() {
    let mut router = started("");
    let pushes = router.platform().pushes;

    let effects = router.dispatch(RouterEvent::LinkClicked {
        href: "#home".to_string(),
        link: Some(0),
    });

    assert_eq!(router.platform().pushes, pushes);
    assert_eq!(effects, vec![SideEffect::CloseMobileMenu, SideEffect::ScrollToTop]);
}

#[test]
fn click_on_external_link_does_not_navigate() {
    let mut router = started("");
    let before = router.snapshot();
    let external = router.site().links().len() - 1;

    router.dispatch(RouterEvent::LinkClicked {
        href: "https://example.com".to_string(),
        link: Some(external),
    });

    assert_eq!(router.snapshot(), before);
}

#[test]
fn failed_push_still_completes_navigation() {
    let mut router = SectionRouter::new(config::site_map(), BrokenHistory::default());
    router.navigate_to("tours");
    assert_eq!(router.current_page(), "tours");
    assert!(router.state().is_section_active("tours"));
    assert_eq!(router.platform().title, title_of("tours"));
}

#[test]
fn history_state_serializes_as_page_object() {
    let json = serde_json::to_value(HistoryState::new("taxi")).unwrap();
    assert_eq!(json, serde_json::json!({ "page": "taxi" }));
}
