use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::PopStateEvent;

use crate::browser::{self, WebPlatform};
use crate::components::back_to_top::BackToTop;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::config;
use crate::observer;
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, taxi::TaxiPage, tours::ToursPage,
};
use crate::router::{NavigationState, RouterEvent, SectionRouter, SideEffect};
use crate::site_map::SiteMap;
use crate::tracking;

/// Shared with every component that renders or triggers navigation.
#[derive(Clone, PartialEq)]
pub struct RouterHandle {
    pub site: Rc<SiteMap>,
    pub state: NavigationState,
    pub dispatch: Callback<RouterEvent>,
}

impl RouterHandle {
    /// Click handler for a `#<page>` link. `link` is the nav-link index when
    /// the anchor is one of the registered header/footer links.
    pub fn on_link(&self, href: &str, link: Option<usize>) -> Callback<MouseEvent> {
        let dispatch = self.dispatch.clone();
        let href = href.to_string();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(RouterEvent::LinkClicked {
                href: href.clone(),
                link,
            });
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct PageSectionProps {
    pub id: AttrValue,
    pub children: Children,
}

#[function_component(PageSection)]
pub fn page_section(props: &PageSectionProps) -> Html {
    let router = use_context::<RouterHandle>();
    let active = router
        .map(|r| r.state.is_section_active(&props.id))
        .unwrap_or(false);

    html! {
        <section id={props.id.clone()} class={classes!("page-section", active.then(|| "active"))}>
            { for props.children.iter() }
        </section>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let site = use_memo(|_| config::site_map(), ());
    let router = {
        let site = site.clone();
        use_mut_ref(move || SectionRouter::new((*site).clone(), WebPlatform))
    };
    let nav_state = use_state(|| router.borrow().snapshot());
    let menu_open = use_state(|| false);

    let dispatch = {
        let router = router.clone();
        let nav_state = nav_state.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |event: RouterEvent| {
            let (applied, effects, snapshot) = {
                let mut router = router.borrow_mut();
                let before = router.applied_navigations();
                let effects = router.dispatch(event);
                (router.applied_navigations() != before, effects, router.snapshot())
            };

            for effect in effects {
                match effect {
                    SideEffect::CloseMobileMenu => menu_open.set(false),
                    SideEffect::ScrollToTop => browser::scroll_to_top(),
                }
            }

            if applied {
                tracking::track_page_view(&snapshot.current_page);
            }
            nav_state.set(snapshot);
        })
    };

    // Initial load: honour a fragment already in the URL, then start the
    // one-shot observers once every section is in the document.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let hash = browser::current_hash();
                info!("initial load with fragment `{}`", hash);
                dispatch.emit(RouterEvent::InitialLoad { hash });
                observer::init_fade_in();
                observer::init_lazy_images();
                || ()
            },
            (),
        );
    }

    {
        let dispatch = dispatch.clone();
        use_event_with_window("popstate", move |e: PopStateEvent| {
            dispatch.emit(RouterEvent::HistoryTraversed {
                state: browser::history_state(&e),
            });
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let handle = RouterHandle {
        site,
        state: (*nav_state).clone(),
        dispatch,
    };

    html! {
        <ContextProvider<RouterHandle> context={handle}>
            <Nav menu_open={*menu_open} on_toggle_menu={toggle_menu} on_close_menu={close_menu} />
            <main>
                <PageSection id="home"><HomePage /></PageSection>
                <PageSection id="taxi"><TaxiPage /></PageSection>
                <PageSection id="tours"><ToursPage /></PageSection>
                <PageSection id="about"><AboutPage /></PageSection>
                <PageSection id="contact"><ContactPage /></PageSection>
            </main>
            <Footer />
            <BackToTop />
        </ContextProvider<RouterHandle>>
    }
}
