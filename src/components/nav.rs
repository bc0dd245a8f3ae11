use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

use crate::app::RouterHandle;
use crate::browser;
use crate::config::{NAVBAR_SCROLL_DEBOUNCE_MS, SITE_NAME};
use crate::scroll::navbar_scrolled;
use crate::site_map::LinkArea;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
}

fn contains(node: &NodeRef, target: &Node) -> bool {
    node.cast::<Element>()
        .map(|el| el.contains(Some(target)))
        .unwrap_or(false)
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_toggle_menu, on_close_menu } = props;
    let router = use_context::<RouterHandle>();
    let is_scrolled = use_state(|| false);
    let button_ref = use_node_ref();
    let links_ref = use_node_ref();

    let update_scrolled = {
        let is_scrolled = is_scrolled.clone();
        use_debounce(
            move || is_scrolled.set(navbar_scrolled(browser::scroll_y())),
            NAVBAR_SCROLL_DEBOUNCE_MS,
        )
    };
    use_event_with_window("scroll", move |_: Event| update_scrolled.run());

    // Any click outside both the burger button and the link list closes the menu.
    {
        let button_ref = button_ref.clone();
        let links_ref = links_ref.clone();
        let on_close_menu = on_close_menu.clone();
        use_event_with_window("click", move |e: Event| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if !contains(&button_ref, &target) && !contains(&links_ref, &target) {
                on_close_menu.emit(());
            }
        });
    }

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let links = match &router {
        Some(router) => router
            .site
            .links_in(LinkArea::Header)
            .map(|(index, link)| {
                let active = router.state.is_link_active(index);
                html! {
                    <li>
                        <a href={link.href.clone()} class={classes!("nav-link", active.then(|| "active"))}
                            onclick={router.on_link(&link.href, Some(index))}>
                            {link.label.clone()}
                        </a>
                    </li>
                }
            })
            .collect::<Html>(),
        None => html! {},
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="logo" onclick={router.as_ref().map(|r| r.on_link("#home", None))}>
                    <i class="fas fa-car"></i>
                    <span>{SITE_NAME}</span>
                </a>
                <ul id="navLinks" ref={links_ref} class={classes!("nav-links", menu_open.then(|| "active"))}>
                    { links }
                </ul>
                <button id="mobileMenuBtn" ref={button_ref} class="mobile-menu-btn" onclick={toggle_menu}>
                    <i class={classes!("fas", if *menu_open { "fa-times" } else { "fa-bars" })}></i>
                </button>
            </div>
        </nav>
    }
}
