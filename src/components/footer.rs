use chrono::Datelike;
use yew::prelude::*;

use crate::app::RouterHandle;
use crate::components::whatsapp::WhatsAppButton;
use crate::config::{CONTACT_PHONE, SITE_NAME};
use crate::site_map::LinkArea;

#[function_component(Footer)]
pub fn footer() -> Html {
    let router = use_context::<RouterHandle>();
    let year = chrono::Local::now().year();

    let links = match &router {
        Some(router) => router
            .site
            .links_in(LinkArea::Footer)
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
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-section">
                    <h3>{SITE_NAME}</h3>
                    <p>{"Reliable airport transfers, island-wide taxi service and hand-crafted tours across Sri Lanka."}</p>
                </div>
                <div class="footer-section">
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-links">
                        { links }
                    </ul>
                </div>
                <div class="footer-section">
                    <h4>{"Get in Touch"}</h4>
                    <p><i class="fas fa-phone"></i>{" "}{CONTACT_PHONE}</p>
                    <WhatsAppButton label="Chat on WhatsApp" />
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, SITE_NAME)}</p>
            </div>
        </footer>
    }
}
