use yew::prelude::*;

use crate::config::WHATSAPP_URL;
use crate::tracking;

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// External link to the WhatsApp chat; logs the click and lets the browser follow it.
#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let href = match &props.message {
        Some(message) => format!("{}?text={}", WHATSAPP_URL, urlencoding::encode(message)),
        None => WHATSAPP_URL.to_string(),
    };

    let onclick = {
        let label = props.label.clone();
        Callback::from(move |_: MouseEvent| {
            tracking::track_whatsapp_click();
            tracking::track_button_click(&label);
        })
    };

    html! {
        <a href={href} class="btn btn-whatsapp" target="_blank" rel="noopener" {onclick}>
            <i class="fab fa-whatsapp"></i>
            {" "}{props.label.clone()}
        </a>
    }
}
