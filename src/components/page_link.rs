use yew::prelude::*;

use crate::app::RouterHandle;
use crate::browser;
use crate::tracking;

#[derive(Properties, PartialEq)]
pub struct PageLinkProps {
    /// `#<page>` target.
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Call-to-action link to another page. Not a registered nav link, so the
/// active nav link is resolved by lookup.
#[function_component(PageLink)]
pub fn page_link(props: &PageLinkProps) -> Html {
    let router = use_context::<RouterHandle>();
    let label = use_node_ref();

    let onclick = {
        let class = props.class.clone();
        let label = label.clone();
        let navigate = router.map(|r| r.on_link(&props.href, None));
        Callback::from(move |e: MouseEvent| {
            if class.contains("btn") {
                let text = label
                    .cast::<web_sys::Element>()
                    .and_then(|el| el.text_content())
                    .unwrap_or_default();
                tracking::track_button_click(&text);
            }
            if let Some(navigate) = &navigate {
                navigate.emit(e);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} ref={label} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct InPageAnchorProps {
    /// `#<element id>` inside the current page.
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Smooth-scrolls to an element on the visible page. Targets that are page
/// sections, or that do not exist, fall back to default link behaviour.
#[function_component(InPageAnchor)]
pub fn in_page_anchor(props: &InPageAnchorProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(id) = href.strip_prefix('#') else {
                return;
            };
            if let Some(target) = browser::element_by_id(id) {
                if !target.class_list().contains("page-section") {
                    e.prevent_default();
                    browser::scroll_into_view(&target);
                }
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
