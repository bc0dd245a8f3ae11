use js_sys::Array;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::{FADE_IN_ROOT_MARGIN, FADE_IN_THRESHOLD};

/// Elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        warn!("bad selector `{}`", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Watches `targets` and calls `on_visible` for every entry that starts
/// intersecting. The observer lives for the rest of the page.
pub fn observe<F>(
    targets: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: F,
) -> Option<IntersectionObserver>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    if targets.is_empty() {
        return None;
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_visible(entry.target(), &observer);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(_) => {
                warn!("IntersectionObserver unavailable");
                return None;
            }
        };
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Some(observer)
}

/// Marks `.fade-in` elements `visible` the first time they scroll into view.
pub fn init_fade_in() {
    let targets = query_all(".fade-in");
    observe(
        &targets,
        FADE_IN_THRESHOLD,
        Some(FADE_IN_ROOT_MARGIN),
        |element, _| {
            let _ = element.class_list().add_1("visible");
        },
    );
}

/// Swaps `data-src` into `src` for images as they approach the viewport.
pub fn init_lazy_images() {
    let targets = query_all("img[data-src]");
    observe(&targets, 0.0, None, |element, observer| {
        let Some(src) = element.get_attribute("data-src") else {
            return;
        };
        if let Some(img) = element.dyn_ref::<HtmlImageElement>() {
            img.set_src(&src);
        }
        let _ = element.remove_attribute("data-src");
        observer.unobserve(&element);
    });
}
