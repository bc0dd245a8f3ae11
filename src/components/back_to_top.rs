use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::Event;

use crate::browser;
use crate::config::BACK_TO_TOP_DEBOUNCE_MS;
use crate::scroll::back_to_top_visible;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    let update = {
        let visible = visible.clone();
        use_debounce(
            move || visible.set(back_to_top_visible(browser::scroll_y())),
            BACK_TO_TOP_DEBOUNCE_MS,
        )
    };

    use_event_with_window("scroll", move |_: Event| update.run());

    let onclick = Callback::from(|_: MouseEvent| browser::scroll_to_top());

    html! {
        <button id="backToTop" class={classes!("back-to-top", (*visible).then(|| "show"))} {onclick}>
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
