use yew::prelude::*;
use web_sys::MouseEvent;

/// Accordion transition: clicking an open item closes it, clicking any other
/// item opens it and closes the rest.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub items: Vec<(AttrValue, AttrValue)>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| None::<usize>);

    let items = props.items.iter().enumerate().map(|(index, (question, answer))| {
        let is_open = *open == Some(index);
        let toggle = {
            let open = open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                open.set(toggle_open(*open, index));
            })
        };
        html! {
            <div class={classes!("faq-item", is_open.then(|| "active"))}>
                <button class="faq-question" onclick={toggle}>
                    <span class="question-text">{question.clone()}</span>
                    <i class={classes!("fas", if is_open { "fa-minus" } else { "fa-plus" })}></i>
                </button>
                <div class="faq-answer">
                    <p>{answer.clone()}</p>
                </div>
            </div>
        }
    });

    html! {
        <div class="faq-list">
            { for items }
        </div>
    }
}
