use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::SUCCESS_MESSAGE_MS;
use crate::error::FieldError;
use crate::tracking;
use crate::validation::{validate_field, FieldKind};

struct FieldSpec {
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    required: bool,
    placeholder: &'static str,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", label: "Full Name", kind: FieldKind::Text, required: true, placeholder: "Your name" },
    FieldSpec { name: "email", label: "Email", kind: FieldKind::Email, required: true, placeholder: "you@example.com" },
    FieldSpec { name: "phone", label: "Phone / WhatsApp", kind: FieldKind::Tel, required: true, placeholder: "+94 70 000 0000" },
    FieldSpec { name: "service", label: "Service", kind: FieldKind::Select, required: true, placeholder: "Select a service" },
    FieldSpec { name: "date", label: "Travel Date", kind: FieldKind::Text, required: false, placeholder: "e.g. 12 March" },
    FieldSpec { name: "message", label: "Message", kind: FieldKind::TextArea, required: true, placeholder: "Tell us about your trip" },
];

const SERVICES: &[&str] = &["Airport Transfer", "Taxi Service", "Tour Package", "Other"];

/// Validates every field, returning the first error per field.
fn validate_all(values: &[String]) -> Vec<Option<FieldError>> {
    FIELDS
        .iter()
        .zip(values)
        .map(|(spec, value)| validate_field(spec.kind, spec.required, value).err())
        .collect()
}

fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let values = use_state(|| vec![String::new(); FIELDS.len()]);
    let errors = use_state(|| vec![None::<FieldError>; FIELDS.len()]);
    let show_success = use_state(|| false);

    let onsubmit = {
        let values = values.clone();
        let errors = errors.clone();
        let show_success = show_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = validate_all(&values);
            let valid = found.iter().all(Option::is_none);
            errors.set(found);
            if !valid {
                return;
            }

            show_success.set(true);
            values.set(vec![String::new(); FIELDS.len()]);
            tracking::track_form_submitted();

            let show_success = show_success.clone();
            let timeout = Timeout::new(SUCCESS_MESSAGE_MS, move || show_success.set(false));
            timeout.forget();
        })
    };

    let fields = FIELDS.iter().enumerate().map(|(index, spec)| {
        let error = errors[index];

        // Typing only re-validates a field already marked as wrong.
        let oninput = {
            let values = values.clone();
            let errors = errors.clone();
            Callback::from(move |e: InputEvent| {
                let value = event_value(&e);
                if errors[index].is_some() {
                    let mut next = (*errors).clone();
                    next[index] = validate_field(spec.kind, spec.required, &value).err();
                    errors.set(next);
                }
                let mut next = (*values).clone();
                next[index] = value;
                values.set(next);
            })
        };

        let onblur = {
            let errors = errors.clone();
            Callback::from(move |e: FocusEvent| {
                let value = event_value(&e);
                let mut next = (*errors).clone();
                next[index] = validate_field(spec.kind, spec.required, &value).err();
                errors.set(next);
            })
        };

        let value = values[index].clone();
        let control = match spec.kind {
            FieldKind::TextArea => html! {
                <textarea name={spec.name} rows="5" placeholder={spec.placeholder}
                    required={spec.required} value={value} {oninput} {onblur} />
            },
            FieldKind::Select => html! {
                <select name={spec.name} required={spec.required} {oninput} {onblur}>
                    <option value="" selected={value.is_empty()}>{spec.placeholder}</option>
                    { for SERVICES.iter().map(|service| html! {
                        <option value={*service} selected={value == *service}>{*service}</option>
                    }) }
                </select>
            },
            kind => {
                let input_type = match kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    _ => "text",
                };
                html! {
                    <input type={input_type} name={spec.name} placeholder={spec.placeholder}
                        required={spec.required} value={value} {oninput} {onblur} />
                }
            }
        };

        html! {
            <div class={classes!("form-group", error.is_some().then(|| "error"))}>
                <label for={spec.name}>{spec.label}{ if spec.required { " *" } else { "" } }</label>
                { control }
                if let Some(error) = error {
                    <span class="error-message">{error.to_string()}</span>
                }
            </div>
        }
    });

    html! {
        <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
            { for fields }
            <button type="submit" class="btn btn-primary"
                onclick={Callback::from(|_: MouseEvent| tracking::track_button_click("Send Message"))}>
                {"Send Message"}
            </button>
            <div id="successMessage" class={classes!("success-message", (*show_success).then(|| "show"))}>
                <i class="fas fa-check-circle"></i>
                {" Thank you! We will get back to you shortly."}
            </div>
        </form>
    }
}
