//! Console-only tracking hooks. Nothing here leaves the browser.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ErrorEvent};

use crate::config::{CONTACT_PHONE, SITE_NAME};

pub fn track_page_view(page: &str) {
    gloo_console::log!(format!("📊 Page view: {}", page));
}

pub fn track_whatsapp_click() {
    gloo_console::log!("📱 WhatsApp button clicked");
}

pub fn track_button_click(text: &str) {
    gloo_console::log!(format!("🔘 Button clicked: {}", text.trim()));
}

pub fn track_form_submitted() {
    gloo_console::log!("✅ Form submitted successfully!");
}

pub fn welcome_banner() {
    gloo_console::log!(
        format!("%c🚗 {} Website", SITE_NAME),
        "color: #1e3a8a; font-size: 20px; font-weight: bold;"
    );
    gloo_console::log!(
        "%c✨ Powered by Rust and WebAssembly",
        "color: #f59e0b; font-size: 14px;"
    );
    gloo_console::log!(
        format!("%c📞 Contact: {}", CONTACT_PHONE),
        "color: #10b981; font-size: 12px;"
    );
}

/// Logs uncaught script errors for the lifetime of the page.
pub fn install_error_logger() {
    let Some(window) = window() else {
        return;
    };

    let on_error = Closure::wrap(Box::new(move |event: ErrorEvent| {
        log::error!("❌ JavaScript Error: {}", event.message());
    }) as Box<dyn FnMut(ErrorEvent)>);

    if window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not install window error listener");
    }
    on_error.forget();
}
