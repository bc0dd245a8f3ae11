use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::faq::Faq;
use crate::components::whatsapp::WhatsAppButton;
use crate::config::CONTACT_PHONE;

const QUESTIONS: &[(&str, &str)] = &[
    ("How do I pay?", "Cash in LKR, USD or EUR to the driver, or a bank transfer before the trip."),
    ("Can you pick me up at the airport at night?", "Yes. We track your flight and wait at arrivals whatever the hour."),
    ("Are your prices per person?", "No. Taxi and tour prices are per vehicle, so groups share the cost."),
    ("Can I change my tour once it has started?", "Of course. Tell your driver and we will re-plan the route and hotels."),
];

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let items: Vec<(AttrValue, AttrValue)> = QUESTIONS
        .iter()
        .map(|(q, a)| (AttrValue::from(*q), AttrValue::from(*a)))
        .collect();

    html! {
        <>
            <div class="page-header">
                <h1>{"Contact"}</h1>
                <p>{"Send us your dates and plans. We usually reply within a few hours."}</p>
            </div>

            <div class="contact-grid">
                <div class="contact-info fade-in">
                    <h3>{"Call or message"}</h3>
                    <p><i class="fas fa-phone"></i>{" "}{CONTACT_PHONE}</p>
                    <WhatsAppButton label="Start a WhatsApp chat" />
                </div>
                <div class="contact-form-wrapper fade-in">
                    <ContactForm />
                </div>
            </div>

            <div class="faq-section">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <Faq items={items} />
            </div>
        </>
    }
}
