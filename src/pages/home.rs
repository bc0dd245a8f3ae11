use yew::prelude::*;

use crate::components::page_link::{InPageAnchor, PageLink};
use crate::components::stats::{Stat, StatsSection};
use crate::components::whatsapp::WhatsAppButton;

const FEATURES: &[(&str, &str, &str)] = &[
    ("fa-plane-arrival", "Airport Transfers", "Meet-and-greet pickups from Bandaranaike International, day or night."),
    ("fa-route", "Island-wide Taxi", "Comfortable cars and vans with English-speaking drivers to any town."),
    ("fa-mountain", "Tailored Tours", "Tea country, ancient cities, wildlife safaris and southern beaches."),
    ("fa-shield-alt", "Safe & Licensed", "Registered vehicles, insured trips and fixed prices agreed up front."),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let stats = vec![
        Stat::new("5000", "+", "Happy Travellers"),
        Stat::new("12", "+", "Years on the Road"),
        Stat::new("150", "+", "Tours Completed"),
        Stat::new("4.9", "/5", "Guest Rating"),
    ];

    html! {
        <>
            <div class="hero">
                <div class="hero-content">
                    <h1>{"Explore Sri Lanka with a Driver You Can Trust"}</h1>
                    <p>{"Private taxis and guided tours from the airport to the hills, the ruins and the sea."}</p>
                    <div class="hero-buttons">
                        <PageLink href="#taxi" class={classes!("btn", "btn-primary")}>{"Book a Taxi"}</PageLink>
                        <PageLink href="#tours" class={classes!("btn", "btn-secondary")}>{"View Tours"}</PageLink>
                        <WhatsAppButton label="WhatsApp Us" message="Hi! I would like to book a ride." />
                    </div>
                    <InPageAnchor href="#why-us" class={classes!("scroll-hint")}>
                        <i class="fas fa-chevron-down"></i>
                    </InPageAnchor>
                </div>
            </div>

            <div id="why-us" class="features">
                <h2 class="section-title">{"Why Travel With Us"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <div class="feature-card fade-in">
                            <i class={classes!("fas", *icon)}></i>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </div>

            <StatsSection stats={stats} />

            <div class="cta-banner fade-in">
                <h2>{"Ready for your Sri Lankan adventure?"}</h2>
                <PageLink href="#contact" class={classes!("btn", "btn-primary")}>{"Plan My Trip"}</PageLink>
            </div>
        </>
    }
}
