use yew::prelude::*;

use crate::components::page_link::PageLink;
use crate::components::whatsapp::WhatsAppButton;

struct Vehicle {
    name: &'static str,
    icon: &'static str,
    seats: &'static str,
    rate: &'static str,
}

const VEHICLES: &[Vehicle] = &[
    Vehicle { name: "Economy Car", icon: "fa-car-side", seats: "1-3 passengers", rate: "LKR 110 / km" },
    Vehicle { name: "Comfort Sedan", icon: "fa-car", seats: "1-3 passengers", rate: "LKR 130 / km" },
    Vehicle { name: "Family Van", icon: "fa-shuttle-van", seats: "4-8 passengers", rate: "LKR 160 / km" },
    Vehicle { name: "Mini Coach", icon: "fa-bus", seats: "9-20 passengers", rate: "On request" },
];

#[function_component(TaxiPage)]
pub fn taxi_page() -> Html {
    html! {
        <>
            <div class="page-header">
                <h1>{"Taxi Services"}</h1>
                <p>{"Airport runs, city hops and long-distance transfers at honest, fixed prices."}</p>
            </div>

            <div class="vehicles-grid">
                { for VEHICLES.iter().map(|v| html! {
                    <div class="vehicle-card fade-in">
                        <i class={classes!("fas", v.icon)}></i>
                        <h3>{v.name}</h3>
                        <p class="vehicle-seats">{v.seats}</p>
                        <p class="vehicle-rate">{v.rate}</p>
                    </div>
                }) }
            </div>

            <div class="taxi-info fade-in">
                <h2>{"Every ride includes"}</h2>
                <ul>
                    <li>{"Air-conditioned vehicle and bottled water"}</li>
                    <li>{"Free waiting time on airport pickups"}</li>
                    <li>{"Child seats on request"}</li>
                    <li>{"Tolls and parking in the quoted price"}</li>
                </ul>
                <div class="taxi-actions">
                    <PageLink href="#contact" class={classes!("btn", "btn-primary")}>{"Request a Quote"}</PageLink>
                    <WhatsAppButton label="Book on WhatsApp" message="Hi! I need a taxi." />
                </div>
            </div>
        </>
    }
}
