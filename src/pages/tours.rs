use yew::prelude::*;

use crate::components::page_link::PageLink;

struct Tour {
    title: &'static str,
    days: &'static str,
    image: &'static str,
    highlights: &'static [&'static str],
}

const TOURS: &[Tour] = &[
    Tour {
        title: "Cultural Triangle",
        days: "3 days",
        image: "/assets/sigiriya.jpg",
        highlights: &["Sigiriya Rock Fortress", "Dambulla Cave Temple", "Polonnaruwa ruins"],
    },
    Tour {
        title: "Hill Country Escape",
        days: "4 days",
        image: "/assets/ella.jpg",
        highlights: &["Kandy Temple of the Tooth", "Nuwara Eliya tea estates", "Ella Nine Arch Bridge"],
    },
    Tour {
        title: "Wildlife & Beaches",
        days: "5 days",
        image: "/assets/yala.jpg",
        highlights: &["Yala jeep safari", "Mirissa whale watching", "Galle Fort walk"],
    },
    Tour {
        title: "Grand Island Tour",
        days: "10 days",
        image: "/assets/grand-tour.jpg",
        highlights: &["All of the above", "Private driver-guide", "Hand-picked hotels"],
    },
];

#[function_component(ToursPage)]
pub fn tours_page() -> Html {
    html! {
        <>
            <div class="page-header">
                <h1>{"Tour Packages"}</h1>
                <p>{"Private tours with your own driver-guide. Every itinerary can be adjusted."}</p>
            </div>

            <div class="tours-grid">
                { for TOURS.iter().map(|tour| html! {
                    <div class="tour-card fade-in">
                        <img data-src={tour.image} alt={tour.title} class="tour-image" />
                        <div class="tour-body">
                            <span class="tour-days">{tour.days}</span>
                            <h3>{tour.title}</h3>
                            <ul>
                                { for tour.highlights.iter().map(|h| html! { <li>{*h}</li> }) }
                            </ul>
                            <PageLink href="#contact" class={classes!("btn", "btn-primary")}>{"Enquire"}</PageLink>
                        </div>
                    </div>
                }) }
            </div>
        </>
    }
}
