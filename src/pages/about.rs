use yew::prelude::*;

use crate::components::stats::{Stat, StatsSection};

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let stats = vec![
        Stat::new("25", "", "Vehicles"),
        Stat::new("18", "", "Drivers & Guides"),
        Stat::new("1200", "+", "Airport Pickups a Year"),
    ];

    html! {
        <>
            <div class="page-header">
                <h1>{"About Us"}</h1>
                <p>{"A family-run transport and tour company based near Colombo."}</p>
            </div>

            <div class="about-story fade-in">
                <h2>{"Our Story"}</h2>
                <p>{"What started as a single car waiting at the airport arrivals hall has grown into a fleet of drivers who know every road, rest stop and viewpoint on the island."}</p>
                <p>{"We still work the same way: one driver looks after you for the whole trip, prices are fixed before you set off, and the route is yours to change."}</p>
            </div>

            <StatsSection stats={stats} class="about-stats-section" />
        </>
    }
}
