use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared_types::LatLng;
use thaw::*;

use crate::routes::{AppRoute, LocationQuery};

/// Where a search box entry should take the user, if anywhere.
pub fn search_route(input: &str) -> Option<AppRoute> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let query = match LatLng::parse(input) {
        Ok(point) => LocationQuery::new(point.to_string(), true),
        Err(_) => LocationQuery::new(input, false),
    };
    Some(AppRoute::results(&query))
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let search_input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(route) = search_route(&search_input.get_untracked()) {
            navigate(&route.href(), Default::default());
        }
    };

    view! {
        <div class="landing-container">
            <div class="landing-hero">
                <h1 class="landing-title">"ShopSafe"</h1>
                <p class="landing-subtitle">
                    "See how crowded, clean and masked-up your nearby grocery stores are before you go."
                </p>
            </div>

            <form class="landing-search" on:submit=on_submit>
                <Input
                    placeholder="City, address, or latitude,longitude"
                    value=search_input
                />
                <Button button_type=ButtonType::Submit appearance=ButtonAppearance::Primary>
                    "Find stores"
                </Button>
            </form>

            <p class="landing-hint">
                "Ratings come from shoppers like you. Check in after your trip to help your neighbours."
            </p>
        </div>
    }
}
