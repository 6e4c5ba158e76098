use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::Store;
use thaw::{Card, Label, LabelSize};

use crate::routes::AppRoute;

/// Marker and badge colour for a store's overall score, URL-encoded so it can
/// be dropped into an SVG data URI.
pub fn score_color(store: &Store) -> &'static str {
    if !store.has_check_ins() {
        "%236b7280"
    } else if store.score >= 7.0 {
        "%2316a34a"
    } else if store.score >= 4.0 {
        "%23f97316"
    } else {
        "%23dc2626"
    }
}

pub fn score_label(store: &Store) -> String {
    if store.has_check_ins() {
        format!("{:.1} / 10", store.score)
    } else {
        "No check-ins yet".to_string()
    }
}

#[component]
pub fn StoreCard(store: Store) -> impl IntoView {
    let href = AppRoute::store(store.id.clone()).href();
    let badge_color = score_color(&store).replace("%23", "#");
    let check_ins = match store.check_in_count {
        1 => "1 check-in".to_string(),
        n => format!("{n} check-ins"),
    };
    let name = store.name.clone();
    let address = store.address.clone();
    let score_text = score_label(&store);
    let open_label = store.open_label();

    view! {
        <div class="store-card">
            <Card>
                <div class="store-card__header">
                    <Label size=LabelSize::Large>{name}</Label>
                    <span
                        class="store-card__score"
                        style=format!("background: {badge_color}; color: white;")
                    >
                        {score_text}
                    </span>
                </div>
                <p class="store-card__address">{address}</p>
                <div class="store-card__meta">
                    <span>{open_label}</span>
                    <span>{check_ins}</span>
                </div>
                <A href=href attr:class="store-card__link">"View store"</A>
            </Card>
        </div>
    }
}
