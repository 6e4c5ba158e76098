use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use shared_types::Store;
use thaw::{Button, ButtonAppearance};

use crate::{
    components::{error::ErrorView, CheckInModal},
    state::{resolve_store, use_search_state},
};

#[component]
fn StoreDetail(store: Store) -> impl IntoView {
    // The check-in dialog opens as soon as the store is shown.
    let show_modal = RwSignal::new(true);
    let close_modal = move || show_modal.set(false);

    let ratings = [
        ("Social distancing", store.busy),
        ("Wait time", store.line),
        ("Cleanliness", store.hygiene),
        ("Mask usage", store.masks),
    ];

    view! {
        <div class="store-detail">
            <div class="store-header">
                <h1 class="store-title">{store.name.clone()}</h1>
                <p class="store-address">{store.address.clone()}</p>
                <p class="store-open">{store.open_label()}</p>
            </div>

            {if store.has_check_ins() {
                view! {
                    <div class="store-ratings">
                        <p class="store-score">{format!("Overall score: {:.1} / 10", store.score)}</p>
                        {ratings
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div class="store-rating">
                                    <span>{label}</span>
                                    <span>{format!("{value:.1}")}</span>
                                </div>
                            })
                            .collect_view()}
                        <p class="store-check-ins">
                            {format!("Based on {} check-ins", store.check_in_count)}
                        </p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <p class="store-ratings store-ratings--empty">
                        "Nobody has checked in here yet. Be the first."
                    </p>
                }.into_any()
            }}

            <Button appearance=ButtonAppearance::Primary on_click=move |_| show_modal.set(true)>
                "Check in"
            </Button>

            <CheckInModal show=show_modal store=store.clone() on_close=close_modal />
        </div>
    }
}

#[component]
pub fn StorePage() -> impl IntoView {
    let params = use_params_map();
    let search = use_search_state();

    let store_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let lookup = Memo::new(move |_| {
        let id = store_id.get();
        search.result.with(|result| resolve_store(result.as_ref(), &id))
    });

    view! {
        <div class="store-container">
            {move || match lookup.get() {
                Ok(store) => view! { <StoreDetail store=store /> }.into_any(),
                Err(err) => {
                    warn!("cannot open store {}: {err}", store_id.get_untracked());
                    view! {
                        <ErrorView
                            message=Some(format!("{err}. Search for a location to pick a store."))
                            back_home=true
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
