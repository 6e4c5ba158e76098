use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page-container">
            <h1>"About ShopSafe"</h1>
            <p>
                "ShopSafe helps you decide when and where to shop. Search a city or address to see nearby
                grocery stores alongside the latest case numbers for the surrounding county."
            </p>
            <p>
                "Each store's score blends four ratings submitted by shoppers after their visit: how easy it
                was to keep your distance, how long the line was, how clean the store looked, and how many
                people were wearing masks."
            </p>
            <p>
                "Ratings are anonymous. Nothing you submit is stored on your device."
            </p>
            <A href="/" attr:class="page-link">"Start a search"</A>
        </div>
    }
}
