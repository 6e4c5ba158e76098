use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn MobilePage() -> impl IntoView {
    view! {
        <div class="page-container page-container--narrow">
            <h1>"ShopSafe on your phone"</h1>
            <p>
                "Some views, like the store map, work best on a larger screen. You can still search and
                check in from here."
            </p>
            <A href="/" attr:class="page-link">"Continue to ShopSafe"</A>
        </div>
    }
}
