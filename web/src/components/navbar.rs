use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                <span class="site-header__name">"ShopSafe"</span>
                <span class="site-header__tagline">"Know before you go"</span>
            </A>
            <nav class="site-header__nav" aria-label="Main">
                <A href="/" attr:class="site-header__link">"New search"</A>
                <A href="/about" attr:class="site-header__link">"How it works"</A>
                <A href="/feedback" attr:class="site-header__link site-header__link--outlined">
                    "Send feedback"
                </A>
            </nav>
        </header>
    }
}
