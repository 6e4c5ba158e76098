use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
    NavigateOptions, ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::{
    api::ApiService,
    components::navbar::Navbar,
    config::ApiConfig,
    routes::AppRoute,
    state::provide_search_state,
    views::{
        about::AboutPage, feedback::FeedbackPage, landing::LandingPage, mobile::MobilePage,
        not_found::NotFoundPage, result::ResultPage, store::StorePage,
    },
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/leaflet@1.9.3/dist/leaflet.css"
                />
                <script
                    src="https://unpkg.com/leaflet@1.9.3/dist/leaflet.js"
                    defer
                ></script>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

/// Rewrites old `/#/result/...` style links onto the path router.
#[component]
fn LegacyHashRedirect() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let hash = location.hash.get();
        if !hash.starts_with("#/") {
            return;
        }
        let target = AppRoute::from_path(&hash).href();
        navigate(
            &target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiService::new(ApiConfig::from_build_env()));
    provide_search_state();

    view! {
        <Stylesheet id="leptos" href="/pkg/shopsafe.css"/>
        <Title text="ShopSafe"/>

        <ConfigProvider>
            <Router>
                <LegacyHashRedirect/>
                <Navbar/>
                <main>
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=LandingPage/>
                        <Route
                            path=(StaticSegment("result"), ParamSegment("location"), ParamSegment("latlng"))
                            view=ResultPage
                        />
                        <Route path=(StaticSegment("store"), ParamSegment("id")) view=StorePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("feedback") view=FeedbackPage/>
                        <Route path=StaticSegment("mobile") view=MobilePage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
