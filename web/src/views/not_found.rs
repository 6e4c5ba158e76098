use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Catch-all page for paths outside the route table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let navigate = use_navigate();

    view! {
        <div style="min-height: 80vh; display: flex; align-items: center; justify-content: center; padding: 1rem;">
            <div style="max-width: 600px; width: 100%; text-align: center;">
                <div style="font-size: 6rem; font-weight: 900; color: #0f766e; margin: 0; line-height: 1;">
                    "404"
                </div>

                <div style="background: white; border-radius: 20px; padding: 2.5rem 2rem; box-shadow: 0 20px 40px rgba(0,0,0,0.1); margin: 2rem 0;">
                    <h1 style="font-size: 2rem; font-weight: 700; color: #2d3748; margin: 0 0 1rem 0;">
                        "Page Not Found"
                    </h1>

                    <p style="font-size: 1.1rem; color: #4a5568; margin: 0 0 2rem 0; line-height: 1.6;">
                        "We couldn't find that page. It may have moved, or the link may be incomplete."
                    </p>

                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem;">
                        <button
                            on:click={
                                let navigate = navigate.clone();
                                move |_| {
                                    navigate("/", Default::default());
                                }
                            }
                            style="background: #0f766e; color: white; padding: 1rem 1.5rem; border-radius: 12px; border: none; font-size: 1rem; font-weight: 600; cursor: pointer;">
                            "Search for stores"
                        </button>

                        <button
                            on:click={
                                let navigate = navigate.clone();
                                move |_| {
                                    navigate("/about", Default::default());
                                }
                            }
                            style="background: transparent; color: #0f766e; padding: 1rem 1.5rem; border: 2px solid #0f766e; border-radius: 12px; font-size: 1rem; font-weight: 600; cursor: pointer;">
                            "About ShopSafe"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
