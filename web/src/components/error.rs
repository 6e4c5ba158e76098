use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{MessageBar, MessageBarIntent};

/// Inline failure message. `back_home` adds a link to start a new search.
#[component]
pub fn ErrorView(
    message: Option<String>,
    #[prop(optional)] back_home: bool,
) -> impl IntoView {
    view! {
        <div class="error-container">
            <MessageBar intent=MessageBarIntent::Error>
                {message.unwrap_or_else(|| "Something went wrong. Please try again.".to_string())}
            </MessageBar>
            {back_home.then(|| view! {
                <A href="/" attr:class="error-home-link">"Search another location"</A>
            })}
        </div>
    }
}
