use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Placeholder shown while the backend looks up a location.
#[component]
pub fn LoadingView(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-container" role="status" aria-live="polite">
            <Spinner size=SpinnerSize::Large />
            <p class="loading-message">{message}</p>
        </div>
    }
}
