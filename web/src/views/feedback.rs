use leptos::prelude::*;

use crate::config::feedback_form_url;

#[component]
pub fn FeedbackPage() -> impl IntoView {
    view! {
        <div class="page-container">
            <h1>"Feedback"</h1>
            <p>
                "Found a store in the wrong place, a rating that looks off, or something that just doesn't
                work? We'd like to hear about it."
            </p>
            {match feedback_form_url() {
                Some(url) => view! {
                    <a href=url target="_blank" class="page-link">"Open the feedback form"</a>
                }.into_any(),
                None => view! {
                    <p class="page-note">"The feedback form is not available right now. Please check back later."</p>
                }.into_any(),
            }}
        </div>
    }
}
