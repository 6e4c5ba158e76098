use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{CheckIn, Store};
use thaw::*;

use crate::api::{ApiError, ApiService, CheckInAck, StoreApi};
use crate::config::CHECK_IN_DIALOG;

/// Rating values the modal opens with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckInForm {
    pub busy: f64,
    pub line: f64,
    pub hygiene: f64,
    pub mask: f64,
}

impl CheckInForm {
    /// Starts from the store's current averages once it has any check-ins,
    /// otherwise from zero.
    pub fn for_store(store: &Store) -> Self {
        if store.check_in_count != 0 {
            Self {
                busy: store.busy,
                line: store.line,
                hygiene: store.hygiene,
                mask: store.masks,
            }
        } else {
            Self::default()
        }
    }

    pub fn into_check_in(self, store_id: impl Into<String>) -> CheckIn {
        CheckIn {
            store_id: store_id.into(),
            busy: self.busy,
            line: self.line,
            hygiene: self.hygiene,
            mask: self.mask,
        }
    }
}

/// Sends one check-in built from `form` and hands back the backend's answer.
pub async fn submit_check_in_form<A: StoreApi>(
    api: &A,
    form: CheckInForm,
    store_id: &str,
) -> Result<CheckInAck, ApiError> {
    let check_in = form.into_check_in(store_id);
    log!("submitting check-in for store {}", check_in.store_id);
    api.submit_check_in(&check_in).await
}

fn format_rating(value: f64) -> String {
    format!("{value:.1}")
}

#[component]
fn RatingSlider(
    label: &'static str,
    value: RwSignal<f64>,
    visible: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="rating-row">
            <button
                class="rating-toggle"
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                <span class="rating-label">{label}</span>
                <span class="rating-value">{move || format_rating(value.get())}</span>
            </button>
            <Show when=move || visible.get()>
                <Slider value=value min=0.0 max=10.0 step=1.0 />
            </Show>
        </div>
    }
}

#[component]
pub fn CheckInModal(
    show: RwSignal<bool>,
    store: Store,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let api = use_context::<ApiService>().unwrap_or_default();
    let initial = CheckInForm::for_store(&store);

    let busy = RwSignal::new(initial.busy);
    let line = RwSignal::new(initial.line);
    let hygiene = RwSignal::new(initial.hygiene);
    let mask = RwSignal::new(initial.mask);

    let busy_slider = RwSignal::new(false);
    let line_slider = RwSignal::new(false);
    let hygiene_slider = RwSignal::new(false);
    let mask_slider = RwSignal::new(false);

    let store_id = store.id.clone();
    let check_in = move |_| {
        let form = CheckInForm {
            busy: busy.get_untracked(),
            line: line.get_untracked(),
            hygiene: hygiene.get_untracked(),
            mask: mask.get_untracked(),
        };
        let api = api.clone();
        let store_id = store_id.clone();
        spawn_local(async move {
            match submit_check_in_form(&api, form, &store_id).await {
                Ok(ack) => log!("check-in recorded for store {}", ack.store_id),
                Err(err) => error!("check-in for store {store_id} was not recorded: {err}"),
            }
        });

        // The dialog closes whether or not the backend accepts the check-in.
        on_close();
    };

    view! {
        <div class=move || if show.get() { "check-in-overlay show" } else { "check-in-overlay" }>
            <div class="check-in-modal" id=CHECK_IN_DIALOG.id style=CHECK_IN_DIALOG.style()>
                <div class="modal-header">
                    <h2>{format!("Check in at {}", store.name)}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                        class="close-button"
                    >
                        "×"
                    </Button>
                </div>

                <div class="modal-content">
                    <p class="modal-subtitle">
                        "Rate each category from 0 to 10. Tap a category to adjust it."
                    </p>
                    <RatingSlider label="Social distancing" value=busy visible=busy_slider />
                    <RatingSlider label="Wait time" value=line visible=line_slider />
                    <RatingSlider label="Cleanliness" value=hygiene visible=hygiene_slider />
                    <RatingSlider label="Mask usage" value=mask visible=mask_slider />
                </div>

                <div class="form-actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close()>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=check_in>
                        "Check in"
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::api::fake::FakeApi;

    fn store(check_in_count: u64) -> Store {
        Store {
            id: "ChIJ123".to_string(),
            name: "Corner Market".to_string(),
            address: "12 Pike St".to_string(),
            open: Some(true),
            latitude: 47.61,
            longitude: -122.33,
            score: 7.0,
            busy: 6.0,
            line: 4.5,
            hygiene: 8.0,
            masks: 9.5,
            check_in_count,
        }
    }

    #[test]
    fn store_without_check_ins_starts_at_zero() {
        assert_eq!(CheckInForm::for_store(&store(0)), CheckInForm::default());
    }

    #[test]
    fn store_with_check_ins_starts_at_its_averages() {
        assert_eq!(
            CheckInForm::for_store(&store(4)),
            CheckInForm {
                busy: 6.0,
                line: 4.5,
                hygiene: 8.0,
                mask: 9.5,
            }
        );
    }

    #[test]
    fn form_becomes_check_in_for_the_given_store() {
        let check_in = CheckInForm::for_store(&store(4)).into_check_in("ChIJ123");
        assert_eq!(check_in.store_id, "ChIJ123");
        assert_eq!(check_in.mask, 9.5);
    }

    #[test]
    fn ratings_display_with_one_decimal() {
        assert_eq!(format_rating(6.0), "6.0");
        assert_eq!(format_rating(4.26), "4.3");
    }

    #[test]
    fn submit_sends_one_check_in_with_the_form_values() {
        let api = FakeApi::answering(Ok(Default::default()));
        let form = CheckInForm {
            busy: 3.0,
            line: 4.0,
            hygiene: 7.5,
            mask: 10.0,
        };

        let ack = block_on(submit_check_in_form(&api, form, "ChIJ123"));

        assert_eq!(
            ack,
            Ok(CheckInAck {
                store_id: "ChIJ123".to_string(),
            })
        );
        assert_eq!(
            *api.check_ins.borrow(),
            vec![CheckIn {
                store_id: "ChIJ123".to_string(),
                busy: 3.0,
                line: 4.0,
                hygiene: 7.5,
                mask: 10.0,
            }]
        );
    }

    #[test]
    fn rejected_submit_reaches_the_caller() {
        let rejection = ApiError::Status {
            status: 500,
            message: "Unable to save check-in".to_string(),
        };
        let api = FakeApi::rejecting_check_ins(rejection.clone());

        let result = block_on(submit_check_in_form(
            &api,
            CheckInForm::for_store(&store(0)),
            "ChIJ123",
        ));

        assert_eq!(result, Err(rejection));
        assert_eq!(api.check_ins.borrow().len(), 1);
    }
}
