use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use shared_types::LocationResult;

use crate::{
    api::{ApiService, StoreApi},
    components::{
        error::ErrorView, loading::LoadingView, CountyStatsPanel, StoreCard, StoreMap,
    },
    routes::LocationQuery,
    state::use_search_state,
};

/// A loaded search plus the statistic derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSummary {
    pub result: LocationResult,
    pub case_percentage: Option<f64>,
}

impl ResultSummary {
    pub fn new(result: LocationResult) -> Self {
        let case_percentage = match result.case_percentage() {
            Ok(percentage) => {
                log!("calculated case percentage as {percentage}");
                Some(percentage)
            }
            Err(err) => {
                warn!("case percentage unavailable: {err}");
                None
            }
        };

        Self {
            result,
            case_percentage,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultState {
    Loading,
    Ready(ResultSummary),
    Failed(String),
}

/// Fetches the stores for `query` once and settles the page state.
pub async fn load_result<A: StoreApi>(api: &A, query: &LocationQuery) -> ResultState {
    log!("fetching nearby stores for {}", query.location);
    match api.fetch_nearby_stores(query).await {
        Ok(result) => ResultState::Ready(ResultSummary::new(result)),
        Err(err) => {
            error!("could not load stores near {}: {err}", query.location);
            ResultState::Failed(err.to_string())
        }
    }
}

/// Keeps `next` only when `ticket` is still the latest fetch issued.
/// Responses to superseded queries are dropped.
pub fn settle(ticket: u64, latest: u64, next: ResultState) -> Option<ResultState> {
    (ticket == latest).then_some(next)
}

#[component]
fn ResultBody(summary: ResultSummary) -> impl IntoView {
    let ResultSummary {
        result,
        case_percentage,
    } = summary;
    let county = result.county_stats.first().cloned();
    let store_count = result.stores.len();

    view! {
        <div class="result-body">
            <CountyStatsPanel county=county case_percentage=case_percentage />
            <StoreMap stores=result.stores.clone() user_location=result.user_location />
            <h2 class="result-subtitle">
                {match store_count {
                    1 => "1 store nearby".to_string(),
                    n => format!("{n} stores nearby"),
                }}
            </h2>
            <div class="store-list">
                {result
                    .stores
                    .into_iter()
                    .map(|store| view! { <StoreCard store=store /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ResultPage() -> impl IntoView {
    let params = use_params_map();
    let api = use_context::<ApiService>().unwrap_or_default();
    let search = use_search_state();

    let query = Memo::new(move |_| {
        let params = params.read();
        LocationQuery::from_params(
            params.get("location").as_deref(),
            params.get("latlng").as_deref(),
        )
    });

    let state = RwSignal::new(ResultState::Loading);
    let latest_fetch = RwSignal::new(0u64);

    Effect::new(move |_| {
        latest_fetch.update_untracked(|n| *n += 1);
        let ticket = latest_fetch.get_untracked();

        match query.get() {
            Ok(query) => {
                state.set(ResultState::Loading);
                let api = api.clone();
                spawn_local(async move {
                    let next = load_result(&api, &query).await;
                    let Some(next) = settle(ticket, latest_fetch.get_untracked(), next) else {
                        log!("discarding stale results for {}", query.location);
                        return;
                    };
                    if let ResultState::Ready(summary) = &next {
                        search.result.set(Some(summary.result.clone()));
                    }
                    state.set(next);
                });
            }
            Err(err) => state.set(ResultState::Failed(err.to_string())),
        }
    });

    view! {
        <div class="result-container">
            <h1 class="result-title">
                {move || match query.get() {
                    Ok(query) => format!("Stores near {}", query.location),
                    Err(_) => "Stores".to_string(),
                }}
            </h1>
            {move || match state.get() {
                ResultState::Loading => view! {
                    <LoadingView message="Finding nearby stores..." />
                }.into_any(),
                ResultState::Failed(message) => view! {
                    <ErrorView message=Some(message) back_home=true />
                }.into_any(),
                ResultState::Ready(summary) => view! {
                    <ResultBody summary=summary />
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use shared_types::CountyStats;

    use super::*;
    use crate::api::{fake::FakeApi, ApiError};
    use crate::routes::AppRoute;

    fn king_county(cases: u64, population: u64) -> CountyStats {
        CountyStats {
            county_name: "King".to_string(),
            state_name: "Washington".to_string(),
            cases,
            deaths: 0,
            active_cases: 0,
            population,
        }
    }

    #[test]
    fn result_route_fetches_once_with_parsed_location() {
        let api = FakeApi::answering(Ok(LocationResult::default()));
        let AppRoute::Results { location, latlng } =
            AppRoute::from_path("/result/Seattle/47.6,-122.3")
        else {
            panic!("expected a result route");
        };
        let query =
            LocationQuery::from_params(Some(location.as_str()), Some(latlng.as_str())).unwrap();

        block_on(load_result(&api, &query));

        assert_eq!(
            *api.fetches.borrow(),
            vec![LocationQuery::new("Seattle", false)]
        );
    }

    #[test]
    fn successful_fetch_computes_case_percentage() {
        let result = LocationResult {
            county_stats: vec![king_county(50, 1000)],
            ..Default::default()
        };
        let api = FakeApi::answering(Ok(result.clone()));

        let state = block_on(load_result(&api, &LocationQuery::new("Seattle", false)));

        assert_eq!(
            state,
            ResultState::Ready(ResultSummary {
                result,
                case_percentage: Some(5.0),
            })
        );
    }

    #[test]
    fn empty_county_stats_leave_percentage_unset() {
        let api = FakeApi::answering(Ok(LocationResult::default()));

        let state = block_on(load_result(&api, &LocationQuery::new("Seattle", false)));

        let ResultState::Ready(summary) = state else {
            panic!("expected a ready state");
        };
        assert_eq!(summary.case_percentage, None);
    }

    #[test]
    fn failed_fetch_surfaces_the_error_message() {
        let api = FakeApi::answering(Err(ApiError::Status {
            status: 400,
            message: "Failed to find the location of: Atlantis".to_string(),
        }));

        let state = block_on(load_result(&api, &LocationQuery::new("Atlantis", false)));

        assert_eq!(
            state,
            ResultState::Failed(
                "server responded with 400: Failed to find the location of: Atlantis"
                    .to_string()
            )
        );
        assert_eq!(api.fetches.borrow().len(), 1);
    }

    #[test]
    fn late_response_for_an_old_query_is_dropped() {
        let first = FakeApi::answering(Ok(LocationResult {
            county_stats: vec![king_county(10, 1000)],
            ..Default::default()
        }));
        let second = FakeApi::answering(Ok(LocationResult {
            county_stats: vec![king_county(50, 1000)],
            ..Default::default()
        }));

        // A is issued as fetch 1, then the route moves to B (fetch 2).
        let (ticket_a, ticket_b, latest) = (1, 2, 2);

        let response_b = block_on(load_result(&second, &LocationQuery::new("Bellevue", false)));
        let settled_b = settle(ticket_b, latest, response_b.clone());
        assert_eq!(settled_b, Some(response_b));

        let response_a = block_on(load_result(&first, &LocationQuery::new("Seattle", false)));
        assert!(matches!(response_a, ResultState::Ready(_)));
        assert_eq!(settle(ticket_a, latest, response_a), None);
    }

    #[test]
    fn failures_for_an_old_query_are_dropped_too() {
        assert_eq!(settle(1, 3, ResultState::Failed("timeout".to_string())), None);
        assert_eq!(
            settle(3, 3, ResultState::Failed("timeout".to_string())),
            Some(ResultState::Failed("timeout".to_string()))
        );
    }
}
