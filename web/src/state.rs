use leptos::prelude::*;
use shared_types::{LocationResult, Store};
use thiserror::Error;

/// The most recent successful location search, shared between the result
/// page that loads it and the store page that reads from it.
#[derive(Clone, Copy)]
pub struct SearchState {
    pub result: RwSignal<Option<LocationResult>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            result: RwSignal::new(None),
        }
    }
}

pub fn provide_search_state() -> SearchState {
    let state = SearchState::new();
    provide_context(state);
    state
}

pub fn use_search_state() -> SearchState {
    use_context::<SearchState>().unwrap_or_else(provide_search_state)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreLookupError {
    #[error("no search has been loaded yet")]
    NoSearchLoaded,
    #[error("store {0} is not part of the current search")]
    UnknownStore(String),
}

/// Finds the store a `/store/:id` page refers to.
pub fn resolve_store(results: Option<&LocationResult>, id: &str) -> Result<Store, StoreLookupError> {
    results
        .ok_or(StoreLookupError::NoSearchLoaded)?
        .find_store(id)
        .cloned()
        .ok_or_else(|| StoreLookupError::UnknownStore(id.to_string()))
}
