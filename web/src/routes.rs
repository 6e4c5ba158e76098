//! Client-side route table and the parameters the routed views read.

use std::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("a location must be provided")]
    MissingLocation,
}

/// Every page the app can route to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    Results { location: String, latlng: String },
    Store { id: String },
    About,
    Feedback,
    Mobile,
    NotFound,
}

impl AppRoute {
    pub fn results(query: &LocationQuery) -> Self {
        AppRoute::Results {
            location: query.location.clone(),
            latlng: query.latlng.to_string(),
        }
    }

    pub fn store(id: impl Into<String>) -> Self {
        AppRoute::Store { id: id.into() }
    }

    pub fn href(&self) -> String {
        match self {
            AppRoute::Landing => "/".to_string(),
            AppRoute::Results { location, latlng } => format!(
                "/result/{}/{}",
                urlencoding::encode(location),
                urlencoding::encode(latlng)
            ),
            AppRoute::Store { id } => format!("/store/{}", urlencoding::encode(id)),
            AppRoute::About => "/about".to_string(),
            AppRoute::Feedback => "/feedback".to_string(),
            AppRoute::Mobile => "/mobile".to_string(),
            AppRoute::NotFound => "/404".to_string(),
        }
    }

    /// Matches a path against the table. Accepts the `#/...` form older
    /// hash-routed links used.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<Cow<'_, str>> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_segment)
            .collect();

        match segments.as_slice() {
            [] => AppRoute::Landing,
            [page, location, latlng] if page == "result" => AppRoute::Results {
                location: location.to_string(),
                latlng: latlng.to_string(),
            },
            [page, id] if page == "store" => AppRoute::store(id.to_string()),
            [page] if page == "about" => AppRoute::About,
            [page] if page == "feedback" => AppRoute::Feedback,
            [page] if page == "mobile" => AppRoute::Mobile,
            _ => AppRoute::NotFound,
        }
    }
}

/// The location search a result page was opened for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationQuery {
    pub location: String,
    /// `true` when `location` is a `lat,lng` pair rather than free text.
    pub latlng: bool,
}

impl LocationQuery {
    pub fn new(location: impl Into<String>, latlng: bool) -> Self {
        Self {
            location: location.into(),
            latlng,
        }
    }

    /// Builds the query from the `:location` and `:latlng` route segments.
    /// Both arrive already percent-decoded by the router.
    pub fn from_params(location: Option<&str>, latlng: Option<&str>) -> Result<Self, RouteError> {
        let location = location
            .filter(|l| !l.trim().is_empty())
            .ok_or(RouteError::MissingLocation)?;
        let latlng = latlng.is_some_and(|flag| flag.trim() == "true");

        Ok(Self::new(location.trim(), latlng))
    }
}

fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}
