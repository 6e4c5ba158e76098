use serde::{Deserialize, Serialize};

use crate::{CountyStats, Store};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub value: f64,
    #[serde(rename = "Date")]
    pub date: String,
}

/// Daily averages for one rating category (`busy`, `line`, `hygiene`, `mask`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RatingData {
    pub category: String,
    pub data: Vec<DataPoint>,
}

/// Store detail payload with rating and case history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreResult {
    pub store: Vec<Store>,
    pub county_stats: Vec<CountyStats>,
    pub rating_data: RatingData,
    pub covid_data: Vec<DataPoint>,
}
