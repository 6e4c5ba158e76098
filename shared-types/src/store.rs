use serde::{Deserialize, Serialize};

use crate::{CountyStats, LatLng, StatsError};

/// A nearby store with its averaged check-in ratings.
///
/// The rating fields only carry information when `check_in_count > 0`; the
/// backend fills them with placeholder values otherwise.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub open: Option<bool>,
    pub latitude: f64,
    pub longitude: f64,
    pub score: f64,
    pub busy: f64,
    pub line: f64,
    pub hygiene: f64,
    pub masks: f64,
    pub check_in_count: u64,
}

impl Store {
    pub fn has_check_ins(&self) -> bool {
        self.check_in_count > 0
    }

    pub fn position(&self) -> LatLng {
        LatLng {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn open_label(&self) -> &'static str {
        match self.open {
            Some(true) => "Open now",
            Some(false) => "Closed",
            None => "Hours unknown",
        }
    }
}

/// Stores and county statistics returned together for one location query.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocationResult {
    pub stores: Vec<Store>,
    pub county_stats: Vec<CountyStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_location: Option<LatLng>,
}

impl LocationResult {
    pub fn find_store(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|store| store.id == id)
    }

    /// Case percentage of the first county in the result.
    pub fn case_percentage(&self) -> Result<f64, StatsError> {
        self.county_stats
            .first()
            .ok_or(StatsError::NoCountyStats)?
            .case_percentage()
    }
}
