use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountyStats {
    pub county_name: String,
    pub state_name: String,
    pub cases: u64,
    pub deaths: u64,
    pub active_cases: u64,
    pub population: u64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("no county statistics were returned for this location")]
    NoCountyStats,
    #[error("county population is zero")]
    ZeroPopulation,
}

impl CountyStats {
    /// Cases as a percentage of population, rounded to two decimal places.
    pub fn case_percentage(&self) -> Result<f64, StatsError> {
        if self.population == 0 {
            return Err(StatsError::ZeroPopulation);
        }
        let basis_points = self.cases as f64 * 10_000.0 / self.population as f64;
        Ok(basis_points.round() / 100.0)
    }

    pub fn display_name(&self) -> String {
        format!("{} County, {}", self.county_name, self.state_name)
    }
}
