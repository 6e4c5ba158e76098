//! Wire shapes shared between the ShopSafe client and its backend, plus the
//! small calculations the views derive from them.

mod check_in;
mod county;
mod geo;
mod history;
mod store;

pub use check_in::CheckIn;
pub use county::{CountyStats, StatsError};
pub use geo::{geographic_center, LatLng, LatLngParseError};
pub use history::{DataPoint, RatingData, StoreResult};
pub use store::{LocationResult, Store};
