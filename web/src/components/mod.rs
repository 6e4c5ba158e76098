pub mod check_in_modal;
pub mod county_stats;
pub mod error;
pub mod loading;
pub mod navbar;
pub mod store_card;
pub mod store_map;

pub use check_in_modal::CheckInModal;
pub use county_stats::CountyStatsPanel;
pub use store_card::StoreCard;
pub use store_map::StoreMap;
