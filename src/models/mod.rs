pub mod browser;
pub mod languages;
pub mod permissions;
pub mod statistics;
pub mod stats;
pub mod units;
pub mod users;

