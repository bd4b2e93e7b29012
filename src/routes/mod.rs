pub mod accounts;

pub mod languages;

pub use accounts::configure_account_routes;
pub use languages::configure_language_routes;
