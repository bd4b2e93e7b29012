pub mod auth;
pub mod browser;
pub mod context;
pub mod languages;
pub mod permissions;
pub mod stats;

pub use auth::AuthService;
pub use languages::LanguageService;
