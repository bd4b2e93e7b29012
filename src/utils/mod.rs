pub mod i18n;
pub mod json;
pub mod jwt;
pub mod password;
pub mod sql;
pub mod time;

pub use i18n::tr_lang;
pub use json::jsonify;
pub use sql::escape_like_pattern;
