pub mod base;
pub mod error_banner;
pub mod navbar;
