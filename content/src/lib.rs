//! Pure domain layer for the portfolio site.
//!
//! Holds user preferences (theme mode, language), the theme resolver, the
//! contact-form model, and all bilingual content. Nothing in here touches
//! the browser, so the whole crate is unit-testable on the host.

pub mod contact;
pub mod data;
pub mod i18n;
pub mod prefs;
