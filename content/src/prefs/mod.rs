//! User preferences: the durable subset written to client storage and the
//! rehydration protocol that turns a stored payload back into runtime state.

mod language;
mod theme_mode;

pub use language::Language;
pub use theme_mode::Appearance;
pub use theme_mode::ThemeMode;

use dioxus_logger::tracing;
use serde::Deserialize;
use serde::Serialize;

/// Storage key for the durable preference subset.
pub const STORAGE_KEY: &str = "portfolio-store";

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    /// The stored payload exists but does not decode. Distinct from absence
    /// so the rehydration path can log a diagnostic before defaulting.
    #[error("stored preferences are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The wire shape of the durable subset.
///
/// `language` is optional: older payloads may lack it, in which case it is
/// re-derived from the environment's negotiated language list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct StoredPrefs {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl StoredPrefs {
    pub fn decode(raw: &str) -> Result<Self, PrefsError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn encode(&self) -> Result<String, PrefsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Runtime preferences. Unlike [`StoredPrefs`], `language` is always
/// concrete here; the supported set is enforced by the type.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub language: Language,
}

impl Preferences {
    /// Rebuilds runtime preferences from a stored payload.
    ///
    /// Absence defaults silently (`theme = system`, negotiated language).
    /// A corrupt payload is logged and then treated the same as absence.
    /// A stored language wins over negotiation, so an explicit choice
    /// survives reloads without consulting the environment again.
    pub fn rehydrate<S: AsRef<str>>(stored: Option<&str>, negotiated: &[S]) -> Self {
        let fallback = || Self {
            theme: ThemeMode::default(),
            language: Language::negotiate(negotiated),
        };

        match stored {
            None => fallback(),
            Some(raw) => match StoredPrefs::decode(raw) {
                Ok(prefs) => Self {
                    theme: prefs.theme,
                    language: prefs
                        .language
                        .unwrap_or_else(|| Language::negotiate(negotiated)),
                },
                Err(err) => {
                    tracing::warn!("discarding stored preferences: {err}");
                    fallback()
                }
            },
        }
    }

    pub fn to_stored(self) -> StoredPrefs {
        StoredPrefs {
            theme: self.theme,
            language: Some(self.language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_install_defaults_to_system_and_negotiated_language() {
        let prefs = Preferences::rehydrate(None, &["fr-FR"]);
        assert_eq!(prefs.theme, ThemeMode::System);
        assert_eq!(prefs.language, Language::Fr);
        // A dark environment shows dark while the stored mode stays System.
        assert_eq!(prefs.theme.resolve(true), Appearance::Dark);
    }

    #[test]
    fn explicit_theme_choice_overrides_environment() {
        let raw = r#"{"theme":"light","language":"en"}"#;
        let prefs = Preferences::rehydrate(Some(raw), &["en-US"]);
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.theme.resolve(true), Appearance::Light);
    }

    #[test]
    fn stored_language_survives_reload_without_renegotiation() {
        let saved = Preferences {
            theme: ThemeMode::System,
            language: Language::Fr,
        };
        let raw = saved.to_stored().encode().unwrap();
        // The environment negotiates English, but the stored choice wins.
        let restored = Preferences::rehydrate(Some(&raw), &["en-US"]);
        assert_eq!(restored.language, Language::Fr);
    }

    #[test]
    fn absent_language_falls_back_to_negotiation() {
        let raw = r#"{"theme":"dark"}"#;
        let prefs = Preferences::rehydrate(Some(raw), &["fr"]);
        assert_eq!(prefs.theme, ThemeMode::Dark);
        assert_eq!(prefs.language, Language::Fr);
    }

    #[test]
    fn corrupt_payload_is_a_distinct_error_and_defaults() {
        assert!(matches!(
            StoredPrefs::decode("not json"),
            Err(PrefsError::Corrupt(_))
        ));
        assert!(matches!(
            StoredPrefs::decode(r#"{"theme":"blue"}"#),
            Err(PrefsError::Corrupt(_))
        ));

        let prefs = Preferences::rehydrate(Some("not json"), &["en"]);
        assert_eq!(prefs.theme, ThemeMode::System);
        assert_eq!(prefs.language, Language::En);
    }

    #[test]
    fn encoding_is_stable_for_identical_preferences() {
        let prefs = Preferences {
            theme: ThemeMode::Dark,
            language: Language::En,
        };
        // Writing the same state twice produces the same payload, so a
        // repeated set_theme leaves storage byte-identical.
        assert_eq!(
            prefs.to_stored().encode().unwrap(),
            prefs.to_stored().encode().unwrap()
        );
    }

    #[test]
    fn wire_shape_round_trips() {
        let stored = StoredPrefs {
            theme: ThemeMode::Light,
            language: Some(Language::Fr),
        };
        let raw = stored.encode().unwrap();
        assert_eq!(raw, r#"{"theme":"light","language":"fr"}"#);
        assert_eq!(StoredPrefs::decode(&raw).unwrap(), stored);
    }
}
