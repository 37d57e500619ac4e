use serde::Deserialize;
use serde::Serialize;

/// A supported interface language.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIs,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const SUPPORTED: [Language; 2] = [Language::En, Language::Fr];

    /// Matches a BCP 47 tag (`fr-CA`, `en_US`, ...) by its primary subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// Picks the first supported language from the environment's negotiated
    /// list, falling back to the default when nothing matches.
    pub fn negotiate<S: AsRef<str>>(tags: &[S]) -> Self {
        tags.iter()
            .find_map(|tag| Self::from_tag(tag.as_ref()))
            .unwrap_or_default()
    }

    /// The other supported language, for the navbar toggle.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_subtag_is_matched() {
        assert_eq!(Language::from_tag("en-US"), Some(Language::En));
        assert_eq!(Language::from_tag("fr-CA"), Some(Language::Fr));
        assert_eq!(Language::from_tag("FR"), Some(Language::Fr));
        assert_eq!(Language::from_tag("de-DE"), None);
    }

    #[test]
    fn negotiation_prefers_the_first_supported_tag() {
        let tags = ["de-DE", "fr-FR", "en-US"];
        assert_eq!(Language::negotiate(&tags), Language::Fr);
    }

    #[test]
    fn negotiation_falls_back_to_the_default() {
        assert_eq!(Language::negotiate(&["de", "ja"]), Language::En);
        assert_eq!(Language::negotiate::<&str>(&[]), Language::En);
    }

    #[test]
    fn toggle_is_an_involution() {
        for lang in Language::SUPPORTED {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }
}
