use serde::Deserialize;
use serde::Serialize;

/// The user's selected theme preference. `System` defers to the
/// environment's color-scheme signal at resolution time.
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
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// The concrete appearance actually rendered. Always derived from
/// [`ThemeMode`] and the current environment signal, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display, strum::EnumIs)]
#[strum(serialize_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl ThemeMode {
    /// Maps a theme mode to the appearance to render.
    ///
    /// `Light` and `Dark` ignore the environment signal; `System` follows
    /// it. Pure and stateless, so callers may resolve on every render.
    pub fn resolve(self, env_prefers_dark: bool) -> Appearance {
        match self {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => {
                if env_prefers_dark {
                    Appearance::Dark
                } else {
                    Appearance::Light
                }
            }
        }
    }

    /// Next mode in the Light -> Dark -> System cycle used by the navbar
    /// theme button.
    pub fn cycled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

impl Appearance {
    /// Class applied to the document root element.
    pub fn root_class(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    /// Value for the `theme-color` meta hint.
    pub fn meta_color(self) -> &'static str {
        match self {
            Appearance::Light => "#ffffff",
            Appearance::Dark => "#0a0a0f",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_environment_signal() {
        for signal in [false, true] {
            assert_eq!(ThemeMode::Light.resolve(signal), Appearance::Light);
            assert_eq!(ThemeMode::Dark.resolve(signal), Appearance::Dark);
        }
    }

    #[test]
    fn system_mode_follows_environment_signal() {
        assert_eq!(ThemeMode::System.resolve(true), Appearance::Dark);
        assert_eq!(ThemeMode::System.resolve(false), Appearance::Light);
    }

    #[test]
    fn cycle_visits_every_mode() {
        let start = ThemeMode::Light;
        let mut seen = vec![start];
        let mut mode = start;
        for _ in 0..2 {
            mode = mode.cycled();
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
        );
        assert_eq!(mode.cycled(), start);
    }

    #[test]
    fn serde_uses_lowercase_tokens() {
        assert_eq!(serde_json::to_string(&ThemeMode::System).unwrap(), "\"system\"");
        let parsed: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemeMode::Dark);
    }
}
