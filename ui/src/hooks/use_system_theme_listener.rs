use content::prefs::ThemeMode;
use dioxus::prelude::*;

use crate::compat;
use crate::compat::MediaQueryGuard;
use crate::store::use_app_store;

/// Keeps the rendered appearance in sync with the environment while the
/// theme mode is `System`.
///
/// Scoped acquisition: entering `System` mode registers a listener on the
/// color-scheme media query, wrapped in an RAII guard; leaving `System`
/// (or unmounting, which drops the owning signal) drops the guard and with
/// it the registration. A change notification re-resolves and re-applies
/// the appearance without touching the stored theme value, so the user's
/// choice of "system" survives.
pub fn use_system_theme_listener() {
    let store = use_app_store();
    let mut guard: Signal<Option<MediaQueryGuard>> = use_signal(|| None);

    use_effect(move || {
        let mode = store.theme();
        if mode.is_system() {
            if guard.peek().is_none() {
                guard.set(MediaQueryGuard::watch_color_scheme(|prefers_dark| {
                    compat::apply_appearance(ThemeMode::System.resolve(prefers_dark));
                }));
            }
        } else if guard.peek().is_some() {
            guard.set(None);
        }
    });
}
