//! The reactive preference store: single source of truth for theme,
//! language, and transient UI flags.
//!
//! The store is an explicitly constructed context value (no hidden global):
//! the root component calls [`use_app_store_provider`] once and every view
//! obtains the same handle with [`use_app_store`]. The durable subset
//! (theme, language) is written back to storage after every mutation; the
//! transient flags never are.

use content::prefs::Appearance;
use content::prefs::Language;
use content::prefs::Preferences;
use content::prefs::ThemeMode;
use content::prefs::STORAGE_KEY;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::compat;

/// Reactive handle to the application state. `Copy`, so event handlers can
/// capture it freely; all fields are signals and share one backing state.
#[derive(Clone, Copy)]
pub struct AppStore {
    theme: Signal<ThemeMode>,
    language: Signal<Language>,
    menu_open: Signal<bool>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
}

/// Builds the store and provides it as a context. Call once, from the root.
///
/// Rehydration happens inside `use_hook`, before the first paint: the
/// stored subset is read, the effective appearance is resolved and applied
/// immediately so the page never flashes the wrong theme.
pub fn use_app_store_provider() -> AppStore {
    let prefs = use_hook(|| {
        let prefs = Preferences::rehydrate(
            compat::storage_get(STORAGE_KEY).as_deref(),
            &compat::negotiated_languages(),
        );
        compat::apply_appearance(prefs.theme.resolve(compat::prefers_dark()));
        tracing::info!(
            "rehydrated preferences: theme={} language={}",
            prefs.theme,
            prefs.language
        );
        prefs
    });

    let theme = use_signal(|| prefs.theme);
    let language = use_signal(|| prefs.language);
    let menu_open = use_signal(|| false);
    let loading = use_signal(|| false);
    let error = use_signal(|| None);

    use_context_provider(|| AppStore {
        theme,
        language,
        menu_open,
        loading,
        error,
    })
}

/// The store handle provided by the root component.
pub fn use_app_store() -> AppStore {
    use_context::<AppStore>()
}

impl AppStore {
    // --- Selectors (reactive reads) ---

    pub fn theme(&self) -> ThemeMode {
        (self.theme)()
    }

    pub fn language(&self) -> Language {
        (self.language)()
    }

    pub fn menu_open(&self) -> bool {
        (self.menu_open)()
    }

    pub fn loading(&self) -> bool {
        (self.loading)()
    }

    pub fn error(&self) -> Option<String> {
        (self.error)()
    }

    /// The appearance to render right now. Recomputed from the mode and the
    /// live environment signal on every call, never cached.
    pub fn resolved_appearance(&self) -> Appearance {
        self.theme().resolve(compat::prefers_dark())
    }

    // --- Actions ---

    /// Selects a theme mode: applies the resolved appearance to the
    /// document, updates state, and persists the durable subset.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        compat::apply_appearance(mode.resolve(compat::prefers_dark()));
        self.theme.set(mode);
        self.persist();
    }

    /// Advances the navbar's Light -> Dark -> System cycle.
    pub fn cycle_theme(&mut self) {
        let next = self.theme.peek().cycled();
        self.set_theme(next);
    }

    pub fn set_language(&mut self, language: Language) {
        self.language.set(language);
        self.persist();
    }

    pub fn toggle_language(&mut self) {
        let next = self.language.peek().toggled();
        self.set_language(next);
    }

    pub fn toggle_menu(&mut self) {
        let open = !*self.menu_open.peek();
        self.menu_open.set(open);
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open.set(open);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error.set(error);
    }

    /// Best-effort write of the durable subset. Failure is logged, never
    /// surfaced: the in-memory state is already correct for this session.
    fn persist(&self) {
        let prefs = Preferences {
            theme: *self.theme.peek(),
            language: *self.language.peek(),
        };
        match prefs.to_stored().encode() {
            Ok(raw) => {
                if !compat::storage_set(STORAGE_KEY, &raw) {
                    tracing::warn!("could not persist preferences to storage");
                }
            }
            Err(err) => tracing::warn!("could not encode preferences: {err}"),
        }
    }
}
