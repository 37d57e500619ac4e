//! Platform seam between the store/views and the browser environment.
//!
//! The wasm32 module talks to the real browser APIs; the non-wasm module
//! provides inert defaults so the crate builds and its dependents test on
//! the host. Everything above this module is platform-independent.

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Media query consulted whenever the theme mode is `System`.
pub const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use content::prefs::Appearance;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::MediaQueryList;
    use web_sys::MediaQueryListEvent;

    use super::COLOR_SCHEME_QUERY;
    use super::REDUCED_MOTION_QUERY;

    pub fn storage_get(key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    pub fn storage_set(key: &str, value: &str) -> bool {
        match web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
            Some(storage) => storage.set_item(key, value).is_ok(),
            None => false,
        }
    }

    fn media_matches(query: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.match_media(query).ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false)
    }

    pub fn prefers_dark() -> bool {
        media_matches(COLOR_SCHEME_QUERY)
    }

    pub fn prefers_reduced_motion() -> bool {
        media_matches(REDUCED_MOTION_QUERY)
    }

    /// The environment's negotiated language list, most preferred first.
    pub fn negotiated_languages() -> Vec<String> {
        let Some(win) = web_sys::window() else {
            return Vec::new();
        };
        let navigator = win.navigator();
        let list: Vec<String> = navigator
            .languages()
            .iter()
            .filter_map(|value| value.as_string())
            .collect();
        if list.is_empty() {
            navigator.language().into_iter().collect()
        } else {
            list
        }
    }

    /// Applies a resolved appearance to the document: swaps the root
    /// element class and updates the `theme-color` meta hint.
    pub fn apply_appearance(appearance: Appearance) {
        let Some(document) = web_sys::window().and_then(|win| win.document()) else {
            return;
        };
        if let Some(root) = document.document_element() {
            let classes = root.class_list();
            let _ = classes.remove_2("light", "dark");
            let _ = classes.add_1(appearance.root_class());
        }
        if let Some(meta) = document
            .query_selector("meta[name='theme-color']")
            .ok()
            .flatten()
        {
            let _ = meta.set_attribute("content", appearance.meta_color());
        }
    }

    /// Smooth scrolling itself comes from `scroll-behavior` in the
    /// stylesheet; this only brings the target into view.
    pub fn scroll_to_section(id: &str) {
        if let Some(element) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id))
        {
            element.scroll_into_view();
        }
    }

    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            None => false,
        }
    }

    /// Navigates the page, used for the `mailto:` contact draft.
    pub fn navigate_to(url: &str) -> bool {
        web_sys::window()
            .map(|win| win.location().set_href(url).is_ok())
            .unwrap_or(false)
    }

    pub fn viewport_width() -> f64 {
        web_sys::window()
            .and_then(|win| win.inner_width().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(1280.0)
    }

    /// RAII registration on the color-scheme media query. The listener is
    /// removed when the guard drops, so holders get release on every exit
    /// path for free.
    pub struct MediaQueryGuard {
        mql: MediaQueryList,
        callback: Closure<dyn FnMut(MediaQueryListEvent)>,
    }

    impl MediaQueryGuard {
        pub fn watch_color_scheme(mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
            let mql = web_sys::window()?
                .match_media(COLOR_SCHEME_QUERY)
                .ok()
                .flatten()?;
            let callback = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                on_change(event.matches());
            }) as Box<dyn FnMut(MediaQueryListEvent)>);
            mql.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { mql, callback })
        }
    }

    impl Drop for MediaQueryGuard {
        fn drop(&mut self) {
            let _ = self.mql.remove_event_listener_with_callback(
                "change",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use content::prefs::Appearance;

    pub fn storage_get(_key: &str) -> Option<String> {
        None
    }

    pub fn storage_set(_key: &str, _value: &str) -> bool {
        false
    }

    pub fn prefers_dark() -> bool {
        false
    }

    pub fn prefers_reduced_motion() -> bool {
        false
    }

    pub fn negotiated_languages() -> Vec<String> {
        Vec::new()
    }

    pub fn apply_appearance(_appearance: Appearance) {}

    pub fn scroll_to_section(_id: &str) {}

    pub async fn clipboard_set(_text: String) -> bool {
        false
    }

    pub fn navigate_to(_url: &str) -> bool {
        false
    }

    pub fn viewport_width() -> f64 {
        1280.0
    }

    /// Host stand-in for the wasm guard; there is no environment signal to
    /// watch, so acquisition always fails.
    pub struct MediaQueryGuard;

    impl MediaQueryGuard {
        pub fn watch_color_scheme(_on_change: impl FnMut(bool) + 'static) -> Option<Self> {
            None
        }
    }
}
