use dioxus::prelude::*;

use crate::compat;

/// Breakpoint below which the navbar collapses into the hamburger menu.
const MOBILE_BREAKPOINT: f64 = 768.0;

/// Whether the viewport is mobile-sized. Read once on mount; the layout
/// also degrades gracefully through CSS, so live resize tracking is not
/// needed.
pub fn use_is_mobile() -> Signal<bool> {
    let mut is_mobile = use_signal(|| false);
    use_effect(move || {
        is_mobile.set(compat::viewport_width() < MOBILE_BREAKPOINT);
    });
    is_mobile
}

/// Whether the environment asks for reduced motion. Gates the decorative
/// hero animation.
pub fn use_reduced_motion() -> Signal<bool> {
    let mut reduced = use_signal(|| false);
    use_effect(move || {
        reduced.set(compat::prefers_reduced_motion());
    });
    reduced
}
