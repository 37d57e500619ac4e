//! Fixed top navigation: section links, theme cycle button, language
//! toggle, and the mobile hamburger menu.

#![allow(non_snake_case)]

use content::data::NAV_ITEMS;
use content::data::PROFILE;
use content::prefs::Language;
use content::prefs::ThemeMode;
use dioxus::prelude::*;

use crate::compat;
use crate::components::base::Button;
use crate::components::base::ButtonVariant;
use crate::hooks::use_is_mobile;
use crate::store::use_app_store;

fn theme_button_title(mode: ThemeMode, lang: Language) -> &'static str {
    match (mode, lang) {
        (ThemeMode::Light, Language::En) => "Theme: light",
        (ThemeMode::Light, Language::Fr) => "Thème : clair",
        (ThemeMode::Dark, Language::En) => "Theme: dark",
        (ThemeMode::Dark, Language::Fr) => "Thème : sombre",
        (ThemeMode::System, Language::En) => "Theme: system",
        (ThemeMode::System, Language::Fr) => "Thème : système",
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut store = use_app_store();
    let lang = store.language();
    let theme = store.theme();
    let is_mobile = use_is_mobile();

    let theme_icon = match theme {
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "☾",
        ThemeMode::System => "◐",
    };
    let theme_title = theme_button_title(theme, lang);
    // The toggle shows the language it switches to.
    let lang_label = lang.toggled().to_string().to_uppercase();

    rsx! {
        header { class: "navbar",
            nav { class: "navbar-inner",
                a {
                    class: "brand",
                    href: "#home",
                    onclick: move |event| {
                        event.prevent_default();
                        compat::scroll_to_section("home");
                        store.set_menu_open(false);
                    },
                    "{PROFILE.name}"
                }
                if !is_mobile() {
                    ul { class: "nav-links",
                        for item in NAV_ITEMS.iter() {
                            li {
                                a {
                                    href: "#{item.id}",
                                    onclick: move |event| {
                                        event.prevent_default();
                                        compat::scroll_to_section(item.id);
                                    },
                                    "{item.label.get(lang)}"
                                }
                            }
                        }
                    }
                }
                div { class: "nav-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        aria_label: theme_title.to_string(),
                        on_click: move |_| store.cycle_theme(),
                        "{theme_icon}"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        on_click: move |_| store.toggle_language(),
                        "{lang_label}"
                    }
                    if is_mobile() {
                        Button {
                            variant: ButtonVariant::Outline,
                            on_click: move |_| store.toggle_menu(),
                            "≡"
                        }
                    }
                }
            }
            if is_mobile() && store.menu_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| store.set_menu_open(false),
                }
                div { class: "mobile-menu",
                    for item in NAV_ITEMS.iter() {
                        a {
                            class: "mobile-menu-item",
                            href: "#{item.id}",
                            onclick: move |event| {
                                event.prevent_default();
                                compat::scroll_to_section(item.id);
                                store.set_menu_open(false);
                            },
                            "{item.label.get(lang)}"
                        }
                    }
                }
            }
        }
    }
}
