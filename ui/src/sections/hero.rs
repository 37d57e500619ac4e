#![allow(non_snake_case)]

use content::data::PROFILE;
use content::i18n::ui_text;
use dioxus::prelude::*;

use crate::compat;
use crate::components::base::Button;
use crate::components::base::ButtonVariant;
use crate::hooks::use_reduced_motion;
use crate::store::use_app_store;

/// Landing section with the decorative animated backdrop. The backdrop is
/// purely visual and is skipped entirely when the environment asks for
/// reduced motion.
#[component]
pub fn HeroSection() -> Element {
    let store = use_app_store();
    let lang = store.language();
    let t = &ui_text(lang).hero;
    let reduced_motion = use_reduced_motion();
    let role = PROFILE.role.get(lang);

    rsx! {
        section { id: "home", class: "hero",
            if !reduced_motion() {
                div { class: "hero-orbs", aria_hidden: "true",
                    div { class: "orb orb-one" }
                    div { class: "orb orb-two" }
                    div { class: "orb orb-three" }
                }
            }
            div { class: "hero-content",
                p { class: "hero-greeting", "{t.greeting}" }
                h1 { class: "hero-name", "{PROFILE.name}" }
                h2 { class: "hero-role", "{role}" }
                p { class: "hero-tagline", "{t.tagline}" }
                div { class: "hero-actions",
                    Button {
                        on_click: move |_| compat::scroll_to_section("contact"),
                        "{t.cta_contact}"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        on_click: move |_| compat::scroll_to_section("about"),
                        "{t.cta_about}"
                    }
                }
            }
        }
    }
}
