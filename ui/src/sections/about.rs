#![allow(non_snake_case)]

use content::data::PROFILE;
use content::i18n::ui_text;
use dioxus::prelude::*;

use crate::components::base::Card;
use crate::components::base::Section;
use crate::store::use_app_store;

#[component]
pub fn AboutSection() -> Element {
    let store = use_app_store();
    let lang = store.language();
    let t = &ui_text(lang).about;
    let location = PROFILE.location.get(lang);

    rsx! {
        Section {
            id: "about",
            title: t.title.to_string(),
            subtitle: t.subtitle.to_string(),
            div { class: "about-grid",
                div { class: "about-text",
                    for paragraph in t.paragraphs.iter() {
                        p { "{paragraph}" }
                    }
                }
                Card {
                    dl { class: "about-facts",
                        dt { "{t.location_label}" }
                        dd { "{location}" }
                        dt { "{t.experience_label}" }
                        dd { "{t.experience_value}" }
                        dt { "{t.languages_label}" }
                        dd { "{t.languages_value}" }
                    }
                }
            }
        }
    }
}
