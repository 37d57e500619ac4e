#![allow(non_snake_case)]

use content::data::EXPERIENCE;
use content::i18n::ui_text;
use dioxus::prelude::*;

use crate::components::base::Card;
use crate::components::base::Section;
use crate::store::use_app_store;

#[component]
pub fn ExperienceSection() -> Element {
    let store = use_app_store();
    let lang = store.language();
    let t = &ui_text(lang).experience;

    rsx! {
        Section {
            id: "experience",
            title: t.title.to_string(),
            subtitle: t.subtitle.to_string(),
            div { class: "timeline",
                for item in EXPERIENCE.iter() {
                    Card {
                        div { class: "timeline-head",
                            h3 { "{item.position.get(lang)}" }
                            if item.current {
                                span { class: "badge badge-accent", "{t.current_badge}" }
                            }
                        }
                        p { class: "timeline-meta",
                            "{item.company} · {item.location} · {item.period.get(lang)}"
                        }
                        p { "{item.description.get(lang)}" }
                        ul { class: "tech-list",
                            for tech in item.technologies.iter() {
                                li { class: "badge", "{tech}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
