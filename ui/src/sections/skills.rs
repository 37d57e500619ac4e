#![allow(non_snake_case)]

use content::data::Skill;
use content::data::SkillCategory;
use content::data::SKILLS;
use content::i18n::ui_text;
use dioxus::prelude::*;

use crate::components::base::Section;
use crate::store::use_app_store;

#[component]
pub fn SkillsSection() -> Element {
    let store = use_app_store();
    let lang = store.language();
    let t = &ui_text(lang).skills;

    // Group once per render; empty categories are not shown.
    let groups: Vec<(SkillCategory, Vec<&Skill>)> = SkillCategory::ALL
        .iter()
        .map(|&category| {
            let items: Vec<&Skill> = SKILLS
                .iter()
                .filter(|skill| skill.category == category)
                .collect();
            (category, items)
        })
        .filter(|(_, items)| !items.is_empty())
        .collect();

    rsx! {
        Section {
            id: "skills",
            title: t.title.to_string(),
            subtitle: t.subtitle.to_string(),
            div { class: "skills-grid",
                for (category, items) in groups {
                    div { class: "skill-group", key: "{category.label(lang)}",
                        h3 { "{category.label(lang)}" }
                        ul { class: "skill-list",
                            for skill in items {
                                li { class: "skill-row",
                                    span { "{skill.name}" }
                                    span { class: "badge", "{skill.level.label(lang)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
