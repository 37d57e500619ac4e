//! Contact section: the mailto-backed form plus the copy-email shortcut.

#![allow(non_snake_case)]

use content::contact::ContactForm;
use content::data::PROFILE;
use content::data::SOCIAL_LINKS;
use content::i18n::ui_text;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::compat;
use crate::components::base::Button;
use crate::components::base::ButtonVariant;
use crate::components::base::Card;
use crate::components::base::Input;
use crate::components::base::Section;
use crate::components::base::TextArea;
use crate::store::use_app_store;

#[component]
pub fn ContactSection() -> Element {
    let mut store = use_app_store();
    let lang = store.language();
    let t = &ui_text(lang).contact;

    let mut form = use_signal(ContactForm::default);
    // Feedback line under the copy-email button; local because it only
    // concerns this widget.
    let mut copy_status = use_signal(|| None::<String>);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let lang = store.language();
        let snapshot = (*form.peek()).clone();
        // Validation gates the mail client: an invalid form surfaces a
        // localized message and never composes a draft.
        match snapshot.mailto_url(PROFILE.email, lang) {
            Ok(url) => {
                store.set_error(None);
                if !compat::navigate_to(&url) {
                    tracing::warn!("could not open the mail client");
                }
            }
            Err(err) => store.set_error(Some(err.message(lang).to_string())),
        }
    };

    let on_copy_email = move |_| {
        let lang = store.language();
        store.set_loading(true);
        spawn(async move {
            let mut store = store;
            let copied = compat::clipboard_set(PROFILE.email.to_string()).await;
            let t = &ui_text(lang).contact;
            let status = if copied {
                t.email_copied.to_string()
            } else {
                // Best effort only: degrade to a manual-copy prompt.
                format!("{} {}", t.copy_failed, PROFILE.email)
            };
            copy_status.set(Some(status));
            store.set_loading(false);
        });
    };

    rsx! {
        Section {
            id: "contact",
            title: t.title.to_string(),
            subtitle: t.subtitle.to_string(),
            div { class: "contact-grid",
                Card {
                    h3 { "{t.info_title}" }
                    p { "{t.description}" }
                    p { class: "contact-email",
                        a { href: "mailto:{PROFILE.email}", "{PROFILE.email}" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        on_click: on_copy_email,
                        if store.loading() { "…" } else { "{t.copy_email}" }
                    }
                    {copy_status().map(|status| rsx! {
                        p { class: "copy-status", "{status}" }
                    })}
                    h3 { "{t.social_title}" }
                    ul { class: "social-list",
                        for link in SOCIAL_LINKS.iter() {
                            li {
                                a {
                                    href: "{link.url}",
                                    target: "_blank",
                                    rel: "noreferrer",
                                    "{link.name}"
                                }
                            }
                        }
                    }
                }
                form { class: "contact-form", onsubmit: on_submit,
                    Input {
                        label: t.name_label.to_string(),
                        name: "name",
                        value: form().name,
                        placeholder: t.name_placeholder.to_string(),
                        on_input: move |event: FormEvent| form.write().name = event.value(),
                    }
                    Input {
                        label: t.email_label.to_string(),
                        name: "email",
                        value: form().email,
                        placeholder: t.email_placeholder.to_string(),
                        input_type: "email".to_string(),
                        on_input: move |event: FormEvent| form.write().email = event.value(),
                    }
                    Input {
                        label: t.subject_label.to_string(),
                        name: "subject",
                        value: form().subject,
                        placeholder: t.subject_placeholder.to_string(),
                        on_input: move |event: FormEvent| form.write().subject = event.value(),
                    }
                    TextArea {
                        label: t.message_label.to_string(),
                        name: "message",
                        value: form().message,
                        placeholder: t.message_placeholder.to_string(),
                        on_input: move |event: FormEvent| form.write().message = event.value(),
                    }
                    Button { submit: true, "{t.send}" }
                    p { class: "muted form-hint", "{t.opening_mail_client}" }
                }
            }
        }
    }
}
