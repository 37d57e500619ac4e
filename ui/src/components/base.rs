//! Small reusable building blocks shared by the page sections.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(optional)]
    pub on_click: Option<EventHandler<MouseEvent>>,
    /// Renders as a form submit button instead of a plain one.
    #[props(default = false)]
    pub submit: bool,
    #[props(optional)]
    pub aria_label: Option<String>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.variant.class(),
            r#type: if props.submit { "submit" } else { "button" },
            aria_label: props.aria_label,
            onclick: move |event| {
                if let Some(handler) = &props.on_click {
                    handler.call(event);
                }
            },
            {props.children}
        }
    }
}

/// A page section shell: anchors the scroll target id and renders the
/// localized heading pair above the body.
#[component]
pub fn Section(id: &'static str, title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        section {
            id: "{id}",
            class: "section",
            div { class: "section-head",
                h2 { "{title}" }
                p { class: "muted", "{subtitle}" }
            }
            {children}
        }
    }
}

#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        article { class: "card", {children} }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct InputProps {
    pub label: String,
    pub name: &'static str,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default = "text".to_string())]
    pub input_type: String,
    pub on_input: EventHandler<FormEvent>,
}

#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field-label", "{props.label}" }
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                oninput: move |event| props.on_input.call(event),
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub label: String,
    pub name: &'static str,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default = 5)]
    pub rows: u32,
    pub on_input: EventHandler<FormEvent>,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field-label", "{props.label}" }
            textarea {
                name: "{props.name}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                rows: "{props.rows}",
                oninput: move |event| props.on_input.call(event),
            }
        }
    }
}
