use dioxus::prelude::*;

/// Thematic break. Identical in both modes; nothing to edit.
#[component]
pub fn Divider() -> Element {
    rsx! {
        hr { class: "divider" }
    }
}
