use dioxus::prelude::*;
use gridpress_engine::{Cmd, registry};

/// One button per registered block type, appending a new block with that
/// type's default attributes.
#[component]
pub fn InsertMenu(on_command: Callback<Cmd>) -> Element {
    rsx! {
        div {
            class: "insert-menu",
            span { class: "insert-menu-title", "Add block:" }
            for reg in registry::all() {
                button {
                    key: "{reg.kind.tag()}",
                    class: "insert-block-button",
                    onclick: move |_| on_command.call(Cmd::InsertBlock {
                        kind: reg.kind.clone(),
                        at: None,
                    }),
                    "{reg.label}"
                }
            }
        }
    }
}
