use crate::ui::context::RenderMode;
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::ListAttrs;
use gridpress_engine::blocks::patch::{BlockPatch, ListPatch};
use gridpress_engine::{BlockId, Cmd};

#[component]
pub fn List(id: BlockId, attrs: ListAttrs, mode: RenderMode, on_command: Callback<Cmd>) -> Element {
    let items = attrs.items.clone();

    let rendered_items = rsx! {
        if attrs.ordered {
            ol {
                class: "list-items",
                for (index, item) in items.iter().enumerate() {
                    li { key: "{index}", "{item}" }
                }
            }
        } else {
            ul {
                class: "list-items",
                for (index, item) in items.iter().enumerate() {
                    li { key: "{index}", "{item}" }
                }
            }
        }
    };

    if mode.is_edit() {
        let joined = attrs.items.join("\n");
        return rsx! {
            div {
                class: "list-block",
                input {
                    class: "list-title-input",
                    placeholder: "List title",
                    value: "{attrs.title}",
                    oninput: move |event: Event<FormData>| {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::List(ListPatch {
                                title: Some(event.value()),
                                ..Default::default()
                            }),
                        });
                    }
                }
                textarea {
                    class: "list-items-input",
                    placeholder: "One item per line",
                    value: "{joined}",
                    oninput: move |event: Event<FormData>| {
                        let items: Vec<String> =
                            event.value().lines().map(str::to_string).collect();
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::List(ListPatch {
                                items: Some(items),
                                ..Default::default()
                            }),
                        });
                    }
                }
                label {
                    class: "list-ordered-toggle",
                    input {
                        r#type: "checkbox",
                        checked: attrs.ordered,
                        onchange: move |event: Event<FormData>| {
                            on_command.call(Cmd::UpdateBlock {
                                id,
                                patch: BlockPatch::List(ListPatch {
                                    ordered: Some(event.checked()),
                                    ..Default::default()
                                }),
                            });
                        }
                    }
                    "Numbered"
                }
                {rendered_items}
            }
        };
    }

    rsx! {
        div {
            class: "list-block",
            if !attrs.title.is_empty() {
                h3 { class: "list-title", "{attrs.title}" }
            }
            {rendered_items}
        }
    }
}
