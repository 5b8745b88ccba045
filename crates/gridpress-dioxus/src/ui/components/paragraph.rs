use crate::ui::context::RenderMode;
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::ParagraphAttrs;
use gridpress_engine::blocks::patch::{BlockPatch, ParagraphPatch};
use gridpress_engine::{BlockId, Cmd};

#[component]
pub fn Paragraph(
    id: BlockId,
    attrs: ParagraphAttrs,
    mode: RenderMode,
    on_command: Callback<Cmd>,
) -> Element {
    let class = if attrs.drop_cap {
        "paragraph drop-cap"
    } else {
        "paragraph"
    };

    if mode.is_edit() {
        rsx! {
            div {
                class: "{class}",
                textarea {
                    class: "paragraph-input",
                    value: "{attrs.content}",
                    oninput: move |event: Event<FormData>| {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::Paragraph(ParagraphPatch {
                                content: Some(event.value()),
                                ..Default::default()
                            }),
                        });
                    }
                }
                label {
                    class: "drop-cap-toggle",
                    input {
                        r#type: "checkbox",
                        checked: attrs.drop_cap,
                        onchange: move |event: Event<FormData>| {
                            on_command.call(Cmd::UpdateBlock {
                                id,
                                patch: BlockPatch::Paragraph(ParagraphPatch {
                                    drop_cap: Some(event.checked()),
                                    ..Default::default()
                                }),
                            });
                        }
                    }
                    "Drop cap"
                }
            }
        }
    } else {
        rsx! {
            p { class: "{class}", "{attrs.content}" }
        }
    }
}
