use crate::ui::context::RenderMode;
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::QuoteAttrs;
use gridpress_engine::blocks::patch::{BlockPatch, QuotePatch};
use gridpress_engine::{BlockId, Cmd};

#[component]
pub fn Quote(
    id: BlockId,
    attrs: QuoteAttrs,
    mode: RenderMode,
    on_command: Callback<Cmd>,
) -> Element {
    if mode.is_edit() {
        return rsx! {
            div {
                class: "quote-block",
                textarea {
                    class: "quote-content-input",
                    placeholder: "Quote",
                    value: "{attrs.content}",
                    oninput: move |event: Event<FormData>| {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::Quote(QuotePatch {
                                content: Some(event.value()),
                                ..Default::default()
                            }),
                        });
                    }
                }
                input {
                    class: "quote-attribution-input",
                    placeholder: "Attribution",
                    value: "{attrs.attribution}",
                    oninput: move |event: Event<FormData>| {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::Quote(QuotePatch {
                                attribution: Some(event.value()),
                                ..Default::default()
                            }),
                        });
                    }
                }
            }
        };
    }

    rsx! {
        blockquote {
            class: "quote-block",
            p { class: "quote-content", "{attrs.content}" }
            if !attrs.attribution.is_empty() {
                footer { class: "quote-attribution", "{attrs.attribution}" }
            }
        }
    }
}
