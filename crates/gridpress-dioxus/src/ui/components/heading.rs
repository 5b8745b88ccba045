use crate::ui::context::RenderMode;
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::{HeadingAttrs, TextAlign};
use gridpress_engine::blocks::patch::{BlockPatch, HeadingPatch};
use gridpress_engine::{BlockId, Cmd};

fn text_align_class(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "text-left",
        TextAlign::Center => "text-center",
        TextAlign::Right => "text-right",
    }
}

#[component]
pub fn Heading(
    id: BlockId,
    attrs: HeadingAttrs,
    mode: RenderMode,
    on_command: Callback<Cmd>,
) -> Element {
    let level = attrs.clamped_level();
    let class = format!("heading level-{level} {}", text_align_class(attrs.text_align));

    if mode.is_edit() {
        return rsx! {
            div {
                class: "{class}",
                input {
                    class: "heading-input",
                    value: "{attrs.content}",
                    oninput: move |event: Event<FormData>| {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::Heading(HeadingPatch {
                                content: Some(event.value()),
                                ..Default::default()
                            }),
                        });
                    }
                }
                select {
                    class: "heading-level-select",
                    value: "{level}",
                    onchange: move |event: Event<FormData>| {
                        if let Ok(level) = event.value().parse::<u8>() {
                            on_command.call(Cmd::UpdateBlock {
                                id,
                                patch: BlockPatch::Heading(HeadingPatch {
                                    level: Some(level),
                                    ..Default::default()
                                }),
                            });
                        }
                    },
                    for option_level in 1u8..=6 {
                        option { value: "{option_level}", "H{option_level}" }
                    }
                }
            }
        };
    }

    let content = attrs.content;
    match level {
        1 => rsx! { h1 { class: "{class}", "{content}" } },
        2 => rsx! { h2 { class: "{class}", "{content}" } },
        3 => rsx! { h3 { class: "{class}", "{content}" } },
        4 => rsx! { h4 { class: "{class}", "{content}" } },
        5 => rsx! { h5 { class: "{class}", "{content}" } },
        _ => rsx! { h6 { class: "{class}", "{content}" } },
    }
}
