use crate::ui::context::RenderMode;
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::{AspectRatio, ImageAttrs};
use gridpress_engine::blocks::patch::{BlockPatch, ImagePatch};
use gridpress_engine::{BlockId, Cmd};

fn aspect_class(ratio: AspectRatio) -> &'static str {
    match ratio {
        AspectRatio::Auto => "aspect-auto",
        AspectRatio::Widescreen => "aspect-wide",
        AspectRatio::Classic => "aspect-classic",
        AspectRatio::Square => "aspect-square",
    }
}

#[component]
pub fn Image(
    id: BlockId,
    attrs: ImageAttrs,
    mode: RenderMode,
    on_command: Callback<Cmd>,
) -> Element {
    let fit = if attrs.crop { "fit-crop" } else { "fit-contain" };
    let class = format!("image-block {} {fit}", aspect_class(attrs.aspect_ratio));

    let figure = rsx! {
        figure {
            class: "{class}",
            if attrs.url.is_empty() {
                div { class: "image-empty", "No image selected" }
            } else {
                img { src: "{attrs.url}", alt: "{attrs.alt}" }
            }
            if !attrs.credits.is_empty() {
                figcaption { class: "image-credits", "{attrs.credits}" }
            }
        }
    };

    if !mode.is_edit() {
        return figure;
    }

    rsx! {
        div {
            class: "image-editor",
            {figure}
            input {
                class: "image-url-input",
                placeholder: "Image URL",
                value: "{attrs.url}",
                oninput: move |event: Event<FormData>| {
                    on_command.call(Cmd::UpdateBlock {
                        id,
                        patch: BlockPatch::Image(ImagePatch {
                            url: Some(event.value()),
                            ..Default::default()
                        }),
                    });
                }
            }
            input {
                class: "image-alt-input",
                placeholder: "Alt text",
                value: "{attrs.alt}",
                oninput: move |event: Event<FormData>| {
                    on_command.call(Cmd::UpdateBlock {
                        id,
                        patch: BlockPatch::Image(ImagePatch {
                            alt: Some(event.value()),
                            ..Default::default()
                        }),
                    });
                }
            }
            input {
                class: "image-credits-input",
                placeholder: "Credits",
                value: "{attrs.credits}",
                oninput: move |event: Event<FormData>| {
                    on_command.call(Cmd::UpdateBlock {
                        id,
                        patch: BlockPatch::Image(ImagePatch {
                            credits: Some(event.value()),
                            ..Default::default()
                        }),
                    });
                }
            }
            label {
                class: "image-crop-toggle",
                input {
                    r#type: "checkbox",
                    checked: attrs.crop,
                    onchange: move |event: Event<FormData>| {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::Image(ImagePatch {
                                crop: Some(event.checked()),
                                ..Default::default()
                            }),
                        });
                    }
                }
                "Crop to frame"
            }
        }
    }
}
