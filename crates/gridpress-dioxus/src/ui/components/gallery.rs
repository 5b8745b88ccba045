use crate::ui::context::RenderMode;
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::GalleryAttrs;
use gridpress_engine::blocks::patch::{BlockPatch, GalleryPatch};
use gridpress_engine::{BlockId, Cmd};

#[component]
pub fn Gallery(
    id: BlockId,
    attrs: GalleryAttrs,
    mode: RenderMode,
    on_command: Callback<Cmd>,
) -> Element {
    let images = attrs.images.clone();

    let grid = rsx! {
        div {
            class: "gallery-grid",
            if images.is_empty() {
                div { class: "gallery-empty", "No images yet" }
            }
            for (index, image) in images.iter().enumerate() {
                figure {
                    key: "{index}",
                    class: "gallery-item",
                    img { src: "{image.url}", alt: "{image.alt}" }
                    if !image.credits.is_empty() {
                        figcaption { class: "image-credits", "{image.credits}" }
                    }
                }
            }
        }
    };

    if !mode.is_edit() {
        return rsx! {
            div {
                class: "gallery-block",
                if !attrs.title.is_empty() {
                    h3 { class: "gallery-title", "{attrs.title}" }
                }
                {grid}
            }
        };
    }

    rsx! {
        div {
            class: "gallery-block",
            input {
                class: "gallery-title-input",
                placeholder: "Gallery title",
                value: "{attrs.title}",
                oninput: move |event: Event<FormData>| {
                    on_command.call(Cmd::UpdateBlock {
                        id,
                        patch: BlockPatch::Gallery(GalleryPatch {
                            title: Some(event.value()),
                            ..Default::default()
                        }),
                    });
                }
            }
            {grid}
        }
    }
}
