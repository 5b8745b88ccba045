use crate::ui::context::RenderMode;
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::SliderAttrs;
use gridpress_engine::blocks::patch::{BlockPatch, SliderPatch};
use gridpress_engine::{BlockId, Cmd};

#[component]
pub fn Slider(
    id: BlockId,
    attrs: SliderAttrs,
    mode: RenderMode,
    on_command: Callback<Cmd>,
) -> Element {
    let images = attrs.images.clone();

    let track = rsx! {
        div {
            class: "slider-track",
            if images.is_empty() {
                div { class: "slider-empty", "No slides yet" }
            }
            for (index, image) in images.iter().enumerate() {
                figure {
                    key: "{index}",
                    class: "slider-slide",
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
                class: "slider-block",
                if !attrs.title.is_empty() {
                    h3 { class: "slider-title", "{attrs.title}" }
                }
                {track}
            }
        };
    }

    rsx! {
        div {
            class: "slider-block",
            input {
                class: "slider-title-input",
                placeholder: "Slider title",
                value: "{attrs.title}",
                oninput: move |event: Event<FormData>| {
                    on_command.call(Cmd::UpdateBlock {
                        id,
                        patch: BlockPatch::Slider(SliderPatch {
                            title: Some(event.value()),
                            ..Default::default()
                        }),
                    });
                }
            }
            {track}
        }
    }
}
