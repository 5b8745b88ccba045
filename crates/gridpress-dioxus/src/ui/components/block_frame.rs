use crate::ui::context::RenderMode;
use dioxus::prelude::*;
use gridpress_engine::layout::{AlignDirective, WidthClass, resolve};
use gridpress_engine::{Block, Cmd, Direction, registry};

/// Map a resolved width directive onto the frame's class vocabulary.
pub fn width_class_name(width: WidthClass) -> &'static str {
    match width {
        WidthClass::Third => "width-third",
        WidthClass::TwoThirds => "width-two-thirds",
        WidthClass::FiveSixths => "width-five-sixths",
        WidthClass::Full => "width-full",
    }
}

pub fn align_class_name(align: AlignDirective) -> &'static str {
    match align {
        AlignDirective::Start => "align-start",
        AlignDirective::Center => "align-center",
        AlignDirective::End => "align-end",
    }
}

/// Positioning wrapper around every rendered block.
///
/// Applies the shared layout policy (identically in both modes) and, in edit
/// mode only, the move/remove toolbar wired to the mutation commands.
#[component]
pub fn BlockFrame(
    block: Block,
    mode: RenderMode,
    on_command: Callback<Cmd>,
    children: Element,
) -> Element {
    // Unregistered kinds have no layout profile and render nothing.
    let Some(reg) = registry::lookup(&block.kind()) else {
        return rsx! {};
    };

    let resolved = resolve(&block.attrs.layout(), &reg.layout);
    let class = format!(
        "block-frame {} {}",
        width_class_name(resolved.width),
        align_class_name(resolved.align),
    );
    let id = block.id;

    rsx! {
        div {
            class: "{class}",
            if mode.is_edit() {
                div {
                    class: "block-toolbar",
                    span { class: "block-kind-label", "{reg.label}" }
                    button {
                        class: "move-up",
                        title: "Move up",
                        onclick: move |_| on_command.call(Cmd::MoveBlock {
                            id,
                            direction: Direction::Up,
                        }),
                        "↑"
                    }
                    button {
                        class: "move-down",
                        title: "Move down",
                        onclick: move |_| on_command.call(Cmd::MoveBlock {
                            id,
                            direction: Direction::Down,
                        }),
                        "↓"
                    }
                    button {
                        class: "remove-block",
                        title: "Remove",
                        onclick: move |_| on_command.call(Cmd::RemoveBlock { id }),
                        "✕"
                    }
                }
            }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use gridpress_engine::BlockKind;
    use gridpress_engine::Document;

    #[component]
    fn Harness(block: Block, mode: RenderMode) -> Element {
        rsx! {
            BlockFrame {
                block,
                mode,
                on_command: Callback::new(|_| {}),
                span { "content" }
            }
        }
    }

    fn frame_html(kind: &BlockKind, mode: RenderMode) -> String {
        let mut doc = Document::new();
        let id = doc.insert(kind, None).unwrap();
        let block = doc.get(id).unwrap().clone();

        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { block, mode });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn frame_applies_resolved_layout_classes() {
        let html = frame_html(&BlockKind::Quote, RenderMode::Publish);
        assert!(html.contains("width-two-thirds"));
        assert!(html.contains("align-center"));

        let html = frame_html(&BlockKind::Paragraph, RenderMode::Publish);
        assert!(html.contains("width-full"));
        assert!(html.contains("align-start"));
    }

    #[test]
    fn toolbar_only_exists_in_edit_mode() {
        let edit = frame_html(&BlockKind::Heading, RenderMode::Edit);
        let publish = frame_html(&BlockKind::Heading, RenderMode::Publish);
        assert!(edit.contains("block-toolbar"));
        assert!(!publish.contains("block-toolbar"));
    }

    #[test]
    fn layout_classes_agree_across_modes() {
        for reg in registry::all() {
            let edit = frame_html(&reg.kind, RenderMode::Edit);
            let publish = frame_html(&reg.kind, RenderMode::Publish);
            for class in [
                "width-third",
                "width-two-thirds",
                "width-five-sixths",
                "width-full",
                "align-start",
                "align-center",
                "align-end",
            ] {
                assert_eq!(
                    edit.contains(class),
                    publish.contains(class),
                    "layout class {class} diverges for {}",
                    reg.kind
                );
            }
        }
    }
}
